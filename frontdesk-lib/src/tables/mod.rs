//! Ready-made tables for the back-office pages.

mod rates;
mod reservations;
mod rooms;

pub use rates::*;
pub use reservations::*;
pub use rooms::*;

use std::fmt;
use std::str::FromStr;

use tabula::{CellValue, TableOptions, VisibilitySeed};

use crate::error::Error;
use crate::i18n::Translations;

/// The back-office listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableKind {
    #[default]
    Reservations,
    Rooms,
    Rates,
}

impl TableKind {
    /// Translation namespace of this listing.
    fn namespace(self) -> &'static str {
        match self {
            Self::Reservations => "reservations",
            Self::Rooms => "rooms",
            Self::Rates => "rates",
        }
    }

    /// Columns searched by the global filter.
    pub fn search_columns(self) -> &'static [&'static str] {
        match self {
            Self::Reservations => &["guest", "room_type", "status"],
            Self::Rooms => &["room_number", "type", "status"],
            Self::Rates => &["room_type", "description"],
        }
    }

    /// Columns hidden until the user shows them.
    pub fn hidden_by_default(self) -> &'static [&'static str] {
        match self {
            Self::Reservations => &["created_at"],
            Self::Rooms => &[],
            Self::Rates => &["max_adult", "max_child"],
        }
    }

    /// Table options for this listing: translated title and search
    /// placeholder, search columns, and the default visibility.
    pub fn options(self, translations: &Translations, page_size: usize) -> TableOptions {
        let ns = self.namespace();
        let visibility: VisibilitySeed = self
            .hidden_by_default()
            .iter()
            .map(|column| (*column, false))
            .collect();
        TableOptions::new()
            .title(translations.text(&format!("{}.title", ns)))
            .search_placeholder(translations.text(&format!("{}.search", ns)))
            .search_columns(self.search_columns().iter().copied())
            .page_size(page_size)
            .visibility(visibility)
    }
}

impl FromStr for TableKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reservations" => Ok(Self::Reservations),
            "rooms" => Ok(Self::Rooms),
            "rates" | "room-rates" => Ok(Self::Rates),
            _ => Err(Error::UnknownKind(s.to_string())),
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.namespace())
    }
}

/// Two-decimal rendering for money cells.
pub(crate) fn money(value: &CellValue) -> String {
    match value {
        CellValue::Decimal(d) => format!("{:.2}", d.round_dp(2)),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_parse_kind() {
        assert_eq!("Rooms".parse::<TableKind>().unwrap(), TableKind::Rooms);
        assert_eq!("room-rates".parse::<TableKind>().unwrap(), TableKind::Rates);
        assert!(matches!(
            "guests".parse::<TableKind>(),
            Err(Error::UnknownKind(kind)) if kind == "guests"
        ));
    }

    #[test]
    fn test_options_are_translated() {
        let options = TableKind::Rates.options(&Translations::english(), 10);
        assert_eq!(options.title, "Room Rates");
        assert_eq!(options.page_size, 10);
        assert_eq!(options.column_to_search, vec!["room_type", "description"]);
    }

    #[test]
    fn test_money() {
        assert_eq!(money(&CellValue::Decimal(Decimal::new(250050, 2))), "2500.50");
        assert_eq!(money(&CellValue::Decimal(Decimal::from(3000))), "3000.00");
    }
}
