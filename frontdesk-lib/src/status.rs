//! Reservation status and its badge.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::i18n::Translations;

/// Lifecycle status of a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReservationStatus {
    Pending,
    #[serde(rename = "Checked-In")]
    CheckedIn,
    Done,
    Cancelled,
    Booked,
    Completed,
}

impl ReservationStatus {
    pub const ALL: [ReservationStatus; 6] = [
        Self::Pending,
        Self::CheckedIn,
        Self::Done,
        Self::Cancelled,
        Self::Booked,
        Self::Completed,
    ];

    /// Name used by the backend.
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::CheckedIn => "Checked-In",
            Self::Done => "Done",
            Self::Cancelled => "Cancelled",
            Self::Booked => "Booked",
            Self::Completed => "Completed",
        }
    }

    pub fn color(self) -> BadgeColor {
        match self {
            Self::Pending => BadgeColor::Gray,
            Self::CheckedIn => BadgeColor::Green,
            Self::Done => BadgeColor::Black,
            Self::Cancelled => BadgeColor::Red,
            Self::Booked => BadgeColor::Orange,
            Self::Completed => BadgeColor::Blue,
        }
    }

    /// Translation key of the status label.
    pub fn translation_key(self) -> String {
        format!("general.status.{}", self.wire_name())
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Error for status names that are not known.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown reservation status '{0}'")]
pub struct UnknownStatus(pub String);

impl FromStr for ReservationStatus {
    type Err = UnknownStatus;

    /// Parses the wire name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.wire_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// Badge colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeColor {
    Gray,
    Green,
    Black,
    Red,
    Orange,
    Blue,
    /// Used for statuses without a colour of their own.
    Neutral,
}

impl BadgeColor {
    /// Stylesheet class for web front-ends.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Gray => "bg-gray-500",
            Self::Green => "bg-green-500",
            Self::Black => "bg-black",
            Self::Red => "bg-red-500",
            Self::Orange => "bg-orange-500",
            Self::Blue => "bg-blue-500",
            Self::Neutral => "bg-slate-300",
        }
    }
}

/// A status label with its colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: String,
    pub color: BadgeColor,
}

impl StatusBadge {
    /// Badge for a raw status name.
    ///
    /// Known statuses get a translated label; anything else shows its raw
    /// text on a neutral badge.
    pub fn for_status(status: &str, translations: &Translations) -> Self {
        match status.parse::<ReservationStatus>() {
            Ok(known) => Self {
                label: translations.text_or(&known.translation_key(), known.wire_name()),
                color: known.color(),
            },
            Err(_) => Self {
                label: status.to_string(),
                color: BadgeColor::Neutral,
            },
        }
    }
}

impl fmt::Display for StatusBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wire_names() {
        assert_eq!("Checked-In".parse(), Ok(ReservationStatus::CheckedIn));
        assert_eq!("cancelled".parse(), Ok(ReservationStatus::Cancelled));
        assert!("Lost".parse::<ReservationStatus>().is_err());
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&ReservationStatus::CheckedIn).unwrap();
        assert_eq!(json, "\"Checked-In\"");
    }

    #[test]
    fn test_colors() {
        assert_eq!(ReservationStatus::Pending.color().css_class(), "bg-gray-500");
        assert_eq!(ReservationStatus::Done.color().css_class(), "bg-black");
        assert_eq!(ReservationStatus::Booked.color(), BadgeColor::Orange);
    }

    #[test]
    fn test_badge_for_unknown_status() {
        let badge = StatusBadge::for_status("No-Show", &Translations::english());
        assert_eq!(badge.color, BadgeColor::Neutral);
        assert_eq!(badge.to_string(), "[No-Show]");
    }

    #[test]
    fn test_badge_label_translated() {
        let badge = StatusBadge::for_status("Checked-In", &Translations::english());
        assert_eq!(badge.label, "Checked In");
        assert_eq!(badge.color, BadgeColor::Green);
    }
}
