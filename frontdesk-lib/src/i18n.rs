//! Translations.
//!
//! Dictionaries are nested JSON objects looked up by dotted key
//! (`general.status.Pending`). A translations file holds one dictionary per
//! language:
//!
//! ```json
//! { "en": { "general": { "next": "Next" } }, "fil": { "general": { "next": "Susunod" } } }
//! ```
//!
//! Lookups fall back to the built-in English dictionary, then to the key
//! itself.

use std::path::Path;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde_json::{Value, json};
use tabula::Labels;
use tabula::labels::group_thousands;

use crate::error::{Error, Result};

static ENGLISH: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "general": {
            "previous": "Previous",
            "next": "Next",
            "columns": "Columns",
            "noResults": "No results.",
            "loading": "Loading...",
            "search": "Search",
            "showing": "Showing {shown} of {total} rows.",
            "status": {
                "Pending": "Pending",
                "Checked-In": "Checked In",
                "Done": "Done",
                "Cancelled": "Cancelled",
                "Booked": "Booked",
                "Completed": "Completed"
            }
        },
        "reservations": {
            "title": "Reservations",
            "id": "No.",
            "guest": "Guest",
            "roomType": "Room Type",
            "checkIn": "Check-in",
            "checkOut": "Check-out",
            "nights": "Nights",
            "status": "Status",
            "type": "Type",
            "createdAt": "Booked On",
            "search": "Search guest, room type or status"
        },
        "rooms": {
            "title": "Rooms",
            "number": "Room",
            "type": "Type",
            "status": "Status",
            "createdAt": "Added On",
            "search": "Search room number or type"
        },
        "rates": {
            "title": "Room Rates",
            "roomType": "Room Type",
            "description": "Description",
            "base": "Base Rate",
            "weekend": "Weekend Rate",
            "extraAdult": "Extra Adult",
            "extraChild": "Extra Child",
            "maxAdult": "Max Adults",
            "maxChild": "Max Children",
            "search": "Search room type or description"
        }
    })
});

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(\w+)\}").expect("placeholder pattern is valid"));

/// A language's dictionary.
#[derive(Debug, Clone)]
pub struct Translations {
    language: String,
    strings: Value,
}

impl Default for Translations {
    fn default() -> Self {
        Self::english()
    }
}

impl Translations {
    /// The built-in English dictionary.
    pub fn english() -> Self {
        Self {
            language: "en".into(),
            strings: ENGLISH.clone(),
        }
    }

    /// Wrap an already-decoded dictionary.
    pub fn from_value(language: impl Into<String>, strings: Value) -> Self {
        Self {
            language: language.into(),
            strings,
        }
    }

    /// Pick one language out of a multi-language JSON document.
    pub fn from_json(language: &str, json: &str) -> Result<Self> {
        let mut document: Value =
            serde_json::from_str(json).map_err(|e| Error::decode("translations", e))?;
        match document.get_mut(language).map(Value::take) {
            Some(strings) if strings.is_object() => Ok(Self::from_value(language, strings)),
            _ => Err(Error::MissingLanguage(language.to_string())),
        }
    }

    /// Load a language from a translations file.
    pub fn load(language: &str, path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let translations = Self::from_json(language, &json)?;
        log::info!("Loaded '{}' translations from {}", language, path.display());
        Ok(translations)
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Look up a key, falling back to English.
    pub fn get(&self, key: &str) -> Option<&str> {
        lookup(&self.strings, key).or_else(|| lookup(&ENGLISH, key))
    }

    /// Text for a key, or the key itself when nothing is found.
    pub fn text(&self, key: &str) -> String {
        self.text_or(key, key)
    }

    /// Text for a key, or `fallback` when nothing is found.
    pub fn text_or(&self, key: &str, fallback: &str) -> String {
        match self.get(key) {
            Some(text) => text.to_string(),
            None => {
                log::debug!("missing translation '{}' for '{}'", key, self.language);
                fallback.to_string()
            }
        }
    }

    /// Text for a key with `{name}` placeholders filled in.
    ///
    /// Placeholders without a matching argument are left as they are.
    pub fn format(&self, key: &str, args: &[(&str, &str)]) -> String {
        let template = self.text(key);
        PLACEHOLDER
            .replace_all(&template, |caps: &Captures| {
                let name = &caps[1];
                match args.iter().find(|(arg, _)| *arg == name) {
                    Some((_, value)) => value.to_string(),
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }
}

fn lookup<'a>(tree: &'a Value, key: &str) -> Option<&'a str> {
    key.split('.')
        .try_fold(tree, |node, part| node.get(part))?
        .as_str()
}

impl Labels for Translations {
    fn search_placeholder(&self) -> String {
        self.text("general.search")
    }

    fn columns(&self) -> String {
        self.text("general.columns")
    }

    fn previous(&self) -> String {
        self.text("general.previous")
    }

    fn next(&self) -> String {
        self.text("general.next")
    }

    fn no_results(&self) -> String {
        self.text("general.noResults")
    }

    fn loading(&self) -> String {
        self.text("general.loading")
    }

    fn showing(&self, page_rows: usize, total_rows: usize) -> String {
        let shown = group_thousands(page_rows);
        let total = group_thousands(total_rows);
        self.format("general.showing", &[("shown", shown.as_str()), ("total", total.as_str())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FILIPINO: &str = r#"{
        "fil": {
            "general": {
                "previous": "Nakaraan",
                "next": "Susunod",
                "showing": "Ipinapakita ang {shown} sa {total} na hilera.",
                "status": { "Pending": "Nakabinbin" }
            }
        }
    }"#;

    #[test]
    fn test_english_labels() {
        let en = Translations::english();
        assert_eq!(en.previous(), "Previous");
        assert_eq!(en.no_results(), "No results.");
        assert_eq!(en.showing(20, 1500), "Showing 20 of 1,500 rows.");
    }

    #[test]
    fn test_language_with_fallback() {
        let fil = Translations::from_json("fil", FILIPINO).unwrap();
        assert_eq!(fil.language(), "fil");
        assert_eq!(fil.next(), "Susunod");
        assert_eq!(fil.text("general.status.Pending"), "Nakabinbin");
        // not in the Filipino dictionary
        assert_eq!(fil.no_results(), "No results.");
        assert_eq!(fil.showing(5, 45), "Ipinapakita ang 5 sa 45 na hilera.");
    }

    #[test]
    fn test_missing_key_returns_key() {
        let en = Translations::english();
        assert_eq!(en.text("general.nope"), "general.nope");
        assert_eq!(en.text("general"), "general");
    }

    #[test]
    fn test_missing_language() {
        let err = Translations::from_json("de", FILIPINO).unwrap_err();
        assert!(matches!(err, Error::MissingLanguage(lang) if lang == "de"));
    }

    #[test]
    fn test_unknown_placeholder_kept() {
        let t = Translations::from_value("en", json!({ "x": "{a} and {b}" }));
        assert_eq!(t.format("x", &[("a", "1")]), "1 and {b}");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("translations.json");
        std::fs::write(&path, FILIPINO).unwrap();

        let fil = Translations::load("fil", &path).unwrap();
        assert_eq!(fil.previous(), "Nakaraan");

        let missing = Translations::load("fil", &dir.path().join("absent.json"));
        assert!(matches!(missing, Err(Error::Io { .. })));
    }
}
