//! Error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading back-office data and translations.
#[derive(Debug, Error)]
pub enum Error {
    /// JSON could not be decoded into the expected shape.
    #[error("failed to decode {what}: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A translations file has no dictionary for the requested language.
    #[error("no translations for language '{0}'")]
    MissingLanguage(String),

    /// A table kind name was not recognised.
    #[error("unknown table kind '{0}' (expected reservations, rooms or rates)")]
    UnknownKind(String),
}

impl Error {
    pub(crate) fn decode(what: &'static str, source: serde_json::Error) -> Self {
        Self::Decode { what, source }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
