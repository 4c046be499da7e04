use std::path::PathBuf;

use frontdesk_lib::ResourceError;
use thiserror::Error;

/// Errors surfaced to the user by the command-line front-end.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Args(#[from] pico_args::Error),

    #[error("unexpected arguments: {0}")]
    UnexpectedArgs(String),

    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid log level '{0}'")]
    LogLevel(String),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Lib(#[from] frontdesk_lib::Error),

    #[error("failed to load rows: {0}")]
    Load(#[from] ResourceError),

    #[error("logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
}

impl CliError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
