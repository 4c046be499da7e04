//! Command-line front-end for the back-office tables.

pub mod app;
pub mod args;
pub mod config;
pub mod error;
pub mod paths;

pub use args::Args;
pub use config::AppConfig;
pub use error::CliError;
