//! Back-office row types, decoded from the backend's JSON.

mod config;
mod rate;
mod reservation;
mod room;

pub use config::*;
pub use rate::*;
pub use reservation::*;
pub use room::*;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

#[derive(Deserialize)]
#[serde(untagged)]
enum RowsEnvelope<T> {
    Bare(Vec<T>),
    Wrapped { data: Vec<T> },
}

/// Decode a list of rows.
///
/// Accepts a bare JSON array or an object with the array under `data`.
pub fn rows_from_json<T: DeserializeOwned>(json: &str, what: &'static str) -> Result<Vec<T>> {
    let envelope: RowsEnvelope<T> =
        serde_json::from_str(json).map_err(|e| Error::decode(what, e))?;
    Ok(match envelope {
        RowsEnvelope::Bare(rows) => rows,
        RowsEnvelope::Wrapped { data } => data,
    })
}
