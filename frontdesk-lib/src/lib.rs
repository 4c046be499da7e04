//! Frontdesk back-office library
//!
//! Row types decoded from the booking backend, reservation status badges,
//! translations, settings validation and ready-made table presets built on
//! [`tabula`].

pub mod error;
pub mod i18n;
pub mod model;
pub mod resource;
pub mod settings;
pub mod status;
pub mod tables;

pub use error::{Error, Result};
pub use i18n::Translations;
pub use resource::{ResourceError, ResourceState};
pub use status::{ReservationStatus, StatusBadge};
pub use tables::TableKind;
