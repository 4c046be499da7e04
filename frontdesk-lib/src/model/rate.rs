use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Nightly pricing for a room type under one rate type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RoomRate {
    #[serde(rename = "RoomRateID")]
    pub room_rate_id: i64,
    pub rate_type_id: i64,
    pub room_type_id: i64,
    pub room_type: String,
    pub max_adult: u32,
    pub max_child: u32,
    #[serde(default)]
    pub description: String,
    pub bed_type_id: i64,
    pub base_room_rate: Decimal,
    pub extra_adult_rate: Decimal,
    pub extra_child_rate: Decimal,
    pub weekend_room_rate: Decimal,
    pub weekend_extra_adult_rate: Decimal,
    pub weekend_extra_child_rate: Decimal,
    pub created_at: DateTime<Utc>,
}
