use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A physical room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Room {
    pub id: String,
    pub room_number: u32,
    pub type_name: String,
    pub status_name: String,
    pub created_at: DateTime<Utc>,
    pub room_type_id: i64,
    pub status_id: i64,
}

/// A room category with its bed type and room count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RoomType {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub max_adult: u32,
    pub max_child: u32,
    pub rooms: RoomCount,
    pub bed_types: BedType,
    #[serde(default)]
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomCount {
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BedType {
    pub id: String,
    pub type_name: String,
    pub created_at: DateTime<Utc>,
}

/// An amenity offered with a room type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RoomAmenity {
    pub id: i64,
    pub label: String,
    #[serde(default)]
    pub description: String,
}

/// Amenities grouped by room type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RoomAmenityResponse {
    pub room_type_id: i64,
    pub amenities: Vec<RoomAmenity>,
}
