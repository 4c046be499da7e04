use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A booking as listed on the reservations page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Reservation {
    pub id: i64,
    pub room_count: u32,
    pub room_type_id: i64,
    pub check_in_date: DateTime<Utc>,
    pub check_out_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub guest_id: Option<i64>,
    pub status_id: i64,
    #[serde(default)]
    pub extra_child: u32,
    #[serde(default)]
    pub extra_adult: u32,
    pub reservation_type_id: i64,
    #[serde(rename = "isDeleted", default)]
    pub is_deleted: bool,
    #[serde(rename = "isBilled", default)]
    pub is_billed: bool,
    /// Raw status name, e.g. `Checked-In`.
    pub reservation_status: String,
    pub room_type: String,
    pub reservation_type: String,
    /// `None` for reservations without a guest record.
    #[serde(default)]
    pub guest_data: Option<GuestData>,
    #[serde(default)]
    pub remarks: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GuestData {
    pub first_name: String,
    pub last_name: String,
}

impl GuestData {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

impl Reservation {
    /// Guest's full name, if the reservation has guest data.
    pub fn guest_name(&self) -> Option<String> {
        self.guest_data.as_ref().map(GuestData::full_name)
    }

    /// Number of nights between check-in and check-out dates.
    pub fn nights(&self) -> i64 {
        (self.check_out_date.date_naive() - self.check_in_date.date_naive()).num_days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "Id": 7,
        "RoomCount": 1,
        "RoomTypeId": 2,
        "CheckInDate": "2024-05-01T00:00:00.000Z",
        "CheckOutDate": "2024-05-04T00:00:00.000Z",
        "CreatedAt": "2024-04-20T08:30:00.000Z",
        "GuestId": null,
        "StatusId": 1,
        "ExtraChild": 1,
        "ExtraAdult": 2,
        "ReservationTypeId": 1,
        "isDeleted": false,
        "isBilled": true,
        "ReservationStatus": "Checked-In",
        "RoomType": "Deluxe",
        "ReservationType": "Online",
        "GuestData": {"FirstName": "Juan", "LastName": "Dela Cruz"},
        "Remarks": ""
    }"#;

    #[test]
    fn test_decode_reservation() {
        let r: Reservation = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(r.id, 7);
        assert!(r.is_billed);
        assert_eq!(r.guest_id, None);
        assert_eq!(r.guest_name().as_deref(), Some("Juan Dela Cruz"));
        assert_eq!(r.reservation_status, "Checked-In");
        assert_eq!(r.nights(), 3);
        assert_eq!((r.extra_adult, r.extra_child), (2, 1));
    }

    #[test]
    fn test_null_guest_data() {
        let json = SAMPLE.replace(
            r#""GuestData": {"FirstName": "Juan", "LastName": "Dela Cruz"}"#,
            r#""GuestData": null"#,
        );
        let r: Reservation = serde_json::from_str(&json).unwrap();
        assert_eq!(r.guest_name(), None);
    }
}
