use std::fs;
use std::path::PathBuf;

use frontdesk_cli::{AppConfig, Args, CliError, app};
use frontdesk_lib::{ReservationStatus, TableKind};
use tabula::SortSpec;

fn rooms_json(count: usize) -> String {
    let rooms: Vec<String> = (1..=count)
        .map(|n| {
            format!(
                r#"{{"Id": "r{n}", "RoomNumber": {num}, "TypeName": "{ty}", "StatusName": "{st}",
                    "CreatedAt": "2024-01-0{day}T00:00:00Z", "RoomTypeId": 1, "StatusId": 1}}"#,
                n = n,
                num = 100 + n,
                ty = if n % 2 == 0 { "Family" } else { "Deluxe" },
                st = if n % 3 == 0 { "Occupied" } else { "Vacant" },
                day = 1 + n % 9,
            )
        })
        .collect();
    format!("[{}]", rooms.join(","))
}

fn write_rows(dir: &tempfile::TempDir, json: &str) -> PathBuf {
    let path = dir.path().join("rows.json");
    fs::write(&path, json).unwrap();
    path
}

fn rooms_args(rows: PathBuf) -> Args {
    Args {
        kind: TableKind::Rooms,
        rows: Some(rows),
        ..Args::default()
    }
}

#[test]
fn test_rooms_listing() {
    let dir = tempfile::tempdir().unwrap();
    let args = rooms_args(write_rows(&dir, &rooms_json(3)));

    let out = app::run(&args, &AppConfig::default()).unwrap();
    assert!(out.starts_with("Rooms\n"));
    assert!(out.contains("101"));
    assert!(out.contains("Occupied"));
    assert!(out.trim_end().ends_with("Showing 3 of 3 rows."));
    // three rows fit on one page
    assert!(!out.contains("[Next]"));
}

#[test]
fn test_search_sort_and_page() {
    let dir = tempfile::tempdir().unwrap();
    let args = Args {
        search: Some("family".into()),
        sort: vec![SortSpec::desc("room_number")],
        page_size: Some(2),
        page: Some(2),
        ..rooms_args(write_rows(&dir, &rooms_json(9)))
    };

    let out = app::run(&args, &AppConfig::default()).unwrap();
    // family rooms 102, 104, 106, 108; page 2 of the descending order
    assert!(out.contains("104"));
    assert!(out.contains("102"));
    assert!(!out.contains("108"));
    assert!(out.contains("[Previous] (Next)"));
    assert!(out.trim_end().ends_with("Showing 2 of 4 rows."));
}

#[test]
fn test_page_size_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let args = rooms_args(write_rows(&dir, &rooms_json(9)));
    let config = AppConfig {
        page_size: 4,
        ..AppConfig::default()
    };

    let out = app::run(&args, &config).unwrap();
    assert!(out.trim_end().ends_with("Showing 4 of 9 rows."));
}

#[test]
fn test_loading_placeholder() {
    let args = Args {
        kind: TableKind::Rates,
        loading: true,
        ..Args::default()
    };
    let out = app::run(&args, &AppConfig::default()).unwrap();
    assert!(out.contains("Loading..."));
    assert!(out.starts_with("Room Rates\n"));
}

#[test]
fn test_no_results() {
    let dir = tempfile::tempdir().unwrap();
    let args = Args {
        filters: vec![("type".into(), "penthouse".into())],
        ..rooms_args(write_rows(&dir, &rooms_json(3)))
    };
    let out = app::run(&args, &AppConfig::default()).unwrap();
    assert!(out.contains("No results."));
    assert!(out.trim_end().ends_with("Showing 0 of 0 rows."));
}

const RESERVATIONS: &str = r#"[
    {"Id": 1, "RoomCount": 1, "RoomTypeId": 1,
     "CheckInDate": "2024-05-01T00:00:00Z", "CheckOutDate": "2024-05-02T00:00:00Z",
     "CreatedAt": "2024-04-01T00:00:00Z", "StatusId": 1, "ReservationTypeId": 1,
     "ReservationStatus": "Pending", "RoomType": "Deluxe", "ReservationType": "Online",
     "GuestData": {"FirstName": "Ana", "LastName": "Reyes"}},
    {"Id": 2, "RoomCount": 1, "RoomTypeId": 2,
     "CheckInDate": "2024-05-03T00:00:00Z", "CheckOutDate": "2024-05-04T00:00:00Z",
     "CreatedAt": "2024-04-02T00:00:00Z", "StatusId": 2, "ReservationTypeId": 1,
     "ReservationStatus": "Cancelled", "RoomType": "Family", "ReservationType": "Online",
     "GuestData": {"FirstName": "Ben", "LastName": "Cruz"}},
    {"Id": 3, "RoomCount": 1, "RoomTypeId": 1,
     "CheckInDate": "2024-05-05T00:00:00Z", "CheckOutDate": "2024-05-06T00:00:00Z",
     "CreatedAt": "2024-04-03T00:00:00Z", "StatusId": 2, "ReservationTypeId": 1,
     "ReservationStatus": "Cancelled", "RoomType": "Deluxe", "ReservationType": "Online",
     "GuestData": {"FirstName": "Cora", "LastName": "Lim"}}
]"#;

#[test]
fn test_reservation_status_filter() {
    let dir = tempfile::tempdir().unwrap();
    let args = Args {
        status: Some(ReservationStatus::Cancelled),
        rows: Some(write_rows(&dir, RESERVATIONS)),
        ..Args::default()
    };

    let out = app::run(&args, &AppConfig::default()).unwrap();
    assert!(out.contains("Ben Cruz"));
    assert!(out.contains("[Cancelled]"));
    assert!(!out.contains("Ana Reyes"));
}

#[test]
fn test_reservation_column_filters_kept_without_pickers() {
    let dir = tempfile::tempdir().unwrap();
    let args = Args {
        filters: vec![
            ("status".into(), "cancel".into()),
            ("room_type".into(), "family".into()),
        ],
        rows: Some(write_rows(&dir, RESERVATIONS)),
        ..Args::default()
    };

    let out = app::run(&args, &AppConfig::default()).unwrap();
    assert!(out.contains("Ben Cruz"));
    assert!(!out.contains("Ana Reyes"));
    assert!(!out.contains("Cora Lim"));
    assert!(out.trim_end().ends_with("Showing 1 of 1 rows."));
}

#[test]
fn test_translations_file() {
    let dir = tempfile::tempdir().unwrap();
    let translations = dir.path().join("translations.json");
    fs::write(
        &translations,
        r#"{"fil": {"general": {"noResults": "Walang resulta."}, "rooms": {"title": "Mga Kuwarto"}}}"#,
    )
    .unwrap();
    let args = Args {
        lang: Some("fil".into()),
        translations: Some(translations),
        ..rooms_args(write_rows(&dir, "[]"))
    };

    let out = app::run(&args, &AppConfig::default()).unwrap();
    assert!(out.starts_with("Mga Kuwarto\n"));
    assert!(out.contains("Walang resulta."));
}

#[test]
fn test_bad_rows_file() {
    let dir = tempfile::tempdir().unwrap();
    let args = rooms_args(write_rows(&dir, "{not json"));
    assert!(matches!(
        app::run(&args, &AppConfig::default()),
        Err(CliError::Load(_))
    ));

    let missing = rooms_args(dir.path().join("absent.json"));
    assert!(matches!(
        app::run(&missing, &AppConfig::default()),
        Err(CliError::Load(_))
    ));
}
