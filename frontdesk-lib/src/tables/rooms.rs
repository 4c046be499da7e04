use tabula::Column;

use crate::i18n::Translations;
use crate::model::Room;

/// Columns of the rooms listing.
pub fn room_columns(translations: &Translations) -> Vec<Column<Room>> {
    let t = |key: &str| translations.text(&format!("rooms.{}", key));
    vec![
        Column::new("room_number", |r: &Room| r.room_number)
            .header(t("number"))
            .always_visible(),
        Column::new("type", |r: &Room| r.type_name.clone()).header(t("type")),
        Column::new("status", |r: &Room| r.status_name.clone()).header(t("status")),
        Column::new("created_at", |r: &Room| r.created_at.date_naive()).header(t("createdAt")),
    ]
}
