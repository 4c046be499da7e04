use tabula::Column;

use crate::i18n::Translations;
use crate::model::RoomRate;

use super::money;

/// Columns of the room rates listing.
pub fn rate_columns(translations: &Translations) -> Vec<Column<RoomRate>> {
    let t = |key: &str| translations.text(&format!("rates.{}", key));
    vec![
        Column::new("room_type", |r: &RoomRate| r.room_type.clone())
            .header(t("roomType"))
            .always_visible(),
        Column::new("description", |r: &RoomRate| r.description.clone())
            .header(t("description"))
            .unsortable(),
        Column::new("base_rate", |r: &RoomRate| r.base_room_rate)
            .header(t("base"))
            .render_with(|_, v| money(v)),
        Column::new("weekend_rate", |r: &RoomRate| r.weekend_room_rate)
            .header(t("weekend"))
            .render_with(|_, v| money(v)),
        Column::new("extra_adult", |r: &RoomRate| r.extra_adult_rate)
            .header(t("extraAdult"))
            .render_with(|_, v| money(v)),
        Column::new("extra_child", |r: &RoomRate| r.extra_child_rate)
            .header(t("extraChild"))
            .render_with(|_, v| money(v)),
        Column::new("max_adult", |r: &RoomRate| r.max_adult).header(t("maxAdult")),
        Column::new("max_child", |r: &RoomRate| r.max_child).header(t("maxChild")),
    ]
}
