use std::sync::Arc;

use tabula::{CellError, CellValue, Column, FilterByCol, FilterValue};

use crate::i18n::Translations;
use crate::model::Reservation;
use crate::status::{ReservationStatus, StatusBadge};

/// Columns of the reservations listing.
pub fn reservation_columns(translations: &Arc<Translations>) -> Vec<Column<Reservation>> {
    let t = |key: &str| translations.text(&format!("reservations.{}", key));
    let badge_translations = Arc::clone(translations);

    vec![
        Column::new("id", |r: &Reservation| r.id)
            .header(t("id"))
            .always_visible(),
        Column::new("guest", |r: &Reservation| r.guest_name()).header(t("guest")),
        Column::new("room_type", |r: &Reservation| r.room_type.clone()).header(t("roomType")),
        Column::new("check_in", |r: &Reservation| r.check_in_date.date_naive())
            .header(t("checkIn")),
        Column::new("check_out", |r: &Reservation| r.check_out_date.date_naive())
            .header(t("checkOut")),
        Column::try_new("nights", |r: &Reservation| match r.nights() {
            n if n < 0 => Err(CellError::invalid(format!(
                "reservation {} checks out before it checks in",
                r.id
            ))),
            n => Ok(CellValue::from(n)),
        })
        .header(t("nights")),
        Column::new("status", |r: &Reservation| r.reservation_status.clone())
            .header(t("status"))
            .render_with(move |r: &Reservation, _| {
                StatusBadge::for_status(&r.reservation_status, &badge_translations).to_string()
            }),
        Column::new("type", |r: &Reservation| r.reservation_type.clone()).header(t("type")),
        Column::new("created_at", |r: &Reservation| r.created_at).header(t("createdAt")),
    ]
}

/// Status and room type pickers above the reservations table.
///
/// The controller owns the directive list handed to the table. A new list is
/// allocated only when a picker changes, so handing the same list to the
/// table again never re-applies it over the user's own filtering.
#[derive(Debug, Clone)]
pub struct ReservationsController {
    status: Option<ReservationStatus>,
    room_type: Option<String>,
    directives: Arc<[FilterByCol]>,
}

impl Default for ReservationsController {
    fn default() -> Self {
        Self::new()
    }
}

impl ReservationsController {
    pub fn new() -> Self {
        Self {
            status: None,
            room_type: None,
            directives: Arc::from(Vec::new()),
        }
    }

    pub fn status(&self) -> Option<ReservationStatus> {
        self.status
    }

    pub fn room_type(&self) -> Option<&str> {
        self.room_type.as_deref()
    }

    /// Pick a status, or `None` for all. Returns true if the selection changed.
    pub fn set_status(&mut self, status: Option<ReservationStatus>) -> bool {
        if self.status == status {
            return false;
        }
        self.status = status;
        self.rebuild(status.is_none().then_some("status"));
        true
    }

    /// Pick a room type, or `None` for all. Returns true if the selection changed.
    pub fn set_room_type(&mut self, room_type: Option<String>) -> bool {
        let room_type = room_type.filter(|r| !r.trim().is_empty());
        if self.room_type == room_type {
            return false;
        }
        let cleared = room_type.is_none().then_some("room_type");
        self.room_type = room_type;
        self.rebuild(cleared);
        true
    }

    /// The current directive list.
    pub fn directives(&self) -> Arc<[FilterByCol]> {
        Arc::clone(&self.directives)
    }

    /// `cleared` names the picker that was just reset to all; only that
    /// column's filter is cleared. Pickers that were never set leave the
    /// table's filters alone.
    fn rebuild(&mut self, cleared: Option<&str>) {
        let mut directives = Vec::with_capacity(3);
        if let Some(status) = self.status {
            directives.push(FilterByCol::set("status", FilterValue::exact(status.wire_name())));
        }
        if let Some(room_type) = &self.room_type {
            directives.push(FilterByCol::set("room_type", FilterValue::exact(room_type.as_str())));
        }
        if let Some(column) = cleared {
            directives.push(FilterByCol::clear(column));
        }
        self.directives = Arc::from(directives);
        log::debug!(
            "reservation pickers changed: status={:?} room_type={:?}",
            self.status,
            self.room_type
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unchanged_selection_keeps_list() {
        let mut controller = ReservationsController::new();
        let before = controller.directives();

        assert!(!controller.set_status(None));
        assert!(Arc::ptr_eq(&before, &controller.directives()));

        assert!(controller.set_status(Some(ReservationStatus::Booked)));
        let after = controller.directives();
        assert!(!Arc::ptr_eq(&before, &after));
        assert_eq!(
            after[0],
            FilterByCol::set("status", FilterValue::exact("Booked"))
        );

        assert!(!controller.set_status(Some(ReservationStatus::Booked)));
        assert!(Arc::ptr_eq(&after, &controller.directives()));
    }

    #[test]
    fn test_unset_pickers_emit_nothing() {
        let mut controller = ReservationsController::new();
        assert!(controller.directives().is_empty());

        controller.set_room_type(Some("Deluxe".into()));
        assert_eq!(
            &*controller.directives(),
            &[FilterByCol::set("room_type", FilterValue::exact("Deluxe"))]
        );

        controller.set_room_type(None);
        assert_eq!(&*controller.directives(), &[FilterByCol::clear("room_type")]);
    }

    #[test]
    fn test_blank_room_type_is_all() {
        let mut controller = ReservationsController::new();
        assert!(!controller.set_room_type(Some("  ".into())));
        assert!(controller.set_room_type(Some("Deluxe".into())));
        assert_eq!(controller.room_type(), Some("Deluxe"));
    }
}
