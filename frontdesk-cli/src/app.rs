//! Builds the requested listing and renders it.

use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

use frontdesk_lib::model::{Reservation, Room, RoomRate, rows_from_json};
use frontdesk_lib::tables::{ReservationsController, rate_columns, reservation_columns, room_columns};
use frontdesk_lib::{ResourceError, ResourceState, TableKind, Translations};
use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use tabula::{Action, Column, Table, TableOptions, render_text};

use crate::args::Args;
use crate::config::AppConfig;
use crate::error::CliError;

/// Translations for the requested language.
///
/// Without a translations file the built-in English labels are used.
pub fn load_translations(args: &Args, config: &AppConfig) -> Result<Translations, CliError> {
    let language = args.lang.as_deref().unwrap_or(&config.language);
    match args.translations.as_ref().or(config.translations.as_ref()) {
        Some(path) => Ok(Translations::load(language, path)?),
        None => {
            if language != "en" {
                warn!("no translations file, using English instead of '{}'", language);
            }
            Ok(Translations::english())
        }
    }
}

fn read_rows(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) => fs::read_to_string(path).map_err(|e| CliError::io(path, e)),
        None => io::read_to_string(io::stdin()).map_err(|e| CliError::io("<stdin>", e)),
    }
}

/// Load rows, or report them as still loading with `--loading`.
fn load_rows<T: DeserializeOwned>(args: &Args, what: &'static str) -> ResourceState<Vec<T>> {
    if args.loading {
        return ResourceState::Loading;
    }
    let rows = read_rows(args.rows.as_deref())
        .map_err(|e| ResourceError::new(e.to_string()))
        .and_then(|json| rows_from_json(&json, what).map_err(ResourceError::from));
    ResourceState::from(rows)
}

fn table_from<T>(
    state: ResourceState<Vec<T>>,
    columns: Vec<Column<T>>,
    options: TableOptions,
) -> Result<Table<T>, CliError> {
    let (rows, loading) = match state {
        ResourceState::Ready(rows) => (rows, false),
        ResourceState::Idle | ResourceState::Loading => (Vec::new(), true),
        ResourceState::Error(e) => return Err(CliError::Load(e)),
    };
    Ok(Table::new(columns, rows, options.loading(loading)))
}

/// Table options from the config and command line.
fn options(args: &Args, config: &AppConfig, translations: &Translations) -> TableOptions {
    let page_size = args.page_size.unwrap_or(config.page_size);
    let mut options = args.kind.options(translations, page_size);
    for column in &args.hide {
        options.visibility = std::mem::take(&mut options.visibility).hide(column.as_str());
    }
    for (column, value) in &args.filters {
        options = options.initial_filter(column.as_str(), value.as_str());
    }
    if args.all {
        options = options.pagination(false);
    }
    options
}

/// Render the listing selected by `args`.
pub fn run(args: &Args, config: &AppConfig) -> Result<String, CliError> {
    let translations = Arc::new(load_translations(args, config)?);
    let options = options(args, config, &translations);

    if args.kind != TableKind::Reservations && (args.status.is_some() || args.room_type.is_some()) {
        warn!("--status and --room-type only apply to reservations");
    }

    match args.kind {
        TableKind::Reservations => {
            let mut controller = ReservationsController::new();
            controller.set_status(args.status);
            controller.set_room_type(args.room_type.clone());

            let table = table_from(
                load_rows::<Reservation>(args, "reservations"),
                reservation_columns(&translations),
                options.filter_by_col(controller.directives()),
            )?
            .with_row_key(|r: &Reservation| r.id.to_string());
            Ok(present(table, args, &translations))
        }
        TableKind::Rooms => {
            let table = table_from(
                load_rows::<Room>(args, "rooms"),
                room_columns(&translations),
                options,
            )?
            .with_row_key(|r: &Room| r.id.clone());
            Ok(present(table, args, &translations))
        }
        TableKind::Rates => {
            let table = table_from(
                load_rows::<RoomRate>(args, "room rates"),
                rate_columns(&translations),
                options,
            )?
            .with_row_key(|r: &RoomRate| r.room_rate_id.to_string());
            Ok(present(table, args, &translations))
        }
    }
}

/// Apply the interactive parts of the command line and render.
fn present<T>(table: Table<T>, args: &Args, translations: &Arc<Translations>) -> String {
    let mut table = table
        .with_shared_labels(translations.clone())
        .on_page_change(|page| debug!("moved to page {}", page + 1));

    if let Some(query) = &args.search {
        table.dispatch(Action::SetGlobalFilter(query.clone()));
    }
    if !args.sort.is_empty() {
        table.dispatch(Action::SetSort(args.sort.clone()));
    }
    if let Some(page) = args.page {
        table.dispatch(Action::SetPage(page.saturating_sub(1)));
    }

    let view = table.view();
    info!(
        "{}: showing {} of {} rows, page {} of {}",
        args.kind,
        view.page.page_rows,
        view.page.total_rows,
        view.page.page_index + 1,
        view.page.page_count.max(1)
    );
    render_text(&view)
}
