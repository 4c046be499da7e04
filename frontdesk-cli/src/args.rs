//! Command-line arguments.

use std::path::PathBuf;

use frontdesk_lib::{ReservationStatus, TableKind};
use pico_args::Arguments;
use simplelog::LevelFilter;
use tabula::SortSpec;

use crate::error::CliError;

pub const HELP: &str = "\
frontdesk: list back-office rows as a table

USAGE:
  frontdesk [OPTIONS] [ROWS.json]

Reads rows from ROWS.json, or standard input when omitted.

OPTIONS:
  --kind KIND            reservations (default), rooms or rates
  --search TEXT          global search over the listing's search columns
  --filter COL=VALUE     column filter, repeatable
  --status STATUS        reservations: only this status
  --room-type NAME       reservations: only this room type
  --sort COL[:desc]      sort key, repeatable, first is primary
  --page N               page to show, starting at 1
  --page-size N          rows per page
  --all                  turn pagination off
  --hide COL             hide a column, repeatable
  --lang LANG            translation language
  --translations FILE    translations file
  --loading              render the loading placeholder
  --log-level LEVEL      off, error, warn, info, debug or trace
  --config FILE          config file
  -h, --help             print this help
";

/// Parsed command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    pub help: bool,
    pub kind: TableKind,
    pub rows: Option<PathBuf>,
    pub search: Option<String>,
    pub filters: Vec<(String, String)>,
    pub status: Option<ReservationStatus>,
    pub room_type: Option<String>,
    pub sort: Vec<SortSpec>,
    /// 1-based.
    pub page: Option<usize>,
    pub page_size: Option<usize>,
    pub all: bool,
    pub hide: Vec<String>,
    pub lang: Option<String>,
    pub translations: Option<PathBuf>,
    pub loading: bool,
    pub log_level: Option<LevelFilter>,
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn from_env() -> Result<Self, CliError> {
        Self::parse(Arguments::from_env())
    }

    pub fn parse(mut args: Arguments) -> Result<Self, CliError> {
        let parsed = Self {
            help: args.contains(["-h", "--help"]),
            kind: args.opt_value_from_str("--kind")?.unwrap_or_default(),
            search: args.opt_value_from_str("--search")?,
            filters: args.values_from_fn("--filter", parse_filter)?,
            status: args.opt_value_from_str("--status")?,
            room_type: args.opt_value_from_str("--room-type")?,
            sort: args.values_from_fn("--sort", parse_sort)?,
            page: args.opt_value_from_fn("--page", parse_page)?,
            page_size: args.opt_value_from_fn("--page-size", parse_page)?,
            all: args.contains("--all"),
            hide: args.values_from_str("--hide")?,
            lang: args.opt_value_from_str("--lang")?,
            translations: args.opt_value_from_str("--translations")?,
            loading: args.contains("--loading"),
            log_level: args.opt_value_from_str("--log-level")?,
            config: args.opt_value_from_str("--config")?,
            rows: args.opt_free_from_str()?,
        };

        let rest = args.finish();
        if !rest.is_empty() {
            let rest: Vec<String> = rest
                .iter()
                .map(|a| a.to_string_lossy().into_owned())
                .collect();
            return Err(CliError::UnexpectedArgs(rest.join(" ")));
        }
        Ok(parsed)
    }
}

fn parse_filter(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((column, value)) if !column.trim().is_empty() => {
            Ok((column.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected COLUMN=VALUE, got '{}'", s)),
    }
}

fn parse_sort(s: &str) -> Result<SortSpec, String> {
    let (column, direction) = s.split_once(':').unwrap_or((s, "asc"));
    if column.is_empty() {
        return Err(format!("expected COLUMN[:asc|:desc], got '{}'", s));
    }
    match direction.to_ascii_lowercase().as_str() {
        "asc" => Ok(SortSpec::asc(column)),
        "desc" => Ok(SortSpec::desc(column)),
        other => Err(format!("unknown sort direction '{}'", other)),
    }
}

fn parse_page(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("expected a positive number, got '{}'", s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn parse(args: &[&str]) -> Result<Args, CliError> {
        Args::parse(Arguments::from_vec(
            args.iter().map(OsString::from).collect(),
        ))
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]).unwrap();
        assert_eq!(args, Args::default());
        assert_eq!(args.kind, TableKind::Reservations);
    }

    #[test]
    fn test_full_command_line() {
        let args = parse(&[
            "--kind", "rooms", "--search", "deluxe", "--filter", "status=Vacant", "--sort",
            "room_number:desc", "--sort", "type", "--page", "2", "--hide", "created_at",
            "--all", "rooms.json",
        ])
        .unwrap();

        assert_eq!(args.kind, TableKind::Rooms);
        assert_eq!(args.search.as_deref(), Some("deluxe"));
        assert_eq!(args.filters, vec![("status".to_string(), "Vacant".to_string())]);
        assert_eq!(
            args.sort,
            vec![SortSpec::desc("room_number"), SortSpec::asc("type")]
        );
        assert_eq!(args.page, Some(2));
        assert_eq!(args.hide, vec!["created_at"]);
        assert!(args.all);
        assert_eq!(args.rows, Some(PathBuf::from("rooms.json")));
    }

    #[test]
    fn test_status_and_level() {
        let args = parse(&["--status", "checked-in", "--log-level", "debug"]).unwrap();
        assert_eq!(args.status, Some(ReservationStatus::CheckedIn));
        assert_eq!(args.log_level, Some(LevelFilter::Debug));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(parse(&["--page", "0"]).is_err());
        assert!(parse(&["--filter", "nocolumn"]).is_err());
        assert!(parse(&["--sort", "name:sideways"]).is_err());
        assert!(parse(&["--kind", "guests"]).is_err());
        assert!(matches!(
            parse(&["a.json", "b.json"]),
            Err(CliError::UnexpectedArgs(rest)) if rest == "b.json"
        ));
    }
}
