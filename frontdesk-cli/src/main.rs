use std::fs::{self, File};
use std::process::ExitCode;

use frontdesk_cli::args::HELP;
use frontdesk_cli::{AppConfig, Args, CliError, app, paths};
use simplelog::{Config, LevelFilter, WriteLogger};

/// Log to `latest.log` in the cache directory, rotating the previous run's log.
fn init_logging(level: LevelFilter) -> Result<(), CliError> {
    let Some(dir) = paths::cache_dir() else {
        return Ok(());
    };
    fs::create_dir_all(&dir).map_err(|e| CliError::io(&dir, e))?;
    paths::rotate_logs(&dir);

    let path = paths::log_file(&dir);
    let file = File::create(&path).map_err(|e| CliError::io(&path, e))?;
    WriteLogger::init(level, Config::default(), file)?;
    Ok(())
}

fn try_main() -> Result<(), CliError> {
    let args = Args::from_env()?;
    if args.help {
        print!("{}", HELP);
        return Ok(());
    }

    let config = match args.config.clone().or_else(paths::config_file) {
        Some(path) => AppConfig::load(&path)?,
        None => AppConfig::default(),
    };
    let level = match args.log_level {
        Some(level) => level,
        None => config.level()?,
    };
    if let Err(e) = init_logging(level) {
        eprintln!("Warning: logging disabled: {}", e);
    }
    log::info!("frontdesk {} starting", env!("CARGO_PKG_VERSION"));

    let output = app::run(&args, &config)?;
    print!("{}", output);
    Ok(())
}

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
