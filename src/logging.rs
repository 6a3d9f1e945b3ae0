use std::{
    fs::{File, OpenOptions},
    io::Write,
    path::Path,
};

use color_eyre::{eyre::WrapErr, Result};
use lazy_static::lazy_static;
use tracing_error::ErrorLayer;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::pathconfig::PROJECT_NAME;

lazy_static! {
    pub static ref LOG_ENV: String = format!("{}_LOG_LEVEL", PROJECT_NAME.clone());
    pub static ref LOG_FILE: String = format!("{}.log", env!("CARGO_PKG_NAME"));
}

/// Opens the log file in the data directory, appending to what earlier runs wrote.
fn open_log_file(data_dir: &Path) -> Result<File> {
    std::fs::create_dir_all(data_dir)
        .wrap_err_with(|| format!("Cannot create data directory {}", data_dir.display()))?;
    let log_path = data_dir.join(LOG_FILE.clone());
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .wrap_err_with(|| format!("Cannot open log file {}", log_path.display()))
}

/// Logs are written to a file in the data directory so that they never mix with command output.
pub fn init(data_dir: &Path) -> Result<()> {
    let log_file = open_log_file(data_dir)?;
    let env_filter = EnvFilter::builder().with_default_directive(tracing::Level::INFO.into());
    // RUST_LOG takes precedence, then PLAYCTL_LOG_LEVEL
    let env_filter = env_filter
        .try_from_env()
        .or_else(|_| env_filter.with_env_var(LOG_ENV.clone()).from_env())?;
    let file_subscriber = fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(env_filter);
    tracing_subscriber::registry()
        .with(file_subscriber)
        .with(ErrorLayer::default())
        .try_init()?;
    Ok(())
}

/// Sets up logging, but never stops the program over it: on failure a single line goes to `err`
/// and the command runs without a log file.
pub fn init_or_warn(data_dir: &Path, err: &mut impl Write) -> bool {
    match init(data_dir) {
        Ok(()) => true,
        Err(e) => {
            let _ = writeln!(err, "Logging disabled: {:#}", e);
            false
        }
    }
}

/// Similar to the `std::dbg!` macro, but generates `tracing` events rather
/// than printing to stdout.
///
/// By default, the verbosity level for the generated events is `DEBUG`, but
/// this can be customized.
#[macro_export]
macro_rules! trace_dbg {
    (target: $target:expr, level: $level:expr, $ex:expr) => {{
        match $ex {
            value => {
                tracing::event!(target: $target, $level, ?value, stringify!($ex));
                value
            }
        }
    }};
    (level: $level:expr, $ex:expr) => {
        $crate::trace_dbg!(target: module_path!(), level: $level, $ex)
    };
    (target: $target:expr, $ex:expr) => {
        $crate::trace_dbg!(target: $target, level: tracing::Level::DEBUG, $ex)
    };
    ($ex:expr) => {
        $crate::trace_dbg!(level: tracing::Level::DEBUG, $ex)
    };
}
