// Conditional logging macros - only active in debug builds.
// The terminal UI owns stdout, so the backend writes to a file instead.

use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}

const APP_DIR: &str = "word-scramble";
const DEFAULT_FILTER: &str = "info";

/// Directory log files are written to, if the platform has one.
#[must_use]
pub fn log_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(APP_DIR).join("logs"))
}

#[must_use]
pub fn log_file_name(now: chrono::DateTime<chrono::Local>) -> String {
    format!("{}-{}.log", APP_DIR, now.format("%Y%m%d-%H%M%S"))
}

/// Route `log` output to a timestamped file. `RUST_LOG` overrides the filter.
///
/// Returns the file path on success. Logging is best-effort: any failure
/// leaves the game running without a logger.
pub fn init() -> Option<PathBuf> {
    let dir = log_dir()?;
    fs::create_dir_all(&dir).ok()?;
    let path = dir.join(log_file_name(chrono::Local::now()));
    let file = File::create(&path).ok()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_FILTER))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .try_init()
        .ok()?;

    Some(path)
}
