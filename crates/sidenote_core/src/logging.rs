//! Logging bootstrap.
//!
//! # Responsibility
//! - Initialize file-based rolling logs exactly once per process.
//! - Keep diagnostic events metadata-only; no note content ever reaches a
//!   log line.
//!
//! # Invariants
//! - Initialization is idempotent for the same directory and level.
//! - Initialization never panics; failures come back as readable strings.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

const LOG_BASENAME: &str = "sidenote";
const MAX_LOG_FILE_BYTES: u64 = 5 * 1024 * 1024;
const KEPT_LOG_FILES: usize = 3;

static ACTIVE: OnceCell<ActiveLogging> = OnceCell::new();

struct ActiveLogging {
    level: &'static str,
    log_dir: PathBuf,
    _handle: LoggerHandle,
}

/// Initializes core logging with a level name and an absolute directory.
///
/// Repeat calls with the same configuration are no-ops; a conflicting
/// level or directory is rejected rather than silently switched.
///
/// # Errors
/// Returns a human-readable message when the level is unknown, the
/// directory is unusable, or the logger backend fails to start.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), String> {
    let level = canonical_level(level)?;
    let dir = canonical_dir(log_dir)?;

    let active = ACTIVE.get_or_try_init(|| -> Result<ActiveLogging, String> {
        std::fs::create_dir_all(&dir)
            .map_err(|err| format!("cannot create log directory `{}`: {err}", dir.display()))?;
        let handle = Logger::try_with_str(level)
            .map_err(|err| format!("invalid log level `{level}`: {err}"))?
            .log_to_file(FileSpec::default().directory(&dir).basename(LOG_BASENAME))
            .rotate(
                Criterion::Size(MAX_LOG_FILE_BYTES),
                Naming::Numbers,
                Cleanup::KeepLogFiles(KEPT_LOG_FILES),
            )
            .write_mode(WriteMode::BufferAndFlush)
            .append()
            .format_for_files(flexi_logger::detailed_format)
            .start()
            .map_err(|err| format!("failed to start logger: {err}"))?;

        info!(
            "event=core_init module=logging status=ok level={level} log_dir={} version={}",
            dir.display(),
            env!("CARGO_PKG_VERSION")
        );
        Ok(ActiveLogging {
            level,
            log_dir: dir.clone(),
            _handle: handle,
        })
    })?;

    if active.level != level || active.log_dir != dir {
        return Err(format!(
            "logging already initialized (level={}, dir={}); refusing to switch",
            active.level,
            active.log_dir.display()
        ));
    }
    Ok(())
}

/// Returns `(level, log_dir)` when logging is active.
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    ACTIVE.get().map(|state| (state.level, state.log_dir.clone()))
}

/// Default log level for the current build mode.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn canonical_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        )),
    }
}

fn canonical_dir(log_dir: &str) -> Result<PathBuf, String> {
    let trimmed = log_dir.trim();
    if trimmed.is_empty() {
        return Err("log_dir cannot be empty".to_string());
    }
    let path = Path::new(trimmed);
    if !path.is_absolute() {
        return Err(format!("log_dir must be an absolute path, got `{trimmed}`"));
    }
    Ok(path.to_path_buf())
}
