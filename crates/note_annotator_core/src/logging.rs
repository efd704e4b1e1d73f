//! Rolling file logs for annotator runs.
//!
//! # Invariants
//! - One logger per process; a second init with the same level and directory
//!   is a no-op, anything else is rejected.
//! - Events are `key=value` metadata; note content is never logged.

use crate::service::annotate_service::ACTION_KEYWORDS;
use flexi_logger::{
    Cleanup, Criterion, FileSpec, LogSpecification, Logger, LoggerHandle, Naming, WriteMode,
};
use log::{info, LevelFilter};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const LOG_FILE_BASENAME: &str = "note_annotator";
const ROTATE_AT_BYTES: u64 = 2 * 1024 * 1024;
const KEEP_LOG_FILES: usize = 3;

static ACTIVE_LOGGER: OnceCell<ActiveLogger> = OnceCell::new();

struct ActiveLogger {
    level: LevelFilter,
    dir: PathBuf,
    _handle: LoggerHandle,
}

/// Starts file logging at `level` under `log_dir`.
///
/// `level` is any `log` level name (`off|error|warn|info|debug|trace`,
/// case-insensitive). `log_dir` must be absolute and is created if missing.
pub fn init_logging(level: &str, log_dir: &Path) -> Result<(), String> {
    let level = parse_level(level)?;
    if !log_dir.is_absolute() {
        return Err(format!(
            "log directory must be absolute, got `{}`",
            log_dir.display()
        ));
    }

    let active = ACTIVE_LOGGER.get_or_try_init(|| start(level, log_dir))?;
    if active.level != level || active.dir != log_dir {
        return Err(format!(
            "annotator logging already runs at {} in `{}`",
            active.level,
            active.dir.display()
        ));
    }
    Ok(())
}

fn start(level: LevelFilter, log_dir: &Path) -> Result<ActiveLogger, String> {
    std::fs::create_dir_all(log_dir)
        .map_err(|err| format!("cannot create `{}`: {err}", log_dir.display()))?;

    let handle = Logger::with(LogSpecification::builder().default(level).build())
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(ROTATE_AT_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(KEEP_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))?;

    info!(
        "event=logging_init module=logging status=ok version={} level={} keywords={}",
        env!("CARGO_PKG_VERSION"),
        level,
        ACTION_KEYWORDS.len()
    );

    Ok(ActiveLogger {
        level,
        dir: log_dir.to_path_buf(),
        _handle: handle,
    })
}

fn parse_level(level: &str) -> Result<LevelFilter, String> {
    LevelFilter::from_str(level.trim()).map_err(|_| format!("unknown log level `{level}`"))
}

/// `debug` for debug builds, `info` for release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

/// `<temp_dir>/note_annotator/logs`.
pub fn default_log_dir() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE_BASENAME).join("logs")
}
