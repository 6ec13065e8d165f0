// src/log.rs
//! Tracing setup: compact lines on stderr plus an append-only file under `.store/`.
//!
//! Stdout stays reserved for the report itself.
use std::fs::{ self, OpenOptions };
use std::path::{ Path, PathBuf };
use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{ EnvFilter, Registry, fmt, prelude::* };

use crate::config::consts::{ LOG_FILE, STORE_DIR };

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("Failed to prepare log directory {path}: {source}")]
    CreateDir { path: PathBuf, source: std::io::Error },
    #[error("Failed to create log file at {path}: {source}")]
    CreateFile { path: PathBuf, source: std::io::Error },
    #[error("Failed to install global tracing subscriber: {0}")]
    SetGlobal(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Install the global subscriber writing to `.store/debug.log`.
/// Subsequent calls are no-ops.
pub fn init() -> Result<(), LogError> {
    init_in(Path::new(STORE_DIR))
}

pub fn init_in(dir: &Path) -> Result<(), LogError> {
    if LOG_GUARD.get().is_some() {
        return Ok(());
    }

    fs::create_dir_all(dir).map_err(|source| LogError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    let path = dir.join(LOG_FILE);
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|source| LogError::CreateFile { path: path.clone(), source })?;

    let (file_writer, guard) = tracing_appender::non_blocking(
        tracing_appender::rolling::never(dir, LOG_FILE),
    );

    let stderr_layer = fmt::layer()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr);
    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_writer(file_writer);

    let subscriber = Registry::default()
        .with(env_filter())
        .with(stderr_layer)
        .with(file_layer);
    tracing::subscriber::set_global_default(subscriber)?;
    let _ = LOG_GUARD.set(guard);

    logd!("Logging to {}", path.display());
    Ok(())
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}
