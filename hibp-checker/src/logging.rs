//! Log file setup.
//!
//! Events from the HTTP server land in `server.log`, events from the
//! interactive session in `cmd.log`. Warnings and errors from either are also
//! written to stderr.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

use crate::error::Error;

pub const SERVER_LOG: &str = "server.log";
pub const SESSION_LOG: &str = "cmd.log";

/// Target prefix of events written to `server.log`.
pub const SERVER_TARGET: &str = "hibp_checker::server";

/// Target prefix of events written to `cmd.log`.
pub const SESSION_TARGET: &str = "hibp_checker::cli";

/// Creates `log_dir` if needed and opens `name` inside it for appending.
pub fn open_log_file(log_dir: &Path, name: &str) -> Result<File, Error> {
    std::fs::create_dir_all(log_dir)?;
    let path: PathBuf = log_dir.join(name);
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|source| Error::LogFile { path, source })
}

/// Installs the global subscriber. `level` applies unless RUST_LOG is set.
pub fn init(log_dir: &Path, level: &str) -> Result<(), Error> {
    let server_file = open_log_file(log_dir, SERVER_LOG)?;
    let session_file = open_log_file(log_dir, SESSION_LOG)?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let server_layer = fmt::layer()
        .with_writer(Mutex::new(server_file))
        .with_ansi(false)
        .with_filter(Targets::new().with_target(SERVER_TARGET, LevelFilter::TRACE));

    let session_layer = fmt::layer()
        .with_writer(Mutex::new(session_file))
        .with_ansi(false)
        .with_filter(Targets::new().with_target(SESSION_TARGET, LevelFilter::TRACE));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(LevelFilter::WARN);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(server_layer)
        .with(session_layer)
        .with(stderr_layer)
        .try_init()?;

    tracing::info!(target: SERVER_TARGET, log_dir = %log_dir.display(), "Logging to {}", SERVER_LOG);
    tracing::info!(target: SESSION_TARGET, log_dir = %log_dir.display(), "Logging to {}", SESSION_LOG);

    Ok(())
}
