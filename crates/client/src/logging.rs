//! File-only logging so stdout stays free for the command loop.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Platform cache directory for log sessions.
///
/// - macOS: `~/Library/Caches/tamagotchi/logs`
/// - Linux: `~/.cache/tamagotchi/logs` (or `$XDG_CACHE_HOME/tamagotchi/logs`)
/// - Windows: `%LOCALAPPDATA%\tamagotchi\cache\logs`
/// - Fallback: `/tmp/tamagotchi/logs`
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "tamagotchi")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/tamagotchi"))
        .join("logs")
}

/// Installs the global subscriber writing to `<log_dir>/session_<secs>/client.log`.
///
/// `RUST_LOG` adds directives on top of the `info` default. Keep the returned
/// guard alive for the whole process or buffered lines are lost.
pub fn setup_logging() -> Result<(WorkerGuard, PathBuf)> {
    let session_id = format!("session_{}", unix_seconds());

    let session_log_dir = log_dir().join(&session_id);
    std::fs::create_dir_all(&session_log_dir).with_context(|| {
        format!(
            "Failed to create log directory: {}",
            session_log_dir.display()
        )
    })?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!("Logging initialized: session={}", session_id);
    Ok((guard, session_log_dir.join("client.log")))
}

fn unix_seconds() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}
