use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogConfig;

/// Environment variable naming the log file path. Overrides `[log] file`.
pub const LOG_ENV_VAR: &str = "MICROBREW_LOG";

/// Base log path for this run: `MICROBREW_LOG` if set, else the config value.
pub fn log_base_path(env_value: Option<String>, config: &LogConfig) -> Option<PathBuf> {
    env_value
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| config.file.clone())
}

/// `{base}.{timestamp}.{pid}`, so concurrent runs don't clobber each other.
pub fn unique_log_path(base: &Path, timestamp: u64, pid: u32) -> PathBuf {
    let mut name = base.as_os_str().to_os_string();
    name.push(format!(".{timestamp}.{pid}"));
    PathBuf::from(name)
}

/// Initialize tracing with optional file output.
///
/// Logging is off unless a log path is configured, since stdout belongs to
/// the table view. `RUST_LOG` overrides the configured filter.
pub fn init_tracing(config: &LogConfig) {
    let Some(base) = log_base_path(std::env::var(LOG_ENV_VAR).ok(), config) else {
        return;
    };

    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let path = unique_log_path(&base, timestamp, std::process::id());

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let file = match std::fs::File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: Failed to create log file {}: {err}", path.display());
            return;
        }
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    if tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .is_ok()
    {
        tracing::info!(path = %path.display(), "logging to file");
    }
}
