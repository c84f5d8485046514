//! Tracing setup
//!
//! The terminal is owned by the UI while the wizard runs, so events go to
//! a log file instead of stderr. `RUST_LOG` overrides the default filter.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_FILE_NAME: &str = "form-wizard.log";

const DEFAULT_FILTER: &str = "form_wizard=info";

/// Install the file subscriber writing into `dir`.
///
/// The returned guard flushes pending events when dropped, so keep it alive
/// until the terminal is restored.
pub fn init(dir: &Path) -> Result<WorkerGuard> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    let file_appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(fmt::layer().with_ansi(false).with_writer(non_blocking))
        .try_init()
        .context("installing tracing subscriber")?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_creates_log_file_in_nested_dir() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("data").join("logs");

        let guard = init(&log_dir).unwrap();
        tracing::info!("logging ready");
        drop(guard);

        assert!(log_dir.join(LOG_FILE_NAME).exists());
    }
}
