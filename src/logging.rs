//! File-backed logging.
//!
//! The TUI owns the terminal, so log lines go to a file instead of stderr.
//! Level filtering follows `RUST_LOG` and defaults to `info`.
//!
//! ```rust,ignore
//! // Keep the guard alive for the whole program; dropping it flushes the file.
//! let _guard = rcwizard::logging::init(&rcwizard::logging::default_log_dir())?;
//! tracing::info!("wizard started");
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

pub const LOG_FILE_NAME: &str = "rcwizard.log";

/// Guard that must be kept alive for the duration of the program.
/// Dropping this guard will flush and close the log file.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
    path: PathBuf,
}

impl LoggingGuard {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Default log directory (platform data dir, or the temp dir without one)
pub fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("rcwizard").join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("rcwizard-logs"))
}

/// Install the global subscriber writing to `<log_dir>/rcwizard.log`
pub fn init(log_dir: &Path) -> io::Result<LoggingGuard> {
    fs::create_dir_all(log_dir)?;

    let appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .map_err(io::Error::other)?;

    let path = log_dir.join(LOG_FILE_NAME);
    tracing::info!(log_path = %path.display(), "logging initialized");

    Ok(LoggingGuard {
        _file_guard: file_guard,
        path,
    })
}
