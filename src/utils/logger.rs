use crate::utils::error::{ReportError, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing::Subscriber;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Local wall-clock timestamp, `2024/01/31 13:45:02`.
struct LocalTimestamp;

impl FormatTime for LocalTimestamp {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y/%m/%d %H:%M:%S"))
    }
}

fn env_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("sum_report=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sum_report=info"))
    }
}

/// Builds a subscriber that appends plain-text lines to `log_path`.
///
/// The file is created if missing and never truncated.
pub fn file_subscriber(
    log_path: &Path,
    verbose: bool,
) -> Result<impl Subscriber + Send + Sync + 'static> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .map_err(|e| ReportError::LoggerError {
            message: format!("cannot open {}: {}", log_path.display(), e),
        })?;

    Ok(tracing_subscriber::registry().with(env_filter(verbose)).with(
        tracing_subscriber::fmt::layer()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_timer(LocalTimestamp)
            .with_target(false)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true),
    ))
}

pub fn init_file_logger(log_path: &Path, verbose: bool) -> Result<()> {
    file_subscriber(log_path, verbose)?
        .try_init()
        .map_err(|e| ReportError::LoggerError {
            message: e.to_string(),
        })
}
