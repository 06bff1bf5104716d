//! Tracing subscriber setup: stderr always, JSON rolling file on request.

use std::ffi::OsStr;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Directive applied to the stderr layer when `RUST_LOG` is unset.
pub const DEFAULT_STDERR_LEVEL: &str = "warn";
/// Directive applied to the file layer when `RUST_LOG_JSON` is unset.
pub const DEFAULT_FILE_LEVEL: &str = "debug";

/// Installs the global subscriber.
///
/// Stderr is filtered by `RUST_LOG`. When `LOG_FILE_PATH` is set, a JSON
/// layer writes to a daily rolling file next to that path, filtered by
/// `RUST_LOG_JSON`. The returned guard must outlive the program's logging.
pub fn init() -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(env_filter("RUST_LOG", DEFAULT_STDERR_LEVEL)?);

    let (json_layer, guard) = match std::env::var("LOG_FILE_PATH") {
        Ok(log_file_path) => {
            let log_dir = Path::new(&log_file_path)
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let log_file_name = Path::new(&log_file_path)
                .file_name()
                .unwrap_or(OsStr::new("student_report.log"));

            let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

            let layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .with_writer(non_blocking_file)
                .with_filter(env_filter("RUST_LOG_JSON", DEFAULT_FILE_LEVEL)?);
            (Some(layer), Some(guard))
        }
        Err(_) => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .try_init()?;

    Ok(guard)
}

/// Reads directives from `var`, falling back to `default` when it is unset
/// or empty.
fn env_filter(var: &str, default: &str) -> anyhow::Result<EnvFilter> {
    match std::env::var(var) {
        Ok(directives) if !directives.trim().is_empty() => Ok(EnvFilter::try_new(directives)?),
        _ => Ok(EnvFilter::try_new(default)?),
    }
}
