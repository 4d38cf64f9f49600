use std::path::Path;
use tracing::warn;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global `tracing` subscriber.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. With a log
/// directory, events also go to a daily rolling file named after
/// `component`; keep the returned guard alive to flush it. A directory that
/// cannot be created or written leaves file logging off and returns `None`.
/// If a global subscriber is already installed it is left in place.
pub fn init_logging(
    component: &str,
    to_stderr: bool,
    log_dir: Option<&Path>,
) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = to_stderr.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(false)
    });

    let mut file_error = None;
    let appender = log_dir.and_then(|dir| match file_appender(component, dir) {
        Ok(appender) => Some(appender),
        Err(e) => {
            file_error = Some((dir.to_path_buf(), e));
            None
        }
    });

    let (file_layer, guard) = match appender {
        Some(appender) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init();

    if let Some((dir, e)) = file_error {
        warn!(dir = %dir.display(), error = %e, "File logging disabled");
    }

    guard
}

// Creates files like cindex.2024-01-21
fn file_appender(component: &str, dir: &Path) -> std::io::Result<RollingFileAppender> {
    std::fs::create_dir_all(dir)?;
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(component)
        .build(dir)
        .map_err(std::io::Error::other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let guard = init_logging("cindex", false, Some(dir.path()));
        assert!(guard.is_some());
        tracing::info!("first subscriber installed");

        assert!(init_logging("cindex", true, None).is_none());
    }

    #[test]
    fn test_unusable_log_dir_skips_file_logging() {
        let file = tempfile::NamedTempFile::new().unwrap();
        // A directory cannot be created below a regular file.
        let dir = file.path().join("logs");
        assert!(init_logging("cindex", false, Some(&dir)).is_none());
        assert!(!dir.exists());
    }
}
