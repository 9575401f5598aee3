// 📝 Logging setup (tracing)
// RUST_LOG overrides the default `info` filter

use anyhow::{anyhow, Result};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Log to stderr (web server)
pub fn init_stderr_logging() -> Result<()> {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_line_number(false),
        )
        .try_init()?;
    Ok(())
}

/// Log to a file through a non-blocking appender, leaving the terminal to the TUI.
///
/// Buffered lines are flushed when the returned guard is dropped, so hold it
/// until the UI exits.
pub fn init_file_logging(path: &Path) -> Result<WorkerGuard> {
    let (dir, file_name) = split_log_path(path)?;
    std::fs::create_dir_all(dir)?;

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .try_init()?;
    Ok(guard)
}

/// Directory and file name of a log path; a bare name lives in the working directory
fn split_log_path(path: &Path) -> Result<(&Path, &std::ffi::OsStr)> {
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("log path {} has no file name", path.display()))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    Ok((dir, file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_log_path_bare_name() {
        let (dir, name) = split_log_path(Path::new("build-journal.log")).unwrap();
        assert_eq!(dir, Path::new("."));
        assert_eq!(name, "build-journal.log");
    }

    #[test]
    fn test_split_log_path_nested() {
        let (dir, name) = split_log_path(Path::new("logs/tui/journal.log")).unwrap();
        assert_eq!(dir, Path::new("logs/tui"));
        assert_eq!(name, "journal.log");
    }

    #[test]
    fn test_split_log_path_rejects_directory_only() {
        assert!(split_log_path(Path::new("/")).is_err());
        assert!(split_log_path(Path::new("logs/..")).is_err());
    }
}
