//! Rolling File Logger
//!
//! Installs a `tracing` subscriber that writes to the console and to a log file
//! which rotates by size. Rotated files form a bounded ring:
//! `<app>.log` is the live file, `<app>.log.1` the most recent rotation, and
//! anything past `<app>.log.<max_files>` is discarded.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Size and retention limits for the log file ring
#[derive(Debug, Clone, Copy)]
pub struct RollingConfig {
    /// Rotate once the live file would grow past this many bytes
    pub max_file_bytes: u64,
    /// Number of rotated files kept next to the live one
    pub max_files: usize,
}

impl Default for RollingConfig {
    fn default() -> Self {
        Self {
            max_file_bytes: 5 * 1024 * 1024,
            max_files: 3,
        }
    }
}

struct Inner {
    dir: PathBuf,
    app_name: String,
    config: RollingConfig,
    file: File,
    written: u64,
}

impl Inner {
    fn live_path(&self) -> PathBuf {
        log_path(&self.dir, &self.app_name, 0)
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;

        if self.config.max_files == 0 {
            self.file = File::create(self.live_path())?;
            self.written = 0;
            return Ok(());
        }

        let oldest = log_path(&self.dir, &self.app_name, self.config.max_files);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for index in (1..self.config.max_files).rev() {
            let from = log_path(&self.dir, &self.app_name, index);
            if from.exists() {
                fs::rename(&from, log_path(&self.dir, &self.app_name, index + 1))?;
            }
        }
        fs::rename(self.live_path(), log_path(&self.dir, &self.app_name, 1))?;

        self.file = File::create(self.live_path())?;
        self.written = 0;
        Ok(())
    }
}

fn log_path(dir: &Path, app_name: &str, index: usize) -> PathBuf {
    if index == 0 {
        dir.join(format!("{}.log", app_name))
    } else {
        dir.join(format!("{}.log.{}", app_name, index))
    }
}

/// Size-rotating file writer, cheap to clone and safe to share across threads
#[derive(Clone)]
pub struct RollingAppender {
    inner: Arc<Mutex<Inner>>,
}

impl RollingAppender {
    /// Open (or create) `<dir>/<app_name>.log` in append mode
    pub fn new(dir: impl Into<PathBuf>, app_name: &str, config: RollingConfig) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;

        let path = log_path(&dir, app_name, 0);
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata()?.len();

        Ok(Self {
            inner: Arc::new(Mutex::new(Inner {
                dir,
                app_name: app_name.to_string(),
                config,
                file,
                written,
            })),
        })
    }

    /// Path of the live log file
    pub fn path(&self) -> io::Result<PathBuf> {
        let inner = self
            .inner
            .lock()
            .map_err(|_| io::Error::other("rolling appender lock poisoned"))?;
        Ok(inner.live_path())
    }
}

impl Write for RollingAppender {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| io::Error::other("rolling appender lock poisoned"))?;

        if inner.written > 0 && inner.written + buf.len() as u64 > inner.config.max_file_bytes {
            inner.rotate()?;
        }

        inner.file.write_all(buf)?;
        inner.written += buf.len() as u64;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| io::Error::other("rolling appender lock poisoned"))?;
        inner.file.flush()
    }
}

struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Install the global subscriber with default limits
pub fn init_logger(log_dir: impl Into<PathBuf>, app_name: &str) -> io::Result<()> {
    init_logger_with(log_dir, app_name, RollingConfig::default())
}

/// Install the global subscriber
///
/// The filter comes from `RUST_LOG` and defaults to `info`.
/// Fails if a global subscriber is already set.
pub fn init_logger_with(
    log_dir: impl Into<PathBuf>,
    app_name: &str,
    config: RollingConfig,
) -> io::Result<()> {
    let appender = RollingAppender::new(log_dir, app_name, config)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let console = fmt::layer().with_timer(LocalTime).with_target(false);
    let file = fmt::layer()
        .with_timer(LocalTime)
        .with_ansi(false)
        .with_writer(move || appender.clone());

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file)
        .try_init()
        .map_err(|e| io::Error::other(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_appends_to_existing_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("app.log"), "old\n").unwrap();

        let mut appender = RollingAppender::new(dir.path(), "app", RollingConfig::default()).unwrap();
        appender.write_all(b"new\n").unwrap();
        appender.flush().unwrap();

        let content = fs::read_to_string(appender.path().unwrap()).unwrap();
        assert_eq!(content, "old\nnew\n");
    }

    #[test]
    fn test_rotates_when_limit_exceeded() {
        let dir = tempdir().unwrap();
        let config = RollingConfig { max_file_bytes: 10, max_files: 2 };
        let mut appender = RollingAppender::new(dir.path(), "app", config).unwrap();

        appender.write_all(b"first 01\n").unwrap();
        appender.write_all(b"second 2\n").unwrap();
        appender.flush().unwrap();

        assert_eq!(fs::read_to_string(dir.path().join("app.log")).unwrap(), "second 2\n");
        assert_eq!(fs::read_to_string(dir.path().join("app.log.1")).unwrap(), "first 01\n");
    }

    #[test]
    fn test_ring_discards_oldest() {
        let dir = tempdir().unwrap();
        let config = RollingConfig { max_file_bytes: 4, max_files: 2 };
        let mut appender = RollingAppender::new(dir.path(), "app", config).unwrap();

        for line in ["aaa\n", "bbb\n", "ccc\n", "ddd\n"] {
            appender.write_all(line.as_bytes()).unwrap();
        }
        appender.flush().unwrap();

        assert_eq!(fs::read_to_string(dir.path().join("app.log")).unwrap(), "ddd\n");
        assert_eq!(fs::read_to_string(dir.path().join("app.log.1")).unwrap(), "ccc\n");
        assert_eq!(fs::read_to_string(dir.path().join("app.log.2")).unwrap(), "bbb\n");
        assert!(!dir.path().join("app.log.3").exists());
    }

    #[test]
    fn test_oversized_write_goes_to_empty_file() {
        let dir = tempdir().unwrap();
        let config = RollingConfig { max_file_bytes: 2, max_files: 1 };
        let mut appender = RollingAppender::new(dir.path(), "app", config).unwrap();

        appender.write_all(b"longer than limit\n").unwrap();
        appender.flush().unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join("app.log")).unwrap(),
            "longer than limit\n"
        );
        assert!(!dir.path().join("app.log.1").exists());
    }
}
