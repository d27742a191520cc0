use std::io::Write;
use std::time::Instant;

use log::{LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;

/// Environment variable holding the log level filter
pub const LOG_ENV_KEY: &str = "LAUNCHPACK_LOG";

struct LaunchLogger {
    file: Option<Mutex<std::fs::File>>,
    filter: LevelFilter,
    start: Instant,
}

impl LaunchLogger {
    fn format(&self, record: &Record) -> String {
        let elapsed = self.start.elapsed().as_secs_f64();
        format!(
            "[{elapsed:.3}s] [{}] {} — {}",
            record.level(),
            record.target(),
            record.args()
        )
    }
}

impl Log for LaunchLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.filter
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = self.format(record);
        // One write per line; children share stderr
        let _ = writeln!(std::io::stderr().lock(), "{line}");

        if let Some(ref file) = self.file {
            let _ = writeln!(file.lock(), "{line}");
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
        if let Some(ref file) = self.file {
            let _ = file.lock().flush();
        }
    }
}

/// Parse a level filter, defaulting to `Warn` when unset or invalid.
#[must_use]
pub fn parse_filter(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|s| s.parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Initialize the global logger. Must be called once before any logging.
///
/// # Errors
///
/// Returns `SetLoggerError` if a logger is already installed.
pub fn init(log_file: Option<std::fs::File>) -> Result<(), log::SetLoggerError> {
    let filter = parse_filter(std::env::var(LOG_ENV_KEY).ok().as_deref());
    let logger = LaunchLogger {
        file: log_file.map(Mutex::new),
        filter,
        start: Instant::now(),
    };

    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(filter);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filter() {
        assert_eq!(parse_filter(None), LevelFilter::Warn);
        assert_eq!(parse_filter(Some("debug")), LevelFilter::Debug);
        assert_eq!(parse_filter(Some("OFF")), LevelFilter::Off);
        assert_eq!(parse_filter(Some("loud")), LevelFilter::Warn);
    }

    #[test]
    fn test_file_receives_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("launchpack.log");
        let logger = LaunchLogger {
            file: Some(Mutex::new(std::fs::File::create(&path).unwrap())),
            filter: LevelFilter::Info,
            start: Instant::now(),
        };
        logger.log(
            &Record::builder()
                .args(format_args!("loaded"))
                .level(log::Level::Info)
                .target("launchpack")
                .build(),
        );
        logger.log(
            &Record::builder()
                .args(format_args!("hidden"))
                .level(log::Level::Debug)
                .target("launchpack")
                .build(),
        );
        logger.flush();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("[INFO] launchpack — loaded"));
        assert!(!contents.contains("hidden"));
    }
}
