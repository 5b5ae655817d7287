//! Minimal stderr backend for the `log` facade.

use log::{Level, Log, Metadata, Record};

struct StderrLogger {
    level: Level,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static WARN: StderrLogger = StderrLogger { level: Level::Warn };
static INFO: StderrLogger = StderrLogger { level: Level::Info };
static DEBUG: StderrLogger = StderrLogger { level: Level::Debug };
static TRACE: StderrLogger = StderrLogger { level: Level::Trace };

/// Maps the `-v` count to a logger: warnings by default, then info, debug, trace.
fn logger_for(verbosity: u8) -> &'static StderrLogger {
    match verbosity {
        0 => &WARN,
        1 => &INFO,
        2 => &DEBUG,
        _ => &TRACE,
    }
}

/// Installs the logger. Later calls are ignored.
pub fn init(verbosity: u8) {
    let logger = logger_for(verbosity);
    if log::set_logger(logger).is_ok() {
        log::set_max_level(logger.level.to_level_filter());
    }
}

#[cfg(test)]
mod tests {
    use log::LevelFilter;

    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(logger_for(0).level, Level::Warn);
        assert_eq!(logger_for(1).level, Level::Info);
        assert_eq!(logger_for(2).level, Level::Debug);
        assert_eq!(logger_for(7).level, Level::Trace);
    }

    #[test]
    fn test_init_installs_level_filter() {
        init(2);
        assert_eq!(log::max_level(), LevelFilter::Debug);
        assert!(log::log_enabled!(Level::Debug));
        assert!(!log::log_enabled!(Level::Trace));

        // a second install is ignored
        init(0);
        assert_eq!(log::max_level(), LevelFilter::Debug);
    }
}
