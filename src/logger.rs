//! Console Logger
//!
//! Routes the `log` facade to the browser console with a `[TARGET]`
//! prefix taken from the last module path segment.

use log::{Level, LevelFilter, Log, Metadata, Record};
use web_sys::console;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

fn prefix(target: &str) -> String {
    target.rsplit("::").next().unwrap_or(target).to_uppercase()
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("[{}] {}", prefix(record.target()), record.args()).into();
        match record.level() {
            Level::Error => console::error_1(&line),
            Level::Warn => console::warn_1(&line),
            Level::Info => console::info_1(&line),
            Level::Debug | Level::Trace => console::log_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Install once at start-up; later calls are ignored
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix() {
        assert_eq!(prefix("kakondo_core::form::controller"), "CONTROLLER");
        assert_eq!(prefix("app"), "APP");
    }
}
