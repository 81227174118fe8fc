//! Console Logger
//!
//! `log` backend for the browser. Lines go to the devtools console on wasm32
//! and to stderr on other targets.

use std::sync::OnceLock;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

pub struct ConsoleLogger {
    level: LevelFilter,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }

    /// The line this logger writes for `record`, or None when filtered out
    pub fn render(&self, record: &Record) -> Option<String> {
        if !self.enabled(record.metadata()) {
            return None;
        }
        Some(format_line(
            &chrono::Local::now().format("%H:%M:%S%.3f").to_string(),
            record.level(),
            record.target(),
            &record.args().to_string(),
        ))
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if let Some(line) = self.render(record) {
            emit(record.level(), &line);
        }
    }

    fn flush(&self) {}
}

/// Format one log line: `HH:MM:SS.mmm LEVEL target: message`
pub fn format_line(timestamp: &str, level: Level, target: &str, message: &str) -> String {
    format!("{} {:<5} {}: {}", timestamp, level, target, message)
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let value = JsValue::from_str(line);
    match level {
        Level::Error => console::error_1(&value),
        Level::Warn => console::warn_1(&value),
        Level::Info => console::info_1(&value),
        Level::Debug | Level::Trace => console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the global logger. Fails if another logger is already set.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(level));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        let line = format_line("12:00:01.250", Level::Warn, "complaint_desk_ui::api", "slow");
        assert_eq!(line, "12:00:01.250 WARN  complaint_desk_ui::api: slow");
    }

    #[test]
    fn test_logger_respects_level() {
        let logger = ConsoleLogger::new(LevelFilter::Info);
        let hidden = logger.render(
            &Record::builder()
                .level(Level::Debug)
                .target("t")
                .args(format_args!("hidden"))
                .build(),
        );
        let shown = logger.render(
            &Record::builder()
                .level(Level::Error)
                .target("t")
                .args(format_args!("shown"))
                .build(),
        );

        assert_eq!(hidden, None);
        assert!(shown.is_some_and(|line| line.ends_with("ERROR t: shown")));
    }
}
