//! Console Logger
//!
//! A `log` backend for browser builds. Records go to the matching
//! `console.*` method, prefixed with a local timestamp, level and target.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use wasm_bindgen::JsValue;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = JsValue::from_str(&format_record(&timestamp(), record));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::log_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger with the given maximum level.
///
/// Returns an error if a logger has already been installed.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

fn timestamp() -> String {
    chrono::Local::now().format("%H:%M:%S%.3f").to_string()
}

/// Render a record as a single console line.
pub fn format_record(timestamp: &str, record: &Record) -> String {
    format!(
        "[{}] {:<5} {}: {}",
        timestamp,
        record.level(),
        record.target(),
        record.args()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_record_layout() {
        let line = format_record(
            "09:15:02.117",
            &Record::builder()
                .args(format_args!("loaded {} objects", 13))
                .level(Level::Info)
                .target("objects_dashboard_ui::app")
                .build(),
        );

        assert_eq!(
            line,
            "[09:15:02.117] INFO  objects_dashboard_ui::app: loaded 13 objects"
        );
    }

    #[test]
    fn test_format_record_pads_short_levels_only() {
        let line = format_record(
            "00:00:00.000",
            &Record::builder()
                .args(format_args!("request timed out"))
                .level(Level::Error)
                .target("api")
                .build(),
        );

        assert!(line.starts_with("[00:00:00.000] ERROR api:"));
    }
}
