//! Logging Setup
//!
//! Installs the rolling logger with a browser console sink.

use log::Level;
use rolling_logger::{LogEntry, LogSink, RollingLogger};
use wasm_bindgen::JsValue;

use crate::config::PlannerConfig;

/// Routes entries to console.log / console.warn / console.error
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn write(&self, entry: &LogEntry) {
        let line: JsValue = entry.format_line().into();
        match entry.level {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            _ => web_sys::console::log_1(&line),
        }
    }
}

/// Install the logger; the returned handle reads the in-memory buffer
pub fn init(config: &PlannerConfig) -> Option<&'static RollingLogger> {
    let logger = RollingLogger::new(config.level_filter(), config.log_capacity).with_sink(ConsoleSink);
    match rolling_logger::init(logger) {
        Ok(installed) => Some(installed),
        Err(e) => {
            web_sys::console::warn_1(&format!("[LOG] logger already installed: {}", e).into());
            None
        }
    }
}
