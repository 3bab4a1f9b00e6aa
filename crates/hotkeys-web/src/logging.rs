//! `log` backend that writes to the browser console
//!
//! Records are routed to `console.error/warn/info/debug` by level, so the
//! browser's own console filters apply.

use std::str::FromStr;
use std::sync::{OnceLock, RwLock};

use log::{Level, Log, Metadata, Record, SetLoggerError};
use wasm_bindgen::prelude::*;
use web_sys::console;

/// Global storage for the console logger
static CONSOLE_LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

struct ConsoleLogger {
    max_level: RwLock<Level>,
}

impl ConsoleLogger {
    fn new(max_level: Level) -> Self {
        Self {
            max_level: RwLock::new(max_level),
        }
    }

    fn set_max_level(&self, level: Level) {
        if let Ok(mut guard) = self.max_level.write() {
            *guard = level;
        }
    }

    fn get_max_level(&self) -> Level {
        self.max_level.read().map(|l| *l).unwrap_or(Level::Info)
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.get_max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            Level::Error => console::error_1(&line),
            Level::Warn => console::warn_1(&line),
            Level::Info => console::info_1(&line),
            Level::Debug | Level::Trace => console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger as the global logger
///
/// Fails if another logger is already installed.
pub fn init_console_logger(max_level: Level) -> Result<(), SetLoggerError> {
    let logger = CONSOLE_LOGGER.get_or_init(|| ConsoleLogger::new(max_level));
    log::set_logger(logger)?;
    log::set_max_level(max_level.to_level_filter());
    Ok(())
}

/// Parse a level name ("error", "warn", "info", "debug", "trace")
fn parse_level(level: &str) -> Result<Level, JsValue> {
    Level::from_str(level).map_err(|_| JsValue::from_str(&format!("Unknown log level: {}", level)))
}

/// Route Rust logs to the browser console. Defaults to `info`.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(level: Option<String>) -> Result<(), JsValue> {
    let level = match level {
        Some(level) => parse_level(&level)?,
        None => Level::Info,
    };
    init_console_logger(level).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Change the console log level at runtime
#[wasm_bindgen(js_name = setLogLevel)]
pub fn set_log_level(level: String) -> Result<(), JsValue> {
    let level = parse_level(&level)?;
    if let Some(logger) = CONSOLE_LOGGER.get() {
        logger.set_max_level(level);
        log::set_max_level(level.to_level_filter());
    }
    Ok(())
}
