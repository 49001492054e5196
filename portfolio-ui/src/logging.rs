//! Browser console backend for the `log` facade.
//!
//! # Invariants
//! - Initialization is idempotent for the same level.
//! - Re-initialization with a different level is rejected.
//! - A level is only recorded once the logger is actually installed.
//! - Initialization never panics.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::OnceLock;
use wasm_bindgen::JsValue;

const DEFAULT_LEVEL: &str = "info";

static LOGGER: ConsoleLogger = ConsoleLogger;
static INSTALLED_LEVEL: OnceLock<LevelFilter> = OnceLock::new();

struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format_line(record.level(), record.target(), &record.args().to_string()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Level baked in at compile time through `PORTFOLIO_LOG`.
pub fn build_level() -> &'static str {
    option_env!("PORTFOLIO_LOG").unwrap_or(DEFAULT_LEVEL)
}

pub fn init_logging(level: &str) -> Result<(), String> {
    let level = normalize_level(level)?;

    if let Some(existing) = INSTALLED_LEVEL.get() {
        if *existing == level {
            return Ok(());
        }
        return Err(format!(
            "logging already initialized with level `{existing}`; refusing to switch to `{level}`"
        ));
    }

    log::set_logger(&LOGGER).map_err(|e| format!("failed to install console logger: {e}"))?;
    log::set_max_level(level);
    let _ = INSTALLED_LEVEL.set(level);
    Ok(())
}

fn normalize_level(level: &str) -> Result<LevelFilter, String> {
    level
        .trim()
        .parse::<LevelFilter>()
        .map_err(|_| format!("unsupported log level `{level}`"))
}

fn format_line(level: Level, target: &str, message: &str) -> String {
    format!("[{level}] {target}: {message}")
}
