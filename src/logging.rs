//! Console Logging
//!
//! Routes the `log` facade to the browser console through a fern dispatcher.

use log::{Level, LevelFilter};
use wasm_bindgen::JsValue;

fn to_console(record: &log::Record) {
    let line = JsValue::from_str(&format!(
        "[{} {}] {}",
        record.level(),
        record.target(),
        record.args()
    ));
    match record.level() {
        Level::Error => web_sys::console::error_1(&line),
        Level::Warn => web_sys::console::warn_1(&line),
        Level::Info => web_sys::console::info_1(&line),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
    }
}

/// Install the global logger. Calling twice is harmless; the second call
/// keeps the first logger.
pub fn init(level: LevelFilter) {
    let result = fern::Dispatch::new()
        .level(level)
        .chain(fern::Output::call(to_console))
        .apply();

    if result.is_err() {
        log::debug!("logger already installed");
    }
}
