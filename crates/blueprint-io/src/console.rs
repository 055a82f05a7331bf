//! Browser console logging.
//!
//! Thin wrappers over `console.log` / `console.warn`. These require a
//! browser environment (`wasm32-unknown-unknown` target).

use wasm_bindgen::JsValue;

/// Write an informational line to the browser console.
pub fn log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}

/// Write a warning to the browser console.
pub fn warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}
