//! Browser plumbing shared by the UI layer.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::Storage;

/// Access the browser `localStorage` handle.
///
/// # Errors
///
/// Returns an error if the browser window cannot be accessed or
/// `localStorage` is unavailable (private browsing, storage disabled).
pub fn local_storage() -> Result<Storage, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("`window` unavailable outside a browser context"))?
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}
