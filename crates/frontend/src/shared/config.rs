//! Webhook endpoint configuration.
//!
//! The hosting page sets `window.__COURIER_WEBHOOK_URL`; builds can bake
//! in a default through the `COURIER_WEBHOOK_URL` environment variable.
//! Submission refuses to run without either.

use wasm_bindgen::JsValue;

const RUNTIME_GLOBAL: &str = "__COURIER_WEBHOOK_URL";

/// Resolve the webhook endpoint URL, if configured. Blank values count
/// as absent.
pub fn webhook_url() -> Option<String> {
    runtime_url()
        .or_else(|| option_env!("COURIER_WEBHOOK_URL").map(str::to_string))
        .filter(|url| !url.trim().is_empty())
}

fn runtime_url() -> Option<String> {
    let window = web_sys::window()?;
    js_sys::Reflect::get(&window, &JsValue::from_str(RUNTIME_GLOBAL))
        .ok()?
        .as_string()
}
