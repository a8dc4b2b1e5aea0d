//! DOM helpers the framework does not cover.

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

/// Scroll the element with `id` into view and focus the first input
/// control inside it. Runs on the next tick so the violation list has
/// rendered before the viewport moves.
pub fn focus_field_group(id: &str) {
    let id = id.to_string();
    spawn_local(async move {
        TimeoutFuture::new(0).await;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(group) = document.get_element_by_id(&id) else {
            log::warn!("focus target #{id} not found");
            return;
        };

        group.scroll_into_view_with_bool(true);

        let control = group
            .query_selector("input, textarea")
            .ok()
            .flatten()
            .unwrap_or(group);
        if let Ok(element) = control.dyn_into::<web_sys::HtmlElement>() {
            let _ = element.focus();
        }
    });
}
