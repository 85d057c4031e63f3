//! Thin wrappers over `web_sys` window and document calls.
//!
//! All of them degrade to a no-op (or a neutral value) when there is no
//! window, so components can call them unconditionally.

use wasm_bindgen::JsCast;
use web_sys::{
    Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions,
};

/// Controls that can receive focus inside a modal.
pub const FOCUSABLE: &str =
    "button, [href], input, select, textarea, [tabindex]:not([tabindex=\"-1\"])";

pub fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Locks or restores background scrolling on `<body>` and `<html>`.
pub fn set_scroll_lock(locked: bool) {
    let Some(document) = document() else {
        return;
    };
    let value = if locked { "hidden" } else { "" };
    if let Some(body) = document.body() {
        let _ = body.style().set_property("overflow", value);
    }
    if let Some(root) = document
        .document_element()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        let _ = root.style().set_property("overflow", value);
    }
}

/// Focuses the first focusable descendant of `root`. Returns false if there
/// is none.
pub fn focus_first_focusable(root: &Element) -> bool {
    let first = root
        .query_selector(FOCUSABLE)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    match first {
        Some(el) => el.focus().is_ok(),
        None => false,
    }
}

pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Opens `url` in a new browsing context.
pub fn open_window(url: &str, features: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.open_with_url_and_target_and_features(url, "_blank", features) {
            log::warn!("window.open failed for {}: {:?}", url, e);
        }
    }
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Smooth-scrolls the element with `id` to the top of the viewport.
/// Returns false when no such element exists.
pub fn scroll_to_section(id: &str) -> bool {
    let Some(target) = document().and_then(|d| d.get_element_by_id(id)) else {
        return false;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

pub fn print_page() {
    if let Some(window) = web_sys::window() {
        let _ = window.print();
    }
}

pub fn current_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default()
}
