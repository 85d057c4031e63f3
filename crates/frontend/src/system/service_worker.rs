use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::JsFuture;

/// Registers the service worker at `script_url` once the page has loaded,
/// or right away when loading already finished. Browsers without service
/// worker support are skipped.
pub fn register_on_load(script_url: &'static str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let supported = js_sys::Reflect::has(&window.navigator(), &"serviceWorker".into())
        .unwrap_or(false);
    if !supported {
        log::debug!("service workers not supported");
        return;
    }

    let loaded = window
        .document()
        .is_some_and(|d| d.ready_state() == "complete");
    if loaded {
        register(script_url);
    } else {
        let _ = window_event_listener(ev::load, move |_| register(script_url));
    }
}

fn register(script_url: &'static str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let promise = window.navigator().service_worker().register(script_url);
    wasm_bindgen_futures::spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(registration) => log::info!("SW registered: {:?}", registration),
            Err(e) => log::warn!("SW registration failed: {:?}", e),
        }
    });
}
