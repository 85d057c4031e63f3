//! Viewport intersection helpers on top of `IntersectionObserver`.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

#[derive(Debug, Clone, Copy)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
    /// Stop observing a target after its first intersection.
    pub once: bool,
}

impl ObserverOptions {
    pub const REVEAL: Self = Self {
        threshold: 0.1,
        root_margin: "0px 0px -50px 0px",
        once: true,
    };

    pub const HALF_VISIBLE: Self = Self {
        threshold: 0.5,
        root_margin: "0px",
        once: true,
    };

    pub const LAZY_IMAGE: Self = Self {
        threshold: 0.0,
        root_margin: "0px",
        once: true,
    };

    pub const NAV_SECTION: Self = Self {
        threshold: 0.0,
        root_margin: "-120px 0px -60% 0px",
        once: false,
    };
}

/// Calls `on_enter` with each target that starts intersecting the viewport.
///
/// The observer lives for the rest of the page. Returns `None` when the
/// browser has no `IntersectionObserver`.
pub fn observe<F>(targets: &[Element], options: ObserverOptions, on_enter: F) -> Option<IntersectionObserver>
where
    F: Fn(&Element) + 'static,
{
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                on_enter(&target);
                if options.once {
                    observer.unobserve(&target);
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(options.root_margin);

    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer,
            Err(e) => {
                log::warn!("IntersectionObserver unavailable: {:?}", e);
                return None;
            }
        };
    for target in targets {
        observer.observe(target);
    }
    // kept alive for the page lifetime, like the observer itself
    callback.forget();
    Some(observer)
}

/// Flips to `true` the first time the element returned by `target` scrolls
/// into view. `target` is read inside an effect, so it may track a `NodeRef`.
///
/// Without observer support the element counts as visible right away.
pub fn use_first_visible<F>(target: F, options: ObserverOptions) -> ReadSignal<bool>
where
    F: Fn() -> Option<Element> + 'static,
{
    let (visible, set_visible) = signal(false);
    Effect::new(move |_| {
        let Some(element) = target() else {
            return;
        };
        if observe(&[element], options, move |_| set_visible.set(true)).is_none() {
            set_visible.set(true);
        }
    });
    visible
}
