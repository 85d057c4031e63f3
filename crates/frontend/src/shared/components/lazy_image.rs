use leptos::html::Img;
use leptos::prelude::*;

use crate::shared::observer::{use_first_visible, ObserverOptions};

/// Image whose `src` is only set once it reaches the viewport.
#[component]
pub fn LazyImage(
    src: &'static str,
    alt: &'static str,
    #[prop(optional)]
    class: &'static str,
) -> impl IntoView {
    let node = NodeRef::<Img>::new();
    let loaded = use_first_visible(move || node.get().map(Into::into), ObserverOptions::LAZY_IMAGE);

    view! {
        <img
            class=class
            class:lazy=move || !loaded.get()
            data-src=src
            src=move || loaded.get().then_some(src)
            alt=alt
            loading="lazy"
            node_ref=node
        />
    }
}
