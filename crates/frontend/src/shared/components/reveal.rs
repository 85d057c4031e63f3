//! Scroll-reveal wrapper with optional tilt-on-hover.

use contracts::shared::effects::{stagger_delay_ms, tilt_transform, TILT_REST};
use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;

use crate::shared::observer::{use_first_visible, ObserverOptions};

/// A card that fades in the first time it scrolls into view.
///
/// `index` staggers the entrance inside a grid (100 ms per position).
/// `hidden` hides the card and replays the fade-in when it shows again.
#[component]
pub fn RevealCard(
    /// Card class, e.g. `service-card`
    class: &'static str,
    /// Position within the parent grid
    #[prop(optional)]
    index: Option<usize>,
    /// Tilt toward the pointer on hover
    #[prop(optional)]
    tilt: bool,
    #[prop(optional)]
    hidden: Option<Signal<bool>>,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<Div>::new();
    let revealed = use_first_visible(move || node.get().map(Into::into), ObserverOptions::REVEAL);
    let transform = RwSignal::new(TILT_REST.to_string());

    let is_hidden = move || hidden.map(|h| h.get()).unwrap_or(false);
    let delay = index
        .map(|i| format!("{}ms", stagger_delay_ms(i)))
        .unwrap_or_default();

    let on_move = move |ev: ev::MouseEvent| {
        if !tilt {
            return;
        }
        let Some(el) = node.get_untracked() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        let x = f64::from(ev.client_x()) - rect.left();
        let y = f64::from(ev.client_y()) - rect.top();
        transform.set(tilt_transform(x, y, rect.width(), rect.height()));
    };

    let on_leave = move |_: ev::MouseEvent| {
        if tilt {
            transform.set(TILT_REST.to_string());
        }
    };

    view! {
        <div
            class=format!("{} fade-in", class)
            class:fade-in-visible=move || revealed.get()
            class:hidden=is_hidden
            style:animation-delay=delay
            style:animation=move || {
                if hidden.is_some() && !is_hidden() { "fadeIn 0.5s ease-in-out" } else { "" }
            }
            style:transform=move || if tilt { transform.get() } else { String::new() }
            node_ref=node
            on:mousemove=on_move
            on:mouseleave=on_leave
        >
            {children()}
        </div>
    }
}
