use contracts::shared::effects::past_threshold;
use leptos::ev;
use leptos::html::{Button, Ul};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::dom;
use crate::shared::icons::icon;
use crate::shared::observer::{observe, ObserverOptions};

/// `(section id, label)` in page order.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("about", "About"),
    ("services", "Services"),
    ("portfolio", "Portfolio"),
    ("blog", "Blog"),
    ("contact", "Contact"),
];

/// Highlights the nav link of whichever section crosses the upper part of
/// the viewport.
fn track_active_section(ctx: AppGlobalContext) {
    let Some(document) = dom::document() else {
        return;
    };
    let sections: Vec<_> = NAV_LINKS
        .iter()
        .filter_map(|(id, _)| document.get_element_by_id(id))
        .collect();
    if sections.len() < NAV_LINKS.len() {
        log::debug!("{} of {} nav sections found", sections.len(), NAV_LINKS.len());
    }
    let observer = observe(&sections, ObserverOptions::NAV_SECTION, move |el| {
        ctx.active_section.set(el.id());
    });
    if observer.is_none() {
        log::warn!("active section highlighting disabled");
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let toggle_ref = NodeRef::<Button>::new();
    let menu_ref = NodeRef::<Ul>::new();
    let scrolled = RwSignal::new(false);

    let update_scrolled = move || {
        let threshold = ctx
            .config
            .with_untracked(|c| c.effects.header_scroll_threshold);
        let now = past_threshold(dom::scroll_y(), threshold);
        if scrolled.get_untracked() != now {
            scrolled.set(now);
        }
    };
    update_scrolled();
    let _ = window_event_listener(ev::scroll, move |_| update_scrolled());

    // Clicks outside the toggle and the menu close the mobile menu.
    let _ = window_event_listener(ev::click, move |ev: ev::MouseEvent| {
        if !ctx.menu_open.get_untracked() {
            return;
        }
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok()) else {
            return;
        };
        let inside = |node: Option<web_sys::Node>| node.is_some_and(|n| n.contains(Some(&target)));
        let in_toggle = inside(toggle_ref.get_untracked().map(Into::into));
        let in_menu = inside(menu_ref.get_untracked().map(Into::into));
        if !in_toggle && !in_menu {
            ctx.close_menu();
        }
    });

    Effect::new(move |ran: Option<()>| {
        if ran.is_none() {
            track_active_section(ctx);
        }
    });

    view! {
        <header class="header" class:scrolled=move || scrolled.get()>
            <nav class="nav">
                <a class="nav-logo" href="#home">"Nischal Bhandari"</a>
                <ul class="nav-menu" class:open=move || ctx.menu_open.get() node_ref=menu_ref>
                    {NAV_LINKS
                        .iter()
                        .map(|(id, label)| {
                            let id = *id;
                            view! {
                                <li class="nav-item">
                                    <a
                                        class="nav-link"
                                        class:active=move || ctx.active_section.get() == id
                                        href=format!("#{}", id)
                                        on:click=move |ev: ev::MouseEvent| {
                                            ev.prevent_default();
                                            if dom::scroll_to_section(id) {
                                                ctx.close_menu();
                                            } else {
                                                log::warn!("section #{} not found", id);
                                            }
                                        }
                                    >
                                        {*label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <button
                    class="nav-toggle"
                    aria-label="Toggle navigation"
                    aria-expanded=move || ctx.menu_open.get().to_string()
                    node_ref=toggle_ref
                    on:click=move |_| ctx.toggle_menu()
                >
                    {move || if ctx.menu_open.get() { icon("x") } else { icon("bars") }}
                </button>
            </nav>
        </header>
    }
}
