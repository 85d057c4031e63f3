//! Skill bars and circles that fill in once half visible.

use gloo_timers::future::TimeoutFuture;
use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::observer::{use_first_visible, ObserverOptions};

const BAR_DELAY_MS: u32 = 200;
const CIRCLE_DELAY_MS: u32 = 300;

/// Sets the returned flag `delay_ms` after `node` first becomes half visible.
fn use_delayed_reveal(node: NodeRef<Div>, delay_ms: u32) -> RwSignal<bool> {
    let visible = use_first_visible(move || node.get().map(Into::into), ObserverOptions::HALF_VISIBLE);
    let filled = RwSignal::new(false);
    Effect::new(move |_| {
        if visible.get() && !filled.get_untracked() {
            spawn_local(async move {
                TimeoutFuture::new(delay_ms).await;
                let _ = filled.try_set(true);
            });
        }
    });
    filled
}

#[component]
pub fn SkillBar(name: &'static str, percent: u8) -> impl IntoView {
    let node = NodeRef::<Div>::new();
    let filled = use_delayed_reveal(node, BAR_DELAY_MS);
    let width = format!("{}%", percent.min(100));
    let label = width.clone();
    let data_width = width.clone();

    view! {
        <div class="skill-item">
            <div class="skill-info">
                <span class="skill-name">{name}</span>
                <span class="skill-percent">{label}</span>
            </div>
            <div class="skill-bar">
                <div
                    class="skill-progress"
                    data-width=data_width
                    style:width=move || if filled.get() { width.clone() } else { "0%".to_string() }
                    node_ref=node
                ></div>
            </div>
        </div>
    }
}

#[component]
pub fn SkillCircle(name: &'static str, percent: u8) -> impl IntoView {
    let node = NodeRef::<Div>::new();
    let shown = use_delayed_reveal(node, CIRCLE_DELAY_MS);
    let percent = percent.min(100);

    view! {
        <div class="skill-circle">
            <div
                class="circle-progress"
                style:opacity=move || if shown.get() { "1" } else { "0" }
                style:transform=move || if shown.get() { "scale(1)" } else { "scale(0.8)" }
                data-percent=percent.to_string()
                node_ref=node
            >
                <span class="circle-value">{format!("{}%", percent)}</span>
            </div>
            <span class="circle-label">{name}</span>
        </div>
    }
}
