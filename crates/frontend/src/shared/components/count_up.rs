use contracts::shared::effects::{parse_count, CountUp};
use gloo_timers::future::TimeoutFuture;
use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::observer::{use_first_visible, ObserverOptions};

/// Statistic that counts up from zero once half of it is on screen.
#[component]
pub fn CountUpStat(
    /// `data-count` value; its leading digits are the target
    count: &'static str,
    label: &'static str,
) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let node = NodeRef::<Div>::new();
    let visible = use_first_visible(move || node.get().map(Into::into), ObserverOptions::HALF_VISIBLE);
    let shown = RwSignal::new(0u32);
    let started = StoredValue::new(false);

    Effect::new(move |_| {
        if !visible.get() || started.get_value() {
            return;
        }
        started.set_value(true);

        let Some(target) = parse_count(count) else {
            log::warn!("data-count {:?} is not a number", count);
            return;
        };
        let effects = ctx.config.with_untracked(|c| c.effects.clone());
        spawn_local(async move {
            for value in CountUp::new(target, effects.count_steps) {
                TimeoutFuture::new(effects.count_interval_ms).await;
                // unmounted
                if shown.try_set(value).is_some() {
                    break;
                }
            }
        });
    });

    view! {
        <div class="stat-card" node_ref=node>
            <div class="stat-number" data-count=count>{move || shown.get()}</div>
            <div class="stat-label">{label}</div>
        </div>
    }
}
