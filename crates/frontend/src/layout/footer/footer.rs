use contracts::shared::effects::past_threshold;
use leptos::ev;
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::dom;
use crate::shared::icons::icon;

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let show_scroll_top = RwSignal::new(false);

    let _ = window_event_listener(ev::scroll, move |_| {
        let threshold = ctx.config.with_untracked(|c| c.effects.scroll_top_threshold);
        let visible = past_threshold(dom::scroll_y(), threshold);
        if show_scroll_top.get_untracked() != visible {
            show_scroll_top.set(visible);
        }
    });

    view! {
        <footer class="footer">
            <div class="footer-content">
                <p>"© 2025 Nischal Bhandari. All rights reserved."</p>
                <Flex gap=FlexGap::Large>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        attr:id="printPage"
                        on_click=move |_| dom::print_page()
                    >
                        {icon("printer")}
                        " Print"
                    </Button>
                </Flex>
            </div>
            <button
                id="scrollToTop"
                class="scroll-to-top"
                class:visible=move || show_scroll_top.get()
                aria-label="Scroll to top"
                on:click=move |_| dom::scroll_to_top()
            >
                {icon("arrow-up")}
            </button>
        </footer>
    }
}
