use leptos::ev;
use leptos::prelude::*;
use thaw::*;

use crate::shared::dom;

#[component]
pub fn HeroSection() -> impl IntoView {
    let go_to = |id: &'static str| {
        move |_: ev::MouseEvent| {
            if !dom::scroll_to_section(id) {
                log::warn!("section #{} not found", id);
            }
        }
    };

    view! {
        <section id="home" class="hero">
            <div class="container hero-content">
                <h1 class="hero-title">"Hi, I'm " <span class="highlight">"Nischal Bhandari"</span></h1>
                <p class="hero-subtitle">"Full Stack Developer & AI Enthusiast"</p>
                <p class="hero-description">
                    "I build fast, accessible web applications and bring AI features into real products."
                </p>
                <Flex gap=FlexGap::Large>
                    <Button appearance=ButtonAppearance::Primary on_click=go_to("portfolio")>
                        "View My Work"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=go_to("contact")>
                        "Get In Touch"
                    </Button>
                </Flex>
            </div>
        </section>
    }
}
