use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::domain::about::ui::AboutSection;
use crate::domain::blog::ui::BlogSection;
use crate::domain::contact::ui::ContactSection;
use crate::domain::hero::ui::HeroSection;
use crate::domain::portfolio::ui::PortfolioSection;
use crate::domain::services::ui::ServicesSection;
use crate::layout::Shell;

/// The whole site is one page of sections.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <HeroSection />
        <AboutSection />
        <ServicesSection />
        <PortfolioSection />
        <BlogSection />
        <ContactSection />
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <section class="not-found">
            <div class="container">
                <h2>"Page not found"</h2>
                <a href="/">"Back to the homepage"</a>
            </div>
        </section>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell content=|| {
                view! {
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                }
                .into_any()
            } />
        </Router>
    }
}
