pub mod footer;
pub mod global_context;
pub mod header;

use leptos::prelude::*;

/// Page frame: fixed header, the routed content and the footer.
///
/// ```text
/// +------------------------------+
/// |            Header            |
/// +------------------------------+
/// |           content            |
/// +------------------------------+
/// |            Footer            |
/// +------------------------------+
/// ```
#[component]
pub fn Shell<C>(content: C) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <header::Header />
        <main class="main-content">
            {content()}
        </main>
        <footer::Footer />
    }
}
