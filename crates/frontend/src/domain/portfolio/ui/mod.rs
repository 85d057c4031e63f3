use contracts::domain::detail::DetailKind;
use contracts::domain::portfolio::{self, PortfolioItem};
use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::lazy_image::LazyImage;
use crate::shared::components::reveal::RevealCard;
use crate::shared::filter::FilterController;
use crate::shared::list_utils::{FilterBar, SearchInput};
use crate::shared::modal::use_modals;

#[component]
pub fn PortfolioSection() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let debounce_ms = ctx.config.with_untracked(|c| c.search.debounce_ms);
    let filter = FilterController::new("portfolio", portfolio::items(), debounce_ms);
    let count = filter.with_items(|items| items.len());

    view! {
        <section id="portfolio" class="portfolio">
            <div class="container">
                <h2 class="section-title">"Portfolio"</h2>
                <div class="portfolio-controls">
                    <FilterBar
                        categories=portfolio::CATEGORIES
                        active=Signal::derive(move || filter.active_category())
                        on_select=Callback::new(move |category: String| filter.set_category(&category))
                    />
                    <SearchInput
                        id="portfolioSearch"
                        placeholder="Search projects..."
                        on_input=Callback::new(move |term: String| filter.search_input(term))
                    />
                </div>
                <div class="portfolio-grid">
                    {(0..count)
                        .map(|index| {
                            let item = filter.with_items(|items| items[index].clone());
                            view! { <PortfolioCard item=item index=index filter=filter /> }
                        })
                        .collect_view()}
                </div>
                <Show when=move || filter.match_count() == 0>
                    <p class="no-results">"No projects match your search."</p>
                </Show>
            </div>
        </section>
    }
}

#[component]
fn PortfolioCard(
    item: PortfolioItem,
    index: usize,
    filter: FilterController<PortfolioItem>,
) -> impl IntoView {
    let modals = use_modals();
    let project = item.project;

    view! {
        <RevealCard
            class="portfolio-item"
            index=index
            tilt=true
            hidden=Signal::derive(move || !filter.is_visible(index))
            attr:data-category=item.category
            attr:data-title=item.title
            attr:data-description=item.description
        >
            <div class="portfolio-image">
                <LazyImage src=item.image alt=item.title />
            </div>
            <div class="portfolio-content">
                <h3>{item.title}</h3>
                <p>{item.description}</p>
                <button
                    class="details-btn"
                    data-project=project
                    on:click=move |_| modals.open(DetailKind::Project, project)
                >
                    "View Details"
                </button>
            </div>
        </RevealCard>
    }
}
