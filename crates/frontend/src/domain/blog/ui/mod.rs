pub mod card;

use contracts::domain::blog::{self, BlogPost};
use leptos::prelude::*;

use self::card::BlogCard;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::filter::FilterController;
use crate::shared::list_utils::{FilterBar, SearchInput};

#[component]
pub fn BlogSection() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let (debounce_ms, page_size) =
        ctx.config.with_untracked(|c| (c.search.debounce_ms, c.blog.page_size));
    let filter: FilterController<BlogPost> =
        FilterController::paginated("blog", blog::posts(), page_size, debounce_ms);
    let count = filter.with_items(|posts| posts.len());

    view! {
        <section id="blog" class="blog">
            <div class="container">
                <h2 class="section-title">"Blog"</h2>
                <div class="blog-controls">
                    <FilterBar
                        categories=blog::CATEGORIES
                        button_class="blog-filter-btn"
                        active=Signal::derive(move || filter.active_category())
                        on_select=Callback::new(move |category: String| filter.set_category(&category))
                    />
                    <SearchInput
                        id="blogSearch"
                        placeholder="Search posts..."
                        on_input=Callback::new(move |term: String| filter.search_input(term))
                    />
                </div>
                <div class="blog-grid">
                    {(0..count)
                        .map(|index| {
                            let post = filter.with_items(|posts| posts[index].clone());
                            view! {
                                <BlogCard
                                    post=post
                                    index=index
                                    hidden=Signal::derive(move || !filter.is_visible(index))
                                />
                            }
                        })
                        .collect_view()}
                </div>
                <Show when=move || filter.match_count() == 0>
                    <p class="no-results">"No posts match your search."</p>
                </Show>
                <Show when=move || { filter.total_pages() > 1 }>
                    <PaginationControls
                        current_page=Signal::derive(move || filter.page())
                        total_pages=Signal::derive(move || filter.total_pages())
                        total_count=Signal::derive(move || filter.match_count())
                        on_page_change=Callback::new(move |page: usize| filter.set_page(page))
                    />
                </Show>
            </div>
        </section>
    }
}
