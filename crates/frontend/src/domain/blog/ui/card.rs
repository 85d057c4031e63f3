use contracts::domain::blog::{self, BlogPost, SharePlatform};
use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::reveal::RevealCard;
use crate::shared::dom;
use crate::shared::icons::icon;

const SHARE_POPUP: &str = "width=600,height=400";

/// Asks before leaving the page, then opens the post in a new tab.
fn open_post(post_id: &str, home_url: &str) {
    let url = blog::post_url(post_id, home_url);
    if dom::confirm(&blog::confirm_message(url)) {
        log::info!("opening blog post {}", url);
        dom::open_window(url, "noopener,noreferrer");
    }
}

/// Opens the share dialog for a `data-platform` value; unknown platforms are
/// ignored.
fn share(platform: &str, title: &str) {
    let Some(platform) = SharePlatform::parse(platform) else {
        log::debug!("unknown share platform {:?}", platform);
        return;
    };
    let url = platform.share_url(title, &dom::current_url());
    dom::open_window(&url, SHARE_POPUP);
}

/// Date and reading time shown above the title.
fn meta_labels(post: &BlogPost) -> (String, String) {
    (post.published_label(), format!("{} min read", post.read_minutes))
}

#[component]
pub fn BlogCard(post: BlogPost, index: usize, hidden: Signal<bool>) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let BlogPost { id: post_id, category, title, excerpt, content, .. } = post;
    let (date, read_time) = meta_labels(&post);

    view! {
        <RevealCard
            class="blog-card"
            index=index
            hidden=hidden
            attr:data-category=category
            attr:data-title=title
            attr:data-content=content
        >
            <div class="blog-meta">
                <span class="blog-date">{date}</span>
                <span class="blog-read-time">{read_time}</span>
            </div>
            <h3>{title}</h3>
            <p>{excerpt}</p>
            <div class="blog-actions">
                <button
                    class="read-more-blog"
                    data-post=post_id
                    on:click=move |_| {
                        let home = ctx.config.with_untracked(|c| c.blog.home_url.clone());
                        open_post(post_id, &home);
                    }
                >
                    "Read More "
                    {icon("external-link")}
                </button>
                <div class="blog-share">
                    {SharePlatform::ALL
                        .iter()
                        .map(|platform| {
                            let platform = platform.as_str();
                            view! {
                                <button
                                    class="social-share"
                                    data-platform=platform
                                    title=format!("Share on {}", platform)
                                    on:click=move |_| share(platform, title)
                                >
                                    {icon("share")}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </RevealCard>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_labels() {
        let posts = blog::posts();
        let post = posts
            .iter()
            .find(|p| p.id == "web-trends")
            .expect("web-trends post");
        let (date, read_time) = meta_labels(post);
        assert_eq!(date, "Jul 12, 2025");
        assert_eq!(read_time, "7 min read");
    }
}
