//! Blog cards, their external post links and share targets.

use chrono::NaiveDate;

use crate::shared::filter::{Filterable, ALL};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPost {
    pub id: &'static str,
    pub category: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    /// Searchable body keywords (`data-content`).
    pub content: &'static str,
    pub published: NaiveDate,
    pub read_minutes: u8,
}

impl BlogPost {
    pub fn published_label(&self) -> String {
        self.published.format("%b %d, %Y").to_string()
    }
}

impl Filterable for BlogPost {
    fn category(&self) -> &str {
        self.category
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title, self.content]
    }
}

pub const CATEGORIES: &[(&str, &str)] = &[
    (ALL, "All Posts"),
    ("ai", "AI"),
    ("design", "Design"),
    ("react", "React"),
    ("career", "Career"),
];

const POST_URLS: &[(&str, &str)] = &[
    (
        "web-trends",
        "https://nischal-bhandari.blogspot.com/2025/07/ai-in-web-development-pragmatic.html",
    ),
    (
        "web-color",
        "https://nischal-bhandari.blogspot.com/2025/07/psychology-of-color-in-web-design.html",
    ),
    (
        "react-optimization",
        "https://nischal-bhandari.blogspot.com/2025/07/react-performance-optimization.html",
    ),
];

/// External URL of a post, or `home_url` when the post has none.
pub fn post_url<'a>(post_id: &str, home_url: &'a str) -> &'a str {
    POST_URLS
        .iter()
        .find(|(id, _)| *id == post_id)
        .map(|(_, url)| *url)
        .unwrap_or(home_url)
}

pub fn confirm_message(url: &str) -> String {
    format!(
        "This will open an external blog post in a new tab.\n\nURL: {}\n\nDo you want to continue?",
        url
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharePlatform {
    Twitter,
    LinkedIn,
    Facebook,
}

impl SharePlatform {
    pub const ALL: [SharePlatform; 3] = [
        SharePlatform::Twitter,
        SharePlatform::LinkedIn,
        SharePlatform::Facebook,
    ];

    /// Parses a `data-platform` value. Unknown platforms yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "twitter" => Some(SharePlatform::Twitter),
            "linkedin" => Some(SharePlatform::LinkedIn),
            "facebook" => Some(SharePlatform::Facebook),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SharePlatform::Twitter => "twitter",
            SharePlatform::LinkedIn => "linkedin",
            SharePlatform::Facebook => "facebook",
        }
    }

    pub fn share_url(&self, title: &str, page_url: &str) -> String {
        let title = urlencoding::encode(title);
        let url = urlencoding::encode(page_url);
        match self {
            SharePlatform::Twitter => {
                format!("https://twitter.com/intent/tweet?text={}&url={}", title, url)
            }
            SharePlatform::LinkedIn => {
                format!("https://www.linkedin.com/sharing/share-offsite/?url={}", url)
            }
            SharePlatform::Facebook => {
                format!("https://www.facebook.com/sharer/sharer.php?u={}", url)
            }
        }
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub fn posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: "web-trends",
            category: "ai",
            title: "AI in Web Development: A Pragmatic Look",
            excerpt: "Where AI tooling actually helps day-to-day frontend work, and where it doesn't.",
            content: "ai machine learning copilots code generation frontend",
            published: date(2025, 7, 12),
            read_minutes: 7,
        },
        BlogPost {
            id: "web-color",
            category: "design",
            title: "The Psychology of Color in Web Design",
            excerpt: "How palettes shape trust, attention and conversion.",
            content: "color theory contrast branding accessibility ui",
            published: date(2025, 7, 18),
            read_minutes: 6,
        },
        BlogPost {
            id: "react-optimization",
            category: "react",
            title: "React Performance Optimization",
            excerpt: "Memoization, code splitting and profiling a slow component tree.",
            content: "react memo usecallback lazy suspense profiler rendering",
            published: date(2025, 7, 25),
            read_minutes: 9,
        },
        BlogPost {
            id: "computer-vision-edge",
            category: "ai",
            title: "Running Computer Vision on the Edge",
            excerpt: "Lessons from deploying plate recognition on a Raspberry Pi.",
            content: "opencv yolo raspberry pi inference latency",
            published: date(2025, 6, 2),
            read_minutes: 8,
        },
        BlogPost {
            id: "design-systems",
            category: "design",
            title: "Building a Small Design System",
            excerpt: "Tokens, components and documentation for a two-person team.",
            content: "design tokens components storybook consistency",
            published: date(2025, 5, 20),
            read_minutes: 5,
        },
        BlogPost {
            id: "react-state",
            category: "react",
            title: "State Management Without the Ceremony",
            excerpt: "Choosing between context, reducers and external stores.",
            content: "react context reducer zustand redux state",
            published: date(2025, 5, 3),
            read_minutes: 6,
        },
        BlogPost {
            id: "first-freelance",
            category: "career",
            title: "My First Year Freelancing",
            excerpt: "Pricing, contracts and finding clients as a student developer.",
            content: "freelance pricing clients contracts career",
            published: date(2025, 4, 14),
            read_minutes: 4,
        },
        BlogPost {
            id: "hackathon-notes",
            category: "career",
            title: "What Hackathons Taught Me",
            excerpt: "Scoping, demos and shipping in 36 hours.",
            content: "hackathon teamwork prototype demo career",
            published: date(2025, 3, 30),
            read_minutes: 5,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOME: &str = "https://nischal-bhandari.blogspot.com/";

    #[test]
    fn test_post_url_known_and_fallback() {
        assert_eq!(
            post_url("react-optimization", HOME),
            "https://nischal-bhandari.blogspot.com/2025/07/react-performance-optimization.html"
        );
        assert_eq!(post_url("hackathon-notes", HOME), HOME);
    }

    #[test]
    fn test_confirm_message_names_url() {
        let msg = confirm_message(HOME);
        assert!(msg.contains("URL: https://nischal-bhandari.blogspot.com/"));
        assert!(msg.ends_with("Do you want to continue?"));
    }

    #[test]
    fn test_share_urls_are_encoded() {
        let url = SharePlatform::Twitter.share_url("Color & UX", "https://x.dev/#blog");
        assert_eq!(
            url,
            "https://twitter.com/intent/tweet?text=Color%20%26%20UX&url=https%3A%2F%2Fx.dev%2F%23blog"
        );
        assert_eq!(
            SharePlatform::Facebook.share_url("t", "https://x.dev"),
            "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fx.dev"
        );
    }

    #[test]
    fn test_parse_platform() {
        assert_eq!(SharePlatform::parse("linkedin"), Some(SharePlatform::LinkedIn));
        assert_eq!(SharePlatform::parse("myspace"), None);
        for platform in SharePlatform::ALL {
            assert_eq!(SharePlatform::parse(platform.as_str()), Some(platform));
        }
    }

    #[test]
    fn test_published_label() {
        assert_eq!(posts()[0].published_label(), "Jul 12, 2025");
    }

    #[test]
    fn test_post_ids_unique() {
        let posts = posts();
        for (i, a) in posts.iter().enumerate() {
            assert!(posts[i + 1..].iter().all(|b| b.id != a.id));
        }
    }
}
