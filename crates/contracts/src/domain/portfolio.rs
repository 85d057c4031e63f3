//! Portfolio grid content.

use crate::shared::filter::{Filterable, ALL};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioItem {
    pub category: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    /// Id in the project detail table.
    pub project: &'static str,
}

impl Filterable for PortfolioItem {
    fn category(&self) -> &str {
        self.category
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title, self.description]
    }
}

/// Filter buttons in display order: `(data-filter, label)`.
pub const CATEGORIES: &[(&str, &str)] = &[
    (ALL, "All"),
    ("web", "Web"),
    ("ai", "AI / ML"),
    ("mobile", "Mobile"),
];

pub fn items() -> Vec<PortfolioItem> {
    vec![
        PortfolioItem {
            category: "ai",
            title: "PixelPrompt",
            description: "AI wireframe to website generator",
            image: "images/pixelprompt.webp",
            project: "pixelprompt",
        },
        PortfolioItem {
            category: "ai",
            title: "License Plate Detection",
            description: "Computer vision for automated gate control",
            image: "images/license-plate.webp",
            project: "license-plate",
        },
        PortfolioItem {
            category: "mobile",
            title: "Bus Arrival Tracker",
            description: "Real-time bus tracking and arrival prediction",
            image: "images/bus-tracker.webp",
            project: "bus-tracker",
        },
        PortfolioItem {
            category: "web",
            title: "E-Commerce Platform",
            description: "Full-stack storefront with Stripe payments",
            image: "images/ecommerce.webp",
            project: "ecommerce",
        },
        PortfolioItem {
            category: "ai",
            title: "Customer Service Chatbot",
            description: "NLP assistant for helpdesk automation",
            image: "images/ai-chatbot.webp",
            project: "ai-chatbot",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::detail::{lookup, DetailKind};

    #[test]
    fn test_every_item_has_details() {
        for item in items() {
            assert!(lookup(DetailKind::Project, item.project).is_ok(), "{}", item.project);
        }
    }

    #[test]
    fn test_every_category_has_a_button() {
        for item in items() {
            assert!(CATEGORIES.iter().any(|(value, _)| *value == item.category));
        }
    }
}
