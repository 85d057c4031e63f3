use contracts::domain::detail::DetailKind;
use leptos::prelude::*;

use crate::shared::components::reveal::RevealCard;
use crate::shared::modal::use_modals;

struct ServiceCard {
    service: &'static str,
    icon: &'static str,
    title: &'static str,
    summary: &'static str,
}

const CARDS: &[ServiceCard] = &[
    ServiceCard {
        service: "web",
        icon: "fas fa-code",
        title: "Web Development",
        summary: "Responsive, fast websites and web apps built with modern frameworks.",
    },
    ServiceCard {
        service: "fullstack",
        icon: "fas fa-layer-group",
        title: "Full Stack Development",
        summary: "End-to-end applications from database design to polished UI.",
    },
    ServiceCard {
        service: "mobile",
        icon: "fas fa-mobile-alt",
        title: "Mobile Apps",
        summary: "Cross-platform mobile apps with a native feel.",
    },
    ServiceCard {
        service: "ai",
        icon: "fas fa-robot",
        title: "AI Integration",
        summary: "Chatbots, computer vision and LLM features wired into your product.",
    },
    ServiceCard {
        service: "cloud",
        icon: "fas fa-cloud",
        title: "Cloud & DevOps",
        summary: "Deployments, CI/CD pipelines and infrastructure that scales.",
    },
    ServiceCard {
        service: "consulting",
        icon: "fas fa-lightbulb",
        title: "Technical Consulting",
        summary: "Architecture reviews, technology choices and code audits.",
    },
];

#[component]
pub fn ServicesSection() -> impl IntoView {
    let modals = use_modals();

    view! {
        <section id="services" class="services">
            <div class="container">
                <h2 class="section-title">"Services"</h2>
                <div class="services-grid">
                    {CARDS
                        .iter()
                        .enumerate()
                        .map(|(index, card)| {
                            let service = card.service;
                            view! {
                                <RevealCard class="service-card" index=index tilt=true>
                                    <div class="service-icon">
                                        <i class=card.icon></i>
                                    </div>
                                    <h3>{card.title}</h3>
                                    <p>{card.summary}</p>
                                    <button
                                        class="read-more-btn"
                                        data-service=service
                                        on:click=move |_| modals.open(DetailKind::Service, service)
                                    >
                                        "Read More"
                                    </button>
                                </RevealCard>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::detail::ids;

    #[test]
    fn test_every_card_has_details() {
        let known = ids(DetailKind::Service);
        assert_eq!(CARDS.len(), known.len());
        for card in CARDS {
            assert!(known.contains(&card.service), "{}", card.service);
        }
    }
}
