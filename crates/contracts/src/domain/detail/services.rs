use super::{escape_html, push_list, DetailEntry};

struct ServiceSheet {
    id: &'static str,
    title: &'static str,
    intro: &'static str,
    included: &'static [&'static str],
    call_to_action: &'static str,
}

impl ServiceSheet {
    fn render(&self) -> String {
        let mut out = String::from("<div class=\"service-detail\">");
        out.push_str(&format!(
            "<h3>What I Offer</h3><p>{}</p>",
            escape_html(self.intro)
        ));
        push_list(&mut out, "Services Included", self.included);
        out.push_str(&format!(
            "<div class=\"cta-section\"><h3>Ready to Start?</h3><p>{}</p>\
             <a href=\"#contact\" class=\"btn btn-primary\">Get Free Quote</a></div></div>",
            escape_html(self.call_to_action)
        ));
        out
    }
}

const SHEETS: &[ServiceSheet] = &[
    ServiceSheet {
        id: "web",
        title: "Web Development Services",
        intro: "Modern, responsive websites that look great and perform well on every \
                device and browser.",
        included: &[
            "Frontend development with React and Vue.js",
            "Mobile-first responsive design",
            "Performance and SEO optimization",
            "Accessible UI/UX design",
            "Maintenance and support",
        ],
        call_to_action: "Let's discuss your web development needs.",
    },
    ServiceSheet {
        id: "fullstack",
        title: "Full Stack Development Services",
        intro: "End-to-end delivery, from user interface to database architecture and \
                deployment.",
        included: &[
            "REST and GraphQL APIs",
            "SQL and NoSQL database design",
            "Secure authentication",
            "Cloud deployment on AWS, GCP or Azure",
            "CI/CD pipelines and containers",
        ],
        call_to_action: "Contact me for a detailed proposal.",
    },
    ServiceSheet {
        id: "mobile",
        title: "Mobile App Development",
        intro: "High-performance apps with React Native and Flutter for iOS and Android.",
        included: &[
            "Cross-platform development",
            "Offline-first data sync",
            "Push notifications",
            "App store publishing",
        ],
        call_to_action: "Let's turn your app idea into reality.",
    },
    ServiceSheet {
        id: "ai",
        title: "AI Integration Services",
        intro: "AI and machine learning capabilities built into your existing products.",
        included: &[
            "Chatbots and assistants",
            "Computer vision pipelines",
            "Recommendation systems",
            "LLM integration",
        ],
        call_to_action: "Let's explore how AI can improve your product.",
    },
    ServiceSheet {
        id: "cloud",
        title: "Cloud Solutions & DevOps",
        intro: "Cloud migration and DevOps practices for scalability, reliability and \
                cost efficiency.",
        included: &[
            "Cloud migration planning",
            "Infrastructure as code",
            "Monitoring and alerting",
            "Cost optimization",
        ],
        call_to_action: "Let's plan your cloud migration.",
    },
    ServiceSheet {
        id: "consulting",
        title: "Technical Consulting Services",
        intro: "Guidance on technology stack, architecture and development practices.",
        included: &[
            "Architecture reviews",
            "Technology selection",
            "Code quality audits",
            "Team mentoring",
        ],
        call_to_action: "Let's schedule a consultation.",
    },
];

pub(super) fn entries() -> Vec<DetailEntry> {
    SHEETS
        .iter()
        .map(|sheet| DetailEntry {
            id: sheet.id,
            title: sheet.title,
            body_markup: sheet.render(),
        })
        .collect()
}
