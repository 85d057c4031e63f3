use super::{escape_html, push_list, DetailEntry};

struct ProjectSheet {
    id: &'static str,
    title: &'static str,
    overview: &'static str,
    features: &'static [&'static str],
    stack: &'static [&'static str],
    approach: &'static str,
    results: &'static [&'static str],
}

impl ProjectSheet {
    fn render(&self) -> String {
        let mut out = String::from("<div class=\"project-detail\">");
        out.push_str(&format!(
            "<h3>Project Overview</h3><p>{}</p>",
            escape_html(self.overview)
        ));
        push_list(&mut out, "Key Features", self.features);

        out.push_str("<h3>Technology Stack</h3><div class=\"tech-stack\">");
        for tech in self.stack {
            out.push_str(&format!(
                "<span class=\"tech-item\">{}</span>",
                escape_html(tech)
            ));
        }
        out.push_str("</div>");

        out.push_str(&format!(
            "<h3>Technical Approach</h3><p>{}</p>",
            escape_html(self.approach)
        ));
        push_list(&mut out, "Impact & Results", self.results);
        out.push_str(
            "<div class=\"project-links\">\
             <a href=\"#\" class=\"btn btn-primary\" target=\"_blank\">View Live Demo</a>\
             <a href=\"#\" class=\"btn btn-secondary\" target=\"_blank\">GitHub Repository</a>\
             </div></div>",
        );
        out
    }
}

const SHEETS: &[ProjectSheet] = &[
    ProjectSheet {
        id: "pixelprompt",
        title: "PixelPrompt - AI Wireframe Generator",
        overview: "An AI-powered tool that turns hand-drawn wireframes into working, \
                   responsive websites by combining computer vision with language models.",
        features: &[
            "AI-powered wireframe recognition",
            "Automatic HTML, CSS and JavaScript generation",
            "Component library integration",
            "Real-time preview and editing",
            "Export to React and Vue",
        ],
        stack: &["React", "Node.js", "OpenAI API", "TensorFlow", "MongoDB", "AWS"],
        approach: "A multi-stage pipeline detects layout elements first and then infers \
                   intent from annotations before emitting code.",
        results: &[
            "Design-to-code time reduced by 70%",
            "1000+ designers and developers served",
            "4.8/5 user satisfaction rating",
        ],
    },
    ProjectSheet {
        id: "license-plate",
        title: "Smart License Plate Detection System",
        overview: "Real-time license plate recognition for automated gate control and \
                   parking management.",
        features: &[
            "Real-time plate detection",
            "OCR with 95% accuracy",
            "Multi-country plate formats",
            "Gate controller integration",
            "Alerts for unauthorized vehicles",
        ],
        stack: &["Python", "OpenCV", "TensorFlow", "YOLO", "Tesseract OCR", "Raspberry Pi"],
        approach: "YOLO locates the plate, then a custom CNN reads the characters; the \
                   pipeline runs at 30 FPS on edge hardware.",
        results: &[
            "95% plate detection accuracy",
            "Under 200ms processing per frame",
            "Deployed in 3 parking facilities",
        ],
    },
    ProjectSheet {
        id: "bus-tracker",
        title: "Smart Bus Arrival Detection System",
        overview: "A mobile app with live bus tracking and arrival predictions for public \
                   transport in Pokhara, Nepal.",
        features: &[
            "Live bus location tracking",
            "Arrival time predictions",
            "Offline map support",
            "Push notifications for delays",
        ],
        stack: &["React Native", "Firebase", "Google Maps API", "Node.js", "MongoDB", "Socket.io"],
        approach: "Arrival times are predicted from historical trips, traffic, weather and \
                   live GPS data.",
        results: &[
            "Average waiting time reduced by 40%",
            "5000+ daily active users",
        ],
    },
    ProjectSheet {
        id: "ecommerce",
        title: "Full-Stack E-Commerce Platform",
        overview: "A complete storefront with secure payments, built to handle high \
                   traffic and transaction volume.",
        features: &[
            "Catalog with search and filtering",
            "Cart and wishlist",
            "Stripe payments",
            "Order and inventory management",
            "Admin dashboard",
        ],
        stack: &["Next.js", "TypeScript", "Stripe API", "MongoDB", "Tailwind CSS", "Vercel"],
        approach: "Serverless API routes over MongoDB Atlas with aggressive caching, image \
                   optimization and lazy loading.",
        results: &[
            "JWT-based authentication",
            "PCI DSS compliant payment processing",
            "Rate limiting on public endpoints",
        ],
    },
    ProjectSheet {
        id: "ai-chatbot",
        title: "AI Customer Service Chatbot",
        overview: "A chatbot that automates first-line customer service around the clock.",
        features: &[
            "Natural language understanding",
            "Multi-language support",
            "Context-aware conversations",
            "Helpdesk escalation",
            "Analytics dashboard",
        ],
        stack: &["Python", "FastAPI", "spaCy", "OpenAI API", "PostgreSQL", "Docker"],
        approach: "Intent classification and sentiment analysis drive response \
                   generation; unresolved conversations are handed to a human agent.",
        results: &[
            "Customer service costs reduced by 60%",
            "80% of queries handled automatically",
            "2-second average response time",
        ],
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_contains_stack() {
        let entry = entries()
            .into_iter()
            .find(|e| e.id == "license-plate")
            .unwrap();
        assert!(entry.body_markup.contains("<span class=\"tech-item\">YOLO</span>"));
        assert!(entry.body_markup.contains("<h3>Impact &amp; Results</h3>"));
        assert!(entry.body_markup.starts_with("<div class=\"project-detail\">"));
    }
}
