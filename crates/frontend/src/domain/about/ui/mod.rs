use leptos::prelude::*;

use crate::shared::components::count_up::CountUpStat;
use crate::shared::components::reveal::RevealCard;
use crate::shared::components::skills::{SkillBar, SkillCircle};

const STATS: &[(&str, &str)] = &[
    ("50", "Projects Completed"),
    ("30", "Happy Clients"),
    ("3", "Years Experience"),
    ("15", "Technologies"),
];

const SKILL_BARS: &[(&str, u8)] = &[
    ("HTML & CSS", 95),
    ("JavaScript / TypeScript", 90),
    ("React & Next.js", 88),
    ("Node.js", 85),
    ("Python", 80),
];

const SKILL_CIRCLES: &[(&str, u8)] = &[
    ("UI Design", 85),
    ("Machine Learning", 75),
    ("DevOps", 70),
];

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="about">
            <div class="container">
                <h2 class="section-title">"About Me"</h2>
                <div class="about-text">
                    <p>
                        "I'm a developer from Nepal who enjoys turning ideas into products, "
                        "from the first wireframe to a deployed, monitored service."
                    </p>
                </div>
                <div class="stats-grid">
                    {STATS
                        .iter()
                        .map(|(count, label)| view! { <CountUpStat count=*count label=*label /> })
                        .collect_view()}
                </div>
                <div class="skills">
                    {SKILL_BARS
                        .iter()
                        .enumerate()
                        .map(|(index, (name, percent))| {
                            view! {
                                <RevealCard class="skill-row" index=index>
                                    <SkillBar name=*name percent=*percent />
                                </RevealCard>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="skill-circles">
                    {SKILL_CIRCLES
                        .iter()
                        .map(|(name, percent)| view! { <SkillCircle name=*name percent=*percent /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
