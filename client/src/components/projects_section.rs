//! Project cards with technology badges.

use leptos::prelude::*;

use crate::components::section::Section;
use crate::state::content::{PROJECTS, Project, Technology};

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <Section title="開発実績">
            <div class="grid">
                {PROJECTS.iter().copied().map(project_card).collect_view()}
            </div>
        </Section>
    }
}

fn project_card(project: Project) -> impl IntoView {
    view! {
        <div class="card">
            <h3 class="card__title">{project.title}</h3>
            <p class="card__body">{project.description}</p>
            <div class="tech-list">
                {project.technologies.iter().copied().map(tech_badge).collect_view()}
            </div>
            <a class="card__link" href=project.repository_url>
                "GitHub →"
            </a>
        </div>
    }
}

fn tech_badge(tech: Technology) -> impl IntoView {
    view! { <span class=format!("tech-badge {}", tech.tone.class())>{tech.name}</span> }
}
