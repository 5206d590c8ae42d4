//! Career history, one card per position.

use leptos::prelude::*;

use crate::components::section::Section;
use crate::state::content::{CAREER, CareerEntry};

#[component]
pub fn CareerSection() -> impl IntoView {
    view! {
        <Section title="経歴">
            <div class="stack">
                {CAREER.iter().copied().map(career_card).collect_view()}
            </div>
        </Section>
    }
}

fn career_card(entry: CareerEntry) -> impl IntoView {
    view! {
        <div class="card">
            <h3 class="card__title">{format!("{} / {}", entry.company, entry.position)}</h3>
            <p class="card__meta">{format!("期間: {}", entry.period)}</p>
            <p class="card__body">{entry.description}</p>
        </div>
    }
}
