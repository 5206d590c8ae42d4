//! Short self-introduction.

use leptos::prelude::*;

use crate::components::section::Section;
use crate::state::content::PROFILE;

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <Section title="About">
            <div class="card">
                <p class="card__body">{PROFILE.about}</p>
            </div>
        </Section>
    }
}
