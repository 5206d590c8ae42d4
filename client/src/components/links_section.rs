//! External profile links.

use leptos::prelude::*;

use crate::components::section::Section;
use crate::state::content::{LINKS, LinkEntry};

#[component]
pub fn LinksSection() -> impl IntoView {
    view! {
        <Section title="リンク">
            <div class="card">
                <div class="grid grid--tight">
                    {LINKS.iter().copied().map(link_row).collect_view()}
                </div>
            </div>
        </Section>
    }
}

fn link_row(link: LinkEntry) -> impl IntoView {
    view! {
        <a class="link-row" href=link.url>
            <span class=format!("link-icon {}", link.tone.class())>{link.icon}</span>
            <span class="link-row__name">{link.name}</span>
        </a>
    }
}
