//! Titled block shared by every content section.

use leptos::prelude::*;

#[component]
pub fn Section(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class="section">
            <h2 class="section__title">{title}</h2>
            {children()}
        </section>
    }
}
