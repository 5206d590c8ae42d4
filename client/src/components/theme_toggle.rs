//! Header button that switches between light and dark mode.

use leptos::prelude::*;

use crate::state::theme_context::ThemeContext;

/// Shows the current theme's icon and label; a click advances the theme.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<ThemeContext>();

    view! {
        <button
            class="btn theme-toggle"
            on:click=move |_| theme.toggle()
            title=move || format!("現在: {}モード", theme.theme().mode_name())
        >
            <span class="theme-toggle__icon">{move || theme.icon()}</span>
            <span class="theme-toggle__label">{move || theme.theme().label()}</span>
        </button>
    }
}
