//! Page header with avatar, name, role, and the theme toggle.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::state::content::PROFILE;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="site-header__inner">
                <div class="site-header__identity">
                    <img class="site-header__avatar" src=PROFILE.avatar_src alt=PROFILE.name/>
                    <div>
                        <h1 class="site-header__name">{PROFILE.name}</h1>
                        <p class="site-header__role">{PROFILE.role}</p>
                    </div>
                </div>
                <ThemeToggle/>
            </div>
        </header>
    }
}
