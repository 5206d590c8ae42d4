//! Copyright footer.

use leptos::prelude::*;

use crate::state::content::PROFILE;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p>{PROFILE.copyright}</p>
        </footer>
    }
}
