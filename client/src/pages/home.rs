//! The single portfolio page.

use leptos::prelude::*;

use crate::components::about_section::AboutSection;
use crate::components::articles_section::ArticlesSection;
use crate::components::career_section::CareerSection;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::links_section::LinksSection;
use crate::components::projects_section::ProjectsSection;

/// Header, the content sections in reading order, and the footer.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page">
            <Header/>
            <main class="page__main">
                <AboutSection/>
                <CareerSection/>
                <ProjectsSection/>
                <ArticlesSection/>
                <LinksSection/>
            </main>
            <Footer/>
        </div>
    }
}
