//! Published articles with platform and date.

use leptos::prelude::*;

use crate::components::section::Section;
use crate::state::content::{ARTICLES, Article};

#[component]
pub fn ArticlesSection() -> impl IntoView {
    view! {
        <Section title="投稿記事">
            <div class="stack">
                {ARTICLES.iter().copied().map(article_card).collect_view()}
            </div>
        </Section>
    }
}

fn article_card(article: Article) -> impl IntoView {
    view! {
        <div class="card">
            <h3 class="card__title">
                <a class="card__title-link" href=article.url>
                    {article.title}
                </a>
            </h3>
            <p class="card__meta">{format!("{} | {}", article.date, article.platform)}</p>
            <p class="card__body">{article.description}</p>
        </div>
    }
}
