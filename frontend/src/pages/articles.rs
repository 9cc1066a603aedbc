use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::articles::{self, Article};
use crate::Route;

pub fn article_card(article: &Article) -> Html {
    html! {
        <Link<Route> to={Route::ArticleDetails { id: article.slug.to_string() }} classes="article-card">
            <div class="article-card-image">
                <img src={article.image} alt={article.title} loading="lazy" />
            </div>
            <div class="article-card-meta">
                <span>{article.category}</span>
                <span>{article.display_date()}</span>
                <span>{format!("{} min read", article.read_minutes)}</span>
            </div>
            <h3>{article.title}</h3>
            <p>{article.excerpt}</p>
        </Link<Route>>
    }
}

#[function_component(Articles)]
pub fn articles_page() -> Html {
    let tag = use_state(|| None::<&'static str>);
    let tags = articles::catalog().tags();
    let shown = articles::newest_first(&articles::with_tag(*tag));

    let tag_button = |label: &'static str, value: Option<&'static str>| {
        let tag = tag.clone();
        let active = *tag == value;
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            tag.set(value);
        });
        html! {
            <button class={classes!("filter-chip", active.then_some("active"))} {onclick}>
                {label}
            </button>
        }
    };

    html! {
        <div class="articles-page">
            <style>
                {r#"
                    .articles-page {
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 10rem 2rem 6rem;
                    }
                    .articles-page h1 {
                        font-size: clamp(3rem, 8vw, 7rem);
                        margin: 0 0 1rem;
                    }
                    .filter-row {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.75rem;
                        margin: 2rem 0 3rem;
                    }
                    .filter-chip {
                        padding: 0.4rem 1rem;
                        border-radius: 999px;
                        border: 1px solid rgba(255, 255, 255, 0.25);
                        background: none;
                        color: inherit;
                        cursor: pointer;
                    }
                    .filter-chip.active {
                        background: #fff;
                        color: #0b0b0d;
                    }
                    .article-list {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                        gap: 3rem 2rem;
                    }
                    .article-card {
                        display: block;
                        color: inherit;
                        text-decoration: none;
                    }
                    .article-card-image {
                        aspect-ratio: 16 / 10;
                        overflow: hidden;
                        border-radius: 12px;
                    }
                    .article-card-image img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .article-card-meta {
                        display: flex;
                        gap: 1rem;
                        margin-top: 1rem;
                        color: #999;
                        font-size: 0.85rem;
                    }
                    .empty-state {
                        color: #999;
                    }
                "#}
            </style>
            <h1>{"Insights"}</h1>
            <p>{"Notes on design, motion and building for the web."}</p>
            <div class="filter-row">
                { tag_button("All", None) }
                { for tags.into_iter().map(|t| tag_button(t, Some(t))) }
            </div>
            {
                if shown.is_empty() {
                    html! { <p class="empty-state">{"Nothing here yet."}</p> }
                } else {
                    html! {
                        <div class="article-list">
                            { for shown.into_iter().map(|article| html! {
                                <Reveal key={article.slug}>{ article_card(article) }</Reveal>
                            }) }
                        </div>
                    }
                }
            }
        </div>
    }
}
