use log::warn;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::articles::{self, Block};
use crate::motion::fraction::{Edge, ScrollOffset};
use crate::motion::hooks::use_scroll_fraction;
use crate::pages::articles::article_card;
use crate::pages::not_found::MissingItem;
use crate::Route;

const RELATED_LIMIT: usize = 3;

/// Article top at the viewport top until article bottom at the viewport bottom.
const READING: ScrollOffset = ScrollOffset::new(Edge::new(0.0, 0.0), Edge::new(1.0, 1.0));

/// Link that shares `url` with `title` on X/Twitter.
pub fn share_link(title: &str, url: &str) -> String {
    format!(
        "https://twitter.com/intent/tweet?text={}&url={}",
        urlencoding::encode(title),
        urlencoding::encode(url)
    )
}

fn render_block(block: &Block) -> Html {
    match block {
        Block::Heading(text) => html! { <h2>{*text}</h2> },
        Block::Paragraph(text) => html! { <p>{*text}</p> },
        Block::Quote(text) => html! { <blockquote>{*text}</blockquote> },
        Block::List(items) => html! {
            <ul>{ for items.iter().map(|item| html! { <li>{*item}</li> }) }</ul>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct ArticleDetailsProps {
    pub id: String,
}

#[function_component(ArticleDetails)]
pub fn article_details(props: &ArticleDetailsProps) -> Html {
    let body = use_node_ref();
    let read = use_scroll_fraction(body.clone(), READING);

    let catalog = articles::catalog();
    let Some(article) = catalog.find(&props.id) else {
        warn!("unknown article {}", props.id);
        return html! {
            <MissingItem kind="article" back={Route::Articles} back_label="Back to all articles" />
        };
    };
    let related = catalog.related(article.slug, RELATED_LIMIT);
    let page_url = web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default();

    html! {
        <article class="article-details">
            <style>
                {r#"
                    .article-details {
                        max-width: 760px;
                        margin: 0 auto;
                        padding: 10rem 2rem 6rem;
                        line-height: 1.7;
                    }
                    .article-details h1 {
                        font-size: clamp(2.2rem, 5vw, 3.8rem);
                        line-height: 1.15;
                    }
                    .article-byline {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1.5rem;
                        color: #999;
                        font-size: 0.9rem;
                    }
                    .article-cover {
                        width: 100%;
                        border-radius: 12px;
                        margin: 2rem 0 3rem;
                    }
                    .article-details blockquote {
                        border-left: 3px solid #7b8cff;
                        margin: 2rem 0;
                        padding-left: 1.5rem;
                        font-size: 1.3rem;
                        font-style: italic;
                    }
                    .article-tags {
                        display: flex;
                        gap: 0.5rem;
                        margin-top: 3rem;
                    }
                    .article-tag {
                        padding: 0.3rem 0.8rem;
                        border-radius: 999px;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        font-size: 0.8rem;
                    }
                    .share-link {
                        display: inline-block;
                        margin-top: 2rem;
                        color: #7b8cff;
                    }
                    .reading-progress {
                        position: fixed;
                        top: 0;
                        left: 0;
                        height: 3px;
                        background: #7b8cff;
                        z-index: 600;
                    }
                    .related-articles {
                        margin-top: 6rem;
                    }
                    .related-articles .article-list {
                        display: grid;
                        gap: 2rem;
                    }
                "#}
            </style>
            <div class="reading-progress" style={format!("width: {:.2}%;", read.percent())}></div>
            <Link<Route> to={Route::Articles} classes="back-link">{"← All articles"}</Link<Route>>
            <h1>{article.title}</h1>
            <div class="article-byline">
                <span>{article.author}</span>
                <span>{article.display_date()}</span>
                <span>{format!("{} min read", article.read_minutes)}</span>
            </div>
            <img class="article-cover" src={article.image} alt={article.title} />
            <div class="article-body" ref={body}>
                { for article.body.iter().map(render_block) }
            </div>
            <div class="article-tags">
                { for article.tags.iter().map(|tag| html! { <span class="article-tag">{format!("#{tag}")}</span> }) }
            </div>
            <a class="share-link" href={share_link(article.title, &page_url)} target="_blank" rel="noopener noreferrer">
                {"Share this article"}
            </a>
            {
                if related.is_empty() {
                    html! {}
                } else {
                    html! {
                        <section class="related-articles">
                            <h2>{"Keep reading"}</h2>
                            <div class="article-list">
                                { for related.into_iter().map(|a| html! {
                                    <Reveal key={a.slug}>{ article_card(a) }</Reveal>
                                }) }
                            </div>
                        </section>
                    }
                }
            }
        </article>
    }
}
