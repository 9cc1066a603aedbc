use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::scramble::ScrambleText;
use crate::content::projects;
use crate::pages::project_details::project_card;

#[function_component(Projects)]
pub fn projects_page() -> Html {
    let category = use_state(|| None::<&'static str>);
    let categories = projects::catalog().categories();
    let shown = projects::in_category(*category);

    let filter_button = |label: &'static str, value: Option<&'static str>| {
        let category = category.clone();
        let active = *category == value;
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            category.set(value);
        });
        html! {
            <button class={classes!("filter-chip", active.then_some("active"))} {onclick}>
                {label}
            </button>
        }
    };

    html! {
        <div class="projects-page">
            <style>
                {r#"
                    .projects-page {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 10rem 2rem 6rem;
                    }
                    .projects-page h1 {
                        font-size: clamp(3rem, 9vw, 8rem);
                        margin: 0 0 2rem;
                    }
                    .filter-row {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.75rem;
                        margin-bottom: 3rem;
                    }
                    .filter-chip {
                        padding: 0.5rem 1.25rem;
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
                    .project-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                        gap: 3rem 2rem;
                    }
                    .project-card {
                        display: block;
                        color: inherit;
                        text-decoration: none;
                    }
                    .project-card-image {
                        overflow: hidden;
                        aspect-ratio: 4 / 3;
                        border-radius: 12px;
                    }
                    .project-card-image img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.6s ease;
                    }
                    .project-card:hover .project-card-image img {
                        transform: scale(1.05);
                    }
                    .project-card-meta {
                        display: flex;
                        justify-content: space-between;
                        margin-top: 1rem;
                        color: #999;
                        font-size: 0.85rem;
                        text-transform: uppercase;
                    }
                "#}
            </style>
            <h1><ScrambleText text="Selected work" /></h1>
            <div class="filter-row">
                { filter_button("All", None) }
                { for categories.into_iter().map(|c| filter_button(c, Some(c))) }
            </div>
            <div class="project-grid">
                { for shown.into_iter().map(|project| html! {
                    <Reveal key={project.slug}>
                        { project_card(project) }
                    </Reveal>
                }) }
            </div>
        </div>
    }
}
