use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{info, warn};
use web_sys::Element;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::reveal::{Parallax, Reveal};
use crate::config;
use crate::content::projects::{self, Project};
use crate::motion::range::map_range;
use crate::pages::not_found::MissingItem;
use crate::scroll::listener::ScrollListener;
use crate::scroll::navigation::{sentinel_progress, Handoff, NavigationEvent};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ProjectDetailsProps {
    pub id: String,
}

#[function_component(ProjectDetails)]
pub fn project_details(props: &ProjectDetailsProps) -> Html {
    let catalog = projects::catalog();
    let Some(project) = catalog.find(&props.id) else {
        warn!("unknown project {}", props.id);
        return html! {
            <MissingItem kind="project" back={Route::Projects} back_label="See all projects" />
        };
    };
    let next = catalog.next_after(project.slug);
    let related = catalog.related(project.slug, 3);

    html! {
        <div class="project-details">
            <style>
                {r#"
                    .project-details {
                        padding-top: 8rem;
                    }
                    .project-hero {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 2rem 4rem;
                    }
                    .project-meta {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 2rem;
                        color: #999;
                        font-size: 0.9rem;
                        text-transform: uppercase;
                        letter-spacing: 0.08em;
                    }
                    .project-hero h1 {
                        font-size: clamp(2.5rem, 7vw, 6rem);
                        margin: 1rem 0;
                    }
                    .project-cover {
                        overflow: hidden;
                        height: 80vh;
                    }
                    .project-cover img, .project-gallery img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .project-body {
                        max-width: 900px;
                        margin: 0 auto;
                        padding: 6rem 2rem;
                        display: grid;
                        gap: 4rem;
                    }
                    .project-results {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                        gap: 2rem;
                    }
                    .project-result strong {
                        display: block;
                        font-size: 3rem;
                    }
                    .project-gallery {
                        display: grid;
                        gap: 2rem;
                        padding: 0 2rem;
                    }
                    .related-projects {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 6rem 2rem;
                    }
                    .related-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                        gap: 2rem;
                    }
                    .next-project {
                        position: relative;
                        height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                        background: #0b0b0d;
                    }
                    .next-project .next-label {
                        color: #999;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                    }
                    .next-project h2 {
                        font-size: clamp(2.5rem, 8vw, 7rem);
                        margin: 1rem 0 2rem;
                    }
                    .next-progress {
                        width: min(420px, 70vw);
                        height: 2px;
                        background: rgba(255, 255, 255, 0.15);
                    }
                    .next-progress-fill {
                        height: 100%;
                        background: #fff;
                    }
                    .hold-tight {
                        margin-top: 1.5rem;
                        opacity: 0;
                        transition: opacity 0.3s ease;
                    }
                    .hold-tight.visible {
                        opacity: 1;
                    }
                "#}
            </style>

            <section class="project-hero">
                <Reveal>
                    <div class="project-meta">
                        <span>{project.client}</span>
                        <span>{project.category}</span>
                        <span>{project.year.to_string()}</span>
                    </div>
                    <h1>{project.title}</h1>
                    <p>{project.summary}</p>
                </Reveal>
            </section>

            <div class="project-cover">
                <Parallax travel={80.0}>
                    <img src={project.image} alt={project.title} />
                </Parallax>
            </div>

            <section class="project-body">
                <Reveal>
                    <h3>{"Services"}</h3>
                    <ul>
                        { for project.services.iter().map(|service| html! { <li>{*service}</li> }) }
                    </ul>
                </Reveal>
                <Reveal>
                    <h3>{"The challenge"}</h3>
                    <p>{project.challenge}</p>
                </Reveal>
                <Reveal>
                    <h3>{"Our approach"}</h3>
                    <p>{project.solution}</p>
                </Reveal>
                <Reveal class="project-results">
                    { for project.results.iter().map(|(figure, label)| html! {
                        <div class="project-result">
                            <strong>{*figure}</strong>
                            <span>{*label}</span>
                        </div>
                    }) }
                </Reveal>
            </section>

            <section class="project-gallery">
                { for project.gallery.iter().map(|image| html! {
                    <Reveal distance={80.0}>
                        <img src={*image} alt={project.title} loading="lazy" />
                    </Reveal>
                }) }
            </section>

            {
                if related.is_empty() {
                    html! {}
                } else {
                    html! {
                        <section class="related-projects">
                            <h2>{"Related work"}</h2>
                            <div class="related-grid">
                                { for related.iter().map(|p| project_card(p)) }
                            </div>
                        </section>
                    }
                }
            }

            <NextProject current={project.slug} next={next.map(|p| p.slug)} />
        </div>
    }
}

pub fn project_card(project: &Project) -> Html {
    html! {
        <Link<Route> to={Route::ProjectDetails { id: project.slug.to_string() }} classes="project-card">
            <div class="project-card-image">
                <img src={project.image} alt={project.title} loading="lazy" />
            </div>
            <div class="project-card-meta">
                <span>{project.category}</span>
                <span>{project.year.to_string()}</span>
            </div>
            <h3>{project.title}</h3>
        </Link<Route>>
    }
}

#[derive(Properties, PartialEq)]
struct NextProjectProps {
    current: &'static str,
    next: Option<&'static str>,
}

/// Sentinel section at the bottom of a project. Scrolling it fully into view
/// moves on to the next project.
#[function_component(NextProject)]
fn next_project(props: &NextProjectProps) -> Html {
    let node = use_node_ref();
    let handoff: Rc<RefCell<Handoff<Timeout>>> = use_mut_ref(|| Handoff::new(props.next.is_some()));
    let progress = use_state(|| 0.0_f64);
    let hold_tight = use_state(|| false);
    let navigator = use_navigator();

    {
        let node = node.clone();
        let progress = progress.clone();
        let hold_tight = hold_tight.clone();
        use_effect_with_deps(
            move |(current, next): &(&'static str, Option<&'static str>)| {
                let next = *next;
                handoff.borrow_mut().enter(next.is_some());
                progress.set(0.0);
                hold_tight.set(false);
                info!("watching sentinel on {current}");

                let tick_handoff = handoff.clone();
                // The mount-time measurement can still see the previous item's
                // offset, before the route reset lands; wait for a real scroll.
                let mounted = Cell::new(false);
                let listener = ScrollListener::window(move |_| {
                    if !mounted.replace(true) {
                        return;
                    }
                    let Some(element) = node.cast::<Element>() else { return };
                    let Some(viewport) = web_sys::window()
                        .and_then(|w| w.inner_height().ok())
                        .and_then(|h| h.as_f64())
                    else {
                        return;
                    };
                    let top = element.get_bounding_client_rect().top();
                    let event = tick_handoff.borrow_mut().update(sentinel_progress(viewport, top));
                    {
                        let handoff = tick_handoff.borrow();
                        let controller = handoff.controller();
                        progress.set(controller.progress());
                        hold_tight.set(controller.is_hold_tight_visible());
                    }
                    if event != Some(NavigationEvent::Dispatch) {
                        return;
                    }
                    let (Some(slug), Some(navigator)) = (next, navigator.clone()) else {
                        warn!("sentinel fired without a target");
                        return;
                    };
                    let timeout = Timeout::new(config::NAVIGATION_SETTLE_MS, move || {
                        info!("advancing to project {slug}");
                        navigator.push(&Route::ProjectDetails { id: slug.to_string() });
                    });
                    tick_handoff.borrow_mut().schedule(timeout);
                });

                move || {
                    drop(listener);
                    // Leaving the item cancels a navigation still settling.
                    handoff.borrow_mut().cancel();
                }
            },
            (props.current, props.next),
        );
    }

    let Some(next) = props.next.and_then(|slug| projects::catalog().find(slug)) else {
        return html! {
            <section class="next-project" ref={node}>
                <Link<Route> to={Route::Projects} classes="next-label">{"Back to all projects"}</Link<Route>>
            </section>
        };
    };

    // The title grows into place as the hand-off fills.
    let title_scale = map_range(*progress, &[0.0, 100.0], &[0.85, 1.0]).unwrap_or(1.0);

    html! {
        <section class="next-project" ref={node}>
            <span class="next-label">{"Next project"}</span>
            <h2 style={format!("transform: scale({title_scale:.3});")}>{next.title}</h2>
            <div class="next-progress">
                <div class="next-progress-fill" style={format!("width: {:.1}%;", *progress)}></div>
            </div>
            <p class={classes!("hold-tight", (*hold_tight).then_some("visible"))}>
                {"Hold tight, taking you there…"}
            </p>
        </section>
    }
}
