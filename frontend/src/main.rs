use std::cell::Cell;

use log::{info, Level};
use web_sys::{window, MouseEvent};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod contact;
mod motion {
    pub mod range;
    pub mod fraction;
    pub mod spring;
    pub mod velocity;
    pub mod binding;
    pub mod hooks;
}
mod scroll {
    pub mod smooth;
    pub mod window;
    pub mod listener;
    pub mod navigation;
    pub mod reset;
}
mod content {
    pub mod catalog;
    pub mod articles;
    pub mod projects;
}
mod components {
    pub mod notification;
    pub mod cursor;
    pub mod magnetic;
    pub mod scramble;
    pub mod marquee;
    pub mod loading;
    pub mod reveal;
}
mod pages {
    pub mod home;
    pub mod projects;
    pub mod project_details;
    pub mod articles;
    pub mod article_details;
    pub mod contact;
    pub mod not_found;
}

use components::{cursor::Cursor, loading::LoadingScreen, notification::ToastProvider};
use pages::{
    article_details::ArticleDetails,
    articles::Articles,
    contact::Contact,
    home::Home,
    not_found::NotFound,
    project_details::ProjectDetails,
    projects::Projects,
};
use scroll::listener::ScrollListener;
use scroll::reset::ScrollReset;
use scroll::smooth::ScrollHandle;

/// Scroll offset past which the nav switches to its compact style.
const NAV_SCROLLED_AT: f64 = 80.0;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/projects")]
    Projects,
    #[at("/project/:id")]
    ProjectDetails { id: String },
    #[at("/articles")]
    Articles,
    #[at("/articles/:id")]
    ArticleDetails { id: String },
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Projects => {
            info!("Rendering Projects page");
            html! { <Projects /> }
        }
        Route::ProjectDetails { id } => {
            info!("Rendering Project page for {id}");
            html! { <ProjectDetails {id} /> }
        }
        Route::Articles => {
            info!("Rendering Articles page");
            html! { <Articles /> }
        }
        Route::ArticleDetails { id } => {
            info!("Rendering Article page for {id}");
            html! { <ArticleDetails {id} /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let handle = use_context::<ScrollHandle>();

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |handle| {
                let last = Cell::new(None::<bool>);
                let listener = ScrollListener::frames_or_window(handle.clone(), move |_| {
                    let offset = window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
                    let scrolled = offset > NAV_SCROLLED_AT;
                    if last.replace(Some(scrolled)) != Some(scrolled) {
                        is_scrolled.set(scrolled);
                    }
                });
                move || drop(listener)
            },
            handle,
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"studio"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class} onclick={close_menu}>
                    <a href="/#services" class="nav-link">{"Services"}</a>
                    <Link<Route> to={Route::Projects} classes="nav-link">{"Work"}</Link<Route>>
                    <Link<Route> to={Route::Articles} classes="nav-link">{"Insights"}</Link<Route>>
                    <Link<Route> to={Route::Contact} classes="nav-cta">{"Contact"}</Link<Route>>
                </div>
            </div>
        </nav>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <span>{"© Studio. Made with care."}</span>
            <div class="footer-links">
                <Link<Route> to={Route::Projects}>{"Work"}</Link<Route>>
                <Link<Route> to={Route::Articles}>{"Insights"}</Link<Route>>
                <Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>>
            </div>
        </footer>
    }
}

#[function_component]
fn App() -> Html {
    // One smooth-scroll instance for the whole session; it outlives every page.
    let scroll = use_memo(|_| scroll::window::install(config::smooth_scroll()), ());

    html! {
        <BrowserRouter>
            <ContextProvider<ScrollHandle> context={(*scroll).clone()}>
                <ToastProvider>
                    <style>
                        {r#"
                            body {
                                margin: 0;
                                background: #0b0b0d;
                                color: #f4f4f5;
                                font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                            }
                            .top-nav {
                                position: fixed;
                                top: 0;
                                left: 0;
                                right: 0;
                                z-index: 500;
                                transition: background 0.3s ease, padding 0.3s ease;
                                padding: 1.5rem 0;
                            }
                            .top-nav.scrolled {
                                background: rgba(11, 11, 13, 0.85);
                                backdrop-filter: blur(10px);
                                padding: 0.75rem 0;
                            }
                            .nav-content {
                                max-width: 1200px;
                                margin: 0 auto;
                                padding: 0 2rem;
                                display: flex;
                                align-items: center;
                                justify-content: space-between;
                            }
                            .nav-logo {
                                font-weight: 700;
                                font-size: 1.4rem;
                                color: inherit;
                                text-decoration: none;
                            }
                            .nav-right {
                                display: flex;
                                align-items: center;
                                gap: 2rem;
                            }
                            .nav-link, .nav-cta, .footer-links a {
                                color: inherit;
                                text-decoration: none;
                            }
                            .nav-cta {
                                padding: 0.5rem 1.25rem;
                                border-radius: 999px;
                                border: 1px solid rgba(255, 255, 255, 0.4);
                            }
                            .burger-menu {
                                display: none;
                                background: none;
                                border: none;
                                flex-direction: column;
                                gap: 5px;
                                cursor: pointer;
                            }
                            .burger-menu span {
                                width: 24px;
                                height: 2px;
                                background: #fff;
                            }
                            .site-footer {
                                max-width: 1200px;
                                margin: 0 auto;
                                padding: 3rem 2rem;
                                display: flex;
                                justify-content: space-between;
                                color: #999;
                                border-top: 1px solid rgba(255, 255, 255, 0.12);
                            }
                            .footer-links {
                                display: flex;
                                gap: 1.5rem;
                            }
                            @media (max-width: 800px) {
                                .burger-menu {
                                    display: flex;
                                }
                                .nav-right {
                                    display: none;
                                }
                                .nav-right.mobile-menu-open {
                                    display: flex;
                                    flex-direction: column;
                                    position: absolute;
                                    top: 100%;
                                    left: 0;
                                    right: 0;
                                    padding: 2rem;
                                    background: #0b0b0d;
                                }
                            }
                        "#}
                    </style>
                    <LoadingScreen />
                    <Cursor />
                    <ScrollReset />
                    <Nav />
                    <main>
                        <Switch<Route> render={switch} />
                    </main>
                    <Footer />
                </ToastProvider>
            </ContextProvider<ScrollHandle>>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
