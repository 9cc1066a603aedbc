use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <style>
                {r#"
                    .not-found-page {
                        min-height: 80vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1.5rem;
                        text-align: center;
                        padding: 8rem 2rem;
                    }
                    .not-found-page h1 {
                        font-size: clamp(5rem, 18vw, 14rem);
                        line-height: 1;
                        margin: 0;
                    }
                    .not-found-page .back-link {
                        color: #7b8cff;
                        text-decoration: none;
                        border-bottom: 1px solid currentColor;
                    }
                "#}
            </style>
            <h1>{"404"}</h1>
            <p>{"This page wandered off. Let's get you somewhere useful."}</p>
            <Link<Route> to={Route::Home} classes="back-link">{"Back to the homepage"}</Link<Route>>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct MissingItemProps {
    /// "project", "article", ...
    pub kind: AttrValue,
    pub back: Route,
    pub back_label: AttrValue,
}

/// Shown when a detail route names a slug the catalog does not have.
#[function_component(MissingItem)]
pub fn missing_item(props: &MissingItemProps) -> Html {
    html! {
        <div class="not-found-page">
            <h1>{"Not found"}</h1>
            <p>{format!("We couldn't find that {}. It may have been moved or renamed.", props.kind)}</p>
            <Link<Route> to={props.back.clone()} classes="back-link">{props.back_label.clone()}</Link<Route>>
        </div>
    }
}
