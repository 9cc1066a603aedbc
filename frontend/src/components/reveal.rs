use yew::prelude::*;

use crate::motion::binding::{fade_up, parallax};
use crate::motion::fraction::ScrollOffset;
use crate::motion::hooks::use_scroll_motion;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub children: Children,
    /// Pixels the content rises while fading in.
    #[prop_or(48.0)]
    pub distance: f64,
    #[prop_or_default]
    pub class: Classes,
}

/// Fades its children up as they enter the viewport.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let distance = props.distance;
    let style = use_scroll_motion(node.clone(), ScrollOffset::ENTER, move || fade_up(distance));

    html! {
        <div ref={node} class={classes!("reveal", props.class.clone())} style={style.to_css()}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ParallaxProps {
    pub children: Children,
    /// Pixels travelled either side of rest across the element's pass.
    #[prop_or(60.0)]
    pub travel: f64,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Parallax)]
pub fn parallax_layer(props: &ParallaxProps) -> Html {
    let node = use_node_ref();
    let travel = props.travel;
    let style = use_scroll_motion(node.clone(), ScrollOffset::THROUGH, move || parallax(travel));

    html! {
        <div ref={node} class={classes!("parallax", props.class.clone())} style={style.to_css()}>
            { for props.children.iter() }
        </div>
    }
}
