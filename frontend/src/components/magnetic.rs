use web_sys::{Element, MouseEvent};
use yew::prelude::*;

/// Translation that pulls an element toward the pointer.
pub fn magnetic_offset(pointer: (f64, f64), centre: (f64, f64), strength: f64) -> (f64, f64) {
    (
        (pointer.0 - centre.0) * strength,
        (pointer.1 - centre.1) * strength,
    )
}

#[derive(Properties, PartialEq)]
pub struct MagneticProps {
    pub children: Children,
    #[prop_or(0.3)]
    pub strength: f64,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Magnetic)]
pub fn magnetic(props: &MagneticProps) -> Html {
    let node = use_node_ref();
    let offset = use_state(|| (0.0, 0.0));

    let onmousemove = {
        let node = node.clone();
        let offset = offset.clone();
        let strength = props.strength;
        Callback::from(move |event: MouseEvent| {
            let Some(element) = node.cast::<Element>() else { return };
            let rect = element.get_bounding_client_rect();
            let centre = (
                rect.left() + rect.width() / 2.0,
                rect.top() + rect.height() / 2.0,
            );
            let pointer = (f64::from(event.client_x()), f64::from(event.client_y()));
            offset.set(magnetic_offset(pointer, centre, strength));
        })
    };

    let onmouseleave = {
        let offset = offset.clone();
        Callback::from(move |_: MouseEvent| offset.set((0.0, 0.0)))
    };

    let (x, y) = *offset;
    let settling = if x == 0.0 && y == 0.0 { "0.5s" } else { "0.15s" };

    html! {
        <div
            ref={node}
            class={classes!("magnetic", props.class.clone())}
            style={format!("display: inline-block; transform: translate3d({x:.2}px, {y:.2}px, 0); transition: transform {settling} ease-out;")}
            {onmousemove}
            {onmouseleave}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_scales_distance_from_centre() {
        assert_eq!(magnetic_offset((110.0, 40.0), (100.0, 50.0), 0.5), (5.0, -5.0));
    }

    #[test]
    fn pointer_on_centre_does_not_move() {
        assert_eq!(magnetic_offset((20.0, 20.0), (20.0, 20.0), 0.8), (0.0, 0.0));
    }
}
