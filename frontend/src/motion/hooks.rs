use std::cell::Cell;
use std::rc::Rc;

use log::warn;
use web_sys::Element;
use yew::prelude::*;

use super::binding::{Motion, MotionStyle, Tick};
use super::fraction::{scroll_fraction, ScrollFraction, ScrollOffset};
use super::range::ConfigError;
use crate::scroll::listener::ScrollListener;
use crate::scroll::smooth::ScrollHandle;

/// Reads the element's current fraction, `None` while it is not mounted.
pub fn measure(node: &NodeRef, offset: ScrollOffset) -> Option<ScrollFraction> {
    let element = node.cast::<Element>()?;
    let rect = element.get_bounding_client_rect();
    let viewport = web_sys::window()?.inner_height().ok()?.as_f64()?;
    Some(scroll_fraction(rect.top(), rect.height(), viewport, offset))
}

/// Live fraction of `node` through the `offset` window.
#[hook]
pub fn use_scroll_fraction(node: NodeRef, offset: ScrollOffset) -> ScrollFraction {
    let fraction = use_state(ScrollFraction::default);
    let handle = use_context::<ScrollHandle>();

    {
        let fraction = fraction.clone();
        use_effect_with_deps(
            move |_| {
                let last = Rc::new(Cell::new(None::<f64>));
                let listener = ScrollListener::frames_or_window(handle, move |_| {
                    let Some(next) = measure(&node, offset) else { return };
                    if last.get().map_or(true, |prev| (prev - next.get()).abs() > 1e-4) {
                        last.set(Some(next.get()));
                        fraction.set(next);
                    }
                });
                move || drop(listener)
            },
            (),
        );
    }

    *fraction
}

/// Drives a `Motion` from the scroll position of `node` and returns the style
/// to render. A rejected binding logs and leaves the element unanimated.
#[hook]
pub fn use_scroll_motion<F>(node: NodeRef, offset: ScrollOffset, init: F) -> MotionStyle
where
    F: FnOnce() -> Result<Motion, ConfigError>,
{
    let motion = use_mut_ref(move || {
        let mut motion = init().unwrap_or_else(|err| {
            warn!("motion binding rejected: {err}");
            Motion::new()
        });
        motion.evaluate(ScrollFraction::START, Tick::default());
        motion
    });
    let style = use_state({
        let motion = motion.clone();
        move || motion.borrow().style()
    });
    let handle = use_context::<ScrollHandle>();

    {
        let style = style.clone();
        use_effect_with_deps(
            move |_| {
                let listener = ScrollListener::frames_or_window(handle, move |dt| {
                    let Some(fraction) = measure(&node, offset) else { return };
                    let changed = motion.borrow_mut().evaluate(fraction, Tick::new(dt));
                    if changed {
                        style.set(motion.borrow().style());
                    }
                });
                move || drop(listener)
            },
            (),
        );
    }

    *style
}
