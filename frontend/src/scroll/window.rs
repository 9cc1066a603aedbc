use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, AddEventListenerOptions, Element, EventTarget, TouchEvent, WheelEvent, Window};

use super::smooth::{Orientation, ScrollBackend, ScrollHandle, SmoothScrollConfig};

/// Pixels per line when the browser reports wheel deltas in lines.
const LINE_HEIGHT: f64 = 16.0;

/// Elements carrying this attribute keep native wheel and touch scrolling for
/// themselves and everything inside them.
pub const PREVENT_ATTRIBUTE: &str = "data-scroll-prevent";

/// Scroll geometry of one element along the smooth-scroll axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollBox {
    pub position: f64,
    pub content: f64,
    pub viewport: f64,
    /// Whether the element's overflow lets it scroll at all.
    pub scrollable: bool,
}

impl ScrollBox {
    /// Whether the element itself would move for `delta`. At either end the
    /// input chains on to the page.
    pub fn absorbs(&self, delta: f64) -> bool {
        if !self.scrollable || self.content - self.viewport < 1.0 {
            return false;
        }
        if delta < 0.0 {
            self.position > 0.0
        } else if delta > 0.0 {
            self.position + self.viewport < self.content - 1.0
        } else {
            false
        }
    }
}

/// Computed `overflow-x`/`overflow-y` values that make an element scroll.
pub fn overflow_scrolls(overflow: &str) -> bool {
    matches!(overflow.trim(), "auto" | "scroll" | "overlay")
}

fn scroll_box(window: &Window, element: &Element, orientation: Orientation) -> ScrollBox {
    let property = match orientation {
        Orientation::Vertical => "overflow-y",
        Orientation::Horizontal => "overflow-x",
    };
    let scrollable = element.tag_name().eq_ignore_ascii_case("textarea")
        || window
            .get_computed_style(element)
            .ok()
            .flatten()
            .and_then(|style| style.get_property_value(property).ok())
            .is_some_and(|value| overflow_scrolls(&value));
    let (position, content, viewport) = match orientation {
        Orientation::Vertical => (
            element.scroll_top(),
            element.scroll_height(),
            element.client_height(),
        ),
        Orientation::Horizontal => (
            element.scroll_left(),
            element.scroll_width(),
            element.client_width(),
        ),
    };
    ScrollBox {
        position: f64::from(position),
        content: f64::from(content),
        viewport: f64::from(viewport),
        scrollable,
    }
}

/// True when `delta` should go to an element between `target` and the page
/// body instead of the smooth-scroll engine.
fn handled_natively(target: Option<EventTarget>, orientation: Orientation, delta: f64) -> bool {
    let Some(window) = window() else { return false };
    let mut node = target.and_then(|target| target.dyn_into::<Element>().ok());
    while let Some(element) = node {
        if element.tag_name().eq_ignore_ascii_case("body") {
            break;
        }
        if element.has_attribute(PREVENT_ATTRIBUTE)
            || scroll_box(&window, &element, orientation).absorbs(delta)
        {
            return true;
        }
        node = element.parent_element();
    }
    false
}

/// The browser window as a scroll backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowScroll {
    orientation: Orientation,
}

impl WindowScroll {
    pub fn new(orientation: Orientation) -> Self {
        Self { orientation }
    }
}

impl ScrollBackend for WindowScroll {
    fn position(&self) -> f64 {
        let Some(window) = window() else { return 0.0 };
        let position = match self.orientation {
            Orientation::Vertical => window.scroll_y(),
            Orientation::Horizontal => window.scroll_x(),
        };
        position.unwrap_or(0.0)
    }

    fn limit(&self) -> f64 {
        let Some(window) = window() else { return 0.0 };
        let Some(root) = window.document().and_then(|d| d.document_element()) else {
            return 0.0;
        };
        let (content, viewport) = match self.orientation {
            Orientation::Vertical => (root.scroll_height(), root.client_height()),
            Orientation::Horizontal => (root.scroll_width(), root.client_width()),
        };
        f64::from((content - viewport).max(0))
    }

    fn set_position(&self, position: f64) {
        if let Some(window) = window() {
            match self.orientation {
                Orientation::Vertical => window.scroll_to_with_x_and_y(0.0, position),
                Orientation::Horizontal => window.scroll_to_with_x_and_y(position, 0.0),
            }
        }
    }

    fn offset_of(&self, selector: &str) -> Option<f64> {
        let element = window()?
            .document()?
            .query_selector(selector)
            .ok()
            .flatten()?;
        let rect = element.get_bounding_client_rect();
        let edge = match self.orientation {
            Orientation::Vertical => rect.top(),
            Orientation::Horizontal => rect.left(),
        };
        Some(edge + self.position())
    }
}

thread_local! {
    static INSTANCE: RefCell<Option<ScrollHandle>> = RefCell::new(None);
}

/// Returns the process-wide handle, creating, initialising and wiring it to the
/// window on first use. Later calls hand back the same instance and ignore
/// `config`.
pub fn install(config: SmoothScrollConfig) -> ScrollHandle {
    INSTANCE.with(|slot| {
        if let Some(handle) = slot.borrow().as_ref() {
            return handle.clone();
        }
        let handle = ScrollHandle::new(Rc::new(WindowScroll::new(config.orientation)));
        handle.initialize(config);
        listen_for_input(&handle, config);
        start_frame_loop(handle.clone());
        *slot.borrow_mut() = Some(handle.clone());
        handle
    })
}

fn listen_for_input(handle: &ScrollHandle, config: SmoothScrollConfig) {
    let Some(window) = window() else {
        warn!("no window, smooth scroll input disabled");
        return;
    };
    let mut options = AddEventListenerOptions::new();
    options.passive(false);

    let wheel_handle = handle.clone();
    let on_wheel = Closure::wrap(Box::new(move |event: WheelEvent| {
        // Pinch zoom arrives as ctrl+wheel.
        if event.ctrl_key() {
            return;
        }
        let scale = if event.delta_mode() == WheelEvent::DOM_DELTA_LINE {
            LINE_HEIGHT
        } else {
            1.0
        };
        let delta = match config.orientation {
            Orientation::Vertical => event.delta_y(),
            Orientation::Horizontal => event.delta_y() + event.delta_x(),
        };
        if handled_natively(event.target(), config.orientation, delta) {
            return;
        }
        if wheel_handle.on_wheel(delta * scale) {
            event.prevent_default();
        }
    }) as Box<dyn FnMut(WheelEvent)>);
    if window
        .add_event_listener_with_callback_and_add_event_listener_options(
            "wheel",
            on_wheel.as_ref().unchecked_ref(),
            &options,
        )
        .is_err()
    {
        warn!("could not attach wheel listener");
    }
    // Lives as long as the page.
    on_wheel.forget();

    if !config.smooth_touch {
        return;
    }

    let last_touch = Rc::new(RefCell::new(None::<f64>));
    let touch_point = move |event: &TouchEvent| {
        event.touches().get(0).map(|touch| match config.orientation {
            Orientation::Vertical => f64::from(touch.client_y()),
            Orientation::Horizontal => f64::from(touch.client_x()),
        })
    };

    let start_last = last_touch.clone();
    let on_touch_start = Closure::wrap(Box::new(move |event: TouchEvent| {
        *start_last.borrow_mut() = touch_point(&event);
    }) as Box<dyn FnMut(TouchEvent)>);

    let touch_handle = handle.clone();
    let on_touch_move = Closure::wrap(Box::new(move |event: TouchEvent| {
        let Some(point) = touch_point(&event) else { return };
        let previous = last_touch.borrow_mut().replace(point);
        if let Some(previous) = previous {
            let delta = previous - point;
            if handled_natively(event.target(), config.orientation, delta) {
                return;
            }
            if touch_handle.on_touch(delta) {
                event.prevent_default();
            }
        }
    }) as Box<dyn FnMut(TouchEvent)>);

    let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        "touchstart",
        on_touch_start.as_ref().unchecked_ref(),
        &options,
    );
    let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        "touchmove",
        on_touch_move.as_ref().unchecked_ref(),
        &options,
    );
    on_touch_start.forget();
    on_touch_move.forget();
}

type FrameCallback = Closure<dyn FnMut(f64)>;

/// Drives `handle.tick` from requestAnimationFrame for the rest of the page's
/// life. The callback keeps itself alive through `next`.
fn start_frame_loop(handle: ScrollHandle) {
    let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let next = callback.clone();
    let mut last_time: Option<f64> = None;

    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
        let dt = last_time.map_or(0.0, |last| ((now - last) / 1000.0).max(0.0));
        last_time = Some(now);
        handle.tick(dt);
        if let Some(callback) = next.borrow().as_ref() {
            request_frame(callback);
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(callback) = callback.borrow().as_ref() {
        request_frame(callback);
    };
}

fn request_frame(callback: &FrameCallback) {
    if let Some(window) = window() {
        if window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .is_err()
        {
            warn!("requestAnimationFrame failed, smooth scroll frame loop stopped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn textarea(position: f64) -> ScrollBox {
        ScrollBox {
            position,
            content: 600.0,
            viewport: 200.0,
            scrollable: true,
        }
    }

    #[test]
    fn inner_box_keeps_input_until_its_ends() {
        assert!(textarea(0.0).absorbs(40.0));
        assert!(!textarea(0.0).absorbs(-40.0));
        assert!(textarea(150.0).absorbs(-40.0));
        assert!(textarea(150.0).absorbs(40.0));
        // Bottom reached: the page takes over.
        assert!(!textarea(400.0).absorbs(40.0));
        assert!(textarea(400.0).absorbs(-40.0));
        assert!(!textarea(150.0).absorbs(0.0));
    }

    #[test]
    fn boxes_that_cannot_scroll_pass_input_on() {
        let clipped = ScrollBox {
            scrollable: false,
            ..textarea(0.0)
        };
        assert!(!clipped.absorbs(40.0));

        let fits = ScrollBox {
            content: 200.0,
            ..textarea(0.0)
        };
        assert!(!fits.absorbs(40.0));
    }

    #[test]
    fn only_scrolling_overflow_values_count() {
        assert!(overflow_scrolls("auto"));
        assert!(overflow_scrolls("scroll"));
        assert!(overflow_scrolls(" overlay "));
        assert!(!overflow_scrolls("visible"));
        assert!(!overflow_scrolls("hidden"));
        assert!(!overflow_scrolls("clip"));
    }
}
