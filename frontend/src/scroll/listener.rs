use std::cell::Cell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, AddEventListenerOptions};

use super::smooth::{FrameSubscription, ScrollHandle};

/// Keeps a scroll-driven callback registered until dropped.
///
/// The callback receives the seconds elapsed since its previous call.
pub enum ScrollListener {
    Frames(FrameSubscription),
    Window(WindowListeners),
}

impl ScrollListener {
    /// Follows the smooth-scroll frame loop when one is available, otherwise
    /// falls back to window scroll and resize events.
    pub fn frames_or_window(handle: Option<ScrollHandle>, on_tick: impl Fn(f64) + 'static) -> Self {
        match handle {
            Some(handle) if handle.is_initialized() => {
                on_tick(0.0);
                ScrollListener::Frames(handle.subscribe(move |frame| on_tick(frame.dt)))
            }
            _ => ScrollListener::window(on_tick),
        }
    }

    /// Passive window scroll and resize listeners. Runs `on_tick` once right
    /// away so the first paint is already measured.
    pub fn window(on_tick: impl Fn(f64) + 'static) -> Self {
        let last = Rc::new(Cell::new(None::<f64>));
        let callback = Closure::wrap(Box::new(move || {
            let now = web_sys::js_sys::Date::now();
            let dt = last.get().map_or(0.0, |prev| ((now - prev) / 1000.0).max(0.0));
            last.set(Some(now));
            on_tick(dt);
        }) as Box<dyn FnMut()>);

        if let Some(window) = window() {
            let mut options = AddEventListenerOptions::new();
            options.passive(true);
            for event in ["scroll", "resize"] {
                if window
                    .add_event_listener_with_callback_and_add_event_listener_options(
                        event,
                        callback.as_ref().unchecked_ref(),
                        &options,
                    )
                    .is_err()
                {
                    warn!("could not attach {event} listener");
                }
            }
            let _ = callback
                .as_ref()
                .unchecked_ref::<web_sys::js_sys::Function>()
                .call0(&wasm_bindgen::JsValue::NULL);
        }

        ScrollListener::Window(WindowListeners { callback })
    }
}

pub struct WindowListeners {
    callback: Closure<dyn FnMut()>,
}

impl Drop for WindowListeners {
    fn drop(&mut self) {
        if let Some(window) = window() {
            for event in ["scroll", "resize"] {
                let _ = window.remove_event_listener_with_callback(
                    event,
                    self.callback.as_ref().unchecked_ref(),
                );
            }
        }
    }
}
