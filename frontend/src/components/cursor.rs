use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::motion::spring::{Spring, SpringConfig};
use crate::scroll::smooth::ScrollHandle;

/// Elements that make the ring grow.
const INTERACTIVE: &str = "a, button, [role=\"button\"], input, textarea, select, [data-cursor]";

/// Pointer follower: the dot sits on the pointer, the ring trails it on a spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorState {
    x: Spring,
    y: Spring,
    pointer: Option<(f64, f64)>,
    hovering: bool,
}

impl CursorState {
    pub fn new(config: SpringConfig) -> Self {
        Self {
            x: Spring::new(config, 0.0),
            y: Spring::new(config, 0.0),
            pointer: None,
            hovering: false,
        }
    }

    /// The first sample places the ring directly under the pointer.
    pub fn point(&mut self, x: f64, y: f64) {
        if self.pointer.is_none() {
            self.x.jump(x);
            self.y.jump(y);
        } else {
            self.x.set_target(x);
            self.y.set_target(y);
        }
        self.pointer = Some((x, y));
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    /// Advances the ring; returns whether it moved.
    pub fn step(&mut self, dt: f64) -> bool {
        let moving = !self.x.is_at_rest() || !self.y.is_at_rest();
        self.x.tick(dt);
        self.y.tick(dt);
        moving
    }

    pub fn ring(&self) -> (f64, f64) {
        (self.x.value(), self.y.value())
    }

    pub fn pointer(&self) -> Option<(f64, f64)> {
        self.pointer
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }
}

impl Default for CursorState {
    fn default() -> Self {
        Self::new(SpringConfig::critically_damped(400.0))
    }
}

fn over_interactive(event: &MouseEvent) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest(INTERACTIVE).ok().flatten())
        .is_some()
}

#[function_component(Cursor)]
pub fn cursor() -> Html {
    let state = use_mut_ref(CursorState::default);
    let snapshot = use_state(|| *state.borrow());
    let handle = use_context::<ScrollHandle>();

    {
        let state = state.clone();
        let snapshot = snapshot.clone();
        let follow_directly = handle.is_none();
        use_event_with_window("mousemove", move |event: MouseEvent| {
            let mut cursor = state.borrow_mut();
            let (x, y) = (f64::from(event.client_x()), f64::from(event.client_y()));
            if follow_directly {
                *cursor = CursorState::default();
            }
            cursor.point(x, y);
            cursor.set_hovering(over_interactive(&event));
            snapshot.set(*cursor);
        });
    }

    {
        let state = state.clone();
        let snapshot = snapshot.clone();
        use_effect_with_deps(
            move |handle| {
                let subscription = handle.as_ref().map(|handle| {
                    handle.subscribe(move |frame| {
                        let moved = state.borrow_mut().step(frame.dt);
                        if moved {
                            snapshot.set(*state.borrow());
                        }
                    })
                });
                move || drop(subscription)
            },
            handle,
        );
    }

    let Some((px, py)) = snapshot.pointer() else {
        return html! {};
    };
    let (rx, ry) = snapshot.ring();

    html! {
        <>
            <style>
                {r#"
                    .cursor-dot, .cursor-ring {
                        position: fixed;
                        top: 0;
                        left: 0;
                        pointer-events: none;
                        border-radius: 50%;
                        z-index: 2000;
                        mix-blend-mode: difference;
                    }
                    .cursor-dot {
                        width: 6px;
                        height: 6px;
                        margin: -3px 0 0 -3px;
                        background: #fff;
                    }
                    .cursor-ring {
                        width: 36px;
                        height: 36px;
                        margin: -18px 0 0 -18px;
                        border: 1px solid #fff;
                        transition: width 0.2s, height 0.2s, margin 0.2s;
                    }
                    .cursor-ring.cursor-hover {
                        width: 64px;
                        height: 64px;
                        margin: -32px 0 0 -32px;
                    }
                    @media (hover: none) {
                        .cursor-dot, .cursor-ring { display: none; }
                    }
                "#}
            </style>
            <div class="cursor-dot" style={format!("transform: translate3d({px:.1}px, {py:.1}px, 0);")}></div>
            <div
                class={classes!("cursor-ring", snapshot.is_hovering().then_some("cursor-hover"))}
                style={format!("transform: translate3d({rx:.1}px, {ry:.1}px, 0);")}
            ></div>
        </>
    }
}
