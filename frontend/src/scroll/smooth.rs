use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::{debug, info};

/// Distance under which a scroll request counts as already satisfied.
pub const EPSILON: f64 = 0.5;
/// How far the native position may drift from what we last wrote before we
/// treat it as an external scroll (scrollbar drag, keyboard, find-in-page).
const RESYNC_TOLERANCE: f64 = 2.0;
/// Longest frame step handed to the engine and subscribers. A tab coming back
/// from the background reports its whole hidden time as one frame.
pub const MAX_FRAME_DT: f64 = 0.1;

pub type Easing = fn(f64) -> f64;

pub fn ease_out_expo(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else {
        (1.001 - 2f64.powf(-10.0 * t)).min(1.0)
    }
}

pub fn linear(t: f64) -> f64 {
    t.clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, Copy)]
pub struct SmoothScrollConfig {
    /// Seconds an eased scroll takes to reach its target.
    pub duration: f64,
    pub easing: Easing,
    pub orientation: Orientation,
    pub smooth_wheel: bool,
    pub wheel_multiplier: f64,
    /// Touch drags are left to the browser unless this is set.
    pub smooth_touch: bool,
    pub touch_multiplier: f64,
}

impl Default for SmoothScrollConfig {
    fn default() -> Self {
        Self {
            duration: 1.2,
            easing: ease_out_expo,
            orientation: Orientation::Vertical,
            smooth_wheel: true,
            wheel_multiplier: 1.0,
            smooth_touch: false,
            touch_multiplier: 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Animation {
    from: f64,
    to: f64,
    elapsed: f64,
}

/// Headless scroll engine. Knows nothing about the DOM; the frame loop feeds
/// it the authoritative native position and writes back what it returns.
#[derive(Debug, Clone)]
pub struct SmoothScroll {
    config: SmoothScrollConfig,
    current: f64,
    limit: f64,
    animation: Option<Animation>,
    written: Option<f64>,
    velocity: f64,
}

impl SmoothScroll {
    pub fn new(config: SmoothScrollConfig, position: f64, limit: f64) -> Self {
        let limit = limit.max(0.0);
        Self {
            config,
            current: position.clamp(0.0, limit),
            limit,
            animation: None,
            written: None,
            velocity: 0.0,
        }
    }

    pub fn config(&self) -> &SmoothScrollConfig {
        &self.config
    }

    pub fn position(&self) -> f64 {
        self.current
    }

    /// Where the engine is heading; equals the position when idle.
    pub fn target(&self) -> f64 {
        self.animation.map_or(self.current, |a| a.to)
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    fn set_limit(&mut self, limit: f64) {
        self.limit = limit.max(0.0);
        if let Some(animation) = self.animation.as_mut() {
            animation.to = animation.to.min(self.limit);
        }
    }

    /// Requests a scroll. Returns a position the caller must write right away
    /// (immediate jumps); eased scrolls are written by `frame`.
    pub fn scroll_to(&mut self, target: f64, immediate: bool) -> Option<f64> {
        if !target.is_finite() {
            return None;
        }
        let target = target.clamp(0.0, self.limit);

        if immediate {
            self.animation = None;
            if (target - self.current).abs() < EPSILON {
                return None;
            }
            self.current = target;
            self.written = Some(target);
            return Some(target);
        }

        match self.animation {
            Some(animation) if (animation.to - target).abs() < EPSILON => return None,
            None if (self.current - target).abs() < EPSILON => return None,
            _ => {}
        }
        self.animation = Some(Animation {
            from: self.current,
            to: target,
            elapsed: 0.0,
        });
        None
    }

    /// Feeds a wheel delta in pixels. Returns false when the wheel should be
    /// left to the browser.
    pub fn on_wheel(&mut self, delta: f64) -> bool {
        if !self.config.smooth_wheel {
            return false;
        }
        let base = self.target();
        self.scroll_to(base + delta * self.config.wheel_multiplier, false);
        true
    }

    /// Feeds a touch drag delta in pixels. Touch follows the finger, so the
    /// scaled position is written immediately.
    pub fn on_touch(&mut self, delta: f64) -> Option<f64> {
        if !self.config.smooth_touch {
            return None;
        }
        let target = self.current + delta * self.config.touch_multiplier;
        self.scroll_to(target, true)
    }

    /// Advances one frame. `native` is the position the browser reports right
    /// now; the return value, if any, is the position to write back.
    pub fn frame(&mut self, dt: f64, native: f64, limit: f64) -> Option<f64> {
        self.set_limit(limit);
        let previous = self.current;
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        let write = match self.animation {
            None => {
                self.adopt(native);
                None
            }
            Some(mut animation) => {
                let expected = self.written.unwrap_or(self.current);
                if (native - expected).abs() > RESYNC_TOLERANCE {
                    debug!("external scroll to {native}, dropping animation");
                    self.adopt(native);
                    None
                } else {
                    animation.elapsed += dt;
                    let t = if self.config.duration > 0.0 {
                        (animation.elapsed / self.config.duration).clamp(0.0, 1.0)
                    } else {
                        1.0
                    };
                    let position = if t >= 1.0 {
                        self.animation = None;
                        animation.to
                    } else {
                        self.animation = Some(animation);
                        animation.from + (animation.to - animation.from) * (self.config.easing)(t)
                    };
                    self.current = position;
                    self.written = Some(position);
                    Some(position)
                }
            }
        };

        self.velocity = if dt > 0.0 {
            (self.current - previous) / dt
        } else {
            0.0
        };
        write
    }

    /// Refreshes the limit and adopts the native position unless an animation
    /// currently owns it.
    pub fn observe(&mut self, native: f64, limit: f64) {
        self.set_limit(limit);
        if self.animation.is_none() {
            self.adopt(native);
        }
    }

    fn adopt(&mut self, native: f64) {
        self.animation = None;
        self.current = native.clamp(0.0, self.limit);
        self.written = None;
    }
}

/// Whatever actually owns the scroll position.
pub trait ScrollBackend {
    fn position(&self) -> f64;
    /// Largest reachable position.
    fn limit(&self) -> f64;
    fn set_position(&self, position: f64);
    /// Absolute scroll offset of the first element matching `selector`.
    fn offset_of(&self, selector: &str) -> Option<f64>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScrollTarget {
    Offset(f64),
    Selector(String),
}

impl From<f64> for ScrollTarget {
    fn from(offset: f64) -> Self {
        ScrollTarget::Offset(offset)
    }
}

impl From<&str> for ScrollTarget {
    fn from(selector: &str) -> Self {
        ScrollTarget::Selector(selector.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollOptions {
    pub immediate: bool,
}

impl ScrollOptions {
    pub const IMMEDIATE: ScrollOptions = ScrollOptions { immediate: true };
    pub const SMOOTH: ScrollOptions = ScrollOptions { immediate: false };
}

/// What subscribers see once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollFrame {
    pub position: f64,
    pub limit: f64,
    /// `position / limit`, `0` when nothing can scroll.
    pub progress: f64,
    pub velocity: f64,
    /// `1.0` scrolling forward, `-1.0` backward, `0.0` still.
    pub direction: f64,
    pub dt: f64,
}

type FrameListener = Rc<dyn Fn(&ScrollFrame)>;

struct Shared {
    backend: Rc<dyn ScrollBackend>,
    engine: RefCell<Option<SmoothScroll>>,
    listeners: RefCell<Vec<(u64, FrameListener)>>,
    next_id: Cell<u64>,
}

/// Cloneable handle to the one smooth-scroll instance.
///
/// Built uninitialised around a backend; until `initialize` runs every call
/// falls back to an instant native scroll.
#[derive(Clone)]
pub struct ScrollHandle {
    shared: Rc<Shared>,
}

impl PartialEq for ScrollHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.shared, &other.shared)
    }
}

impl ScrollHandle {
    pub fn new(backend: Rc<dyn ScrollBackend>) -> Self {
        Self {
            shared: Rc::new(Shared {
                backend,
                engine: RefCell::new(None),
                listeners: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    /// Creates the engine. Returns false, keeping the existing engine, when it
    /// was already initialised.
    pub fn initialize(&self, config: SmoothScrollConfig) -> bool {
        let mut engine = self.shared.engine.borrow_mut();
        if engine.is_some() {
            debug!("smooth scroll already initialised, reusing instance");
            return false;
        }
        let backend = &self.shared.backend;
        *engine = Some(SmoothScroll::new(config, backend.position(), backend.limit()));
        info!("smooth scroll initialised ({:?})", config.orientation);
        true
    }

    pub fn is_initialized(&self) -> bool {
        self.shared.engine.borrow().is_some()
    }

    pub fn config(&self) -> Option<SmoothScrollConfig> {
        self.shared.engine.borrow().as_ref().map(|e| *e.config())
    }

    pub fn position(&self) -> f64 {
        match self.shared.engine.borrow().as_ref() {
            Some(engine) => engine.position(),
            None => self.shared.backend.position(),
        }
    }

    pub fn scroll_to(&self, target: impl Into<ScrollTarget>, options: ScrollOptions) {
        let backend = &self.shared.backend;
        let offset = match target.into() {
            ScrollTarget::Offset(offset) => offset,
            ScrollTarget::Selector(selector) => match backend.offset_of(&selector) {
                Some(offset) => offset,
                None => {
                    debug!("scroll target {selector} not found");
                    return;
                }
            },
        };

        let write = match self.shared.engine.borrow_mut().as_mut() {
            Some(engine) => {
                engine.observe(backend.position(), backend.limit());
                engine.scroll_to(offset, options.immediate)
            }
            None => {
                let clamped = offset.clamp(0.0, backend.limit().max(0.0));
                ((clamped - backend.position()).abs() >= EPSILON).then_some(clamped)
            }
        };
        if let Some(position) = write {
            backend.set_position(position);
        }
    }

    pub fn scroll_to_top(&self) {
        self.scroll_to(0.0, ScrollOptions::IMMEDIATE);
    }

    /// Returns true when the wheel was consumed and the native default should
    /// be prevented.
    pub fn on_wheel(&self, delta: f64) -> bool {
        match self.shared.engine.borrow_mut().as_mut() {
            Some(engine) => {
                engine.observe(self.shared.backend.position(), self.shared.backend.limit());
                engine.on_wheel(delta)
            }
            None => false,
        }
    }

    /// Returns true when the touch drag was consumed.
    pub fn on_touch(&self, delta: f64) -> bool {
        let (consumed, write) = match self.shared.engine.borrow_mut().as_mut() {
            Some(engine) if engine.config().smooth_touch => (true, engine.on_touch(delta)),
            _ => (false, None),
        };
        if let Some(position) = write {
            self.shared.backend.set_position(position);
        }
        consumed
    }

    /// Runs one frame of the engine and notifies subscribers. Does nothing
    /// before initialisation. `dt` is capped at [`MAX_FRAME_DT`].
    pub fn tick(&self, dt: f64) -> Option<ScrollFrame> {
        let dt = if dt.is_finite() { dt.clamp(0.0, MAX_FRAME_DT) } else { 0.0 };
        let backend = &self.shared.backend;
        let (write, frame) = {
            let mut engine = self.shared.engine.borrow_mut();
            let engine = engine.as_mut()?;
            let write = engine.frame(dt, backend.position(), backend.limit());
            let limit = engine.limit();
            let velocity = engine.velocity();
            let frame = ScrollFrame {
                position: engine.position(),
                limit,
                progress: if limit > 0.0 { engine.position() / limit } else { 0.0 },
                velocity,
                direction: if velocity > 0.0 {
                    1.0
                } else if velocity < 0.0 {
                    -1.0
                } else {
                    0.0
                },
                dt,
            };
            (write, frame)
        };

        if let Some(position) = write {
            backend.set_position(position);
        }

        // Listeners may subscribe, unsubscribe or scroll while being called.
        let listeners: Vec<FrameListener> = self
            .shared
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener(&frame);
        }
        Some(frame)
    }

    /// Registers a per-frame callback, removed when the subscription drops.
    pub fn subscribe(&self, listener: impl Fn(&ScrollFrame) + 'static) -> FrameSubscription {
        let id = self.shared.next_id.get();
        self.shared.next_id.set(id + 1);
        self.shared
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        FrameSubscription {
            id,
            shared: Rc::downgrade(&self.shared),
        }
    }

    #[cfg(test)]
    pub fn subscriber_count(&self) -> usize {
        self.shared.listeners.borrow().len()
    }
}

#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct FrameSubscription {
    id: u64,
    shared: Weak<Shared>,
}

impl Drop for FrameSubscription {
    fn drop(&mut self) {
        if let Some(shared) = self.shared.upgrade() {
            shared.listeners.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use super::ScrollBackend;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    /// In-memory page used by tests instead of the browser window.
    #[derive(Default)]
    pub struct FakePage {
        pub position: Cell<f64>,
        pub limit: Cell<f64>,
        pub anchors: RefCell<HashMap<String, f64>>,
        pub writes: Cell<usize>,
    }

    impl FakePage {
        pub fn new(limit: f64) -> Self {
            Self {
                limit: Cell::new(limit),
                ..Self::default()
            }
        }
    }

    impl ScrollBackend for FakePage {
        fn position(&self) -> f64 {
            self.position.get()
        }

        fn limit(&self) -> f64 {
            self.limit.get()
        }

        fn set_position(&self, position: f64) {
            self.writes.set(self.writes.get() + 1);
            self.position.set(position.clamp(0.0, self.limit.get()));
        }

        fn offset_of(&self, selector: &str) -> Option<f64> {
            self.anchors.borrow().get(selector).copied()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fake::FakePage;
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    fn setup(limit: f64) -> (Rc<FakePage>, ScrollHandle) {
        let page = Rc::new(FakePage::new(limit));
        let handle = ScrollHandle::new(page.clone());
        (page, handle)
    }

    fn run(handle: &ScrollHandle, frames: usize) {
        for _ in 0..frames {
            handle.tick(FRAME);
        }
    }

    #[test]
    fn easing_is_monotonic_and_bounded() {
        let mut prev = 0.0;
        for i in 0..=100 {
            let v = ease_out_expo(i as f64 / 100.0);
            assert!(v >= prev && v <= 1.0);
            prev = v;
        }
        assert_eq!(ease_out_expo(1.0), 1.0);
    }

    #[test]
    fn engine_follows_the_configured_easing() {
        let config = SmoothScrollConfig {
            duration: 1.0,
            easing: linear,
            ..SmoothScrollConfig::default()
        };
        let mut engine = SmoothScroll::new(config, 0.0, 1000.0);
        assert_eq!(engine.scroll_to(500.0, false), None);
        assert_eq!(engine.frame(0.5, 0.0, 1000.0), Some(250.0));
        assert_eq!(engine.frame(0.5, 250.0, 1000.0), Some(500.0));
        assert!(!engine.is_animating());
    }

    #[test]
    fn initialize_is_idempotent() {
        let (_, handle) = setup(1000.0);
        assert!(handle.initialize(SmoothScrollConfig::default()));
        let tweaked = SmoothScrollConfig {
            duration: 9.0,
            ..SmoothScrollConfig::default()
        };
        assert!(!handle.initialize(tweaked));
        assert_eq!(handle.config().map(|c| c.duration), Some(1.2));
    }

    #[test]
    fn uninitialised_handle_scrolls_natively() {
        let (page, handle) = setup(1000.0);
        handle.scroll_to(400.0, ScrollOptions::SMOOTH);
        assert_eq!(page.position.get(), 400.0);
        assert!(handle.tick(FRAME).is_none());
        assert!(!handle.on_wheel(100.0));
        handle.scroll_to_top();
        assert_eq!(page.position.get(), 0.0);
    }

    #[test]
    fn smooth_scroll_eases_to_target() {
        let (page, handle) = setup(5000.0);
        handle.initialize(SmoothScrollConfig::default());
        handle.scroll_to(1000.0, ScrollOptions::SMOOTH);
        assert_eq!(page.position.get(), 0.0);

        handle.tick(FRAME);
        let early = page.position.get();
        assert!(early > 0.0 && early < 1000.0);

        run(&handle, 90);
        assert_eq!(page.position.get(), 1000.0);
        assert_eq!(handle.position(), 1000.0);
    }

    #[test]
    fn immediate_scroll_snaps_and_cancels_animation() {
        let (page, handle) = setup(5000.0);
        handle.initialize(SmoothScrollConfig::default());
        handle.scroll_to(3000.0, ScrollOptions::SMOOTH);
        run(&handle, 5);
        handle.scroll_to_top();
        assert_eq!(page.position.get(), 0.0);
        run(&handle, 5);
        assert_eq!(page.position.get(), 0.0);
    }

    #[test]
    fn request_within_epsilon_is_a_no_op() {
        let (page, handle) = setup(5000.0);
        page.position.set(200.0);
        handle.initialize(SmoothScrollConfig::default());
        handle.scroll_to(200.3, ScrollOptions::IMMEDIATE);
        handle.scroll_to(200.2, ScrollOptions::SMOOTH);
        assert_eq!(page.writes.get(), 0);
        run(&handle, 3);
        assert_eq!(page.writes.get(), 0);
    }

    #[test]
    fn targets_are_clamped_to_the_page() {
        let (page, handle) = setup(800.0);
        handle.initialize(SmoothScrollConfig::default());
        handle.scroll_to(10_000.0, ScrollOptions::IMMEDIATE);
        assert_eq!(page.position.get(), 800.0);
        handle.scroll_to(-50.0, ScrollOptions::IMMEDIATE);
        assert_eq!(page.position.get(), 0.0);
    }

    #[test]
    fn selector_targets_resolve_through_backend() {
        let (page, handle) = setup(5000.0);
        page.anchors.borrow_mut().insert("#pricing".into(), 2400.0);
        handle.initialize(SmoothScrollConfig::default());
        handle.scroll_to("#pricing", ScrollOptions::IMMEDIATE);
        assert_eq!(page.position.get(), 2400.0);
        handle.scroll_to("#missing", ScrollOptions::IMMEDIATE);
        assert_eq!(page.position.get(), 2400.0);
    }

    #[test]
    fn external_scroll_wins_over_animation() {
        let (page, handle) = setup(5000.0);
        handle.initialize(SmoothScrollConfig::default());
        handle.scroll_to(4000.0, ScrollOptions::SMOOTH);
        run(&handle, 3);
        // Scrollbar drag lands somewhere else entirely.
        page.position.set(123.0);
        run(&handle, 60);
        assert_eq!(page.position.get(), 123.0);
        assert_eq!(handle.position(), 123.0);
    }

    #[test]
    fn idle_engine_tracks_native_position_without_drift() {
        let (page, handle) = setup(5000.0);
        handle.initialize(SmoothScrollConfig::default());
        for step in 1..=1000 {
            page.position.set(step as f64 * 3.7 % 5000.0);
            handle.tick(FRAME);
            assert_eq!(handle.position(), page.position.get());
        }
        assert_eq!(page.writes.get(), 0);
    }

    #[test]
    fn wheel_accumulates_onto_target() {
        let (page, handle) = setup(5000.0);
        handle.initialize(SmoothScrollConfig::default());
        assert!(handle.on_wheel(100.0));
        assert!(handle.on_wheel(100.0));
        run(&handle, 120);
        assert_eq!(page.position.get(), 200.0);
    }

    #[test]
    fn wheel_passes_through_when_disabled() {
        let (_, handle) = setup(5000.0);
        handle.initialize(SmoothScrollConfig {
            smooth_wheel: false,
            ..SmoothScrollConfig::default()
        });
        assert!(!handle.on_wheel(100.0));
    }

    #[test]
    fn touch_is_scaled_when_enabled() {
        let (page, handle) = setup(5000.0);
        handle.initialize(SmoothScrollConfig {
            smooth_touch: true,
            touch_multiplier: 2.0,
            ..SmoothScrollConfig::default()
        });
        assert!(handle.on_touch(50.0));
        assert_eq!(page.position.get(), 100.0);
    }

    #[test]
    fn subscribers_get_frames_until_dropped() {
        let (page, handle) = setup(1000.0);
        handle.initialize(SmoothScrollConfig::default());
        let seen = Rc::new(Cell::new(0usize));
        let subscription = {
            let seen = seen.clone();
            handle.subscribe(move |_| seen.set(seen.get() + 1))
        };
        page.position.set(500.0);
        let frame = handle.tick(FRAME).unwrap();
        assert_eq!(frame.progress, 0.5);
        assert_eq!(frame.direction, 1.0);
        run(&handle, 2);
        assert_eq!(seen.get(), 3);

        drop(subscription);
        assert_eq!(handle.subscriber_count(), 0);
        run(&handle, 2);
        assert_eq!(seen.get(), 3);
    }

    #[test]
    fn long_frame_gaps_are_capped() {
        let (_page, handle) = setup(1000.0);
        handle.initialize(SmoothScrollConfig::default());
        let steps = Rc::new(Cell::new(0.0));
        let _subscription = {
            let steps = steps.clone();
            handle.subscribe(move |frame| steps.set(frame.dt))
        };

        // An hour in a background tab.
        let frame = handle.tick(3600.0).unwrap();
        assert_eq!(frame.dt, MAX_FRAME_DT);
        assert_eq!(steps.get(), MAX_FRAME_DT);

        assert_eq!(handle.tick(FRAME).unwrap().dt, FRAME);
        assert_eq!(handle.tick(f64::NAN).unwrap().dt, 0.0);
    }

    #[test]
    fn listener_may_scroll_during_notification() {
        let (page, handle) = setup(1000.0);
        handle.initialize(SmoothScrollConfig::default());
        let inner = handle.clone();
        let _subscription = handle.subscribe(move |frame| {
            if frame.position > 0.0 {
                inner.scroll_to_top();
            }
        });
        page.position.set(300.0);
        handle.tick(FRAME);
        assert_eq!(page.position.get(), 0.0);
    }
}
