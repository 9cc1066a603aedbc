//! Auto-advance to the next item once its sentinel section is almost fully on
//! screen.
//!
//! The controller is a three-state machine with hysteresis:
//!
//! ```text
//! Rearmed        --(p >= 60)--> HoldTightShown
//! HoldTightShown --(p <  60)--> Rearmed
//! HoldTightShown --(p >= 95)--> Fired          (only with a next item)
//! Fired          --(p <=  5)--> Rearmed
//! ```
//!
//! `p` is the sentinel's entered percentage, see [`sentinel_progress`].

/// Progress at which the "hold tight" message appears.
pub const HOLD_TIGHT_AT: f64 = 60.0;
/// Progress at which navigation is dispatched.
pub const FIRE_AT: f64 = 95.0;
/// Progress at or below which a fired controller re-arms.
pub const REARM_AT: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigationState {
    #[default]
    Rearmed,
    HoldTightShown,
    Fired,
}

/// What the view has to do after a progress update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationEvent {
    ShowHoldTight,
    HideHoldTight,
    /// Navigate to the next item. Emitted once per arm cycle.
    Dispatch,
    Rearmed,
}

/// Percentage of the sentinel that has entered the viewport from below.
///
/// `sentinel_top` is relative to the viewport top. Always in `[0, 100]`.
pub fn sentinel_progress(viewport_height: f64, sentinel_top: f64) -> f64 {
    if viewport_height.is_nan() || viewport_height <= 0.0 {
        return 0.0;
    }
    clamp_progress((viewport_height - sentinel_top) / viewport_height * 100.0)
}

fn clamp_progress(progress: f64) -> f64 {
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 100.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavigationController {
    state: NavigationState,
    progress: f64,
    has_target: bool,
}

impl NavigationController {
    /// `has_target` is false when there is no next item to go to; the
    /// controller then never fires.
    pub fn new(has_target: bool) -> Self {
        Self {
            state: NavigationState::Rearmed,
            progress: 0.0,
            has_target,
        }
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn has_target(&self) -> bool {
        self.has_target
    }

    pub fn is_hold_tight_visible(&self) -> bool {
        self.state != NavigationState::Rearmed
    }

    /// Unconditional reset for a newly entered item.
    pub fn reset(&mut self, has_target: bool) {
        *self = Self::new(has_target);
    }

    /// Evaluates one scroll tick.
    ///
    /// A single tick can cascade through several states (a fast fling from the
    /// top straight past the fire line), in which case the last event wins;
    /// `Dispatch` implies the message is shown.
    pub fn update(&mut self, progress: f64) -> Option<NavigationEvent> {
        self.progress = clamp_progress(progress);
        let p = self.progress;
        let mut event = None;

        if self.state == NavigationState::Rearmed && p >= HOLD_TIGHT_AT {
            self.state = NavigationState::HoldTightShown;
            event = Some(NavigationEvent::ShowHoldTight);
        }

        match self.state {
            NavigationState::HoldTightShown if p >= FIRE_AT && self.has_target => {
                self.state = NavigationState::Fired;
                event = Some(NavigationEvent::Dispatch);
            }
            NavigationState::HoldTightShown if p < HOLD_TIGHT_AT => {
                self.state = NavigationState::Rearmed;
                event = Some(NavigationEvent::HideHoldTight);
            }
            NavigationState::Fired if p <= REARM_AT => {
                self.state = NavigationState::Rearmed;
                event = Some(NavigationEvent::Rearmed);
            }
            _ => {}
        }
        event
    }
}

/// A controller together with the navigation it has scheduled, if any.
///
/// `P` keeps the scheduled navigation alive (a timer in the browser); dropping
/// it cancels the navigation.
#[derive(Debug)]
pub struct Handoff<P> {
    controller: NavigationController,
    pending: Option<P>,
}

impl<P> Handoff<P> {
    pub fn new(has_target: bool) -> Self {
        Self {
            controller: NavigationController::new(has_target),
            pending: None,
        }
    }

    pub fn controller(&self) -> &NavigationController {
        &self.controller
    }

    /// Starts over for a newly entered item. A navigation still settling for
    /// the previous item is cancelled.
    pub fn enter(&mut self, has_target: bool) {
        self.controller.reset(has_target);
        self.pending = None;
    }

    pub fn update(&mut self, progress: f64) -> Option<NavigationEvent> {
        self.controller.update(progress)
    }

    /// Replaces any earlier scheduled navigation.
    pub fn schedule(&mut self, pending: P) {
        self.pending = Some(pending);
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    /// Records being dropped, standing in for a timer.
    struct Pending(Rc<Cell<bool>>);

    impl Drop for Pending {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    fn dispatches(controller: &mut NavigationController, sequence: &[f64]) -> usize {
        sequence
            .iter()
            .filter(|&&p| controller.update(p) == Some(NavigationEvent::Dispatch))
            .count()
    }

    #[test]
    fn starts_rearmed_at_zero() {
        let c = NavigationController::new(true);
        assert_eq!(c.state(), NavigationState::Rearmed);
        assert_eq!(c.progress(), 0.0);
        assert!(!c.is_hold_tight_visible());
    }

    #[test]
    fn progress_formula_is_clamped() {
        assert_eq!(sentinel_progress(1000.0, 1000.0), 0.0);
        assert_eq!(sentinel_progress(1000.0, 1500.0), 0.0);
        assert_eq!(sentinel_progress(1000.0, 0.0), 100.0);
        assert_eq!(sentinel_progress(1000.0, -400.0), 100.0);
        assert_eq!(sentinel_progress(0.0, 10.0), 0.0);
        assert_eq!(sentinel_progress(f64::NAN, 10.0), 0.0);
    }

    #[test]
    fn sentinel_at_forty_percent_shows_hold_tight() {
        let vh = 900.0;
        let progress = sentinel_progress(vh, 0.4 * vh);
        assert!((progress - 60.0).abs() < 1e-9);

        let mut c = NavigationController::new(true);
        // Pin the exact boundary value as well as the computed one.
        assert_eq!(c.update(60.0), Some(NavigationEvent::ShowHoldTight));
        assert_eq!(c.state(), NavigationState::HoldTightShown);
    }

    #[test]
    fn monotonic_scroll_fires_exactly_once() {
        let mut c = NavigationController::new(true);
        let sequence: Vec<f64> = (0..=10).map(|i| f64::from(i) * 10.0).collect();
        assert_eq!(dispatches(&mut c, &sequence), 1);
        assert_eq!(c.state(), NavigationState::Fired);
    }

    #[test]
    fn dip_below_hold_line_then_fire_once() {
        let mut c = NavigationController::new(true);
        assert_eq!(dispatches(&mut c, &[0.0, 65.0, 50.0, 65.0, 96.0]), 1);
    }

    #[test]
    fn lingering_above_fire_line_does_not_refire() {
        let mut c = NavigationController::new(true);
        assert_eq!(dispatches(&mut c, &[70.0, 96.0, 97.0, 100.0, 96.0, 99.0, 80.0, 100.0]), 1);
    }

    #[test]
    fn rearms_only_at_or_below_five() {
        let mut c = NavigationController::new(true);
        c.update(100.0);
        assert_eq!(c.state(), NavigationState::Fired);
        c.update(80.0);
        assert_eq!(c.state(), NavigationState::Fired);
        c.update(6.0);
        assert_eq!(c.state(), NavigationState::Fired);
        assert_eq!(c.update(4.0), Some(NavigationEvent::Rearmed));
        assert_eq!(c.state(), NavigationState::Rearmed);
        assert_eq!(dispatches(&mut c, &[60.0, 95.0]), 1);
    }

    #[test]
    fn rearm_boundary_is_inclusive() {
        let mut c = NavigationController::new(true);
        c.update(100.0);
        c.update(5.0);
        assert_eq!(c.state(), NavigationState::Rearmed);
    }

    #[test]
    fn fast_fling_cascades_to_dispatch() {
        let mut c = NavigationController::new(true);
        assert_eq!(c.update(100.0), Some(NavigationEvent::Dispatch));
        assert!(c.is_hold_tight_visible());
    }

    #[test]
    fn no_target_never_fires() {
        let mut c = NavigationController::new(false);
        assert_eq!(dispatches(&mut c, &[0.0, 60.0, 95.0, 100.0, 100.0, 3.0, 100.0]), 0);
        assert_ne!(c.state(), NavigationState::Fired);
        assert_eq!(c.state(), NavigationState::HoldTightShown);
    }

    #[test]
    fn hold_tight_hides_below_sixty() {
        let mut c = NavigationController::new(true);
        c.update(70.0);
        assert_eq!(c.update(59.9), Some(NavigationEvent::HideHoldTight));
        assert_eq!(c.update(59.0), None);
    }

    #[test]
    fn reset_returns_to_initial_state() {
        let mut c = NavigationController::new(true);
        c.update(100.0);
        c.reset(false);
        assert_eq!(c, NavigationController::new(false));
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        let mut c = NavigationController::new(true);
        c.update(250.0);
        assert_eq!(c.progress(), 100.0);
        c.update(-20.0);
        assert_eq!(c.progress(), 0.0);
        assert_eq!(c.state(), NavigationState::Rearmed);
    }

    #[test]
    fn entering_an_item_cancels_the_settling_navigation() {
        let cancelled = Rc::new(Cell::new(false));
        let mut handoff = Handoff::new(true);
        assert_eq!(handoff.update(100.0), Some(NavigationEvent::Dispatch));
        handoff.schedule(Pending(cancelled.clone()));
        assert!(handoff.is_pending());
        assert!(!cancelled.get());

        handoff.enter(false);
        assert!(cancelled.get());
        assert!(!handoff.is_pending());
        assert_eq!(handoff.controller(), &NavigationController::new(false));
    }

    #[test]
    fn scrolling_away_keeps_the_settling_navigation() {
        let cancelled = Rc::new(Cell::new(false));
        let mut handoff = Handoff::new(true);
        handoff.update(100.0);
        handoff.schedule(Pending(cancelled.clone()));

        handoff.update(0.0);
        assert_eq!(handoff.controller().state(), NavigationState::Rearmed);
        assert!(handoff.is_pending());
        assert!(!cancelled.get());

        handoff.cancel();
        assert!(cancelled.get());
    }
}
