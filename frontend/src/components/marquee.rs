use yew::prelude::*;

use crate::motion::range::wrap;
use crate::motion::velocity::VelocityTracker;
use crate::scroll::smooth::ScrollHandle;

/// How much each px/s of scroll velocity speeds the band up.
const VELOCITY_FACTOR: f64 = 0.004;

/// Horizontal offset of a looping band, in percent of its doubled track.
///
/// The band runs in the direction of the last scroll and speeds up with
/// scroll velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarqueeState {
    offset: f64,
    elapsed: f64,
    velocity: VelocityTracker,
}

impl MarqueeState {
    pub fn new() -> Self {
        Self {
            offset: 0.0,
            elapsed: 0.0,
            velocity: VelocityTracker::new(0.2),
        }
    }

    /// Advances by `dt` seconds given the current scroll position. Returns the
    /// new offset, always within `[-50, 0)`.
    pub fn advance(&mut self, dt: f64, scroll_position: f64, base_speed: f64) -> f64 {
        if !dt.is_finite() || dt <= 0.0 {
            return self.offset;
        }
        self.elapsed += dt;
        let velocity = self.velocity.sample(scroll_position, self.elapsed);
        let speed = base_speed * self.velocity.sign() * (1.0 + velocity.abs() * VELOCITY_FACTOR);
        self.offset = wrap(-50.0, 0.0, self.offset - speed * dt);
        self.offset
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }
}

impl Default for MarqueeState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Properties, PartialEq)]
pub struct MarqueeProps {
    pub items: Vec<AttrValue>,
    /// Percent of the track per second while the page is still.
    #[prop_or(2.0)]
    pub base_speed: f64,
}

#[function_component(Marquee)]
pub fn marquee(props: &MarqueeProps) -> Html {
    let state = use_mut_ref(MarqueeState::new);
    let offset = use_state(|| 0.0_f64);
    let handle = use_context::<ScrollHandle>();

    {
        let offset = offset.clone();
        let base_speed = props.base_speed;
        use_effect_with_deps(
            move |handle| {
                let subscription = handle.as_ref().map(|handle| {
                    handle.subscribe(move |frame| {
                        let next = state.borrow_mut().advance(frame.dt, frame.position, base_speed);
                        offset.set(next);
                    })
                });
                move || drop(subscription)
            },
            handle,
        );
    }

    // Two copies so the loop has no visible seam.
    let track = props
        .items
        .iter()
        .chain(props.items.iter())
        .map(|item| html! { <span class="marquee-item">{item.clone()}<span class="marquee-dot">{"✦"}</span></span> });

    html! {
        <div class="marquee" aria-hidden="true">
            <style>
                {r#"
                    .marquee {
                        overflow: hidden;
                        white-space: nowrap;
                        padding: 2rem 0;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .marquee-track {
                        display: inline-flex;
                        will-change: transform;
                    }
                    .marquee-item {
                        font-size: clamp(2rem, 6vw, 5rem);
                        font-weight: 700;
                        text-transform: uppercase;
                        padding-right: 2rem;
                    }
                    .marquee-dot {
                        padding-left: 2rem;
                        color: #7b8cff;
                    }
                "#}
            </style>
            <div class="marquee-track" style={format!("transform: translate3d({:.3}%, 0, 0);", *offset)}>
                { for track }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    #[test]
    fn drifts_at_base_speed_when_still() {
        let mut m = MarqueeState::new();
        m.advance(FRAME, 0.0, 6.0);
        let offset = m.advance(FRAME, 0.0, 6.0);
        assert!((offset - (-0.2)).abs() < 1e-9);
    }

    #[test]
    fn scrolling_up_reverses_and_keeps_direction() {
        let mut m = MarqueeState::new();
        m.advance(FRAME, 1000.0, 6.0);
        m.advance(FRAME, 990.0, 6.0);
        let before = m.offset();
        // Scrolling stopped; the band keeps running the way it last went.
        m.advance(FRAME, 990.0, 6.0);
        let after = m.advance(FRAME, 990.0, 6.0);
        assert!(after > before);
        assert!(m.velocity.sign() < 0.0);
    }

    #[test]
    fn fast_scroll_speeds_up_the_band() {
        let mut still = MarqueeState::new();
        let mut fast = MarqueeState::new();
        still.advance(FRAME, 0.0, 6.0);
        fast.advance(FRAME, 0.0, 6.0);
        let still_offset = still.advance(FRAME, 0.0, 6.0);
        let fast_offset = fast.advance(FRAME, 40.0, 6.0);
        assert!(fast_offset < still_offset);
    }

    #[test]
    fn offset_stays_wrapped() {
        let mut m = MarqueeState::new();
        for n in 0..10_000 {
            let offset = m.advance(FRAME, f64::from(n) * 15.0, 6.0);
            assert!((-50.0..0.0).contains(&offset));
        }
    }
}
