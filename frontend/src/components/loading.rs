use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

use crate::scroll::smooth::ease_out_expo;

const COUNT_SECONDS: f64 = 1.6;
const FADE_MS: u32 = 700;

/// Counter value after `elapsed` seconds of a `duration`-second count.
pub fn loading_count(elapsed: f64, duration: f64) -> u32 {
    if duration <= 0.0 {
        return 100;
    }
    let t = (elapsed / duration).clamp(0.0, 1.0);
    let value = if t >= 1.0 { 100.0 } else { ease_out_expo(t) * 100.0 };
    value.floor() as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Counting(u32),
    Leaving,
    Gone,
}

#[function_component(LoadingScreen)]
pub fn loading_screen() -> Html {
    let phase = use_state(|| Phase::Counting(0));

    {
        let phase = phase.clone();
        use_effect_with_deps(
            move |_| {
                let started = web_sys::js_sys::Date::now();
                let mut finished = false;
                let interval = Interval::new(16, move || {
                    if finished {
                        return;
                    }
                    let elapsed = (web_sys::js_sys::Date::now() - started) / 1000.0;
                    let count = loading_count(elapsed, COUNT_SECONDS);
                    if count < 100 {
                        phase.set(Phase::Counting(count));
                        return;
                    }
                    finished = true;
                    phase.set(Phase::Leaving);
                    let phase = phase.clone();
                    Timeout::new(FADE_MS, move || phase.set(Phase::Gone)).forget();
                });
                move || drop(interval)
            },
            (),
        );
    }

    let count = match *phase {
        Phase::Counting(count) => count,
        Phase::Leaving => 100,
        Phase::Gone => return html! {},
    };

    html! {
        <div class={classes!("loading-screen", (*phase == Phase::Leaving).then_some("loading-leaving"))}>
            <style>
                {r#"
                    .loading-screen {
                        position: fixed;
                        inset: 0;
                        display: flex;
                        align-items: flex-end;
                        justify-content: flex-end;
                        padding: 4vw;
                        background: #0b0b0d;
                        color: #fff;
                        z-index: 3000;
                        transition: opacity 0.7s ease, transform 0.7s ease;
                    }
                    .loading-leaving {
                        opacity: 0;
                        transform: translateY(-4%);
                        pointer-events: none;
                    }
                    .loading-count {
                        font-size: clamp(4rem, 14vw, 12rem);
                        font-weight: 700;
                        font-variant-numeric: tabular-nums;
                        line-height: 1;
                    }
                "#}
            </style>
            <span class="loading-count">{format!("{count}%")}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_from_zero_to_hundred() {
        assert_eq!(loading_count(0.0, 1.6), 0);
        assert_eq!(loading_count(1.6, 1.6), 100);
        assert_eq!(loading_count(5.0, 1.6), 100);
    }

    #[test]
    fn count_is_eased_and_monotonic() {
        let mut last = 0;
        for step in 0..=160 {
            let count = loading_count(f64::from(step) / 100.0, 1.6);
            assert!(count >= last);
            last = count;
        }
        assert!(loading_count(0.4, 1.6) > 25);
    }

    #[test]
    fn zero_duration_finishes_at_once() {
        assert_eq!(loading_count(0.0, 0.0), 100);
    }
}
