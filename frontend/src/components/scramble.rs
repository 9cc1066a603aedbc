use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

const GLYPHS: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'K', 'M', 'N', 'P', 'R', 'S', 'T', 'X', 'Z', '#',
    '%', '&', '*', '+', '/', '<', '>', '=', '0', '1', '2', '3', '7', '9',
];

/// Text that resolves left to right out of glyph noise.
///
/// Noise is a pure function of `(seed, index, frame)`, so the same frame always
/// renders the same string.
#[derive(Debug, Clone, PartialEq)]
pub struct Scramble {
    chars: Vec<char>,
    seed: u32,
    frames_per_char: u32,
}

impl Scramble {
    pub fn new(text: &str, seed: u32) -> Self {
        Self {
            chars: text.chars().collect(),
            seed,
            frames_per_char: 2,
        }
    }

    /// Frame at which every character has resolved.
    pub fn total_frames(&self) -> u32 {
        self.chars.len() as u32 * self.frames_per_char
    }

    pub fn is_done(&self, frame: u32) -> bool {
        frame >= self.total_frames()
    }

    pub fn render(&self, frame: u32) -> String {
        let resolved = (frame / self.frames_per_char) as usize;
        self.chars
            .iter()
            .enumerate()
            .map(|(index, &c)| {
                if index < resolved || c.is_whitespace() {
                    c
                } else {
                    GLYPHS[noise(self.seed, index as u32, frame) as usize % GLYPHS.len()]
                }
            })
            .collect()
    }
}

fn noise(seed: u32, index: u32, frame: u32) -> u32 {
    let mut x = seed ^ index.wrapping_mul(0x9E37_79B9) ^ frame.wrapping_mul(0x85EB_CA6B);
    x ^= x >> 16;
    x = x.wrapping_mul(0x7FEB_352D);
    x ^= x >> 15;
    x = x.wrapping_mul(0x846C_A68B);
    x ^ (x >> 16)
}

#[derive(Properties, PartialEq)]
pub struct ScrambleTextProps {
    pub text: AttrValue,
    #[prop_or(40)]
    pub interval_ms: u32,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ScrambleText)]
pub fn scramble_text(props: &ScrambleTextProps) -> Html {
    let rendered = use_state(|| Scramble::new(&props.text, 0).render(0));

    {
        let rendered = rendered.clone();
        let interval_ms = props.interval_ms;
        use_effect_with_deps(
            move |text: &AttrValue| {
                let scramble = Scramble::new(text, text.len() as u32);
                let frame = Rc::new(Cell::new(0u32));
                let interval = Interval::new(interval_ms, move || {
                    // Idles once resolved; the interval goes away on unmount.
                    if scramble.is_done(frame.get()) {
                        return;
                    }
                    let next = frame.get() + 1;
                    frame.set(next);
                    rendered.set(scramble.render(next));
                });
                move || drop(interval)
            },
            props.text.clone(),
        );
    }

    html! {
        <span class={classes!("scramble", props.class.clone())} aria-label={props.text.clone()}>
            {(*rendered).clone()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_left_to_right() {
        let s = Scramble::new("STUDIO", 7);
        assert_eq!(s.total_frames(), 12);
        let halfway = s.render(6);
        assert!(halfway.starts_with("STU"));
        assert_eq!(halfway.chars().count(), 6);
        assert_eq!(s.render(12), "STUDIO");
        assert!(s.is_done(12));
        assert!(!s.is_done(11));
    }

    #[test]
    fn noise_is_deterministic() {
        let a = Scramble::new("motion", 3);
        let b = Scramble::new("motion", 3);
        assert_eq!(a.render(2), b.render(2));
    }

    #[test]
    fn whitespace_is_never_scrambled() {
        let s = Scramble::new("a b", 1);
        assert_eq!(s.render(0).chars().nth(1), Some(' '));
    }
}
