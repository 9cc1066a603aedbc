use super::fraction::ScrollFraction;
use super::range::{ConfigError, RangeMap};
use super::spring::{Spring, SpringConfig};

/// Output changes smaller than this do not count as a change.
const CHANGE_EPSILON: f64 = 1e-4;

/// One evaluation step of the frame loop.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tick {
    /// Seconds since the previous tick.
    pub dt: f64,
}

impl Tick {
    pub fn new(dt: f64) -> Self {
        Self { dt }
    }
}

/// A node deriving one animatable value from one input.
///
/// The output is written once per `evaluate` and reads stay stable until the
/// next call.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionBinding {
    map: RangeMap,
    spring: Option<Spring>,
    output: Option<f64>,
}

impl MotionBinding {
    pub fn new(domain: &[f64], range: &[f64]) -> Result<Self, ConfigError> {
        Ok(Self::from_map(RangeMap::new(domain, range)?))
    }

    pub fn from_map(map: RangeMap) -> Self {
        Self {
            map,
            spring: None,
            output: None,
        }
    }

    /// Passes the mapped value through a spring before publishing it.
    pub fn smoothed(mut self, config: SpringConfig) -> Self {
        self.spring = Some(Spring::new(config, 0.0));
        self
    }

    pub fn evaluate(&mut self, input: ScrollFraction, tick: Tick) -> f64 {
        self.evaluate_raw(input.get(), tick)
    }

    /// Evaluates an unbounded input such as a pointer coordinate.
    pub fn evaluate_raw(&mut self, input: f64, tick: Tick) -> f64 {
        let mapped = self.map.map(input);
        let value = match (&mut self.spring, self.output) {
            // First evaluation starts the spring on its target so mounting
            // does not animate in from zero.
            (Some(spring), None) => {
                spring.jump(mapped);
                mapped
            }
            (Some(spring), Some(_)) => {
                spring.set_target(mapped);
                spring.tick(tick.dt)
            }
            (None, _) => mapped,
        };
        self.output = Some(value);
        value
    }

    pub fn output(&self) -> Option<f64> {
        self.output
    }

    /// True while a spring is still travelling toward its target.
    pub fn is_animating(&self) -> bool {
        self.spring.map_or(false, |s| !s.is_at_rest())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotionProperty {
    Opacity,
    TranslateX,
    TranslateY,
    Scale,
    Rotate,
}

/// Snapshot of the derived values, ready to be turned into CSS.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionStyle {
    pub opacity: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
    pub rotate: f64,
}

impl Default for MotionStyle {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            translate_x: 0.0,
            translate_y: 0.0,
            scale: 1.0,
            rotate: 0.0,
        }
    }
}

impl MotionStyle {
    fn set(&mut self, property: MotionProperty, value: f64) {
        match property {
            MotionProperty::Opacity => self.opacity = value.clamp(0.0, 1.0),
            MotionProperty::TranslateX => self.translate_x = value,
            MotionProperty::TranslateY => self.translate_y = value,
            MotionProperty::Scale => self.scale = value,
            MotionProperty::Rotate => self.rotate = value,
        }
    }

    fn differs(&self, other: &MotionStyle) -> bool {
        [
            (self.opacity, other.opacity),
            (self.translate_x, other.translate_x),
            (self.translate_y, other.translate_y),
            (self.scale, other.scale),
            (self.rotate, other.rotate),
        ]
        .iter()
        .any(|(a, b)| (a - b).abs() > CHANGE_EPSILON)
    }

    pub fn to_css(&self) -> String {
        format!(
            "opacity: {:.4}; transform: translate3d({:.2}px, {:.2}px, 0) scale({:.4}) rotate({:.2}deg); will-change: opacity, transform;",
            self.opacity, self.translate_x, self.translate_y, self.scale, self.rotate
        )
    }
}

/// A set of bindings fed by the same scroll fraction.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Motion {
    bindings: Vec<(MotionProperty, MotionBinding)>,
    style: MotionStyle,
}

impl Motion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a binding; a second binding for the same property replaces the first.
    pub fn bind(mut self, property: MotionProperty, binding: MotionBinding) -> Self {
        self.bindings.retain(|(p, _)| *p != property);
        self.bindings.push((property, binding));
        self
    }

    /// Runs every binding and reports whether the published style changed.
    pub fn evaluate(&mut self, input: ScrollFraction, tick: Tick) -> bool {
        let mut next = MotionStyle::default();
        for (property, binding) in self.bindings.iter_mut() {
            next.set(*property, binding.evaluate(input, tick));
        }
        let changed = next.differs(&self.style);
        self.style = next;
        changed
    }

    pub fn style(&self) -> MotionStyle {
        self.style
    }

    pub fn is_animating(&self) -> bool {
        self.bindings.iter().any(|(_, b)| b.is_animating())
    }
}

/// Fade in and rise from `distance` pixels while entering the viewport.
pub fn fade_up(distance: f64) -> Result<Motion, ConfigError> {
    Ok(Motion::new()
        .bind(
            MotionProperty::Opacity,
            MotionBinding::new(&[0.0, 0.35], &[0.0, 1.0])?,
        )
        .bind(
            MotionProperty::TranslateY,
            MotionBinding::new(&[0.0, 0.35], &[distance, 0.0])?
                .smoothed(SpringConfig::critically_damped(120.0)),
        ))
}

/// Vertical drift across the whole pass of an element through the viewport.
pub fn parallax(travel: f64) -> Result<Motion, ConfigError> {
    Ok(Motion::new().bind(
        MotionProperty::TranslateY,
        MotionBinding::new(&[0.0, 1.0], &[-travel, travel])?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Tick = Tick { dt: 1.0 / 60.0 };

    #[test]
    fn unsmoothed_binding_follows_input() {
        let mut b = MotionBinding::new(&[0.0, 1.0], &[0.0, 200.0]).unwrap();
        assert_eq!(b.output(), None);
        assert_eq!(b.evaluate(ScrollFraction::new(0.25), FRAME), 50.0);
        assert_eq!(b.output(), Some(50.0));
    }

    #[test]
    fn smoothed_binding_starts_on_target_then_lags() {
        let mut b = MotionBinding::new(&[0.0, 1.0], &[0.0, 100.0])
            .unwrap()
            .smoothed(SpringConfig::default());
        assert_eq!(b.evaluate(ScrollFraction::new(0.0), FRAME), 0.0);
        let next = b.evaluate(ScrollFraction::new(1.0), FRAME);
        assert!(next > 0.0 && next < 100.0);
        assert!(b.is_animating());
        for _ in 0..600 {
            b.evaluate(ScrollFraction::new(1.0), FRAME);
        }
        assert_eq!(b.output(), Some(100.0));
        assert!(!b.is_animating());
    }

    #[test]
    fn motion_reports_changes_only() {
        let mut m = Motion::new().bind(
            MotionProperty::Opacity,
            MotionBinding::new(&[0.0, 1.0], &[0.0, 1.0]).unwrap(),
        );
        assert!(m.evaluate(ScrollFraction::new(0.5), FRAME));
        assert!(!m.evaluate(ScrollFraction::new(0.5), FRAME));
        assert!(m.evaluate(ScrollFraction::new(0.6), FRAME));
        assert!((m.style().opacity - 0.6).abs() < 1e-9);
    }

    #[test]
    fn rebinding_replaces_property() {
        let mut m = Motion::new()
            .bind(MotionProperty::Scale, MotionBinding::new(&[0.0, 1.0], &[1.0, 2.0]).unwrap())
            .bind(MotionProperty::Scale, MotionBinding::new(&[0.0, 1.0], &[1.0, 3.0]).unwrap());
        m.evaluate(ScrollFraction::END, FRAME);
        assert_eq!(m.style().scale, 3.0);
    }

    #[test]
    fn css_contains_every_channel() {
        let css = MotionStyle::default().to_css();
        assert!(css.contains("opacity: 1.0000"));
        assert!(css.contains("translate3d(0.00px, 0.00px, 0)"));
        assert!(css.contains("scale(1.0000)"));
    }

    #[test]
    fn presets_build() {
        assert!(fade_up(40.0).is_ok());
        let mut p = parallax(60.0).unwrap();
        p.evaluate(ScrollFraction::START, FRAME);
        assert_eq!(p.style().translate_y, -60.0);
    }
}
