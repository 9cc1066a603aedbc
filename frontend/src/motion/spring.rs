/// Largest integration step; longer frames are sub-stepped.
const MAX_STEP: f64 = 1.0 / 120.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    /// Distance and speed under which the spring snaps onto its target.
    pub rest_delta: f64,
}

impl SpringConfig {
    pub fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
            ..Self::default()
        }
    }

    /// Damping chosen so the spring settles without oscillating.
    pub fn critically_damped(stiffness: f64) -> Self {
        Self::new(stiffness, 2.0 * stiffness.max(0.0).sqrt())
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 20.0,
            rest_delta: 0.001,
        }
    }
}

/// Spring filter chasing a target value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    position: f64,
    velocity: f64,
    target: f64,
    config: SpringConfig,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f64) -> Self {
        Self {
            position: initial,
            velocity: 0.0,
            target: initial,
            config,
        }
    }

    pub fn set_target(&mut self, target: f64) {
        if target.is_finite() {
            self.target = target;
        }
    }

    /// Moves straight to `value` and drops any momentum.
    pub fn jump(&mut self, value: f64) {
        self.position = value;
        self.target = value;
        self.velocity = 0.0;
    }

    /// Advances the spring by `dt` seconds and returns the new position.
    pub fn tick(&mut self, dt: f64) -> f64 {
        if dt.is_nan() || dt <= 0.0 || self.is_at_rest() {
            return self.position;
        }

        let steps = (dt / MAX_STEP).ceil().max(1.0) as u32;
        let h = dt / f64::from(steps);
        for _ in 0..steps {
            let force = self.config.stiffness * (self.target - self.position)
                - self.config.damping * self.velocity;
            self.velocity += force * h;
            self.position += self.velocity * h;
        }

        if (self.target - self.position).abs() < self.config.rest_delta
            && self.velocity.abs() < self.config.rest_delta
        {
            self.position = self.target;
            self.velocity = 0.0;
        }
        self.position
    }

    pub fn is_at_rest(&self) -> bool {
        self.position == self.target && self.velocity == 0.0
    }

    pub fn value(&self) -> f64 {
        self.position
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn target(&self) -> f64 {
        self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(spring: &mut Spring, seconds: f64, fps: f64) {
        let frames = (seconds * fps) as usize;
        for _ in 0..frames {
            spring.tick(1.0 / fps);
        }
    }

    #[test]
    fn settles_on_target() {
        let mut spring = Spring::new(SpringConfig::critically_damped(170.0), 0.0);
        spring.set_target(1.0);
        run(&mut spring, 3.0, 60.0);
        assert_eq!(spring.value(), 1.0);
        assert!(spring.is_at_rest());
    }

    #[test]
    fn frame_rate_does_not_change_the_outcome_much() {
        let mut at_30 = Spring::new(SpringConfig::default(), 0.0);
        let mut at_144 = Spring::new(SpringConfig::default(), 0.0);
        at_30.set_target(10.0);
        at_144.set_target(10.0);
        run(&mut at_30, 0.5, 30.0);
        run(&mut at_144, 0.5, 144.0);
        assert!((at_30.value() - at_144.value()).abs() < 0.2);
    }

    #[test]
    fn moves_toward_target_first_frame() {
        let mut spring = Spring::new(SpringConfig::default(), 0.0);
        spring.set_target(100.0);
        let first = spring.tick(1.0 / 60.0);
        assert!(first > 0.0 && first < 100.0);
        assert!(spring.velocity() > 0.0);
    }

    #[test]
    fn huge_frame_stays_stable() {
        let mut spring = Spring::new(SpringConfig::new(300.0, 10.0), 0.0);
        spring.set_target(1.0);
        let after = spring.tick(2.0);
        assert!(after.is_finite());
        assert!(after.abs() < 10.0);
    }

    #[test]
    fn jump_and_zero_dt() {
        let mut spring = Spring::new(SpringConfig::default(), 0.0);
        spring.set_target(5.0);
        assert_eq!(spring.tick(0.0), 0.0);
        spring.jump(3.0);
        assert!(spring.is_at_rest());
        assert_eq!(spring.tick(1.0 / 60.0), 3.0);
    }
}
