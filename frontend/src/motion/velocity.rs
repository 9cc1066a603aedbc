/// Smoothed time derivative of a sampled value.
///
/// `smoothing` is the weight given to each new raw sample (1.0 = no smoothing).
/// The sign only changes when the smoothed velocity actually crosses zero, so
/// a momentary stop keeps the previous direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityTracker {
    last: Option<(f64, f64)>,
    velocity: f64,
    smoothing: f64,
    sign: f64,
}

impl VelocityTracker {
    pub fn new(smoothing: f64) -> Self {
        Self {
            last: None,
            velocity: 0.0,
            smoothing: smoothing.clamp(0.01, 1.0),
            sign: 1.0,
        }
    }

    /// Records `value` observed at `time` seconds and returns the velocity.
    pub fn sample(&mut self, value: f64, time: f64) -> f64 {
        if !value.is_finite() || !time.is_finite() {
            return self.velocity;
        }
        if let Some((prev_value, prev_time)) = self.last {
            let dt = time - prev_time;
            if dt <= 0.0 {
                return self.velocity;
            }
            let raw = (value - prev_value) / dt;
            self.velocity += (raw - self.velocity) * self.smoothing;
            if self.velocity > 0.0 {
                self.sign = 1.0;
            } else if self.velocity < 0.0 {
                self.sign = -1.0;
            }
        }
        self.last = Some((value, time));
        self.velocity
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// `1.0` or `-1.0`, following the last non-zero velocity.
    pub fn sign(&self) -> f64 {
        self.sign
    }
}

impl Default for VelocityTracker {
    fn default() -> Self {
        Self::new(0.3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_has_no_velocity() {
        let mut v = VelocityTracker::new(1.0);
        assert_eq!(v.sample(100.0, 0.0), 0.0);
    }

    #[test]
    fn unsmoothed_velocity_is_the_raw_derivative() {
        let mut v = VelocityTracker::new(1.0);
        v.sample(0.0, 0.0);
        assert_eq!(v.sample(50.0, 0.5), 100.0);
        assert_eq!(v.sample(40.0, 1.0), -20.0);
        assert_eq!(v.sign(), -1.0);
    }

    #[test]
    fn sign_holds_through_a_stop() {
        let mut v = VelocityTracker::new(1.0);
        v.sample(0.0, 0.0);
        v.sample(-10.0, 1.0);
        assert_eq!(v.sign(), -1.0);
        v.sample(-10.0, 2.0);
        assert_eq!(v.velocity(), 0.0);
        assert_eq!(v.sign(), -1.0);
        v.sample(-5.0, 3.0);
        assert_eq!(v.sign(), 1.0);
    }

    #[test]
    fn smoothing_lags_a_jump() {
        let mut v = VelocityTracker::new(0.5);
        v.sample(0.0, 0.0);
        assert_eq!(v.sample(10.0, 1.0), 5.0);
        assert_eq!(v.sample(20.0, 2.0), 7.5);
    }

    #[test]
    fn ignores_non_advancing_time() {
        let mut v = VelocityTracker::new(1.0);
        v.sample(0.0, 1.0);
        v.sample(10.0, 2.0);
        assert_eq!(v.sample(99.0, 2.0), 10.0);
    }
}
