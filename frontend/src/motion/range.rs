use thiserror::Error;

/// Errors raised while building a breakpoint mapping.
///
/// These surface when the mapping is constructed so a malformed binding never
/// reaches the frame loop.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("domain has {domain} breakpoints but range has {range}")]
    LengthMismatch { domain: usize, range: usize },
    #[error("at least two breakpoints are required, got {0}")]
    TooFewBreakpoints(usize),
    #[error("breakpoint {index} is not a finite number")]
    NonFinite { index: usize },
    #[error("domain breakpoints must be non-decreasing (index {index} goes backwards)")]
    NonMonotonicDomain { index: usize },
}

/// Piecewise-linear mapping from an input domain onto an output range.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeMap {
    domain: Vec<f64>,
    range: Vec<f64>,
    extrapolate: bool,
}

impl RangeMap {
    pub fn new(domain: &[f64], range: &[f64]) -> Result<Self, ConfigError> {
        if domain.len() != range.len() {
            return Err(ConfigError::LengthMismatch {
                domain: domain.len(),
                range: range.len(),
            });
        }
        if domain.len() < 2 {
            return Err(ConfigError::TooFewBreakpoints(domain.len()));
        }
        if let Some(index) = domain
            .iter()
            .chain(range.iter())
            .position(|v| !v.is_finite())
        {
            return Err(ConfigError::NonFinite {
                index: index % domain.len(),
            });
        }
        if let Some(index) = domain.windows(2).position(|w| w[1] < w[0]) {
            return Err(ConfigError::NonMonotonicDomain { index: index + 1 });
        }

        Ok(Self {
            domain: domain.to_vec(),
            range: range.to_vec(),
            extrapolate: false,
        })
    }

    /// Continue the outer segments past the domain instead of clamping.
    pub fn extrapolate(mut self) -> Self {
        self.extrapolate = true;
        self
    }

    pub fn map(&self, value: f64) -> f64 {
        let last = self.domain.len() - 1;
        if value.is_nan() {
            return self.range[0];
        }
        if value <= self.domain[0] {
            return if self.extrapolate {
                self.segment(0, value)
            } else {
                self.range[0]
            };
        }
        if value >= self.domain[last] {
            return if self.extrapolate {
                self.segment(last - 1, value)
            } else {
                self.range[last]
            };
        }

        // First breakpoint strictly greater than value closes the segment.
        let upper = self.domain.partition_point(|&d| d <= value);
        self.segment(upper - 1, value)
    }

    fn segment(&self, i: usize, value: f64) -> f64 {
        let (d0, d1) = (self.domain[i], self.domain[i + 1]);
        let (r0, r1) = (self.range[i], self.range[i + 1]);
        let span = d1 - d0;
        if span == 0.0 {
            return if value < d0 { r0 } else { r1 };
        }
        r0 + (value - d0) / span * (r1 - r0)
    }
}

/// One-off mapping for call sites that do not keep the `RangeMap` around.
pub fn map_range(value: f64, domain: &[f64], range: &[f64]) -> Result<f64, ConfigError> {
    Ok(RangeMap::new(domain, range)?.map(value))
}

/// Wraps `value` into `[min, max)`, used for looping offsets.
pub fn wrap(min: f64, max: f64, value: f64) -> f64 {
    let span = max - min;
    if span <= 0.0 || !value.is_finite() {
        return min;
    }
    let wrapped = min + (value - min).rem_euclid(span);
    // rem_euclid can round up to `span` for tiny negative inputs.
    if wrapped >= max {
        min
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_inside_domain() {
        assert_eq!(map_range(0.5, &[0.0, 1.0], &[10.0, 20.0]).unwrap(), 15.0);
    }

    #[test]
    fn clamps_outside_domain() {
        assert_eq!(map_range(-1.0, &[0.0, 1.0], &[10.0, 20.0]).unwrap(), 10.0);
        assert_eq!(map_range(2.0, &[0.0, 1.0], &[10.0, 20.0]).unwrap(), 20.0);
    }

    #[test]
    fn extrapolates_when_asked() {
        let map = RangeMap::new(&[0.0, 1.0], &[10.0, 20.0]).unwrap().extrapolate();
        assert_eq!(map.map(2.0), 30.0);
        assert_eq!(map.map(-1.0), 0.0);
    }

    #[test]
    fn multi_segment_with_descending_range() {
        let fade = RangeMap::new(&[0.0, 0.2, 0.8, 1.0], &[0.0, 1.0, 1.0, 0.0]).unwrap();
        assert_eq!(fade.map(0.1), 0.5);
        assert_eq!(fade.map(0.5), 1.0);
        assert!((fade.map(0.9) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn zero_width_segment_is_a_step() {
        let step = RangeMap::new(&[0.0, 0.5, 0.5, 1.0], &[0.0, 0.0, 1.0, 1.0]).unwrap();
        assert_eq!(step.map(0.49), 0.0);
        assert_eq!(step.map(0.5), 1.0);
        assert_eq!(step.map(0.75), 1.0);
    }

    #[test]
    fn rejects_malformed_breakpoints() {
        assert_eq!(
            RangeMap::new(&[0.0, 1.0], &[1.0]),
            Err(ConfigError::LengthMismatch { domain: 2, range: 1 })
        );
        assert_eq!(
            RangeMap::new(&[0.0], &[1.0]),
            Err(ConfigError::TooFewBreakpoints(1))
        );
        assert_eq!(
            RangeMap::new(&[0.0, 1.0, 0.5], &[0.0, 1.0, 2.0]),
            Err(ConfigError::NonMonotonicDomain { index: 2 })
        );
        assert_eq!(
            RangeMap::new(&[0.0, f64::NAN], &[0.0, 1.0]),
            Err(ConfigError::NonFinite { index: 1 })
        );
    }

    #[test]
    fn wrap_loops_both_directions() {
        assert_eq!(wrap(-100.0, 0.0, 10.0), -90.0);
        assert_eq!(wrap(-100.0, 0.0, -130.0), -30.0);
        assert_eq!(wrap(-100.0, 0.0, -50.0), -50.0);
    }
}
