pub mod chart;
pub mod controller;
pub mod sampling;
pub mod viz_common;

use anyhow::{bail, Result};
use std::f64::consts::PI;

// ─── Control surface ────────────────────────────────────────────────────────

/// Lower bound of the C and h sliders.
pub const PARAM_MIN: f64 = 0.1;
/// Upper bound of the C and h sliders.
pub const PARAM_MAX: f64 = 5.0;
/// Slider increment.
pub const PARAM_STEP: f64 = 0.1;

// ─── Data model ─────────────────────────────────────────────────────────────

/// The (C, h) pair driving f(x) = h·sin²(πx/(C√h)).
///
/// Immutable once built: a slider change produces a new value rather than
/// mutating the current one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    c: f64,
    h: f64,
}

impl Parameters {
    /// Validate and build a parameter pair.
    ///
    /// Negative or non-finite values are rejected. Zero is accepted: the
    /// curve collapses and the samplers fall back to their degenerate output.
    pub fn new(c: f64, h: f64) -> Result<Self> {
        if !c.is_finite() || c < 0.0 {
            bail!("invalid parameter: C = {} (must be finite and >= 0)", c);
        }
        if !h.is_finite() || h < 0.0 {
            bail!("invalid parameter: h = {} (must be finite and >= 0)", h);
        }
        Ok(Parameters { c, h })
    }

    /// Build from slider values, clamping into `[PARAM_MIN, PARAM_MAX]`.
    /// Non-finite input falls back to 1.0.
    pub fn clamped(c: f64, h: f64) -> Self {
        let clamp = |v: f64| {
            if v.is_finite() {
                v.clamp(PARAM_MIN, PARAM_MAX)
            } else {
                1.0
            }
        };
        Parameters {
            c: clamp(c),
            h: clamp(h),
        }
    }

    pub fn c(&self) -> f64 {
        self.c
    }

    pub fn h(&self) -> f64 {
        self.h
    }

    /// Same h, new C.
    pub fn with_c(self, c: f64) -> Result<Self> {
        Self::new(c, self.h)
    }

    /// Same C, new h.
    pub fn with_h(self, h: f64) -> Result<Self> {
        Self::new(self.c, h)
    }

    /// C·√h: the second zero of f after x = 0, i.e. one full cycle of sin².
    pub fn period_end(&self) -> f64 {
        self.c * self.h.sqrt()
    }

    /// True when C·√h is zero and the curve is flat.
    pub fn is_degenerate(&self) -> bool {
        self.period_end() == 0.0
    }

    /// Evaluate f(x) = h·sin²(πx/(C√h)). Returns 0 for degenerate parameters.
    pub fn evaluate(&self, x: f64) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        let s = (PI * x / self.period_end()).sin();
        self.h * s * s
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters { c: 1.0, h: 1.0 }
    }
}

/// One evaluated (x, f(x)) pair; a chart vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

impl Sample {
    pub fn as_point(&self) -> [f64; 2] {
        [self.x, self.y]
    }
}

/// Round to `decimals` places, half away from zero. Never returns -0.0.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale + 0.0
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_control_range() {
        let p = Parameters::new(0.1, 5.0).unwrap();
        assert_eq!(p.c(), 0.1);
        assert_eq!(p.h(), 5.0);
    }

    #[test]
    fn test_new_rejects_negative_and_nan() {
        assert!(Parameters::new(-1.0, 1.0).is_err());
        assert!(Parameters::new(1.0, -0.5).is_err());
        assert!(Parameters::new(f64::NAN, 1.0).is_err());
        assert!(Parameters::new(1.0, f64::INFINITY).is_err());

        let err = Parameters::new(1.0, -2.0).unwrap_err();
        assert!(err.to_string().contains("invalid parameter"));
    }

    #[test]
    fn test_new_accepts_zero_as_degenerate() {
        let p = Parameters::new(0.0, 1.0).unwrap();
        assert!(p.is_degenerate());
        assert_eq!(p.evaluate(1.5), 0.0);

        let p = Parameters::new(1.0, 0.0).unwrap();
        assert!(p.is_degenerate());
        assert_eq!(p.evaluate(-3.0), 0.0);
    }

    #[test]
    fn test_clamped() {
        let p = Parameters::clamped(0.0, 9.0);
        assert_eq!(p.c(), PARAM_MIN);
        assert_eq!(p.h(), PARAM_MAX);

        let p = Parameters::clamped(f64::NAN, 2.5);
        assert_eq!(p.c(), 1.0);
        assert_eq!(p.h(), 2.5);
    }

    #[test]
    fn test_period_end() {
        assert_eq!(Parameters::new(1.0, 1.0).unwrap().period_end(), 1.0);
        assert_eq!(Parameters::new(2.0, 1.0).unwrap().period_end(), 2.0);
        assert_eq!(Parameters::new(1.0, 4.0).unwrap().period_end(), 2.0);
    }

    #[test]
    fn test_evaluate_known_values() {
        let p = Parameters::new(1.0, 4.0).unwrap();
        // Zeros at multiples of C√h = 2
        assert!(p.evaluate(0.0).abs() < 1e-12);
        assert!(p.evaluate(2.0).abs() < 1e-12);
        assert!(p.evaluate(-4.0).abs() < 1e-12);
        // Maximum h at the midpoint
        assert!((p.evaluate(1.0) - 4.0).abs() < 1e-12);
        // sin²(π/4) = 1/2
        assert!((p.evaluate(0.5) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_with_c_and_with_h() {
        let p = Parameters::default();
        let q = p.with_c(2.0).unwrap();
        assert_eq!((q.c(), q.h()), (2.0, 1.0));
        let r = q.with_h(3.0).unwrap();
        assert_eq!((r.c(), r.h()), (2.0, 3.0));
        assert!(r.with_h(-1.0).is_err());
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.125, 2), 0.13);
        assert_eq!(round_to(3.14159, 2), 3.14);
        assert_eq!(round_to(-3.9000000000000004, 1), -3.9);
        assert_eq!(round_to(4.0, 1), 4.0);
        assert!(round_to(-1e-17, 1).is_sign_positive());
    }
}
