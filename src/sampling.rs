//! Point sampling and analytic zero finding for f(x) = h·sin²(πx/(C√h)).
//!
//! Both samplers are pure functions of [`Parameters`]: every call rebuilds
//! its output from scratch, so two calls with the same parameters produce
//! bit-identical sequences. Points are generated by index rather than by
//! accumulating a step, which pins the point count and the terminal x.

use crate::{round_to, Parameters, Sample};

// ─── Full cycle ─────────────────────────────────────────────────────────────

/// Samples one full cycle of f over `[0, C√h]`.
#[derive(Debug, Clone, Copy)]
pub struct FullCycleSampler {
    /// Number of equal intervals; the sampler emits `intervals + 1` points.
    pub intervals: usize,
    /// Decimal places kept on each emitted x.
    pub x_decimals: i32,
}

impl Default for FullCycleSampler {
    fn default() -> Self {
        FullCycleSampler {
            intervals: 50,
            x_decimals: 2,
        }
    }
}

/// Output of [`FullCycleSampler::sample`].
#[derive(Debug, Clone, PartialEq)]
pub struct FullCycle {
    pub points: Vec<Sample>,
    /// C·√h, the second zero of the cycle.
    pub period_end: f64,
    /// Analytic maximum, always h.
    pub max_value: f64,
    /// Where the maximum occurs: `period_end / 2`.
    pub max_location: f64,
}

impl FullCycleSampler {
    /// Sample `[0, C√h]` at `intervals + 1` evenly spaced points.
    ///
    /// x is rounded for display; y is evaluated at the exact x. Degenerate
    /// parameters (C√h = 0) produce the single point (0, 0).
    pub fn sample(&self, params: &Parameters) -> FullCycle {
        let period_end = params.period_end();
        let points = if params.is_degenerate() || self.intervals == 0 {
            vec![Sample { x: 0.0, y: 0.0 }]
        } else {
            let n = self.intervals as f64;
            (0..=self.intervals)
                .map(|i| {
                    let x = period_end * i as f64 / n;
                    Sample {
                        x: round_to(x, self.x_decimals),
                        y: params.evaluate(x),
                    }
                })
                .collect()
        };

        FullCycle {
            points,
            period_end,
            max_value: params.h(),
            max_location: period_end / 2.0,
        }
    }
}

// ─── Fixed window ───────────────────────────────────────────────────────────

/// Samples f over a fixed window and lists the zeros that fall inside it.
#[derive(Debug, Clone, Copy)]
pub struct FixedWindowSampler {
    pub x_min: f64,
    pub x_max: f64,
    pub step: f64,
    /// Decimal places kept on each sampled x.
    pub x_decimals: i32,
    /// Zero candidates are `n·C·√h` for n in `-max_multiple..=max_multiple`.
    pub max_multiple: i32,
}

impl Default for FixedWindowSampler {
    fn default() -> Self {
        FixedWindowSampler {
            x_min: -4.0,
            x_max: 4.0,
            step: 0.1,
            x_decimals: 1,
            max_multiple: 5,
        }
    }
}

/// Output of [`FixedWindowSampler::sample`].
#[derive(Debug, Clone, PartialEq)]
pub struct FixedWindow {
    pub points: Vec<Sample>,
    /// Zeros inside the window, most negative first, no duplicates.
    pub zeros: Vec<f64>,
}

impl FixedWindowSampler {
    /// Number of points in the window, endpoints included.
    pub fn point_count(&self) -> usize {
        if self.step <= 0.0 || self.x_max < self.x_min {
            return 1;
        }
        ((self.x_max - self.x_min) / self.step).round() as usize + 1
    }

    pub fn sample(&self, params: &Parameters) -> FixedWindow {
        FixedWindow {
            points: self.sample_points(params),
            zeros: self.zeros(params),
        }
    }

    /// Evaluate f at `x_min + step·i`, each x rounded before evaluation.
    pub fn sample_points(&self, params: &Parameters) -> Vec<Sample> {
        (0..self.point_count())
            .map(|i| {
                let x = round_to(self.x_min + self.step * i as f64, self.x_decimals);
                Sample {
                    x,
                    y: params.evaluate(x),
                }
            })
            .collect()
    }

    /// Integer multiples of C√h inside `[x_min, x_max]`, n ascending.
    pub fn zeros(&self, params: &Parameters) -> Vec<f64> {
        let root_h = params.h().sqrt();
        let mut zeros: Vec<f64> = (-self.max_multiple..=self.max_multiple)
            .map(|n| {
                let z = n as f64 * params.c() * root_h;
                // n = 0, or a collapsed period, must not leak a -0.0
                if n == 0 || z == 0.0 {
                    0.0
                } else {
                    z
                }
            })
            .filter(|&z| z >= self.x_min && z <= self.x_max)
            .collect();
        zeros.dedup();
        zeros
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
