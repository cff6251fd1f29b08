//! Unidirectional update loop: parameters in, recomputed frame out.
//!
//! The controller owns the only copy of the current [`Parameters`]. A slider
//! change builds a new value; if it differs from the current one, the whole
//! frame is recomputed from scratch. The render step only reads the frame.

use crate::chart::ChartConfig;
use crate::sampling::{FixedWindow, FixedWindowSampler, FullCycle, FullCycleSampler};
use crate::Parameters;
use anyhow::Result;
use tracing::debug;

/// Everything the render step needs for one set of parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotFrame {
    pub params: Parameters,
    pub cycle: FullCycle,
    pub cycle_chart: ChartConfig,
    pub window: FixedWindow,
    pub window_chart: ChartConfig,
}

pub struct PlotController {
    params: Parameters,
    full_cycle: FullCycleSampler,
    fixed_window: FixedWindowSampler,
    frame: PlotFrame,
    recomputes: u64,
}

impl PlotController {
    pub fn new(params: Parameters) -> Self {
        Self::with_samplers(params, FullCycleSampler::default(), FixedWindowSampler::default())
    }

    pub fn with_samplers(
        params: Parameters,
        full_cycle: FullCycleSampler,
        fixed_window: FixedWindowSampler,
    ) -> Self {
        let frame = recompute(&params, &full_cycle, &fixed_window);
        PlotController {
            params,
            full_cycle,
            fixed_window,
            frame,
            recomputes: 1,
        }
    }

    pub fn params(&self) -> Parameters {
        self.params
    }

    pub fn frame(&self) -> &PlotFrame {
        &self.frame
    }

    /// How many times the frame has been computed, the initial one included.
    pub fn recompute_count(&self) -> u64 {
        self.recomputes
    }

    /// Publish a new C. Returns whether the frame changed.
    pub fn set_c(&mut self, c: f64) -> Result<bool> {
        let next = self.params.with_c(c)?;
        Ok(self.apply(next))
    }

    /// Publish a new h. Returns whether the frame changed.
    pub fn set_h(&mut self, h: f64) -> Result<bool> {
        let next = self.params.with_h(h)?;
        Ok(self.apply(next))
    }

    fn apply(&mut self, next: Parameters) -> bool {
        if next == self.params {
            return false;
        }
        self.params = next;
        self.frame = recompute(&self.params, &self.full_cycle, &self.fixed_window);
        self.recomputes += 1;
        debug!(
            c = next.c(),
            h = next.h(),
            period_end = self.frame.cycle.period_end,
            zeros = self.frame.window.zeros.len(),
            "recomputed plot frame"
        );
        true
    }
}

impl Default for PlotController {
    fn default() -> Self {
        Self::new(Parameters::default())
    }
}

/// Pure recompute step: sample both views and derive their chart layout.
pub fn recompute(
    params: &Parameters,
    full_cycle: &FullCycleSampler,
    fixed_window: &FixedWindowSampler,
) -> PlotFrame {
    let cycle = full_cycle.sample(params);
    let window = fixed_window.sample(params);
    PlotFrame {
        params: *params,
        cycle_chart: ChartConfig::full_cycle(params, &cycle),
        cycle,
        window_chart: ChartConfig::fixed_window(params, &window),
        window,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_frame_matches_params() {
        let ctl = PlotController::default();
        assert_eq!(ctl.params(), Parameters::default());
        assert_eq!(ctl.frame().cycle.points.len(), 51);
        assert_eq!(ctl.frame().window.points.len(), 81);
        assert_eq!(ctl.recompute_count(), 1);
    }

    #[test]
    fn test_set_c_recomputes() {
        let mut ctl = PlotController::default();
        assert!(ctl.set_c(2.0).unwrap());
        assert_eq!(ctl.params().c(), 2.0);
        assert_eq!(ctl.frame().cycle.period_end, 2.0);
        assert_eq!(ctl.frame().window.zeros, vec![-4.0, -2.0, 0.0, 2.0, 4.0]);
        assert_eq!(ctl.recompute_count(), 2);
    }

    #[test]
    fn test_set_h_recomputes() {
        let mut ctl = PlotController::default();
        assert!(ctl.set_h(4.0).unwrap());
        assert_eq!(ctl.frame().cycle.max_value, 4.0);
        assert_eq!(ctl.frame().cycle.max_location, 1.0);
        assert_eq!(ctl.frame().cycle_chart.y_domain, [0.0, 4.1]);
    }

    #[test]
    fn test_unchanged_value_skips_recompute() {
        let mut ctl = PlotController::default();
        assert!(!ctl.set_c(1.0).unwrap());
        assert!(!ctl.set_h(1.0).unwrap());
        assert_eq!(ctl.recompute_count(), 1);
    }

    #[test]
    fn test_invalid_value_keeps_previous_frame() {
        let mut ctl = PlotController::default();
        let before = ctl.frame().clone();
        assert!(ctl.set_h(-1.0).is_err());
        assert!(ctl.set_c(f64::NAN).is_err());
        assert_eq!(ctl.frame(), &before);
        assert_eq!(ctl.params(), Parameters::default());
    }

    #[test]
    fn test_frame_equals_fresh_recompute() {
        let mut ctl = PlotController::default();
        ctl.set_c(0.7).unwrap();
        ctl.set_h(3.3).unwrap();
        let fresh = recompute(
            &Parameters::new(0.7, 3.3).unwrap(),
            &FullCycleSampler::default(),
            &FixedWindowSampler::default(),
        );
        assert_eq!(ctl.frame(), &fresh);
    }
}
