//! Plain chart configuration handed to the renderer.
//!
//! A `ChartConfig` is rebuilt from the current parameters on every change,
//! like the point sequences it accompanies.

use crate::sampling::{FixedWindow, FullCycle};
use crate::Parameters;

/// Headroom above h on the full-cycle y axis.
pub const FULL_CYCLE_Y_HEADROOM: f64 = 0.1;
/// Headroom above h on the fixed-window y axis.
pub const WINDOW_Y_HEADROOM: f64 = 0.5;
/// Smallest x-axis span the renderer will accept.
const MIN_SPAN: f64 = 1e-6;

/// Axis domains, tick placement and label formatting for one line chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub id: &'static str,
    pub x_domain: [f64; 2],
    pub y_domain: [f64; 2],
    /// Explicit x tick positions; `None` lets the renderer choose.
    pub x_ticks: Option<Vec<f64>>,
    /// Decimal places on x tick labels; `None` uses the renderer default.
    pub x_tick_decimals: Option<usize>,
    /// Decimal places of y in the hover tooltip.
    pub tooltip_y_decimals: usize,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub series_name: &'static str,
}

impl ChartConfig {
    /// Axis layout for the one-cycle view: x over [0, C√h] with quarter ticks.
    pub fn full_cycle(params: &Parameters, cycle: &FullCycle) -> Self {
        let max_x = cycle.period_end;
        let ticks = [0.0, 0.25, 0.5, 0.75, 1.0]
            .iter()
            .map(|f| f * max_x)
            .collect();
        ChartConfig {
            id: "full_cycle_plot",
            x_domain: widen([0.0, max_x]),
            y_domain: [0.0, params.h() + FULL_CYCLE_Y_HEADROOM],
            x_ticks: Some(ticks),
            x_tick_decimals: Some(2),
            tooltip_y_decimals: 4,
            x_label: "x",
            y_label: "f(x)",
            series_name: "f(x)",
        }
    }

    /// Axis layout for the fixed [-4, 4] view.
    pub fn fixed_window(params: &Parameters, window: &FixedWindow) -> Self {
        let x_min = window.points.first().map_or(-4.0, |s| s.x);
        let x_max = window.points.last().map_or(4.0, |s| s.x);
        ChartConfig {
            id: "fixed_window_plot",
            x_domain: widen([x_min, x_max]),
            y_domain: [0.0, params.h() + WINDOW_Y_HEADROOM],
            x_ticks: None,
            x_tick_decimals: None,
            tooltip_y_decimals: 4,
            x_label: "x",
            y_label: "f(x)",
            series_name: "f(x)",
        }
    }

    /// Hover text for a point under the cursor.
    pub fn tooltip(&self, x: f64, y: f64) -> String {
        format!(
            "x: {}\n{}: {:.*}",
            x, self.series_name, self.tooltip_y_decimals, y
        )
    }

    /// Label for an x tick at `value`.
    pub fn format_x_tick(&self, value: f64) -> String {
        match self.x_tick_decimals {
            Some(d) => format!("{:.*}", d, value),
            None => format!("{}", value),
        }
    }
}

/// Keep a collapsed domain (degenerate parameters) renderable.
fn widen(domain: [f64; 2]) -> [f64; 2] {
    if domain[1] - domain[0] < MIN_SPAN {
        [domain[0], domain[0] + MIN_SPAN]
    } else {
        domain
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::{FixedWindowSampler, FullCycleSampler};

    #[test]
    fn test_full_cycle_config() {
        let p = Parameters::new(1.0, 4.0).unwrap();
        let cycle = FullCycleSampler::default().sample(&p);
        let cfg = ChartConfig::full_cycle(&p, &cycle);

        assert_eq!(cfg.x_domain, [0.0, 2.0]);
        assert_eq!(cfg.y_domain, [0.0, 4.1]);
        assert_eq!(cfg.x_ticks, Some(vec![0.0, 0.5, 1.0, 1.5, 2.0]));
        assert_eq!(cfg.format_x_tick(0.5), "0.50");
    }

    #[test]
    fn test_fixed_window_config() {
        let p = Parameters::new(2.0, 1.0).unwrap();
        let window = FixedWindowSampler::default().sample(&p);
        let cfg = ChartConfig::fixed_window(&p, &window);

        assert_eq!(cfg.x_domain, [-4.0, 4.0]);
        assert_eq!(cfg.y_domain, [0.0, 1.5]);
        assert!(cfg.x_ticks.is_none());
        assert_eq!(cfg.format_x_tick(-2.0), "-2");
    }

    #[test]
    fn test_tooltip_formats_y_to_four_places() {
        let p = Parameters::default();
        let cfg = ChartConfig::full_cycle(&p, &FullCycleSampler::default().sample(&p));
        assert_eq!(cfg.tooltip(0.25, 0.5), "x: 0.25\nf(x): 0.5000");
    }

    #[test]
    fn test_degenerate_domain_is_widened() {
        let p = Parameters::new(0.0, 1.0).unwrap();
        let cfg = ChartConfig::full_cycle(&p, &FullCycleSampler::default().sample(&p));
        assert!(cfg.x_domain[1] > cfg.x_domain[0]);
        assert_eq!(cfg.x_ticks, Some(vec![0.0; 5]));
    }
}
