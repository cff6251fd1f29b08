//! Visualization: One Full Cycle
//!
//! Line plot of h·sin²(πx/(C√h)) over [0, C√h] with quarter-period ticks,
//! the two zeros of the cycle and the analytic maximum.
//!
//! Run: cargo run --release --bin viz_full_cycle [-- --c 1.5 --h 2]

use sinsq_plot::viz_common::{self, PlotApp, PlotPanel, PlotView};

fn main() -> eframe::Result<()> {
    viz_common::init_logging("info");
    let params = viz_common::parse_initial_params();
    println!("Starting with C = {}, h = {}", params.c(), params.h());

    let app = PlotApp::new(None, vec![PlotPanel::new(PlotView::FullCycle, params)]);
    viz_common::run_app("sin² — One Cycle", [900.0, 560.0], app)
}
