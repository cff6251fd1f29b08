//! Visualization: Fixed Window
//!
//! Line plot of h·sin²(πx/(C√h)) over [-4, 4] and the list of zeros
//! n·C·√h inside the window.
//!
//! Run: cargo run --release --bin viz_window [-- --c 1.5 --h 2]

use sinsq_plot::viz_common::{self, PlotApp, PlotPanel, PlotView};

fn main() -> eframe::Result<()> {
    viz_common::init_logging("info");
    let params = viz_common::parse_initial_params();
    println!("Starting with C = {}, h = {}", params.c(), params.h());

    let app = PlotApp::new(None, vec![PlotPanel::new(PlotView::FixedWindow, params)]);
    viz_common::run_app("sin² — Window [-4, 4]", [900.0, 560.0], app)
}
