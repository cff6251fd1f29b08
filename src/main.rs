use clap::{Parser, ValueEnum};
use sinsq_plot::viz_common::{self, PlotApp, PlotPanel, PlotView};
use tracing::info;

/// Interactive plot of f(x) = h·sin²(πx/(C√h)) with live zeros, period and maximum
#[derive(Parser)]
#[command(name = "sinsq-plot", version, about)]
struct Cli {
    /// Initial value of C (slider range 0.1..=5)
    #[arg(long = "c", default_value_t = 1.0, allow_negative_numbers = true)]
    c: f64,

    /// Initial value of h (slider range 0.1..=5)
    #[arg(long = "h", default_value_t = 1.0, allow_negative_numbers = true)]
    h: f64,

    /// Which chart(s) to open
    #[arg(long, value_enum, default_value_t = ViewArg::Both)]
    view: ViewArg,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ViewArg {
    /// [-4, 4] window first, then one full cycle
    Both,
    /// One full cycle over [0, C√h]
    Cycle,
    /// Fixed window [-4, 4] with zeros
    Window,
}

impl ViewArg {
    fn views(self) -> Vec<PlotView> {
        match self {
            ViewArg::Both => vec![PlotView::FixedWindow, PlotView::FullCycle],
            ViewArg::Cycle => vec![PlotView::FullCycle],
            ViewArg::Window => vec![PlotView::FixedWindow],
        }
    }
}

fn main() -> eframe::Result<()> {
    let cli = Cli::parse();
    viz_common::init_logging(&cli.log_level);

    let params = viz_common::initial_params(cli.c, cli.h);
    info!(c = params.c(), h = params.h(), "starting plotter");

    // Each chart keeps its own sliders, starting from the same values.
    let panels = cli
        .view
        .views()
        .into_iter()
        .map(|view| PlotPanel::new(view, params))
        .collect();

    let app = PlotApp::new(
        Some("Plot of the function h·sin²(πx/(C√h))".to_owned()),
        panels,
    );
    viz_common::run_app("sin² plotter", [900.0, 1000.0], app)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_startup_values_reach_clamping() {
        let cli = Cli::try_parse_from(["sinsq-plot", "--c", "-3", "--h", "-0.5"]).unwrap();
        assert_eq!((cli.c, cli.h), (-3.0, -0.5));
        let p = viz_common::initial_params(cli.c, cli.h);
        assert_eq!((p.c(), p.h()), (0.1, 0.1));
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["sinsq-plot"]).unwrap();
        assert_eq!((cli.c, cli.h), (1.0, 1.0));
        assert!(cli.view == ViewArg::Both);
        assert_eq!(cli.log_level, "info");
    }
}
