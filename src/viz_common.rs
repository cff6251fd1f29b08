//! Shared utilities for the plotting binaries.
//!
//! The dashboard (src/main.rs) and the standalone views (src/bin/viz_*.rs)
//! use this module for startup arguments, logging, the parameter sliders,
//! the line-chart renderer and the analysis text under each chart.

use crate::chart::ChartConfig;
use crate::controller::{PlotController, PlotFrame};
use crate::{round_to, Parameters, Sample, PARAM_MAX, PARAM_MIN, PARAM_STEP};
use eframe::egui;
use egui_plot::{GridMark, Line, Plot, PlotBounds, PlotPoints};
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Line color used by both charts.
pub const LINE_COLOR: egui::Color32 = egui::Color32::from_rgb(0x88, 0x84, 0xd8);

// ─── Startup ────────────────────────────────────────────────────────────────

/// Install the fmt subscriber. `RUST_LOG` wins over `default_level`.
pub fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Value of `--<name> <f64>` in `args`. A present but unparsable value is
/// logged and ignored.
pub fn parse_flag(args: &[String], name: &str) -> Option<f64> {
    let flag = format!("--{}", name);
    let raw = args.iter().skip_while(|a| **a != flag).nth(1)?;
    match raw.parse() {
        Ok(v) => Some(v),
        Err(e) => {
            warn!(flag = %flag, value = %raw, "ignoring unparsable startup value: {}", e);
            None
        }
    }
}

/// Initial (C, h) from `--c` / `--h`, defaulting to 1 and clamped to the
/// slider range.
pub fn parse_initial_params() -> Parameters {
    let args: Vec<String> = std::env::args().collect();
    let c = parse_flag(&args, "c").unwrap_or(1.0);
    let h = parse_flag(&args, "h").unwrap_or(1.0);
    initial_params(c, h)
}

/// Validate startup values; out-of-range values are clamped to the sliders.
pub fn initial_params(c: f64, h: f64) -> Parameters {
    match Parameters::new(c, h) {
        Ok(p) if (PARAM_MIN..=PARAM_MAX).contains(&p.c()) && (PARAM_MIN..=PARAM_MAX).contains(&p.h()) => p,
        Ok(_) | Err(_) => {
            let p = Parameters::clamped(c, h);
            warn!(c, h, using_c = p.c(), using_h = p.h(), "initial parameters outside slider range");
            p
        }
    }
}

// ─── Analysis text ──────────────────────────────────────────────────────────

/// Lines shown under the one-cycle chart.
pub fn cycle_summary(frame: &PlotFrame) -> Vec<String> {
    let cycle = &frame.cycle;
    vec![
        format!(
            "Showing one full cycle from x = 0 to x = C·√h = {:.3}",
            cycle.period_end
        ),
        "Zeros of the function in this interval:".to_owned(),
        "  x = 0".to_owned(),
        format!("  x = C·√h = {:.3}", cycle.period_end),
        format!(
            "Maximum value: h = {} (at x = C·√h/2 = {:.3})",
            cycle.max_value, cycle.max_location
        ),
    ]
}

/// Zeros formatted to 2 decimals, comma separated.
pub fn format_zeros(zeros: &[f64]) -> String {
    zeros
        .iter()
        .map(|z| format!("{:.2}", z))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Lines shown under the [-4, 4] chart.
pub fn window_summary(frame: &PlotFrame) -> Vec<String> {
    let p = frame.params;
    vec![
        "x = n·C·√h, where n is any integer (0, ±1, ±2, ...)".to_owned(),
        format!(
            "For the current values (C={}, h={}), the zeros in [-4, 4] are:",
            p.c(),
            p.h()
        ),
        format_zeros(&frame.window.zeros),
    ]
}

// ─── Widgets ────────────────────────────────────────────────────────────────

/// One slider for a parameter; returns the new value when it moved.
fn parameter_slider(ui: &mut egui::Ui, label: &str, current: f64) -> Option<f64> {
    let mut value = current;
    let mut changed = false;
    ui.vertical(|ui| {
        ui.label(format!("Value of {}:", label));
        changed = ui
            .add(
                egui::Slider::new(&mut value, PARAM_MIN..=PARAM_MAX)
                    .step_by(PARAM_STEP)
                    .show_value(false),
            )
            .changed();
        ui.label(format!("{} = {}", label, current));
    });
    // Slider steps accumulate float noise (0.30000000000000004)
    changed.then(|| round_to(value, 1))
}

/// C and h sliders wired to a controller.
pub fn parameter_controls(ui: &mut egui::Ui, ctl: &mut PlotController) {
    let params = ctl.params();
    ui.horizontal_wrapped(|ui| {
        if let Some(c) = parameter_slider(ui, "C", params.c()) {
            if let Err(e) = ctl.set_c(c) {
                warn!("rejected C from slider: {:#}", e);
            }
        }
        ui.add_space(16.0);
        if let Some(h) = parameter_slider(ui, "h", params.h()) {
            if let Err(e) = ctl.set_h(h) {
                warn!("rejected h from slider: {:#}", e);
            }
        }
    });
}

/// Draw `points` as a single line inside fixed axis bounds.
pub fn draw_chart(ui: &mut egui::Ui, points: &[Sample], cfg: &ChartConfig, height: f32) {
    let series: Vec<[f64; 2]> = points.iter().map(Sample::as_point).collect();
    let tooltip_cfg = cfg.clone();
    let tick_cfg = cfg.clone();

    let mut plot = Plot::new(cfg.id)
        .height(height)
        .x_axis_label(cfg.x_label)
        .y_axis_label(cfg.y_label)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false)
        .label_formatter(move |_name, value| tooltip_cfg.tooltip(value.x, value.y))
        .x_axis_formatter(move |mark: GridMark, _range| tick_cfg.format_x_tick(mark.value));

    if let Some(ticks) = cfg.x_ticks.clone() {
        plot = plot.x_grid_spacer(move |_input| {
            let step = ticks.get(1).copied().unwrap_or(1.0).max(f64::MIN_POSITIVE);
            ticks
                .iter()
                .map(|&value| GridMark {
                    value,
                    step_size: step,
                })
                .collect()
        });
    }

    let [x_min, x_max] = cfg.x_domain;
    let [y_min, y_max] = cfg.y_domain;
    plot.show(ui, |plot_ui| {
        plot_ui.set_plot_bounds(PlotBounds::from_min_max([x_min, y_min], [x_max, y_max]));
        plot_ui.line(
            Line::new(PlotPoints::new(series))
                .name(cfg.series_name)
                .color(LINE_COLOR)
                .width(2.0),
        );
    });
}

fn summary_block(ui: &mut egui::Ui, heading: &str, lines: &[String]) {
    ui.label(egui::RichText::new(heading).strong());
    for line in lines {
        ui.label(line);
    }
}

// ─── Views ──────────────────────────────────────────────────────────────────

/// Which of the two charts a panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotView {
    /// One cycle over [0, C√h].
    FullCycle,
    /// Fixed window [-4, 4] with its zero set.
    FixedWindow,
}

impl PlotView {
    pub fn title(&self) -> &'static str {
        match self {
            PlotView::FullCycle => "One cycle of the function: h·sin²(πx/(C√h))",
            PlotView::FixedWindow => "Plot of the function: h·sin²(πx/(C√h))",
        }
    }
}

/// A chart with its own independent sliders.
pub struct PlotPanel {
    pub view: PlotView,
    pub controller: PlotController,
}

impl PlotPanel {
    pub fn new(view: PlotView, params: Parameters) -> Self {
        PlotPanel {
            view,
            controller: PlotController::new(params),
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.set_width(ui.available_width());
            ui.heading(self.view.title());
            ui.add_space(8.0);

            parameter_controls(ui, &mut self.controller);
            ui.add_space(12.0);

            let frame = self.controller.frame();
            match self.view {
                PlotView::FullCycle => {
                    draw_chart(ui, &frame.cycle.points, &frame.cycle_chart, 256.0);
                    ui.add_space(12.0);
                    summary_block(ui, "Cycle analysis:", &cycle_summary(frame));
                }
                PlotView::FixedWindow => {
                    draw_chart(ui, &frame.window.points, &frame.window_chart, 256.0);
                    ui.add_space(12.0);
                    summary_block(
                        ui,
                        "Values where the function equals 0:",
                        &window_summary(frame),
                    );
                }
            }
        });
        ui.add_space(16.0);
    }
}

/// eframe app hosting one or more independent panels, stacked vertically.
pub struct PlotApp {
    heading: Option<String>,
    panels: Vec<PlotPanel>,
}

impl PlotApp {
    pub fn new(heading: Option<String>, panels: Vec<PlotPanel>) -> Self {
        PlotApp { heading, panels }
    }
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    if let Some(heading) = &self.heading {
                        ui.heading(heading);
                        ui.add_space(10.0);
                    }
                    for panel in &mut self.panels {
                        panel.show(ui);
                    }
                });
        });
    }
}

/// Open a native window running `app`.
pub fn run_app(title: &str, size: [f32; 2], app: PlotApp) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(size)
            .with_title(title),
        ..Default::default()
    };
    eframe::run_native(title, options, Box::new(move |_cc| Ok(Box::new(app))))
}

// ─── Tests ──────────────────────────────────────────────────────────────────
