// src/gui.rs
use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use log::debug;
use crate::config::PlotConfig;
use crate::drivers::CaptureError;
use crate::types::{AggregatedTrace, TraceSummary};

const APP_NAME: &str = "scopeplot";

pub struct ScopePlotApp {
    points: Vec<[f64; 2]>,
    caption: String,
    config: PlotConfig,
}

impl ScopePlotApp {
    pub fn new(trace: &AggregatedTrace, summary: &TraceSummary, config: PlotConfig) -> Self {
        Self {
            points: trace_points(trace),
            caption: summary.caption(),
            config,
        }
    }
}

impl eframe::App for ScopePlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(&self.config.title);
            });
            ui.label(&self.caption);
            ui.separator();

            // 单条曲线, 按时间升序连接
            let line = Line::new(PlotPoints::from(self.points.clone()))
                .name(&self.config.series_name);

            Plot::new("capture-plot")
                .legend(Legend::default())
                .x_axis_label(self.config.x_label.clone())
                .y_axis_label(self.config.y_label.clone())
                .show(ui, |plot_ui| {
                    plot_ui.line(line);
                });
        });
    }
}

/// Opens the chart window and blocks until the viewer closes it.
pub fn show_trace(
    trace: AggregatedTrace,
    summary: TraceSummary,
    config: &PlotConfig,
) -> Result<(), CaptureError> {
    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([config.figure.width, config.figure.height])
        .with_title(config.title.clone());
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    debug!("opening chart window with {} points", trace.len());
    let app = ScopePlotApp::new(&trace, &summary, config.clone());
    eframe::run_native(APP_NAME, options, Box::new(move |_cc| Box::new(app)))?;
    Ok(())
}

// egui_plot 需要 [x, y] 形式的点
fn trace_points(trace: &AggregatedTrace) -> Vec<[f64; 2]> {
    trace
        .samples
        .iter()
        .map(|s| [s.time_us, s.amplitude_mv])
        .collect()
}
