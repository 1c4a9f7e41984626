use std::io::Read;
use std::path::Path;
use std::time::Instant;
use log::{debug, info};
use crate::config::PlotConfig;
use crate::drivers::aggregate::aggregate_by_time;
use crate::drivers::error::CaptureError;
use crate::drivers::source::{load_capture, read_capture};
use crate::drivers::units::scale_samples;
use crate::gui;
use crate::types::{AggregatedTrace, RawSample, TraceSummary};
/// Load, scale and de-duplicate a capture, then optionally put it on screen.
pub struct CapturePipeline {
    config: PlotConfig,
}
impl CapturePipeline {
    pub fn new(config: PlotConfig) -> Self {
        Self { config }
    }
    pub fn process_file(&self, path: impl AsRef<Path>) -> Result<AggregatedTrace, CaptureError> {
        let started = Instant::now();
        let raw = load_capture(path)?;
        debug!("load took {:?}", started.elapsed());
        Ok(self.process_rows(raw))
    }
    pub fn process_reader<R: Read>(&self, reader: R) -> Result<AggregatedTrace, CaptureError> {
        let raw = read_capture(reader)?;
        Ok(self.process_rows(raw))
    }
    /// Scale then group; the order is fixed.
    pub fn process_rows(&self, raw: Vec<RawSample>) -> AggregatedTrace {
        let started = Instant::now();
        let scaled = scale_samples(raw);
        let trace = aggregate_by_time(scaled, self.config.grouping);
        debug!("scale + aggregate took {:?}", started.elapsed());
        trace
    }
    /// Runs the whole pipeline and blocks until the chart window is closed.
    pub fn plot_file(&self, path: impl AsRef<Path>) -> Result<(), CaptureError> {
        let trace = self.process_file(path)?;
        let summary = TraceSummary::from_trace(&trace);
        info!("{}", summary.caption());
        gui::show_trace(trace, summary, &self.config)
    }
}
impl Default for CapturePipeline {
    fn default() -> Self {
        Self::new(PlotConfig::default())
    }
}
/// Plot a capture with the default figure settings and exact timestamp grouping.
pub fn plot_csv_data(path: impl AsRef<Path>) -> Result<(), CaptureError> {
    CapturePipeline::default().plot_file(path)
}
