//! Oscilloscope capture viewer: loads a `TIME`/`CH1` CSV export, converts it to
//! microseconds and millivolts, merges repeated timestamps and plots the result.
pub mod config;
pub mod drivers;
pub mod gui;
pub mod types;
pub use config::{FigureSize, PlotConfig, DEFAULT_CAPTURE_PATH};
pub use drivers::{plot_csv_data, CaptureError, CapturePipeline, GroupingPolicy};
pub use types::{AggregatedTrace, RawSample, Sample, TraceSummary};
