// src/drivers/mod.rs
pub mod aggregate;
pub mod error;
pub mod pipeline;
pub mod source;
pub mod summary;
pub mod units;
pub use aggregate::{aggregate_by_time, GroupingPolicy};
pub use error::CaptureError;
pub use pipeline::{plot_csv_data, CapturePipeline};
pub use source::{load_capture, read_capture};
pub use units::scale_samples;
