//! Fixed unit conversions applied to every captured row.
use crate::types::{RawSample, Sample};
/// Seconds to microseconds.
pub const MICROS_PER_SECOND: f64 = 1e6;
/// Volts to millivolts.
pub const MILLIVOLTS_PER_VOLT: f64 = 1e3;
pub fn scale_sample(raw: RawSample) -> Sample {
    Sample {
        time_us: raw.time_s * MICROS_PER_SECOND,
        amplitude_mv: raw.ch1_v * MILLIVOLTS_PER_VOLT,
    }
}
/// Converts every row; no row is filtered out.
pub fn scale_samples(raw: Vec<RawSample>) -> Vec<Sample> {
    raw.into_iter().map(scale_sample).collect()
}
