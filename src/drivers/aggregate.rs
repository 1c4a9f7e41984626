use log::{debug, warn};
use crate::types::{AggregatedTrace, Sample};
const MAX_EXACT_INTEGER: f64 = 4_503_599_627_370_496.0;
/// How timestamps are compared when merging duplicate rows.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum GroupingPolicy {
    /// Bit-for-bit `==` on the scaled timestamp. Rescaling can leave near-duplicates
    /// that never merge.
    #[default]
    Exact,
    /// Round the scaled timestamp to this many decimal places before grouping.
    /// The rounded value becomes the output timestamp.
    RoundToDecimals(u32),
}
impl GroupingPolicy {
    fn key(self, time_us: f64) -> f64 {
        match self {
            GroupingPolicy::Exact => time_us,
            GroupingPolicy::RoundToDecimals(places) => {
                let places = places.min(f64::MAX_10_EXP as u32) as i32;
                let factor = 10f64.powi(places);
                let scaled = time_us * factor;
                // Past 2^52 every f64 is already whole, so rounding changes nothing.
                if !scaled.is_finite() || scaled.abs() >= MAX_EXACT_INTEGER {
                    return time_us;
                }
                scaled.round() / factor
            }
        }
    }
}
/// Collapse rows sharing a timestamp into one row holding their mean amplitude.
///
/// Output is sorted ascending by time with exactly one row per distinct key. Rows with
/// a NaN timestamp are dropped; NaN amplitudes are left out of the mean, and a group
/// with no finite amplitude averages to NaN.
pub fn aggregate_by_time(samples: Vec<Sample>, policy: GroupingPolicy) -> AggregatedTrace {
    let source_rows = samples.len();
    let mut keyed: Vec<Sample> = samples
        .into_iter()
        .filter(|s| !s.time_us.is_nan())
        .map(|s| Sample {
            time_us: policy.key(s.time_us),
            amplitude_mv: s.amplitude_mv,
        })
        .collect();
    let dropped_rows = source_rows - keyed.len();
    if dropped_rows > 0 {
        warn!("dropped {dropped_rows} rows with a NaN timestamp");
    }
    keyed.sort_by(|a, b| a.time_us.total_cmp(&b.time_us));
    let mut out: Vec<Sample> = Vec::with_capacity(keyed.len());
    let mut group = GroupMean::default();
    let mut current: Option<f64> = None;
    for sample in keyed {
        match current {
            Some(time) if time == sample.time_us => {}
            Some(time) => {
                out.push(group.finish(time));
                current = Some(sample.time_us);
            }
            None => current = Some(sample.time_us),
        }
        group.add(sample.amplitude_mv);
    }
    if let Some(time) = current {
        out.push(group.finish(time));
    }
    debug!(
        "grouped {} rows into {} timestamps ({policy:?})",
        source_rows - dropped_rows,
        out.len()
    );
    AggregatedTrace {
        samples: out,
        source_rows,
        dropped_rows,
    }
}
#[derive(Default)]
struct GroupMean {
    sum: f64,
    count: usize,
    min: f64,
    max: f64,
}
impl GroupMean {
    fn add(&mut self, value: f64) {
        if value.is_nan() {
            return;
        }
        if self.count == 0 {
            self.min = value;
            self.max = value;
        } else {
            self.min = self.min.min(value);
            self.max = self.max.max(value);
        }
        self.sum += value;
        self.count += 1;
    }
    fn finish(&mut self, time_us: f64) -> Sample {
        let amplitude_mv = if self.count == 0 {
            f64::NAN
        } else {
            // Rounding in the sum can land just outside the inputs.
            (self.sum / self.count as f64).clamp(self.min, self.max)
        };
        *self = GroupMean::default();
        Sample {
            time_us,
            amplitude_mv,
        }
    }
}
