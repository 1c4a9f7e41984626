use crate::types::{AggregatedTrace, TraceSummary};
impl TraceSummary {
    /// Row counts plus amplitude statistics over the finite samples of a trace.
    pub fn from_trace(trace: &AggregatedTrace) -> Self {
        let mut summary = TraceSummary {
            input_rows: trace.source_rows,
            output_rows: trace.len(),
            merged_rows: trace.merged_rows(),
            dropped_rows: trace.dropped_rows,
            ..TraceSummary::default()
        };
        if let (Some(first), Some(last)) = (trace.samples.first(), trace.samples.last()) {
            summary.first_time_us = first.time_us;
            summary.last_time_us = last.time_us;
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        let mut sum_sq = 0.0;
        let mut count = 0usize;
        for value in trace
            .samples
            .iter()
            .map(|s| s.amplitude_mv)
            .filter(|v| v.is_finite())
        {
            min = min.min(value);
            max = max.max(value);
            sum += value;
            sum_sq += value * value;
            count += 1;
        }
        if count > 0 {
            summary.min_mv = min;
            summary.max_mv = max;
            summary.mean_mv = sum / count as f64;
            summary.rms_mv = (sum_sq / count as f64).sqrt();
        }
        summary
    }
    pub fn span_us(&self) -> f64 {
        self.last_time_us - self.first_time_us
    }
    /// One-line caption shown above the chart.
    pub fn caption(&self) -> String {
        if self.output_rows == 0 {
            return format!("No samples loaded ({} rows read)", self.input_rows);
        }
        format!(
            "{} points from {} rows ({} merged) | {:.3} .. {:.3} us (span {:.3} us) | min {:.3} / max {:.3} mV | RMS {:.3} mV",
            self.output_rows,
            self.input_rows,
            self.merged_rows,
            self.first_time_us,
            self.last_time_us,
            self.span_us(),
            self.min_mv,
            self.max_mv,
            self.rms_mv,
        )
    }
}
