// src/types.rs
use serde::Deserialize;

// CSV 中的一行原始采样 (秒 / 伏)
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct RawSample {
    #[serde(rename = "TIME", deserialize_with = "nan_if_empty")]
    pub time_s: f64,
    #[serde(rename = "CH1", deserialize_with = "nan_if_empty")]
    pub ch1_v: f64,
}

// 换算后的采样 (微秒 / 毫伏)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub time_us: f64,
    pub amplitude_mv: f64,
}

/// Ordered, de-duplicated series handed to the renderer.
#[derive(Clone, Debug, Default)]
pub struct AggregatedTrace {
    pub samples: Vec<Sample>,
    /// Number of scaled rows the samples were built from.
    pub source_rows: usize,
    /// Rows discarded because their timestamp was NaN.
    pub dropped_rows: usize,
}

impl AggregatedTrace {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn merged_rows(&self) -> usize {
        self.source_rows
            .saturating_sub(self.dropped_rows)
            .saturating_sub(self.samples.len())
    }
}

// 概要统计, 显示在图表上方
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TraceSummary {
    pub input_rows: usize,
    pub output_rows: usize,
    pub merged_rows: usize,
    pub dropped_rows: usize,
    pub first_time_us: f64,
    pub last_time_us: f64,
    pub min_mv: f64,
    pub max_mv: f64,
    pub mean_mv: f64,
    pub rms_mv: f64,
}

fn nan_if_empty<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<f64> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or(f64::NAN))
}
