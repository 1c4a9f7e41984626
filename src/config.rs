use crate::drivers::GroupingPolicy;
/// Capture the binary plots; library callers pass their own path.
pub const DEFAULT_CAPTURE_PATH: &str = r"C:\Users\rauna\Downloads\ADSB_2_Stopped_CH1.csv";
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FigureSize {
    pub width: f32,
    pub height: f32,
}
impl FigureSize {
    /// Size in logical pixels for a figure given in inches at `dpi`.
    pub fn from_inches(width_in: f32, height_in: f32, dpi: f32) -> Self {
        Self {
            width: width_in * dpi,
            height: height_in * dpi,
        }
    }
}
impl Default for FigureSize {
    fn default() -> Self {
        // 10 x 6 inch desktop figure at 100 dpi.
        FigureSize::from_inches(10.0, 6.0, 100.0)
    }
}
#[derive(Clone, Debug)]
pub struct PlotConfig {
    pub figure: FigureSize,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series_name: String,
    pub grouping: GroupingPolicy,
}
impl PlotConfig {
    pub fn with_grouping(mut self, grouping: GroupingPolicy) -> Self {
        self.grouping = grouping;
        self
    }
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
    pub fn with_figure(mut self, figure: FigureSize) -> Self {
        self.figure = figure;
        self
    }
}
impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            figure: FigureSize::default(),
            title: "Filtered Data Around 100 Microseconds".to_owned(),
            x_label: "Time (microseconds)".to_owned(),
            y_label: "Amplitude (millivolts)".to_owned(),
            series_name: "Amplitude".to_owned(),
            grouping: GroupingPolicy::Exact,
        }
    }
}
