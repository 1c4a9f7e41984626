use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("capture file not found: {}", .path.display())]
    NotFound { path: PathBuf },
    #[error("failed to read capture: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed capture data at line {line}: {message}")]
    Parse { line: u64, message: String },
    #[error("capture is missing required column `{column}`")]
    MissingColumn { column: &'static str },
    #[error("failed to open display: {0}")]
    Display(String),
}
impl From<csv::Error> for CaptureError {
    fn from(value: csv::Error) -> Self {
        let line = value.position().map(|p| p.line()).unwrap_or(0);
        match value.into_kind() {
            csv::ErrorKind::Io(err) => CaptureError::Io(err),
            kind => CaptureError::Parse {
                line,
                message: describe(&kind),
            },
        }
    }
}
impl From<eframe::Error> for CaptureError {
    fn from(value: eframe::Error) -> Self {
        CaptureError::Display(value.to_string())
    }
}
fn describe(kind: &csv::ErrorKind) -> String {
    match kind {
        csv::ErrorKind::Utf8 { err, .. } => format!("invalid UTF-8: {err}"),
        csv::ErrorKind::UnequalLengths {
            expected_len, len, ..
        } => format!("expected {expected_len} fields, found {len}"),
        csv::ErrorKind::Deserialize { err, .. } => err.to_string(),
        other => format!("{other:?}"),
    }
}
