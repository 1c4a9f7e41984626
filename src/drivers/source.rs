use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, info};
use crate::drivers::CaptureError;
use crate::types::RawSample;
pub const TIME_COLUMN: &str = "TIME";
pub const CH1_COLUMN: &str = "CH1";
/// Load a scope capture from disk. Columns other than `TIME` and `CH1` are ignored.
pub fn load_capture(path: impl AsRef<Path>) -> Result<Vec<RawSample>, CaptureError> {
    let path = path.as_ref();
    info!("loading capture from {}", path.display());
    let file = File::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => CaptureError::NotFound {
            path: path.to_path_buf(),
        },
        _ => CaptureError::Io(err),
    })?;
    read_capture(file)
}
/// Parse capture rows from any reader producing CSV text with a header row.
///
/// Header names must match exactly; only cell values are trimmed. Short rows read the
/// missing cells as NaN, rows longer than the header are rejected. When a required
/// column name repeats, the first occurrence is used and the rest are ignored.
pub fn read_capture<R: Read>(reader: R) -> Result<Vec<RawSample>, CaptureError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Fields)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let time_idx = column_index(&headers, TIME_COLUMN)?;
    let ch1_idx = column_index(&headers, CH1_COLUMN)?;
    let projected_headers = StringRecord::from(vec![TIME_COLUMN, CH1_COLUMN]);
    let mut samples = Vec::new();
    let mut record = StringRecord::new();
    while csv_reader.read_record(&mut record)? {
        if record.len() > headers.len() {
            return Err(CaptureError::Parse {
                line: record.position().map(|p| p.line()).unwrap_or(0),
                message: format!("expected {} fields, found {}", headers.len(), record.len()),
            });
        }
        let mut projected = StringRecord::from(vec![
            record.get(time_idx).unwrap_or(""),
            record.get(ch1_idx).unwrap_or(""),
        ]);
        projected.set_position(record.position().cloned());
        samples.push(projected.deserialize::<RawSample>(Some(&projected_headers))?);
    }
    debug!(
        "parsed {} rows ({} columns in header)",
        samples.len(),
        headers.len()
    );
    Ok(samples)
}
fn column_index(headers: &StringRecord, column: &'static str) -> Result<usize, CaptureError> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or(CaptureError::MissingColumn { column })
}
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    #[test]
    fn reads_required_columns_and_ignores_the_rest() {
        let csv = "CH2,TIME,CH1,NOTE\n9,0.0001,0.002,a\n9,0.0002,0.004,b\n";
        let samples = read_capture(csv.as_bytes()).unwrap();
        assert_eq!(
            samples,
            vec![
                RawSample {
                    time_s: 0.0001,
                    ch1_v: 0.002
                },
                RawSample {
                    time_s: 0.0002,
                    ch1_v: 0.004
                },
            ]
        );
    }
    #[test]
    fn missing_ch1_column_is_rejected() {
        let err = read_capture("TIME,CH2\n0.1,0.2\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            CaptureError::MissingColumn { column: "CH1" }
        ));
    }
    #[test]
    fn missing_time_column_is_rejected() {
        let err = read_capture("time,CH1\n0.1,0.2\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            CaptureError::MissingColumn { column: "TIME" }
        ));
    }
    #[test]
    fn non_numeric_cell_reports_line() {
        let err = read_capture("TIME,CH1\n0.1,0.2\n0.2,oops\n".as_bytes()).unwrap_err();
        match err {
            CaptureError::Parse { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other:?}"),
        }
    }
    #[test]
    fn short_row_pads_missing_cells_with_nan() {
        let samples = read_capture("TIME,CH1\n0.0001,0.002\n0.0002\n".as_bytes()).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[1].time_s, 0.0002);
        assert!(samples[1].ch1_v.is_nan());
    }
    #[test]
    fn long_row_is_a_parse_error() {
        let err = read_capture("TIME,CH1\n0.1,0.2\n0.3,0.4,0.5\n".as_bytes()).unwrap_err();
        match err {
            CaptureError::Parse { line, message } => {
                assert_eq!(line, 3);
                assert_eq!(message, "expected 2 fields, found 3");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
    #[test]
    fn repeated_column_uses_first_occurrence() {
        let samples = read_capture("TIME,CH1,CH1\n0.0001,0.002,9\n".as_bytes()).unwrap();
        assert_eq!(
            samples,
            vec![RawSample {
                time_s: 0.0001,
                ch1_v: 0.002
            }]
        );
    }
    #[test]
    fn empty_cells_become_nan() {
        let samples = read_capture("TIME,CH1\n0.1,\n,0.5\n".as_bytes()).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].time_s, 0.1);
        assert!(samples[0].ch1_v.is_nan());
        assert!(samples[1].time_s.is_nan());
        assert_eq!(samples[1].ch1_v, 0.5);
    }
    #[test]
    fn whitespace_around_cells_is_trimmed() {
        let samples = read_capture("TIME,CH1\n 1e-6 , -0.25 \n".as_bytes()).unwrap();
        assert_eq!(
            samples,
            vec![RawSample {
                time_s: 1e-6,
                ch1_v: -0.25
            }]
        );
    }
    #[test]
    fn padded_header_name_does_not_match() {
        let err = read_capture(" TIME ,CH1\n0.0001,0.002\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            CaptureError::MissingColumn { column: "TIME" }
        ));
    }
    #[test]
    fn header_only_file_has_no_rows() {
        let samples = read_capture("TIME,CH1\n".as_bytes()).unwrap();
        assert!(samples.is_empty());
    }
    #[test]
    fn loads_capture_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "TIME,CH1").unwrap();
        writeln!(file, "0.0001,0.002").unwrap();
        file.flush().unwrap();
        let samples = load_capture(file.path()).unwrap();
        assert_eq!(samples.len(), 1);
    }
    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.csv");
        match load_capture(&path).unwrap_err() {
            CaptureError::NotFound { path: reported } => assert_eq!(reported, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
