//! CSV spread series loader
//!
//! Reads a tabular file with a timestamp column and a spread column into
//! a `SpreadSeries`. Column names are configurable; timestamps may be
//! RFC 3339 or plain `YYYY-MM-DD` dates (parsed as UTC midnight).

use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

use crate::domain::{BacktestError, SpreadPoint, SpreadSeries};

/// Column names of the input file
#[derive(Debug, Clone)]
pub struct CsvColumns {
    pub timestamp: String,
    pub spread: String,
}

impl Default for CsvColumns {
    fn default() -> Self {
        Self {
            timestamp: "date".to_string(),
            spread: "spread".to_string(),
        }
    }
}

/// Errors loading or exporting CSV data
#[derive(Debug, Error)]
pub enum DataError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing column '{0}' in CSV header")]
    MissingColumn(String),
    #[error("line {line}: cannot parse timestamp '{value}'")]
    InvalidTimestamp { line: usize, value: String },
    #[error("line {line}: cannot parse number '{value}'")]
    InvalidNumber { line: usize, value: String },
    #[error(transparent)]
    Invalid(#[from] BacktestError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Load a spread series from a CSV file
pub fn load_spread_csv<P: AsRef<Path>>(
    path: P,
    columns: &CsvColumns,
) -> Result<SpreadSeries, DataError> {
    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?.clone();
    let timestamp_idx = headers
        .iter()
        .position(|h| h == columns.timestamp)
        .ok_or_else(|| DataError::MissingColumn(columns.timestamp.clone()))?;
    let spread_idx = headers
        .iter()
        .position(|h| h == columns.spread)
        .ok_or_else(|| DataError::MissingColumn(columns.spread.clone()))?;

    let mut points = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        // Header is line 1
        let line = row + 2;

        let raw_ts = record.get(timestamp_idx).unwrap_or("");
        let timestamp = parse_timestamp(raw_ts).ok_or_else(|| DataError::InvalidTimestamp {
            line,
            value: raw_ts.to_string(),
        })?;

        let raw_value = record.get(spread_idx).unwrap_or("");
        let spread = raw_value
            .trim()
            .parse::<f64>()
            .map_err(|_| DataError::InvalidNumber {
                line,
                value: raw_value.to_string(),
            })?;

        points.push(SpreadPoint { timestamp, spread });
    }

    Ok(SpreadSeries::new(points)?)
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|ndt| DateTime::from_naive_utc_and_offset(ndt, Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_csv() {
        let file = write_csv("date,spread\n2024-01-02,1.50\n2024-01-03,1.62\n");
        let series = load_spread_csv(file.path(), &CsvColumns::default()).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.values(), vec![1.50, 1.62]);
    }

    #[test]
    fn test_load_rfc3339_timestamps() {
        let file = write_csv("date,spread\n2024-01-02T15:30:00Z,1.50\n");
        let series = load_spread_csv(file.path(), &CsvColumns::default()).unwrap();
        assert_eq!(series.len(), 1);
    }

    #[test]
    fn test_custom_column_names() {
        let file = write_csv("Date,Spread,Volume\n2024-01-02,1.50,100\n");
        let columns = CsvColumns {
            timestamp: "Date".to_string(),
            spread: "Spread".to_string(),
        };
        let series = load_spread_csv(file.path(), &columns).unwrap();
        assert_eq!(series.values(), vec![1.50]);
    }

    #[test]
    fn test_missing_column() {
        let file = write_csv("date,price\n2024-01-02,1.50\n");
        let result = load_spread_csv(file.path(), &CsvColumns::default());
        assert!(matches!(result, Err(DataError::MissingColumn(c)) if c == "spread"));
    }

    #[test]
    fn test_bad_timestamp_reports_line() {
        let file = write_csv("date,spread\n2024-01-02,1.50\nnot-a-date,1.60\n");
        let result = load_spread_csv(file.path(), &CsvColumns::default());
        assert!(matches!(
            result,
            Err(DataError::InvalidTimestamp { line: 3, .. })
        ));
    }

    #[test]
    fn test_bad_number_reports_line() {
        let file = write_csv("date,spread\n2024-01-02,abc\n");
        let result = load_spread_csv(file.path(), &CsvColumns::default());
        assert!(matches!(
            result,
            Err(DataError::InvalidNumber { line: 2, .. })
        ));
    }

    #[test]
    fn test_nonexistent_file() {
        let result = load_spread_csv("/nonexistent/spread.csv", &CsvColumns::default());
        assert!(result.is_err());
    }
}
