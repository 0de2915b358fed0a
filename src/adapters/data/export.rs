//! CSV export
//!
//! The plot-artifact outputs: the equity curve (one row per period with
//! position, net PnL and cumulative PnL) and generated spread series,
//! ready for any external charting tool.

use std::path::Path;

use crate::domain::{EquityCurve, SpreadSeries};

use super::csv_loader::DataError;

/// Write the equity curve to a CSV file
pub fn write_equity_csv<P: AsRef<Path>>(path: P, equity: &EquityCurve) -> Result<(), DataError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["timestamp", "position", "net_pnl", "cumulative_pnl"])?;
    for point in equity.points() {
        writer.write_record([
            point.timestamp.to_rfc3339(),
            point.position.to_string(),
            format!("{:.6}", point.net_pnl),
            format!("{:.6}", point.cumulative),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write a spread series to a CSV file loadable by `load_spread_csv`
pub fn write_spread_csv<P: AsRef<Path>>(
    path: P,
    series: &SpreadSeries,
) -> Result<(), DataError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["date", "spread"])?;
    for point in series.points() {
        writer.write_record([
            point.timestamp.format("%Y-%m-%d").to_string(),
            format!("{:.6}", point.spread),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tempfile::tempdir;

    use crate::domain::Signal;

    #[test]
    fn test_export_round_trip() {
        let timestamps = vec![
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(),
        ];
        let equity = EquityCurve::build(
            &timestamps,
            &[Signal::Flat, Signal::Short],
            &[0.0, 0.0],
            0.02,
        );

        let dir = tempdir().unwrap();
        let path = dir.path().join("equity.csv");
        write_equity_csv(&path, &equity).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "timestamp,position,net_pnl,cumulative_pnl"
        );
        assert!(lines.next().unwrap().contains("Flat"));
        let short_line = lines.next().unwrap();
        assert!(short_line.contains("Short"));
        assert!(short_line.contains("-0.020000"));
    }

    #[test]
    fn test_spread_series_round_trip() {
        use super::super::csv_loader::{load_spread_csv, CsvColumns};
        use crate::domain::SpreadSeries;

        let timestamps = vec![
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(),
        ];
        let series = SpreadSeries::from_values(timestamps, vec![1.5, 1.62]).unwrap();

        let dir = tempdir().unwrap();
        let path = dir.path().join("spread.csv");
        write_spread_csv(&path, &series).unwrap();

        let loaded = load_spread_csv(&path, &CsvColumns::default()).unwrap();
        assert_eq!(loaded.values(), series.values());
        assert_eq!(loaded.timestamps(), series.timestamps());
    }
}
