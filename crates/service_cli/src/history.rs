//! Daily close history files
//!
//! Reads CSV files with `date` and `close` columns (header names are
//! case-insensitive; extra columns are ignored) into a
//! [`HistoricalPriceSeries`].

use pricer_core::market_data::{HistoricalPriceSeries, PricePoint};
use pricer_core::types::Date;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::{CliError, Result};

#[derive(Debug, Deserialize)]
struct HistoryRecord {
    #[serde(alias = "Date", alias = "DATE")]
    date: String,
    #[serde(alias = "Close", alias = "CLOSE")]
    close: f64,
}

/// Loads a close history from `path`
pub fn load_history(path: &Path) -> Result<HistoricalPriceSeries> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }
    let file = std::fs::File::open(path)?;
    let series = read_history(file, &path.display().to_string())?;
    debug!(path = %path.display(), observations = series.len(), "loaded price history");
    Ok(series)
}

/// Parses a close history from any reader; `origin` names it in errors
pub fn read_history<R: Read>(reader: R, origin: &str) -> Result<HistoricalPriceSeries> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut points = Vec::new();
    for (index, record) in reader.deserialize::<HistoryRecord>().enumerate() {
        // Row 1 is the header
        let row = index + 2;
        let record = record.map_err(|e| CliError::InvalidHistory {
            path: origin.to_string(),
            row,
            message: e.to_string(),
        })?;
        let date = Date::parse(&record.date).map_err(|e| CliError::InvalidHistory {
            path: origin.to_string(),
            row,
            message: e.to_string(),
        })?;
        points.push(PricePoint::new(date, record.close));
    }

    Ok(HistoricalPriceSeries::new(points)?)
}

/// Restricts a series to closes on or after `since`, then to the last `last`
pub fn window(
    series: &HistoricalPriceSeries,
    since: Option<Date>,
    last: Option<usize>,
) -> HistoricalPriceSeries {
    let series = match since {
        Some(start) => series.since(start),
        None => series.clone(),
    };
    match last {
        Some(n) => series.tail(n),
        None => series,
    }
}
