//! Local CSV loaders.
//!
//! Two fixed shapes: single-series files with an `observation_date` column
//! and one value column named after the series code, and labeled
//! multi-column tables (the raw trade-flow file) read straight into a
//! DataFrame. A missing file or a header that does not match the expected
//! schema is fatal.

use std::path::Path;

use csv::ReaderBuilder;
use polars::prelude::{CsvReadOptions, DataFrame, NamedFrom, SerReader, Series};
use tracing::debug;

use crate::error::{IngestError, Result};

/// Header of the date column in FRED-style series exports.
pub const OBSERVATION_DATE: &str = "observation_date";

/// Missing-value token used by FRED exports alongside empty cells.
const MISSING_TOKEN: &str = ".";

/// Read a single-series CSV into a two-column DataFrame.
///
/// The result has a string `observation_date` column and a nullable f64
/// column named `value_column`. Missing observations (empty cells or the
/// `"."` token) become nulls; dropping them is the transform layer's call.
pub fn read_series_csv(path: &Path, value_column: &str) -> Result<DataFrame> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let headers = reader.headers()?.clone();
    let date_idx = position(&headers, OBSERVATION_DATE).ok_or_else(|| {
        IngestError::schema(
            path.display().to_string(),
            format!("missing column {OBSERVATION_DATE:?}"),
        )
    })?;
    let value_idx = position(&headers, value_column).ok_or_else(|| {
        IngestError::schema(
            path.display().to_string(),
            format!("missing column {value_column:?}"),
        )
    })?;

    let mut dates: Vec<String> = Vec::new();
    let mut values: Vec<Option<f64>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        let date = record.get(date_idx).unwrap_or("").trim();
        if date.is_empty() {
            continue;
        }
        dates.push(date.to_string());
        values.push(parse_observation(record.get(value_idx).unwrap_or("")));
    }
    debug!(path = %path.display(), rows = dates.len(), "read series csv");

    let df = DataFrame::new(vec![
        Series::new(OBSERVATION_DATE.into(), dates).into(),
        Series::new(value_column.into(), values).into(),
    ])?;
    Ok(df)
}

/// Read a labeled multi-column CSV (SDMX-style export) into a DataFrame.
///
/// `required` columns must all be present; anything else is a schema
/// mismatch and fatal.
pub fn read_labeled_csv(path: &Path, required: &[&str]) -> Result<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;
    ensure_columns(&df, required, &path.display().to_string())?;
    debug!(path = %path.display(), rows = df.height(), "read labeled csv");
    Ok(df)
}

/// Check that every required labeled column is present.
pub fn ensure_columns(df: &DataFrame, required: &[&str], source_name: &str) -> Result<()> {
    for name in required {
        if df.column(name).is_err() {
            return Err(IngestError::schema(
                source_name,
                format!("missing column {name:?}"),
            ));
        }
    }
    Ok(())
}

fn position(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.trim().trim_matches('\u{feff}') == name)
}

/// Parse an observation cell, treating empty cells and `"."` as missing.
fn parse_observation(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == MISSING_TOKEN {
        return None;
    }
    let value = trimmed.parse::<f64>().ok()?;
    value.is_finite().then_some(value)
}

#[cfg(test)]
mod tests {
    use super::parse_observation;

    #[test]
    fn missing_tokens_parse_to_none() {
        assert_eq!(parse_observation("."), None);
        assert_eq!(parse_observation(""), None);
        assert_eq!(parse_observation("  "), None);
        assert_eq!(parse_observation("n/a"), None);
    }

    #[test]
    fn numeric_cells_parse() {
        assert_eq!(parse_observation("1.0852"), Some(1.0852));
        assert_eq!(parse_observation(" 110.25 "), Some(110.25));
    }
}
