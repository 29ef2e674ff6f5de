//! Period-label column normalization.

use anyhow::{Context, Result};
use polars::prelude::{BooleanChunked, DataFrame, DataType, NamedFrom, NewChunkedArray, Series};
use tracing::debug;

use panel_model::indicator::PERIOD;
use panel_model::Frequency;

/// Convert a raw period-label column to the canonical `YYYY-MM-01` key.
///
/// The raw column is replaced by a `period` column; rows whose label fails
/// the frequency's fixed lookup are dropped and the count logged at debug
/// level. Numeric label columns (bare years) are cast to string first.
pub fn normalize_period_column(df: &DataFrame, column: &str, freq: Frequency) -> Result<DataFrame> {
    let raw = df
        .column(column)
        .with_context(|| format!("period column {column:?}"))?
        .cast(&DataType::String)?;
    let ca = raw.str()?;

    let mut mapped: Vec<String> = Vec::with_capacity(df.height());
    let mut keep: Vec<bool> = Vec::with_capacity(df.height());
    for value in ca {
        match value.and_then(|label| freq.normalize(label)) {
            Some(period) => {
                mapped.push(period);
                keep.push(true);
            }
            None => {
                mapped.push(String::new());
                keep.push(false);
            }
        }
    }
    let dropped = keep.iter().filter(|kept| !**kept).count();
    if dropped > 0 {
        debug!(column, dropped, ?freq, "dropped rows with unrecognized period labels");
    }

    let mut out = df.drop(column)?;
    out.with_column(Series::new(PERIOD.into(), mapped))?;
    let mask = BooleanChunked::from_slice("keep".into(), &keep);
    Ok(out.filter(&mask)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::NamedFrom;

    #[test]
    fn quarterly_labels_rekey_to_months() {
        let df = DataFrame::new(vec![
            Series::new("TIME_PERIOD".into(), vec!["1995-Q1", "1995-Q2", "1995-H1"]).into(),
            Series::new("OBS_VALUE".into(), vec![1.0, 2.0, 3.0]).into(),
        ])
        .unwrap();

        let out = normalize_period_column(&df, "TIME_PERIOD", Frequency::Quarterly).unwrap();

        assert_eq!(out.height(), 2);
        let periods = out.column("period").unwrap().str().unwrap();
        assert_eq!(periods.get(0), Some("1995-04-01"));
        assert_eq!(periods.get(1), Some("1995-07-01"));
    }

    #[test]
    fn integer_year_columns_are_cast_before_lookup() {
        let df = DataFrame::new(vec![
            Series::new("TIME_PERIOD".into(), vec![1995i64, 1996]).into(),
        ])
        .unwrap();

        let out = normalize_period_column(&df, "TIME_PERIOD", Frequency::Annual).unwrap();

        let periods = out.column("period").unwrap().str().unwrap();
        assert_eq!(periods.get(0), Some("1995-01-01"));
        assert_eq!(periods.get(1), Some("1996-01-01"));
    }
}
