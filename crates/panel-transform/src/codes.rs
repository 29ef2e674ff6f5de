//! Country-code column normalization.

use anyhow::{Context, Result};
use polars::prelude::{BooleanChunked, DataFrame, DataType, NamedFrom, NewChunkedArray, Series};
use tracing::debug;

use panel_model::canonical_code;
use panel_model::indicator::COUNTRY;

/// Map a raw code column through the canonical table.
///
/// The raw column is replaced by a canonical `country` column; rows whose
/// code is absent from the table are dropped, never defaulted. The dropped
/// count is logged at debug level.
pub fn normalize_country_column(df: &DataFrame, column: &str) -> Result<DataFrame> {
    let raw = df
        .column(column)
        .with_context(|| format!("country column {column:?}"))?
        .cast(&DataType::String)?;
    let ca = raw.str()?;

    let mut mapped: Vec<&'static str> = Vec::with_capacity(df.height());
    let mut keep: Vec<bool> = Vec::with_capacity(df.height());
    for value in ca {
        match value.and_then(canonical_code) {
            Some(code) => {
                mapped.push(code);
                keep.push(true);
            }
            None => {
                mapped.push("");
                keep.push(false);
            }
        }
    }
    let dropped = keep.iter().filter(|kept| !**kept).count();
    if dropped > 0 {
        debug!(column, dropped, "dropped rows with unmapped country codes");
    }

    let mut out = df.drop(column)?;
    out.with_column(Series::new(COUNTRY.into(), mapped))?;
    let mask = BooleanChunked::from_slice("keep".into(), &keep);
    Ok(out.filter(&mask)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::NamedFrom;

    #[test]
    fn unmapped_codes_drop_their_rows() {
        let df = DataFrame::new(vec![
            Series::new("REF_AREA".into(), vec!["JPN", "G163", "XX?", "US"]).into(),
            Series::new("OBS_VALUE".into(), vec![1.0, 2.0, 3.0, 4.0]).into(),
        ])
        .unwrap();

        let out = normalize_country_column(&df, "REF_AREA").unwrap();

        assert_eq!(out.height(), 3);
        let countries = out.column("country").unwrap().str().unwrap();
        assert_eq!(countries.get(0), Some("JP"));
        assert_eq!(countries.get(1), Some("I9"));
        assert_eq!(countries.get(2), Some("US"));
        // The row keyed by the unmapped code lost its value as well.
        let values = out.column("OBS_VALUE").unwrap().f64().unwrap();
        assert_eq!(values.get(2), Some(4.0));
    }

    #[test]
    fn missing_column_is_an_error() {
        let df = DataFrame::new(vec![Series::new("a".into(), vec![1.0]).into()]).unwrap();
        assert!(normalize_country_column(&df, "REF_AREA").is_err());
    }
}
