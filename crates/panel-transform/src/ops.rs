//! Shared frame operations used by every indicator pipeline.

use anyhow::{bail, Context, Result};
use polars::prelude::{
    col, lit, DataFrame, DataType, Expr, IntoLazy, JoinArgs, JoinType, SortMultipleOptions,
};

use panel_model::indicator::{COUNTRY, PERIOD};
use panel_model::sources::OBS_VALUE;
use panel_model::Frequency;

use crate::codes::normalize_country_column;
use crate::periods::normalize_period_column;

/// Drop rows with a null in any column and sort ascending by period.
///
/// Long tables get a secondary country sort so equal-period row order is
/// deterministic; wide tables have unique periods and sort by period alone.
pub fn drop_null_rows_sorted(df: &DataFrame) -> Result<DataFrame> {
    let by: Vec<&str> = if df.column(COUNTRY).is_ok() {
        vec![PERIOD, COUNTRY]
    } else {
        vec![PERIOD]
    };
    let out = df
        .clone()
        .lazy()
        .drop_nulls(None)
        .sort(by, SortMultipleOptions::default())
        .collect()?;
    Ok(out)
}

/// Collapse repeated observations within a period to their mean.
///
/// Re-keying a daily export truncates every date in a month to the same
/// `YYYY-MM-01` key; left in place, the duplicate keys fan out through
/// every subsequent period join. Null observations do not contribute to
/// the mean; a period whose observations are all missing stays null and
/// falls to the usual null drop.
pub fn monthly_mean(df: &DataFrame, value_column: &str) -> Result<DataFrame> {
    let out = df
        .clone()
        .lazy()
        .group_by([col(PERIOD)])
        .agg([col(value_column).mean()])
        .sort([PERIOD], SortMultipleOptions::default())
        .collect()?;
    Ok(out)
}

/// Keep rows matching every `(column, value)` predicate.
///
/// Predicate columns are compared as strings; a missing predicate column
/// is a schema mismatch and fatal.
pub fn filter_all_eq(df: &DataFrame, filters: &[(&str, &str)]) -> Result<DataFrame> {
    for (name, _) in filters {
        df.column(name)
            .with_context(|| format!("filter column {name:?}"))?;
    }
    let mut lf = df.clone().lazy();
    for (name, value) in filters {
        lf = lf.filter(col(*name).cast(DataType::String).eq(lit(*value)));
    }
    Ok(lf.collect()?)
}

/// Align frames on the period key, keeping only periods present in all.
///
/// Equivalent to concatenating wide on the period index and dropping rows
/// with any missing value. The result is sorted ascending by period.
pub fn inner_align_on_period(frames: &[DataFrame]) -> Result<DataFrame> {
    let mut iter = frames.iter();
    let Some(first) = iter.next() else {
        bail!("no frames to align");
    };
    let mut lf = first.clone().lazy();
    for frame in iter {
        lf = lf.join(
            frame.clone().lazy(),
            [col(PERIOD)],
            [col(PERIOD)],
            JoinArgs::new(JoinType::Inner),
        );
    }
    let out = lf
        .drop_nulls(None)
        .sort([PERIOD], SortMultipleOptions::default())
        .collect()?;
    Ok(out)
}

/// Period-over-period percent change within each country.
///
/// `(current / previous − 1) × 100` against the previous retained period
/// of the same country; each country's first retained period has no
/// previous value and is dropped. Returns `(country, period, out_column)`.
pub fn pct_change_by_country(
    df: &DataFrame,
    value_column: &str,
    out_column: &str,
) -> Result<DataFrame> {
    let previous: Expr = col(value_column).shift(lit(1)).over([col(COUNTRY)]);
    let out = df
        .clone()
        .lazy()
        .sort([COUNTRY, PERIOD], SortMultipleOptions::default())
        .with_column(((col(value_column) / previous - lit(1.0)) * lit(100.0)).alias(out_column))
        .select([col(COUNTRY), col(PERIOD), col(out_column)])
        .drop_nulls(None)
        .sort([PERIOD, COUNTRY], SortMultipleOptions::default())
        .collect()?;
    Ok(out)
}

/// Difference vs. a reference country's value at the same period.
///
/// Joins each non-reference row against the reference series on period;
/// periods where the reference has no value are excluded by the inner
/// join. Returns `(country, period, out_column)`.
pub fn diff_vs_reference(
    df: &DataFrame,
    value_column: &str,
    reference_country: &str,
    out_column: &str,
) -> Result<DataFrame> {
    let reference = df
        .clone()
        .lazy()
        .filter(col(COUNTRY).eq(lit(reference_country)))
        .select([col(PERIOD), col(value_column).alias("reference_value")]);
    let out = df
        .clone()
        .lazy()
        .filter(col(COUNTRY).neq(lit(reference_country)))
        .join(
            reference,
            [col(PERIOD)],
            [col(PERIOD)],
            JoinArgs::new(JoinType::Inner),
        )
        .with_column((col(value_column) - col("reference_value")).alias(out_column))
        .select([col(COUNTRY), col(PERIOD), col(out_column)])
        .drop_nulls(None)
        .sort([PERIOD, COUNTRY], SortMultipleOptions::default())
        .collect()?;
    Ok(out)
}

/// The shared SDMX observation pipeline.
///
/// Applies the catalog's categorical predicates, narrows to the three
/// observation columns, normalizes codes and period labels (dropping
/// unmapped rows), and returns the long `(country, period, value_column)`
/// level table with nulls dropped and periods ascending.
pub fn observation_table(
    raw: &DataFrame,
    filters: &[(&str, &str)],
    freq: Frequency,
    value_column: &str,
) -> Result<DataFrame> {
    use panel_model::sources::{REF_AREA, TIME_PERIOD};

    let filtered = filter_all_eq(raw, filters)?;
    let narrowed = filtered
        .lazy()
        .select([
            col(REF_AREA),
            col(TIME_PERIOD),
            col(OBS_VALUE).cast(DataType::Float64).alias(value_column),
        ])
        .collect()?;
    let coded = normalize_country_column(&narrowed, REF_AREA)?;
    let keyed = normalize_period_column(&coded, TIME_PERIOD, freq)?;
    drop_null_rows_sorted(&keyed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{NamedFrom, Series};

    fn long_frame(rows: &[(&str, &str, f64)], value_column: &str) -> DataFrame {
        let countries: Vec<&str> = rows.iter().map(|(c, _, _)| *c).collect();
        let periods: Vec<&str> = rows.iter().map(|(_, p, _)| *p).collect();
        let values: Vec<f64> = rows.iter().map(|(_, _, v)| *v).collect();
        DataFrame::new(vec![
            Series::new(COUNTRY.into(), countries).into(),
            Series::new(PERIOD.into(), periods).into(),
            Series::new(value_column.into(), values).into(),
        ])
        .unwrap()
    }

    #[test]
    fn monthly_mean_collapses_duplicate_period_keys() {
        let df = DataFrame::new(vec![
            Series::new(
                PERIOD.into(),
                vec!["1995-01-01", "1995-01-01", "1995-02-01"],
            )
            .into(),
            Series::new("fx".into(), vec![Some(2.0), Some(4.0), None]).into(),
        ])
        .unwrap();

        let out = monthly_mean(&df, "fx").unwrap();

        assert_eq!(out.height(), 2);
        let values = out.column("fx").unwrap().f64().unwrap();
        assert!((values.get(0).unwrap() - 3.0).abs() < 1e-12);
        assert_eq!(values.get(1), None);
    }

    #[test]
    fn pct_change_is_period_over_period_times_100() {
        let df = long_frame(
            &[
                ("JP", "1995-04-01", 100.0),
                ("JP", "1995-07-01", 102.0),
                ("JP", "1995-10-01", 96.9),
                ("CA", "1995-04-01", 50.0),
                ("CA", "1995-07-01", 51.0),
            ],
            "gdp",
        );

        let out = pct_change_by_country(&df, "gdp", "gdp_growth").unwrap();

        // First period per country drops: 5 rows in, 3 rows out.
        assert_eq!(out.height(), 3);
        let growth = out.column("gdp_growth").unwrap().f64().unwrap();
        let countries = out.column(COUNTRY).unwrap().str().unwrap();
        // Sorted by period: CA 07, JP 07, JP 10.
        assert_eq!(countries.get(0), Some("CA"));
        assert!((growth.get(0).unwrap() - 2.0).abs() < 1e-9);
        assert!((growth.get(1).unwrap() - 2.0).abs() < 1e-9);
        assert!((growth.get(2).unwrap() - -5.0).abs() < 1e-9);
    }

    #[test]
    fn diff_vs_reference_excludes_periods_without_reference() {
        let df = long_frame(
            &[
                ("US", "1995-01-01", 6.0),
                ("JP", "1995-01-01", 3.5),
                ("JP", "1995-02-01", 3.4),
                ("DE", "1995-01-01", 7.1),
            ],
            "yield_pct",
        );

        let out = diff_vs_reference(&df, "yield_pct", "US", "spread_pp").unwrap();

        // JP 1995-02 has no US value at that period and is excluded.
        assert_eq!(out.height(), 2);
        let spreads = out.column("spread_pp").unwrap().f64().unwrap();
        let countries = out.column(COUNTRY).unwrap().str().unwrap();
        for idx in 0..out.height() {
            match countries.get(idx) {
                Some("JP") => assert!((spreads.get(idx).unwrap() - -2.5).abs() < 1e-9),
                Some("DE") => assert!((spreads.get(idx).unwrap() - 1.1).abs() < 1e-9),
                other => panic!("unexpected country {other:?}"),
            }
        }
    }

    #[test]
    fn inner_align_keeps_common_periods_only() {
        let fx = DataFrame::new(vec![
            Series::new(PERIOD.into(), vec!["1995-01-01", "1995-02-01", "1995-03-01"]).into(),
            Series::new("fx_usd".into(), vec![1.1, 1.2, 1.3]).into(),
        ])
        .unwrap();
        let yields = DataFrame::new(vec![
            Series::new(PERIOD.into(), vec!["1995-01-01", "1995-03-01"]).into(),
            Series::new("yield_pct".into(), vec![6.0, 6.2]).into(),
        ])
        .unwrap();

        let out = inner_align_on_period(&[fx, yields]).unwrap();

        assert_eq!(out.height(), 2);
        let periods = out.column(PERIOD).unwrap().str().unwrap();
        assert_eq!(periods.get(0), Some("1995-01-01"));
        assert_eq!(periods.get(1), Some("1995-03-01"));
    }

    #[test]
    fn filter_all_eq_requires_predicate_columns() {
        let df = DataFrame::new(vec![
            Series::new("SECTOR".into(), vec!["S1", "S13"]).into(),
            Series::new("OBS_VALUE".into(), vec![1.0, 2.0]).into(),
        ])
        .unwrap();

        let kept = filter_all_eq(&df, &[("SECTOR", "S1")]).unwrap();
        assert_eq!(kept.height(), 1);

        assert!(filter_all_eq(&df, &[("TRANSACTION", "B1GQ")]).is_err());
    }
}
