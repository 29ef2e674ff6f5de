//! Sovereign yield pipelines: levels and spreads vs. the US.

use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::{col, lit, DataFrame, IntoLazy};
use tracing::info;

use panel_ingest::series_csv::OBSERVATION_DATE;
use panel_ingest::read_series_csv;
use panel_model::indicator::{COUNTRY, PERIOD};
use panel_model::sources::{YIELD_REFERENCE, YIELD_SERIES};
use panel_model::{Frequency, Indicator};

use crate::ops::{diff_vs_reference, drop_null_rows_sorted, monthly_mean};
use crate::periods::normalize_period_column;

/// Yield levels and the derived spread table.
#[derive(Debug, Clone)]
pub struct YieldTables {
    /// Long `(country, period, yield_pct)` panel.
    pub levels: DataFrame,
    /// `(country, period, spread_pp)`: yield minus the US yield at the
    /// same period, percentage points; periods without a US observation
    /// are excluded.
    pub spreads: DataFrame,
}

/// Build the yield tables from the catalog files under `data_dir`.
pub fn load_yield_tables(data_dir: &Path) -> Result<YieldTables> {
    let value_column = Indicator::YieldLevel.value_column();
    let mut levels: Option<DataFrame> = None;

    for spec in YIELD_SERIES {
        let df = read_series_csv(&data_dir.join(spec.file), spec.series)
            .with_context(|| format!("load yield series {}", spec.series))?;
        let keyed = normalize_period_column(&df, OBSERVATION_DATE, Frequency::Daily)?;
        let monthly = monthly_mean(&keyed, spec.series)?;
        let part = monthly
            .lazy()
            .select([
                lit(spec.country).alias(COUNTRY),
                col(PERIOD),
                col(spec.series).alias(value_column),
            ])
            .drop_nulls(None)
            .collect()?;
        match levels.as_mut() {
            Some(acc) => {
                acc.vstack_mut(&part)
                    .with_context(|| format!("stack yield series {}", spec.series))?;
            }
            None => levels = Some(part),
        }
    }

    let levels = drop_null_rows_sorted(&levels.context("empty yield catalog")?)?;
    let spreads = diff_vs_reference(
        &levels,
        value_column,
        YIELD_REFERENCE,
        Indicator::YieldSpread.value_column(),
    )?;
    info!(
        series = YIELD_SERIES.len(),
        level_rows = levels.height(),
        spread_rows = spreads.height(),
        "built yield tables"
    );

    Ok(YieldTables { levels, spreads })
}
