//! FX spot-rate pipelines.
//!
//! Per-pair series files are monthly FRED-style exports. Pairs quoted as
//! USD per foreign unit are inverted on load so every series ends up in
//! the same foreign-per-USD convention before the USD panel is assembled.

use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::{col, lit, DataFrame, IntoLazy};
use tracing::info;

use panel_ingest::series_csv::OBSERVATION_DATE;
use panel_ingest::read_series_csv;
use panel_model::indicator::{COUNTRY, PERIOD};
use panel_model::sources::{FxPairSpec, FX_PAIRS, USD_INDEXES};
use panel_model::{Frequency, Indicator};

use crate::ops::{drop_null_rows_sorted, inner_align_on_period, monthly_mean};
use crate::periods::normalize_period_column;

/// The three FX products of a run.
#[derive(Debug, Clone)]
pub struct FxTables {
    /// Long `(country, period, fx_usd)` panel across all pairs.
    pub long: DataFrame,
    /// Wide all-spots table: one column per panel currency, only periods
    /// covered by every pair, sorted ascending.
    pub all_spots: DataFrame,
    /// Advanced/Emerging trade-weighted USD index pair, inner-aligned.
    pub usd_index: DataFrame,
}

/// Build all FX tables from the catalog files under `data_dir`.
pub fn load_fx_tables(data_dir: &Path) -> Result<FxTables> {
    let value_column = Indicator::FxUsd.value_column();
    let mut long: Option<DataFrame> = None;
    let mut panel_parts: Vec<DataFrame> = Vec::new();

    for spec in FX_PAIRS {
        let pair = load_pair(data_dir, spec)?;
        let part = pair
            .clone()
            .lazy()
            .select([
                lit(spec.country).alias(COUNTRY),
                col(PERIOD),
                col(spec.series).alias(value_column),
            ])
            .drop_nulls(None)
            .collect()?;
        match long.as_mut() {
            Some(acc) => {
                acc.vstack_mut(&part)
                    .with_context(|| format!("stack fx pair {}", spec.series))?;
            }
            None => long = Some(part),
        }
        if spec.in_usd_panel {
            panel_parts.push(
                pair.lazy()
                    .select([col(PERIOD), col(spec.series)])
                    .collect()?,
            );
        }
    }

    let long = drop_null_rows_sorted(&long.context("empty fx catalog")?)?;
    let all_spots = inner_align_on_period(&panel_parts)?;
    let usd_index = load_usd_index(data_dir)?;
    info!(
        pairs = FX_PAIRS.len(),
        long_rows = long.height(),
        panel_rows = all_spots.height(),
        "built fx tables"
    );

    Ok(FxTables {
        long,
        all_spots,
        usd_index,
    })
}

/// Load one pair file, re-key it to months, and apply the inversion flag.
///
/// Daily exports carry many observations per month; they collapse to the
/// monthly mean before inversion so the period key stays unique.
fn load_pair(data_dir: &Path, spec: &FxPairSpec) -> Result<DataFrame> {
    let df = read_series_csv(&data_dir.join(spec.file), spec.series)
        .with_context(|| format!("load fx pair {}", spec.series))?;
    let keyed = normalize_period_column(&df, OBSERVATION_DATE, Frequency::Daily)?;
    let monthly = monthly_mean(&keyed, spec.series)?;
    if !spec.invert {
        return Ok(monthly);
    }
    let inverted = monthly
        .lazy()
        .with_column((lit(1.0) / col(spec.series)).alias(spec.series))
        .collect()?;
    Ok(inverted)
}

/// Inner-aligned Advanced/Emerging USD index table.
fn load_usd_index(data_dir: &Path) -> Result<DataFrame> {
    let mut parts = Vec::with_capacity(USD_INDEXES.len());
    for spec in USD_INDEXES {
        let df = read_series_csv(&data_dir.join(spec.file), spec.series)
            .with_context(|| format!("load usd index {}", spec.series))?;
        let keyed = normalize_period_column(&df, OBSERVATION_DATE, Frequency::Daily)?;
        let monthly = monthly_mean(&keyed, spec.series)?;
        parts.push(
            monthly
                .lazy()
                .select([col(PERIOD), col(spec.series).alias(spec.label)])
                .collect()?,
        );
    }
    inner_align_on_period(&parts)
}
