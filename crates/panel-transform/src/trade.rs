//! Trade-flow pipeline.
//!
//! The same shape handles the remote trade-in-services frame and the raw
//! local trade-flow table; both arrive as labeled observation frames and
//! pass the same annual USD unit-of-measure predicates.

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::info;

use panel_model::sources::SdmxSourceSpec;
use panel_model::Indicator;

use crate::ops::{drop_null_rows_sorted, observation_table};

/// Build a long `(country, period, trade)` table from a raw labeled frame.
pub fn trade_table(raw: &DataFrame, spec: &SdmxSourceSpec) -> Result<DataFrame> {
    let table = observation_table(
        raw,
        spec.filters,
        spec.freq,
        Indicator::TradeFlow.value_column(),
    )?;
    info!(source = spec.name, rows = table.height(), "built trade table");
    Ok(table)
}

/// Stack per-source trade tables into one panel.
pub fn combined_trade_table(parts: &[DataFrame]) -> Result<DataFrame> {
    let mut iter = parts.iter();
    let mut combined = iter.next().context("no trade tables to combine")?.clone();
    for part in iter {
        combined
            .vstack_mut(part)
            .context("stack trade tables")?;
    }
    drop_null_rows_sorted(&combined)
}
