//! Consumer price pipelines: index levels and inflation.

use anyhow::Result;
use polars::prelude::DataFrame;
use tracing::info;

use panel_model::sources::CONSUMER_PRICES;
use panel_model::Indicator;

use crate::ops::{observation_table, pct_change_by_country};

/// CPI level and inflation tables.
#[derive(Debug, Clone)]
pub struct PriceTables {
    /// Long `(country, period, cpi)` index levels.
    pub index: DataFrame,
    /// Long `(country, period, inflation)` period-over-period change,
    /// percent.
    pub inflation: DataFrame,
}

/// Build the price tables from a raw consumer-prices SDMX frame.
pub fn price_tables(raw: &DataFrame) -> Result<PriceTables> {
    let index_column = Indicator::CpiIndex.value_column();
    let index = observation_table(
        raw,
        CONSUMER_PRICES.filters,
        CONSUMER_PRICES.freq,
        index_column,
    )?;
    let inflation =
        pct_change_by_country(&index, index_column, Indicator::Inflation.value_column())?;
    info!(
        index_rows = index.height(),
        inflation_rows = inflation.height(),
        "built price tables"
    );
    Ok(PriceTables { index, inflation })
}
