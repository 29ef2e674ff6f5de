//! GDP pipelines: levels and period-over-period growth.

use anyhow::Result;
use polars::prelude::DataFrame;
use tracing::info;

use panel_model::sources::GDP_EXPENDITURE;
use panel_model::Indicator;

use crate::ops::{observation_table, pct_change_by_country};

/// GDP level and growth tables.
#[derive(Debug, Clone)]
pub struct GdpTables {
    /// Long `(country, period, gdp)` levels, national currency.
    pub levels: DataFrame,
    /// Long `(country, period, gdp_growth)` period-over-period change,
    /// percent, present only where both aligned periods survived.
    pub growth: DataFrame,
}

/// Build the GDP tables from a raw GDP-by-expenditure SDMX frame.
pub fn gdp_tables(raw: &DataFrame) -> Result<GdpTables> {
    let level_column = Indicator::GdpLevel.value_column();
    let levels = observation_table(
        raw,
        GDP_EXPENDITURE.filters,
        GDP_EXPENDITURE.freq,
        level_column,
    )?;
    let growth = pct_change_by_country(&levels, level_column, Indicator::GdpGrowth.value_column())?;
    info!(
        level_rows = levels.height(),
        growth_rows = growth.height(),
        "built gdp tables"
    );
    Ok(GdpTables { levels, growth })
}
