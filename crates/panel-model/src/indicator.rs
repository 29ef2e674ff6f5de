//! Indicator identifiers for the produced panel tables.

use serde::{Deserialize, Serialize};

/// One produced indicator table.
///
/// Every table is long-format `(country, period, value)`; the value column
/// is named per indicator so merged frames stay unambiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Indicator {
    /// Spot exchange rate, foreign currency units per USD. Pairs quoted
    /// the other way around are inverted on load.
    FxUsd,
    /// Long-term sovereign bond yield, percent.
    YieldLevel,
    /// Sovereign yield minus the US yield, percentage points.
    YieldSpread,
    /// GDP by expenditure, national currency.
    GdpLevel,
    /// Period-over-period GDP change, percent.
    GdpGrowth,
    /// Consumer price index level.
    CpiIndex,
    /// Period-over-period CPI change, percent.
    Inflation,
    /// Trade flow value.
    TradeFlow,
}

impl Indicator {
    /// Name of the numeric value column in this indicator's table.
    pub fn value_column(self) -> &'static str {
        match self {
            Indicator::FxUsd => "fx_usd",
            Indicator::YieldLevel => "yield_pct",
            Indicator::YieldSpread => "spread_pp",
            Indicator::GdpLevel => "gdp",
            Indicator::GdpGrowth => "gdp_growth",
            Indicator::CpiIndex => "cpi",
            Indicator::Inflation => "inflation",
            Indicator::TradeFlow => "trade",
        }
    }
}

/// Name of the country key column in every long table.
pub const COUNTRY: &str = "country";

/// Name of the period key column in every long table.
pub const PERIOD: &str = "period";
