//! Pipeline orchestrator.
//!
//! One run is a straight line: load the file-backed FX and yield tables,
//! load the raw trade-flow file, fetch the remote SDMX sources unless the
//! run is offline, then hand every produced table to the reporter. State
//! flows through function arguments only.

use std::path::PathBuf;

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::{info, warn};

use panel_ingest::{read_labeled_csv, SdmxClient, SdmxQuery};
use panel_model::sources::{
    CONSUMER_PRICES, GDP_EXPENDITURE, OBS_VALUE, REF_AREA, TIME_PERIOD, TRADE_FLOWS_FILE,
    TRADE_IN_SERVICES,
};
use panel_report::{missing_unit_mult, table_coverage, TableCoverage};
use panel_transform::{
    combined_trade_table, gdp_tables, load_fx_tables, load_yield_tables, price_tables,
    trade_table, FxTables, GdpTables, PriceTables, YieldTables,
};

/// Options resolved from the CLI flags.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Directory holding the local series CSV files.
    pub data_dir: PathBuf,
    /// SDMX `startPeriod` bound applied to every remote query.
    pub start_period: String,
    /// Skip the remote fetches and build the file-backed tables only.
    pub offline: bool,
}

/// Every table a run produces, plus the diagnostics gathered on the way.
pub struct PanelTables {
    pub fx: FxTables,
    pub yields: YieldTables,
    /// `None` on an offline run.
    pub gdp: Option<GdpTables>,
    /// `None` on an offline run.
    pub prices: Option<PriceTables>,
    /// Combined trade panel; always carries the local trade-flow file,
    /// extended with the remote trade-in-services frame when online.
    pub trade: DataFrame,
    /// Per-source count of rows missing the unit multiplier.
    pub unit_mult_missing: Vec<(String, usize)>,
}

/// Run the full pipeline and collect its tables.
pub fn run_pipeline(options: &RunOptions) -> Result<PanelTables> {
    info!(
        data_dir = %options.data_dir.display(),
        start_period = %options.start_period,
        offline = options.offline,
        "starting panel run"
    );

    let fx = load_fx_tables(&options.data_dir)?;
    let yields = load_yield_tables(&options.data_dir)?;

    let raw_trade = read_labeled_csv(
        &options.data_dir.join(TRADE_FLOWS_FILE),
        &[REF_AREA, TIME_PERIOD, OBS_VALUE],
    )
    .context("load raw trade flows")?;
    let mut unit_mult_missing = vec![(
        TRADE_FLOWS_FILE.to_string(),
        missing_unit_mult(&raw_trade),
    )];
    let mut trade_parts = vec![trade_table(&raw_trade, &TRADE_IN_SERVICES)?];

    let (gdp, prices) = if options.offline {
        warn!("offline run, skipping remote sdmx sources");
        (None, None)
    } else {
        let client = SdmxClient::new();

        let raw_gdp =
            client.fetch(&SdmxQuery::new(GDP_EXPENDITURE, options.start_period.as_str()))?;
        unit_mult_missing.push((
            GDP_EXPENDITURE.name.to_string(),
            missing_unit_mult(&raw_gdp),
        ));
        let gdp = gdp_tables(&raw_gdp)?;

        let raw_prices =
            client.fetch(&SdmxQuery::new(CONSUMER_PRICES, options.start_period.as_str()))?;
        unit_mult_missing.push((
            CONSUMER_PRICES.name.to_string(),
            missing_unit_mult(&raw_prices),
        ));
        let prices = price_tables(&raw_prices)?;

        let raw_services =
            client.fetch(&SdmxQuery::new(TRADE_IN_SERVICES, options.start_period.as_str()))?;
        unit_mult_missing.push((
            TRADE_IN_SERVICES.name.to_string(),
            missing_unit_mult(&raw_services),
        ));
        trade_parts.push(trade_table(&raw_services, &TRADE_IN_SERVICES)?);

        (Some(gdp), Some(prices))
    };

    let trade = combined_trade_table(&trade_parts)?;
    info!(trade_rows = trade.height(), "panel run complete");

    Ok(PanelTables {
        fx,
        yields,
        gdp,
        prices,
        trade,
        unit_mult_missing,
    })
}

/// Coverage entries for every produced table, in report order.
pub fn coverage_entries(tables: &PanelTables) -> Vec<TableCoverage> {
    let mut entries = vec![
        table_coverage("fx-long", &tables.fx.long),
        table_coverage("fx-all-spots", &tables.fx.all_spots),
        table_coverage("usd-index", &tables.fx.usd_index),
        table_coverage("yield-levels", &tables.yields.levels),
        table_coverage("yield-spreads", &tables.yields.spreads),
    ];
    if let Some(gdp) = &tables.gdp {
        entries.push(table_coverage("gdp-levels", &gdp.levels));
        entries.push(table_coverage("gdp-growth", &gdp.growth));
    }
    if let Some(prices) = &tables.prices {
        entries.push(table_coverage("cpi-index", &prices.index));
        entries.push(table_coverage("inflation", &prices.inflation));
    }
    entries.push(table_coverage("trade", &tables.trade));
    entries
}
