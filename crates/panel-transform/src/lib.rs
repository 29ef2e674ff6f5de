//! Shape transformer for the macro panel pipeline.
//!
//! Every indicator follows the same skeleton: drop irrelevant columns,
//! filter rows by fixed categorical predicates, re-key by
//! `(country, period)`, derive any period-over-period or
//! difference-vs-reference metric, and drop rows that lost a required
//! value along the way. One parameterized pipeline per indicator type;
//! the catalogs in `panel-model::sources` supply the parameters.

pub mod codes;
pub mod fx;
pub mod gdp;
pub mod ops;
pub mod periods;
pub mod prices;
pub mod trade;
pub mod yields;

pub use codes::normalize_country_column;
pub use fx::{load_fx_tables, FxTables};
pub use gdp::{gdp_tables, GdpTables};
pub use periods::normalize_period_column;
pub use prices::{price_tables, PriceTables};
pub use trade::{combined_trade_table, trade_table};
pub use yields::{load_yield_tables, YieldTables};
