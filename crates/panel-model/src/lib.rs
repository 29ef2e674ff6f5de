//! Core model for the macroeconomic panel pipeline.
//!
//! Holds the canonical country-code table, period (time) normalization,
//! indicator identifiers, and the fixed catalog of data sources. All
//! tabular work lives in `panel-transform`; this crate is lookup tables
//! and typed constants only.

pub mod country;
pub mod indicator;
pub mod period;
pub mod sources;

pub use country::{canonical_code, country_name, EURO_AREA, REST_OF_WORLD, UNITED_STATES};
pub use indicator::Indicator;
pub use period::{month_code_to_month, quarter_to_month, year_to_month, Frequency};
