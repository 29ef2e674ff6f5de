//! Loaders for the macro panel pipeline.
//!
//! Two kinds of sources, both read synchronously: fixed-schema local CSV
//! files (FRED-style series exports, the raw trade-flow table) and remote
//! SDMX REST endpoints returning labeled CSV. Any file or network failure
//! is fatal to the run; there are no retries and no partial results.

pub mod error;
pub mod sdmx;
pub mod series_csv;

pub use error::{IngestError, Result};
pub use sdmx::{SdmxClient, SdmxQuery};
pub use series_csv::{read_labeled_csv, read_series_csv};
