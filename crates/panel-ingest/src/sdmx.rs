//! SDMX REST loader.
//!
//! Issues a synchronous GET per catalog entry and parses the
//! `csvfilewithlabels` response body as a DataFrame. The pipeline blocks on
//! each request; a network failure or non-success status aborts the run.

use std::io::Cursor;

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};
use reqwest::blocking::Client;
use tracing::info;

use panel_model::sources::{SdmxSourceSpec, OBS_VALUE, REF_AREA, TIME_PERIOD};

use crate::error::{IngestError, Result};
use crate::series_csv::ensure_columns;

/// A fully parameterized SDMX query, ready to issue.
#[derive(Debug, Clone)]
pub struct SdmxQuery {
    pub spec: SdmxSourceSpec,
    /// Inclusive lower bound on the native period labels (e.g. `1995-Q1`).
    pub start_period: String,
}

impl SdmxQuery {
    pub fn new(spec: SdmxSourceSpec, start_period: impl Into<String>) -> Self {
        Self {
            spec,
            start_period: start_period.into(),
        }
    }

    /// The query URL, deterministic for a given spec and start period.
    pub fn url(&self) -> String {
        format!(
            "{base}/{flow}/{key}?startPeriod={start}&dimensionAtObservation=AllDimensions&format=csvfilewithlabels",
            base = self.spec.base_url,
            flow = self.spec.flow,
            key = self.spec.key,
            start = self.start_period,
        )
    }
}

/// Blocking HTTP client for SDMX endpoints.
pub struct SdmxClient {
    client: Client,
}

impl Default for SdmxClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SdmxClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Fetch a query and parse the labeled CSV body.
    ///
    /// The response must carry the `REF_AREA`, `TIME_PERIOD` and
    /// `OBS_VALUE` columns; anything else is a schema mismatch.
    pub fn fetch(&self, query: &SdmxQuery) -> Result<DataFrame> {
        let url = query.url();
        info!(source = query.spec.name, %url, "fetching sdmx source");
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|error| IngestError::Http(format!("{}: {error}", query.spec.name)))?;
        let status = response.status();
        if !status.is_success() {
            return Err(IngestError::Http(format!(
                "{}: status {status}",
                query.spec.name
            )));
        }
        let body = response
            .text()
            .map_err(|error| IngestError::Http(format!("{}: {error}", query.spec.name)))?;
        let df = parse_sdmx_csv(body.into_bytes(), query.spec.name)?;
        info!(source = query.spec.name, rows = df.height(), "fetched sdmx source");
        Ok(df)
    }
}

/// Parse an SDMX `csvfilewithlabels` body into a DataFrame.
pub fn parse_sdmx_csv(body: Vec<u8>, source_name: &str) -> Result<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .into_reader_with_file_handle(Cursor::new(body))
        .finish()?;
    ensure_columns(&df, &[REF_AREA, TIME_PERIOD, OBS_VALUE], source_name)?;
    Ok(df)
}
