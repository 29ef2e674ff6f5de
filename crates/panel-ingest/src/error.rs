use thiserror::Error;

/// Loader failure categories.
///
/// All of these abort the run. Row-level problems (unmapped codes, missing
/// observation values) are not errors here; the transform layer drops those
/// rows instead.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("dataframe error: {0}")]
    Frame(#[from] polars::error::PolarsError),
    #[error("http error: {0}")]
    Http(String),
    #[error("schema mismatch in {source_name}: {detail}")]
    Schema { source_name: String, detail: String },
}

impl IngestError {
    pub fn schema(source_name: impl Into<String>, detail: impl Into<String>) -> Self {
        IngestError::Schema {
            source_name: source_name.into(),
            detail: detail.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
