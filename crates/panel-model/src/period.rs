//! Period normalization to the canonical calendar-month key.
//!
//! Every source granularity collapses to a `YYYY-MM-01` string, the
//! universal join key across indicator tables. Each conversion is a fixed
//! suffix lookup with no fallback: an unrecognized label is a lookup
//! failure and the caller drops the owning row.
//!
//! Quarterly labels map to the month following the quarter end, so the
//! mapping does not round-trip to the quarter label without the inverse
//! table. Q4 carries into January of the following year.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Native granularity of a source series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frequency {
    /// `YYYY-Qn` labels.
    Quarterly,
    /// `YYYY-Mnn` labels.
    Monthly,
    /// Bare `YYYY` labels.
    Annual,
    /// Already a `YYYY-MM-DD` calendar date; truncated to its month.
    Daily,
}

impl Frequency {
    /// SDMX frequency dimension value.
    pub fn sdmx_code(self) -> &'static str {
        match self {
            Frequency::Quarterly => "Q",
            Frequency::Monthly => "M",
            Frequency::Annual => "A",
            Frequency::Daily => "D",
        }
    }

    /// Normalize a raw period label at this frequency.
    pub fn normalize(self, raw: &str) -> Option<String> {
        match self {
            Frequency::Quarterly => quarter_to_month(raw),
            Frequency::Monthly => month_code_to_month(raw),
            Frequency::Annual => year_to_month(raw),
            Frequency::Daily => date_to_month(raw),
        }
    }
}

/// (quarter suffix, month, year carry).
const QUARTER_TABLE: &[(&str, u32, i32)] = &[
    ("Q1", 4, 0),
    ("Q2", 7, 0),
    ("Q3", 10, 0),
    ("Q4", 1, 1),
];

/// Convert `YYYY-Qn` to the canonical month string.
///
/// `1995-Q2` becomes `1995-07-01`; `1995-Q4` becomes `1996-01-01`.
pub fn quarter_to_month(label: &str) -> Option<String> {
    let label = label.trim();
    if label.len() != 7 || label.as_bytes()[4] != b'-' {
        return None;
    }
    let year: i32 = label[..4].parse().ok()?;
    let suffix = &label[5..];
    let (_, month, carry) = QUARTER_TABLE.iter().find(|(q, _, _)| *q == suffix)?;
    format_month(year + carry, *month)
}

/// Convert `YYYY-Mnn` (`M01`..`M12`) to the canonical month string.
pub fn month_code_to_month(label: &str) -> Option<String> {
    let label = label.trim();
    if label.len() != 8 || label.as_bytes()[4] != b'-' || label.as_bytes()[5] != b'M' {
        return None;
    }
    let year: i32 = label[..4].parse().ok()?;
    let month: u32 = label[6..].parse().ok()?;
    format_month(year, month)
}

/// Convert a bare `YYYY` label to January of that year.
pub fn year_to_month(label: &str) -> Option<String> {
    let label = label.trim();
    if label.len() != 4 {
        return None;
    }
    let year: i32 = label.parse().ok()?;
    format_month(year, 1)
}

/// Truncate a `YYYY-MM-DD` date to its month.
pub fn date_to_month(label: &str) -> Option<String> {
    let date = NaiveDate::parse_from_str(label.trim(), "%Y-%m-%d").ok()?;
    use chrono::Datelike;
    format_month(date.year(), date.month())
}

fn format_month(year: i32, month: u32) -> Option<String> {
    // Rejects month 0/13+ and out-of-range years in one place.
    let date = NaiveDate::from_ymd_opt(year, month, 1)?;
    Some(date.format("%Y-%m-%d").to_string())
}
