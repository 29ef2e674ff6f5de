//! Coverage diagnostics printed at the end of a run.
//!
//! The reporter is the only output surface of the pipeline: a per-table
//! coverage summary, the count of SDMX rows missing the expected unit
//! multiplier, and the list of countries with yield data. Rendering is
//! split from printing so the text is testable.

use std::collections::BTreeSet;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use polars::prelude::DataFrame;

use panel_model::country_name;
use panel_model::indicator::{COUNTRY, PERIOD};
use panel_model::sources::UNIT_MULT;

/// Coverage facts for one produced table.
#[derive(Debug, Clone)]
pub struct TableCoverage {
    pub name: String,
    pub rows: usize,
    pub countries: usize,
    pub first_period: Option<String>,
    pub last_period: Option<String>,
}

/// Collect coverage facts from a produced table.
///
/// Wide tables have no country column; their country count is zero and
/// only the period span is reported.
pub fn table_coverage(name: &str, df: &DataFrame) -> TableCoverage {
    let countries = distinct_countries(df).len();
    let (first_period, last_period) = period_span(df);
    TableCoverage {
        name: name.to_string(),
        rows: df.height(),
        countries,
        first_period,
        last_period,
    }
}

fn distinct_countries(df: &DataFrame) -> BTreeSet<String> {
    let Ok(column) = df.column(COUNTRY) else {
        return BTreeSet::new();
    };
    let Ok(ca) = column.str() else {
        return BTreeSet::new();
    };
    ca.into_iter().flatten().map(String::from).collect()
}

fn period_span(df: &DataFrame) -> (Option<String>, Option<String>) {
    let Ok(column) = df.column(PERIOD) else {
        return (None, None);
    };
    let Ok(ca) = column.str() else {
        return (None, None);
    };
    let mut first: Option<&str> = None;
    let mut last: Option<&str> = None;
    for value in ca.into_iter().flatten() {
        if first.is_none_or(|current| value < current) {
            first = Some(value);
        }
        if last.is_none_or(|current| value > current) {
            last = Some(value);
        }
    }
    (first.map(String::from), last.map(String::from))
}

/// Render the coverage summary table.
pub fn render_coverage(entries: &[TableCoverage]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
    table.set_header(vec![
        Cell::new("Table"),
        Cell::new("Rows"),
        Cell::new("Countries"),
        Cell::new("First period"),
        Cell::new("Last period"),
    ]);
    for index in 1..=2 {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
    for entry in entries {
        table.add_row(vec![
            Cell::new(&entry.name),
            Cell::new(entry.rows),
            Cell::new(entry.countries),
            Cell::new(entry.first_period.as_deref().unwrap_or("-")),
            Cell::new(entry.last_period.as_deref().unwrap_or("-")),
        ]);
    }
    table.to_string()
}

/// Count rows whose `UNIT_MULT` value is missing.
///
/// A frame without the column at all counts every row as missing; sources
/// are expected to label their unit multiplier.
pub fn missing_unit_mult(df: &DataFrame) -> usize {
    match df.column(UNIT_MULT) {
        Ok(column) => column.null_count(),
        Err(_) => df.height(),
    }
}

/// Distinct countries present in the yield levels table, as
/// "Name (code)" lines, sorted by canonical code.
pub fn yield_countries(levels: &DataFrame) -> Vec<String> {
    distinct_countries(levels)
        .into_iter()
        .map(|code| match country_name(&code) {
            Some(name) => format!("{name} ({code})"),
            None => code,
        })
        .collect()
}

/// Print the full diagnostic report to stdout.
pub fn print_report(
    coverage: &[TableCoverage],
    unit_mult_missing: &[(String, usize)],
    yield_country_lines: &[String],
) {
    println!("{}", render_coverage(coverage));
    for (source, missing) in unit_mult_missing {
        println!("{source}: {missing} rows missing unit multiplier");
    }
    println!("Countries with yield data ({}):", yield_country_lines.len());
    for line in yield_country_lines {
        println!("- {line}");
    }
}
