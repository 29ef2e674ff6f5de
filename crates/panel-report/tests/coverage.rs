//! Snapshot test for the rendered coverage summary.

use panel_report::{render_coverage, TableCoverage};

fn entry(name: &str, rows: usize, countries: usize, span: Option<(&str, &str)>) -> TableCoverage {
    TableCoverage {
        name: name.to_string(),
        rows,
        countries,
        first_period: span.map(|(first, _)| first.to_string()),
        last_period: span.map(|(_, last)| last.to_string()),
    }
}

#[test]
fn coverage_table_renders_stably() {
    let entries = vec![
        entry("fx-long", 66, 23, Some(("1995-01-01", "1995-03-01"))),
        entry("fx-all-spots", 2, 0, Some(("1995-01-01", "1995-03-01"))),
        entry("yield-levels", 26, 13, Some(("1995-01-01", "1995-03-01"))),
        entry("yield-spreads", 24, 12, Some(("1995-01-01", "1995-02-01"))),
        entry("gdp-growth", 0, 0, None),
    ];

    insta::assert_snapshot!(render_coverage(&entries), @r"
    ╭───────────────┬──────┬───────────┬──────────────┬─────────────╮
    │ Table         ┆ Rows ┆ Countries ┆ First period ┆ Last period │
    ╞═══════════════╪══════╪═══════════╪══════════════╪═════════════╡
    │ fx-long       ┆   66 ┆        23 ┆ 1995-01-01   ┆ 1995-03-01  │
    ├╌╌╌╌╌╌╌╌╌╌╌╌╌╌╌┼╌╌╌╌╌╌┼╌╌╌╌╌╌╌╌╌╌╌┼╌╌╌╌╌╌╌╌╌╌╌╌╌╌┼╌╌╌╌╌╌╌╌╌╌╌╌╌┤
    │ fx-all-spots  ┆    2 ┆         0 ┆ 1995-01-01   ┆ 1995-03-01  │
    ├╌╌╌╌╌╌╌╌╌╌╌╌╌╌╌┼╌╌╌╌╌╌┼╌╌╌╌╌╌╌╌╌╌╌┼╌╌╌╌╌╌╌╌╌╌╌╌╌╌┼╌╌╌╌╌╌╌╌╌╌╌╌╌┤
    │ yield-levels  ┆   26 ┆        13 ┆ 1995-01-01   ┆ 1995-03-01  │
    ├╌╌╌╌╌╌╌╌╌╌╌╌╌╌╌┼╌╌╌╌╌╌┼╌╌╌╌╌╌╌╌╌╌╌┼╌╌╌╌╌╌╌╌╌╌╌╌╌╌┼╌╌╌╌╌╌╌╌╌╌╌╌╌┤
    │ yield-spreads ┆   24 ┆        12 ┆ 1995-01-01   ┆ 1995-02-01  │
    ├╌╌╌╌╌╌╌╌╌╌╌╌╌╌╌┼╌╌╌╌╌╌┼╌╌╌╌╌╌╌╌╌╌╌┼╌╌╌╌╌╌╌╌╌╌╌╌╌╌┼╌╌╌╌╌╌╌╌╌╌╌╌╌┤
    │ gdp-growth    ┆    0 ┆         0 ┆ -            ┆ -           │
    ╰───────────────┴──────┴───────────┴──────────────┴─────────────╯
    ");
}
