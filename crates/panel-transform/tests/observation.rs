//! Tests for the SDMX-frame pipelines (GDP, prices, trade).

use polars::prelude::{DataFrame, NamedFrom, Series};

use panel_model::sources::TRADE_IN_SERVICES;
use panel_transform::{combined_trade_table, gdp_tables, price_tables, trade_table};

fn gdp_fixture() -> DataFrame {
    // Mirrors an SDMX csvfilewithlabels export after parsing. The last row
    // carries an unmapped REF_AREA, the S13 row must fall to the sector
    // filter.
    DataFrame::new(vec![
        Series::new(
            "REF_AREA".into(),
            vec!["USA", "USA", "USA", "JPN", "JPN", "XYZ", "USA"],
        )
        .into(),
        Series::new(
            "TIME_PERIOD".into(),
            vec![
                "1995-Q1", "1995-Q2", "1995-Q3", "1995-Q1", "1995-Q2", "1995-Q1", "1995-Q1",
            ],
        )
        .into(),
        Series::new(
            "OBS_VALUE".into(),
            vec![100.0, 102.0, 99.96, 50.0, 51.0, 7.0, 999_999.0],
        )
        .into(),
        Series::new(
            "SECTOR".into(),
            vec!["S1", "S1", "S1", "S1", "S1", "S1", "S13"],
        )
        .into(),
        Series::new(
            "TRANSACTION".into(),
            vec!["B1GQ", "B1GQ", "B1GQ", "B1GQ", "B1GQ", "B1GQ", "B1GQ"],
        )
        .into(),
        Series::new("PRICE_BASE".into(), vec!["LR"; 7]).into(),
        Series::new("UNIT_MEASURE".into(), vec!["XDC"; 7]).into(),
    ])
    .unwrap()
}

#[test]
fn gdp_levels_filter_and_rekey() {
    let tables = gdp_tables(&gdp_fixture()).unwrap();

    // 7 raw rows: one fails the sector filter, one the country mapping.
    assert_eq!(tables.levels.height(), 5);
    let countries = tables.levels.column("country").unwrap().str().unwrap();
    for idx in 0..tables.levels.height() {
        assert_ne!(countries.get(idx), Some("XYZ"));
    }
    // Quarterly labels moved to the month after quarter end.
    let periods = tables.levels.column("period").unwrap().str().unwrap();
    assert_eq!(periods.get(0), Some("1995-04-01"));
}

#[test]
fn gdp_growth_is_change_over_previous_aligned_period() {
    let tables = gdp_tables(&gdp_fixture()).unwrap();

    // US has two growth observations, JP one; first periods drop.
    assert_eq!(tables.growth.height(), 3);
    let growth = tables.growth.column("gdp_growth").unwrap().f64().unwrap();
    let countries = tables.growth.column("country").unwrap().str().unwrap();
    for idx in 0..tables.growth.height() {
        let value = growth.get(idx).unwrap();
        match (countries.get(idx), idx) {
            (Some("JP"), _) => assert!((value - 2.0).abs() < 1e-9),
            (Some("US"), _) if value > 0.0 => assert!((value - 2.0).abs() < 1e-9),
            (Some("US"), _) => assert!((value - -2.0).abs() < 1e-9),
            (other, _) => panic!("unexpected country {other:?}"),
        }
    }
}

#[test]
fn price_tables_compute_monthly_inflation() {
    let raw = DataFrame::new(vec![
        Series::new("REF_AREA".into(), vec!["GBR", "GBR", "GBR"]).into(),
        Series::new(
            "TIME_PERIOD".into(),
            vec!["2001-M01", "2001-M02", "2001-M03"],
        )
        .into(),
        Series::new("OBS_VALUE".into(), vec![100.0, 100.5, 101.0]).into(),
        Series::new("TRANSACTION".into(), vec!["CPI"; 3]).into(),
        Series::new("UNIT_MEASURE".into(), vec!["IX"; 3]).into(),
    ])
    .unwrap();

    let tables = price_tables(&raw).unwrap();

    assert_eq!(tables.index.height(), 3);
    assert_eq!(tables.inflation.height(), 2);
    let inflation = tables.inflation.column("inflation").unwrap().f64().unwrap();
    assert!((inflation.get(0).unwrap() - 0.5).abs() < 1e-9);
}

#[test]
fn trade_tables_filter_by_unit_and_stack() {
    let services = DataFrame::new(vec![
        Series::new("REF_AREA".into(), vec!["JPN", "JPN", "DEU"]).into(),
        Series::new("TIME_PERIOD".into(), vec!["1995", "1996", "1995"]).into(),
        Series::new("OBS_VALUE".into(), vec![120.5, 130.1, 80.0]).into(),
        Series::new("UNIT_MEASURE".into(), vec!["USD", "USD", "XDC"]).into(),
    ])
    .unwrap();
    let goods = DataFrame::new(vec![
        Series::new("REF_AREA".into(), vec!["CAN"]).into(),
        Series::new("TIME_PERIOD".into(), vec!["1995"]).into(),
        Series::new("OBS_VALUE".into(), vec![44.0]).into(),
        Series::new("UNIT_MEASURE".into(), vec!["USD"]).into(),
    ])
    .unwrap();

    let services = trade_table(&services, &TRADE_IN_SERVICES).unwrap();
    // The XDC row failed the unit-of-measure predicate.
    assert_eq!(services.height(), 2);

    let goods = trade_table(&goods, &TRADE_IN_SERVICES).unwrap();
    let combined = combined_trade_table(&[services, goods]).unwrap();
    assert_eq!(combined.height(), 3);
    let periods = combined.column("period").unwrap().str().unwrap();
    assert_eq!(periods.get(0), Some("1995-01-01"));
    assert_eq!(periods.get(2), Some("1996-01-01"));
}
