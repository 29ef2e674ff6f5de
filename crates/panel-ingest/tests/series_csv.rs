//! Integration tests for the local CSV loaders.

use std::fs;
use std::path::PathBuf;

use panel_ingest::{read_labeled_csv, read_series_csv, IngestError};

fn write_fixture(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn series_csv_reads_dates_and_nullable_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(
        &dir,
        "DEXJPUS.csv",
        "observation_date,DEXJPUS\n1999-01-01,113.15\n1999-02-01,.\n1999-03-01,119.72\n",
    );

    let df = read_series_csv(&path, "DEXJPUS").unwrap();
    assert_eq!(df.height(), 3);
    let values = df.column("DEXJPUS").unwrap().f64().unwrap();
    assert_eq!(values.get(0), Some(113.15));
    assert_eq!(values.get(1), None);
    assert_eq!(values.get(2), Some(119.72));
}

#[test]
fn series_csv_missing_value_column_is_schema_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir, "DEXJPUS.csv", "observation_date,WRONG\n1999-01-01,1\n");

    let error = read_series_csv(&path, "DEXJPUS").unwrap_err();
    assert!(matches!(error, IngestError::Schema { .. }));
}

#[test]
fn series_csv_missing_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.csv");

    assert!(read_series_csv(&path, "DEXJPUS").is_err());
}

#[test]
fn labeled_csv_requires_named_columns() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(
        &dir,
        "trade_flows.csv",
        "REF_AREA,TIME_PERIOD,OBS_VALUE,UNIT_MULT\nJPN,1995,120.5,6\nXX?,1996,130.1,6\n",
    );

    let df = read_labeled_csv(&path, &["REF_AREA", "TIME_PERIOD", "OBS_VALUE"]).unwrap();
    assert_eq!(df.height(), 2);

    let error = read_labeled_csv(&path, &["REF_AREA", "FLOW"]).unwrap_err();
    assert!(matches!(error, IngestError::Schema { .. }));
}
