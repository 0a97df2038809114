// File: crates/dash-core/tests/dataset.rs
// Purpose: Validate CSV loading, header aliases, and fatal malformed-row errors.

use dash_core::{DatasetError, RawDataset};
use std::path::PathBuf;

fn write_csv(name: &str, body: &str) -> PathBuf {
    let path = PathBuf::from(format!("target/test_out/{name}"));
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, body).unwrap();
    path
}

const HEADER: &str =
    "Island,date,Total Cases,Total Deaths,Total Recovered,New Cases,New Deaths,New Recovered";

#[test]
fn loads_rows_with_island_header_alias() {
    let path = write_csv(
        "alias.csv",
        &format!(
            "{HEADER}\n\
             Jawa,2020-03-02,10,1,3,10,1,3\n\
             Sumatera,2020-03-02,4,0,1,4,0,1\n"
        ),
    );

    let raw = RawDataset::from_csv_path(&path).expect("load should succeed");
    assert_eq!(raw.len(), 2);
    assert_eq!(raw.regions(), vec!["Jawa".to_string(), "Sumatera".to_string()]);
    let r = &raw.records()[0];
    assert_eq!(r.region, "Jawa");
    assert_eq!(r.total_cases, 10.0);
    assert_eq!(r.new_recovered, 3.0);
}

#[test]
fn unparseable_date_is_fatal() {
    let path = write_csv(
        "bad_date.csv",
        &format!("{HEADER}\nJawa,not-a-date,10,1,3,10,1,3\n"),
    );

    match RawDataset::from_csv_path(&path) {
        Err(DatasetError::BadDate { row, value }) => {
            assert_eq!(row, 0);
            assert_eq!(value, "not-a-date");
        }
        other => panic!("expected BadDate, got {other:?}"),
    }
}

#[test]
fn unparseable_number_is_fatal() {
    let path = write_csv(
        "bad_number.csv",
        &format!("{HEADER}\nJawa,2020-03-02,10,1,3,many,1,3\n"),
    );

    match RawDataset::from_csv_path(&path) {
        Err(DatasetError::BadNumber { column, value, .. }) => {
            assert_eq!(column, "New Cases");
            assert_eq!(value, "many");
        }
        other => panic!("expected BadNumber, got {other:?}"),
    }
}

#[test]
fn missing_column_is_fatal() {
    let path = write_csv(
        "missing_col.csv",
        "Island,date,Total Cases\nJawa,2020-03-02,10\n",
    );

    match RawDataset::from_csv_path(&path) {
        Err(DatasetError::MissingColumn(col)) => assert_eq!(col, "Total Deaths"),
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}
