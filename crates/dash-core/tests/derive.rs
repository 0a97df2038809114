// File: crates/dash-core/tests/derive.rs
// Purpose: Validate region filtering, window bounds, and time ordering.

use chrono::{Duration, NaiveDate, NaiveTime};
use dash_core::{derive_series, RawDataset, Record};

fn rec(region: &str, ymd: (i32, u32, u32), new_cases: f64) -> Record {
    Record {
        region: region.to_string(),
        date: NaiveDate::from_ymd_opt(ymd.0, ymd.1, ymd.2).unwrap(),
        total_cases: new_cases * 10.0,
        total_deaths: new_cases * 0.3,
        total_recovered: new_cases * 7.0,
        new_cases,
        new_deaths: new_cases * 0.03,
        new_recovered: new_cases * 0.7,
    }
}

#[test]
fn filters_to_requested_region_and_sorts() {
    // Deliberately unsorted and interleaved with other regions
    let raw = RawDataset::new(vec![
        rec("Sumatera", (2020, 3, 2), 5.0),
        rec("Jawa", (2020, 3, 4), 30.0),
        rec("Jawa", (2020, 3, 1), 10.0),
        rec("Papua", (2020, 3, 1), 2.0),
        rec("Jawa", (2020, 3, 3), 20.0),
    ]);

    let series = derive_series(&raw, "Jawa");
    assert_eq!(series.len(), 3);
    assert_eq!(series.region, "Jawa");
    for pair in series.points.windows(2) {
        assert!(pair[0].record.date <= pair[1].record.date);
    }
    for p in &series.points {
        assert_eq!(p.record.region, "Jawa");
    }
}

#[test]
fn window_spans_one_day_centered_on_timestamp() {
    let raw = RawDataset::new(vec![rec("Jawa", (2020, 2, 29), 10.0)]);
    let series = derive_series(&raw, "Jawa");

    let p = &series.points[0];
    assert_eq!(p.window_end - p.window_start, Duration::days(1));
    let midnight = p.record.date.and_time(NaiveTime::MIN);
    assert_eq!(p.window_start + Duration::hours(12), midnight);
    assert_eq!(p.window_end - Duration::hours(12), midnight);
}

#[test]
fn unknown_region_yields_empty_series() {
    let raw = RawDataset::new(vec![rec("Jawa", (2020, 3, 1), 10.0)]);
    let series = derive_series(&raw, "Atlantis");
    assert!(series.is_empty());
    assert_eq!(series.region, "Atlantis");
    assert_eq!(series.x_extent(), None);
}

#[test]
fn equal_dates_keep_input_order() {
    let raw = RawDataset::new(vec![
        rec("Jawa", (2020, 3, 2), 1.0),
        rec("Jawa", (2020, 3, 1), 2.0),
        rec("Jawa", (2020, 3, 1), 3.0),
    ]);
    let series = derive_series(&raw, "Jawa");
    let cases: Vec<f64> = series.points.iter().map(|p| p.record.new_cases).collect();
    assert_eq!(cases, vec![2.0, 3.0, 1.0]);
}

#[test]
fn extent_spans_first_window_start_to_last_window_end() {
    let raw = RawDataset::new(vec![
        rec("Jawa", (2020, 3, 1), 10.0),
        rec("Jawa", (2020, 3, 3), 20.0),
    ]);
    let series = derive_series(&raw, "Jawa");
    let (start, end) = series.x_extent().unwrap();
    // Two days apart plus half a day on each side
    assert!((end - start - 3.0).abs() < 1e-9);
}
