// File: crates/dash-core/src/derive.rs
// Summary: Per-region series derivation (filter, half-day window bounds, time sort).

use chrono::{Datelike, Duration, NaiveDateTime, NaiveTime};

use crate::dataset::{Counter, RawDataset, Record};

/// One displayed time bucket: a record plus the half-day window bracketing it.
#[derive(Clone, Debug, PartialEq)]
pub struct DerivedPoint {
    pub record: Record,
    pub window_start: NaiveDateTime,
    pub window_end: NaiveDateTime,
}

impl DerivedPoint {
    fn from_record(record: Record) -> Self {
        // Half-day offsets center each bucket on its timestamp, independent
        // of calendar month-length quirks.
        let midnight = record.date.and_time(NaiveTime::MIN);
        Self {
            window_start: midnight - Duration::hours(12),
            window_end: midnight + Duration::hours(12),
            record,
        }
    }

    /// Timestamp as a continuous day count, for axis math.
    pub fn day_index(&self) -> f64 {
        self.record.date.num_days_from_ce() as f64
    }
}

/// A single region's time-sorted, window-annotated sequence.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DerivedSeries {
    pub region: String,
    pub points: Vec<DerivedPoint>,
}

impl DerivedSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Values of one counter in series order.
    pub fn counter_values(&self, counter: Counter) -> Vec<f64> {
        self.points.iter().map(|p| p.record.counter(counter)).collect()
    }

    /// Horizontal extent in day units, spanning from the first window start
    /// to the last window end. `None` for an empty series.
    pub fn x_extent(&self) -> Option<(f64, f64)> {
        let first = self.points.first()?;
        let last = self.points.last()?;
        Some((first.day_index() - 0.5, last.day_index() + 0.5))
    }

    /// Largest counter value across all six counters. `None` when empty.
    pub fn max_counter_value(&self) -> Option<f64> {
        let mut max = f64::NEG_INFINITY;
        for p in &self.points {
            for c in Counter::ALL {
                max = max.max(p.record.counter(c));
            }
        }
        if max.is_finite() {
            Some(max)
        } else {
            None
        }
    }
}

/// Derive the display series for one region.
///
/// Filters to records whose region matches exactly (no error on zero matches;
/// the result is an empty series), annotates each with half-day window
/// bounds, and stable-sorts ascending by date so equal dates keep input
/// order. Pure function over its inputs.
pub fn derive_series(raw: &RawDataset, region: &str) -> DerivedSeries {
    let mut points: Vec<DerivedPoint> = raw
        .records()
        .iter()
        .filter(|r| r.region == region)
        .cloned()
        .map(DerivedPoint::from_record)
        .collect();
    points.sort_by_key(|p| p.record.date);
    DerivedSeries {
        region: region.to_string(),
        points,
    }
}
