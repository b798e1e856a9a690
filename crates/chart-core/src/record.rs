// File: crates/chart-core/src/record.rs
// Summary: Yearly weather records and their reduction to one point per year.
// Notes:
// - Point and threshold vectors are built together so they stay the same length
//   and share dates; the threshold hover lookup indexes one by the other.

use chrono::{DateTime, Datelike, Utc};

/// One year of raw observations.
#[derive(Clone, Debug, PartialEq)]
pub struct YearlyRecord {
    pub start: DateTime<Utc>,
    pub sequence: Vec<f64>,
}

impl YearlyRecord {
    pub fn new(start: DateTime<Utc>, sequence: Vec<f64>) -> Self {
        Self { start, sequence }
    }
}

/// A year reduced to a single (date, total) sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompressedPoint {
    pub date: DateTime<Utc>,
    pub value: f64,
}

impl CompressedPoint {
    /// Calendar year of the point in UTC.
    pub fn year(&self) -> i32 { self.date.year() }
}

/// Constant threshold sample aligned with a [`CompressedPoint`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThresholdPoint {
    pub date: DateTime<Utc>,
    pub value: f64,
}

/// Sum a record's samples into one point. Empty sequences yield 0.
pub fn compress(record: &YearlyRecord) -> CompressedPoint {
    CompressedPoint {
        date: record.start,
        // fold from +0.0; `Sum` for floats starts at -0.0 and would print "-0".
        value: record.sequence.iter().fold(0.0, |acc, v| acc + v),
    }
}

/// Compress every record, preserving input order.
pub fn compress_all(records: &[YearlyRecord]) -> Vec<CompressedPoint> {
    records.iter().map(compress).collect()
}

/// One threshold sample per data point, sharing its date.
pub fn threshold_series(points: &[CompressedPoint], threshold: f64) -> Vec<ThresholdPoint> {
    points
        .iter()
        .map(|p| ThresholdPoint { date: p.date, value: threshold })
        .collect()
}
