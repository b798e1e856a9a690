// File: crates/chart-core/tests/common/mod.rs
// Purpose: Shared fixtures for chart-core integration tests.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use weather_chart::{Chart, RenderOptions, YearlyRecord};

pub fn jan1(year: i32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap()
}

/// Three years summing to 10, 20 and 5.
pub fn three_years() -> Vec<YearlyRecord> {
    vec![
        YearlyRecord::new(jan1(2020), vec![4.0, 6.0]),
        YearlyRecord::new(jan1(2021), vec![5.0, 5.0, 10.0]),
        YearlyRecord::new(jan1(2022), vec![1.0, 1.0, 3.0]),
    ]
}

pub fn three_year_chart() -> Chart {
    Chart::from_records(&three_years(), 70.0, RenderOptions::default()).expect("chart builds")
}
