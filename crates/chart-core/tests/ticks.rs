// File: crates/chart-core/tests/ticks.rs
// Purpose: Linear and calendar tick layout plus label formatting.

mod common;

use chrono::{TimeZone, Utc};
use common::{jan1, three_year_chart};
use weather_chart::grid::{format_linear, format_time, linear_ticks, time_ticks, TimeInterval};

#[test]
fn linear_ticks_use_round_steps() {
    assert_eq!(linear_ticks(0.0, 20.0, 6), vec![0.0, 5.0, 10.0, 15.0, 20.0]);
    assert_eq!(linear_ticks(0.0, 1.0, 5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    assert_eq!(linear_ticks(3.0, 3.0, 6), vec![3.0]);
    assert!(linear_ticks(0.0, 10.0, 0).is_empty());
}

#[test]
fn linear_labels_follow_step_precision() {
    assert_eq!(format_linear(5.0, 5.0), "5");
    assert_eq!(format_linear(0.2, 0.2), "0.2");
    assert_eq!(format_linear(1234.0, 100.0), "1,234");
    assert_eq!(format_linear(-2500.0, 500.0), "-2,500");
}

#[test]
fn decade_of_years_ticks_every_year() {
    let ticks = time_ticks(jan1(2013), jan1(2022), 8);
    assert_eq!(ticks.len(), 10);
    assert_eq!(ticks[0], jan1(2013));
    let labels: Vec<String> = ticks.iter().map(|d| format_time(*d)).collect();
    assert_eq!(labels[0], "2013");
    assert_eq!(labels[9], "2022");
}

#[test]
fn short_spans_pick_finer_intervals() {
    let start = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();
    let stop = Utc.with_ymd_and_hms(2021, 12, 31, 0, 0, 0).unwrap();
    assert_eq!(TimeInterval::for_span(start, stop, 8), Some(TimeInterval::Month(1)));
    let ticks = time_ticks(start, stop, 8);
    assert_eq!(ticks.len(), 12);
    assert_eq!(format_time(ticks[0]), "2021");
    assert_eq!(format_time(ticks[3]), "April");
}

#[test]
fn time_labels_pick_coarsest_unit() {
    assert_eq!(format_time(Utc.with_ymd_and_hms(2021, 3, 7, 0, 0, 0).unwrap()), "Mar 07");
    assert_eq!(format_time(Utc.with_ymd_and_hms(2021, 3, 8, 0, 0, 0).unwrap()), "Mon 08");
    assert_eq!(format_time(Utc.with_ymd_and_hms(2021, 3, 8, 15, 0, 0).unwrap()), "03 PM");
    assert_eq!(format_time(Utc.with_ymd_and_hms(2021, 3, 8, 15, 30, 0).unwrap()), "03:30");
}

#[test]
fn chart_axes_cover_the_data() {
    let chart = three_year_chart();
    let x = chart.x_axis();
    let labels: Vec<&str> = x.ticks.iter().map(|t| t.label.as_str()).collect();
    assert!(labels.contains(&"2020") && labels.contains(&"2021") && labels.contains(&"2022"));
    assert_eq!(x.tick_size_inner, -190.0);
    assert_eq!(x.translate, (0.0, 210.0));

    let y = chart.y_axis();
    let labels: Vec<&str> = y.ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, vec!["0", "5", "10", "15", "20"]);
    assert_eq!(y.tick_size_inner, -570.0);
    assert_eq!(y.translate, (30.0, 0.0));
}
