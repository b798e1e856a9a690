// File: crates/chart-core/tests/scale.rs
// Purpose: Scale domains, pixel mapping and inversion.

mod common;

use chrono::{TimeZone, Utc};
use common::{jan1, three_year_chart};
use weather_chart::{Chart, ChartError, CompressedPoint, RenderOptions, Scale, TimeScale, ValueScale};

#[test]
fn value_domain_max_is_data_max_not_threshold() {
    let chart = three_year_chart();
    assert_eq!(chart.y_scale.domain(), (0.0, 20.0));
    assert_eq!(chart.threshold_value, 70.0);
}

#[test]
fn scales_span_plot_area() {
    let chart = three_year_chart();
    assert_eq!(chart.x_scale.start, jan1(2020));
    assert_eq!(chart.x_scale.end, jan1(2022));
    assert_eq!(chart.x_scale.to_px(jan1(2020)), 40.0);
    assert_eq!(chart.x_scale.to_px(jan1(2022)), 610.0);
    assert_eq!(chart.y_scale.to_px(0.0), 210.0);
    assert_eq!(chart.y_scale.to_px(20.0), 20.0);
    // Threshold above the data range lands above the plot.
    assert_eq!(chart.y_scale.to_px(70.0), -455.0);
}

#[test]
fn time_scale_inverts_pixels() {
    let s = TimeScale::new(jan1(2020), jan1(2022), 40.0, 610.0);
    let d = Utc.with_ymd_and_hms(2021, 6, 1, 0, 0, 0).unwrap();
    assert_eq!(s.from_px(s.to_px(d)), d);
    assert_eq!(s.from_px(40.0), jan1(2020));
}

#[test]
fn zero_span_domains_map_to_midpoint() {
    let s = TimeScale::new(jan1(2020), jan1(2020), 40.0, 610.0);
    assert_eq!(s.to_px(jan1(2020)), 325.0);
    assert_eq!(s.from_px(100.0), jan1(2020));

    let v = ValueScale::new_linear(20.0, 210.0, 0.0, 0.0);
    assert_eq!(v.to_px(0.0), 115.0);
}

#[test]
fn value_scale_inverts_pixels() {
    let v = ValueScale::new_linear(20.0, 210.0, 0.0, 20.0);
    assert!((v.from_px(v.to_px(7.5)) - 7.5).abs() < 1e-9);
}

#[test]
fn extent_ignores_input_order() {
    let s = TimeScale::from_extent([jan1(2022), jan1(2019), jan1(2021)], 0.0, 100.0).unwrap();
    assert_eq!((s.start, s.end), (jan1(2019), jan1(2022)));
    assert!(TimeScale::from_extent(Vec::new(), 0.0, 100.0).is_none());
}

#[test]
fn empty_dataset_is_rejected() {
    let err = Chart::new(Vec::new(), 70.0, RenderOptions::default()).err().expect("should fail");
    assert!(matches!(err, ChartError::EmptyDataset));
}

#[test]
fn custom_size_derives_tick_targets() {
    let opts = RenderOptions::sized(800, 400);
    assert_eq!((opts.x_ticks, opts.y_ticks), (10, 10));
    let pts = vec![CompressedPoint { date: jan1(2020), value: 3.0 }];
    let chart = Chart::new(pts, 1.0, opts).unwrap();
    assert_eq!(chart.x_scale.range(), (40.0, 770.0));
}
