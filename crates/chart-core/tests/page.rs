// File: crates/chart-core/tests/page.rs
// Purpose: Mounting the chart into a host document.

mod common;

use common::three_year_chart;
use weather_chart::{ChartError, HostDocument, MOUNT_ID};

#[test]
fn default_page_mounts_chart_and_hidden_tooltip() {
    let chart = three_year_chart();
    let mut page = HostDocument::new("Weather");
    page.mount(MOUNT_ID, &chart.to_svg()).expect("mount point exists");

    let html = page.html();
    assert!(html.contains("<div id=\"chart\"><svg xmlns="));
    assert!(html.contains("<div class=\"tooltip\" style=\"opacity: 0; left: 0px; top: 0px;\"></div>"));
    assert!(html.contains("<title>Weather</title>"));
    assert!(html.contains("querySelectorAll('.data-point')"));
    assert!(html.contains("querySelector('.threshold-line')"));
    // Script follows the chart so the markers exist when it runs.
    assert!(html.find("<svg").unwrap() < html.find("<script>").unwrap());
}

#[test]
fn mount_into_custom_page_with_single_quotes() {
    let chart = three_year_chart();
    let mut page = HostDocument::from_html("<body><section id='plot' class='x'></section></body>");
    page.mount("plot", &chart.to_svg()).unwrap();
    assert!(page.html().starts_with("<body><section id='plot' class='x'><svg"));
    assert!(page.html().ends_with("</svg></section></body>"));
}

#[test]
fn mount_skips_id_mentioned_in_text() {
    let chart = three_year_chart();
    let mut page = HostDocument::from_html("<p>see id=\"chart\" below</p><div id=\"chart\"></div>");
    page.mount(MOUNT_ID, &chart.to_svg()).expect("real element follows the text");
    assert!(page.html().starts_with("<p>see id=\"chart\" below</p><div id=\"chart\"><svg"));
}

#[test]
fn mount_ignores_data_id_attribute() {
    let chart = three_year_chart();
    let mut page = HostDocument::from_html("<div data-id=\"chart\"></div><div class=\"x\" id=\"chart\"></div>");
    page.mount(MOUNT_ID, &chart.to_svg()).unwrap();
    assert!(page.html().starts_with("<div data-id=\"chart\"></div><div class=\"x\" id=\"chart\"><svg"));
}

#[test]
fn missing_mount_point_fails() {
    let chart = three_year_chart();
    let mut page = HostDocument::from_html("<body><p>id=\"chart\" in text</p></body>");
    let err = page.mount(MOUNT_ID, &chart.to_svg()).unwrap_err();
    assert!(matches!(err, ChartError::MissingMountPoint(ref id) if id == "chart"));
    assert_eq!(err.to_string(), "host document has no element with id `chart`");
}

#[test]
fn page_and_svg_are_written_to_disk() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let chart = three_year_chart();

    let mut page = HostDocument::new("Weather");
    page.mount(MOUNT_ID, &chart.to_svg())?;
    let html_path = dir.path().join("site/index.html");
    page.write_to(&html_path)?;
    assert_eq!(std::fs::read_to_string(&html_path)?, page.html());

    let svg_path = dir.path().join("chart.svg");
    chart.render_to_svg(&svg_path)?;
    assert_eq!(std::fs::read_to_string(&svg_path)?, chart.render_svg_string());
    Ok(())
}
