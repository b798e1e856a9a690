// File: crates/chart-core/src/chart.rs
// Summary: Chart struct: scales from the compressed data, axes, line paths and the SVG document.

use std::path::Path;

use crate::axis::Axis;
use crate::error::{ChartError, Result};
use crate::geometry::{fmt_num, line_path, PlotRect};
use crate::record::{compress_all, threshold_series, CompressedPoint, ThresholdPoint, YearlyRecord};
use crate::scale::{Scale, TimeScale, ValueScale};
use crate::svg::Element;
use crate::theme::Theme;
use crate::tooltip::HoverContext;
use crate::types::{Insets, HEIGHT, WIDTH};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub insets: Insets,
    pub theme: Theme,
    pub marker_radius: f64,
    pub stroke_width: f64,
    /// How far the left axis sits outside the plot's left edge.
    pub y_axis_offset: f64,
    /// Approximate tick counts for the bottom and left axes.
    pub x_ticks: usize,
    pub y_ticks: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            marker_radius: 3.0,
            stroke_width: 1.5,
            y_axis_offset: 10.0,
            x_ticks: (WIDTH / 80) as usize,
            y_ticks: (HEIGHT / 40) as usize,
        }
    }
}

impl RenderOptions {
    /// Options for a custom viewport, with tick targets derived from its size.
    pub fn sized(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            x_ticks: (width / 80) as usize,
            y_ticks: (height / 40) as usize,
            ..Self::default()
        }
    }
}

pub struct Chart {
    pub points: Vec<CompressedPoint>,
    pub threshold: Vec<ThresholdPoint>,
    pub threshold_value: f64,
    pub x_scale: TimeScale,
    pub y_scale: ValueScale,
    pub opts: RenderOptions,
}

impl Chart {
    /// Build scales for `points`; the value domain is [0, max data value].
    pub fn new(points: Vec<CompressedPoint>, threshold_value: f64, opts: RenderOptions) -> Result<Self> {
        let rect = PlotRect::from_insets(opts.width, opts.height, &opts.insets);
        let x_scale = TimeScale::from_extent(points.iter().map(|p| p.date), rect.left, rect.right)
            .ok_or(ChartError::EmptyDataset)?;
        let vmax = points
            .iter()
            .map(|p| p.value)
            .filter(|v| !v.is_nan())
            .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |m| m.max(v))))
            .unwrap_or(0.0);
        let y_scale = ValueScale::new_linear(rect.top, rect.bottom, 0.0, vmax);
        let threshold = threshold_series(&points, threshold_value);
        tracing::debug!(points = points.len(), vmax, threshold_value, "chart scales built");
        Ok(Self { points, threshold, threshold_value, x_scale, y_scale, opts })
    }

    /// Compress yearly records and build the chart in one step.
    pub fn from_records(records: &[YearlyRecord], threshold_value: f64, opts: RenderOptions) -> Result<Self> {
        Self::new(compress_all(records), threshold_value, opts)
    }

    pub fn plot_rect(&self) -> PlotRect {
        PlotRect::from_insets(self.opts.width, self.opts.height, &self.opts.insets)
    }

    pub fn x_axis(&self) -> Axis {
        let rect = self.plot_rect();
        Axis::bottom(&self.x_scale, self.opts.x_ticks, -rect.height(), rect.bottom)
    }

    pub fn y_axis(&self) -> Axis {
        let rect = self.plot_rect();
        Axis::left(&self.y_scale, self.opts.y_ticks, -rect.width(), rect.left - self.opts.y_axis_offset)
    }

    /// Pixel position of every data point, in input order.
    pub fn data_xy(&self) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .map(|p| (self.x_scale.to_px(p.date), self.y_scale.to_px(p.value)))
            .collect()
    }

    pub fn threshold_xy(&self) -> Vec<(f64, f64)> {
        self.threshold
            .iter()
            .map(|t| (self.x_scale.to_px(t.date), self.y_scale.to_px(t.value)))
            .collect()
    }

    pub fn hover_context(&self) -> HoverContext<'_> {
        HoverContext::new(&self.x_scale, &self.points, &self.threshold)
    }

    fn line_element(&self, d: String, color: String, class: &'static str) -> Element {
        Element::new("path")
            .attr("class", class)
            .attr("d", d)
            .attr("fill", "none")
            .attr("stroke", color)
            .attr("stroke-width", self.opts.stroke_width)
            .attr("stroke-miterlimit", 1)
    }

    /// The chart as an SVG document: axes, data line, threshold line, markers.
    pub fn to_svg(&self) -> Element {
        let theme = &self.opts.theme;
        let data_color = theme.data_stroke.hex();

        let data_line = self.line_element(line_path(self.data_xy()), data_color.clone(), "data-line");
        let threshold_line = self
            .line_element(line_path(self.threshold_xy()), theme.threshold_stroke.hex(), "threshold-line")
            .attr("data-value", self.threshold_value)
            .child(Element::new("title").text(format!("Threshold: {}", self.threshold_value)));

        let markers = self.points.iter().zip(self.data_xy()).enumerate().map(|(i, (p, (x, y)))| {
            Element::new("circle")
                .attr("class", "data-point")
                .attr("cx", fmt_num(x))
                .attr("cy", fmt_num(y))
                .attr("r", self.opts.marker_radius)
                .attr("fill", data_color.clone())
                .attr("data-index", i)
                .attr("data-year", p.year())
                .attr("data-value", p.value)
                .child(Element::new("title").text(format!("Date: {}, Value: {}", p.year(), p.value)))
        });

        Element::new("svg")
            .attr("xmlns", SVG_NS)
            .attr("viewBox", format!("0 0 {} {}", self.opts.width, self.opts.height))
            .child(self.x_axis().to_svg(theme.grid))
            .child(self.y_axis().to_svg(theme.grid))
            .child(data_line)
            .child(threshold_line)
            .children(markers)
    }

    pub fn render_svg_string(&self) -> String {
        self.to_svg().to_string()
    }

    /// Write the SVG document to `output_svg_path`, creating parent directories.
    pub fn render_to_svg(&self, output_svg_path: impl AsRef<Path>) -> Result<()> {
        let path = output_svg_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.render_svg_string())?;
        tracing::info!(path = %path.display(), "wrote chart svg");
        Ok(())
    }
}
