// File: crates/chart-core/src/axis.rs
// Summary: Axis model (ticks, gridline sizes, placement) and its SVG group.

use chrono::{DateTime, Utc};

use crate::geometry::fmt_num;
use crate::grid::{format_linear, format_time, linear_ticks, tick_step, time_ticks};
use crate::scale::{Scale, TimeScale, ValueScale};
use crate::svg::Element;
use crate::theme::Rgb;

/// Half-pixel shift that keeps 1px lines crisp.
const CRISP_OFFSET: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orient {
    Bottom,
    Left,
}

impl Orient {
    fn k(self) -> f64 {
        match self {
            Orient::Bottom => 1.0,
            Orient::Left => -1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Position along the axis in pixels (before the crisp offset).
    pub px: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub orient: Orient,
    pub ticks: Vec<Tick>,
    /// Scale range (start, end) in pixels.
    pub range: (f64, f64),
    /// Negative values draw gridlines across the plot.
    pub tick_size_inner: f64,
    pub tick_size_outer: f64,
    pub tick_padding: f64,
    /// Group translation (x, y).
    pub translate: (f64, f64),
}

impl Axis {
    /// Bottom time axis with roughly `count` calendar ticks.
    pub fn bottom(scale: &TimeScale, count: usize, tick_size_inner: f64, translate_y: f64) -> Self {
        let ticks = time_ticks(scale.start, scale.end, count)
            .into_iter()
            .map(|d: DateTime<Utc>| Tick { px: scale.to_px(d), label: format_time(d) })
            .collect::<Vec<_>>();
        tracing::debug!(ticks = ticks.len(), "bottom axis laid out");
        Self {
            orient: Orient::Bottom,
            ticks,
            range: scale.range(),
            tick_size_inner,
            tick_size_outer: 0.0,
            tick_padding: 3.0,
            translate: (0.0, translate_y),
        }
    }

    /// Left value axis with roughly `count` round ticks.
    pub fn left(scale: &ValueScale, count: usize, tick_size_inner: f64, translate_x: f64) -> Self {
        let (d0, d1) = scale.domain();
        let step = tick_step(d0, d1, count as f64);
        let ticks = linear_ticks(d0, d1, count)
            .into_iter()
            .map(|v| Tick { px: scale.to_px(v), label: format_linear(v, step) })
            .collect::<Vec<_>>();
        tracing::debug!(ticks = ticks.len(), step, "left axis laid out");
        Self {
            orient: Orient::Left,
            ticks,
            range: scale.range(),
            tick_size_inner,
            tick_size_outer: 0.0,
            tick_padding: 3.0,
            translate: (translate_x, 0.0),
        }
    }

    fn domain_path(&self) -> String {
        let k = self.orient.k();
        let r0 = fmt_num(self.range.0 + CRISP_OFFSET);
        let r1 = fmt_num(self.range.1 + CRISP_OFFSET);
        let off = fmt_num(CRISP_OFFSET);
        let outer = fmt_num(k * self.tick_size_outer);
        match (self.orient, self.tick_size_outer != 0.0) {
            (Orient::Bottom, true) => format!("M{r0},{outer}V{off}H{r1}V{outer}"),
            (Orient::Bottom, false) => format!("M{r0},{off}H{r1}"),
            (Orient::Left, true) => format!("M{outer},{r0}H{off}V{r1}H{outer}"),
            (Orient::Left, false) => format!("M{off},{r0}V{r1}"),
        }
    }

    fn tick_svg(&self, tick: &Tick) -> Element {
        let k = self.orient.k();
        let pos = fmt_num(tick.px + CRISP_OFFSET);
        let line_len = fmt_num(k * self.tick_size_inner);
        let spacing = fmt_num(k * (self.tick_size_inner.max(0.0) + self.tick_padding));
        let (transform, line, text) = match self.orient {
            Orient::Bottom => (
                format!("translate({pos},0)"),
                Element::new("line").attr("stroke", "currentColor").attr("y2", line_len),
                Element::new("text").attr("fill", "currentColor").attr("y", spacing).attr("dy", "0.71em"),
            ),
            Orient::Left => (
                format!("translate(0,{pos})"),
                Element::new("line").attr("stroke", "currentColor").attr("x2", line_len),
                Element::new("text").attr("fill", "currentColor").attr("x", spacing).attr("dy", "0.32em"),
            ),
        };
        Element::new("g")
            .attr("class", "tick")
            .attr("opacity", 1)
            .attr("transform", transform)
            .child(line)
            .child(text.text(tick.label.clone()))
    }

    /// Render as a `<g>` whose strokes and labels use `color` via `currentColor`.
    pub fn to_svg(&self, color: Rgb) -> Element {
        let anchor = match self.orient {
            Orient::Bottom => "middle",
            Orient::Left => "end",
        };
        Element::new("g")
            .attr("transform", format!("translate({},{})", fmt_num(self.translate.0), fmt_num(self.translate.1)))
            .attr("style", format!("color: {}", color.hex()))
            .attr("fill", "none")
            .attr("font-size", 10)
            .attr("font-family", "sans-serif")
            .attr("text-anchor", anchor)
            .child(
                Element::new("path")
                    .attr("class", "domain")
                    .attr("stroke", "currentColor")
                    .attr("d", self.domain_path()),
            )
            .children(self.ticks.iter().map(|t| self.tick_svg(t)))
    }
}
