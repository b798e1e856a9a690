// File: crates/chart-core/src/tooltip.rs
// Summary: Hover tooltip state and pointer handlers for data markers and the threshold line.
// Notes:
// - Tooltip state is owned by the caller and passed in; handlers never look it up.
// - Handlers take their scale and dataset through `HoverContext` and return nothing.

use chrono::{DateTime, Utc};

use crate::bisect::bisect_center;
use crate::record::{CompressedPoint, ThresholdPoint};
use crate::scale::{Scale, TimeScale};

/// Pointer position: page coordinates for placement, chart-local for lookups.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub page_x: f64,
    pub page_y: f64,
    /// X in chart (viewBox) coordinates.
    pub x: f64,
    /// Y in chart (viewBox) coordinates.
    pub y: f64,
}

impl PointerEvent {
    pub fn new(page: (f64, f64), local: (f64, f64)) -> Self {
        Self { page_x: page.0, page_y: page.1, x: local.0, y: local.1 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TooltipContent {
    Point { year: i32, value: f64 },
    Threshold { value: f64 },
}

impl TooltipContent {
    pub fn to_html(&self) -> String {
        match self {
            TooltipContent::Point { year, value } => format!(
                "<dl><div><dt>Date:</dt><dd>{year}</dd></div><div><dt>Value</dt><dd>{value}</dd></div></dl>"
            ),
            TooltipContent::Threshold { value } => {
                format!("<dl><dt>Threshold:</dt><dd>{value}</dd></dl>")
            }
        }
    }
}

/// Visibility, placement and content of the single chart tooltip.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TooltipState {
    pub visible: bool,
    pub left: f64,
    pub top: f64,
    /// Last shown content; kept while hidden.
    pub content: Option<TooltipContent>,
}

impl TooltipState {
    pub fn hidden() -> Self { Self::default() }

    pub fn opacity(&self) -> u8 { u8::from(self.visible) }

    fn show(&mut self, ev: &PointerEvent, content: TooltipContent) {
        self.visible = true;
        self.left = ev.page_x;
        self.top = ev.page_y;
        self.content = Some(content);
    }

    /// Inline CSS for the tooltip element.
    pub fn style(&self) -> String {
        format!("opacity: {}; left: {}px; top: {}px;", self.opacity(), self.left, self.top)
    }

    pub fn inner_html(&self) -> String {
        self.content.map(|c| c.to_html()).unwrap_or_default()
    }

    /// The tooltip as a standalone `<div class="tooltip">`.
    pub fn to_html(&self) -> String {
        format!("<div class=\"tooltip\" style=\"{}\">{}</div>", self.style(), self.inner_html())
    }
}

/// Scale and data the hover handlers read from.
#[derive(Clone, Debug)]
pub struct HoverContext<'a> {
    pub x_scale: &'a TimeScale,
    pub points: &'a [CompressedPoint],
    pub threshold: &'a [ThresholdPoint],
    /// Threshold dates (epoch ms) in ascending order.
    sorted_ms: Vec<f64>,
    /// `threshold` index of each entry in `sorted_ms`.
    order: Vec<usize>,
}

impl<'a> HoverContext<'a> {
    pub fn new(x_scale: &'a TimeScale, points: &'a [CompressedPoint], threshold: &'a [ThresholdPoint]) -> Self {
        let mut by_date: Vec<(f64, usize)> = threshold
            .iter()
            .enumerate()
            .map(|(i, t)| (t.date.timestamp_millis() as f64, i))
            .collect();
        by_date.sort_by(|a, b| a.0.total_cmp(&b.0));
        let (sorted_ms, order) = by_date.into_iter().unzip();
        Self { x_scale, points, threshold, sorted_ms, order }
    }

    /// Index of the threshold point whose date is closest to `date`.
    pub fn nearest_threshold_index(&self, date: DateTime<Utc>) -> Option<usize> {
        bisect_center(&self.sorted_ms, date.timestamp_millis() as f64).map(|i| self.order[i])
    }

    pub fn nearest_threshold(&self, date: DateTime<Utc>) -> Option<&'a ThresholdPoint> {
        let threshold = self.threshold;
        self.nearest_threshold_index(date).and_then(|i| threshold.get(i))
    }
}

/// Pointer interaction on the chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChartEvent {
    /// Over the marker for `points[index]`.
    PointMove { index: usize, ev: PointerEvent },
    ThresholdMove { ev: PointerEvent },
    PointerOut,
}

pub fn on_point_move(tooltip: &mut TooltipState, ev: &PointerEvent, point: &CompressedPoint) {
    tooltip.show(ev, TooltipContent::Point { year: point.year(), value: point.value });
}

/// Show the threshold value nearest to the pointer's date; no-op without threshold data.
pub fn on_threshold_move(tooltip: &mut TooltipState, ev: &PointerEvent, ctx: &HoverContext<'_>) {
    let date = ctx.x_scale.from_px(ev.x);
    if let Some(tp) = ctx.nearest_threshold(date) {
        tooltip.show(ev, TooltipContent::Threshold { value: tp.value });
    }
}

pub fn on_pointer_out(tooltip: &mut TooltipState) {
    tooltip.visible = false;
}

/// Dispatch a [`ChartEvent`] to its handler.
pub fn handle_event(tooltip: &mut TooltipState, ctx: &HoverContext<'_>, event: &ChartEvent) {
    match event {
        ChartEvent::PointMove { index, ev } => {
            if let Some(p) = ctx.points.get(*index) {
                on_point_move(tooltip, ev, p);
            }
        }
        ChartEvent::ThresholdMove { ev } => on_threshold_move(tooltip, ev, ctx),
        ChartEvent::PointerOut => on_pointer_out(tooltip),
    }
}
