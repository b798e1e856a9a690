// File: crates/chart-core/src/lib.rs
// Summary: Library entry point; yearly aggregation, chart construction, SVG/PNG output and hover state.

pub mod axis;
pub mod bisect;
pub mod chart;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod page;
pub mod raster;
pub mod record;
pub mod scale;
pub mod svg;
pub mod theme;
pub mod tooltip;
pub mod types;

pub use axis::Axis;
pub use chart::{Chart, RenderOptions};
pub use error::ChartError;
pub use page::{HostDocument, MOUNT_ID};
pub use record::{compress, compress_all, threshold_series, CompressedPoint, ThresholdPoint, YearlyRecord};
pub use scale::{Scale, TimeScale, ValueScale};
pub use theme::Theme;
pub use tooltip::{handle_event, on_point_move, on_pointer_out, on_threshold_move, ChartEvent, HoverContext, PointerEvent, TooltipState};
