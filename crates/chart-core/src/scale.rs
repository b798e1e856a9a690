// File: crates/chart-core/src/scale.rs
// Summary: UTC time (X) and linear value (Y) scale transforms with inversion.

use chrono::{DateTime, Utc};

/// Maps a data-domain value to a pixel coordinate and back.
pub trait Scale {
    type Domain: Copy;
    fn to_px(&self, v: Self::Domain) -> f64;
    fn from_px(&self, px: f64) -> Self::Domain;
    /// Pixel range as (start, end) in the order the domain maps onto it.
    fn range(&self) -> (f64, f64);
}

/// Horizontal UTC time scale; domain is the [start, end] extent of the data.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub left_px: f64,
    pub right_px: f64,
}

impl TimeScale {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>, left_px: f64, right_px: f64) -> Self {
        Self { start, end, left_px, right_px }
    }

    /// Build from the min/max of `dates`; `None` when there are no dates.
    pub fn from_extent<I>(dates: I, left_px: f64, right_px: f64) -> Option<Self>
    where
        I: IntoIterator<Item = DateTime<Utc>>,
    {
        let mut it = dates.into_iter();
        let first = it.next()?;
        let (lo, hi) = it.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d)));
        Some(Self::new(lo, hi, left_px, right_px))
    }

    #[inline]
    fn span_ms(&self) -> f64 {
        (self.end.timestamp_millis() - self.start.timestamp_millis()) as f64
    }
}

impl Scale for TimeScale {
    type Domain = DateTime<Utc>;

    #[inline]
    fn to_px(&self, d: DateTime<Utc>) -> f64 {
        let span = self.span_ms();
        // A zero-span domain sits in the middle of the range.
        let t = if span == 0.0 {
            0.5
        } else {
            (d.timestamp_millis() - self.start.timestamp_millis()) as f64 / span
        };
        self.left_px + t * (self.right_px - self.left_px)
    }

    #[inline]
    fn from_px(&self, px: f64) -> DateTime<Utc> {
        let width = self.right_px - self.left_px;
        if width == 0.0 {
            return self.start;
        }
        let t = (px - self.left_px) / width;
        let ms = self.start.timestamp_millis() as f64 + t * self.span_ms();
        DateTime::from_timestamp_millis(ms.round() as i64).unwrap_or(self.start)
    }

    fn range(&self) -> (f64, f64) { (self.left_px, self.right_px) }
}

/// Vertical linear value scale mapping [vmin, vmax] to [bottom, top] pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub top_px: f64,
    pub bottom_px: f64,
    pub vmin: f64,
    pub vmax: f64,
}

impl ValueScale {
    pub fn new_linear(top_px: f64, bottom_px: f64, vmin: f64, vmax: f64) -> Self {
        Self { top_px, bottom_px, vmin, vmax }
    }

    /// Domain as (min, max), in construction order.
    pub fn domain(&self) -> (f64, f64) { (self.vmin, self.vmax) }
}

impl Scale for ValueScale {
    type Domain = f64;

    #[inline]
    fn to_px(&self, y: f64) -> f64 {
        let span = self.vmax - self.vmin;
        let t = if span == 0.0 { 0.5 } else { (y - self.vmin) / span };
        self.bottom_px - t * (self.bottom_px - self.top_px)
    }

    #[inline]
    fn from_px(&self, py: f64) -> f64 {
        let height = self.bottom_px - self.top_px;
        if height == 0.0 {
            return self.vmin;
        }
        self.vmin + (self.bottom_px - py) / height * (self.vmax - self.vmin)
    }

    fn range(&self) -> (f64, f64) { (self.bottom_px, self.top_px) }
}
