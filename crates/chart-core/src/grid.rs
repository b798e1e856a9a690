// File: crates/chart-core/src/grid.rs
// Summary: Tick layout helpers: 1/2/5 linear ticks and calendar-aware UTC ticks.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Timelike, Utc, Weekday};

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// (first index, last index, increment); a negative increment means "divide by -inc".
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let inv = 10f64.powf(-power) / factor;
        i1 = (start * inv).round();
        i2 = (stop * inv).round();
        if i1 / inv < start { i1 += 1.0; }
        if i2 / inv > stop { i2 -= 1.0; }
        inc = -inv;
    } else {
        let fwd = 10f64.powf(power) * factor;
        i1 = (start / fwd).round();
        i2 = (stop / fwd).round();
        if i1 * fwd < start { i1 += 1.0; }
        if i2 * fwd > stop { i2 -= 1.0; }
        inc = fwd;
    }
    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Step between ticks for roughly `count` ticks over [start, stop].
pub fn tick_step(start: f64, stop: f64, count: f64) -> f64 {
    let reverse = stop < start;
    let (_, _, inc) = if reverse { tick_spec(stop, start, count) } else { tick_spec(start, stop, count) };
    let step = if inc < 0.0 { 1.0 / -inc } else { inc };
    if reverse { -step } else { step }
}

/// Roughly `count` round values covering [start, stop], in domain order.
pub fn linear_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let (i1, i2, inc) = tick_spec(lo, hi, count as f64);
    if !(i2 >= i1) {
        return Vec::new();
    }
    let n = (i2 - i1) as usize + 1;
    let value = |i: f64| if inc < 0.0 { i / -inc } else { i * inc };
    let mut out: Vec<f64> = (0..n).map(|k| value(i1 + k as f64)).collect();
    if reverse {
        out.reverse();
    }
    out
}

/// Format a linear tick with the precision implied by `step` and `,` grouping.
pub fn format_linear(v: f64, step: f64) -> String {
    let decimals = if step == 0.0 || !step.is_finite() {
        0
    } else {
        (-step.abs().log10().floor()).max(0.0) as usize
    };
    let raw = format!("{:.*}", decimals, v.abs());
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (raw.clone(), None),
    };
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let negative = v < 0.0 && raw.chars().any(|c| c != '0' && c != '.');
    let mut out = String::new();
    if negative { out.push('-'); }
    out.push_str(&grouped);
    if let Some(f) = frac_part {
        out.push('.');
        out.push_str(&f);
    }
    out
}

const MS_SECOND: i64 = 1_000;
const MS_MINUTE: i64 = 60 * MS_SECOND;
const MS_HOUR: i64 = 60 * MS_MINUTE;
const MS_DAY: i64 = 24 * MS_HOUR;
const MS_WEEK: i64 = 7 * MS_DAY;
const MS_MONTH: i64 = 30 * MS_DAY;
const MS_YEAR: i64 = 365 * MS_DAY;

/// Calendar interval used to place UTC ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeInterval {
    Millisecond(i64),
    Second(u32),
    Minute(u32),
    Hour(u32),
    Day(u32),
    Week,
    Month(u32),
    Year(i32),
}

const CANDIDATES: [(TimeInterval, i64); 18] = [
    (TimeInterval::Second(1), MS_SECOND),
    (TimeInterval::Second(5), 5 * MS_SECOND),
    (TimeInterval::Second(15), 15 * MS_SECOND),
    (TimeInterval::Second(30), 30 * MS_SECOND),
    (TimeInterval::Minute(1), MS_MINUTE),
    (TimeInterval::Minute(5), 5 * MS_MINUTE),
    (TimeInterval::Minute(15), 15 * MS_MINUTE),
    (TimeInterval::Minute(30), 30 * MS_MINUTE),
    (TimeInterval::Hour(1), MS_HOUR),
    (TimeInterval::Hour(3), 3 * MS_HOUR),
    (TimeInterval::Hour(6), 6 * MS_HOUR),
    (TimeInterval::Hour(12), 12 * MS_HOUR),
    (TimeInterval::Day(1), MS_DAY),
    (TimeInterval::Day(2), 2 * MS_DAY),
    (TimeInterval::Week, MS_WEEK),
    (TimeInterval::Month(1), MS_MONTH),
    (TimeInterval::Month(3), 3 * MS_MONTH),
    (TimeInterval::Year(1), MS_YEAR),
];

impl TimeInterval {
    /// Pick the interval whose nominal duration best fits `count` ticks over the span.
    pub fn for_span(start: DateTime<Utc>, stop: DateTime<Utc>, count: usize) -> Option<Self> {
        if count == 0 {
            return None;
        }
        let (a, b) = (start.timestamp_millis() as f64, stop.timestamp_millis() as f64);
        let target = (b - a).abs() / count as f64;
        let i = CANDIDATES.partition_point(|&(_, d)| (d as f64) <= target);
        if i == CANDIDATES.len() {
            let step = tick_step(a / MS_YEAR as f64, b / MS_YEAR as f64, count as f64).abs();
            return (step.is_finite() && step >= 1.0).then(|| TimeInterval::Year(step.floor() as i32));
        }
        if i == 0 {
            let step = tick_step(a, b, count as f64).abs().max(1.0);
            return Some(TimeInterval::Millisecond(step.floor() as i64));
        }
        let (lo, lo_d) = CANDIDATES[i - 1];
        let (hi, hi_d) = CANDIDATES[i];
        Some(if target / (lo_d as f64) < (hi_d as f64) / target { lo } else { hi })
    }

    /// Interval boundaries within [start, stop], inclusive.
    pub fn range(&self, start: DateTime<Utc>, stop: DateTime<Utc>) -> Vec<DateTime<Utc>> {
        if stop < start {
            return Vec::new();
        }
        match *self {
            TimeInterval::Millisecond(k) => fixed_range(start, stop, k.max(1)),
            TimeInterval::Second(k) => fixed_range(start, stop, k as i64 * MS_SECOND),
            TimeInterval::Minute(k) => fixed_range(start, stop, k as i64 * MS_MINUTE),
            TimeInterval::Hour(k) => fixed_range(start, stop, k as i64 * MS_HOUR),
            TimeInterval::Day(k) => {
                let mut out = Vec::new();
                let mut day = ceil_day(start);
                while day <= stop {
                    if (day.day0() % k.max(1)) == 0 {
                        out.push(day);
                    }
                    day += Duration::days(1);
                }
                out
            }
            TimeInterval::Week => {
                let mut out = Vec::new();
                let mut day = ceil_day(start);
                while day.weekday() != Weekday::Sun {
                    day += Duration::days(1);
                }
                while day <= stop {
                    out.push(day);
                    day += Duration::days(7);
                }
                out
            }
            TimeInterval::Month(k) => {
                let mut out = Vec::new();
                let (mut y, mut m0) = (start.year(), start.month0());
                let mut first = month_start(y, m0);
                if first < start {
                    (y, m0) = next_month(y, m0);
                    first = month_start(y, m0);
                }
                let mut cur = first;
                while cur <= stop {
                    if m0 % k.max(1) == 0 {
                        out.push(cur);
                    }
                    (y, m0) = next_month(y, m0);
                    cur = month_start(y, m0);
                }
                out
            }
            TimeInterval::Year(k) => {
                let k = k.max(1);
                let mut out = Vec::new();
                let mut y = start.year();
                if month_start(y, 0) < start {
                    y += 1;
                }
                y = y.div_euclid(k) * k + if y.rem_euclid(k) == 0 { 0 } else { k };
                while month_start(y, 0) <= stop {
                    out.push(month_start(y, 0));
                    y += k;
                }
                out
            }
        }
    }
}

fn fixed_range(start: DateTime<Utc>, stop: DateTime<Utc>, step_ms: i64) -> Vec<DateTime<Utc>> {
    let (a, b) = (start.timestamp_millis(), stop.timestamp_millis());
    let mut t = a.div_euclid(step_ms) * step_ms;
    if t < a {
        t += step_ms;
    }
    let mut out = Vec::new();
    while t <= b {
        if let Some(d) = DateTime::from_timestamp_millis(t) {
            out.push(d);
        }
        t += step_ms;
    }
    out
}

fn month_start(year: i32, month0: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month0 + 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

fn next_month(year: i32, month0: u32) -> (i32, u32) {
    if month0 == 11 { (year + 1, 0) } else { (year, month0 + 1) }
}

fn ceil_day(d: DateTime<Utc>) -> DateTime<Utc> {
    let floor = d.date_naive().and_hms_opt(0, 0, 0).map(|n| n.and_utc()).unwrap_or(d);
    if floor < d { floor + Duration::days(1) } else { floor }
}

/// Roughly `count` calendar-aligned ticks over [start, stop].
pub fn time_ticks(start: DateTime<Utc>, stop: DateTime<Utc>, count: usize) -> Vec<DateTime<Utc>> {
    let (lo, hi) = if stop < start { (stop, start) } else { (start, stop) };
    let mut ticks = match TimeInterval::for_span(lo, hi, count) {
        Some(interval) => interval.range(lo, hi),
        None => Vec::new(),
    };
    if stop < start {
        ticks.reverse();
    }
    ticks
}

/// Label a UTC tick with the coarsest unit it falls on (year, month, week, day, ...).
pub fn format_time(d: DateTime<Utc>) -> String {
    if d.timestamp_subsec_millis() != 0 {
        format!(".{:03}", d.timestamp_subsec_millis())
    } else if d.second() != 0 {
        d.format(":%S").to_string()
    } else if d.minute() != 0 {
        d.format("%I:%M").to_string()
    } else if d.hour() != 0 {
        d.format("%I %p").to_string()
    } else if d.day() != 1 {
        if d.weekday() == Weekday::Sun {
            d.format("%b %d").to_string()
        } else {
            d.format("%a %d").to_string()
        }
    } else if d.month() != 1 {
        d.format("%B").to_string()
    } else {
        d.format("%Y").to_string()
    }
}
