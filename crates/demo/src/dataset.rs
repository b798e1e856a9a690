// File: crates/demo/src/dataset.rs
// Summary: Yearly datasets: the built-in sample and a small CSV loader.

use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use weather_chart::YearlyRecord;

/// Ten years of monthly totals starting in 2014.
pub fn sample() -> Vec<YearlyRecord> {
    (0..10)
        .filter_map(|y| {
            let start = Utc.with_ymd_and_hms(2014 + y, 1, 1, 0, 0, 0).single()?;
            let sequence = (0..12)
                .map(|m| {
                    // Wet winters, dry summers, a slow drift between years.
                    let season = ((m as f64) * std::f64::consts::PI / 6.0).cos() * 2.5;
                    let drift = ((y * 7 + m * 3) % 5) as f64 * 0.4;
                    (4.5 + season + drift + y as f64 * 0.3).max(0.0)
                })
                .collect();
            Some(YearlyRecord::new(start, sequence))
        })
        .collect()
}

/// Parse a `start` field: RFC 3339, `YYYY-MM-DD` or epoch milliseconds.
pub fn parse_start(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0).map(|n| n.and_utc());
    }
    s.parse::<i64>().ok().and_then(DateTime::from_timestamp_millis)
}

/// Read `start,v1,v2,...` rows. A first row whose `start` does not parse is
/// treated as a header; rows may have any number of values.
pub fn from_reader<R: Read>(reader: R) -> Result<Vec<YearlyRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut out = Vec::new();
    for (i, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let line = i + 1;
        let Some(first) = rec.get(0).filter(|s| !s.is_empty()) else {
            continue;
        };
        let Some(start) = parse_start(first) else {
            if i == 0 {
                tracing::debug!(header = first, "skipping header row");
                continue;
            }
            bail!("line {line}: unrecognised start time {first:?}");
        };
        let sequence = rec
            .iter()
            .skip(1)
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<f64>().with_context(|| format!("line {line}: bad value {s:?}")))
            .collect::<Result<Vec<_>>>()?;
        out.push(YearlyRecord::new(start, sequence));
    }
    Ok(out)
}

pub fn from_path(path: &Path) -> Result<Vec<YearlyRecord>> {
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    from_reader(file).with_context(|| format!("reading {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn sample_is_ten_years_of_months() {
        let s = sample();
        assert_eq!(s.len(), 10);
        assert!(s.iter().all(|r| r.sequence.len() == 12));
        assert_eq!(s[0].start.year(), 2014);
        assert_eq!(s[9].start.year(), 2023);
        assert!(s.windows(2).all(|w| w[0].start < w[1].start));
    }

    #[test]
    fn start_formats() {
        let want = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(parse_start("2020-01-01"), Some(want));
        assert_eq!(parse_start("2020-01-01T00:00:00Z"), Some(want));
        assert_eq!(parse_start("2020-01-01T01:00:00+01:00"), Some(want));
        assert_eq!(parse_start("1577836800000"), Some(want));
        assert_eq!(parse_start("start"), None);
    }

    #[test]
    fn reads_header_and_ragged_rows() {
        let csv = "start,jan,feb,mar\n2020-01-01,1,2,3\n2021-01-01,4\n2022-01-01\n";
        let records = from_reader(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].sequence, vec![1.0, 2.0, 3.0]);
        assert_eq!(records[1].sequence, vec![4.0]);
        assert!(records[2].sequence.is_empty());
    }

    #[test]
    fn bad_value_reports_line() {
        let csv = "2020-01-01,1,x\n";
        let err = from_reader(csv.as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("line 1"), "{err:#}");
    }

    #[test]
    fn bad_start_after_first_row_is_an_error() {
        let csv = "2020-01-01,1\nnot-a-date,2\n";
        assert!(from_reader(csv.as_bytes()).is_err());
    }
}
