//! Parser for yearly draw files.
//!
//! Each file is a CSV with a header row. Two columns sets are understood:
//! - the published layout: `開獎日期,獎號1,獎號2,獎號3,獎號4,獎號5`
//! - a plain ASCII layout: `date,n1,n2,n3,n4,n5`
//!
//! Any other columns (draw id, prize pools, ...) are ignored.
//!
//! Rows are never fatal. A row whose date cannot be parsed is dropped quietly;
//! a row with broken numbers is dropped with a warning. Only problems with the
//! file itself (unreadable, missing required columns) become errors.

use crate::error::{DataLoadError, Result};
use crate::types::{DrawRecord, NUMBERS_PER_DRAW, Number};
use chrono::{NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// Required columns as (published name, ASCII alias)
const REQUIRED_COLUMNS: [(&str, &str); 1 + NUMBERS_PER_DRAW] = [
    ("開獎日期", "date"),
    ("獎號1", "n1"),
    ("獎號2", "n2"),
    ("獎號3", "n3"),
    ("獎號4", "n4"),
    ("獎號5", "n5"),
];

const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d", "%Y%m%d"];

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

/// One CSV row before validation
#[derive(Debug, Deserialize)]
struct RawDrawRow {
    #[serde(rename = "開獎日期", alias = "date")]
    date: String,
    #[serde(rename = "獎號1", alias = "n1")]
    n1: String,
    #[serde(rename = "獎號2", alias = "n2")]
    n2: String,
    #[serde(rename = "獎號3", alias = "n3")]
    n3: String,
    #[serde(rename = "獎號4", alias = "n4")]
    n4: String,
    #[serde(rename = "獎號5", alias = "n5")]
    n5: String,
}

/// Why a row was dropped
#[derive(Debug)]
enum SkipReason {
    BadDate(String),
    BadNumbers(String),
}

/// Records parsed from one file, plus how many rows were dropped
#[derive(Debug, Default)]
pub struct ParsedFile {
    pub records: Vec<DrawRecord>,
    /// Rows dropped because the date did not parse
    pub bad_dates: usize,
    /// Rows dropped because the numbers were missing, malformed or invalid
    pub bad_rows: usize,
}

/// Parse one draw file from disk
pub fn parse_draws(path: &Path) -> Result<ParsedFile> {
    let file = File::open(path)?;
    parse_draws_from_reader(file, &path.display().to_string())
}

/// Parse draw rows from any reader. `source` is only used in messages.
pub fn parse_draws_from_reader<R: Read>(reader: R, source: &str) -> Result<ParsedFile> {
    let mut rdr = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| DataLoadError::CsvError {
            file: source.to_string(),
            source: e,
        })?
        .clone();
    check_columns(&headers, source)?;

    let mut parsed = ParsedFile::default();
    for result in rdr.records() {
        let record = result.map_err(|e| DataLoadError::CsvError {
            file: source.to_string(),
            source: e,
        })?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        match convert_row(&record, &headers) {
            Ok(draw) => parsed.records.push(draw),
            Err(SkipReason::BadDate(value)) => {
                debug!("{}:{}: dropping row with unparseable date {:?}", source, line, value);
                parsed.bad_dates += 1;
            }
            Err(SkipReason::BadNumbers(reason)) => {
                warn!("{}:{}: dropping row: {}", source, line, reason);
                parsed.bad_rows += 1;
            }
        }
    }

    Ok(parsed)
}

fn check_columns(headers: &StringRecord, source: &str) -> Result<()> {
    for (name, alias) in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == name || h == alias) {
            return Err(DataLoadError::InvalidValue {
                field: format!("header of {}", source),
                value: format!("missing column {} ({})", name, alias),
            });
        }
    }
    Ok(())
}

fn convert_row(
    record: &StringRecord,
    headers: &StringRecord,
) -> std::result::Result<DrawRecord, SkipReason> {
    let row: RawDrawRow = record
        .deserialize(Some(headers))
        .map_err(|e| SkipReason::BadNumbers(e.to_string()))?;

    let date = parse_draw_date(&row.date).ok_or_else(|| SkipReason::BadDate(row.date.clone()))?;

    let mut numbers: [Number; NUMBERS_PER_DRAW] = [0; NUMBERS_PER_DRAW];
    for (slot, raw) in numbers
        .iter_mut()
        .zip([&row.n1, &row.n2, &row.n3, &row.n4, &row.n5])
    {
        *slot = parse_number(raw)
            .ok_or_else(|| SkipReason::BadNumbers(format!("invalid number {:?}", raw)))?;
    }

    DrawRecord::new(date, numbers).map_err(|e| SkipReason::BadNumbers(e.to_string()))
}

/// Parse a draw date in any of the accepted layouts
///
/// Example: "2024-01-05", "2024/1/5", "20240105", "2024-01-05 20:30:00"
pub fn parse_draw_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                .map(|dt| dt.date())
        })
}

/// Parse a ball number; spreadsheet exports sometimes write "7.0"
fn parse_number(s: &str) -> Option<Number> {
    if let Ok(n) = s.parse::<Number>() {
        return Some(n);
    }
    let value = s.parse::<f64>().ok()?;
    if value.fract() == 0.0 && (0.0..=255.0).contains(&value) {
        Some(value as Number)
    } else {
        None
    }
}
