//! JSON cache of a [`TithiBoundaryTable`].
//!
//! The file is a JSON array of records with exactly the fields `tithiIno`,
//! `startTime`, `endTime`, `masaIno` and `isLeapMonth`. Instants are
//! ISO-8601 strings written at the table's fixed offset and are kept to
//! the millisecond.

use std::path::Path;

use chrono::{DateTime, FixedOffset};
use panchang_base::Location;
use panchang_time::CivilTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SearchError;
use crate::year_boundaries::{TithiBoundary, TithiBoundaryTable};

/// One cached boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CachedBoundary {
    pub tithi_ino: u8,
    pub start_time: DateTime<FixedOffset>,
    pub end_time: DateTime<FixedOffset>,
    pub masa_ino: u8,
    pub is_leap_month: bool,
}

fn chrono_at(jd: f64, offset_hours: f64) -> Result<DateTime<FixedOffset>, SearchError> {
    CivilTime::from_jd_ut(jd, offset_hours)
        .to_chrono()
        .ok_or_else(|| SearchError::Cache(format!("JD {jd} not representable at offset {offset_hours}")))
}

fn jd_of(dt: &DateTime<FixedOffset>) -> f64 {
    CivilTime::from_chrono(dt).to_jd_ut()
}

/// Table → records, instants at the table's offset.
pub fn to_records(table: &TithiBoundaryTable) -> Result<Vec<CachedBoundary>, SearchError> {
    let offset = table.offset_hours();
    table
        .boundaries()
        .iter()
        .map(|b| {
            Ok(CachedBoundary {
                tithi_ino: b.tithi_index,
                start_time: chrono_at(b.start_jd, offset)?,
                end_time: chrono_at(b.end_jd, offset)?,
                masa_ino: b.masa_index,
                is_leap_month: b.is_leap_month,
            })
        })
        .collect()
}

/// Reject records with out-of-range indices, empty intervals, or
/// out-of-order starts.
pub fn validate_records(records: &[CachedBoundary]) -> Result<(), SearchError> {
    for (i, r) in records.iter().enumerate() {
        if r.tithi_ino >= 30 {
            return Err(SearchError::Cache(format!("record {i}: tithiIno {} out of range", r.tithi_ino)));
        }
        if r.masa_ino >= 12 {
            return Err(SearchError::Cache(format!("record {i}: masaIno {} out of range", r.masa_ino)));
        }
        if r.end_time <= r.start_time {
            return Err(SearchError::Cache(format!("record {i}: endTime not after startTime")));
        }
    }
    if let Some(i) = records.windows(2).position(|w| w[1].start_time < w[0].start_time) {
        return Err(SearchError::Cache(format!("record {}: starts before its predecessor", i + 1)));
    }
    Ok(())
}

/// Local year of the middle record's start, as written.
pub fn cache_year(records: &[CachedBoundary]) -> Option<i32> {
    use chrono::Datelike;
    records.get(records.len() / 2).map(|r| r.start_time.year())
}

/// Records → table for `year` at `location`.
pub fn from_records(
    records: &[CachedBoundary],
    year: i32,
    location: &Location,
) -> Result<TithiBoundaryTable, SearchError> {
    validate_records(records)?;
    let boundaries = records
        .iter()
        .map(|r| TithiBoundary {
            tithi_index: r.tithi_ino,
            start_jd: jd_of(&r.start_time),
            end_jd: jd_of(&r.end_time),
            masa_index: r.masa_ino,
            is_leap_month: r.is_leap_month,
        })
        .collect();
    Ok(TithiBoundaryTable::new(year, *location, boundaries))
}

pub fn to_json(table: &TithiBoundaryTable) -> Result<String, SearchError> {
    Ok(serde_json::to_string_pretty(&to_records(table)?)?)
}

pub fn from_json(json: &str, year: i32, location: &Location) -> Result<TithiBoundaryTable, SearchError> {
    let records: Vec<CachedBoundary> = serde_json::from_str(json)?;
    from_records(&records, year, location)
}

pub fn save_table(table: &TithiBoundaryTable, path: &Path) -> Result<(), SearchError> {
    let json = to_json(table)?;
    std::fs::write(path, json)?;
    debug!(path = %path.display(), boundaries = table.len(), "boundary cache written");
    Ok(())
}

/// Read and validate a cache file. Without `year`, the year is taken from
/// the records.
pub fn load_table(path: &Path, year: Option<i32>, location: &Location) -> Result<TithiBoundaryTable, SearchError> {
    let json = std::fs::read_to_string(path)?;
    let records: Vec<CachedBoundary> = serde_json::from_str(&json)?;
    let year = year
        .or_else(|| cache_year(&records))
        .ok_or_else(|| SearchError::Cache("empty cache and no year given".into()))?;
    let table = from_records(&records, year, location)?;
    debug!(path = %path.display(), year, boundaries = table.len(), "boundary cache loaded");
    Ok(table)
}
