//! Year-long tithi boundary precomputation.
//!
//! A coarse scan over the local civil year (plus padding) detects every
//! tithi change; each change is refined to its exact start, paired with its
//! end, and tagged with the lunar month it falls in. The resulting table
//! answers "when is tithi T of masa M in year Y" without further searches.

use std::collections::HashMap;

use panchang_base::{EphemerisProvider, Location, Masa, TITHI_SEGMENT_DEG, tithi_from_elongation};
use panchang_time::{CivilDate, CivilTime};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::config::PanchangConfig;
use crate::error::SearchError;
use crate::lunar_phase::{LUNATION_WINDOW_DAYS, PHASE_SCAN_STEP_DAYS};
use crate::masa::LunarMonth;
use crate::phase::lunar_phase_at;
use crate::search_util::{find_phase_crossing, find_phase_crossing_backward};

/// Two boundaries closer than this are considered touching (≈8.6 s).
pub const GAP_TOLERANCE_DAYS: f64 = 1.0e-4;

/// Slack when matching a boundary start against cached new moons.
const MONTH_MATCH_TOLERANCE_DAYS: f64 = 1.0e-3;

/// One tithi interval tagged with its lunar month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TithiBoundary {
    /// 0-based tithi index (0..=29).
    pub tithi_index: u8,
    pub start_jd: f64,
    pub end_jd: f64,
    /// 0-based Amanta masa index (0 = Chaitra).
    pub masa_index: u8,
    pub is_leap_month: bool,
}

impl TithiBoundary {
    pub fn start(&self, offset_hours: f64) -> CivilTime {
        CivilTime::from_jd_ut(self.start_jd, offset_hours)
    }

    pub fn end(&self, offset_hours: f64) -> CivilTime {
        CivilTime::from_jd_ut(self.end_jd, offset_hours)
    }

    pub fn masa(&self) -> Option<Masa> {
        Masa::from_index(self.masa_index)
    }
}

/// Consecutive boundaries that do not touch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundaryGap {
    /// Position of the earlier boundary in [`TithiBoundaryTable::boundaries`].
    pub position: usize,
    pub end_jd: f64,
    pub next_start_jd: f64,
}

type OccurrenceKey = (u8, u8, bool);

/// Tithi boundaries for one local civil year at one location.
#[derive(Debug, Clone, Serialize)]
pub struct TithiBoundaryTable {
    pub year: i32,
    pub location: Location,
    boundaries: Vec<TithiBoundary>,
    #[serde(skip)]
    index: HashMap<OccurrenceKey, Vec<TithiBoundary>>,
    /// Scan samples whose phase lookup failed. Tithis starting near a
    /// failed sample may be missing without being counted below.
    pub failed_samples: usize,
    /// Detected tithi changes dropped because refining or tagging failed.
    pub skipped_boundaries: usize,
}

impl TithiBoundaryTable {
    /// Build from boundaries in any order, with no failures recorded.
    pub fn new(year: i32, location: Location, mut boundaries: Vec<TithiBoundary>) -> Self {
        boundaries.sort_by(|a, b| a.start_jd.total_cmp(&b.start_jd));
        let mut index: HashMap<OccurrenceKey, Vec<TithiBoundary>> = HashMap::new();
        for b in &boundaries {
            index
                .entry((b.tithi_index, b.masa_index, b.is_leap_month))
                .or_default()
                .push(*b);
        }
        Self {
            year,
            location,
            boundaries,
            index,
            failed_samples: 0,
            skipped_boundaries: 0,
        }
    }

    /// Record how incomplete the scan that produced this table was.
    pub fn with_failures(mut self, failed_samples: usize, skipped_boundaries: usize) -> Self {
        self.failed_samples = failed_samples;
        self.skipped_boundaries = skipped_boundaries;
        self
    }

    /// No sample or boundary was lost to a provider failure.
    pub fn is_complete(&self) -> bool {
        self.failed_samples == 0 && self.skipped_boundaries == 0
    }

    /// All boundaries, chronological.
    pub fn boundaries(&self) -> &[TithiBoundary] {
        &self.boundaries
    }

    pub fn len(&self) -> usize {
        self.boundaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }

    pub fn offset_hours(&self) -> f64 {
        self.location.utc_offset_hours
    }

    /// Occurrences of a tithi in a masa, chronological.
    pub fn occurrences(&self, tithi_index: u8, masa_index: u8, is_leap_month: bool) -> &[TithiBoundary] {
        self.index
            .get(&(tithi_index, masa_index, is_leap_month))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The `n`-th (0-based) occurrence of a tithi in a masa.
    pub fn nth_occurrence(
        &self,
        tithi_index: u8,
        masa_index: u8,
        is_leap_month: bool,
        n: usize,
    ) -> Option<&TithiBoundary> {
        self.occurrences(tithi_index, masa_index, is_leap_month).get(n)
    }

    fn start_year(&self, b: &TithiBoundary) -> i32 {
        b.start(self.offset_hours()).year
    }

    /// Pick one candidate: local start year equal to `target_year` first,
    /// then the leap flag equal to `prefer_leap`, then the earliest.
    fn select<'a, I>(&self, candidates: I, target_year: i32, prefer_leap: bool) -> Option<&'a TithiBoundary>
    where
        I: IntoIterator<Item = &'a TithiBoundary>,
    {
        let all: Vec<&TithiBoundary> = candidates.into_iter().collect();
        let in_year: Vec<&TithiBoundary> = all
            .iter()
            .copied()
            .filter(|b| self.start_year(b) == target_year)
            .collect();
        let pool = if in_year.is_empty() { all } else { in_year };
        let preferred: Vec<&TithiBoundary> = pool
            .iter()
            .copied()
            .filter(|b| b.is_leap_month == prefer_leap)
            .collect();
        let pool = if preferred.is_empty() { pool } else { preferred };
        pool.into_iter().min_by(|a, b| a.start_jd.total_cmp(&b.start_jd))
    }

    /// Resolve "tithi T of masa M" to one interval for `target_year`.
    pub fn resolve_tithi_in_masa(
        &self,
        tithi_index: u8,
        masa_index: u8,
        target_year: i32,
        prefer_leap: bool,
    ) -> Option<&TithiBoundary> {
        let candidates = self
            .occurrences(tithi_index, masa_index, false)
            .iter()
            .chain(self.occurrences(tithi_index, masa_index, true));
        self.select(candidates, target_year, prefer_leap)
    }

    /// First boundary of each run of one masa, i.e. the month starts.
    pub fn masa_starts(&self, masa_index: u8) -> Vec<&TithiBoundary> {
        let mut starts = Vec::new();
        let mut prev: Option<(u8, bool)> = None;
        for b in &self.boundaries {
            let key = (b.masa_index, b.is_leap_month);
            if b.masa_index == masa_index && prev != Some(key) {
                starts.push(b);
            }
            prev = Some(key);
        }
        starts
    }

    /// Resolve the start of masa M for `target_year`.
    pub fn resolve_masa_start(&self, masa_index: u8, target_year: i32, prefer_leap: bool) -> Option<&TithiBoundary> {
        self.select(self.masa_starts(masa_index), target_year, prefer_leap)
    }

    /// Consecutive pairs where one boundary's end is not the next start.
    pub fn gaps(&self) -> Vec<BoundaryGap> {
        self.boundaries
            .windows(2)
            .enumerate()
            .filter(|(_, w)| (w[1].start_jd - w[0].end_jd).abs() > GAP_TOLERANCE_DAYS)
            .map(|(position, w)| BoundaryGap {
                position,
                end_jd: w[0].end_jd,
                next_start_jd: w[1].start_jd,
            })
            .collect()
    }
}

/// Per-year cache of resolved lunar months.
#[derive(Default)]
struct MonthCache {
    months: Vec<LunarMonth>,
}

impl MonthCache {
    fn lookup(&self, jd: f64) -> Option<&LunarMonth> {
        self.months.iter().find(|m| {
            jd >= m.start_nm - MONTH_MATCH_TOLERANCE_DAYS && jd < m.end_nm - MONTH_MATCH_TOLERANCE_DAYS
        })
    }

    fn month_for<P>(&mut self, provider: &P, start_jd: f64, tithi_index: u8) -> Result<LunarMonth, SearchError>
    where
        P: EphemerisProvider + ?Sized,
    {
        if let Some(m) = self.lookup(start_jd) {
            return Ok(*m);
        }
        let phase = |jd| lunar_phase_at(provider, jd);
        let new_moon = if tithi_index == 0 {
            start_jd
        } else {
            find_phase_crossing_backward(start_jd, LUNATION_WINDOW_DAYS, 0.0, PHASE_SCAN_STEP_DAYS, phase)?
                .ok_or(SearchError::NoCrossingFound("opening new moon"))?
        };
        let next_new_moon = find_phase_crossing(
            new_moon + 1.0,
            new_moon + LUNATION_WINDOW_DAYS,
            0.0,
            PHASE_SCAN_STEP_DAYS,
            phase,
        )?
        .ok_or(SearchError::NoCrossingFound("closing new moon"))?;
        let month = LunarMonth::between(provider, new_moon, next_new_moon)?;
        self.months.push(month);
        Ok(month)
    }
}

/// Exact interval of tithi `tithi_index`, which starts inside `[lo, hi]`.
fn refine_interval<P>(
    provider: &P,
    lo: f64,
    hi: f64,
    tithi_index: u8,
    config: &PanchangConfig,
) -> Result<(f64, f64), SearchError>
where
    P: EphemerisProvider + ?Sized,
{
    let phase = |jd| lunar_phase_at(provider, jd);
    let start_deg = f64::from(tithi_index) * TITHI_SEGMENT_DEG;
    let end_deg = f64::from((tithi_index + 1) % 30) * TITHI_SEGMENT_DEG;

    let start = find_phase_crossing(lo, hi, start_deg, hi - lo, phase)?
        .ok_or(SearchError::NoCrossingFound("tithi start"))?;
    let end = find_phase_crossing(
        start,
        start + config.boundary_end_window_days,
        end_deg,
        config.scan_step_days,
        phase,
    )?
    .ok_or(SearchError::NoCrossingFound("tithi end"))?;
    Ok((start, end))
}

/// Compute every tithi overlapping the local civil `year` at `location`.
///
/// Best-effort: a failed phase sample is counted in
/// [`TithiBoundaryTable::failed_samples`], a boundary that cannot be refined
/// or tagged in [`TithiBoundaryTable::skipped_boundaries`]. Both are logged
/// and left out, so the table may contain gaps.
#[instrument(skip(provider))]
pub fn compute_all_tithi_boundaries<P>(
    provider: &P,
    year: i32,
    location: &Location,
    config: &PanchangConfig,
) -> Result<TithiBoundaryTable, SearchError>
where
    P: EphemerisProvider + ?Sized,
{
    location.validate()?;
    config.validate()?;
    let offset = location.utc_offset_hours;
    let year_start = CivilDate::new(year, 1, 1).jd_midnight_ut(offset);
    let year_end = CivilDate::new(year + 1, 1, 1).jd_midnight_ut(offset);
    let scan_start = year_start - config.padding_days;
    let scan_end = year_end + config.padding_days;
    let step = config.scan_step_days;
    let steps = ((scan_end - scan_start) / step).ceil() as usize;

    let mut months = MonthCache::default();
    let mut boundaries = Vec::new();
    let mut failed_samples = 0usize;
    let mut skipped = 0usize;
    let mut prev: Option<(f64, u8)> = None;

    for i in 0..=steps {
        let t = (scan_start + i as f64 * step).min(scan_end);
        let index = match lunar_phase_at(provider, t) {
            Ok(phase) => tithi_from_elongation(phase).tithi_index,
            Err(e) => {
                warn!(jd = t, error = %e, "phase sample failed; skipping");
                failed_samples += 1;
                prev = None;
                continue;
            }
        };

        if let Some((prev_t, prev_index)) = prev {
            if index != prev_index {
                let tagged = refine_interval(provider, prev_t, t, index, config).and_then(|(start, end)| {
                    if end <= year_start || start >= year_end {
                        return Ok(None);
                    }
                    let month = months.month_for(provider, start, index)?;
                    Ok(Some(TithiBoundary {
                        tithi_index: index,
                        start_jd: start,
                        end_jd: end,
                        masa_index: month.resolution.amanta_index(),
                        is_leap_month: month.resolution.is_leap_month,
                    }))
                });
                match tagged {
                    Ok(Some(b)) => boundaries.push(b),
                    Ok(None) => {}
                    Err(e) => {
                        warn!(tithi = index, jd = t, error = %e, "tithi boundary skipped");
                        skipped += 1;
                    }
                }
            }
        }
        prev = Some((t, index));
    }

    let table = TithiBoundaryTable::new(year, *location, boundaries).with_failures(failed_samples, skipped);
    info!(
        year,
        boundaries = table.len(),
        failed_samples = table.failed_samples,
        skipped_boundaries = table.skipped_boundaries,
        lunar_months = months.months.len(),
        "tithi boundaries computed"
    );
    Ok(table)
}

/// [`compute_all_tithi_boundaries`] for several years in parallel.
///
/// Tables come back in the order of `years`.
#[instrument(skip(provider))]
pub fn compute_tithi_boundaries_for_years<P>(
    provider: &P,
    years: &[i32],
    location: &Location,
    config: &PanchangConfig,
) -> Result<Vec<TithiBoundaryTable>, SearchError>
where
    P: EphemerisProvider + Sync + ?Sized,
{
    years
        .par_iter()
        .map(|&year| compute_all_tithi_boundaries(provider, year, location, config))
        .collect()
}

/// One year's table for each of several locations, in parallel.
#[instrument(skip(provider, locations), fields(locations = locations.len()))]
pub fn compute_tithi_boundaries_for_locations<P>(
    provider: &P,
    year: i32,
    locations: &[Location],
    config: &PanchangConfig,
) -> Result<Vec<TithiBoundaryTable>, SearchError>
where
    P: EphemerisProvider + Sync + ?Sized,
{
    locations
        .par_iter()
        .map(|location| compute_all_tithi_boundaries(provider, year, location, config))
        .collect()
}
