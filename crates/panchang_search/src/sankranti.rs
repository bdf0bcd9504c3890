//! Sankranti: the Sun's sidereal ingress into each rashi.

use panchang_base::{ALL_RASHIS, EphemerisProvider, Location, RASHI_SPAN_DEG, Rashi};
use panchang_time::{CivilDate, CivilTime};
use serde::Serialize;
use tracing::debug;

use crate::config::PanchangConfig;
use crate::error::SearchError;
use crate::phase::sun_sidereal_at;
use crate::search_util::{find_phase_crossing, find_phase_crossing_backward};

/// The Sun needs at most ~32 days to cross one rashi.
const ONE_RASHI_WINDOW_DAYS: f64 = 35.0;

/// One sidereal year plus margin.
const ONE_YEAR_WINDOW_DAYS: f64 = 370.0;

/// The Sun entering a rashi.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SankrantiEvent {
    /// The rashi being entered.
    pub rashi: Rashi,
    /// Julian Day (UT).
    pub jd: f64,
    /// Sidereal Sun at `jd`; within a hair of `rashi.start_deg()`.
    pub sun_sidereal_longitude_deg: f64,
}

impl SankrantiEvent {
    pub fn time(&self, offset_hours: f64) -> CivilTime {
        CivilTime::from_jd_ut(self.jd, offset_hours)
    }
}

fn event_at<P>(provider: &P, rashi: Rashi, jd: f64) -> Result<SankrantiEvent, SearchError>
where
    P: EphemerisProvider + ?Sized,
{
    Ok(SankrantiEvent {
        rashi,
        jd,
        sun_sidereal_longitude_deg: sun_sidereal_at(provider, jd)?,
    })
}

fn rashi_of(sidereal_deg: f64) -> Rashi {
    let idx = (sidereal_deg / RASHI_SPAN_DEG).floor() as usize % 12;
    ALL_RASHIS[idx]
}

/// Next ingress of the Sun into `rashi` after `jd_ut`, within a year.
pub fn next_specific_sankranti<P>(
    provider: &P,
    jd_ut: f64,
    rashi: Rashi,
    config: &PanchangConfig,
) -> Result<Option<SankrantiEvent>, SearchError>
where
    P: EphemerisProvider + ?Sized,
{
    let found = find_phase_crossing(
        jd_ut,
        jd_ut + ONE_YEAR_WINDOW_DAYS,
        rashi.start_deg(),
        config.sankranti_step_days,
        |jd| sun_sidereal_at(provider, jd),
    )?;
    found.map(|jd| event_at(provider, rashi, jd)).transpose()
}

/// Latest ingress of the Sun into `rashi` before `jd_ut`, within a year.
pub fn prev_specific_sankranti<P>(
    provider: &P,
    jd_ut: f64,
    rashi: Rashi,
    config: &PanchangConfig,
) -> Result<Option<SankrantiEvent>, SearchError>
where
    P: EphemerisProvider + ?Sized,
{
    let found = find_phase_crossing_backward(
        jd_ut,
        ONE_YEAR_WINDOW_DAYS,
        rashi.start_deg(),
        config.sankranti_step_days,
        |jd| sun_sidereal_at(provider, jd),
    )?;
    found.map(|jd| event_at(provider, rashi, jd)).transpose()
}

/// The next sankranti of any rashi after `jd_ut`.
pub fn next_sankranti<P>(
    provider: &P,
    jd_ut: f64,
    config: &PanchangConfig,
) -> Result<Option<SankrantiEvent>, SearchError>
where
    P: EphemerisProvider + ?Sized,
{
    let current = rashi_of(sun_sidereal_at(provider, jd_ut)?);
    let target = ALL_RASHIS[(current.index() as usize + 1) % 12];
    let found = find_phase_crossing(
        jd_ut,
        jd_ut + ONE_RASHI_WINDOW_DAYS,
        target.start_deg(),
        config.sankranti_step_days,
        |jd| sun_sidereal_at(provider, jd),
    )?;
    found.map(|jd| event_at(provider, target, jd)).transpose()
}

/// The most recent sankranti at or before `jd_ut`.
pub fn prev_sankranti<P>(
    provider: &P,
    jd_ut: f64,
    config: &PanchangConfig,
) -> Result<Option<SankrantiEvent>, SearchError>
where
    P: EphemerisProvider + ?Sized,
{
    let current = rashi_of(sun_sidereal_at(provider, jd_ut)?);
    let found = find_phase_crossing_backward(
        jd_ut,
        ONE_RASHI_WINDOW_DAYS,
        current.start_deg(),
        config.sankranti_step_days,
        |jd| sun_sidereal_at(provider, jd),
    )?;
    found.map(|jd| event_at(provider, current, jd)).transpose()
}

/// Every sankranti in `[start_jd, end_jd)`, chronological.
pub fn search_sankrantis<P>(
    provider: &P,
    start_jd: f64,
    end_jd: f64,
    config: &PanchangConfig,
) -> Result<Vec<SankrantiEvent>, SearchError>
where
    P: EphemerisProvider + ?Sized,
{
    let mut events = Vec::new();
    let mut cursor = start_jd;
    while cursor < end_jd {
        match next_sankranti(provider, cursor, config)? {
            Some(ev) if ev.jd < end_jd => {
                // Step past the ingress so the next search targets the following rashi.
                cursor = ev.jd + 1.0;
                events.push(ev);
            }
            _ => break,
        }
    }
    Ok(events)
}

/// The twelve sankrantis inside the local civil year at `location`.
pub fn sankrantis_for_year<P>(
    provider: &P,
    year: i32,
    location: &Location,
    config: &PanchangConfig,
) -> Result<Vec<SankrantiEvent>, SearchError>
where
    P: EphemerisProvider + ?Sized,
{
    config.validate()?;
    let offset = location.utc_offset_hours;
    let start = CivilDate::new(year, 1, 1).jd_midnight_ut(offset);
    let end = CivilDate::new(year + 1, 1, 1).jd_midnight_ut(offset);
    let events = search_sankrantis(provider, start, end, config)?;
    debug!(year, count = events.len(), "sankrantis found");
    Ok(events)
}

/// Makar Sankranti: the Sun entering Makara (sidereal 270°) in `year`.
pub fn makar_sankranti<P>(
    provider: &P,
    year: i32,
    location: &Location,
    config: &PanchangConfig,
) -> Result<SankrantiEvent, SearchError>
where
    P: EphemerisProvider + ?Sized,
{
    let start = CivilDate::new(year, 1, 1).jd_midnight_ut(location.utc_offset_hours);
    next_specific_sankranti(provider, start, Rashi::Makara, config)?
        .ok_or(SearchError::NoCrossingFound("Makar Sankranti"))
}
