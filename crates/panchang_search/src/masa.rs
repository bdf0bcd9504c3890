//! Lunar month resolution against the provider.
//!
//! A lunar month runs from one new moon to the next. Its name comes from
//! the solar months at those two new moons; see
//! [`panchang_base::masa_from_solar_months`].

use panchang_base::{EphemerisProvider, Masa, MasaResolution, masa_from_solar_months, tithi_from_elongation};
use panchang_time::CivilTime;
use serde::Serialize;
use tracing::debug;

use crate::error::SearchError;
use crate::lunar_phase::{PHASE_SCAN_STEP_DAYS, next_amavasya, prev_amavasya};
use crate::phase::{lunar_phase_at, solar_month_at};
use crate::search_util::find_phase_crossing;

/// Half-width of the window used to refine an estimated new moon.
const NEW_MOON_REFINE_DAYS: f64 = 4.0;

/// A ritu spans two masas, three when one of them is adhika.
const MAX_RITU_EXTENSION: usize = 2;

/// Nudge past a known new moon so the next search does not find it again.
const NEW_MOON_NUDGE_DAYS: f64 = 0.01;

/// One lunar month: its bracketing new moons and resolved name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct LunarMonth {
    pub start_nm: f64,
    pub end_nm: f64,
    pub resolution: MasaResolution,
}

impl LunarMonth {
    /// Resolve from two new moon instants.
    pub(crate) fn between<P>(provider: &P, start_nm: f64, end_nm: f64) -> Result<Self, SearchError>
    where
        P: EphemerisProvider + ?Sized,
    {
        let current = solar_month_at(provider, start_nm)?;
        let next = solar_month_at(provider, end_nm)?;
        let resolution = masa_from_solar_months(current, next)?;
        debug!(start_nm, end_nm, current, next, ?resolution, "lunar month resolved");
        Ok(Self {
            start_nm,
            end_nm,
            resolution,
        })
    }
}

fn refine_new_moon<P>(provider: &P, estimate_jd: f64, what: &'static str) -> Result<f64, SearchError>
where
    P: EphemerisProvider + ?Sized,
{
    find_phase_crossing(
        estimate_jd - NEW_MOON_REFINE_DAYS,
        estimate_jd + NEW_MOON_REFINE_DAYS,
        0.0,
        PHASE_SCAN_STEP_DAYS,
        |jd| lunar_phase_at(provider, jd),
    )?
    .ok_or(SearchError::NoCrossingFound(what))
}

pub(crate) fn resolve_lunar_month<P>(
    provider: &P,
    tithi_ordinal: u8,
    reference_jd: f64,
) -> Result<LunarMonth, SearchError>
where
    P: EphemerisProvider + ?Sized,
{
    if !(1..=30).contains(&tithi_ordinal) {
        return Err(SearchError::InvalidConfig("tithi ordinal must be in 1..=30"));
    }
    // A tithi lasts about a day, so the ordinal is a rough day count.
    let elapsed = f64::from(tithi_ordinal - 1);
    let start_nm = refine_new_moon(provider, reference_jd - elapsed, "previous new moon")?;
    let end_nm = refine_new_moon(provider, reference_jd + (29.0 - elapsed), "next new moon")?;
    LunarMonth::between(provider, start_nm, end_nm)
}

/// Resolve the lunar month containing `reference_jd`, given the tithi
/// ordinal (1..=30) in force there.
pub fn resolve_masa<P>(provider: &P, tithi_ordinal: u8, reference_jd: f64) -> Result<MasaResolution, SearchError>
where
    P: EphemerisProvider + ?Sized,
{
    resolve_lunar_month(provider, tithi_ordinal, reference_jd).map(|m| m.resolution)
}

/// Lunar month in force at an instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MasaInfo {
    /// Amanta masa.
    pub masa: Masa,
    /// 0-based Amanta index (0 = Chaitra).
    pub index: u8,
    pub name: &'static str,
    pub name_localized: Option<String>,
    /// Purnimanta masa for the tithi at the query instant.
    pub purnimanta_masa: Masa,
    /// 1-based month index before the Amanta shift.
    pub month_index: u8,
    pub is_leap_month: bool,
    /// Opening new moon.
    pub start: CivilTime,
    /// Closing new moon.
    pub end: CivilTime,
    pub start_jd: f64,
    pub end_jd: f64,
}

/// Masa for the instant `jd_ut`, reported at `offset_hours`.
pub fn masa_for_date<P>(provider: &P, jd_ut: f64, offset_hours: f64) -> Result<MasaInfo, SearchError>
where
    P: EphemerisProvider + ?Sized,
{
    let tithi = tithi_from_elongation(lunar_phase_at(provider, jd_ut)?);
    masa_info_for_ordinal(provider, tithi.ordinal(), jd_ut, offset_hours)
}

/// [`masa_for_date`] with the tithi ordinal already known, as after the
/// sunrise skip correction.
pub(crate) fn masa_info_for_ordinal<P>(
    provider: &P,
    tithi_ordinal: u8,
    jd_ut: f64,
    offset_hours: f64,
) -> Result<MasaInfo, SearchError>
where
    P: EphemerisProvider + ?Sized,
{
    let month = resolve_lunar_month(provider, tithi_ordinal, jd_ut)?;
    let masa = month.resolution.amanta_masa();
    Ok(MasaInfo {
        masa,
        index: masa.index(),
        name: masa.name(),
        name_localized: None,
        purnimanta_masa: month.resolution.purnimanta_masa(tithi_ordinal),
        month_index: month.resolution.month_index,
        is_leap_month: month.resolution.is_leap_month,
        start: CivilTime::from_jd_ut(month.start_nm, offset_hours),
        end: CivilTime::from_jd_ut(month.end_nm, offset_hours),
        start_jd: month.start_nm,
        end_jd: month.end_nm,
    })
}

/// UT interval of the ritu containing `info`'s lunar month: the run of
/// adjacent lunar months whose Amanta masa falls in the same ritu.
pub(crate) fn ritu_span<P>(provider: &P, info: &MasaInfo) -> Result<(f64, f64), SearchError>
where
    P: EphemerisProvider + ?Sized,
{
    let ritu = info.masa.ritu();
    let (mut start, mut end) = (info.start_jd, info.end_jd);

    for _ in 0..MAX_RITU_EXTENSION {
        let prev = prev_amavasya(provider, start - NEW_MOON_NUDGE_DAYS)?
            .ok_or(SearchError::NoCrossingFound("new moon before ritu"))?;
        let month = LunarMonth::between(provider, prev.jd, start)?;
        if month.resolution.amanta_masa().ritu() != ritu {
            break;
        }
        start = prev.jd;
    }
    for _ in 0..MAX_RITU_EXTENSION {
        let next = next_amavasya(provider, end + NEW_MOON_NUDGE_DAYS)?
            .ok_or(SearchError::NoCrossingFound("new moon after ritu"))?;
        let month = LunarMonth::between(provider, end, next.jd)?;
        if month.resolution.amanta_masa().ritu() != ritu {
            break;
        }
        end = next.jd;
    }
    debug!(?ritu, start, end, "ritu span");
    Ok((start, end))
}
