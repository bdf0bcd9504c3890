//! New moon (Amavasya) and full moon (Purnima) search.

use panchang_base::EphemerisProvider;
use panchang_time::CivilTime;
use serde::Serialize;

use crate::error::SearchError;
use crate::phase::lunar_phase_at;
use crate::search_util::{find_phase_crossing, find_phase_crossing_backward};

/// One synodic month plus margin.
pub(crate) const LUNATION_WINDOW_DAYS: f64 = 32.0;

/// Elongation moves at most ~15.4°/day, so half a day never skips a crossing.
pub(crate) const PHASE_SCAN_STEP_DAYS: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LunarPhase {
    /// Elongation 0°.
    Amavasya,
    /// Elongation 180°.
    Purnima,
}

impl LunarPhase {
    pub const fn elongation_deg(self) -> f64 {
        match self {
            Self::Amavasya => 0.0,
            Self::Purnima => 180.0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Amavasya => "Amavasya",
            Self::Purnima => "Purnima",
        }
    }
}

/// A new or full moon instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LunarPhaseEvent {
    pub phase: LunarPhase,
    /// Julian Day (UT).
    pub jd: f64,
}

impl LunarPhaseEvent {
    pub fn time(&self, offset_hours: f64) -> CivilTime {
        CivilTime::from_jd_ut(self.jd, offset_hours)
    }
}

fn next_phase<P>(provider: &P, jd_ut: f64, phase: LunarPhase) -> Result<Option<LunarPhaseEvent>, SearchError>
where
    P: EphemerisProvider + ?Sized,
{
    let found = find_phase_crossing(
        jd_ut,
        jd_ut + LUNATION_WINDOW_DAYS,
        phase.elongation_deg(),
        PHASE_SCAN_STEP_DAYS,
        |jd| lunar_phase_at(provider, jd),
    )?;
    Ok(found.map(|jd| LunarPhaseEvent { phase, jd }))
}

fn prev_phase<P>(provider: &P, jd_ut: f64, phase: LunarPhase) -> Result<Option<LunarPhaseEvent>, SearchError>
where
    P: EphemerisProvider + ?Sized,
{
    let found = find_phase_crossing_backward(
        jd_ut,
        LUNATION_WINDOW_DAYS,
        phase.elongation_deg(),
        PHASE_SCAN_STEP_DAYS,
        |jd| lunar_phase_at(provider, jd),
    )?;
    Ok(found.map(|jd| LunarPhaseEvent { phase, jd }))
}

/// Next new moon after `jd_ut`.
pub fn next_amavasya<P>(provider: &P, jd_ut: f64) -> Result<Option<LunarPhaseEvent>, SearchError>
where
    P: EphemerisProvider + ?Sized,
{
    next_phase(provider, jd_ut, LunarPhase::Amavasya)
}

/// Latest new moon at or before `jd_ut`.
pub fn prev_amavasya<P>(provider: &P, jd_ut: f64) -> Result<Option<LunarPhaseEvent>, SearchError>
where
    P: EphemerisProvider + ?Sized,
{
    prev_phase(provider, jd_ut, LunarPhase::Amavasya)
}

/// Next full moon after `jd_ut`.
pub fn next_purnima<P>(provider: &P, jd_ut: f64) -> Result<Option<LunarPhaseEvent>, SearchError>
where
    P: EphemerisProvider + ?Sized,
{
    next_phase(provider, jd_ut, LunarPhase::Purnima)
}

/// Latest full moon at or before `jd_ut`.
pub fn prev_purnima<P>(provider: &P, jd_ut: f64) -> Result<Option<LunarPhaseEvent>, SearchError>
where
    P: EphemerisProvider + ?Sized,
{
    prev_phase(provider, jd_ut, LunarPhase::Purnima)
}

fn search_phase<P>(
    provider: &P,
    start_jd: f64,
    end_jd: f64,
    phase: LunarPhase,
) -> Result<Vec<LunarPhaseEvent>, SearchError>
where
    P: EphemerisProvider + ?Sized,
{
    let mut events = Vec::new();
    let mut cursor = start_jd;
    while cursor < end_jd {
        match next_phase(provider, cursor, phase)? {
            Some(ev) if ev.jd < end_jd => {
                cursor = ev.jd + 1.0;
                events.push(ev);
            }
            _ => break,
        }
    }
    Ok(events)
}

/// All new moons in `[start_jd, end_jd)`.
pub fn search_amavasyas<P>(provider: &P, start_jd: f64, end_jd: f64) -> Result<Vec<LunarPhaseEvent>, SearchError>
where
    P: EphemerisProvider + ?Sized,
{
    search_phase(provider, start_jd, end_jd, LunarPhase::Amavasya)
}

/// All full moons in `[start_jd, end_jd)`.
pub fn search_purnimas<P>(provider: &P, start_jd: f64, end_jd: f64) -> Result<Vec<LunarPhaseEvent>, SearchError>
where
    P: EphemerisProvider + ?Sized,
{
    search_phase(provider, start_jd, end_jd, LunarPhase::Purnima)
}
