//! Rise and set times by hour-angle iteration.
//!
//! Start from the body's transit near an anchor instant, step back (rise)
//! or forward (set) by the semi-diurnal arc, then correct with the actual
//! hour angle from GMST until the step is below [`CONVERGENCE_DAYS`].
//! Positions are re-evaluated every iteration, so the same loop serves the
//! Sun and the fast-moving Moon.

use panchang_time::local_sidereal_time_deg;

/// Maximum refinement iterations.
const MAX_ITERATIONS: usize = 8;

/// Convergence threshold in days (~0.086 s).
const CONVERGENCE_DAYS: f64 = 1.0e-6;

/// Rate of change of sidereal time, degrees per solar day.
const SIDEREAL_RATE_DEG_PER_DAY: f64 = 360.985_647_366_29;

/// Mean Earth radius in meters, for horizon dip.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Refraction (34′) plus solar semidiameter (16′).
pub const SUN_STANDARD_ALTITUDE_DEG: f64 = -50.0 / 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiseSetEvent {
    Rise,
    Set,
}

impl RiseSetEvent {
    pub fn is_rising(self) -> bool {
        matches!(self, Self::Rise)
    }
}

/// Result of one rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RiseSetOutcome {
    /// The event occurs at this Julian Day (UT).
    Event(f64),
    /// The body stays below the horizon.
    NeverRises,
    /// The body stays above the horizon.
    NeverSets,
}

impl RiseSetOutcome {
    pub fn jd(self) -> Option<f64> {
        match self {
            Self::Event(jd) => Some(jd),
            Self::NeverRises | Self::NeverSets => None,
        }
    }
}

/// Topocentric apparent place needed by the iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizonPlace {
    pub ra_deg: f64,
    pub dec_deg: f64,
    /// Altitude of the body's center at the moment of rise/set.
    pub standard_altitude_deg: f64,
}

/// Approximate local solar noon JD from 0h UT JD and east longitude.
pub fn approximate_local_noon_jd(jd_ut_midnight: f64, longitude_deg: f64) -> f64 {
    jd_ut_midnight + 0.5 - longitude_deg / 360.0
}

/// Geometric dip of the horizon for an observer `elevation_m` above the
/// surrounding terrain, degrees.
pub fn horizon_dip_deg(elevation_m: f64) -> f64 {
    if elevation_m > 0.0 {
        (2.0 * elevation_m / EARTH_RADIUS_M).sqrt().to_degrees()
    } else {
        0.0
    }
}

/// Standard altitude of the Moon's center (Meeus 15.1), degrees.
pub fn moon_standard_altitude_deg(parallax_deg: f64) -> f64 {
    0.7275 * parallax_deg - 34.0 / 60.0
}

fn pm180(deg: f64) -> f64 {
    let r = (deg + 180.0).rem_euclid(360.0) - 180.0;
    if r >= 180.0 { r - 360.0 } else { r }
}

/// Semi-diurnal arc in degrees, or the polar outcome.
fn semi_diurnal_arc(lat_deg: f64, place: &HorizonPlace) -> Result<f64, RiseSetOutcome> {
    let phi = lat_deg.to_radians();
    let dec = place.dec_deg.to_radians();
    let h0 = place.standard_altitude_deg.to_radians();
    let cos_h = (h0.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos());
    if cos_h > 1.0 {
        return Err(RiseSetOutcome::NeverRises);
    }
    if cos_h < -1.0 {
        return Err(RiseSetOutcome::NeverSets);
    }
    Ok(cos_h.acos().to_degrees())
}

/// Compute one rise or set near the transit closest to `jd_ut_anchor`.
///
/// `place_at` returns the body's apparent place at a UT Julian Day.
pub fn compute_rise_set<F>(
    place_at: F,
    latitude_deg: f64,
    longitude_deg: f64,
    event: RiseSetEvent,
    jd_ut_anchor: f64,
) -> RiseSetOutcome
where
    F: Fn(f64) -> HorizonPlace,
{
    let place = place_at(jd_ut_anchor);
    let arc = match semi_diurnal_arc(latitude_deg, &place) {
        Ok(arc) => arc,
        Err(outcome) => return outcome,
    };

    let ha_anchor = pm180(local_sidereal_time_deg(jd_ut_anchor, longitude_deg) - place.ra_deg);
    let jd_transit = jd_ut_anchor - ha_anchor / SIDEREAL_RATE_DEG_PER_DAY;
    let arc_days = arc / SIDEREAL_RATE_DEG_PER_DAY;
    let mut jd = if event.is_rising() {
        jd_transit - arc_days
    } else {
        jd_transit + arc_days
    };

    for _ in 0..MAX_ITERATIONS {
        let place = place_at(jd);
        let arc = match semi_diurnal_arc(latitude_deg, &place) {
            Ok(arc) => arc,
            Err(outcome) => return outcome,
        };
        let ha_actual = pm180(local_sidereal_time_deg(jd, longitude_deg) - place.ra_deg);
        let ha_target = if event.is_rising() { -arc } else { arc };
        let correction = pm180(ha_target - ha_actual) / SIDEREAL_RATE_DEG_PER_DAY;
        jd += correction;
        if correction.abs() < CONVERGENCE_DAYS {
            break;
        }
    }

    RiseSetOutcome::Event(jd)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(ra: f64, dec: f64) -> impl Fn(f64) -> HorizonPlace {
        move |_| HorizonPlace {
            ra_deg: ra,
            dec_deg: dec,
            standard_altitude_deg: 0.0,
        }
    }

    #[test]
    fn equator_star_is_up_half_a_sidereal_day() {
        let anchor = 2_460_000.0;
        let rise = compute_rise_set(fixed(0.0, 0.0), 0.0, 0.0, RiseSetEvent::Rise, anchor);
        let set = compute_rise_set(fixed(0.0, 0.0), 0.0, 0.0, RiseSetEvent::Set, anchor);
        let up = set.jd().unwrap() - rise.jd().unwrap();
        assert!((up - 180.0 / SIDEREAL_RATE_DEG_PER_DAY).abs() < 1e-5, "up {up}");
    }

    #[test]
    fn circumpolar_never_sets() {
        let r = compute_rise_set(fixed(0.0, 80.0), 70.0, 0.0, RiseSetEvent::Rise, 2_460_000.0);
        assert_eq!(r, RiseSetOutcome::NeverSets);
    }

    #[test]
    fn southern_star_never_rises_in_arctic() {
        let r = compute_rise_set(fixed(0.0, -40.0), 70.0, 0.0, RiseSetEvent::Set, 2_460_000.0);
        assert_eq!(r, RiseSetOutcome::NeverRises);
    }

    #[test]
    fn noon_shifts_west() {
        let jd0 = 2_460_000.5;
        assert!((approximate_local_noon_jd(jd0, -90.0) - (jd0 + 0.75)).abs() < 1e-12);
    }

    #[test]
    fn dip_at_sea_level_is_zero() {
        assert_eq!(horizon_dip_deg(0.0), 0.0);
        let d = horizon_dip_deg(500.0);
        assert!((0.6..0.8).contains(&d), "dip {d}");
    }

    #[test]
    fn moon_altitude_typical() {
        // Meeus 15: h0 ≈ +0.125° for mean parallax
        assert!((moon_standard_altitude_deg(0.9507) - 0.1250).abs() < 1e-3);
    }
}
