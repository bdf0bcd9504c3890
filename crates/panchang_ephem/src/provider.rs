//! [`AnalyticEphemeris`]: the series-based provider.

use panchang_base::{
    AyanamshaSystem, Body, EphemerisError, EphemerisProvider, Location, RiseSet, ayanamsha_at_jd,
};
use panchang_time::{CivilDate, calendar_to_jd, delta_t_days};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::moon::{horizontal_parallax_deg, moon_position};
use crate::nodes::mean_node_deg;
use crate::nutation::{ecliptic_to_equatorial, true_obliquity_deg};
use crate::riseset::{
    HorizonPlace, RiseSetEvent, RiseSetOutcome, SUN_STANDARD_ALTITUDE_DEG,
    approximate_local_noon_jd, compute_rise_set, horizon_dip_deg, moon_standard_altitude_deg,
};
use crate::sun::sun_position;

/// Low-precision Sun/Moon provider.
///
/// Sun and Moon come from the Meeus series, Rahu from the mean node. The
/// five visible planets are reported as [`EphemerisError::Unsupported`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticEphemeris {
    #[serde(default)]
    pub ayanamsha_system: AyanamshaSystem,
}

impl AnalyticEphemeris {
    pub fn new(ayanamsha_system: AyanamshaSystem) -> Self {
        Self { ayanamsha_system }
    }

    fn jd_tt(jd_ut: f64) -> f64 {
        jd_ut + delta_t_days(jd_ut)
    }

    fn sun_place(jd_ut: f64, dip_deg: f64) -> HorizonPlace {
        let jd_tt = Self::jd_tt(jd_ut);
        let sun = sun_position(jd_tt);
        let (ra, dec) = ecliptic_to_equatorial(sun.apparent_longitude_deg, 0.0, true_obliquity_deg(jd_tt));
        HorizonPlace {
            ra_deg: ra,
            dec_deg: dec,
            standard_altitude_deg: SUN_STANDARD_ALTITUDE_DEG - dip_deg,
        }
    }

    fn moon_place(jd_ut: f64, dip_deg: f64) -> HorizonPlace {
        let jd_tt = Self::jd_tt(jd_ut);
        let moon = moon_position(jd_tt);
        let (ra, dec) = ecliptic_to_equatorial(
            moon.apparent_longitude_deg,
            moon.latitude_deg,
            true_obliquity_deg(jd_tt),
        );
        let parallax = horizontal_parallax_deg(moon.distance_km);
        HorizonPlace {
            ra_deg: ra,
            dec_deg: dec,
            standard_altitude_deg: moon_standard_altitude_deg(parallax) - dip_deg,
        }
    }

    /// First lunar event of `kind` inside the local civil day.
    ///
    /// The Moon transits about 50 minutes later each day, so an event near
    /// a date edge may belong to the neighboring transit. Anchors at the
    /// previous, current and next local noon cover all cases.
    fn moon_event_in_day(
        date: CivilDate,
        location: &Location,
        kind: RiseSetEvent,
    ) -> Option<f64> {
        let day_start = date.jd_midnight_ut(location.utc_offset_hours);
        let day_end = day_start + 1.0;
        let noon = approximate_local_noon_jd(
            calendar_to_jd(date.year, date.month, date.day as f64),
            location.longitude_deg,
        );
        let dip = horizon_dip_deg(location.elevation_m);

        [-1.0, 0.0, 1.0]
            .iter()
            .filter_map(|&shift| {
                compute_rise_set(
                    |jd| Self::moon_place(jd, dip),
                    location.latitude_deg,
                    location.longitude_deg,
                    kind,
                    noon + shift,
                )
                .jd()
            })
            .filter(|jd| (day_start..day_end).contains(jd))
            .min_by(|a, b| a.total_cmp(b))
    }
}

impl EphemerisProvider for AnalyticEphemeris {
    fn tropical_longitude(&self, body: Body, jd_ut: f64) -> Result<f64, EphemerisError> {
        let jd_tt = Self::jd_tt(jd_ut);
        match body {
            Body::Sun => Ok(sun_position(jd_tt).apparent_longitude_deg),
            Body::Moon => Ok(moon_position(jd_tt).apparent_longitude_deg),
            Body::MeanNode => Ok(mean_node_deg(jd_tt)),
            Body::Mars | Body::Mercury | Body::Jupiter | Body::Venus | Body::Saturn => {
                Err(EphemerisError::Unsupported(body))
            }
        }
    }

    fn ayanamsha(&self, jd_ut: f64) -> Result<f64, EphemerisError> {
        Ok(ayanamsha_at_jd(self.ayanamsha_system, Self::jd_tt(jd_ut)))
    }

    fn sun_times(&self, date: CivilDate, location: &Location) -> Result<RiseSet, EphemerisError> {
        // Solar noon falls near the local civil noon for sane offsets, so the
        // UT noon of the civil date shifted by longitude anchors both events.
        let jd0 = calendar_to_jd(date.year, date.month, date.day as f64);
        let noon = approximate_local_noon_jd(jd0, location.longitude_deg);
        let dip = horizon_dip_deg(location.elevation_m);
        let place_at = |jd| Self::sun_place(jd, dip);

        let rise = compute_rise_set(
            &place_at,
            location.latitude_deg,
            location.longitude_deg,
            RiseSetEvent::Rise,
            noon,
        );
        let set = compute_rise_set(
            &place_at,
            location.latitude_deg,
            location.longitude_deg,
            RiseSetEvent::Set,
            noon,
        );

        match (rise, set) {
            (RiseSetOutcome::Event(r), RiseSetOutcome::Event(s)) => Ok(RiseSet {
                rise_jd: Some(r),
                set_jd: Some(s),
            }),
            (rise, set) => {
                debug!(%date, lat = location.latitude_deg, ?rise, ?set, "no sunrise/sunset");
                Err(EphemerisError::Polar)
            }
        }
    }

    fn moon_times(&self, date: CivilDate, location: &Location) -> Result<RiseSet, EphemerisError> {
        Ok(RiseSet {
            rise_jd: Self::moon_event_in_day(date, location, RiseSetEvent::Rise),
            set_jd: Self::moon_event_in_day(date, location, RiseSetEvent::Set),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planets_are_unsupported() {
        let eph = AnalyticEphemeris::default();
        let err = eph.tropical_longitude(Body::Jupiter, 2_460_000.5).unwrap_err();
        assert_eq!(err, EphemerisError::Unsupported(Body::Jupiter));
    }

    #[test]
    fn longitudes_in_range() {
        let eph = AnalyticEphemeris::default();
        for i in 0..50 {
            let jd = 2_451_545.0 + i as f64 * 37.3;
            for body in [Body::Sun, Body::Moon, Body::MeanNode] {
                let lon = eph.tropical_longitude(body, jd).unwrap();
                assert!((0.0..360.0).contains(&lon), "{body:?} {lon}");
            }
        }
    }

    #[test]
    fn sidereal_sun_at_j2000() {
        // Tropical ≈ 280.37°, Lahiri ≈ 23.85° → sidereal ≈ 256.5° (Dhanu)
        let eph = AnalyticEphemeris::default();
        let sid = eph.sidereal_longitude(Body::Sun, 2_451_545.0).unwrap();
        assert!((sid - 256.52).abs() < 0.05, "sid = {sid}");
    }
}
