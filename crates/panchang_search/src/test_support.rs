//! Deterministic provider with linear motion for exact-value tests.

use panchang_base::{Body, EphemerisError, EphemerisProvider, Location, RiseSet, normalize_360};
use panchang_time::CivilDate;

pub(crate) const EPOCH: f64 = 2_451_545.0;
pub(crate) const SYNODIC_DAYS: f64 = 29.53;
pub(crate) const SUN_RATE: f64 = 360.0 / 365.25;
pub(crate) const MOON_RATE: f64 = SUN_RATE + 360.0 / SYNODIC_DAYS;
pub(crate) const AYANAMSHA: f64 = 24.0;

/// Sun and Moon at constant rates; new moon at [`EPOCH`] (plus offset).
/// Sunrise is 06:00 and sunset 18:00 local every day.
pub(crate) struct LinearEphemeris {
    pub sun_at_epoch_deg: f64,
    pub elongation_at_epoch_deg: f64,
}

impl Default for LinearEphemeris {
    fn default() -> Self {
        Self {
            sun_at_epoch_deg: 280.0,
            elongation_at_epoch_deg: 0.0,
        }
    }
}

impl EphemerisProvider for LinearEphemeris {
    fn tropical_longitude(&self, body: Body, jd_ut: f64) -> Result<f64, EphemerisError> {
        let days = jd_ut - EPOCH;
        match body {
            Body::Sun => Ok(normalize_360(self.sun_at_epoch_deg + SUN_RATE * days)),
            Body::Moon => Ok(normalize_360(
                self.sun_at_epoch_deg + self.elongation_at_epoch_deg + MOON_RATE * days,
            )),
            Body::MeanNode => Ok(normalize_360(125.0 - 0.052_95 * days)),
            other => Err(EphemerisError::Unsupported(other)),
        }
    }

    fn ayanamsha(&self, _jd_ut: f64) -> Result<f64, EphemerisError> {
        Ok(AYANAMSHA)
    }

    fn sun_times(&self, date: CivilDate, location: &Location) -> Result<RiseSet, EphemerisError> {
        let midnight = date.jd_midnight_ut(location.utc_offset_hours);
        Ok(RiseSet {
            rise_jd: Some(midnight + 0.25),
            set_jd: Some(midnight + 0.75),
        })
    }
}

/// Provider whose Moon fails inside a JD window.
pub(crate) struct FlakyEphemeris {
    pub inner: LinearEphemeris,
    pub fail_from: f64,
    pub fail_to: f64,
}

impl EphemerisProvider for FlakyEphemeris {
    fn tropical_longitude(&self, body: Body, jd_ut: f64) -> Result<f64, EphemerisError> {
        if body == Body::Moon && (self.fail_from..self.fail_to).contains(&jd_ut) {
            return Err(EphemerisError::Unavailable { body, jd: jd_ut });
        }
        self.inner.tropical_longitude(body, jd_ut)
    }

    fn ayanamsha(&self, jd_ut: f64) -> Result<f64, EphemerisError> {
        self.inner.ayanamsha(jd_ut)
    }

    fn sun_times(&self, date: CivilDate, location: &Location) -> Result<RiseSet, EphemerisError> {
        self.inner.sun_times(date, location)
    }
}

pub(crate) fn utc_location() -> Location {
    Location::new(0.0, 0.0, 0.0, 0.0)
}
