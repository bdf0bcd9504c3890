//! The ephemeris provider contract consumed by every search.
//!
//! Providers supply tropical longitudes, the ayanamsha and rise/set times.
//! Sun and Moon are mandatory; a provider that cannot serve a planet
//! reports [`EphemerisError::Unsupported`] and callers drop that body.

use panchang_time::{CivilDate, delta_t_hours};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::angle::sidereal_longitude;
use crate::location::Location;

/// Bodies a provider may be asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
    /// Mean ascending lunar node (Rahu).
    MeanNode,
}

impl Body {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mars => "Mars",
            Self::Mercury => "Mercury",
            Self::Jupiter => "Jupiter",
            Self::Venus => "Venus",
            Self::Saturn => "Saturn",
            Self::MeanNode => "Mean Node",
        }
    }
}

/// Errors from an ephemeris provider.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The provider failed for this body and instant.
    #[error("ephemeris unavailable for {} at JD {jd}", .body.name())]
    Unavailable { body: Body, jd: f64 },
    /// The provider never serves this body.
    #[error("{} not supported by this provider", .0.name())]
    Unsupported(Body),
    /// The body does not rise or set on this date at this latitude.
    #[error("no rise/set at this latitude on this date")]
    Polar,
}

/// Rise and set instants (JD UT) for one civil date.
///
/// Either may be absent: the Moon skips a rise or a set roughly once a month.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RiseSet {
    pub rise_jd: Option<f64>,
    pub set_jd: Option<f64>,
}

/// Source of the raw astronomical quantities the engine classifies.
///
/// All Julian Days are UT. Implementations must be deterministic.
pub trait EphemerisProvider {
    /// Tropical geocentric ecliptic longitude in [0, 360).
    fn tropical_longitude(&self, body: Body, jd_ut: f64) -> Result<f64, EphemerisError>;

    /// Positive ayanamsha in degrees, subtracted from tropical longitudes.
    fn ayanamsha(&self, jd_ut: f64) -> Result<f64, EphemerisError>;

    /// Sunrise and sunset on the local civil `date` at `location`.
    fn sun_times(&self, date: CivilDate, location: &Location) -> Result<RiseSet, EphemerisError>;

    /// Moonrise and moonset on the local civil `date`.
    fn moon_times(&self, _date: CivilDate, _location: &Location) -> Result<RiseSet, EphemerisError> {
        Err(EphemerisError::Unsupported(Body::Moon))
    }

    /// TT − UT in hours.
    fn delta_t_hours(&self, jd_ut: f64) -> f64 {
        delta_t_hours(jd_ut)
    }

    /// Sidereal longitude: tropical − ayanamsha, in [0, 360).
    fn sidereal_longitude(&self, body: Body, jd_ut: f64) -> Result<f64, EphemerisError> {
        let tropical = self.tropical_longitude(body, jd_ut)?;
        let aya = self.ayanamsha(jd_ut)?;
        Ok(sidereal_longitude(tropical, aya))
    }
}

impl<P: EphemerisProvider + ?Sized> EphemerisProvider for &P {
    fn tropical_longitude(&self, body: Body, jd_ut: f64) -> Result<f64, EphemerisError> {
        (**self).tropical_longitude(body, jd_ut)
    }

    fn ayanamsha(&self, jd_ut: f64) -> Result<f64, EphemerisError> {
        (**self).ayanamsha(jd_ut)
    }

    fn sun_times(&self, date: CivilDate, location: &Location) -> Result<RiseSet, EphemerisError> {
        (**self).sun_times(date, location)
    }

    fn moon_times(&self, date: CivilDate, location: &Location) -> Result<RiseSet, EphemerisError> {
        (**self).moon_times(date, location)
    }

    fn delta_t_hours(&self, jd_ut: f64) -> f64 {
        (**self).delta_t_hours(jd_ut)
    }

    fn sidereal_longitude(&self, body: Body, jd_ut: f64) -> Result<f64, EphemerisError> {
        (**self).sidereal_longitude(body, jd_ut)
    }
}
