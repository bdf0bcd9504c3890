//! Driving angles read from a provider.
//!
//! Every element is a slice of one of these angles. Elongation uses
//! tropical longitudes since the ayanamsha cancels in the difference; the
//! sum, nakshatra and rashi angles are sidereal.

use panchang_base::{
    Body, EphemerisProvider, lunar_phase_angle, normalize_360, solar_month_index,
};

use crate::error::SearchError;

/// Moon − Sun elongation in [0, 360).
pub fn lunar_phase_at<P>(provider: &P, jd_ut: f64) -> Result<f64, SearchError>
where
    P: EphemerisProvider + ?Sized,
{
    let moon = provider.tropical_longitude(Body::Moon, jd_ut)?;
    let sun = provider.tropical_longitude(Body::Sun, jd_ut)?;
    Ok(lunar_phase_angle(moon, sun))
}

/// Sidereal longitude of the Moon.
pub fn moon_sidereal_at<P>(provider: &P, jd_ut: f64) -> Result<f64, SearchError>
where
    P: EphemerisProvider + ?Sized,
{
    Ok(provider.sidereal_longitude(Body::Moon, jd_ut)?)
}

/// Sidereal longitude of the Sun.
pub fn sun_sidereal_at<P>(provider: &P, jd_ut: f64) -> Result<f64, SearchError>
where
    P: EphemerisProvider + ?Sized,
{
    Ok(provider.sidereal_longitude(Body::Sun, jd_ut)?)
}

/// Sidereal Sun + Moon in [0, 360), the yoga angle.
pub fn sidereal_sum_at<P>(provider: &P, jd_ut: f64) -> Result<f64, SearchError>
where
    P: EphemerisProvider + ?Sized,
{
    let moon = provider.sidereal_longitude(Body::Moon, jd_ut)?;
    let sun = provider.sidereal_longitude(Body::Sun, jd_ut)?;
    Ok(normalize_360(moon + sun))
}

/// Solar month index 1..=12 at an instant.
pub fn solar_month_at<P>(provider: &P, jd_ut: f64) -> Result<u8, SearchError>
where
    P: EphemerisProvider + ?Sized,
{
    let sun = provider.tropical_longitude(Body::Sun, jd_ut)?;
    let aya = provider.ayanamsha(jd_ut)?;
    Ok(solar_month_index(sun, aya))
}
