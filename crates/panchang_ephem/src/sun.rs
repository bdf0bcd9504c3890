//! Low-precision solar coordinates.
//!
//! Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 25. Accuracy about
//! 0.01° in longitude, enough to place a sankranti within a few minutes.

use panchang_time::jd_to_centuries;

use crate::nutation::normalize_deg;

/// Geocentric solar position at an instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    /// Geometric true longitude, mean equinox of date.
    pub true_longitude_deg: f64,
    /// Apparent longitude: aberration and nutation applied.
    pub apparent_longitude_deg: f64,
    /// Earth–Sun distance in AU.
    pub distance_au: f64,
}

/// Solar position at a Julian Day in TT.
pub fn sun_position(jd_tt: f64) -> SunPosition {
    let t = jd_to_centuries(jd_tt);

    let l0 = 280.46646 + t * (36_000.76983 + 0.0003032 * t);
    let m = 357.52911 + t * (35_999.05029 - 0.0001537 * t);
    let e = 0.016_708_634 - t * (0.000_042_037 + 0.000_000_126_7 * t);

    let m_rad = m.to_radians();
    let c = (1.914602 - t * (0.004817 + 0.000014 * t)) * m_rad.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m_rad).sin()
        + 0.000289 * (3.0 * m_rad).sin();

    let true_lon = l0 + c;
    let nu = (m + c).to_radians();
    let distance_au = 1.000_001_018 * (1.0 - e * e) / (1.0 + e * nu.cos());

    let omega = (125.04 - 1934.136 * t).to_radians();
    let apparent = true_lon - 0.00569 - 0.00478 * omega.sin();

    SunPosition {
        true_longitude_deg: normalize_deg(true_lon),
        apparent_longitude_deg: normalize_deg(apparent),
        distance_au,
    }
}
