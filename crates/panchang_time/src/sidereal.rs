//! Greenwich Mean Sidereal Time and Earth Rotation Angle.
//!
//! Needed by rise/set calculations to turn right ascension into an hour
//! angle. All functions take UT Julian Days and return degrees in [0, 360).
//!
//! Sources:
//! - ERA: IERS Conventions 2010, Eq. 5.15.
//! - GMST polynomial: Capitaine et al. 2003, Table 2.

use crate::julian::{J2000_JD, jd_to_centuries};

/// Earth Rotation Angle in degrees.
///
/// θ = 360° × (0.7790572732640 + 1.00273781191135448 × Du),
/// Du = JD_UT − 2451545.0.
pub fn earth_rotation_angle_deg(jd_ut: f64) -> f64 {
    let du = jd_ut - J2000_JD;
    let turns = 0.779_057_273_264_0 + 1.002_737_811_911_354_6 * du;
    (turns.rem_euclid(1.0) * 360.0).rem_euclid(360.0)
}

/// Greenwich Mean Sidereal Time in degrees.
///
/// GMST = ERA + polynomial(T) with the polynomial in arcseconds:
///   0.014506 + 4612.156534·T + 1.3915817·T² − 0.00000044·T³
///   − 0.000029956·T⁴ − 0.0000000368·T⁵
pub fn gmst_deg(jd_ut: f64) -> f64 {
    let t = jd_to_centuries(jd_ut);
    let poly_arcsec = 0.014506
        + t * (4612.156534
            + t * (1.3915817 + t * (-0.00000044 + t * (-0.000029956 - 0.0000000368 * t))));
    (earth_rotation_angle_deg(jd_ut) + poly_arcsec / 3600.0).rem_euclid(360.0)
}

/// Local mean sidereal time for an observer at `longitude_east_deg`.
pub fn local_sidereal_time_deg(jd_ut: f64, longitude_east_deg: f64) -> f64 {
    (gmst_deg(jd_ut) + longitude_east_deg).rem_euclid(360.0)
}
