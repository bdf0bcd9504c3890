//! Nutation, obliquity and ecliptic → equatorial conversion.
//!
//! Low-precision expressions from Meeus, Chapters 13 and 22.

use panchang_time::jd_to_centuries;

pub(crate) fn normalize_deg(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

/// Nutation in longitude and obliquity, both in degrees.
pub fn nutation_deg(jd_tt: f64) -> (f64, f64) {
    let t = jd_to_centuries(jd_tt);
    let omega = (125.04452 - 1934.136261 * t).to_radians();
    let l_sun = (280.4665 + 36_000.7698 * t).to_radians();
    let l_moon = (218.3165 + 481_267.8813 * t).to_radians();

    let dpsi = -17.20 * omega.sin() - 1.32 * (2.0 * l_sun).sin() - 0.23 * (2.0 * l_moon).sin()
        + 0.21 * (2.0 * omega).sin();
    let deps = 9.20 * omega.cos() + 0.57 * (2.0 * l_sun).cos() + 0.10 * (2.0 * l_moon).cos()
        - 0.09 * (2.0 * omega).cos();
    (dpsi / 3600.0, deps / 3600.0)
}

/// Mean obliquity of the ecliptic in degrees (IAU 1980, Meeus 22.2).
pub fn mean_obliquity_deg(jd_tt: f64) -> f64 {
    let t = jd_to_centuries(jd_tt);
    let arcsec = 21.448 - t * (46.8150 + t * (0.00059 - 0.001813 * t));
    23.0 + 26.0 / 60.0 + arcsec / 3600.0
}

/// True obliquity: mean obliquity plus nutation in obliquity.
pub fn true_obliquity_deg(jd_tt: f64) -> f64 {
    mean_obliquity_deg(jd_tt) + nutation_deg(jd_tt).1
}

/// Ecliptic (λ, β) → equatorial (α, δ), all in degrees, α in [0, 360).
pub fn ecliptic_to_equatorial(lon_deg: f64, lat_deg: f64, obliquity_deg: f64) -> (f64, f64) {
    let (l, b, e) = (lon_deg.to_radians(), lat_deg.to_radians(), obliquity_deg.to_radians());
    let ra = (l.sin() * e.cos() - b.tan() * e.sin()).atan2(l.cos());
    let dec = (b.sin() * e.cos() + b.cos() * e.sin() * l.sin()).asin();
    (normalize_deg(ra.to_degrees()), dec.to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_22a_low_precision() {
        // 1987 April 10.0 TD: Δψ = −3.788″, Δε = +9.443″, ε0 = 23°26′27.407″
        let (dpsi, deps) = nutation_deg(2_446_895.5);
        assert!((dpsi * 3600.0 + 3.788).abs() < 0.6, "Δψ = {}", dpsi * 3600.0);
        assert!((deps * 3600.0 - 9.443).abs() < 0.2, "Δε = {}", deps * 3600.0);
        let eps0 = mean_obliquity_deg(2_446_895.5);
        assert!((eps0 - 23.440_946).abs() < 1e-5, "ε0 = {eps0}");
    }

    #[test]
    fn meeus_example_13a() {
        // Pollux: λ = 113.215630°, β = 6.684170°, ε = 23.4392911° → α = 116.328942°, δ = 28.026183°
        let (ra, dec) = ecliptic_to_equatorial(113.215_630, 6.684_170, 23.439_291_1);
        assert!((ra - 116.328_942).abs() < 1e-5, "α = {ra}");
        assert!((dec - 28.026_183).abs() < 1e-5, "δ = {dec}");
    }

    #[test]
    fn equinox_point_maps_to_origin() {
        let (ra, dec) = ecliptic_to_equatorial(0.0, 0.0, 23.44);
        assert!(ra.abs() < 1e-12 || (360.0 - ra) < 1e-12);
        assert!(dec.abs() < 1e-12);
    }
}
