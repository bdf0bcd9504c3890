//! Angle normalization and angle → element-index mapping.
//!
//! Every element lookup in the workspace funnels through these helpers so
//! the 0°/360° wrap is handled in one place.

/// Normalize an angle to [0, 360) degrees.
///
/// Works for negative input. A tiny negative value whose `rem_euclid`
/// rounds up to exactly 360.0 is folded back to 0.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

/// Normalize an angle to [-180, 180) degrees.
pub fn normalize_to_pm180(deg: f64) -> f64 {
    normalize_360(deg + 180.0) - 180.0
}

/// Moon − Sun elongation in [0, 360).
///
/// The ayanamsha cancels in the difference, so tropical and sidereal inputs
/// give the same phase as long as both longitudes use the same frame.
pub fn lunar_phase_angle(moon_lon_deg: f64, sun_lon_deg: f64) -> f64 {
    normalize_360(moon_lon_deg - sun_lon_deg)
}

/// Sidereal longitude from a tropical longitude and a positive ayanamsha.
///
/// sidereal = tropical − ayanamsha. Lahiri at J2000 is ≈ +23.85°, so the
/// tropical Sun at 280° on 2000-01-01 sits at ≈ 256° sidereal (Dhanu).
pub fn sidereal_longitude(tropical_deg: f64, ayanamsha_deg: f64) -> f64 {
    normalize_360(tropical_deg - ayanamsha_deg)
}

/// Number of elements of width `degrees_per_element` in a full circle.
pub fn element_count(degrees_per_element: f64) -> u32 {
    (360.0 / degrees_per_element).round() as u32
}

/// `floor(angle / width)` on the normalized angle, clamped to the last
/// element so that floating-point overshoot can never yield `count`.
pub fn element_index_from_angle(angle_deg: f64, degrees_per_element: f64) -> u8 {
    let count = element_count(degrees_per_element).max(1);
    let raw = (normalize_360(angle_deg) / degrees_per_element).floor() as u32;
    raw.min(count - 1) as u8
}

/// Degrees already travelled inside the current element.
pub fn degrees_into_element(angle_deg: f64, degrees_per_element: f64) -> f64 {
    let lon = normalize_360(angle_deg);
    let idx = element_index_from_angle(lon, degrees_per_element);
    lon - idx as f64 * degrees_per_element
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_zero() {
        assert_eq!(normalize_360(0.0), 0.0);
    }

    #[test]
    fn normalize_full_turn_wraps() {
        assert_eq!(normalize_360(360.0), 0.0);
        assert!((normalize_360(730.0) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn normalize_negative() {
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-12);
        assert!((normalize_360(-370.0) - 350.0).abs() < 1e-10);
    }

    #[test]
    fn normalize_tiny_negative_stays_in_range() {
        let r = normalize_360(-1e-18);
        assert!((0.0..360.0).contains(&r), "got {r}");
    }

    #[test]
    fn pm180_range() {
        assert_eq!(normalize_to_pm180(180.0), -180.0);
        assert!((normalize_to_pm180(359.0) + 1.0).abs() < 1e-12);
        assert!((normalize_to_pm180(-181.0) - 179.0).abs() < 1e-12);
    }

    #[test]
    fn phase_wraps_when_moon_behind_longitude_zero() {
        // Moon at 5°, Sun at 350° → 15° elongation
        assert!((lunar_phase_angle(5.0, 350.0) - 15.0).abs() < 1e-12);
    }

    #[test]
    fn sidereal_subtracts_ayanamsha() {
        assert!((sidereal_longitude(280.0, 23.85) - 256.15).abs() < 1e-10);
        assert!((sidereal_longitude(10.0, 23.85) - 346.15).abs() < 1e-10);
    }

    #[test]
    fn index_floor_and_clamp() {
        assert_eq!(element_index_from_angle(0.0, 12.0), 0);
        assert_eq!(element_index_from_angle(11.999, 12.0), 0);
        assert_eq!(element_index_from_angle(12.0, 12.0), 1);
        assert_eq!(element_index_from_angle(359.999_999_999, 12.0), 29);
        assert_eq!(element_index_from_angle(-0.5, 12.0), 29);
        assert_eq!(element_index_from_angle(359.999_999_999_999_9, 360.0 / 27.0), 26);
    }

    #[test]
    fn element_counts() {
        assert_eq!(element_count(12.0), 30);
        assert_eq!(element_count(360.0 / 27.0), 27);
        assert_eq!(element_count(6.0), 60);
        assert_eq!(element_count(30.0), 12);
    }

    #[test]
    fn degrees_into() {
        assert!((degrees_into_element(25.0, 12.0) - 1.0).abs() < 1e-12);
    }
}
