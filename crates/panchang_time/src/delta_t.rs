//! ΔT = TT − UT from the Espenak–Meeus polynomial expressions.
//!
//! Source: Espenak & Meeus, *Five Millennium Canon of Solar Eclipses*
//! (NASA/TP-2006-214141), section 2.6. Good to a few seconds over
//! 1600–2050; extrapolated parabolically outside −500..2150.

use crate::julian::{J2000_JD, SECONDS_PER_DAY};

/// Decimal Gregorian year of a Julian Day.
fn decimal_year(jd: f64) -> f64 {
    2000.0 + (jd - J2000_JD) / 365.25
}

fn long_term(y: f64) -> f64 {
    let u = (y - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u
}

/// Evaluate `c[0] + c[1]·t + c[2]·t² + …` by Horner's rule.
fn poly(t: f64, c: &[f64]) -> f64 {
    c.iter().rev().fold(0.0, |acc, &k| acc * t + k)
}

/// ΔT in seconds for a decimal year.
fn delta_t_for_year(y: f64) -> f64 {
    if y < -500.0 {
        long_term(y)
    } else if y < 500.0 {
        poly(
            y / 100.0,
            &[
                10583.6,
                -1014.41,
                33.78311,
                -5.952053,
                -0.1798452,
                0.022174192,
                0.0090316521,
            ],
        )
    } else if y < 1600.0 {
        poly(
            (y - 1000.0) / 100.0,
            &[
                1574.2,
                -556.01,
                71.23472,
                0.319781,
                -0.8503463,
                -0.005050998,
                0.0083572073,
            ],
        )
    } else if y < 1700.0 {
        poly(y - 1600.0, &[120.0, -0.9808, -0.01532, 1.0 / 7129.0])
    } else if y < 1800.0 {
        poly(
            y - 1700.0,
            &[8.83, 0.1603, -0.0059285, 0.00013336, -1.0 / 1_174_000.0],
        )
    } else if y < 1860.0 {
        poly(
            y - 1800.0,
            &[
                13.72,
                -0.332447,
                0.0068612,
                0.0041116,
                -0.00037436,
                0.0000121272,
                -0.0000001699,
                0.000000000875,
            ],
        )
    } else if y < 1900.0 {
        poly(
            y - 1860.0,
            &[
                7.62,
                0.5737,
                -0.251754,
                0.01680668,
                -0.0004473624,
                1.0 / 233_174.0,
            ],
        )
    } else if y < 1920.0 {
        poly(
            y - 1900.0,
            &[-2.79, 1.494119, -0.0598939, 0.0061966, -0.000197],
        )
    } else if y < 1941.0 {
        poly(y - 1920.0, &[21.20, 0.84493, -0.076100, 0.0020936])
    } else if y < 1961.0 {
        poly(y - 1950.0, &[29.07, 0.407, -1.0 / 233.0, 1.0 / 2547.0])
    } else if y < 1986.0 {
        poly(y - 1975.0, &[45.45, 1.067, -1.0 / 260.0, -1.0 / 718.0])
    } else if y < 2005.0 {
        poly(
            y - 2000.0,
            &[
                63.86,
                0.3345,
                -0.060374,
                0.0017275,
                0.000651814,
                0.00002373599,
            ],
        )
    } else if y < 2050.0 {
        poly(y - 2000.0, &[62.92, 0.32217, 0.005589])
    } else if y < 2150.0 {
        long_term(y) - 0.5628 * (2150.0 - y)
    } else {
        long_term(y)
    }
}

/// ΔT in seconds at a UT Julian Day.
pub fn delta_t_seconds(jd_ut: f64) -> f64 {
    delta_t_for_year(decimal_year(jd_ut))
}

/// ΔT in hours at a UT Julian Day.
pub fn delta_t_hours(jd_ut: f64) -> f64 {
    delta_t_seconds(jd_ut) / 3600.0
}

/// ΔT in days, the form added to a UT Julian Day to obtain TT.
pub fn delta_t_days(jd_ut: f64) -> f64 {
    delta_t_seconds(jd_ut) / SECONDS_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_2000_value() {
        assert!((delta_t_for_year(2000.0) - 63.86).abs() < 1e-9);
    }

    #[test]
    fn modern_era_is_about_a_minute() {
        // 2024: polynomial gives ~73.9 s (observed ~69 s)
        let dt = delta_t_seconds(2_460_310.5);
        assert!((60.0..80.0).contains(&dt), "ΔT(2024) = {dt}");
    }

    #[test]
    fn nineteen_hundred_is_small() {
        let dt = delta_t_for_year(1900.0);
        assert!((dt + 2.79).abs() < 1e-9, "ΔT(1900) = {dt}");
    }

    #[test]
    fn segments_join_smoothly() {
        for &y in &[1600.0, 1700.0, 1800.0, 1860.0, 1900.0, 1920.0, 1941.0, 1961.0, 1986.0, 2005.0, 2050.0] {
            let below = delta_t_for_year(y - 1e-6);
            let above = delta_t_for_year(y + 1e-6);
            assert!(
                (below - above).abs() < 2.0,
                "discontinuity at {y}: {below} vs {above}"
            );
        }
    }

    #[test]
    fn unit_conversions_agree() {
        let jd = 2_455_000.5;
        assert!((delta_t_hours(jd) * 3600.0 - delta_t_seconds(jd)).abs() < 1e-9);
        assert!((delta_t_days(jd) * 86_400.0 - delta_t_seconds(jd)).abs() < 1e-9);
    }

    #[test]
    fn ancient_dates_grow_large() {
        assert!(delta_t_for_year(-1000.0) > 20_000.0);
    }
}
