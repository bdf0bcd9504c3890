//! Almanac checks for the analytic provider.

use panchang_base::{Body, EphemerisError, EphemerisProvider, Location};
use panchang_ephem::AnalyticEphemeris;
use panchang_time::{CivilDate, CivilTime};

const IST: f64 = 5.5;

fn hyderabad() -> Location {
    Location::new(17.385, 78.4867, 0.0, IST)
}

fn local_minutes(jd: f64, offset: f64) -> f64 {
    let t = CivilTime::from_jd_ut(jd, offset);
    t.hour as f64 * 60.0 + t.minute as f64 + t.second / 60.0
}

#[test]
fn hyderabad_winter_sunrise() {
    // Published sunrise 2024-01-15 ≈ 06:52 IST.
    let eph = AnalyticEphemeris::default();
    let rs = eph.sun_times(CivilDate::new(2024, 1, 15), &hyderabad()).unwrap();
    let rise = local_minutes(rs.rise_jd.unwrap(), IST);
    assert!((6.0 * 60.0 + 40.0..7.0 * 60.0).contains(&rise), "sunrise {rise} min");
    let set = local_minutes(rs.set_jd.unwrap(), IST);
    assert!((17.0 * 60.0 + 55.0..18.0 * 60.0 + 15.0).contains(&set), "sunset {set} min");
}

#[test]
fn greenwich_equinox_sunrise() {
    // 2024-03-20 sunrise at Greenwich ≈ 06:02 UTC.
    let eph = AnalyticEphemeris::default();
    let loc = Location::new(51.4769, 0.0, 0.0, 0.0);
    let rs = eph.sun_times(CivilDate::new(2024, 3, 20), &loc).unwrap();
    let rise = local_minutes(rs.rise_jd.unwrap(), 0.0);
    assert!((5.0 * 60.0 + 55.0..6.0 * 60.0 + 10.0).contains(&rise), "sunrise {rise} min");
    assert!(rs.set_jd.unwrap() > rs.rise_jd.unwrap());
}

#[test]
fn polar_night_is_reported() {
    let eph = AnalyticEphemeris::default();
    let tromso = Location::new(69.65, 18.96, 0.0, 1.0);
    let err = eph.sun_times(CivilDate::new(2023, 12, 21), &tromso).unwrap_err();
    assert_eq!(err, EphemerisError::Polar);
}

#[test]
fn moon_events_fall_inside_the_local_day() {
    let eph = AnalyticEphemeris::default();
    let loc = hyderabad();
    let mut date = CivilDate::new(2024, 1, 1);
    let mut missing = 0;
    for _ in 0..30 {
        let start = date.jd_midnight_ut(IST);
        let rs = eph.moon_times(date, &loc).unwrap();
        for jd in [rs.rise_jd, rs.set_jd].into_iter().flatten() {
            assert!(jd >= start && jd < start + 1.0, "{date}: {jd}");
        }
        missing += usize::from(rs.rise_jd.is_none()) + usize::from(rs.set_jd.is_none());
        date = date.succ();
    }
    // One skipped rise and one skipped set per lunation at most.
    assert!(missing <= 3, "missing {missing}");
}

#[test]
fn new_moon_january_2024() {
    // New moon 2024-01-11 11:57 UTC: Sun and Moon longitudes coincide.
    let eph = AnalyticEphemeris::default();
    let jd = CivilTime::new(2024, 1, 11, 11, 57, 0.0, 0.0).to_jd_ut();
    let sun = eph.tropical_longitude(Body::Sun, jd).unwrap();
    let moon = eph.tropical_longitude(Body::Moon, jd).unwrap();
    let gap = (moon - sun + 180.0).rem_euclid(360.0) - 180.0;
    assert!(gap.abs() < 0.05, "elongation {gap}");
}
