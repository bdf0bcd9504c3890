//! Property tests for calendar ↔ Julian Day conversion.

use panchang_time::{CivilDate, CivilTime, calendar_to_jd, days_in_month, jd_to_calendar};
use proptest::prelude::*;

proptest! {
    #[test]
    fn calendar_round_trip(year in 1900i32..2100, month in 1u32..=12, day in 1u32..=28, frac in 0.0f64..1.0) {
        let jd = calendar_to_jd(year, month, day as f64 + frac);
        let (y, m, d) = jd_to_calendar(jd);
        prop_assert_eq!((y, m), (year, month));
        prop_assert!((d - (day as f64 + frac)).abs() * 86_400.0 < 1.0);
    }

    #[test]
    fn civil_time_round_trip(
        jd in 2_415_020.5f64..2_488_069.5,
        offset_quarters in -48i32..=56,
    ) {
        let offset = offset_quarters as f64 * 0.25;
        let t = CivilTime::from_jd_ut(jd, offset);
        prop_assert!(t.validate().is_ok(), "{t:?}");
        prop_assert!((t.to_jd_ut() - jd).abs() * 86_400.0 < 0.01);
    }

    #[test]
    fn succ_then_pred_is_identity(year in 1900i32..2100, month in 1u32..=12, day in 1u32..=31) {
        prop_assume!(day <= days_in_month(year, month));
        let date = CivilDate::new(year, month, day);
        prop_assert_eq!(date.succ().pred(), date);
        let jd_gap = date.succ().jd_midnight_ut(0.0) - date.jd_midnight_ut(0.0);
        prop_assert!((jd_gap - 1.0).abs() < 1e-9);
    }
}
