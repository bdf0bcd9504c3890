//! Vaar (weekday) of a local instant.

use panchang_time::CivilDate;
use serde::{Deserialize, Serialize};

/// The seven weekdays starting from Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vaar {
    Ravivara,
    Somavara,
    Mangalavara,
    Budhavara,
    Guruvara,
    Shukravara,
    Shanivara,
}

pub const ALL_VAARS: [Vaar; 7] = [
    Vaar::Ravivara,
    Vaar::Somavara,
    Vaar::Mangalavara,
    Vaar::Budhavara,
    Vaar::Guruvara,
    Vaar::Shukravara,
    Vaar::Shanivara,
];

impl Vaar {
    /// 0 = Sunday.
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Ravivara => "Ravivara",
            Self::Somavara => "Somavara",
            Self::Mangalavara => "Mangalavara",
            Self::Budhavara => "Budhavara",
            Self::Guruvara => "Guruvara",
            Self::Shukravara => "Shukravara",
            Self::Shanivara => "Shanivara",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Ravivara => "Sunday",
            Self::Somavara => "Monday",
            Self::Mangalavara => "Tuesday",
            Self::Budhavara => "Wednesday",
            Self::Guruvara => "Thursday",
            Self::Shukravara => "Friday",
            Self::Shanivara => "Saturday",
        }
    }
}

/// Weekday of a UT instant as seen at `offset_hours`.
///
/// The vaar follows the sunrise that opens the day, so callers pass the
/// sunrise JD rather than midnight.
pub fn vaar_from_jd(jd_ut: f64, offset_hours: f64) -> Vaar {
    let local = jd_ut + offset_hours / 24.0;
    let day = ((local + 1.5).floor() as i64).rem_euclid(7);
    ALL_VAARS[day as usize]
}

/// Weekday of a civil date.
pub fn vaar_from_date(date: CivilDate) -> Vaar {
    vaar_from_jd(date.jd_midnight_ut(0.0) + 0.5, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_was_saturday() {
        assert_eq!(vaar_from_jd(2_451_545.0, 0.0), Vaar::Shanivara);
    }

    #[test]
    fn offset_moves_across_midnight() {
        // 2024-01-14 20:00 UT is already Monday 01:30 in IST.
        let jd = CivilDate::new(2024, 1, 14).jd_midnight_ut(0.0) + 20.0 / 24.0;
        assert_eq!(vaar_from_jd(jd, 0.0), Vaar::Ravivara);
        assert_eq!(vaar_from_jd(jd, 5.5), Vaar::Somavara);
    }

    #[test]
    fn known_dates() {
        assert_eq!(vaar_from_date(CivilDate::new(2024, 1, 15)), Vaar::Somavara);
        assert_eq!(vaar_from_date(CivilDate::new(2023, 8, 15)), Vaar::Mangalavara);
        assert_eq!(Vaar::Guruvara.english_name(), "Thursday");
    }
}
