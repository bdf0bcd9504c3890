//! Masa (lunar month) rules, ritu and ayana.
//!
//! The lunar month is identified by the solar months at its two bracketing
//! new moons. When the Sun is in the same sign at both, no sankranti fell
//! inside the month and it is adhika (intercalary).

use serde::{Deserialize, Serialize};

use crate::angle::normalize_360;
use crate::rashi::Rashi;
use crate::error::VedicError;

/// The 12 lunar months, Amanta numbering (0 = Chaitra).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Masa {
    Chaitra,
    Vaishakha,
    Jyeshtha,
    Ashadha,
    Shravana,
    Bhadrapada,
    Ashvina,
    Kartika,
    Margashirsha,
    Pausha,
    Magha,
    Phalguna,
}

pub const ALL_MASAS: [Masa; 12] = [
    Masa::Chaitra,
    Masa::Vaishakha,
    Masa::Jyeshtha,
    Masa::Ashadha,
    Masa::Shravana,
    Masa::Bhadrapada,
    Masa::Ashvina,
    Masa::Kartika,
    Masa::Margashirsha,
    Masa::Pausha,
    Masa::Magha,
    Masa::Phalguna,
];

impl Masa {
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Chaitra => "Chaitra",
            Self::Vaishakha => "Vaishakha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Ashadha => "Ashadha",
            Self::Shravana => "Shravana",
            Self::Bhadrapada => "Bhadrapada",
            Self::Ashvina => "Ashvina",
            Self::Kartika => "Kartika",
            Self::Margashirsha => "Margashirsha",
            Self::Pausha => "Pausha",
            Self::Magha => "Magha",
            Self::Phalguna => "Phalguna",
        }
    }

    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 12 {
            Some(ALL_MASAS[index as usize])
        } else {
            None
        }
    }

    /// Season this month falls in.
    pub const fn ritu(self) -> Ritu {
        ALL_RITUS[(self as u8 / 2) as usize]
    }
}

/// Outcome of comparing the solar months at two bracketing new moons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MasaResolution {
    /// 1-based month index (1..=12).
    pub month_index: u8,
    pub is_leap_month: bool,
}

impl MasaResolution {
    /// 0-based Amanta index: `(month_index − 1) mod 12`.
    pub const fn amanta_index(&self) -> u8 {
        (self.month_index + 11) % 12
    }

    pub const fn amanta_masa(&self) -> Masa {
        ALL_MASAS[self.amanta_index() as usize]
    }

    /// 0-based Purnimanta index for a tithi ordinal (1..=30).
    ///
    /// Purnimanta months turn at the full moon, so the Krishna half
    /// (ordinal > 15) already belongs to the next month.
    pub const fn purnimanta_index(&self, tithi_ordinal: u8) -> u8 {
        if tithi_ordinal > 15 {
            (self.amanta_index() + 1) % 12
        } else {
            self.amanta_index()
        }
    }

    pub const fn purnimanta_masa(&self, tithi_ordinal: u8) -> Masa {
        ALL_MASAS[self.purnimanta_index(tithi_ordinal) as usize]
    }
}

fn check_solar_month(index: u8) -> Result<(), VedicError> {
    if (1..=12).contains(&index) {
        Ok(())
    } else {
        Err(VedicError::IndexOutOfRange {
            kind: "solar month",
            index: index as u32,
            modulus: 13,
        })
    }
}

/// Resolve a lunar month from the solar month indices (1..=12) at its
/// starting and ending new moons.
///
/// Equal indices mark an adhika month numbered by the shared solar month.
/// Otherwise the month takes `current + 1`, wrapped into 1..=12.
pub fn masa_from_solar_months(current: u8, next: u8) -> Result<MasaResolution, VedicError> {
    check_solar_month(current)?;
    check_solar_month(next)?;
    if current == next {
        Ok(MasaResolution {
            month_index: current,
            is_leap_month: true,
        })
    } else {
        Ok(MasaResolution {
            month_index: current % 12 + 1,
            is_leap_month: false,
        })
    }
}

/// The six seasons, two lunar months each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ritu {
    Vasanta,
    Grishma,
    Varsha,
    Sharad,
    Hemanta,
    Shishira,
}

pub const ALL_RITUS: [Ritu; 6] = [
    Ritu::Vasanta,
    Ritu::Grishma,
    Ritu::Varsha,
    Ritu::Sharad,
    Ritu::Hemanta,
    Ritu::Shishira,
];

impl Ritu {
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Vasanta => "Vasanta",
            Self::Grishma => "Grishma",
            Self::Varsha => "Varsha",
            Self::Sharad => "Sharad",
            Self::Hemanta => "Hemanta",
            Self::Shishira => "Shishira",
        }
    }
}

/// Ritu from a 0-based Amanta masa index.
pub fn ritu_from_amanta_index(amanta_index: u8) -> Result<Ritu, VedicError> {
    Masa::from_index(amanta_index)
        .map(Masa::ritu)
        .ok_or(VedicError::IndexOutOfRange {
            kind: "masa",
            index: amanta_index as u32,
            modulus: 12,
        })
}

/// Solar half-year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ayana {
    /// Sun moving north: sidereal longitude in [270°, 360°) ∪ [0°, 90°).
    Uttarayana,
    /// Sun moving south: [90°, 270°).
    Dakshinayana,
}

impl Ayana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Uttarayana => "Uttarayana",
            Self::Dakshinayana => "Dakshinayana",
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Sidereal Sun longitude at which this ayana begins.
    pub const fn start_deg(self) -> f64 {
        match self {
            Self::Uttarayana => 270.0,
            Self::Dakshinayana => 90.0,
        }
    }

    /// Rashi whose sankranti opens this ayana (Makara or Karka).
    pub const fn start_rashi(self) -> Rashi {
        match self {
            Self::Uttarayana => Rashi::Makara,
            Self::Dakshinayana => Rashi::Karka,
        }
    }

    /// The ayana that follows.
    pub const fn next(self) -> Self {
        match self {
            Self::Uttarayana => Self::Dakshinayana,
            Self::Dakshinayana => Self::Uttarayana,
        }
    }
}

pub fn ayana_from_sidereal_longitude(sidereal_sun_deg: f64) -> Ayana {
    let lon = normalize_360(sidereal_sun_deg);
    if (90.0..270.0).contains(&lon) {
        Ayana::Dakshinayana
    } else {
        Ayana::Uttarayana
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_solar_months_are_leap() {
        let r = masa_from_solar_months(3, 3).unwrap();
        assert!(r.is_leap_month);
        assert_eq!(r.month_index, 3);
        assert_eq!(r.amanta_masa(), Masa::Jyeshtha);
    }

    #[test]
    fn regular_month_advances() {
        let r = masa_from_solar_months(3, 4).unwrap();
        assert!(!r.is_leap_month);
        assert_eq!(r.month_index, 4);
        assert_eq!(r.amanta_masa(), Masa::Ashadha);
    }

    #[test]
    fn meena_to_mesha_is_chaitra() {
        let r = masa_from_solar_months(12, 1).unwrap();
        assert_eq!(r.month_index, 1);
        assert_eq!(r.amanta_masa(), Masa::Chaitra);
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(masa_from_solar_months(0, 1).is_err());
        assert!(masa_from_solar_months(1, 13).is_err());
    }

    #[test]
    fn leap_symmetry_over_all_pairs() {
        for current in 1..=12u8 {
            for next in 1..=12u8 {
                let r = masa_from_solar_months(current, next).unwrap();
                assert_eq!(r.is_leap_month, current == next);
                assert!((1..=12).contains(&r.month_index));
            }
        }
    }

    #[test]
    fn purnimanta_shifts_after_full_moon() {
        let r = MasaResolution {
            month_index: 10,
            is_leap_month: false,
        };
        assert_eq!(r.amanta_masa(), Masa::Pausha);
        assert_eq!(r.purnimanta_masa(5), Masa::Pausha);
        assert_eq!(r.purnimanta_masa(15), Masa::Pausha);
        assert_eq!(r.purnimanta_masa(16), Masa::Magha);
    }

    #[test]
    fn purnimanta_wraps_phalguna() {
        let r = MasaResolution {
            month_index: 12,
            is_leap_month: false,
        };
        assert_eq!(r.purnimanta_masa(20), Masa::Chaitra);
    }

    #[test]
    fn ayana_opens_at_solstice_sankranti() {
        for ayana in [Ayana::Uttarayana, Ayana::Dakshinayana] {
            assert_eq!(ayana.start_rashi().start_deg(), ayana.start_deg());
            assert_eq!(ayana.next().next(), ayana);
            assert_ne!(ayana.next(), ayana);
        }
    }

    #[test]
    fn ritu_pairs() {
        assert_eq!(ritu_from_amanta_index(0).unwrap(), Ritu::Vasanta);
        assert_eq!(ritu_from_amanta_index(1).unwrap(), Ritu::Vasanta);
        assert_eq!(ritu_from_amanta_index(4).unwrap(), Ritu::Varsha);
        assert_eq!(ritu_from_amanta_index(11).unwrap(), Ritu::Shishira);
        assert!(ritu_from_amanta_index(12).is_err());
    }

    #[test]
    fn ayana_ranges() {
        assert_eq!(ayana_from_sidereal_longitude(0.0), Ayana::Uttarayana);
        assert_eq!(ayana_from_sidereal_longitude(89.99), Ayana::Uttarayana);
        assert_eq!(ayana_from_sidereal_longitude(90.0), Ayana::Dakshinayana);
        assert_eq!(ayana_from_sidereal_longitude(269.99), Ayana::Dakshinayana);
        assert_eq!(ayana_from_sidereal_longitude(270.0), Ayana::Uttarayana);
        assert_eq!(ayana_from_sidereal_longitude(-10.0), Ayana::Uttarayana);
    }
}
