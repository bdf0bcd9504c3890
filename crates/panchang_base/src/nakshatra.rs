//! Nakshatra (lunar mansion) classification.
//!
//! Sidereal Moon longitude is split into 27 equal nakshatras of 13°20′, each
//! with four padas of 3°20′.

use serde::{Deserialize, Serialize};

use crate::angle::{degrees_into_element, element_index_from_angle};
use crate::element::NAKSHATRA_SPAN_27;

/// Span of one pada: 3°20′.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN_27 / 4.0;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

const NAKSHATRA_NAMES: [&str; 27] = [
    "Ashwini",
    "Bharani",
    "Krittika",
    "Rohini",
    "Mrigashira",
    "Ardra",
    "Punarvasu",
    "Pushya",
    "Ashlesha",
    "Magha",
    "Purva Phalguni",
    "Uttara Phalguni",
    "Hasta",
    "Chitra",
    "Swati",
    "Vishakha",
    "Anuradha",
    "Jyeshtha",
    "Mula",
    "Purva Ashadha",
    "Uttara Ashadha",
    "Shravana",
    "Dhanishtha",
    "Shatabhisha",
    "Purva Bhadrapada",
    "Uttara Bhadrapada",
    "Revati",
];

impl Nakshatra {
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        NAKSHATRA_NAMES[self as usize]
    }

    /// Nakshatra for a 0-based index, `None` past Revati.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 27 {
            Some(ALL_NAKSHATRAS[index as usize])
        } else {
            None
        }
    }
}

/// Nakshatra position of a sidereal longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NakshatraPosition {
    pub nakshatra: Nakshatra,
    /// 0-based index (0 = Ashwini).
    pub nakshatra_index: u8,
    /// Pada 1..=4.
    pub pada: u8,
    /// Degrees into the nakshatra [0, 13.333…).
    pub degrees_in_nakshatra: f64,
}

/// Nakshatra from a sidereal ecliptic longitude.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraPosition {
    let idx = element_index_from_angle(sidereal_lon_deg, NAKSHATRA_SPAN_27);
    let degrees_in_nakshatra = degrees_into_element(sidereal_lon_deg, NAKSHATRA_SPAN_27);
    let pada = ((degrees_in_nakshatra / PADA_SPAN).floor() as u8).min(3) + 1;
    NakshatraPosition {
        nakshatra: ALL_NAKSHATRAS[idx as usize],
        nakshatra_index: idx,
        pada,
        degrees_in_nakshatra,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, n) in ALL_NAKSHATRAS.iter().enumerate() {
            assert_eq!(n.index() as usize, i);
            assert_eq!(Nakshatra::from_index(i as u8), Some(*n));
        }
        assert_eq!(Nakshatra::from_index(27), None);
    }

    #[test]
    fn zero_is_ashwini_pada_1() {
        let p = nakshatra_from_longitude(0.0);
        assert_eq!(p.nakshatra, Nakshatra::Ashwini);
        assert_eq!(p.pada, 1);
    }

    #[test]
    fn rohini_pada_4() {
        // Rohini spans 40°..53°20′; 52° is in its fourth pada.
        let p = nakshatra_from_longitude(52.0);
        assert_eq!(p.nakshatra, Nakshatra::Rohini);
        assert_eq!(p.pada, 4);
    }

    #[test]
    fn end_of_zodiac_is_revati() {
        let p = nakshatra_from_longitude(359.999);
        assert_eq!(p.nakshatra, Nakshatra::Revati);
        assert_eq!(p.pada, 4);
    }

    #[test]
    fn multi_word_names() {
        assert_eq!(Nakshatra::PurvaPhalguni.name(), "Purva Phalguni");
        assert_eq!(Nakshatra::UttaraBhadrapada.name(), "Uttara Bhadrapada");
    }
}
