//! Tithi (lunar day) and paksha (fortnight) classification.
//!
//! The Moon − Sun elongation is divided into 30 tithis of 12° each.
//! Index 0..=14 is the Shukla (waxing) paksha ending at Purnima, index
//! 15..=29 the Krishna (waning) paksha ending at Amavasya.

use serde::{Deserialize, Serialize};

use crate::angle::{degrees_into_element, element_index_from_angle};
use crate::element::TITHI_SEGMENT_DEG;

/// Number of tithis in a lunar month.
pub const TITHI_COUNT: u8 = 30;

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Paksha {
    /// Waxing half, new moon to full moon.
    Shukla,
    /// Waning half, full moon to new moon.
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }

    pub const fn index(self) -> u8 {
        match self {
            Self::Shukla => 0,
            Self::Krishna => 1,
        }
    }

    /// Paksha of a 0-based tithi index.
    pub const fn from_tithi_index(tithi_index: u8) -> Self {
        if tithi_index < 15 {
            Self::Shukla
        } else {
            Self::Krishna
        }
    }
}

const TITHI_NAMES: [&str; 30] = [
    "Shukla Pratipada",
    "Shukla Dwitiya",
    "Shukla Tritiya",
    "Shukla Chaturthi",
    "Shukla Panchami",
    "Shukla Shashthi",
    "Shukla Saptami",
    "Shukla Ashtami",
    "Shukla Navami",
    "Shukla Dashami",
    "Shukla Ekadashi",
    "Shukla Dwadashi",
    "Shukla Trayodashi",
    "Shukla Chaturdashi",
    "Purnima",
    "Krishna Pratipada",
    "Krishna Dwitiya",
    "Krishna Tritiya",
    "Krishna Chaturthi",
    "Krishna Panchami",
    "Krishna Shashthi",
    "Krishna Saptami",
    "Krishna Ashtami",
    "Krishna Navami",
    "Krishna Dashami",
    "Krishna Ekadashi",
    "Krishna Dwadashi",
    "Krishna Trayodashi",
    "Krishna Chaturdashi",
    "Amavasya",
];

/// Name of a 0-based tithi index, `None` when out of range.
pub fn tithi_name(tithi_index: u8) -> Option<&'static str> {
    TITHI_NAMES.get(tithi_index as usize).copied()
}

/// Tithi position derived from an elongation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TithiPosition {
    /// 0-based index (0 = Shukla Pratipada, 29 = Amavasya).
    pub tithi_index: u8,
    pub paksha: Paksha,
    /// 1-based day within the paksha (1..=15).
    pub tithi_in_paksha: u8,
    /// Degrees of elongation already covered in this tithi [0, 12).
    pub degrees_in_tithi: f64,
}

impl TithiPosition {
    /// 1-based ordinal within the lunar month (1..=30).
    pub const fn ordinal(&self) -> u8 {
        self.tithi_index + 1
    }

    pub fn name(&self) -> &'static str {
        TITHI_NAMES[self.tithi_index as usize]
    }
}

/// Tithi from Moon − Sun elongation in degrees.
pub fn tithi_from_elongation(elongation_deg: f64) -> TithiPosition {
    let tithi_index = element_index_from_angle(elongation_deg, TITHI_SEGMENT_DEG);
    TithiPosition {
        tithi_index,
        paksha: Paksha::from_tithi_index(tithi_index),
        tithi_in_paksha: tithi_index % 15 + 1,
        degrees_in_tithi: degrees_into_element(elongation_deg, TITHI_SEGMENT_DEG),
    }
}
