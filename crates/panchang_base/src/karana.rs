//! Karana (half-tithi) classification.
//!
//! A lunar month holds 60 karana positions of 6° elongation each. Seven
//! movable karanas repeat eight times over positions 1..=56; four fixed
//! karanas occupy position 0 (Kimstughna) and positions 57..=59 (Shakuni,
//! Chatushpada, Naga).

use serde::{Deserialize, Serialize};

use crate::angle::{degrees_into_element, element_index_from_angle};
use crate::element::KARANA_SEGMENT_DEG;

/// Number of karana positions in a lunar month.
pub const KARANA_POSITIONS: u8 = 60;

/// The 11 named karanas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Karana {
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Garaja,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
    Kimstughna,
}

pub const ALL_KARANAS: [Karana; 11] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Garaja,
    Karana::Vanija,
    Karana::Vishti,
    Karana::Shakuni,
    Karana::Chatushpada,
    Karana::Naga,
    Karana::Kimstughna,
];

impl Karana {
    /// Name index 0..=10 (0 = Bava, 10 = Kimstughna).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Garaja => "Garaja",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
            Self::Shakuni => "Shakuni",
            Self::Chatushpada => "Chatushpada",
            Self::Naga => "Naga",
            Self::Kimstughna => "Kimstughna",
        }
    }

    /// Fixed karanas occur once per lunar month.
    pub const fn is_fixed(self) -> bool {
        matches!(
            self,
            Self::Shakuni | Self::Chatushpada | Self::Naga | Self::Kimstughna
        )
    }

    /// Karana occupying a 0-based position in the month, `None` past 59.
    pub const fn from_position(position: u8) -> Option<Self> {
        match position {
            0 => Some(Self::Kimstughna),
            1..=56 => Some(ALL_KARANAS[((position - 1) % 7) as usize]),
            57 => Some(Self::Shakuni),
            58 => Some(Self::Chatushpada),
            59 => Some(Self::Naga),
            _ => None,
        }
    }
}

/// Karana position derived from an elongation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KaranaPosition {
    pub karana: Karana,
    /// Position in the month, 0..=59.
    pub position: u8,
    pub degrees_in_karana: f64,
}

/// Karana from Moon − Sun elongation in degrees.
pub fn karana_from_elongation(elongation_deg: f64) -> KaranaPosition {
    let position = element_index_from_angle(elongation_deg, KARANA_SEGMENT_DEG);
    // element_index_from_angle clamps to 59
    let karana = Karana::from_position(position).unwrap_or(Karana::Naga);
    KaranaPosition {
        karana,
        position,
        degrees_in_karana: degrees_into_element(elongation_deg, KARANA_SEGMENT_DEG),
    }
}
