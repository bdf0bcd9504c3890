//! The five angle-driven element kinds and their fixed moduli.

use serde::{Deserialize, Serialize};

/// Width of one tithi in Moon − Sun elongation.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;
/// Width of one karana (half-tithi).
pub const KARANA_SEGMENT_DEG: f64 = 6.0;
/// Width of one nakshatra: 13°20′.
pub const NAKSHATRA_SPAN_27: f64 = 360.0 / 27.0;
/// Width of one yoga in sidereal Sun + Moon.
pub const YOGA_SEGMENT_DEG: f64 = 360.0 / 27.0;
/// Width of one rashi.
pub const RASHI_SPAN_DEG: f64 = 30.0;

/// Element kinds whose index is a fixed slice of a driving angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Driven by Moon − Sun elongation.
    Tithi,
    /// Driven by sidereal Moon longitude.
    Nakshatra,
    /// Driven by sidereal Sun + Moon.
    Yoga,
    /// Driven by elongation, 60 half-tithi positions.
    Karana,
    /// Driven by sidereal Sun longitude.
    Rashi,
}

impl ElementKind {
    /// Width of one element in degrees of the driving angle.
    pub const fn span_deg(self) -> f64 {
        match self {
            Self::Tithi => TITHI_SEGMENT_DEG,
            Self::Nakshatra => NAKSHATRA_SPAN_27,
            Self::Yoga => YOGA_SEGMENT_DEG,
            Self::Karana => KARANA_SEGMENT_DEG,
            Self::Rashi => RASHI_SPAN_DEG,
        }
    }

    /// Number of positions in one full turn of the driving angle.
    pub const fn modulus(self) -> u8 {
        match self {
            Self::Tithi => 30,
            Self::Nakshatra | Self::Yoga => 27,
            Self::Karana => 60,
            Self::Rashi => 12,
        }
    }

    /// Whether the sunrise skip-ahead correction applies.
    pub const fn is_skip_corrected(self) -> bool {
        matches!(self, Self::Tithi | Self::Nakshatra | Self::Yoga)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Tithi => "tithi",
            Self::Nakshatra => "nakshatra",
            Self::Yoga => "yoga",
            Self::Karana => "karana",
            Self::Rashi => "rashi",
        }
    }
}

/// Calendar periods that carry a name but are not a fixed slice of an angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodKind {
    Masa,
    Paksha,
    Ritu,
    Ayana,
}

impl PeriodKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Masa => "masa",
            Self::Paksha => "paksha",
            Self::Ritu => "ritu",
            Self::Ayana => "ayana",
        }
    }
}
