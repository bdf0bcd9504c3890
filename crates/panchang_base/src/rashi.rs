//! Rashi (sidereal sign) position, DMS formatting and solar month index.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::angle::{degrees_into_element, element_index_from_angle, sidereal_longitude};
use crate::element::RASHI_SPAN_DEG;

/// The 12 rashis starting from Mesha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// 0-based index (Mesha = 0).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 12 {
            Some(ALL_RASHIS[index as usize])
        } else {
            None
        }
    }

    /// Sidereal longitude at which the Sun enters this rashi.
    pub const fn start_deg(self) -> f64 {
        self as u8 as f64 * RASHI_SPAN_DEG
    }
}

/// Degrees-minutes-seconds of an angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dms {
    pub degrees: u16,
    pub minutes: u8,
    pub seconds: f64,
}

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°{:02}′{:04.1}″", self.degrees, self.minutes, self.seconds)
    }
}

/// Decimal degrees → DMS. Negative input uses its absolute value.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let degrees = d.floor() as u16;
    let rem_min = (d - degrees as f64) * 60.0;
    let minutes = rem_min.floor() as u8;
    Dms {
        degrees,
        minutes,
        seconds: (rem_min - minutes as f64) * 60.0,
    }
}

pub fn dms_to_deg(dms: &Dms) -> f64 {
    dms.degrees as f64 + dms.minutes as f64 / 60.0 + dms.seconds / 3600.0
}

/// Position of a sidereal longitude inside its rashi.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RashiPosition {
    pub rashi: Rashi,
    pub rashi_index: u8,
    /// Degrees inside the sign [0, 30).
    pub degrees_in_rashi: f64,
    pub dms: Dms,
}

/// Rashi from a sidereal ecliptic longitude.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiPosition {
    let idx = element_index_from_angle(sidereal_lon_deg, RASHI_SPAN_DEG);
    let degrees_in_rashi = degrees_into_element(sidereal_lon_deg, RASHI_SPAN_DEG);
    RashiPosition {
        rashi: ALL_RASHIS[idx as usize],
        rashi_index: idx,
        degrees_in_rashi,
        dms: deg_to_dms(degrees_in_rashi),
    }
}

/// Solar month index 1..=12 of a tropical Sun longitude.
///
/// `floor(sidereal / 30) + 1` with sidereal = tropical − ayanamsha, so the
/// Sun in Mesha gives 1 and the Sun in Meena gives 12. An exact multiple of
/// 30° belongs to the sign it starts.
pub fn solar_month_index(tropical_sun_deg: f64, ayanamsha_deg: f64) -> u8 {
    let sid = sidereal_longitude(tropical_sun_deg, ayanamsha_deg);
    element_index_from_angle(sid, RASHI_SPAN_DEG) + 1
}
