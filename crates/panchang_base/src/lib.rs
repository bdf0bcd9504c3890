//! Pure panchang classification.
//!
//! This crate provides:
//! - Angle normalization and angle → element index mapping
//! - Tithi, nakshatra, yoga, karana and rashi tables
//! - Masa resolution from solar months, with ritu, ayana, paksha, vaar and
//!   samvatsara
//! - The sunrise skip-ahead correction and Vriddhi/Kshaya day tagging
//! - Ayanamsha models
//! - The [`EphemerisProvider`] contract and its [`Location`] input
//!
//! Nothing here performs a search; everything is a function of angles and
//! indices. See `panchang_search` for time-domain work.

pub mod angle;
pub mod ayanamsha;
pub mod day_tag;
pub mod element;
pub mod ephemeris;
pub mod error;
pub mod graha;
pub mod karana;
pub mod location;
pub mod masa;
pub mod nakshatra;
pub mod rashi;
pub mod samvatsara;
pub mod skip;
pub mod tithi;
pub mod vaar;
pub mod yoga;

pub use angle::{
    degrees_into_element, element_count, element_index_from_angle, lunar_phase_angle,
    normalize_360, normalize_to_pm180, sidereal_longitude,
};
pub use ayanamsha::{AyanamshaSystem, ayanamsha_at_jd, ayanamsha_deg};
pub use day_tag::{DayElementTag, classify_day_interval, tag_day_intervals};
pub use element::{
    ElementKind, KARANA_SEGMENT_DEG, NAKSHATRA_SPAN_27, PeriodKind, RASHI_SPAN_DEG,
    TITHI_SEGMENT_DEG, YOGA_SEGMENT_DEG,
};
pub use ephemeris::{Body, EphemerisError, EphemerisProvider, RiseSet};
pub use error::VedicError;
pub use graha::{ALL_GRAHAS, Graha};
pub use karana::{Karana, KaranaPosition, karana_from_elongation};
pub use location::Location;
pub use masa::{
    ALL_MASAS, Ayana, Masa, MasaResolution, Ritu, ayana_from_sidereal_longitude,
    masa_from_solar_months, ritu_from_amanta_index,
};
pub use nakshatra::{Nakshatra, NakshatraPosition, nakshatra_from_longitude};
pub use rashi::{
    ALL_RASHIS, Dms, Rashi, RashiPosition, deg_to_dms, rashi_from_longitude, solar_month_index,
};
pub use samvatsara::{Samvatsara, lunar_year_start, samvatsara_from_year};
pub use skip::{is_skipped, resolve_skipped_element};
pub use tithi::{Paksha, TithiPosition, tithi_from_elongation, tithi_name};
pub use vaar::{Vaar, vaar_from_date, vaar_from_jd};
pub use yoga::{Yoga, YogaPosition, yoga_from_sum};
