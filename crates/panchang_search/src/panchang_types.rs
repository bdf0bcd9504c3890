//! Types for panchang results.
//!
//! Every element carries its interval twice: as [`CivilTime`] at the
//! caller's offset for display, and as UT Julian Days for further math.
//! Intervals are half-open `[start, end)`.

use panchang_base::{
    Ayana, Body, DayElementTag, ElementKind, Karana, Location, Nakshatra, Paksha, PeriodKind, Rashi,
    Ritu, Samvatsara, Vaar, Yoga,
};
use panchang_time::{CivilDate, CivilTime};
use serde::Serialize;

use crate::masa::MasaInfo;

/// Tithi (lunar day) with start/end times.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TithiInfo {
    /// 0-based tithi index (0 = Shukla Pratipada .. 29 = Amavasya).
    pub index: u8,
    pub name: &'static str,
    pub name_localized: Option<String>,
    pub paksha: Paksha,
    /// 1-based day within the paksha (1-15).
    pub tithi_in_paksha: u8,
    pub start: CivilTime,
    pub end: CivilTime,
    pub start_jd: f64,
    pub end_jd: f64,
}

impl TithiInfo {
    /// 1-based ordinal within the lunar month (1-30).
    pub const fn ordinal(&self) -> u8 {
        self.index + 1
    }
}

/// Moon's nakshatra with start/end times.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NakshatraInfo {
    pub nakshatra: Nakshatra,
    /// 0-based index (0 = Ashwini .. 26 = Revati).
    pub index: u8,
    pub name: &'static str,
    pub name_localized: Option<String>,
    /// Pada (quarter) at the query instant, 1-4.
    pub pada: u8,
    pub start: CivilTime,
    pub end: CivilTime,
    pub start_jd: f64,
    pub end_jd: f64,
}

/// Yoga (luni-solar yoga) with start/end times.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YogaInfo {
    pub yoga: Yoga,
    /// 0-based index (0 = Vishkumbha .. 26 = Vaidhriti).
    pub index: u8,
    pub name: &'static str,
    pub name_localized: Option<String>,
    pub start: CivilTime,
    pub end: CivilTime,
    pub start_jd: f64,
    pub end_jd: f64,
}

/// Karana (half-tithi) with start/end times.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KaranaInfo {
    pub karana: Karana,
    /// Name index 0..=10.
    pub index: u8,
    /// Sequence position within the synodic month, 0..=59.
    pub position: u8,
    pub name: &'static str,
    pub name_localized: Option<String>,
    pub start: CivilTime,
    pub end: CivilTime,
    pub start_jd: f64,
    pub end_jd: f64,
}

/// Sidereal rashi of the Sun or Moon with start/end times.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RashiInfo {
    pub body: Body,
    pub rashi: Rashi,
    /// 0-based index (0 = Mesha).
    pub index: u8,
    pub name: &'static str,
    pub name_localized: Option<String>,
    /// Degrees into the rashi at the query instant.
    pub degrees_in_rashi: f64,
    pub start: CivilTime,
    pub end: CivilTime,
    pub start_jd: f64,
    pub end_jd: f64,
}

/// Lunar fortnight, from new moon to full moon or full moon to new moon.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PakshaInfo {
    pub paksha: Paksha,
    /// 0 = Shukla, 1 = Krishna.
    pub index: u8,
    pub name: &'static str,
    pub name_localized: Option<String>,
    pub start: CivilTime,
    pub end: CivilTime,
    pub start_jd: f64,
    pub end_jd: f64,
}

/// Season, the run of lunar months sharing a ritu.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RituInfo {
    pub ritu: Ritu,
    /// 0-based index (0 = Vasanta).
    pub index: u8,
    pub name: &'static str,
    pub name_localized: Option<String>,
    pub start: CivilTime,
    pub end: CivilTime,
    pub start_jd: f64,
    pub end_jd: f64,
}

/// Half-year between the Makara and Karka sankrantis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AyanaInfo {
    pub ayana: Ayana,
    /// 0 = Uttarayana, 1 = Dakshinayana.
    pub index: u8,
    pub name: &'static str,
    pub name_localized: Option<String>,
    pub start: CivilTime,
    pub end: CivilTime,
    pub start_jd: f64,
    pub end_jd: f64,
}

/// A tithi overlapping the sunrise day, with its Vriddhi/Kshaya tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaggedTithi {
    pub tithi: TithiInfo,
    pub tag: DayElementTag,
}

/// Everything the panchang reports for one civil date at one place.
///
/// The day runs from `sunrise` to `next_sunrise`. Tithi, nakshatra and
/// yoga are the sunrise elements after the skip-ahead correction; karana
/// is the one in force at sunrise.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanchangSnapshot {
    pub date: CivilDate,
    pub location: Location,
    pub sunrise: CivilTime,
    pub sunset: CivilTime,
    pub next_sunrise: CivilTime,
    /// Absent when the provider has no lunar rise/set or the Moon skips it today.
    pub moonrise: Option<CivilTime>,
    pub moonset: Option<CivilTime>,
    pub vaar: Vaar,
    pub tithi: TithiInfo,
    /// The sunrise tithi was replaced by its skipped successor.
    pub tithi_skipped: bool,
    /// Every tithi overlapping `[sunrise, next_sunrise)`, tagged.
    pub day_tithis: Vec<TaggedTithi>,
    pub nakshatra: NakshatraInfo,
    pub nakshatra_skipped: bool,
    pub yoga: YogaInfo,
    pub yoga_skipped: bool,
    pub karana: KaranaInfo,
    pub masa: MasaInfo,
    pub paksha: PakshaInfo,
    pub ritu: RituInfo,
    pub ayana: AyanaInfo,
    pub samvatsara: Samvatsara,
    pub sun_rashi: RashiInfo,
    pub moon_rashi: RashiInfo,
}

/// Source of display names in another language or script.
///
/// `index` is the element's 0-based index for `kind`; for karana it is the
/// name index 0..=10, not the sequence position. Masa, paksha, ritu and
/// ayana go through [`Localizer::localize_period`] with their `index` field.
pub trait Localizer {
    fn localize(&self, kind: ElementKind, index: u8) -> Option<String>;

    fn localize_period(&self, kind: PeriodKind, index: u8) -> Option<String>;
}

impl PanchangSnapshot {
    /// Fill every `name_localized` from `localizer`.
    pub fn localize(&mut self, localizer: &dyn Localizer) {
        let tithi = |t: &mut TithiInfo| t.name_localized = localizer.localize(ElementKind::Tithi, t.index);
        tithi(&mut self.tithi);
        for tagged in &mut self.day_tithis {
            tithi(&mut tagged.tithi);
        }
        self.nakshatra.name_localized = localizer.localize(ElementKind::Nakshatra, self.nakshatra.index);
        self.yoga.name_localized = localizer.localize(ElementKind::Yoga, self.yoga.index);
        self.karana.name_localized = localizer.localize(ElementKind::Karana, self.karana.index);
        for rashi in [&mut self.sun_rashi, &mut self.moon_rashi] {
            rashi.name_localized = localizer.localize(ElementKind::Rashi, rashi.index);
        }
        self.masa.name_localized = localizer.localize_period(PeriodKind::Masa, self.masa.index);
        self.paksha.name_localized = localizer.localize_period(PeriodKind::Paksha, self.paksha.index);
        self.ritu.name_localized = localizer.localize_period(PeriodKind::Ritu, self.ritu.index);
        self.ayana.name_localized = localizer.localize_period(PeriodKind::Ayana, self.ayana.index);
    }
}
