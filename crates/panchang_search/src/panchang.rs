//! Element-at-instant queries and the daily panchang snapshot.
//!
//! Each element is a fixed slice of a driving angle. Its interval is found
//! by searching backward for the crossing of the slice's lower edge and
//! forward for the upper edge, within a window longer than the element's
//! longest possible duration.

use panchang_base::{
    Body, EphemerisError, EphemerisProvider, KARANA_SEGMENT_DEG, Location, NAKSHATRA_SPAN_27, Paksha,
    RASHI_SPAN_DEG, TITHI_SEGMENT_DEG, YOGA_SEGMENT_DEG, ayana_from_sidereal_longitude,
    element_index_from_angle, is_skipped, karana_from_elongation, lunar_year_start,
    nakshatra_from_longitude, rashi_from_longitude, ritu_from_amanta_index, samvatsara_from_year,
    tag_day_intervals, tithi_from_elongation, vaar_from_jd, yoga_from_sum,
};
use panchang_time::{CivilDate, CivilTime};
use tracing::debug;

use crate::config::PanchangConfig;
use crate::error::SearchError;
use crate::lunar_phase::{next_amavasya, next_purnima, prev_amavasya, prev_purnima};
use crate::masa::{MasaInfo, masa_info_for_ordinal, ritu_span};
use crate::panchang_types::{
    AyanaInfo, KaranaInfo, NakshatraInfo, PakshaInfo, PanchangSnapshot, RashiInfo, RituInfo,
    TaggedTithi, TithiInfo, YogaInfo,
};
use crate::phase::{lunar_phase_at, moon_sidereal_at, sidereal_sum_at, sun_sidereal_at};
use crate::sankranti::{next_specific_sankranti, prev_specific_sankranti};
use crate::search_util::{find_phase_crossing, find_phase_crossing_backward};

const TITHI_WINDOW_DAYS: f64 = 2.0;
const NAKSHATRA_WINDOW_DAYS: f64 = 2.0;
const YOGA_WINDOW_DAYS: f64 = 2.0;
const KARANA_WINDOW_DAYS: f64 = 1.0;
const MOON_RASHI_WINDOW_DAYS: f64 = 3.5;
const SUN_RASHI_WINDOW_DAYS: f64 = 35.0;

/// Offset past an element's end used to read its successor (one minute).
const STEP_PAST_END_DAYS: f64 = 1.0 / 1440.0;

/// At most this many tithis can touch one sunrise day.
const MAX_DAY_TITHIS: usize = 8;

/// Interval of the element containing an instant.
struct Span {
    /// Driving angle at the query instant.
    angle: f64,
    start_jd: f64,
    end_jd: f64,
}

fn element_span<F>(
    angle_fn: F,
    jd_ut: f64,
    span_deg: f64,
    modulus: u8,
    window_days: f64,
    step_days: f64,
    what: &'static str,
) -> Result<Span, SearchError>
where
    F: Fn(f64) -> Result<f64, SearchError>,
{
    let angle = angle_fn(jd_ut)?;
    let index = element_index_from_angle(angle, span_deg);
    let start_deg = f64::from(index) * span_deg;
    let end_deg = f64::from((index + 1) % modulus) * span_deg;

    let start_jd = find_phase_crossing_backward(jd_ut, window_days, start_deg, step_days, &angle_fn)?
        .ok_or(SearchError::NoCrossingFound(what))?;
    let end_jd = find_phase_crossing(jd_ut, jd_ut + window_days, end_deg, step_days, &angle_fn)?
        .ok_or(SearchError::NoCrossingFound(what))?;
    Ok(Span {
        angle,
        start_jd,
        end_jd,
    })
}

/// Tithi in force at `jd_ut`.
pub fn tithi_at<P>(
    provider: &P,
    jd_ut: f64,
    offset_hours: f64,
    config: &PanchangConfig,
) -> Result<TithiInfo, SearchError>
where
    P: EphemerisProvider + ?Sized,
{
    let span = element_span(
        |jd| lunar_phase_at(provider, jd),
        jd_ut,
        TITHI_SEGMENT_DEG,
        30,
        TITHI_WINDOW_DAYS,
        config.scan_step_days,
        "tithi boundary",
    )?;
    let pos = tithi_from_elongation(span.angle);
    Ok(TithiInfo {
        index: pos.tithi_index,
        name: pos.name(),
        name_localized: None,
        paksha: pos.paksha,
        tithi_in_paksha: pos.tithi_in_paksha,
        start: CivilTime::from_jd_ut(span.start_jd, offset_hours),
        end: CivilTime::from_jd_ut(span.end_jd, offset_hours),
        start_jd: span.start_jd,
        end_jd: span.end_jd,
    })
}

/// Moon's nakshatra at `jd_ut`.
pub fn nakshatra_at<P>(
    provider: &P,
    jd_ut: f64,
    offset_hours: f64,
    config: &PanchangConfig,
) -> Result<NakshatraInfo, SearchError>
where
    P: EphemerisProvider + ?Sized,
{
    let span = element_span(
        |jd| moon_sidereal_at(provider, jd),
        jd_ut,
        NAKSHATRA_SPAN_27,
        27,
        NAKSHATRA_WINDOW_DAYS,
        config.scan_step_days,
        "nakshatra boundary",
    )?;
    let pos = nakshatra_from_longitude(span.angle);
    Ok(NakshatraInfo {
        nakshatra: pos.nakshatra,
        index: pos.nakshatra_index,
        name: pos.nakshatra.name(),
        name_localized: None,
        pada: pos.pada,
        start: CivilTime::from_jd_ut(span.start_jd, offset_hours),
        end: CivilTime::from_jd_ut(span.end_jd, offset_hours),
        start_jd: span.start_jd,
        end_jd: span.end_jd,
    })
}

/// Yoga at `jd_ut`.
pub fn yoga_at<P>(
    provider: &P,
    jd_ut: f64,
    offset_hours: f64,
    config: &PanchangConfig,
) -> Result<YogaInfo, SearchError>
where
    P: EphemerisProvider + ?Sized,
{
    let span = element_span(
        |jd| sidereal_sum_at(provider, jd),
        jd_ut,
        YOGA_SEGMENT_DEG,
        27,
        YOGA_WINDOW_DAYS,
        config.scan_step_days,
        "yoga boundary",
    )?;
    let pos = yoga_from_sum(span.angle);
    Ok(YogaInfo {
        yoga: pos.yoga,
        index: pos.yoga_index,
        name: pos.yoga.name(),
        name_localized: None,
        start: CivilTime::from_jd_ut(span.start_jd, offset_hours),
        end: CivilTime::from_jd_ut(span.end_jd, offset_hours),
        start_jd: span.start_jd,
        end_jd: span.end_jd,
    })
}

/// Karana at `jd_ut`.
pub fn karana_at<P>(
    provider: &P,
    jd_ut: f64,
    offset_hours: f64,
    config: &PanchangConfig,
) -> Result<KaranaInfo, SearchError>
where
    P: EphemerisProvider + ?Sized,
{
    let span = element_span(
        |jd| lunar_phase_at(provider, jd),
        jd_ut,
        KARANA_SEGMENT_DEG,
        60,
        KARANA_WINDOW_DAYS,
        config.scan_step_days,
        "karana boundary",
    )?;
    let pos = karana_from_elongation(span.angle);
    Ok(KaranaInfo {
        karana: pos.karana,
        index: pos.karana.index(),
        position: pos.position,
        name: pos.karana.name(),
        name_localized: None,
        start: CivilTime::from_jd_ut(span.start_jd, offset_hours),
        end: CivilTime::from_jd_ut(span.end_jd, offset_hours),
        start_jd: span.start_jd,
        end_jd: span.end_jd,
    })
}

/// Sidereal rashi of the Sun or Moon at `jd_ut`.
pub fn rashi_at<P>(
    provider: &P,
    body: Body,
    jd_ut: f64,
    offset_hours: f64,
    config: &PanchangConfig,
) -> Result<RashiInfo, SearchError>
where
    P: EphemerisProvider + ?Sized,
{
    let span = match body {
        Body::Sun => element_span(
            |jd| sun_sidereal_at(provider, jd),
            jd_ut,
            RASHI_SPAN_DEG,
            12,
            SUN_RASHI_WINDOW_DAYS,
            config.sankranti_step_days,
            "solar rashi boundary",
        )?,
        Body::Moon => element_span(
            |jd| moon_sidereal_at(provider, jd),
            jd_ut,
            RASHI_SPAN_DEG,
            12,
            MOON_RASHI_WINDOW_DAYS,
            config.scan_step_days,
            "lunar rashi boundary",
        )?,
        _ => return Err(SearchError::InvalidConfig("rashi spans are tracked for the Sun and Moon only")),
    };
    let pos = rashi_from_longitude(span.angle);
    Ok(RashiInfo {
        body,
        rashi: pos.rashi,
        index: pos.rashi_index,
        name: pos.rashi.name(),
        name_localized: None,
        degrees_in_rashi: pos.degrees_in_rashi,
        start: CivilTime::from_jd_ut(span.start_jd, offset_hours),
        end: CivilTime::from_jd_ut(span.end_jd, offset_hours),
        start_jd: span.start_jd,
        end_jd: span.end_jd,
    })
}

/// Replace `today` by its successor when the successor never holds at a
/// sunrise.
fn skip_corrected<T, F>(
    today: T,
    today_index: u8,
    today_end_jd: f64,
    tomorrow_index: u8,
    modulus: u8,
    info_at: F,
) -> Result<(T, bool), SearchError>
where
    F: FnOnce(f64) -> Result<T, SearchError>,
{
    if is_skipped(today_index, tomorrow_index, modulus) {
        Ok((info_at(today_end_jd + STEP_PAST_END_DAYS)?, true))
    } else {
        Ok((today, false))
    }
}

/// Every tithi overlapping `[sunrise_jd, next_sunrise_jd)`, chronological.
fn tithis_in_day<P>(
    provider: &P,
    sunrise_jd: f64,
    next_sunrise_jd: f64,
    offset_hours: f64,
    config: &PanchangConfig,
) -> Result<Vec<TithiInfo>, SearchError>
where
    P: EphemerisProvider + ?Sized,
{
    let mut tithis = Vec::new();
    let mut cursor = sunrise_jd;
    while tithis.len() < MAX_DAY_TITHIS {
        let info = tithi_at(provider, cursor, offset_hours, config)?;
        let end = info.end_jd;
        tithis.push(info);
        if end >= next_sunrise_jd {
            break;
        }
        cursor = end + STEP_PAST_END_DAYS;
    }
    Ok(tithis)
}

fn civil(jd: Option<f64>, offset_hours: f64) -> Option<CivilTime> {
    jd.map(|jd| CivilTime::from_jd_ut(jd, offset_hours))
}

/// Paksha of `tithi`: the fortnight between the bracketing new and full moons.
fn paksha_info<P>(provider: &P, tithi: &TithiInfo, offset_hours: f64) -> Result<PakshaInfo, SearchError>
where
    P: EphemerisProvider + ?Sized,
{
    // Anchor inside the tithi so a phase exactly at its edge is not picked up.
    let anchor = (tithi.start_jd + tithi.end_jd) / 2.0;
    let (start, end) = match tithi.paksha {
        Paksha::Shukla => {
            let start = prev_amavasya(provider, anchor)?
                .ok_or(SearchError::NoCrossingFound("new moon opening paksha"))?;
            let end = next_purnima(provider, anchor)?
                .ok_or(SearchError::NoCrossingFound("full moon closing paksha"))?;
            (start.jd, end.jd)
        }
        Paksha::Krishna => {
            let start = prev_purnima(provider, anchor)?
                .ok_or(SearchError::NoCrossingFound("full moon opening paksha"))?;
            let end = next_amavasya(provider, anchor)?
                .ok_or(SearchError::NoCrossingFound("new moon closing paksha"))?;
            (start.jd, end.jd)
        }
    };
    Ok(PakshaInfo {
        paksha: tithi.paksha,
        index: tithi.paksha.index(),
        name: tithi.paksha.name(),
        name_localized: None,
        start: CivilTime::from_jd_ut(start, offset_hours),
        end: CivilTime::from_jd_ut(end, offset_hours),
        start_jd: start,
        end_jd: end,
    })
}

fn ritu_info<P>(provider: &P, masa: &MasaInfo, offset_hours: f64) -> Result<RituInfo, SearchError>
where
    P: EphemerisProvider + ?Sized,
{
    let ritu = ritu_from_amanta_index(masa.index)?;
    let (start, end) = ritu_span(provider, masa)?;
    Ok(RituInfo {
        ritu,
        index: ritu.index(),
        name: ritu.name(),
        name_localized: None,
        start: CivilTime::from_jd_ut(start, offset_hours),
        end: CivilTime::from_jd_ut(end, offset_hours),
        start_jd: start,
        end_jd: end,
    })
}

/// Ayana at `jd_ut`, bounded by the sankrantis into Makara and Karka.
fn ayana_info<P>(
    provider: &P,
    jd_ut: f64,
    offset_hours: f64,
    config: &PanchangConfig,
) -> Result<AyanaInfo, SearchError>
where
    P: EphemerisProvider + ?Sized,
{
    let ayana = ayana_from_sidereal_longitude(sun_sidereal_at(provider, jd_ut)?);
    let start = prev_specific_sankranti(provider, jd_ut, ayana.start_rashi(), config)?
        .ok_or(SearchError::NoCrossingFound("sankranti opening ayana"))?;
    let end = next_specific_sankranti(provider, jd_ut, ayana.next().start_rashi(), config)?
        .ok_or(SearchError::NoCrossingFound("sankranti closing ayana"))?;
    Ok(AyanaInfo {
        ayana,
        index: ayana.index(),
        name: ayana.name(),
        name_localized: None,
        start: CivilTime::from_jd_ut(start.jd, offset_hours),
        end: CivilTime::from_jd_ut(end.jd, offset_hours),
        start_jd: start.jd,
        end_jd: end.jd,
    })
}

/// The panchang for a civil date at a location.
///
/// The day is bounded by the sunrise on `date` and the sunrise on the
/// following date. A location with no sunrise that day yields
/// [`EphemerisError::Polar`]. Moonrise and moonset are best-effort.
pub fn panchang_for_day<P>(
    provider: &P,
    date: CivilDate,
    location: &Location,
    config: &PanchangConfig,
) -> Result<PanchangSnapshot, SearchError>
where
    P: EphemerisProvider + ?Sized,
{
    location.validate()?;
    config.validate()?;
    date.validate()?;
    let offset = location.utc_offset_hours;

    let sun = provider.sun_times(date, location)?;
    let sunrise = sun.rise_jd.ok_or(EphemerisError::Polar)?;
    let sunset = sun.set_jd.ok_or(EphemerisError::Polar)?;
    let next_sunrise = provider
        .sun_times(date.succ(), location)?
        .rise_jd
        .ok_or(EphemerisError::Polar)?;

    let tithi_today = tithi_at(provider, sunrise, offset, config)?;
    let tithi_tomorrow = tithi_from_elongation(lunar_phase_at(provider, next_sunrise)?).tithi_index;
    let (tithi, tithi_skipped) = skip_corrected(
        tithi_today.clone(),
        tithi_today.index,
        tithi_today.end_jd,
        tithi_tomorrow,
        30,
        |jd| tithi_at(provider, jd, offset, config),
    )?;

    let nak_today = nakshatra_at(provider, sunrise, offset, config)?;
    let nak_tomorrow = nakshatra_from_longitude(moon_sidereal_at(provider, next_sunrise)?).nakshatra_index;
    let end_jd = nak_today.end_jd;
    let today_index = nak_today.index;
    let (nakshatra, nakshatra_skipped) = skip_corrected(
        nak_today,
        today_index,
        end_jd,
        nak_tomorrow,
        27,
        |jd| nakshatra_at(provider, jd, offset, config),
    )?;

    let yoga_today = yoga_at(provider, sunrise, offset, config)?;
    let yoga_tomorrow = yoga_from_sum(sidereal_sum_at(provider, next_sunrise)?).yoga_index;
    let end_jd = yoga_today.end_jd;
    let today_index = yoga_today.index;
    let (yoga, yoga_skipped) = skip_corrected(
        yoga_today,
        today_index,
        end_jd,
        yoga_tomorrow,
        27,
        |jd| yoga_at(provider, jd, offset, config),
    )?;

    let karana = karana_at(provider, sunrise, offset, config)?;

    let day_list = tithis_in_day(provider, sunrise, next_sunrise, offset, config)?;
    let day_tithis = tag_day_intervals(&day_list, |t| (t.start_jd, t.end_jd), sunrise, next_sunrise)
        .into_iter()
        .map(|(t, tag)| TaggedTithi {
            tithi: t.clone(),
            tag,
        })
        .collect();

    let masa = masa_info_for_ordinal(provider, tithi.ordinal(), sunrise, offset)?;
    let paksha = paksha_info(provider, &tithi, offset)?;
    let ritu = ritu_info(provider, &masa, offset)?;
    let ayana = ayana_info(provider, sunrise, offset, config)?;
    let samvatsara = samvatsara_from_year(lunar_year_start(date.year, date.month, masa.index));

    let moon = match provider.moon_times(date, location) {
        Ok(times) => times,
        Err(e) => {
            debug!(%date, error = %e, "moon rise/set unavailable");
            Default::default()
        }
    };

    let sun_rashi = rashi_at(provider, Body::Sun, sunrise, offset, config)?;
    let moon_rashi = rashi_at(provider, Body::Moon, sunrise, offset, config)?;

    debug!(%date, tithi = tithi.index, tithi_skipped, nakshatra = nakshatra.index, "panchang computed");

    Ok(PanchangSnapshot {
        date,
        location: *location,
        sunrise: CivilTime::from_jd_ut(sunrise, offset),
        sunset: CivilTime::from_jd_ut(sunset, offset),
        next_sunrise: CivilTime::from_jd_ut(next_sunrise, offset),
        moonrise: civil(moon.rise_jd, offset),
        moonset: civil(moon.set_jd, offset),
        vaar: vaar_from_jd(sunrise, offset),
        paksha,
        tithi,
        tithi_skipped,
        day_tithis,
        nakshatra,
        nakshatra_skipped,
        yoga,
        yoga_skipped,
        karana,
        masa,
        ritu,
        ayana,
        samvatsara,
        sun_rashi,
        moon_rashi,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panchang_types::Localizer;
    use crate::test_support::{EPOCH, LinearEphemeris, SUN_RATE, SYNODIC_DAYS, utc_location};
    use panchang_base::{DayElementTag, ElementKind, Karana, PeriodKind, RiseSet};

    fn config() -> PanchangConfig {
        PanchangConfig::default()
    }

    /// Elongation grows 30°/day: a tithi lasts 0.4 day, so sunrise days skip tithis.
    struct FastMoon;

    impl EphemerisProvider for FastMoon {
        fn tropical_longitude(&self, body: Body, jd_ut: f64) -> Result<f64, EphemerisError> {
            let days = jd_ut - EPOCH;
            let sun = (280.0 + SUN_RATE * days).rem_euclid(360.0);
            match body {
                Body::Sun => Ok(sun),
                Body::Moon => Ok((sun + 30.0 * days).rem_euclid(360.0)),
                other => Err(EphemerisError::Unsupported(other)),
            }
        }

        fn ayanamsha(&self, _jd_ut: f64) -> Result<f64, EphemerisError> {
            Ok(24.0)
        }

        fn sun_times(&self, date: CivilDate, location: &Location) -> Result<RiseSet, EphemerisError> {
            let midnight = date.jd_midnight_ut(location.utc_offset_hours);
            Ok(RiseSet {
                rise_jd: Some(midnight + 0.25),
                set_jd: Some(midnight + 0.75),
            })
        }
    }

    #[test]
    fn tithi_interval_on_linear_provider() {
        let eph = LinearEphemeris::default();
        let tithi_days = SYNODIC_DAYS / 30.0;
        let t = tithi_at(&eph, EPOCH + 1.5 * tithi_days, 0.0, &config()).unwrap();
        assert_eq!(t.index, 1);
        assert_eq!(t.paksha, Paksha::Shukla);
        assert!((t.start_jd - (EPOCH + tithi_days)).abs() < 1e-4);
        assert!((t.end_jd - (EPOCH + 2.0 * tithi_days)).abs() < 1e-4);
    }

    #[test]
    fn amavasya_ends_at_new_moon() {
        let eph = LinearEphemeris::default();
        let t = tithi_at(&eph, EPOCH - 0.3, 0.0, &config()).unwrap();
        assert_eq!(t.index, 29);
        assert_eq!(t.name, "Amavasya");
        assert!((t.end_jd - EPOCH).abs() < 1e-4);
    }

    #[test]
    fn karana_halves_the_tithi() {
        let eph = LinearEphemeris::default();
        let k = karana_at(&eph, EPOCH + 0.1, 0.0, &config()).unwrap();
        assert_eq!(k.position, 0);
        assert_eq!(k.karana, Karana::Kimstughna);
        let half = SYNODIC_DAYS / 60.0;
        assert!((k.end_jd - (EPOCH + half)).abs() < 1e-4);
    }

    #[test]
    fn rashi_spans() {
        let eph = LinearEphemeris::default();
        let sun = rashi_at(&eph, Body::Sun, EPOCH, 0.0, &config()).unwrap();
        // sidereal 256° → Dhanu, next ingress at 270°
        assert_eq!(sun.index, 8);
        assert!((sun.end_jd - (EPOCH + 14.0 / SUN_RATE)).abs() < 1e-4);
        assert!(sun.start_jd < EPOCH);
        let moon = rashi_at(&eph, Body::Moon, EPOCH, 0.0, &config()).unwrap();
        assert_eq!(moon.index, 8);
        assert!(matches!(
            rashi_at(&eph, Body::Jupiter, EPOCH, 0.0, &config()),
            Err(SearchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn element_intervals_contain_query() {
        let eph = LinearEphemeris::default();
        let jd = EPOCH + 7.3;
        let n = nakshatra_at(&eph, jd, 0.0, &config()).unwrap();
        let y = yoga_at(&eph, jd, 0.0, &config()).unwrap();
        for (s, e) in [(n.start_jd, n.end_jd), (y.start_jd, y.end_jd)] {
            assert!(s <= jd && jd < e);
            assert!(e - s < 1.2);
        }
        assert!((1..=4).contains(&n.pada));
    }

    #[test]
    fn snapshot_without_skip() {
        let eph = LinearEphemeris::default();
        // 2000-01-02: sunrise 06:00 UT = EPOCH + 0.75, inside tithi 0.
        let snap = panchang_for_day(&eph, CivilDate::new(2000, 1, 2), &utc_location(), &config()).unwrap();
        assert_eq!(snap.tithi.index, 0);
        assert!(!snap.tithi_skipped);
        assert_eq!(snap.paksha.paksha, Paksha::Shukla);
        assert_eq!(snap.masa.masa, panchang_base::Masa::Pausha);
        assert_eq!(snap.ritu.ritu, panchang_base::Ritu::Hemanta);
        assert_eq!(snap.ayana.ayana, panchang_base::Ayana::Dakshinayana);
        assert_eq!((snap.sunrise.hour, snap.next_sunrise.day), (6, 3));
        assert!(snap.moonrise.is_none());
        let tags: Vec<_> = snap.day_tithis.iter().map(|t| (t.tithi.index, t.tag)).collect();
        assert_eq!(tags, vec![(0, DayElementTag::Normal), (1, DayElementTag::Normal)]);
    }

    #[test]
    fn calendar_periods_contain_sunrise() {
        let eph = LinearEphemeris::default();
        let snap = panchang_for_day(&eph, CivilDate::new(2000, 1, 2), &utc_location(), &config()).unwrap();
        let sunrise = snap.sunrise.to_jd_ut();
        let spans = [
            ("masa", snap.masa.start_jd, snap.masa.end_jd),
            ("paksha", snap.paksha.start_jd, snap.paksha.end_jd),
            ("ritu", snap.ritu.start_jd, snap.ritu.end_jd),
            ("ayana", snap.ayana.start_jd, snap.ayana.end_jd),
        ];
        for (what, start, end) in spans {
            assert!(start <= sunrise && sunrise < end, "{what}: [{start}, {end}) vs {sunrise}");
        }

        // Shukla runs from the EPOCH new moon to the next full moon.
        assert!((snap.paksha.start_jd - EPOCH).abs() < 1e-4);
        assert!((snap.paksha.end_jd - (EPOCH + SYNODIC_DAYS / 2.0)).abs() < 1e-4);
        // Hemanta is Margashirsha plus Pausha.
        assert!((snap.ritu.start_jd - (EPOCH - SYNODIC_DAYS)).abs() < 1e-3);
        assert!((snap.ritu.end_jd - snap.masa.end_jd).abs() < 1e-9);
        // Sidereal Sun 256° at EPOCH: Makara ingress 14° later.
        let to_makara = (270.0 - 256.0) / SUN_RATE;
        assert!((snap.ayana.end_jd - (EPOCH + to_makara)).abs() < 1e-3);
        assert!((snap.ayana.end_jd - snap.ayana.start_jd - 180.0 / SUN_RATE).abs() < 1e-3);
        assert_eq!(snap.ayana.end.day, 15);
    }

    #[test]
    fn snapshot_applies_skip_and_kshaya() {
        // Sunrise at EPOCH + 0.75 (elongation 22.5°, tithi 1), next at
        // EPOCH + 1.75 (52.5°, tithi 4). Tithi 2 is reported.
        let snap = panchang_for_day(&FastMoon, CivilDate::new(2000, 1, 2), &utc_location(), &config()).unwrap();
        assert!(snap.tithi_skipped);
        assert_eq!(snap.tithi.index, 2);
        assert!((snap.tithi.start_jd - (EPOCH + 0.8)).abs() < 1e-4);
        let tags: Vec<_> = snap.day_tithis.iter().map(|t| (t.tithi.index, t.tag)).collect();
        assert_eq!(
            tags,
            vec![
                (1, DayElementTag::Normal),
                (2, DayElementTag::Kshaya),
                (3, DayElementTag::Kshaya),
                (4, DayElementTag::Normal),
            ]
        );
    }

    #[test]
    fn polar_day_is_an_error() {
        struct NoSun;
        impl EphemerisProvider for NoSun {
            fn tropical_longitude(&self, body: Body, jd: f64) -> Result<f64, EphemerisError> {
                LinearEphemeris::default().tropical_longitude(body, jd)
            }
            fn ayanamsha(&self, _jd: f64) -> Result<f64, EphemerisError> {
                Ok(24.0)
            }
            fn sun_times(&self, _d: CivilDate, _l: &Location) -> Result<RiseSet, EphemerisError> {
                Ok(RiseSet::default())
            }
        }
        let r = panchang_for_day(&NoSun, CivilDate::new(2000, 6, 21), &utc_location(), &config());
        assert_eq!(r.unwrap_err(), SearchError::Ephemeris(EphemerisError::Polar));
    }

    #[test]
    fn invalid_inputs_rejected() {
        let eph = LinearEphemeris::default();
        let bad = Location::new(95.0, 0.0, 0.0, 0.0);
        assert!(matches!(
            panchang_for_day(&eph, CivilDate::new(2000, 1, 2), &bad, &config()),
            Err(SearchError::Vedic(_))
        ));
        assert!(matches!(
            panchang_for_day(&eph, CivilDate::new(2000, 2, 30), &utc_location(), &config()),
            Err(SearchError::Time(_))
        ));
    }

    #[test]
    fn localizer_fills_names() {
        struct Labels;
        impl Localizer for Labels {
            fn localize(&self, kind: ElementKind, index: u8) -> Option<String> {
                (kind != ElementKind::Yoga).then(|| format!("{}-{index}", kind.name()))
            }

            fn localize_period(&self, kind: PeriodKind, index: u8) -> Option<String> {
                Some(format!("{}-{index}", kind.name()))
            }
        }
        let eph = LinearEphemeris::default();
        let mut snap = panchang_for_day(&eph, CivilDate::new(2000, 1, 2), &utc_location(), &config()).unwrap();
        snap.localize(&Labels);
        assert_eq!(snap.tithi.name_localized.as_deref(), Some("tithi-0"));
        assert!(snap.day_tithis.iter().all(|t| t.tithi.name_localized.is_some()));
        assert_eq!(snap.yoga.name_localized, None);
        assert!(snap.sun_rashi.name_localized.is_some());
        assert_eq!(snap.masa.name_localized.as_deref(), Some("masa-9"));
        assert_eq!(snap.paksha.name_localized.as_deref(), Some("paksha-0"));
        assert_eq!(snap.ritu.name_localized.as_deref(), Some("ritu-4"));
        assert_eq!(snap.ayana.name_localized.as_deref(), Some("ayana-1"));
    }
}
