//! Civil calendar date/time carrying an explicit UTC offset.
//!
//! `CivilTime` is the instant type handed to callers. Internally the engine
//! works in Julian Days (UT); the offset only matters when converting to or
//! from wall-clock fields.

use std::fmt;

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, TimeZone, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::{calendar_to_jd, civil_from_day_number, days_in_month};

const MS_PER_DAY: i64 = 86_400_000;
const MAX_OFFSET_HOURS: f64 = 14.0;

/// A Gregorian calendar day, without time of day or offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CivilDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CivilDate {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Build a date, rejecting impossible year/month/day triples.
    pub fn try_new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        let date = Self::new(year, month, day);
        date.validate()?;
        Ok(date)
    }

    /// Parse `YYYY-MM-DD`.
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let d = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")?;
        Ok(Self::new(d.year(), d.month(), d.day()))
    }

    pub fn validate(&self) -> Result<(), TimeError> {
        if self.day == 0 || self.day > days_in_month(self.year, self.month) {
            return Err(TimeError::InvalidDate {
                year: self.year,
                month: self.month,
                day: self.day,
            });
        }
        Ok(())
    }

    /// Julian Day (UT) of local midnight starting this date.
    pub fn jd_midnight_ut(&self, offset_hours: f64) -> f64 {
        calendar_to_jd(self.year, self.month, self.day as f64) - offset_hours / 24.0
    }

    /// The following calendar day.
    pub fn succ(&self) -> Self {
        if self.day < days_in_month(self.year, self.month) {
            Self::new(self.year, self.month, self.day + 1)
        } else if self.month < 12 {
            Self::new(self.year, self.month + 1, 1)
        } else {
            Self::new(self.year + 1, 1, 1)
        }
    }

    /// The preceding calendar day.
    pub fn pred(&self) -> Self {
        if self.day > 1 {
            Self::new(self.year, self.month, self.day - 1)
        } else if self.month > 1 {
            Self::new(self.year, self.month - 1, days_in_month(self.year, self.month - 1))
        } else {
            Self::new(self.year - 1, 12, 31)
        }
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Civil date and time of day at a fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CivilTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
    /// Offset from UTC in hours, east positive (IST = 5.5).
    pub offset_hours: f64,
}

impl CivilTime {
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
        offset_hours: f64,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            offset_hours,
        }
    }

    /// Local midnight of `date` at the given offset.
    pub fn midnight(date: CivilDate, offset_hours: f64) -> Self {
        Self::new(date.year, date.month, date.day, 0, 0, 0.0, offset_hours)
    }

    /// Check field ranges and the offset.
    pub fn validate(&self) -> Result<(), TimeError> {
        self.date().validate()?;
        if self.hour > 23 || self.minute > 59 || !(0.0..60.0).contains(&self.second) {
            return Err(TimeError::InvalidTime {
                hour: self.hour,
                minute: self.minute,
                second: self.second,
            });
        }
        if !self.offset_hours.is_finite() || self.offset_hours.abs() > MAX_OFFSET_HOURS {
            return Err(TimeError::InvalidOffset(self.offset_hours));
        }
        Ok(())
    }

    /// The calendar day of this instant in its own offset.
    pub fn date(&self) -> CivilDate {
        CivilDate::new(self.year, self.month, self.day)
    }

    /// Julian Day in UT.
    pub fn to_jd_ut(&self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / 86_400.0;
        calendar_to_jd(self.year, self.month, day_frac) - self.offset_hours / 24.0
    }

    /// Civil fields of a UT Julian Day, expressed at `offset_hours`.
    ///
    /// Rounded to the millisecond so that a value a hair under a minute
    /// boundary does not print as `:59.999999`.
    pub fn from_jd_ut(jd_ut: f64, offset_hours: f64) -> Self {
        let local = jd_ut + offset_hours / 24.0;
        let total_ms = ((local + 0.5) * MS_PER_DAY as f64).round() as i64;
        let day_number = total_ms.div_euclid(MS_PER_DAY);
        let ms_of_day = total_ms.rem_euclid(MS_PER_DAY);
        let (year, month, day) = civil_from_day_number(day_number);

        let hour = (ms_of_day / 3_600_000) as u32;
        let minute = ((ms_of_day % 3_600_000) / 60_000) as u32;
        let second = (ms_of_day % 60_000) as f64 / 1000.0;
        Self::new(year, month, day, hour, minute, second, offset_hours)
    }

    /// Same instant expressed at a different offset.
    pub fn with_offset(&self, offset_hours: f64) -> Self {
        Self::from_jd_ut(self.to_jd_ut(), offset_hours)
    }

    /// Convert to a `chrono` timestamp. `None` when a field is out of range.
    pub fn to_chrono(&self) -> Option<DateTime<FixedOffset>> {
        let offset = FixedOffset::east_opt((self.offset_hours * 3600.0).round() as i32)?;
        let whole = self.second.floor();
        let nanos = ((self.second - whole) * 1e9).round().min(999_999_999.0) as u32;
        let naive = NaiveDate::from_ymd_opt(self.year, self.month, self.day)?.and_hms_nano_opt(
            self.hour,
            self.minute,
            whole as u32,
            nanos,
        )?;
        offset.from_local_datetime(&naive).single()
    }

    /// Build from a `chrono` timestamp, keeping its offset.
    pub fn from_chrono(dt: &DateTime<FixedOffset>) -> Self {
        let offset_hours = dt.offset().local_minus_utc() as f64 / 3600.0;
        Self::new(
            dt.year(),
            dt.month(),
            dt.day(),
            dt.hour(),
            dt.minute(),
            dt.second() as f64 + dt.nanosecond() as f64 / 1e9,
            offset_hours,
        )
    }

    /// Parse an RFC 3339 / ISO-8601 instant such as `2024-01-15T06:42:00+05:30`.
    pub fn parse_rfc3339(s: &str) -> Result<Self, TimeError> {
        let dt = DateTime::parse_from_rfc3339(s.trim())?;
        Ok(Self::from_chrono(&dt))
    }
}

impl fmt::Display for CivilTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let offset_minutes = (self.offset_hours * 60.0).round() as i64;
        let sign = if offset_minutes < 0 { '-' } else { '+' };
        let abs = offset_minutes.abs();
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}{}{:02}:{:02}",
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second.floor() as u32,
            sign,
            abs / 60,
            abs % 60
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IST: f64 = 5.5;

    #[test]
    fn midnight_ist_is_previous_evening_ut() {
        // 2024-01-15 00:00 IST = 2024-01-14 18:30 UT
        let jd = CivilDate::new(2024, 1, 15).jd_midnight_ut(IST);
        let ut = CivilTime::from_jd_ut(jd, 0.0);
        assert_eq!((ut.year, ut.month, ut.day, ut.hour, ut.minute), (2024, 1, 14, 18, 30));
    }

    #[test]
    fn round_trip_with_offset() {
        let t = CivilTime::new(2024, 3, 20, 12, 30, 45.5, IST);
        let back = CivilTime::from_jd_ut(t.to_jd_ut(), IST);
        assert_eq!((back.year, back.month, back.day), (2024, 3, 20));
        assert_eq!((back.hour, back.minute), (12, 30));
        assert!((back.second - 45.5).abs() < 1e-3);
    }

    #[test]
    fn no_sixty_second_artifacts() {
        // One microsecond before midnight rounds up cleanly.
        let jd = CivilDate::new(2024, 12, 31).jd_midnight_ut(0.0) + 1.0 - 1e-6 / 86_400.0;
        let t = CivilTime::from_jd_ut(jd, 0.0);
        assert_eq!((t.year, t.month, t.day, t.hour, t.minute), (2025, 1, 1, 0, 0));
        assert_eq!(t.second, 0.0);
    }

    #[test]
    fn display_with_offset() {
        let t = CivilTime::new(2024, 1, 15, 6, 42, 7.25, IST);
        assert_eq!(t.to_string(), "2024-01-15T06:42:07+05:30");
        let w = CivilTime::new(2024, 1, 15, 6, 42, 0.0, -3.5);
        assert_eq!(w.to_string(), "2024-01-15T06:42:00-03:30");
    }

    #[test]
    fn chrono_round_trip() {
        let t = CivilTime::new(2023, 7, 17, 23, 59, 30.0, IST);
        let dt = t.to_chrono().expect("valid fields");
        assert_eq!(dt.to_rfc3339(), "2023-07-17T23:59:30+05:30");
        let back = CivilTime::from_chrono(&dt);
        assert!((back.to_jd_ut() - t.to_jd_ut()).abs() < 1e-9);
    }

    #[test]
    fn parse_rfc3339_keeps_offset() {
        let t = CivilTime::parse_rfc3339("2024-04-09T03:51:00+05:30").unwrap();
        assert_eq!(t.offset_hours, 5.5);
        assert_eq!((t.hour, t.minute), (3, 51));
    }

    #[test]
    fn with_offset_preserves_instant() {
        let t = CivilTime::new(2024, 1, 1, 0, 0, 0.0, IST);
        let utc = t.with_offset(0.0);
        assert_eq!((utc.year, utc.month, utc.day, utc.hour, utc.minute), (2023, 12, 31, 18, 30));
    }

    #[test]
    fn succ_and_pred_cross_year() {
        assert_eq!(CivilDate::new(2023, 12, 31).succ(), CivilDate::new(2024, 1, 1));
        assert_eq!(CivilDate::new(2024, 3, 1).pred(), CivilDate::new(2024, 2, 29));
        assert_eq!(CivilDate::new(2024, 1, 1).pred(), CivilDate::new(2023, 12, 31));
    }

    #[test]
    fn validate_rejects_bad_dates() {
        assert!(CivilDate::try_new(2023, 2, 29).is_err());
        assert!(CivilDate::try_new(2024, 2, 29).is_ok());
        assert!(CivilTime::new(2024, 1, 1, 24, 0, 0.0, 0.0).validate().is_err());
        assert!(CivilTime::new(2024, 1, 1, 0, 0, 0.0, 15.0).validate().is_err());
    }

    #[test]
    fn parse_date() {
        assert_eq!(CivilDate::parse("2024-10-12").unwrap(), CivilDate::new(2024, 10, 12));
        assert!(CivilDate::parse("2024-13-01").is_err());
    }
}
