//! Time utilities for the panchang engine.
//!
//! This crate provides:
//! - Julian Day ↔ Gregorian calendar conversions
//! - `CivilTime`, a civil date/time carrying its own UTC offset
//! - ΔT (TT − UT) from the Espenak–Meeus polynomials
//! - Greenwich and local mean sidereal time
//!
//! Every Julian Day handled here is in UT unless a function says otherwise.
//! Nothing reads the process timezone; offsets are always explicit.

pub mod civil_time;
pub mod delta_t;
pub mod error;
pub mod julian;
pub mod sidereal;

pub use civil_time::{CivilDate, CivilTime};
pub use delta_t::{delta_t_days, delta_t_hours, delta_t_seconds};
pub use error::TimeError;
pub use julian::{
    J2000_JD, SECONDS_PER_DAY, calendar_to_jd, days_in_month, is_leap_year, jd_to_calendar,
    jd_to_centuries,
};
pub use sidereal::{earth_rotation_angle_deg, gmst_deg, local_sidereal_time_deg};
