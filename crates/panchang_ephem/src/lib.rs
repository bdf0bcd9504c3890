//! Reference analytic ephemeris for the panchang engine.
//!
//! This crate provides:
//! - Solar coordinates (Meeus Ch. 25) and lunar coordinates (Meeus Ch. 47)
//! - Low-precision nutation and obliquity
//! - The mean lunar node
//! - Sun and Moon rise/set by hour-angle iteration
//! - [`AnalyticEphemeris`], an [`panchang_base::EphemerisProvider`] built on
//!   the above
//!
//! Accuracy is a few arcseconds for the Sun and about 10″ for the Moon,
//! enough to time element boundaries to within a minute. Planets are not
//! modelled.

pub mod moon;
pub mod nodes;
pub mod nutation;
pub mod provider;
pub mod riseset;
pub mod sun;

pub use moon::{MoonPosition, moon_position};
pub use nodes::mean_node_deg;
pub use provider::AnalyticEphemeris;
pub use riseset::{RiseSetEvent, RiseSetOutcome, compute_rise_set};
pub use sun::{SunPosition, sun_position};
