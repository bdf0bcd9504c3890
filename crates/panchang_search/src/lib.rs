//! Time-domain search for the panchang engine.
//!
//! This crate provides:
//! - Coarse-scan plus bisection crossing search for wrapping angles
//! - New moon, full moon and sankranti finders
//! - Masa resolution against a provider
//! - Element-at-instant queries and the daily [`PanchangSnapshot`]
//! - The year-long [`TithiBoundaryTable`] batch with its lookups and JSON
//!   cache
//! - The nine-graha [`RashiChart`]
//!
//! Every function takes the provider explicitly and keeps no state between
//! calls. All Julian Days are UT.

pub mod boundary_cache;
pub mod config;
pub mod error;
pub mod lunar_phase;
pub mod masa;
pub mod panchang;
pub mod panchang_types;
pub mod phase;
pub mod rashi_chart;
pub mod sankranti;
pub mod search_util;
pub mod year_boundaries;

#[cfg(test)]
mod test_support;

pub use boundary_cache::{CachedBoundary, from_json, load_table, save_table, to_json};
pub use config::PanchangConfig;
pub use error::SearchError;
pub use lunar_phase::{
    LunarPhase, LunarPhaseEvent, next_amavasya, next_purnima, prev_amavasya, prev_purnima,
    search_amavasyas, search_purnimas,
};
pub use masa::{MasaInfo, masa_for_date, resolve_masa};
pub use panchang::{karana_at, nakshatra_at, panchang_for_day, rashi_at, tithi_at, yoga_at};
pub use panchang_types::{
    AyanaInfo, KaranaInfo, Localizer, NakshatraInfo, PakshaInfo, PanchangSnapshot, RashiInfo,
    RituInfo, TaggedTithi, TithiInfo, YogaInfo,
};
pub use phase::{lunar_phase_at, moon_sidereal_at, sidereal_sum_at, solar_month_at, sun_sidereal_at};
pub use rashi_chart::{GrahaPlacement, RashiChart, rashi_chart};
pub use sankranti::{
    SankrantiEvent, makar_sankranti, next_sankranti, next_specific_sankranti, prev_sankranti,
    prev_specific_sankranti, sankrantis_for_year, search_sankrantis,
};
pub use search_util::{PRECISION_DAYS, find_phase_crossing, find_phase_crossing_backward};
pub use year_boundaries::{
    BoundaryGap, TithiBoundary, TithiBoundaryTable, compute_all_tithi_boundaries,
    compute_tithi_boundaries_for_locations, compute_tithi_boundaries_for_years,
};
