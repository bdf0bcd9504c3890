//! Search configuration.

use panchang_base::AyanamshaSystem;
use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Shortest tithi is about 0.82 day; the scan step must stay below it.
const MAX_SCAN_STEP_DAYS: f64 = 0.5;

/// Tunables for scans and the year batch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanchangConfig {
    /// Coarse scan step for lunar elements, days.
    pub scan_step_days: f64,
    /// Days scanned before Jan 1 and after Dec 31 in the year batch.
    pub padding_days: f64,
    /// How far past a tithi start to look for its end, days.
    pub boundary_end_window_days: f64,
    /// Coarse scan step for sankranti searches, days.
    pub sankranti_step_days: f64,
    /// Sidereal model for the reference provider.
    pub ayanamsha_system: AyanamshaSystem,
}

impl Default for PanchangConfig {
    fn default() -> Self {
        Self {
            scan_step_days: 0.25,
            padding_days: 15.0,
            boundary_end_window_days: 2.0,
            sankranti_step_days: 1.0,
            ayanamsha_system: AyanamshaSystem::Lahiri,
        }
    }
}

impl PanchangConfig {
    pub fn validate(&self) -> Result<(), SearchError> {
        if !(self.scan_step_days > 0.0 && self.scan_step_days <= MAX_SCAN_STEP_DAYS) {
            return Err(SearchError::InvalidConfig("scan_step_days must be in (0, 0.5]"));
        }
        if !(self.padding_days >= 0.0 && self.padding_days.is_finite()) {
            return Err(SearchError::InvalidConfig("padding_days must be non-negative"));
        }
        if !(self.boundary_end_window_days >= 1.5 && self.boundary_end_window_days.is_finite()) {
            return Err(SearchError::InvalidConfig("boundary_end_window_days must be at least 1.5"));
        }
        if !(self.sankranti_step_days > 0.0 && self.sankranti_step_days <= 10.0) {
            return Err(SearchError::InvalidConfig("sankranti_step_days must be in (0, 10]"));
        }
        Ok(())
    }
}
