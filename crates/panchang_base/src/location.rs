//! Observer location with its civil UTC offset.

use serde::{Deserialize, Serialize};

use crate::error::VedicError;

/// Geographic location plus the fixed UTC offset used for civil output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Geodetic latitude in degrees, north positive.
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive.
    pub longitude_deg: f64,
    /// Height above mean sea level in meters.
    #[serde(default)]
    pub elevation_m: f64,
    /// Civil offset from UTC in hours, east positive.
    pub utc_offset_hours: f64,
}

impl Location {
    pub fn new(latitude_deg: f64, longitude_deg: f64, elevation_m: f64, utc_offset_hours: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            elevation_m,
            utc_offset_hours,
        }
    }

    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    pub fn validate(&self) -> Result<(), VedicError> {
        if !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(VedicError::InvalidLocation("latitude outside [-90, 90]"));
        }
        if !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(VedicError::InvalidLocation("longitude outside [-180, 180]"));
        }
        if !self.elevation_m.is_finite() || self.elevation_m < -500.0 {
            return Err(VedicError::InvalidLocation("elevation below -500 m"));
        }
        if !(-14.0..=14.0).contains(&self.utc_offset_hours) {
            return Err(VedicError::InvalidLocation("UTC offset outside [-14, 14]"));
        }
        Ok(())
    }
}
