//! Sidereal rashi placement of the nine grahas at one instant.

use panchang_base::{
    ALL_GRAHAS, EphemerisError, EphemerisProvider, Graha, Rashi, normalize_360, rashi_from_longitude,
};
use serde::Serialize;
use tracing::debug;

use crate::error::SearchError;

/// One graha's place in the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GrahaPlacement {
    pub graha: Graha,
    pub rashi: Rashi,
    /// 0-based rashi index (0 = Mesha).
    pub rashi_index: u8,
    /// Degrees inside the rashi [0, 30).
    pub degrees_in_rashi: f64,
    pub sidereal_longitude_deg: f64,
}

/// Rashi chart. Grahas the provider cannot place are listed in `omitted`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RashiChart {
    pub jd: f64,
    /// Placements in traditional graha order.
    pub placements: Vec<GrahaPlacement>,
    pub omitted: Vec<Graha>,
}

impl RashiChart {
    pub fn placement(&self, graha: Graha) -> Option<&GrahaPlacement> {
        self.placements.iter().find(|p| p.graha == graha)
    }

    /// Grahas grouped by rashi index.
    pub fn by_rashi(&self) -> [Vec<Graha>; 12] {
        let mut houses: [Vec<Graha>; 12] = Default::default();
        for p in &self.placements {
            houses[p.rashi_index as usize].push(p.graha);
        }
        houses
    }
}

/// Place every graha at `jd_ut`.
///
/// Surya and Chandra are mandatory and their errors propagate. Any other
/// graha the provider reports as unsupported or unavailable is omitted.
pub fn rashi_chart<P>(provider: &P, jd_ut: f64) -> Result<RashiChart, SearchError>
where
    P: EphemerisProvider + ?Sized,
{
    let mut placements = Vec::with_capacity(ALL_GRAHAS.len());
    let mut omitted = Vec::new();

    for graha in ALL_GRAHAS {
        let lon = match provider.sidereal_longitude(graha.body(), jd_ut) {
            Ok(lon) => normalize_360(lon + graha.offset_deg()),
            Err(e @ (EphemerisError::Unsupported(_) | EphemerisError::Unavailable { .. }))
                if !matches!(graha, Graha::Surya | Graha::Chandra) =>
            {
                debug!(graha = graha.name(), error = %e, "graha omitted from chart");
                omitted.push(graha);
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        let pos = rashi_from_longitude(lon);
        placements.push(GrahaPlacement {
            graha,
            rashi: pos.rashi,
            rashi_index: pos.rashi_index,
            degrees_in_rashi: pos.degrees_in_rashi,
            sidereal_longitude_deg: lon,
        });
    }

    Ok(RashiChart {
        jd: jd_ut,
        placements,
        omitted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{EPOCH, FlakyEphemeris, LinearEphemeris};

    #[test]
    fn linear_chart_places_luminaries_and_nodes() {
        let chart = rashi_chart(&LinearEphemeris::default(), EPOCH).unwrap();
        assert_eq!(chart.placements.len(), 4);
        assert_eq!(
            chart.omitted,
            vec![Graha::Mangal, Graha::Buddh, Graha::Guru, Graha::Shukra, Graha::Shani]
        );
        // sidereal Sun 256° → Dhanu 16°
        let sun = chart.placement(Graha::Surya).unwrap();
        assert_eq!(sun.rashi, Rashi::Dhanu);
        assert!((sun.degrees_in_rashi - 16.0).abs() < 1e-9);
        // Rahu 125 − 24 = 101° (Karka); Ketu opposite at 281° (Makara)
        let rahu = chart.placement(Graha::Rahu).unwrap();
        let ketu = chart.placement(Graha::Ketu).unwrap();
        assert_eq!(rahu.rashi, Rashi::Karka);
        assert_eq!(ketu.rashi, Rashi::Makara);
        assert!((normalize_360(ketu.sidereal_longitude_deg - rahu.sidereal_longitude_deg) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn by_rashi_groups() {
        let chart = rashi_chart(&LinearEphemeris::default(), EPOCH).unwrap();
        let houses = chart.by_rashi();
        assert_eq!(houses[8], vec![Graha::Surya, Graha::Chandra]);
        assert_eq!(houses.iter().map(Vec::len).sum::<usize>(), 4);
    }

    #[test]
    fn moon_failure_propagates() {
        let eph = FlakyEphemeris {
            inner: LinearEphemeris::default(),
            fail_from: EPOCH - 1.0,
            fail_to: EPOCH + 1.0,
        };
        assert!(matches!(rashi_chart(&eph, EPOCH), Err(SearchError::Ephemeris(_))));
    }
}
