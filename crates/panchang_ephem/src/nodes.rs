//! Mean lunar node (Rahu).

use panchang_time::jd_to_centuries;

use crate::nutation::normalize_deg;

/// Longitude of the mean ascending node, Meeus 47.7. `jd_tt` in TT.
pub fn mean_node_deg(jd_tt: f64) -> f64 {
    let t = jd_to_centuries(jd_tt);
    let omega = 125.044_547_9
        + t * (-1_934.136_289_1 + t * (0.002_075_4 + t * (1.0 / 467_441.0 - t / 60_616_000.0)));
    normalize_deg(omega)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_at_j2000() {
        assert!((mean_node_deg(2_451_545.0) - 125.044_547_9).abs() < 1e-9);
    }

    #[test]
    fn node_regresses() {
        // About 19.34° per year westward.
        let a = mean_node_deg(2_451_545.0);
        let b = mean_node_deg(2_451_545.0 + 365.25);
        let motion = (a - b).rem_euclid(360.0);
        assert!((motion - 19.34).abs() < 0.05, "motion {motion}");
    }

    #[test]
    fn meeus_example_47a_node() {
        // 1992 April 12.0 TD: Ω = 274.400656°
        assert!((mean_node_deg(2_448_724.5) - 274.400_656).abs() < 1e-4);
    }
}
