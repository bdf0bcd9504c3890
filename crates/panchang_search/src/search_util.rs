//! Coarse-scan plus bisection search for angle crossings.
//!
//! Phase functions here are angles in [0, 360) that increase through time
//! and wrap at 360°. A crossing of `target` is detected between two samples
//! when the signed offset from the target goes from negative to
//! non-negative without a half-turn jump, which handles the 360° → 0° wrap
//! for any target. Refinement keeps that bracket and halves it.

use panchang_base::normalize_to_pm180;
use tracing::trace;

use crate::error::SearchError;

/// Bisection stops once the bracket is narrower than this (≈0.86 s).
pub const PRECISION_DAYS: f64 = 1.0e-5;

/// Upper bound on bisection steps; a one-day bracket needs 17.
const MAX_BISECTIONS: usize = 64;

/// Whether `target` is crossed from below between samples `prev` → `next`.
pub(crate) fn crosses(prev_deg: f64, next_deg: f64, target_deg: f64) -> bool {
    let a = normalize_to_pm180(prev_deg - target_deg);
    let b = normalize_to_pm180(next_deg - target_deg);
    a < 0.0 && b >= 0.0 && b - a < 180.0
}

fn check_step(step_days: f64) -> Result<(), SearchError> {
    if step_days > 0.0 && step_days.is_finite() {
        Ok(())
    } else {
        Err(SearchError::InvalidConfig("search step must be positive"))
    }
}

/// Bisect a bracket `[lo, hi]` known to contain the crossing.
fn refine<F>(mut lo: f64, mut hi: f64, target_deg: f64, phase_fn: &F) -> Result<f64, SearchError>
where
    F: Fn(f64) -> Result<f64, SearchError>,
{
    for _ in 0..MAX_BISECTIONS {
        if hi - lo < PRECISION_DAYS {
            break;
        }
        let mid = 0.5 * (lo + hi);
        if normalize_to_pm180(phase_fn(mid)? - target_deg) < 0.0 {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    Ok(0.5 * (lo + hi))
}

/// First instant in `[start_jd, end_jd]` where `phase_fn` crosses
/// `target_deg` from below.
///
/// Samples sit at `start_jd + i·step_days` with the last one clamped to
/// `end_jd`. Returns `Ok(None)` when the window holds no crossing and
/// `Err` when the phase function fails.
pub fn find_phase_crossing<F>(
    start_jd: f64,
    end_jd: f64,
    target_deg: f64,
    step_days: f64,
    phase_fn: F,
) -> Result<Option<f64>, SearchError>
where
    F: Fn(f64) -> Result<f64, SearchError>,
{
    check_step(step_days)?;
    if !(end_jd > start_jd) {
        return Ok(None);
    }
    let steps = ((end_jd - start_jd) / step_days).ceil() as usize;

    let mut prev_jd = start_jd;
    let mut prev = phase_fn(start_jd)?;
    for i in 1..=steps {
        let jd = (start_jd + i as f64 * step_days).min(end_jd);
        let next = phase_fn(jd)?;
        if crosses(prev, next, target_deg) {
            let found = refine(prev_jd, jd, target_deg, &phase_fn)?;
            trace!(target_deg, jd = found, "crossing refined");
            return Ok(Some(found));
        }
        prev_jd = jd;
        prev = next;
    }
    Ok(None)
}

/// Latest instant in `[end_jd − window_days, end_jd]` where `phase_fn`
/// crosses `target_deg` from below.
pub fn find_phase_crossing_backward<F>(
    end_jd: f64,
    window_days: f64,
    target_deg: f64,
    step_days: f64,
    phase_fn: F,
) -> Result<Option<f64>, SearchError>
where
    F: Fn(f64) -> Result<f64, SearchError>,
{
    check_step(step_days)?;
    if !(window_days > 0.0) {
        return Ok(None);
    }
    let floor_jd = end_jd - window_days;
    let steps = (window_days / step_days).ceil() as usize;

    let mut next_jd = end_jd;
    let mut next = phase_fn(end_jd)?;
    for i in 1..=steps {
        let jd = (end_jd - i as f64 * step_days).max(floor_jd);
        let prev = phase_fn(jd)?;
        if crosses(prev, next, target_deg) {
            let found = refine(jd, next_jd, target_deg, &phase_fn)?;
            trace!(target_deg, jd = found, "backward crossing refined");
            return Ok(Some(found));
        }
        next_jd = jd;
        next = prev;
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SYNODIC: f64 = 29.53;
    const EPOCH: f64 = 2_451_545.0;

    fn linear(jd: f64) -> Result<f64, SearchError> {
        Ok(((jd - EPOCH) * 360.0 / SYNODIC).rem_euclid(360.0))
    }

    #[test]
    fn crossing_detects_wrap_at_zero() {
        assert!(crosses(359.0, 1.0, 0.0));
        assert!(!crosses(1.0, 359.0, 0.0));
        assert!(!crosses(10.0, 20.0, 0.0));
    }

    #[test]
    fn crossing_ignores_half_turn_jumps() {
        // 170° → 10° relative to target 180 is not a forward crossing.
        assert!(!crosses(170.0, 10.0, 180.0));
        assert!(crosses(179.0, 181.0, 180.0));
    }

    #[test]
    fn linear_half_turn() {
        let jd = find_phase_crossing(EPOCH, EPOCH + 30.0, 180.0, 0.25, linear)
            .unwrap()
            .unwrap();
        assert!((jd - (EPOCH + 14.765)).abs() < 1e-4, "jd = {jd}");
    }

    #[test]
    fn wrap_target_zero() {
        let jd = find_phase_crossing(EPOCH + 1.0, EPOCH + 35.0, 0.0, 0.25, linear)
            .unwrap()
            .unwrap();
        assert!((jd - (EPOCH + SYNODIC)).abs() < 1e-4, "jd = {jd}");
    }

    #[test]
    fn no_crossing_in_short_window() {
        let r = find_phase_crossing(EPOCH + 1.0, EPOCH + 2.0, 180.0, 0.25, linear).unwrap();
        assert_eq!(r, None);
    }

    #[test]
    fn backward_finds_latest() {
        let jd = find_phase_crossing_backward(EPOCH + 20.0, 10.0, 180.0, 0.25, linear)
            .unwrap()
            .unwrap();
        assert!((jd - (EPOCH + 14.765)).abs() < 1e-4);
    }

    #[test]
    fn deterministic() {
        let a = find_phase_crossing(EPOCH, EPOCH + 30.0, 123.4, 0.25, linear).unwrap();
        let b = find_phase_crossing(EPOCH, EPOCH + 30.0, 123.4, 0.25, linear).unwrap();
        assert_eq!(a.map(f64::to_bits), b.map(f64::to_bits));
    }

    #[test]
    fn error_propagates() {
        let failing = |_jd: f64| -> Result<f64, SearchError> { Err(SearchError::NoCrossingFound("stub")) };
        assert!(find_phase_crossing(EPOCH, EPOCH + 1.0, 0.0, 0.25, failing).is_err());
    }

    #[test]
    fn bad_step_is_config_error() {
        let r = find_phase_crossing(EPOCH, EPOCH + 1.0, 0.0, 0.0, linear);
        assert!(matches!(r, Err(SearchError::InvalidConfig(_))));
    }
}
