//! Vriddhi / Kshaya annotation of element intervals against a sunrise day.
//!
//! A sunrise day runs from one sunrise `S` to the next sunrise `S'`. These
//! tags are display annotations and are independent of the skip-ahead
//! index correction.

use serde::{Deserialize, Serialize};

/// How an element interval sits relative to a sunrise day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayElementTag {
    /// Overlaps the day without spanning both sunrises or hiding between them.
    Normal,
    /// Starts before `S` and ends after `S'`: holds at two sunrises.
    Vriddhi,
    /// Starts after `S` and ends before `S'`: holds at no sunrise.
    Kshaya,
}

/// Classify one `[start, end)` interval against the day `[day_start, day_end)`.
///
/// Returns `None` for intervals that do not belong to the day. That
/// covers the case where `end == day_start`: the element finished exactly
/// at sunrise, so its successor is the day's element.
pub fn classify_day_interval(
    start: f64,
    end: f64,
    day_start: f64,
    day_end: f64,
) -> Option<DayElementTag> {
    if end <= day_start || start >= day_end {
        return None;
    }
    if start > day_start && end < day_end {
        Some(DayElementTag::Kshaya)
    } else if start < day_start && end > day_end {
        Some(DayElementTag::Vriddhi)
    } else {
        Some(DayElementTag::Normal)
    }
}

/// Tag every interval in `items` that belongs to the day, in input order.
///
/// `span` extracts `(start, end)` from an item.
pub fn tag_day_intervals<'a, T, F>(
    items: &'a [T],
    span: F,
    day_start: f64,
    day_end: f64,
) -> Vec<(&'a T, DayElementTag)>
where
    F: Fn(&T) -> (f64, f64),
{
    items
        .iter()
        .filter_map(|item| {
            let (start, end) = span(item);
            classify_day_interval(start, end, day_start, day_end).map(|tag| (item, tag))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR: f64 = 1.0 / 24.0;
    // Day1 00:00 local, as a bare JD-like axis.
    const D1: f64 = 2_460_000.5;
    const SUNRISE_1: f64 = D1 + 6.0 * HOUR;
    const SUNRISE_2: f64 = D1 + 1.0 + 6.0 * HOUR;

    #[test]
    fn interval_between_sunrises_is_kshaya() {
        // 12:00 Day1 → 05:00 Day2
        let tag = classify_day_interval(D1 + 12.0 * HOUR, D1 + 1.0 + 5.0 * HOUR, SUNRISE_1, SUNRISE_2);
        assert_eq!(tag, Some(DayElementTag::Kshaya));
    }

    #[test]
    fn interval_crossing_next_sunrise_is_normal() {
        // 12:00 Day1 → 11:00 Day2 holds at the Day2 sunrise.
        let tag = classify_day_interval(D1 + 12.0 * HOUR, D1 + 1.0 + 11.0 * HOUR, SUNRISE_1, SUNRISE_2);
        assert_eq!(tag, Some(DayElementTag::Normal));
    }

    #[test]
    fn interval_spanning_both_sunrises_is_vriddhi() {
        // 05:00 Day1 → 07:00 Day2
        let tag = classify_day_interval(D1 + 5.0 * HOUR, D1 + 1.0 + 7.0 * HOUR, SUNRISE_1, SUNRISE_2);
        assert_eq!(tag, Some(DayElementTag::Vriddhi));
    }

    #[test]
    fn interval_ending_at_sunrise_is_excluded() {
        assert_eq!(classify_day_interval(D1 - 0.5, SUNRISE_1, SUNRISE_1, SUNRISE_2), None);
    }

    #[test]
    fn interval_starting_at_sunrise_is_normal() {
        let tag = classify_day_interval(SUNRISE_1, SUNRISE_1 + 1.2, SUNRISE_1, SUNRISE_2);
        assert_eq!(tag, Some(DayElementTag::Normal));
    }

    #[test]
    fn tag_list_drops_excluded() {
        let items = [
            (D1 - 0.6, SUNRISE_1),
            (SUNRISE_1, SUNRISE_1 + 0.3),
            (SUNRISE_1 + 0.3, SUNRISE_2 + 0.4),
        ];
        let tagged = tag_day_intervals(&items, |&(s, e)| (s, e), SUNRISE_1, SUNRISE_2);
        assert_eq!(tagged.len(), 2);
        assert_eq!(tagged[0].1, DayElementTag::Normal);
        assert_eq!(tagged[1].1, DayElementTag::Normal);
        assert_eq!(tagged[0].0.0, SUNRISE_1);
    }
}
