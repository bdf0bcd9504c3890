//! Sunrise skip-ahead correction.
//!
//! Tithi, nakshatra and yoga last roughly a day each. When two transitions
//! fall between consecutive sunrises, the element in between never holds at
//! a sunrise. The day that precedes the gap reports the skipped element.

/// Correct the sunrise element index for a skipped successor.
///
/// If `(tomorrow − today) mod modulus > 1` the element right after `today`
/// was skipped and `(today + 1) mod modulus` is returned; otherwise `today`.
/// The result never moves more than one step past `today`.
pub fn resolve_skipped_element(today: u8, tomorrow: u8, modulus: u8) -> u8 {
    if modulus == 0 {
        return today;
    }
    let m = modulus as i16;
    let advance = (tomorrow as i16 - today as i16).rem_euclid(m);
    if advance > 1 {
        ((today as i16 + 1).rem_euclid(m)) as u8
    } else {
        today
    }
}

/// Whether the element after `today` is skipped before the next sunrise.
pub fn is_skipped(today: u8, tomorrow: u8, modulus: u8) -> bool {
    resolve_skipped_element(today, tomorrow, modulus) != today
}
