//! Samvatsara, the 60-year Jovian cycle.
//!
//! CE 1987 = Prabhava (order 1). The samvatsara turns over at Chaitra
//! Shukla Pratipada, so dates before that day still carry the previous
//! year's name.

use serde::{Deserialize, Serialize};

/// The 60 samvatsaras (index 0 = Prabhava).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Samvatsara {
    Prabhava,
    Vibhava,
    Shukla,
    Pramoda,
    Prajapati,
    Angirasa,
    Shrimukha,
    Bhava,
    Yuva,
    Dhatu,
    Ishvara,
    Bahudhanya,
    Pramathi,
    Vikrama,
    Vrisha,
    Chitrabhanu,
    Svabhanu,
    Tarana,
    Parthiva,
    Vyaya,
    Sarvajit,
    Sarvadhari,
    Virodhi,
    Vikriti,
    Khara,
    Nandana,
    Vijaya,
    Jaya,
    Manmatha,
    Durmukhi,
    Hevilambi,
    Vilambi,
    Vikari,
    Sharvari,
    Plava,
    Shubhakrit,
    Shobhakrit,
    Krodhi,
    Vishvavasu,
    Parabhava,
    Plavanga,
    Kilaka,
    Saumya,
    Sadharana,
    Virodhikrit,
    Paridhavi,
    Pramadicha,
    Ananda,
    Rakshasa,
    Nala,
    Pingala,
    Kalayukti,
    Siddharthi,
    Raudri,
    Durmati,
    Dundubhi,
    Rudhirodgari,
    Raktakshi,
    Krodhana,
    Akshaya,
}

const SAMVATSARA_NAMES: [&str; 60] = [
    "Prabhava", "Vibhava", "Shukla", "Pramoda", "Prajapati", "Angirasa",
    "Shrimukha", "Bhava", "Yuva", "Dhatu", "Ishvara", "Bahudhanya",
    "Pramathi", "Vikrama", "Vrisha", "Chitrabhanu", "Svabhanu", "Tarana",
    "Parthiva", "Vyaya", "Sarvajit", "Sarvadhari", "Virodhi", "Vikriti",
    "Khara", "Nandana", "Vijaya", "Jaya", "Manmatha", "Durmukhi",
    "Hevilambi", "Vilambi", "Vikari", "Sharvari", "Plava", "Shubhakrit",
    "Shobhakrit", "Krodhi", "Vishvavasu", "Parabhava", "Plavanga", "Kilaka",
    "Saumya", "Sadharana", "Virodhikrit", "Paridhavi", "Pramadicha", "Ananda",
    "Rakshasa", "Nala", "Pingala", "Kalayukti", "Siddharthi", "Raudri",
    "Durmati", "Dundubhi", "Rudhirodgari", "Raktakshi", "Krodhana", "Akshaya",
];

const ALL_SAMVATSARAS: [Samvatsara; 60] = {
    use Samvatsara::*;
    [
        Prabhava, Vibhava, Shukla, Pramoda, Prajapati, Angirasa, Shrimukha, Bhava, Yuva, Dhatu,
        Ishvara, Bahudhanya, Pramathi, Vikrama, Vrisha, Chitrabhanu, Svabhanu, Tarana, Parthiva,
        Vyaya, Sarvajit, Sarvadhari, Virodhi, Vikriti, Khara, Nandana, Vijaya, Jaya, Manmatha,
        Durmukhi, Hevilambi, Vilambi, Vikari, Sharvari, Plava, Shubhakrit, Shobhakrit, Krodhi,
        Vishvavasu, Parabhava, Plavanga, Kilaka, Saumya, Sadharana, Virodhikrit, Paridhavi,
        Pramadicha, Ananda, Rakshasa, Nala, Pingala, Kalayukti, Siddharthi, Raudri, Durmati,
        Dundubhi, Rudhirodgari, Raktakshi, Krodhana, Akshaya,
    ]
};

/// CE year whose Chaitra starts Prabhava.
pub const SAMVATSARA_EPOCH_YEAR: i32 = 1987;

impl Samvatsara {
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        SAMVATSARA_NAMES[self as usize]
    }

    /// 1-based position in the cycle.
    pub const fn order(self) -> u8 {
        self as u8 + 1
    }
}

/// Samvatsara of the lunar year that starts at Chaitra of `ce_year`.
pub fn samvatsara_from_year(ce_year: i32) -> Samvatsara {
    ALL_SAMVATSARAS[(ce_year - SAMVATSARA_EPOCH_YEAR).rem_euclid(60) as usize]
}

/// CE year whose Chaitra opened the lunar year containing a date.
///
/// Months Pausha..Phalguna (Amanta 9..=11) that fall in January–April are
/// still the tail of the lunar year begun the previous spring.
pub fn lunar_year_start(gregorian_year: i32, gregorian_month: u32, amanta_index: u8) -> i32 {
    if gregorian_month <= 4 && amanta_index >= 8 {
        gregorian_year - 1
    } else {
        gregorian_year
    }
}
