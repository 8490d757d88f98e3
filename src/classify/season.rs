//! Cropping Seasons
//!
//! Kharif (monsoon-sown), Rabi (winter-sown) and Zaid (short summer).
//! The engine never reads the clock; callers derive the season from a
//! month or date and pass it in.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    /// June-October
    Kharif,

    /// November-February
    Rabi,

    /// March-May
    Zaid,
}

impl Season {
    /// Season for a calendar month (1 = January).
    /// Months outside 1..=12 wrap.
    pub fn from_month(month: u32) -> Self {
        let month = (month % 12 + 11) % 12 + 1;
        match month {
            6..=10 => Season::Kharif,
            11 | 12 | 1 | 2 => Season::Rabi,
            _ => Season::Zaid,
        }
    }

    pub fn from_date<D: Datelike>(date: &D) -> Self {
        Self::from_month(date.month())
    }

    /// Case-insensitive parse of a season token
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().as_str() {
            "kharif" => Some(Season::Kharif),
            "rabi" => Some(Season::Rabi),
            "zaid" => Some(Season::Zaid),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Kharif => "Kharif",
            Season::Rabi => "Rabi",
            Season::Zaid => "Zaid",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Does a crop's season descriptor (e.g. "Kharif/Rabi", "Annual") accept
/// the requested season token?
///
/// Case-insensitive substring containment, so an empty token accepts every
/// crop and an unrecognised token only accepts Annual crops.
pub fn descriptor_accepts(descriptor: &str, season: &str) -> bool {
    if descriptor.eq_ignore_ascii_case("Annual") {
        return true;
    }
    descriptor
        .to_lowercase()
        .contains(season.trim().to_lowercase().as_str())
}
