//! Monthly Rainfall Climatology
//!
//! Historical monthly rainfall percentiles (mm) for a single-monsoon region:
//! q20 ("worst"), q50 ("likely") and q80 ("best"). Near-zero Jan-Mar, rising
//! Apr-May, peak Jun-Aug, retreating Sep, tapering Oct-Dec.

use serde::Serialize;

pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Rainfall percentiles for one calendar month (mm)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthlyRainfall {
    pub q20: f64,
    pub q50: f64,
    pub q80: f64,
}

const fn rain(q20: f64, q50: f64, q80: f64) -> MonthlyRainfall {
    MonthlyRainfall { q20, q50, q80 }
}

/// Index 0 = January
pub static MONSOON_RAINFALL: [MonthlyRainfall; 12] = [
    rain(0.0, 0.0, 5.0),       // Jan
    rain(0.0, 0.0, 5.0),       // Feb
    rain(0.0, 5.0, 10.0),      // Mar
    rain(0.0, 10.0, 20.0),     // Apr
    rain(10.0, 25.0, 40.0),    // May
    rain(80.0, 150.0, 220.0),  // Jun, monsoon onset
    rain(150.0, 250.0, 350.0), // Jul
    rain(120.0, 200.0, 300.0), // Aug
    rain(50.0, 120.0, 180.0),  // Sep, retreating
    rain(10.0, 40.0, 80.0),    // Oct
    rain(0.0, 10.0, 30.0),     // Nov
    rain(0.0, 0.0, 10.0),      // Dec
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentiles_ordered() {
        for (i, m) in MONSOON_RAINFALL.iter().enumerate() {
            assert!(m.q20 <= m.q50 && m.q50 <= m.q80, "{}", MONTH_LABELS[i]);
        }
    }

    #[test]
    fn test_monsoon_peak() {
        let peak = MONSOON_RAINFALL
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.q50.total_cmp(&b.1.q50))
            .map(|(i, _)| MONTH_LABELS[i]);
        assert_eq!(peak, Some("Jul"));
    }
}
