//! Short-range Forecast Reduction
//!
//! Reduces a provider's daily forecast (already fetched and parsed by the
//! caller) to the 7-day summary the advisors work with.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A day counts as rainy above this (mm)
pub const RAIN_DAY_THRESHOLD_MM: f64 = 5.0;

/// One forecast day as delivered by the weather provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub date: NaiveDate,
    /// WMO weather interpretation code
    #[serde(default)]
    pub weather_code: u8,
    pub temp_max: Option<f64>,
    pub temp_min: Option<f64>,
    #[serde(default)]
    pub rain_mm: f64,
    #[serde(default)]
    pub wind_kmh: f64,
}

impl DailyForecast {
    pub fn condition(&self) -> &'static str {
        weather_condition(self.weather_code)
    }

    pub fn is_rain_day(&self) -> bool {
        self.rain_mm > RAIN_DAY_THRESHOLD_MM
    }
}

/// Rain-day count and total rain over the forecast window
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ForecastSummary {
    pub rain_days: u32,
    pub total_rain_mm: f64,
}

impl ForecastSummary {
    pub fn new(rain_days: u32, total_rain_mm: f64) -> Self {
        Self { rain_days, total_rain_mm }
    }

    pub fn from_days(days: &[DailyForecast]) -> Self {
        let rain_days = days.iter().filter(|d| d.is_rain_day()).count() as u32;
        let total_rain_mm = days.iter().map(|d| d.rain_mm).sum();
        Self { rain_days, total_rain_mm }
    }

    /// Total rain rounded to one decimal for display
    pub fn display_total_mm(&self) -> f64 {
        (self.total_rain_mm * 10.0).round() / 10.0
    }

    /// General field advice for the coming week
    pub fn farm_advice(&self) -> &'static str {
        if self.rain_days >= 3 {
            "Heavy rain expected. Delay sowing water-sensitive crops."
        } else if self.rain_days >= 1 {
            "Some rain expected. Good time for transplanting."
        } else if self.total_rain_mm < 10.0 {
            "Dry week ahead. Plan irrigation for water-hungry crops."
        } else {
            "Mixed conditions. Monitor daily."
        }
    }

    /// Forecast line of the water report. A dry total takes precedence
    /// over rain-day counts here.
    pub fn report_advice(&self) -> &'static str {
        if self.total_rain_mm < 10.0 {
            "Dry week ahead. Plan irrigation."
        } else if self.rain_days >= 3 {
            "Heavy rain expected. Delay sowing."
        } else if self.rain_days >= 1 {
            "Some rain expected. Good for transplanting."
        } else {
            "Mixed conditions. Monitor daily."
        }
    }
}

/// Condition label for a WMO weather code
pub fn weather_condition(code: u8) -> &'static str {
    match code {
        0 => "Clear Sky",
        1 => "Mainly Clear",
        2 => "Partly Cloudy",
        3 => "Overcast",
        45 => "Foggy",
        48 => "Fog",
        51 => "Light Drizzle",
        53 => "Drizzle",
        55 => "Heavy Drizzle",
        61 => "Light Rain",
        63 => "Rain",
        65 => "Heavy Rain",
        71 => "Light Snow",
        73 => "Snow",
        75 => "Heavy Snow",
        80 | 81 => "Rain Showers",
        82 => "Heavy Showers",
        95 => "Thunderstorm",
        96 => "Thunderstorm + Hail",
        99 => "Severe Storm",
        _ => "Unknown",
    }
}
