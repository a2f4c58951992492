//! Core data models for Skifeed
//!
//! This module contains the record types produced from a resort feed:
//! the resort itself plus its nested weather, snow, and trail reports.
//! All records are plain owned data; once mapped from a feed they are
//! handed to the caller and never mutated by this crate again.

pub mod client;
pub mod feed;

pub use client::{FeedError, ResortFeedClient, DEFAULT_BASE_URL};
pub use feed::TimeOfDay;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Conditions for one resort, mapped from a single feed document
///
/// The feed reports weather per half-day, so both today and tomorrow carry
/// separate morning and afternoon readings taken from the same day block.
/// String fields default to empty and numeric fields to zero when the feed
/// omits the corresponding node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resort {
    /// Resort display name
    pub name: String,
    /// Season opening date, as printed in the feed
    pub opening: String,
    /// Season closing date, as printed in the feed
    pub closing: String,
    /// Altitude of the resort base, in meters
    pub altitude_low: i32,
    /// Altitude of the highest point, in meters
    pub altitude_high: i32,
    /// URL of the resort's main image
    pub main_image_url: String,
    /// Weather for this morning
    pub weather_today_morning: WeatherReport,
    /// Weather for this afternoon
    pub weather_today_afternoon: WeatherReport,
    /// Weather for tomorrow morning
    pub weather_tomorrow_morning: WeatherReport,
    /// Weather for tomorrow afternoon
    pub weather_tomorrow_afternoon: WeatherReport,
    /// Snow conditions for today
    pub snow_today: SnowReport,
    /// Snow conditions for tomorrow
    pub snow_tomorrow: SnowReport,
    /// Trails in the order the feed lists them
    pub trails: Vec<Trail>,
    /// When this data was fetched
    pub fetched_at: DateTime<Utc>,
}

/// Weather for one half-day (morning or afternoon)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    /// Date of the reading, as printed in the feed
    pub date: String,
    /// Weather condition label (e.g. "Ensoleillé")
    pub conditions: String,
    /// Pictogram identifier for the condition
    pub pictogram: String,
    /// Minimum temperature in degrees Celsius
    pub temp_min: i32,
    /// Maximum temperature in degrees Celsius
    pub temp_max: i32,
    /// Wind description
    pub wind: String,
}

/// Snow conditions for one day
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnowReport {
    /// Date of the report, as printed in the feed
    pub date: String,
    /// Avalanche risk label
    pub avalanche_risk: String,
    /// Snow quality at the resort base
    pub quality_low: String,
    /// Snow quality at the highest point
    pub quality_high: String,
    /// Snow depth at the resort base, in centimeters
    pub depth_low: i32,
    /// Snow depth at the highest point, in centimeters
    pub depth_high: i32,
    /// Recent snowfall at the resort base, in centimeters
    pub fresh_low: i32,
    /// Recent snowfall at the highest point, in centimeters
    pub fresh_high: i32,
}

/// Status of a single trail or itinerary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trail {
    /// Date of the status, as printed in the feed
    pub date: String,
    /// Trail name
    pub name: String,
    /// Opening status label
    pub status: String,
    /// Total length in kilometers
    pub km_total: i32,
    /// Practice types the trail supports (e.g. skating, classic)
    pub practices: String,
    /// Difficulty label
    pub difficulty: String,
    /// Free-text comment
    pub comment: String,
    /// GPS coordinates as printed in the feed
    pub gps_coordinates: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weather_report_defaults_to_zero_values() {
        let report = WeatherReport::default();
        assert_eq!(report.date, "");
        assert_eq!(report.conditions, "");
        assert_eq!(report.pictogram, "");
        assert_eq!(report.temp_min, 0);
        assert_eq!(report.temp_max, 0);
        assert_eq!(report.wind, "");
    }

    #[test]
    fn test_snow_report_defaults_to_zero_values() {
        let report = SnowReport::default();
        assert_eq!(report.avalanche_risk, "");
        assert_eq!(report.depth_low, 0);
        assert_eq!(report.depth_high, 0);
        assert_eq!(report.fresh_low, 0);
        assert_eq!(report.fresh_high, 0);
    }

    #[test]
    fn test_trail_defaults_to_zero_values() {
        let trail = Trail::default();
        assert_eq!(trail.name, "");
        assert_eq!(trail.status, "");
        assert_eq!(trail.km_total, 0);
    }

    #[test]
    fn test_resort_clone_preserves_all_fields() {
        let resort = Resort {
            name: "La Clusaz".to_string(),
            opening: "2024-12-14".to_string(),
            closing: "2025-04-06".to_string(),
            altitude_low: 1000,
            altitude_high: 2600,
            main_image_url: "https://example.com/clusaz.jpg".to_string(),
            weather_today_morning: WeatherReport {
                date: "2025-01-10".to_string(),
                conditions: "Ensoleillé".to_string(),
                pictogram: "soleil".to_string(),
                temp_min: -8,
                temp_max: -2,
                wind: "Faible".to_string(),
            },
            weather_today_afternoon: WeatherReport::default(),
            weather_tomorrow_morning: WeatherReport::default(),
            weather_tomorrow_afternoon: WeatherReport::default(),
            snow_today: SnowReport {
                date: "2025-01-10".to_string(),
                avalanche_risk: "3/5".to_string(),
                quality_low: "Dure".to_string(),
                quality_high: "Poudreuse".to_string(),
                depth_low: 40,
                depth_high: 120,
                fresh_low: 0,
                fresh_high: 15,
            },
            snow_tomorrow: SnowReport::default(),
            trails: vec![Trail {
                name: "Piste Bleue".to_string(),
                km_total: 5,
                ..Trail::default()
            }],
            fetched_at: Utc::now(),
        };

        let copied = resort.clone();
        assert_eq!(copied, resort);
        assert_eq!(copied.trails.len(), 1);
        assert_eq!(copied.trails[0].name, "Piste Bleue");
    }
}
