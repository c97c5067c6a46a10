//! Collaborator boundary for weather data.
//!
//! The dashboard has consumed two weather providers whose payloads name the
//! same quantities differently: one nests readings under a `main` object
//! (`main.temp`, `main.feels_like`, `main.humidity`), the other flattens
//! them with unit-suffixed names (`temp_c`, `feelslike_c`, `humidity`).
//! Both deserialize into a single [`WeatherReading`] here, so the core
//! never special-cases field-name variants. Fetching is out of scope; this
//! module only normalizes payloads handed in by the caller.

use serde::{Deserialize, Serialize};

/// Temperature thresholds for alert classification, in degrees Celsius.
pub const TEMP_HIGH: f64 = 35.0;
pub const TEMP_LOW: f64 = 15.0;
pub const TEMP_EXTREME_HIGH: f64 = 38.0;
pub const TEMP_EXTREME_LOW: f64 = 12.0;
/// 24-hour swing considered a significant change.
pub const TEMP_CHANGE_THRESHOLD: f64 = 8.0;

/// One normalized weather observation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReading {
    pub temp_c: f64,
    pub feels_like_c: Option<f64>,
    pub humidity: f64,
}

impl<'de> Deserialize<'de> for WeatherReading {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct MainBlock {
            temp: f64,
            #[serde(default)]
            feels_like: Option<f64>,
            humidity: f64,
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Payload {
            Nested {
                main: MainBlock,
            },
            Flat {
                temp_c: f64,
                #[serde(default)]
                feelslike_c: Option<f64>,
                humidity: f64,
            },
        }

        Ok(match Payload::deserialize(deserializer)? {
            Payload::Nested { main } => WeatherReading {
                temp_c: main.temp,
                feels_like_c: main.feels_like,
                humidity: main.humidity,
            },
            Payload::Flat {
                temp_c,
                feelslike_c,
                humidity,
            } => WeatherReading {
                temp_c,
                feels_like_c: feelslike_c,
                humidity,
            },
        })
    }
}

/// Severity of a temperature alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TempAlert {
    ExtremeHigh,
    High,
    ExtremeLow,
    Low,
}

/// Classify a temperature against the fixed thresholds; `None` means the
/// reading is in the normal band.
pub fn classify_temp(temp_c: f64) -> Option<TempAlert> {
    if temp_c >= TEMP_EXTREME_HIGH {
        Some(TempAlert::ExtremeHigh)
    } else if temp_c >= TEMP_HIGH {
        Some(TempAlert::High)
    } else if temp_c <= TEMP_EXTREME_LOW {
        Some(TempAlert::ExtremeLow)
    } else if temp_c <= TEMP_LOW {
        Some(TempAlert::Low)
    } else {
        None
    }
}

/// Whether the swing between two readings counts as a significant 24-hour
/// change.
pub fn significant_change(from_c: f64, to_c: f64) -> bool {
    (to_c - from_c).abs() >= TEMP_CHANGE_THRESHOLD
}
