//! Configuration types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::common::errors::{FareError, Result};
use crate::common::types::{TimeOfDay, Trip};
use crate::strategy::TransportMode;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Trip priced when no trip flags are given
    #[serde(default)]
    pub trip: TripConfig,
    /// Price adjustments layered on the base fare
    #[serde(default)]
    pub adjustments: AdjustmentConfig,
    /// General application settings
    #[serde(default)]
    pub settings: AppSettings,
}

/// Trip parameters as they appear in configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripConfig {
    /// Distance in kilometres
    #[serde(default = "default_distance_km")]
    pub distance_km: Decimal,
    /// "day" or "night"; any other label prices as day
    #[serde(default = "default_time_of_day")]
    pub time_of_day: String,
    /// Number of metro zones crossed
    #[serde(default = "default_zones")]
    pub zones: u32,
}

impl Default for TripConfig {
    fn default() -> Self {
        Self {
            distance_km: default_distance_km(),
            time_of_day: default_time_of_day(),
            zones: default_zones(),
        }
    }
}

fn default_distance_km() -> Decimal {
    Decimal::from(10)
}

fn default_time_of_day() -> String {
    "day".to_string()
}

fn default_zones() -> u32 {
    2
}

impl TryFrom<&TripConfig> for Trip {
    type Error = FareError;

    fn try_from(config: &TripConfig) -> Result<Self> {
        Trip::new(
            config.distance_km,
            TimeOfDay::from_label(&config.time_of_day),
            config.zones,
        )
    }
}

/// Price adjustment configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdjustmentConfig {
    /// Fixed commission added to the base fare
    #[serde(default)]
    pub commission: Option<Decimal>,
    /// Discount percentage (0-100) applied after the commission
    #[serde(default)]
    pub discount_percent: Option<Decimal>,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Modes priced in the report, in order
    #[serde(default = "default_modes")]
    pub modes: Vec<TransportMode>,
    /// Emit the report as JSON instead of text
    #[serde(default)]
    pub json: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            modes: default_modes(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_modes() -> Vec<TransportMode> {
    TransportMode::ALL.to_vec()
}
