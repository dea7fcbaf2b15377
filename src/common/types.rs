//! Core value types shared by strategies, adjustments and reports

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::errors::{FareError, Result};

/// Number of decimal places carried by a fare
pub const FARE_DECIMAL_PLACES: u32 = 2;

/// Round a price to fare precision (2 dp, half-to-even)
///
/// The result always carries exactly 2 decimal places, so `70` comes back as
/// `70.00` when displayed or serialized.
pub fn round_fare(price: Decimal) -> Decimal {
    let mut rounded =
        price.round_dp_with_strategy(FARE_DECIMAL_PLACES, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(FARE_DECIMAL_PLACES);
    rounded
}

/// Time of day a trip starts at
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    #[default]
    Day,
    Night,
}

impl TimeOfDay {
    /// Parse a textual label
    ///
    /// Only `"night"` selects night rates. Any other label, including unknown
    /// ones, prices as a day trip.
    ///
    /// Matching is deliberately wider than an exact comparison: surrounding
    /// whitespace is ignored and case does not matter, so `" NIGHT "` is a
    /// night trip too.
    pub fn from_label(label: &str) -> Self {
        let normalized = label.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "night" => TimeOfDay::Night,
            "day" => TimeOfDay::Day,
            other => {
                tracing::debug!(label = other, "unknown time of day, using day rates");
                TimeOfDay::Day
            }
        }
    }

    pub fn is_night(self) -> bool {
        self == TimeOfDay::Night
    }
}

impl FromStr for TimeOfDay {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from_label(s))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeOfDay::Day => write!(f, "day"),
            TimeOfDay::Night => write!(f, "night"),
        }
    }
}

/// A trip to be priced
///
/// Immutable once built: strategies only ever see `&Trip`, so the same trip
/// can be priced any number of times by any number of strategies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Trip {
    distance_km: Decimal,
    time_of_day: TimeOfDay,
    zones: u32,
}

impl Trip {
    /// Default zone count for a trip
    pub const DEFAULT_ZONES: u32 = 1;

    /// Create a validated trip
    ///
    /// # Errors
    /// * `FareError::InvalidTrip` if `distance_km` is negative or `zones` is zero
    pub fn new(distance_km: Decimal, time_of_day: TimeOfDay, zones: u32) -> Result<Self> {
        if distance_km.is_sign_negative() && !distance_km.is_zero() {
            return Err(FareError::InvalidTrip(format!(
                "distance_km must be non-negative, got {distance_km}"
            )));
        }
        if zones == 0 {
            return Err(FareError::InvalidTrip(
                "zones must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            distance_km,
            time_of_day,
            zones,
        })
    }

    /// Create a day trip within a single zone
    pub fn with_distance(distance_km: Decimal) -> Result<Self> {
        Self::new(distance_km, TimeOfDay::default(), Self::DEFAULT_ZONES)
    }

    pub fn distance_km(&self) -> Decimal {
        self.distance_km
    }

    pub fn time_of_day(&self) -> TimeOfDay {
        self.time_of_day
    }

    pub fn zones(&self) -> u32 {
        self.zones
    }

    /// Same trip taken at a different time of day
    pub fn at(&self, time_of_day: TimeOfDay) -> Self {
        Self {
            time_of_day,
            ..self.clone()
        }
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Trip(distance_km={}, time_of_day={}, zones={})",
            self.distance_km.normalize(),
            self.time_of_day,
            self.zones
        )
    }
}
