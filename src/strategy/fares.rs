use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::common::errors::{FareError, Result};
use crate::common::types::{round_fare, Trip};
use crate::strategy::traits::{BoxedFareStrategy, FareStrategy};

fn overflow(what: &str, trip: &Trip) -> FareError {
    FareError::ArithmeticOverflow(format!("{what} overflowed for {trip}"))
}

/// Bus fare
/// - 40.00 boarding
/// - 3.00 per km
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BusFare;

impl BusFare {
    pub const BASE: Decimal = dec!(40.0);
    pub const PER_KM: Decimal = dec!(3.0);
}

impl FareStrategy for BusFare {
    fn name(&self) -> &str {
        "bus"
    }

    fn calculate_price(&self, trip: &Trip) -> Result<Decimal> {
        let price = Self::PER_KM
            .checked_mul(trip.distance_km())
            .and_then(|distance_part| Self::BASE.checked_add(distance_part))
            .ok_or_else(|| overflow("bus fare", trip))?;

        Ok(round_fare(price))
    }
}

/// Metro fare
/// - 55.00 for the first zone
/// - 20.00 for every zone after the first
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetroFare;

impl MetroFare {
    pub const BASE_ZONE: Decimal = dec!(55.0);
    pub const EXTRA_ZONE: Decimal = dec!(20.0);
}

impl FareStrategy for MetroFare {
    fn name(&self) -> &str {
        "metro"
    }

    fn calculate_price(&self, trip: &Trip) -> Result<Decimal> {
        let extra_zones = trip.zones().saturating_sub(1);
        if extra_zones == 0 {
            return Ok(round_fare(Self::BASE_ZONE));
        }

        // u32 * 20 always fits in a Decimal
        let price = Self::BASE_ZONE + Self::EXTRA_ZONE * Decimal::from(extra_zones);
        Ok(round_fare(price))
    }
}

/// Taxi fare
/// - 100.00 pickup
/// - 15.00 per km
/// - +20% on the whole fare at night
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaxiFare;

impl TaxiFare {
    pub const PICKUP: Decimal = dec!(100.0);
    pub const PER_KM: Decimal = dec!(15.0);
    pub const NIGHT_MULTIPLIER: Decimal = dec!(1.2);
}

impl FareStrategy for TaxiFare {
    fn name(&self) -> &str {
        "taxi"
    }

    fn calculate_price(&self, trip: &Trip) -> Result<Decimal> {
        let mut price = Self::PER_KM
            .checked_mul(trip.distance_km())
            .and_then(|distance_part| Self::PICKUP.checked_add(distance_part))
            .ok_or_else(|| overflow("taxi fare", trip))?;

        if trip.time_of_day().is_night() {
            price = price
                .checked_mul(Self::NIGHT_MULTIPLIER)
                .ok_or_else(|| overflow("taxi night surcharge", trip))?;
        }

        Ok(round_fare(price))
    }
}

/// Transport mode, selectable at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Bus,
    Metro,
    Taxi,
}

impl TransportMode {
    /// Every mode, in report order
    pub const ALL: [TransportMode; 3] = [TransportMode::Bus, TransportMode::Metro, TransportMode::Taxi];

    /// Get the fare strategy for this mode
    pub fn strategy(self) -> BoxedFareStrategy {
        match self {
            TransportMode::Bus => Box::new(BusFare),
            TransportMode::Metro => Box::new(MetroFare),
            TransportMode::Taxi => Box::new(TaxiFare),
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportMode::Bus => write!(f, "bus"),
            TransportMode::Metro => write!(f, "metro"),
            TransportMode::Taxi => write!(f, "taxi"),
        }
    }
}
