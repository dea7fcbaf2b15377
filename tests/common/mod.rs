//! Common test utilities and fixtures

#![allow(dead_code)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use transit_fares::{TimeOfDay, Trip};

/// The 10 km, 2 zone trip used throughout the fare scenarios
pub fn sample_day_trip() -> Trip {
    Trip::new(dec!(10), TimeOfDay::Day, 2).expect("valid sample trip")
}

/// Same as [`sample_day_trip`] but at night
pub fn sample_night_trip() -> Trip {
    Trip::new(dec!(10), TimeOfDay::Night, 2).expect("valid sample trip")
}

/// Distances covering zero, fractional and long trips
pub fn sample_distances() -> Vec<Decimal> {
    vec![
        Decimal::ZERO,
        dec!(0.1),
        dec!(0.333),
        dec!(1),
        dec!(2.5),
        dec!(7.77),
        dec!(10),
        dec!(42.195),
        dec!(120),
        dec!(999.99),
    ]
}
