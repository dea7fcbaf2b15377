//! Given/when/then fare scenarios
//!
//! Each scenario is written as plain text steps and run through the public
//! API: a trip is built, a strategy chain is assembled, and the calculator's
//! price, rounded to 2 dp, is compared to the expected amount.

mod common;

use rust_decimal::Decimal;
use transit_fares::{
    round_fare, BoxedFareStrategy, CommissionAdjustment, DiscountAdjustment, FareCalculator,
    TimeOfDay, TransportMode, Trip,
};

#[derive(Default)]
struct World {
    trip: Option<Trip>,
    strategy: Option<BoxedFareStrategy>,
}

fn parse_decimal(text: &str) -> Decimal {
    text.trim()
        .parse()
        .unwrap_or_else(|e| panic!("not a number: {text:?} ({e})"))
}

fn parse_mode(text: &str) -> TransportMode {
    match text {
        "bus" => TransportMode::Bus,
        "metro" => TransportMode::Metro,
        "taxi" => TransportMode::Taxi,
        other => panic!("unknown transport mode {other:?}"),
    }
}

impl World {
    fn given_trip(&mut self, step: &str) -> bool {
        let Some(rest) = step.strip_prefix("a trip of ") else {
            return false;
        };
        let (distance, rest) = rest.split_once(" km across ").expect("distance");
        let (zones, time_of_day) = rest.split_once(" zones by ").expect("zones");

        self.trip = Some(
            Trip::new(
                parse_decimal(distance),
                TimeOfDay::from_label(time_of_day),
                zones.trim().parse().expect("zone count"),
            )
            .expect("valid trip"),
        );
        true
    }

    fn when_strategy(&mut self, step: &str) -> bool {
        let Some(mode) = step
            .strip_prefix("the ")
            .and_then(|s| s.strip_suffix(" fare is used"))
        else {
            return false;
        };
        self.strategy = Some(parse_mode(mode).strategy());
        true
    }

    fn when_commission(&mut self, step: &str) -> bool {
        let Some(amount) = step
            .strip_prefix("a commission of ")
            .and_then(|s| s.strip_suffix(" is added"))
        else {
            return false;
        };
        let inner = self.strategy.take().expect("strategy before commission");
        self.strategy = Some(Box::new(
            CommissionAdjustment::new(inner, parse_decimal(amount)).expect("valid commission"),
        ));
        true
    }

    fn when_discount(&mut self, step: &str) -> bool {
        let Some(percent) = step
            .strip_prefix("a discount of ")
            .and_then(|s| s.strip_suffix("% is applied"))
        else {
            return false;
        };
        let inner = self.strategy.take().expect("strategy before discount");
        self.strategy = Some(Box::new(
            DiscountAdjustment::new(inner, parse_decimal(percent)).expect("valid discount"),
        ));
        true
    }

    fn then_fare(&mut self, step: &str) -> bool {
        let Some(expected) = step.strip_prefix("the fare is ") else {
            return false;
        };
        let trip = self.trip.as_ref().expect("trip before assertion");
        let strategy = self.strategy.take().expect("strategy before assertion");
        let calculator = FareCalculator::from_boxed(strategy);

        let actual = round_fare(calculator.compute(trip).expect("fare computes"));
        assert_eq!(
            actual,
            parse_decimal(expected),
            "expected {expected}, got {actual} ({})",
            calculator.describe()
        );

        // Keep the chain around for follow-up steps
        self.strategy = Some(calculator.into_strategy());
        true
    }
}

fn run_scenario(text: &str) {
    let mut world = World::default();

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let step = ["Given ", "When ", "Then ", "And "]
            .iter()
            .find_map(|keyword| line.strip_prefix(keyword))
            .unwrap_or_else(|| panic!("step without keyword: {line:?}"));

        let matched = world.given_trip(step)
            || world.when_strategy(step)
            || world.when_commission(step)
            || world.when_discount(step)
            || world.then_fare(step);
        assert!(matched, "no step definition for {line:?}");
    }
}

#[test]
fn scenario_bus_day() {
    run_scenario(
        r#"
        Given a trip of 10 km across 2 zones by day
        When the bus fare is used
        Then the fare is 70.00
        "#,
    );
}

#[test]
fn scenario_metro_single_zone() {
    run_scenario(
        r#"
        Given a trip of 0 km across 1 zones by day
        When the metro fare is used
        Then the fare is 55.00
        "#,
    );
}

#[test]
fn scenario_metro_two_zones() {
    run_scenario(
        r#"
        Given a trip of 10 km across 2 zones by day
        When the metro fare is used
        Then the fare is 75.00
        "#,
    );
}

#[test]
fn scenario_taxi_day() {
    run_scenario(
        r#"
        Given a trip of 10 km across 2 zones by day
        When the taxi fare is used
        Then the fare is 250.00
        "#,
    );
}

#[test]
fn scenario_taxi_night() {
    run_scenario(
        r#"
        Given a trip of 10 km across 2 zones by night
        When the taxi fare is used
        Then the fare is 300.00
        "#,
    );
}

#[test]
fn scenario_bus_with_commission_then_discount() {
    run_scenario(
        r#"
        Given a trip of 10 km across 2 zones by day
        When the bus fare is used
        And a commission of 10 is added
        Then the fare is 80.00
        When a discount of 50% is applied
        Then the fare is 40.00
        "#,
    );
}

#[test]
fn scenario_unknown_time_of_day_prices_as_day() {
    run_scenario(
        r#"
        Given a trip of 10 km across 2 zones by evening
        When the taxi fare is used
        Then the fare is 250.00
        "#,
    );
}

#[test]
fn scenario_shared_fixture_trips() {
    let calculator = FareCalculator::from_boxed(TransportMode::Taxi.strategy());
    let day = calculator.compute(&common::sample_day_trip()).unwrap();
    let night = calculator.compute(&common::sample_night_trip()).unwrap();
    assert!(night > day);
}
