//! Fare report assembled by the command line driver
//!
//! A report is a list of sections, one per trip, each carrying the prices the
//! trip got under one or more strategies. Prices are rounded to fare precision
//! here, at the output boundary, since adjustment chains are not.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::common::errors::Result;
use crate::common::types::{round_fare, TimeOfDay, Trip};
use crate::strategy::{
    CommissionAdjustment, DiscountAdjustment, FareCalculator, SharedFareStrategy, TransportMode,
};

/// A single priced line in a report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FareQuote {
    pub label: String,
    /// Description of the strategy chain that produced the price
    pub strategy: String,
    pub price: Decimal,
}

/// All quotes for one trip
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripSection {
    pub title: String,
    pub trip: Trip,
    pub quotes: Vec<FareQuote>,
}

impl TripSection {
    pub fn new(title: impl Into<String>, trip: Trip) -> Self {
        Self {
            title: title.into(),
            trip,
            quotes: Vec::new(),
        }
    }

    /// Price this section's trip with the calculator's active strategy and record it
    pub fn quote(&mut self, label: impl Into<String>, calculator: &FareCalculator) -> Result<Decimal> {
        let price = round_fare(calculator.compute(&self.trip)?);
        self.quotes.push(FareQuote {
            label: label.into(),
            strategy: calculator.describe(),
            price,
        });
        Ok(price)
    }
}

/// Full fare report
#[derive(Debug, Clone, Serialize)]
pub struct FareReport {
    pub generated_at: DateTime<Utc>,
    pub sections: Vec<TripSection>,
}

impl FareReport {
    pub fn new() -> Self {
        Self {
            generated_at: Utc::now(),
            sections: Vec::new(),
        }
    }

    pub fn push_section(&mut self, section: TripSection) {
        self.sections.push(section);
    }

    /// Total number of quotes across all sections
    pub fn quote_count(&self) -> usize {
        self.sections.iter().map(|s| s.quotes.len()).sum()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for FareReport {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FareReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}: {}", section.title, section.trip)?;
            for quote in &section.quotes {
                writeln!(f, "  {:<32} {:>10.2}", quote.label, quote.price)?;
            }
        }
        Ok(())
    }
}

/// What the standard report should cover
#[derive(Debug, Clone)]
pub struct ReportRequest {
    pub trip: Trip,
    /// Modes priced in the first section; the first one is also the base of the adjustment section
    pub modes: Vec<TransportMode>,
    pub commission: Option<Decimal>,
    pub discount_percent: Option<Decimal>,
}

impl ReportRequest {
    pub fn new(trip: Trip) -> Self {
        Self {
            trip,
            modes: TransportMode::ALL.to_vec(),
            commission: None,
            discount_percent: None,
        }
    }
}

/// Build the standard report
///
/// 1. The trip priced by every requested mode, reusing one calculator
/// 2. The same trip at night, for taxi (the only time-sensitive mode)
/// 3. If any adjustment is requested: the first mode, then with commission,
///    then with the discount layered over it
pub fn build_standard_report(request: &ReportRequest) -> Result<FareReport> {
    let mut report = FareReport::new();
    let Some(&first_mode) = request.modes.first() else {
        return Ok(report);
    };

    let mut calculator = FareCalculator::from_boxed(first_mode.strategy());
    let mut section = TripSection::new("Trip", request.trip.clone());
    for &mode in &request.modes {
        calculator.set_boxed_strategy(mode.strategy());
        section.quote(mode.to_string(), &calculator)?;
    }
    report.push_section(section);

    if request.modes.contains(&TransportMode::Taxi) && !request.trip.time_of_day().is_night() {
        let mut night = TripSection::new("Night trip", request.trip.at(TimeOfDay::Night));
        calculator.set_boxed_strategy(TransportMode::Taxi.strategy());
        night.quote(format!("{} (night)", TransportMode::Taxi), &calculator)?;
        report.push_section(night);
    }

    if request.commission.is_some() || request.discount_percent.is_some() {
        let mut adjusted = TripSection::new("Adjusted fares", request.trip.clone());
        let mut chain: SharedFareStrategy = Arc::from(first_mode.strategy());

        calculator.set_strategy(Arc::clone(&chain));
        adjusted.quote(format!("{first_mode} (base)"), &calculator)?;

        if let Some(commission) = request.commission {
            chain = Arc::new(CommissionAdjustment::new(chain, commission)?);
            calculator.set_strategy(Arc::clone(&chain));
            adjusted.quote(format!("+ commission {commission}"), &calculator)?;
        }
        if let Some(percent) = request.discount_percent {
            chain = Arc::new(DiscountAdjustment::new(chain, percent)?);
            calculator.set_strategy(Arc::clone(&chain));
            adjusted.quote(format!("- discount {percent}%"), &calculator)?;
        }
        report.push_section(adjusted);
    }

    tracing::info!(
        sections = report.sections.len(),
        quotes = report.quote_count(),
        "fare report built"
    );
    Ok(report)
}
