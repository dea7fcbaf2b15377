use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::common::errors::{FareError, Result};
use crate::common::types::Trip;
use crate::strategy::traits::{FareStrategy, PriceAdjustment};

/// Identity adjustment
///
/// Returns the wrapped strategy's price untouched. Handy as a neutral link
/// when a chain is assembled conditionally.
#[derive(Debug, Clone)]
pub struct PassthroughAdjustment<S> {
    wrapped: S,
}

impl<S: FareStrategy> PassthroughAdjustment<S> {
    pub fn new(wrapped: S) -> Self {
        Self { wrapped }
    }

    pub fn into_inner(self) -> S {
        self.wrapped
    }
}

impl<S: FareStrategy> PriceAdjustment for PassthroughAdjustment<S> {
    fn wrapped(&self) -> &dyn FareStrategy {
        &self.wrapped
    }

    fn adjust(&self, price: Decimal) -> Result<Decimal> {
        Ok(price)
    }
}

impl<S: FareStrategy> FareStrategy for PassthroughAdjustment<S> {
    fn name(&self) -> &str {
        "passthrough"
    }

    fn calculate_price(&self, trip: &Trip) -> Result<Decimal> {
        self.apply(trip)
    }

    fn describe(&self) -> String {
        self.wrapped.describe()
    }
}

/// Fixed surcharge added on top of the wrapped price (service commission)
///
/// The result is not re-rounded: a 2 dp base plus a 2 dp commission stays at
/// fare precision on its own.
#[derive(Debug, Clone)]
pub struct CommissionAdjustment<S> {
    wrapped: S,
    commission: Decimal,
}

impl<S: FareStrategy> CommissionAdjustment<S> {
    /// Wrap `wrapped`, adding `commission` to every price
    ///
    /// # Errors
    /// * `FareError::InvalidAdjustmentParameter` if `commission` is negative
    pub fn new(wrapped: S, commission: Decimal) -> Result<Self> {
        if commission < Decimal::ZERO {
            return Err(FareError::InvalidAdjustmentParameter(format!(
                "commission must be non-negative, got {commission}"
            )));
        }

        Ok(Self {
            wrapped,
            commission,
        })
    }

    pub fn commission(&self) -> Decimal {
        self.commission
    }

    pub fn into_inner(self) -> S {
        self.wrapped
    }
}

impl<S: FareStrategy> PriceAdjustment for CommissionAdjustment<S> {
    fn wrapped(&self) -> &dyn FareStrategy {
        &self.wrapped
    }

    fn adjust(&self, price: Decimal) -> Result<Decimal> {
        price.checked_add(self.commission).ok_or_else(|| {
            FareError::ArithmeticOverflow(format!(
                "adding commission {} to {price}",
                self.commission
            ))
        })
    }
}

impl<S: FareStrategy> FareStrategy for CommissionAdjustment<S> {
    fn name(&self) -> &str {
        "commission"
    }

    fn calculate_price(&self, trip: &Trip) -> Result<Decimal> {
        self.apply(trip)
    }

    fn describe(&self) -> String {
        format!("{} + commission({})", self.wrapped.describe(), self.commission)
    }
}

/// Percentage discount applied to the wrapped price
///
/// Whatever the wrapped chain produced is discounted, including any
/// commission it already carries.
#[derive(Debug, Clone)]
pub struct DiscountAdjustment<S> {
    wrapped: S,
    percent: Decimal,
}

impl<S: FareStrategy> DiscountAdjustment<S> {
    pub const MAX_PERCENT: Decimal = dec!(100);

    /// Wrap `wrapped`, taking `percent` % off every price
    ///
    /// # Errors
    /// * `FareError::InvalidAdjustmentParameter` if `percent` is outside `0..=100`
    pub fn new(wrapped: S, percent: Decimal) -> Result<Self> {
        if percent < Decimal::ZERO || percent > Self::MAX_PERCENT {
            return Err(FareError::InvalidAdjustmentParameter(format!(
                "discount percent must be within 0..=100, got {percent}"
            )));
        }

        Ok(Self { wrapped, percent })
    }

    pub fn percent(&self) -> Decimal {
        self.percent
    }

    pub fn into_inner(self) -> S {
        self.wrapped
    }

    fn keep_fraction(&self) -> Decimal {
        Decimal::ONE - self.percent / Self::MAX_PERCENT
    }
}

impl<S: FareStrategy> PriceAdjustment for DiscountAdjustment<S> {
    fn wrapped(&self) -> &dyn FareStrategy {
        &self.wrapped
    }

    fn adjust(&self, price: Decimal) -> Result<Decimal> {
        // keep_fraction is within [0, 1], so this can only shrink the price
        Ok(price * self.keep_fraction())
    }
}

impl<S: FareStrategy> FareStrategy for DiscountAdjustment<S> {
    fn name(&self) -> &str {
        "discount"
    }

    fn calculate_price(&self, trip: &Trip) -> Result<Decimal> {
        self.apply(trip)
    }

    fn describe(&self) -> String {
        format!("{} - discount({}%)", self.wrapped.describe(), self.percent)
    }
}
