use crate::error::StrategyError;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Funds held by a payment method.
///
/// Credits and debits saturate at the bounds of `Decimal` instead of
/// overflowing, so `refund` can always report success.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Balance(pub Decimal);

impl Balance {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Renders the balance with a fixed number of decimal places.
    pub fn display(&self, places: u32) -> Fixed {
        Fixed::new(self.0, places)
    }
}

impl Add for Balance {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Balance {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl AddAssign for Balance {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Balance {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

/// The `--amount` given on the command line. Zero and negative values are
/// rejected before any method is charged.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, StrategyError> {
        if value <= Decimal::ZERO {
            return Err(StrategyError::Validation(format!(
                "charge amount must be greater than zero, got {}",
                value
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

/// A decimal formatted with exactly `places` fractional digits.
///
/// Midpoints round away from zero, which is what `%.2f` does.
#[derive(Debug, Clone, Copy)]
pub struct Fixed {
    value: Decimal,
    places: u32,
}

impl Fixed {
    pub fn new(value: Decimal, places: u32) -> Self {
        Self { value, places }
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self
            .value
            .round_dp_with_strategy(self.places, RoundingStrategy::MidpointAwayFromZero);
        write!(f, "{:.*}", self.places as usize, rounded)
    }
}
