//! Premium - a non-negative currency amount held at cent precision

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::PricingError;

/// Decimal places kept on every currency amount
pub const CURRENCY_SCALE: u32 = 2;

/// Round a currency amount to cents, ties to even
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointNearestEven)
}

/// Premium amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Premium(Decimal);

impl Premium {
    pub const ZERO: Premium = Premium(Decimal::ZERO);

    /// Build a premium from a computed float
    ///
    /// The float's exact binary value is rounded to cents half-to-even, so
    /// `2.675` (stored as 2.67499999...) becomes 2.67.
    pub fn from_f64(amount: f64) -> Result<Self, PricingError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(PricingError::Unrepresentable(amount));
        }
        let exact = Decimal::from_f64_retain(amount).ok_or(PricingError::Unrepresentable(amount))?;
        Ok(Self(round_currency(exact)))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl std::fmt::Display for Premium {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}
