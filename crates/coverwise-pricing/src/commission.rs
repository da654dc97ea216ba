//! Agent commission
//!
//! Commission is the agent's rate applied to the sale amount, with a bonus
//! for GOLD and PLATINUM agents. The performance level comes from how much of
//! the sales target was reached and, for PLATINUM, customer satisfaction.

use coverwise_common::{round_currency, PricingError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Satisfaction score (out of 5) required for PLATINUM
pub const PLATINUM_SATISFACTION: f64 = 4.5;

/// Agent performance level
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PerformanceLevel {
    #[default]
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl PerformanceLevel {
    /// Level for a target achievement ratio and satisfaction score
    pub fn from_performance(achievement: Decimal, satisfaction: f64) -> Self {
        if achievement >= Decimal::ONE && satisfaction >= PLATINUM_SATISFACTION {
            PerformanceLevel::Platinum
        } else if achievement >= dec!(0.8) {
            PerformanceLevel::Gold
        } else if achievement >= dec!(0.5) {
            PerformanceLevel::Silver
        } else {
            PerformanceLevel::Bronze
        }
    }

    pub fn bonus_multiplier(self) -> Decimal {
        match self {
            PerformanceLevel::Platinum => dec!(1.10),
            PerformanceLevel::Gold => dec!(1.05),
            PerformanceLevel::Silver | PerformanceLevel::Bronze => Decimal::ONE,
        }
    }
}

/// Share of the sales target reached; 0 when no target is set
pub fn target_achievement(total_sales: Decimal, sales_target: Decimal) -> Decimal {
    if sales_target <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    total_sales / sales_target
}

/// Commission earned on one sale
pub fn calculate_commission(
    sale_amount: Decimal,
    commission_rate: Decimal,
    level: PerformanceLevel,
) -> Result<Decimal> {
    if sale_amount.is_sign_negative() && !sale_amount.is_zero() {
        return Err(PricingError::NegativeAmount(sale_amount).into());
    }
    if commission_rate.is_sign_negative() && !commission_rate.is_zero() {
        return Err(PricingError::InvalidCommissionRate(commission_rate).into());
    }

    let commission = round_currency(sale_amount * commission_rate * level.bonus_multiplier());
    debug!(%sale_amount, %commission_rate, ?level, %commission, "Commission calculated");
    Ok(commission)
}
