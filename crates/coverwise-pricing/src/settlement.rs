//! Claim settlement arithmetic
//!
//! Payouts, payment matching, and refunds, all in cents.

use coverwise_common::round_currency;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Processing fee withheld from refunds unless configured otherwise
pub const DEFAULT_PROCESSING_FEE: Decimal = dec!(25.00);

/// Largest difference at which a payment still matches the approved amount
pub const PAYMENT_TOLERANCE: Decimal = dec!(0.01);

/// Amount payable on a claim after the deductible, capped at coverage
///
/// Claims at or below the deductible pay nothing.
pub fn claim_payout(claim_amount: Decimal, coverage_amount: Decimal, deductible: Decimal) -> Decimal {
    if claim_amount <= deductible {
        return Decimal::ZERO;
    }
    round_currency((claim_amount - deductible).min(coverage_amount))
}

/// Whether a payment settles the approved amount
pub fn payment_matches(payment_amount: Decimal, approved_amount: Decimal) -> bool {
    (payment_amount - approved_amount).abs() < PAYMENT_TOLERANCE
}

/// Refund after the processing fee, never negative
pub fn refund_amount(payment_amount: Decimal, processing_fee: Decimal) -> Decimal {
    round_currency((payment_amount - processing_fee).max(Decimal::ZERO))
}
