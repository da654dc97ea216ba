//! # Coverwise Pricing
//!
//! Premium calculation and risk scoring for the Coverwise insurance engine.
//!
//! ## Premium Formula
//!
//! ```text
//! Premium = round(C × r × M / 12 × m, 2)
//! ```
//!
//! Where:
//! - C: Coverage amount
//! - r: Annual base rate for the policy type (fallback 3%)
//! - M: Term in whole months
//! - m: Risk multiplier from the policy type's factors (1.0 when none given)
//!
//! ## Risk Scores
//!
//! [`RiskScorer`] turns type-specific inputs into a normalized [`RiskScore`]
//! with a confidence and per-factor breakdown. A score can stand in for the
//! factor multiplier via [`PremiumCalculator::calculate_scored_premium`].
//!
//! ## Settlement
//!
//! [`claims`] assesses filed claims, [`settlement`] handles payouts and
//! refunds, and [`commission`] prices agent commission.
//!
//! Everything here is a pure calculation: no I/O happens outside config
//! loading, and a calculator can be shared freely across threads.
//!
//! [`RiskScore`]: coverwise_common::RiskScore

pub mod claims;
pub mod commission;
pub mod config;
pub mod engine;
pub mod factors;
pub mod rates;
pub mod risk;
pub mod settlement;
pub mod term;

pub use claims::{assess_claim, Claim, ClaimAssessment, ClaimStatus};
pub use commission::{calculate_commission, target_achievement, PerformanceLevel};
pub use config::PricingConfig;
pub use engine::{MultiplierFactor, PremiumBreakdown, PremiumCalculator, RiskMultiplier};
pub use factors::{CarFactors, HealthFactors, LifeFactors, PropertyFactors, RiskFactors};
pub use rates::RateTable;
pub use risk::{
    CarRiskInput, HealthRiskInput, LifeRiskInput, PropertyRiskInput, RiskModel, RiskProfile,
    RiskScorer,
};
pub use settlement::{claim_payout, payment_matches, refund_amount};
pub use term::calculate_policy_term;
