//! Error types for Coverwise
//!
//! Provides a unified error type and domain-specific error variants

use rust_decimal::Decimal;
use thiserror::Error;

use crate::types::policy::PolicyStatus;

/// Result type alias using CoverwiseError
pub type Result<T> = std::result::Result<T, CoverwiseError>;

/// Unified error type for Coverwise operations
#[derive(Debug, Error)]
pub enum CoverwiseError {
    // Pricing errors
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    // Policy record errors
    #[error("Policy error: {0}")]
    Policy(#[from] PolicyError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Premium calculation errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PricingError {
    #[error("Invalid coverage amount {0}: must be positive")]
    InvalidCoverage(f64),

    #[error("Invalid policy term: must be at least one month")]
    InvalidTerm,

    #[error("Amount must not be negative, got {0}")]
    NegativeAmount(Decimal),

    #[error("Commission rate must not be negative, got {0}")]
    InvalidCommissionRate(Decimal),

    #[error("Premium amount is not representable: {0}")]
    Unrepresentable(f64),
}

/// Policy record errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PolicyError {
    #[error("Status transition not allowed: {from:?} -> {to:?}")]
    InvalidTransition { from: PolicyStatus, to: PolicyStatus },

    #[error("Coverage amount must be positive, got {0}")]
    InvalidCoverage(f64),

    #[error("End date must be after start date")]
    InvalidDates,

    #[error("Policy condition must not be blank")]
    BlankCondition,

    #[error("Unknown policy status code: {0}")]
    UnknownStatus(u8),
}

impl From<serde_json::Error> for CoverwiseError {
    fn from(err: serde_json::Error) -> Self {
        CoverwiseError::Serialization(err.to_string())
    }
}
