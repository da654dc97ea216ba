//! # Coverwise Common
//!
//! Shared value types and errors for the Coverwise insurance pricing engine.
//!
//! ## Core Types
//!
//! - [`PolicyType`]: the four priced lines of business, integer-coded on the wire
//! - [`Premium`]: cent-precision currency amount
//! - [`RiskScore`]: normalized risk with confidence and factor breakdown
//! - [`Policy`]: policy record with a guarded status lifecycle
//! - Categorical factors such as [`DrivingHistory`] and [`LocationRisk`]

pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{CoverwiseError, PolicyError, PricingError, Result};
pub use types::{
    categorical::{
        DrivingHistory, HealthCondition, LocationRisk, OccupationRisk, ParkingLocation,
    },
    policy::{Policy, PolicyStatus},
    policy_type::PolicyType,
    premium::{round_currency, Premium},
    risk_score::{RiskScore, ScoreFactor},
};

/// Coverwise version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Months per policy year
pub const MONTHS_PER_YEAR: f64 = 12.0;
