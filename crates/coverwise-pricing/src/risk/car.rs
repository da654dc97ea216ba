//! Car risk: driver age bracket, vehicle, accidents, and location summed and capped at 1.0

use coverwise_common::{PolicyType, RiskScore};
use serde::{Deserialize, Serialize};

use super::RiskModel;

/// Added for drivers under 25 or over 70
pub const HIGH_RISK_AGE_LOADING: f64 = 0.3;

/// Added for drivers under 30 or over 60 outside the high-risk band
pub const ELEVATED_AGE_LOADING: f64 = 0.2;

/// Added per recorded accident
pub const ACCIDENT_LOADING: f64 = 0.2;

/// Inputs for car risk scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarRiskInput {
    pub driver_age: u32,
    /// Vehicle risk, higher for expensive or risky vehicles (0.0 - 1.0)
    pub vehicle_score: f64,
    /// One entry per accident in the look-back period
    #[serde(default)]
    pub accident_history: Vec<String>,
    /// Location risk (0.0 - 1.0)
    pub location_risk: f64,
}

impl CarRiskInput {
    /// Loading for the driver's age; only the first matching bracket applies
    pub fn age_loading(&self) -> f64 {
        let age = self.driver_age;
        if !(25..=70).contains(&age) {
            HIGH_RISK_AGE_LOADING
        } else if !(30..=60).contains(&age) {
            ELEVATED_AGE_LOADING
        } else {
            0.0
        }
    }
}

impl RiskModel for CarRiskInput {
    fn policy_type(&self) -> PolicyType {
        PolicyType::Car
    }

    fn score(&self) -> RiskScore {
        let age = self.age_loading();
        let accidents = ACCIDENT_LOADING * self.accident_history.len() as f64;

        // No lower clamp: the inputs are non-negative by contract
        let base_score = (age + self.vehicle_score + accidents + self.location_risk).min(1.0);

        RiskScore::new(base_score)
            .with_factor("age", age)
            .with_factor("vehicle", self.vehicle_score)
            .with_factor("accidents", accidents)
            .with_factor("location", self.location_risk)
    }
}
