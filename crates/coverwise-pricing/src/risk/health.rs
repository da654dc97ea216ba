//! Health risk: age, current health, lifestyle, and occupation averaged into 0.0 - 1.0

use coverwise_common::types::categorical::NEUTRAL_CATEGORY_SCORE;
use coverwise_common::{OccupationRisk, PolicyType, RiskScore};
use serde::{Deserialize, Serialize};

use super::RiskModel;

/// Medical history summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MedicalHistory {
    /// Current health, lower is better (default 0.5)
    pub current_health: f64,
}

impl Default for MedicalHistory {
    fn default() -> Self {
        Self {
            current_health: NEUTRAL_CATEGORY_SCORE,
        }
    }
}

/// Inputs for health risk scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthRiskInput {
    pub age: u32,
    #[serde(default)]
    pub medical_history: MedicalHistory,
    pub lifestyle_score: f64,
    /// Occupation risk, 0.2 (low) to 0.8 (high)
    pub occupation_risk: f64,
}

impl HealthRiskInput {
    pub fn new(age: u32, current_health: f64, lifestyle_score: f64, occupation: &OccupationRisk) -> Self {
        Self {
            age,
            medical_history: MedicalHistory { current_health },
            lifestyle_score,
            occupation_risk: occupation.score(),
        }
    }
}

impl RiskModel for HealthRiskInput {
    fn policy_type(&self) -> PolicyType {
        PolicyType::Health
    }

    fn score(&self) -> RiskScore {
        let age = self.age as f64 * 0.01;
        let medical = self.medical_history.current_health;

        let base_score =
            ((age + medical + self.lifestyle_score + self.occupation_risk) / 4.0).min(1.0);

        RiskScore::new(base_score)
            .with_factor("age", age)
            .with_factor("medical", medical)
            .with_factor("lifestyle", self.lifestyle_score)
            .with_factor("occupation", self.occupation_risk)
    }
}
