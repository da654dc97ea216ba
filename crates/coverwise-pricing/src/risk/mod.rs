//! Risk scoring
//!
//! One scoring formula per policy type, each producing a [`RiskScore`] with
//! its contributing sub-scores recorded in computation order:
//! - Life: age, health, lifestyle, family history (averaged)
//! - Car: age bracket, vehicle, accidents, location (summed, capped at 1.0)
//! - Health: age, medical, lifestyle, occupation (averaged)
//! - Property: location, building age, security, condition (clamped to 0.0 - 1.0)

pub mod car;
pub mod health;
pub mod life;
pub mod property;

pub use car::CarRiskInput;
pub use health::{HealthRiskInput, MedicalHistory};
pub use life::LifeRiskInput;
pub use property::{LocationData, PropertyDetails, PropertyRiskInput};

use coverwise_common::{PolicyType, RiskScore};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A set of inputs that can be scored
pub trait RiskModel {
    /// Policy type the inputs describe
    fn policy_type(&self) -> PolicyType;

    /// Compute the risk score
    fn score(&self) -> RiskScore;
}

/// Scoring inputs for any policy type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RiskProfile {
    Life(LifeRiskInput),
    Car(CarRiskInput),
    Health(HealthRiskInput),
    Property(PropertyRiskInput),
}

impl RiskProfile {
    fn model(&self) -> &dyn RiskModel {
        match self {
            RiskProfile::Life(input) => input as &dyn RiskModel,
            RiskProfile::Car(input) => input,
            RiskProfile::Health(input) => input,
            RiskProfile::Property(input) => input,
        }
    }
}

impl RiskModel for RiskProfile {
    fn policy_type(&self) -> PolicyType {
        self.model().policy_type()
    }

    fn score(&self) -> RiskScore {
        self.model().score()
    }
}

/// Stateless risk scorer
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskScorer;

impl RiskScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn score_life(&self, input: &LifeRiskInput) -> RiskScore {
        Self::evaluate(input)
    }

    pub fn score_car(&self, input: &CarRiskInput) -> RiskScore {
        Self::evaluate(input)
    }

    pub fn score_health(&self, input: &HealthRiskInput) -> RiskScore {
        Self::evaluate(input)
    }

    pub fn score_property(&self, input: &PropertyRiskInput) -> RiskScore {
        Self::evaluate(input)
    }

    /// Score a profile of any policy type
    #[instrument(skip(self, profile), fields(policy_type = %profile.policy_type()))]
    pub fn score(&self, profile: &RiskProfile) -> RiskScore {
        Self::evaluate(profile)
    }

    fn evaluate(model: &dyn RiskModel) -> RiskScore {
        let score = model.score();
        debug!(
            policy_type = %model.policy_type(),
            base_score = score.base_score,
            confidence = score.confidence,
            dominant = score.dominant_factor().map(|f| f.name.as_str()).unwrap_or("none"),
            "Risk scored"
        );
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coverwise_common::HealthCondition;

    #[test]
    fn test_profile_dispatch() {
        let scorer = RiskScorer::new();
        let profile = RiskProfile::Life(LifeRiskInput::new(40, &HealthCondition::Good));

        assert_eq!(profile.policy_type(), PolicyType::Life);
        assert_eq!(
            scorer.score(&profile),
            scorer.score_life(&LifeRiskInput::new(40, &HealthCondition::Good))
        );
    }

    #[test]
    fn test_profile_from_json() {
        let profile: RiskProfile = serde_json::from_str(
            r#"{
                "kind": "car",
                "driver_age": 80,
                "vehicle_score": 0.9,
                "accident_history": ["2021", "2022", "2023"],
                "location_risk": 0.9
            }"#,
        )
        .unwrap();

        assert_eq!(profile.policy_type(), PolicyType::Car);
        assert_eq!(RiskScorer::new().score(&profile).base_score, 1.0);
    }

    #[test]
    fn test_every_formula_records_four_factors() {
        let scorer = RiskScorer::new();
        let scores = [
            scorer.score_life(&LifeRiskInput::new(30, &HealthCondition::Good)),
            scorer.score_car(&CarRiskInput {
                driver_age: 40,
                vehicle_score: 0.2,
                accident_history: vec![],
                location_risk: 0.2,
            }),
            scorer.score_health(&HealthRiskInput {
                age: 30,
                medical_history: MedicalHistory::default(),
                lifestyle_score: 0.3,
                occupation_risk: 0.2,
            }),
            scorer.score_property(&PropertyRiskInput {
                location_data: LocationData::default(),
                property_details: PropertyDetails::default(),
                security_score: 0.2,
                building_age: 15,
            }),
        ];
        for score in scores {
            assert_eq!(score.factors.len(), 4);
            assert!((0.0..=1.0).contains(&score.base_score));
        }
    }
}
