//! Life risk: age, health, lifestyle, and family history averaged into 0.0 - 1.0

use std::collections::BTreeMap;

use coverwise_common::types::categorical::NEUTRAL_CATEGORY_SCORE;
use coverwise_common::types::risk_score::DEFAULT_CONFIDENCE;
use coverwise_common::{HealthCondition, PolicyType, RiskScore};
use serde::{Deserialize, Serialize};

use super::RiskModel;

/// Confidence discount when no lifestyle information was given
pub const MISSING_LIFESTYLE_DISCOUNT: f64 = 0.9;

/// Confidence discount when no family history was given
pub const MISSING_FAMILY_HISTORY_DISCOUNT: f64 = 0.95;

/// Inputs for life risk scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeRiskInput {
    /// Insured's age in years
    pub age: u32,
    /// Health score, 0.2 (excellent) to 0.8 (poor)
    #[serde(default = "neutral_health_score")]
    pub health_score: f64,
    /// Named lifestyle risks, e.g. `smoking: 1.0`
    #[serde(default)]
    pub lifestyle_factors: BTreeMap<String, f64>,
    /// One entry per serious condition in the family
    #[serde(default)]
    pub family_history: Vec<String>,
}

fn neutral_health_score() -> f64 {
    NEUTRAL_CATEGORY_SCORE
}

impl LifeRiskInput {
    /// Input with the health score taken from a reported condition
    pub fn new(age: u32, condition: &HealthCondition) -> Self {
        Self {
            age,
            health_score: condition.score(),
            lifestyle_factors: BTreeMap::new(),
            family_history: Vec::new(),
        }
    }

    pub fn with_lifestyle_factor(mut self, name: impl Into<String>, risk: f64) -> Self {
        self.lifestyle_factors.insert(name.into(), risk);
        self
    }

    pub fn with_family_condition(mut self, condition: impl Into<String>) -> Self {
        self.family_history.push(condition.into());
        self
    }
}

impl RiskModel for LifeRiskInput {
    fn policy_type(&self) -> PolicyType {
        PolicyType::Life
    }

    fn score(&self) -> RiskScore {
        let age_factor = 0.01 * self.age as f64;
        let lifestyle_risk: f64 = self.lifestyle_factors.values().sum();
        let family_risk = 0.1 * self.family_history.len() as f64;

        let base_score =
            ((age_factor + self.health_score + lifestyle_risk + family_risk) / 4.0).min(1.0);

        let mut confidence = DEFAULT_CONFIDENCE;
        if self.lifestyle_factors.is_empty() {
            confidence *= MISSING_LIFESTYLE_DISCOUNT;
        }
        if self.family_history.is_empty() {
            confidence *= MISSING_FAMILY_HISTORY_DISCOUNT;
        }

        RiskScore::new(base_score)
            .with_factor("age", age_factor)
            .with_factor("health", self.health_score)
            .with_factor("lifestyle", lifestyle_risk)
            .with_factor("family_history", family_risk)
            .with_confidence(confidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_inputs_keep_full_confidence() {
        let score = LifeRiskInput::new(40, &HealthCondition::Good)
            .with_lifestyle_factor("smoking", 1.0)
            .with_family_condition("heart disease")
            .score();

        // (0.4 + 0.4 + 1.0 + 0.1) / 4
        assert!((score.base_score - 0.475).abs() < 1e-12);
        assert_eq!(score.confidence, 0.95);
        assert_eq!(score.factor("lifestyle"), Some(1.0));
        assert!((score.factor("family_history").unwrap() - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_missing_inputs_discount_confidence() {
        let score = LifeRiskInput::new(50, &HealthCondition::Fair).score();
        assert!((score.confidence - 0.81225).abs() < 1e-12);
    }

    #[test]
    fn test_only_lifestyle_missing() {
        let score = LifeRiskInput::new(50, &HealthCondition::Fair)
            .with_family_condition("diabetes")
            .score();
        assert!((score.confidence - 0.855).abs() < 1e-12);
    }

    #[test]
    fn test_score_capped_at_one() {
        let score = LifeRiskInput::new(90, &HealthCondition::Poor)
            .with_lifestyle_factor("smoking", 1.0)
            .with_lifestyle_factor("drinking", 1.0)
            .with_lifestyle_factor("extreme_sports", 1.0)
            .score();
        assert_eq!(score.base_score, 1.0);
    }

    #[test]
    fn test_factor_labels_in_order() {
        let score = LifeRiskInput::new(30, &HealthCondition::Excellent).score();
        let names: Vec<_> = score.factors.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["age", "health", "lifestyle", "family_history"]);
    }

    #[test]
    fn test_unknown_condition_is_neutral() {
        let input = LifeRiskInput::new(30, &HealthCondition::parse("so-so"));
        assert_eq!(input.health_score, 0.5);
    }
}
