//! RiskScore - normalized underwriting risk estimate
//!
//! A RiskScore carries:
//! - `base_score`: the normalized risk, nominally 0.0 - 1.0
//! - `confidence`: how complete the inputs were (starts at 0.95)
//! - `factors`: each contributing sub-score, in the order it was computed
//!
//! The factor list exists for audit and reporting. It is never summed back
//! into a score.

use serde::{Deserialize, Serialize};

/// Confidence assigned when every input was supplied
pub const DEFAULT_CONFIDENCE: f64 = 0.95;

/// Single contribution to a risk score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreFactor {
    /// Factor label (e.g., "age", "accidents")
    pub name: String,
    /// Amount this factor added to the raw score
    pub contribution: f64,
}

impl ScoreFactor {
    pub fn new(name: impl Into<String>, contribution: f64) -> Self {
        Self {
            name: name.into(),
            contribution,
        }
    }
}

/// Risk score with factor breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskScore {
    /// Normalized score
    pub base_score: f64,

    /// Confidence in the score (0.0 - 1.0)
    pub confidence: f64,

    /// Contributing sub-scores in computation order
    pub factors: Vec<ScoreFactor>,
}

impl RiskScore {
    /// Create a score with default confidence and no factors
    pub fn new(base_score: f64) -> Self {
        Self {
            base_score,
            confidence: DEFAULT_CONFIDENCE,
            factors: Vec::new(),
        }
    }

    /// Record a contributing sub-score
    pub fn add_factor(&mut self, name: impl Into<String>, contribution: f64) {
        self.factors.push(ScoreFactor::new(name, contribution));
    }

    pub fn with_factor(mut self, name: impl Into<String>, contribution: f64) -> Self {
        self.add_factor(name, contribution);
        self
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }

    /// Look up a factor's contribution by label
    pub fn factor(&self, name: &str) -> Option<f64> {
        self.factors
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.contribution)
    }

    /// Factor with the largest absolute contribution
    pub fn dominant_factor(&self) -> Option<&ScoreFactor> {
        self.factors.iter().max_by(|a, b| {
            a.contribution
                .abs()
                .partial_cmp(&b.contribution.abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    }
}

impl std::fmt::Display for RiskScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "RiskScore({:.2}, confidence={:.2}%)",
            self.base_score,
            self.confidence * 100.0
        )?;
        for factor in &self.factors {
            write!(f, "\n- {}: {:.2}", factor.name, factor.contribution)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_score_defaults() {
        let score = RiskScore::new(0.4);
        assert_eq!(score.confidence, DEFAULT_CONFIDENCE);
        assert!(score.factors.is_empty());
    }

    #[test]
    fn test_factor_order_preserved() {
        let score = RiskScore::new(0.5)
            .with_factor("age", 0.3)
            .with_factor("vehicle", 0.1)
            .with_factor("accidents", 0.4);

        let names: Vec<_> = score.factors.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["age", "vehicle", "accidents"]);
        assert_eq!(score.factor("vehicle"), Some(0.1));
        assert_eq!(score.factor("missing"), None);
    }

    #[test]
    fn test_dominant_factor_uses_magnitude() {
        let score = RiskScore::new(0.2)
            .with_factor("location", 0.3)
            .with_factor("security", -0.8);
        assert_eq!(score.dominant_factor().unwrap().name, "security");
    }

    #[test]
    fn test_display_lists_factors() {
        let score = RiskScore::new(0.5).with_factor("age", 0.25);
        let text = score.to_string();
        assert!(text.contains("confidence=95.00%"));
        assert!(text.contains("- age: 0.25"));
    }
}
