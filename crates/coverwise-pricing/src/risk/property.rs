//! Property risk: location hazards, building age, security, and condition clamped to 0.0 - 1.0

use coverwise_common::{PolicyType, RiskScore};
use serde::{Deserialize, Serialize};

use super::RiskModel;

/// Building-age loading per year, capped at 1.0
pub const BUILDING_AGE_LOADING_PER_YEAR: f64 = 0.02;

/// Location hazards (0.0 - 1.0 each, default 0.0)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationData {
    pub natural_disaster: f64,
    pub crime_rate: f64,
}

/// Physical condition ratings (0.0 - 1.0 each, default 0.5)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyDetails {
    pub construction_quality: f64,
    pub maintenance: f64,
    pub utilities_condition: f64,
}

impl Default for PropertyDetails {
    fn default() -> Self {
        Self {
            construction_quality: 0.5,
            maintenance: 0.5,
            utilities_condition: 0.5,
        }
    }
}

impl PropertyDetails {
    pub fn average(&self) -> f64 {
        (self.construction_quality + self.maintenance + self.utilities_condition) / 3.0
    }
}

/// Inputs for property risk scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRiskInput {
    #[serde(default)]
    pub location_data: LocationData,
    #[serde(default)]
    pub property_details: PropertyDetails,
    /// Security features, higher is safer (0.0 - 1.0)
    pub security_score: f64,
    /// Building age in years
    pub building_age: u32,
}

impl RiskModel for PropertyRiskInput {
    fn policy_type(&self) -> PolicyType {
        PolicyType::Property
    }

    fn score(&self) -> RiskScore {
        let location = self.location_data.natural_disaster + self.location_data.crime_rate;
        let building_age =
            (self.building_age as f64 * BUILDING_AGE_LOADING_PER_YEAR).min(1.0);
        let security = -self.security_score;
        let condition = self.property_details.average();

        let base_score = (location + building_age + security + condition).clamp(0.0, 1.0);

        RiskScore::new(base_score)
            .with_factor("location", location)
            .with_factor("building_age", building_age)
            .with_factor("security", security)
            .with_factor("condition", condition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_security_reduces_score() {
        let input = PropertyRiskInput {
            location_data: LocationData {
                natural_disaster: 0.2,
                crime_rate: 0.1,
            },
            property_details: PropertyDetails::default(),
            security_score: 0.8,
            building_age: 10,
        };
        let score = input.score();
        // 0.3 + 0.2 - 0.8 + 0.5
        assert!((score.base_score - 0.2).abs() < 1e-12);
        assert_eq!(score.factor("security"), Some(-0.8));
        assert!((score.factor("location").unwrap() - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_clamped_below_at_zero() {
        let input = PropertyRiskInput {
            location_data: LocationData::default(),
            property_details: PropertyDetails {
                construction_quality: 0.1,
                maintenance: 0.1,
                utilities_condition: 0.1,
            },
            security_score: 1.0,
            building_age: 0,
        };
        assert_eq!(input.score().base_score, 0.0);
    }

    #[test]
    fn test_clamped_above_at_one() {
        let input = PropertyRiskInput {
            location_data: LocationData {
                natural_disaster: 0.9,
                crime_rate: 0.9,
            },
            property_details: PropertyDetails::default(),
            security_score: 0.0,
            building_age: 100,
        };
        let score = input.score();
        assert_eq!(score.base_score, 1.0);
        // Building age loading is capped on its own
        assert_eq!(score.factor("building_age"), Some(1.0));
    }

    #[test]
    fn test_details_default_when_omitted() {
        let input: PropertyRiskInput =
            serde_json::from_str(r#"{ "security_score": 0.2, "building_age": 5 }"#).unwrap();
        assert_eq!(input.property_details, PropertyDetails::default());
        assert_eq!(input.location_data, LocationData::default());
    }
}
