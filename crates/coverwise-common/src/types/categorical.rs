//! Categorical risk inputs
//!
//! Every categorical factor is matched case-insensitively. Text that matches
//! no known level is kept, upper-cased, as `Unrecognized` rather than
//! rejected; pricing treats it as neutral unless a rate table names it.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

macro_rules! categorical_factor {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
            /// Normalized text that matched no known level
            Unrecognized(String),
        }

        impl $name {
            /// Parse a level, ignoring case and surrounding whitespace
            pub fn parse(raw: &str) -> Self {
                let normalized = raw.trim().to_ascii_uppercase();
                match normalized.as_str() {
                    $($label => $name::$variant,)+
                    _ => $name::Unrecognized(normalized),
                }
            }

            /// Canonical upper-case label
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $label,)+
                    $name::Unrecognized(raw) => raw.as_str(),
                }
            }

            pub fn is_recognized(&self) -> bool {
                !matches!(self, $name::Unrecognized(_))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                Ok(Self::parse(&raw))
            }
        }
    };
}

categorical_factor! {
    /// Driver's record over the look-back period
    DrivingHistory {
        Clean => "CLEAN",
        MinorViolations => "MINOR_VIOLATIONS",
        MajorViolations => "MAJOR_VIOLATIONS",
        Accidents => "ACCIDENTS",
    }
}

categorical_factor! {
    /// Where the vehicle is kept overnight
    ParkingLocation {
        Garage => "GARAGE",
        Driveway => "DRIVEWAY",
        Street => "STREET",
        PublicParking => "PUBLIC_PARKING",
    }
}

categorical_factor! {
    /// Property location hazard band
    LocationRisk {
        Low => "LOW",
        Medium => "MEDIUM",
        High => "HIGH",
    }
}

categorical_factor! {
    /// Self-reported health condition of the insured person
    HealthCondition {
        Excellent => "EXCELLENT",
        Good => "GOOD",
        Fair => "FAIR",
        Poor => "POOR",
    }
}

categorical_factor! {
    /// Occupational hazard band
    OccupationRisk {
        Low => "LOW",
        Moderate => "MODERATE",
        High => "HIGH",
    }
}

impl Default for DrivingHistory {
    fn default() -> Self {
        DrivingHistory::Clean
    }
}

impl Default for ParkingLocation {
    fn default() -> Self {
        ParkingLocation::Garage
    }
}

impl Default for LocationRisk {
    fn default() -> Self {
        LocationRisk::Low
    }
}

/// Score used for any condition outside the known levels
pub const NEUTRAL_CATEGORY_SCORE: f64 = 0.5;

impl HealthCondition {
    /// Health score for life risk scoring (lower is healthier)
    pub fn score(&self) -> f64 {
        match self {
            HealthCondition::Excellent => 0.2,
            HealthCondition::Good => 0.4,
            HealthCondition::Fair => 0.6,
            HealthCondition::Poor => 0.8,
            HealthCondition::Unrecognized(_) => NEUTRAL_CATEGORY_SCORE,
        }
    }
}

impl OccupationRisk {
    /// Occupation risk score for health risk scoring
    pub fn score(&self) -> f64 {
        match self {
            OccupationRisk::Low => 0.2,
            OccupationRisk::Moderate => 0.5,
            OccupationRisk::High => 0.8,
            OccupationRisk::Unrecognized(_) => NEUTRAL_CATEGORY_SCORE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ignores_case() {
        assert_eq!(
            DrivingHistory::parse("minor_violations"),
            DrivingHistory::MinorViolations
        );
        assert_eq!(
            ParkingLocation::parse(" Public_Parking "),
            ParkingLocation::PublicParking
        );
        assert_eq!(LocationRisk::parse("high"), LocationRisk::High);
    }

    #[test]
    fn test_unknown_text_is_kept() {
        let history = DrivingHistory::parse("speeding");
        assert_eq!(history, DrivingHistory::Unrecognized("SPEEDING".to_string()));
        assert!(!history.is_recognized());
        assert_eq!(history.to_string(), "SPEEDING");
    }

    #[test]
    fn test_unknown_text_compares_ignoring_case() {
        assert_eq!(
            ParkingLocation::parse("carport"),
            ParkingLocation::parse(" CarPort ")
        );
        let parsed: ParkingLocation = serde_json::from_str("\"Carport\"").unwrap();
        assert_eq!(parsed, ParkingLocation::parse("CARPORT"));
    }

    #[test]
    fn test_category_scores() {
        assert_eq!(HealthCondition::parse("good").score(), 0.4);
        assert_eq!(HealthCondition::parse("unknown").score(), 0.5);
        assert_eq!(OccupationRisk::High.score(), 0.8);
        assert_eq!(OccupationRisk::parse("extreme").score(), 0.5);
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&ParkingLocation::Street).unwrap();
        assert_eq!(json, "\"STREET\"");
        let parsed: ParkingLocation = serde_json::from_str("\"driveway\"").unwrap();
        assert_eq!(parsed, ParkingLocation::Driveway);
    }
}
