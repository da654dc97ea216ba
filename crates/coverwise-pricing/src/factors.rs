//! Premium risk factors
//!
//! One struct per policy type carrying only the factors that type prices on.
//! Every field has a documented default so a partially filled request still
//! prices.

use coverwise_common::{DrivingHistory, LocationRisk, ParkingLocation, PolicyType};
use serde::{Deserialize, Serialize};

/// Annual mileage assumed when none is given
pub const DEFAULT_ANNUAL_MILEAGE: f64 = 12_000.0;

/// Insured age assumed when none is given
pub const DEFAULT_INSURED_AGE: f64 = 30.0;

/// CAR pricing factors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarFactors {
    /// Vehicle age in years (default 0)
    pub vehicle_age: f64,
    /// Miles driven per year (default 12,000)
    pub annual_mileage: f64,
    /// Default CLEAN
    pub driving_history: DrivingHistory,
    /// Default GARAGE
    pub parking_location: ParkingLocation,
}

impl Default for CarFactors {
    fn default() -> Self {
        Self {
            vehicle_age: 0.0,
            annual_mileage: DEFAULT_ANNUAL_MILEAGE,
            driving_history: DrivingHistory::default(),
            parking_location: ParkingLocation::default(),
        }
    }
}

/// LIFE pricing factors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeFactors {
    /// Insured's age in years (default 30)
    pub age: f64,
}

impl Default for LifeFactors {
    fn default() -> Self {
        Self {
            age: DEFAULT_INSURED_AGE,
        }
    }
}

/// HEALTH pricing factors
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthFactors {
    /// Number of pre-existing conditions (default 0)
    pub pre_conditions: f64,
}

/// PROPERTY pricing factors
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyFactors {
    /// Default LOW
    pub location_risk: LocationRisk,
}

/// Risk factors for a premium calculation
///
/// `None` prices at the unadjusted base rate. A variant belonging to a
/// different policy type than the one being priced is neutral.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RiskFactors {
    #[default]
    None,
    Car(CarFactors),
    Life(LifeFactors),
    Health(HealthFactors),
    Property(PropertyFactors),
}

impl RiskFactors {
    /// Policy type these factors describe
    pub fn policy_type(&self) -> Option<PolicyType> {
        match self {
            RiskFactors::None => None,
            RiskFactors::Car(_) => Some(PolicyType::Car),
            RiskFactors::Life(_) => Some(PolicyType::Life),
            RiskFactors::Health(_) => Some(PolicyType::Health),
            RiskFactors::Property(_) => Some(PolicyType::Property),
        }
    }
}

impl From<CarFactors> for RiskFactors {
    fn from(factors: CarFactors) -> Self {
        RiskFactors::Car(factors)
    }
}

impl From<LifeFactors> for RiskFactors {
    fn from(factors: LifeFactors) -> Self {
        RiskFactors::Life(factors)
    }
}

impl From<HealthFactors> for RiskFactors {
    fn from(factors: HealthFactors) -> Self {
        RiskFactors::Health(factors)
    }
}

impl From<PropertyFactors> for RiskFactors {
    fn from(factors: PropertyFactors) -> Self {
        RiskFactors::Property(factors)
    }
}
