//! Rate tables
//!
//! Base annual rates per policy type and the categorical multiplier lookups.
//! A table is built once (defaults or a JSON override file), validated, and
//! shared read-only behind an `Arc`.

use std::collections::HashMap;
use std::path::Path;

use coverwise_common::{
    CoverwiseError, DrivingHistory, LocationRisk, ParkingLocation, PolicyType, Result,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Base rate used when a policy type has no entry in the table
pub const DEFAULT_FALLBACK_RATE: f64 = 0.03;

/// Multiplier for a categorical level missing from its table
pub const NEUTRAL_MULTIPLIER: f64 = 1.0;

/// Pricing rate table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateTable {
    /// Annual premium as a fraction of coverage, per policy type
    pub base_rates: HashMap<PolicyType, f64>,
    /// Annual rate for types missing from `base_rates`
    pub fallback_rate: f64,
    /// CAR: driving history multipliers
    pub driving_history: HashMap<DrivingHistory, f64>,
    /// CAR: overnight parking multipliers
    pub parking_location: HashMap<ParkingLocation, f64>,
    /// PROPERTY: location hazard multipliers
    pub location_risk: HashMap<LocationRisk, f64>,
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            base_rates: HashMap::from([
                (PolicyType::Life, 0.005),
                (PolicyType::Car, 0.04),
                (PolicyType::Health, 0.06),
                (PolicyType::Property, 0.02),
            ]),
            fallback_rate: DEFAULT_FALLBACK_RATE,
            driving_history: HashMap::from([
                (DrivingHistory::Clean, 1.0),
                (DrivingHistory::MinorViolations, 1.2),
                (DrivingHistory::MajorViolations, 1.5),
                (DrivingHistory::Accidents, 1.8),
            ]),
            parking_location: HashMap::from([
                (ParkingLocation::Garage, 1.0),
                (ParkingLocation::Driveway, 1.1),
                (ParkingLocation::Street, 1.3),
                (ParkingLocation::PublicParking, 1.4),
            ]),
            location_risk: HashMap::from([
                (LocationRisk::Low, 1.0),
                (LocationRisk::Medium, 1.3),
                (LocationRisk::High, 1.6),
            ]),
        }
    }
}

impl RateTable {
    /// Load a table from a JSON file; omitted sections keep their defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CoverwiseError::Config(format!(
                "Failed to read rates file {}: {}",
                path.display(),
                e
            ))
        })?;
        let table = Self::from_json_str(&content)?;
        debug!(path = %path.display(), "Loaded rate table");
        Ok(table)
    }

    /// Parse and validate a JSON rate table
    pub fn from_json_str(content: &str) -> Result<Self> {
        let table: RateTable = serde_json::from_str(content)
            .map_err(|e| CoverwiseError::Config(format!("Failed to parse rates JSON: {}", e)))?;
        table.validate()?;
        Ok(table)
    }

    /// Reject negative or non-finite rates
    pub fn validate(&self) -> Result<()> {
        check_rate("fallback_rate", self.fallback_rate)?;
        for (policy_type, rate) in &self.base_rates {
            check_rate(&format!("base_rates.{}", policy_type), *rate)?;
        }
        for (level, rate) in &self.driving_history {
            check_rate(&format!("driving_history.{}", level), *rate)?;
        }
        for (level, rate) in &self.parking_location {
            check_rate(&format!("parking_location.{}", level), *rate)?;
        }
        for (level, rate) in &self.location_risk {
            check_rate(&format!("location_risk.{}", level), *rate)?;
        }
        Ok(())
    }

    /// Annual base rate for a policy type
    pub fn base_rate(&self, policy_type: PolicyType) -> f64 {
        match self.base_rates.get(&policy_type) {
            Some(rate) => *rate,
            None => {
                debug!(%policy_type, fallback = self.fallback_rate, "No base rate, using fallback");
                self.fallback_rate
            }
        }
    }

    pub fn driving_history_multiplier(&self, history: &DrivingHistory) -> f64 {
        lookup("driving_history", &self.driving_history, history)
    }

    pub fn parking_location_multiplier(&self, location: &ParkingLocation) -> f64 {
        lookup("parking_location", &self.parking_location, location)
    }

    pub fn location_risk_multiplier(&self, risk: &LocationRisk) -> f64 {
        lookup("location_risk", &self.location_risk, risk)
    }
}

fn lookup<K>(table: &'static str, entries: &HashMap<K, f64>, key: &K) -> f64
where
    K: std::hash::Hash + Eq + std::fmt::Display,
{
    match entries.get(key) {
        Some(multiplier) => *multiplier,
        None => {
            warn!(table, value = %key, "Unrecognized risk level, using neutral multiplier");
            NEUTRAL_MULTIPLIER
        }
    }
}

fn check_rate(name: &str, rate: f64) -> Result<()> {
    if !rate.is_finite() || rate < 0.0 {
        return Err(CoverwiseError::Config(format!(
            "{} must be a non-negative number, got {}",
            name, rate
        )));
    }
    Ok(())
}
