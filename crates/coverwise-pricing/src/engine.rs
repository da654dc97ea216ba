//! Premium calculator
//!
//! ```text
//! premium = round(coverage × base_rate(type) × term_months / 12 × risk_multiplier, 2)
//! ```
//!
//! The risk multiplier is the product of the policy type's factor
//! multipliers, or 1.0 when no factors are supplied.

use std::sync::Arc;

use coverwise_common::{
    Policy, PolicyType, Premium, PricingError, Result, RiskScore, MONTHS_PER_YEAR,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::factors::{CarFactors, HealthFactors, LifeFactors, PropertyFactors, RiskFactors};
use crate::rates::RateTable;
use crate::term::calculate_policy_term;

/// Per-condition surcharge on HEALTH policies
pub const PRE_CONDITION_SURCHARGE: f64 = 0.1;

/// One multiplier applied during pricing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiplierFactor {
    /// Factor name (e.g., "vehicle_age", "driving_history")
    pub name: String,
    /// Multiplier applied (1.0 is neutral)
    pub multiplier: f64,
    /// Human-readable explanation
    pub description: String,
}

impl MultiplierFactor {
    pub fn new(name: impl Into<String>, multiplier: f64, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            multiplier,
            description: description.into(),
        }
    }
}

/// Combined risk multiplier and the factors that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskMultiplier {
    /// Product of all factor multipliers
    pub value: f64,
    /// Factors in application order
    pub factors: Vec<MultiplierFactor>,
}

impl RiskMultiplier {
    fn neutral() -> Self {
        Self {
            value: 1.0,
            factors: Vec::new(),
        }
    }

    fn apply(&mut self, factor: MultiplierFactor) {
        self.value *= factor.multiplier;
        self.factors.push(factor);
    }
}

/// Detailed premium calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PremiumBreakdown {
    pub policy_type: PolicyType,
    pub coverage_amount: f64,
    pub term_months: u32,
    /// Annual rate applied
    pub base_rate: f64,
    /// Annualized premium before term and risk
    pub base_premium: f64,
    pub term_years: f64,
    /// Base premium scaled to the term
    pub term_adjusted_premium: f64,
    /// Risk multiplier applied to the term-adjusted premium
    pub risk_multiplier: RiskMultiplier,
    /// Final rounded premium
    pub premium: Premium,
}

/// Stateless premium calculator over a shared rate table
#[derive(Debug, Clone)]
pub struct PremiumCalculator {
    rates: Arc<RateTable>,
}

impl PremiumCalculator {
    pub fn new(rates: Arc<RateTable>) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Calculate the premium for a policy
    ///
    /// Coverage must be positive and finite, and the term at least one month.
    pub fn calculate_premium(
        &self,
        policy_type: PolicyType,
        coverage_amount: f64,
        term_months: u32,
        factors: &RiskFactors,
    ) -> Result<Premium> {
        Ok(self
            .quote(policy_type, coverage_amount, term_months, factors)?
            .premium)
    }

    /// Calculate the premium with every intermediate value
    #[instrument(skip(self, factors))]
    pub fn quote(
        &self,
        policy_type: PolicyType,
        coverage_amount: f64,
        term_months: u32,
        factors: &RiskFactors,
    ) -> Result<PremiumBreakdown> {
        let risk_multiplier = self.risk_multiplier(policy_type, factors);
        self.price(policy_type, coverage_amount, term_months, risk_multiplier)
    }

    /// Premium using a risk score in place of the categorical factors
    ///
    /// The multiplier is `1 + base_score`, with the score clamped to 0.0 - 1.0.
    #[instrument(skip(self, score), fields(base_score = score.base_score))]
    pub fn calculate_scored_premium(
        &self,
        policy_type: PolicyType,
        coverage_amount: f64,
        term_months: u32,
        score: &RiskScore,
    ) -> Result<PremiumBreakdown> {
        let mut multiplier = RiskMultiplier::neutral();
        multiplier.apply(MultiplierFactor::new(
            "risk_score",
            1.0 + score.base_score.clamp(0.0, 1.0),
            format!("risk score {:.2} at {:.0}% confidence", score.base_score, score.confidence * 100.0),
        ));
        self.price(policy_type, coverage_amount, term_months, multiplier)
    }

    /// Recalculate and store a policy's premium from its own coverage and dates
    pub fn reprice_policy(&self, policy: &mut Policy, factors: &RiskFactors) -> Result<Premium> {
        let term_months = calculate_policy_term(policy.start_date(), policy.end_date());
        let premium = self.calculate_premium(
            policy.policy_type,
            policy.coverage_amount(),
            term_months,
            factors,
        )?;
        policy.apply_premium(premium);
        debug!(policy_id = %policy.policy_id, %premium, "Policy repriced");
        Ok(premium)
    }

    /// Risk multiplier for a policy type
    ///
    /// Factors for a different policy type are ignored and give 1.0.
    pub fn risk_multiplier(&self, policy_type: PolicyType, factors: &RiskFactors) -> RiskMultiplier {
        match (policy_type, factors) {
            (PolicyType::Car, RiskFactors::Car(car)) => self.car_multiplier(car),
            (PolicyType::Life, RiskFactors::Life(life)) => life_multiplier(life),
            (PolicyType::Health, RiskFactors::Health(health)) => health_multiplier(health),
            (PolicyType::Property, RiskFactors::Property(property)) => {
                self.property_multiplier(property)
            }
            (_, RiskFactors::None) => RiskMultiplier::neutral(),
            (policy_type, other) => {
                debug!(
                    %policy_type,
                    factors_for = ?other.policy_type(),
                    "Risk factors do not match policy type, treating as neutral"
                );
                RiskMultiplier::neutral()
            }
        }
    }

    fn price(
        &self,
        policy_type: PolicyType,
        coverage_amount: f64,
        term_months: u32,
        risk_multiplier: RiskMultiplier,
    ) -> Result<PremiumBreakdown> {
        if !coverage_amount.is_finite() || coverage_amount <= 0.0 {
            return Err(PricingError::InvalidCoverage(coverage_amount).into());
        }
        if term_months == 0 {
            return Err(PricingError::InvalidTerm.into());
        }

        let base_rate = self.rates.base_rate(policy_type);
        let base_premium = coverage_amount * base_rate;
        let term_years = term_months as f64 / MONTHS_PER_YEAR;
        let term_adjusted_premium = base_premium * term_years;
        let premium = Premium::from_f64(term_adjusted_premium * risk_multiplier.value)?;

        debug!(
            base_rate,
            base_premium,
            term_years,
            risk_multiplier = risk_multiplier.value,
            %premium,
            "Premium calculated"
        );

        Ok(PremiumBreakdown {
            policy_type,
            coverage_amount,
            term_months,
            base_rate,
            base_premium,
            term_years,
            term_adjusted_premium,
            risk_multiplier,
            premium,
        })
    }

    fn car_multiplier(&self, car: &CarFactors) -> RiskMultiplier {
        let mut multiplier = RiskMultiplier::neutral();

        let age_factor = if car.vehicle_age > 10.0 {
            1.4
        } else if car.vehicle_age > 5.0 {
            1.2
        } else {
            1.0
        };
        multiplier.apply(MultiplierFactor::new(
            "vehicle_age",
            age_factor,
            format!("{} year old vehicle", car.vehicle_age),
        ));

        let mileage_factor = if car.annual_mileage > 20_000.0 {
            1.3
        } else if car.annual_mileage > 15_000.0 {
            1.2
        } else {
            1.0
        };
        multiplier.apply(MultiplierFactor::new(
            "annual_mileage",
            mileage_factor,
            format!("{} miles per year", car.annual_mileage),
        ));

        multiplier.apply(MultiplierFactor::new(
            "driving_history",
            self.rates.driving_history_multiplier(&car.driving_history),
            format!("{} driving history", car.driving_history),
        ));

        multiplier.apply(MultiplierFactor::new(
            "parking_location",
            self.rates.parking_location_multiplier(&car.parking_location),
            format!("parked in {}", car.parking_location),
        ));

        multiplier
    }

    fn property_multiplier(&self, property: &PropertyFactors) -> RiskMultiplier {
        let mut multiplier = RiskMultiplier::neutral();
        multiplier.apply(MultiplierFactor::new(
            "location_risk",
            self.rates.location_risk_multiplier(&property.location_risk),
            format!("{} location risk", property.location_risk),
        ));
        multiplier
    }
}

impl Default for PremiumCalculator {
    fn default() -> Self {
        Self::new(Arc::new(RateTable::default()))
    }
}

fn life_multiplier(life: &LifeFactors) -> RiskMultiplier {
    let factor = if life.age > 60.0 {
        1.5
    } else if life.age > 40.0 {
        1.2
    } else {
        1.0
    };
    let mut multiplier = RiskMultiplier::neutral();
    multiplier.apply(MultiplierFactor::new(
        "age",
        factor,
        format!("insured aged {}", life.age),
    ));
    multiplier
}

fn health_multiplier(health: &HealthFactors) -> RiskMultiplier {
    let mut multiplier = RiskMultiplier::neutral();
    multiplier.apply(MultiplierFactor::new(
        "pre_conditions",
        1.0 + PRE_CONDITION_SURCHARGE * health.pre_conditions,
        format!("{} pre-existing conditions", health.pre_conditions),
    ));
    multiplier
}
