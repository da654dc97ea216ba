//! Pricing configuration

use std::path::PathBuf;
use std::sync::Arc;

use coverwise_common::Result;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::engine::PremiumCalculator;
use crate::rates::RateTable;
use crate::settlement::DEFAULT_PROCESSING_FEE;

/// Environment variable naming a JSON rate table
pub const RATES_FILE_VAR: &str = "COVERWISE_RATES_FILE";

/// Environment variable overriding the fallback base rate
pub const FALLBACK_RATE_VAR: &str = "COVERWISE_FALLBACK_RATE";

/// Environment variable overriding the refund processing fee
pub const REFUND_FEE_VAR: &str = "COVERWISE_REFUND_FEE";

/// Pricing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// JSON rate table overriding the built-in rates
    pub rates_file: Option<PathBuf>,
    /// Base rate for policy types missing from the table
    pub fallback_rate: Option<f64>,
    /// Fee withheld from refunds
    pub refund_fee: Decimal,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            rates_file: None,
            fallback_rate: None,
            refund_fee: DEFAULT_PROCESSING_FEE,
        }
    }
}

impl PricingConfig {
    /// Load configuration from `.env` and the process environment
    pub fn load() -> Self {
        // Try to load .env file
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    ///
    /// Unparseable values are logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();

        if let Some(path) = lookup(RATES_FILE_VAR) {
            cfg.rates_file = Some(PathBuf::from(path));
        }
        if let Some(val) = lookup(FALLBACK_RATE_VAR) {
            match val.parse::<f64>() {
                Ok(rate) => cfg.fallback_rate = Some(rate),
                Err(e) => warn!(var = FALLBACK_RATE_VAR, value = %val, error = %e, "Ignoring invalid value"),
            }
        }
        if let Some(val) = lookup(REFUND_FEE_VAR) {
            match val.parse::<Decimal>() {
                Ok(fee) => cfg.refund_fee = fee,
                Err(e) => warn!(var = REFUND_FEE_VAR, value = %val, error = %e, "Ignoring invalid value"),
            }
        }

        cfg
    }

    /// Resolve the rate table this configuration describes
    pub fn rate_table(&self) -> Result<RateTable> {
        let mut table = match &self.rates_file {
            Some(path) => RateTable::from_json_file(path)?,
            None => RateTable::default(),
        };
        if let Some(rate) = self.fallback_rate {
            table.fallback_rate = rate;
        }
        table.validate()?;
        Ok(table)
    }

    /// Build a calculator over the configured rate table
    pub fn calculator(&self) -> Result<PremiumCalculator> {
        let table = self.rate_table()?;
        info!(
            rates_file = ?self.rates_file,
            fallback_rate = table.fallback_rate,
            "Rate table ready"
        );
        Ok(PremiumCalculator::new(Arc::new(table)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coverwise_common::{CoverwiseError, PolicyType};
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let cfg = PricingConfig::from_lookup(lookup(&[]));
        assert!(cfg.rates_file.is_none());
        assert_eq!(cfg.refund_fee, dec!(25.00));
        assert_eq!(cfg.rate_table().unwrap(), RateTable::default());
    }

    #[test]
    fn test_overrides_from_environment() {
        let cfg = PricingConfig::from_lookup(lookup(&[
            (FALLBACK_RATE_VAR, "0.04"),
            (REFUND_FEE_VAR, "10.50"),
        ]));
        assert_eq!(cfg.fallback_rate, Some(0.04));
        assert_eq!(cfg.refund_fee, dec!(10.50));

        let table = cfg.rate_table().unwrap();
        assert_eq!(table.fallback_rate, 0.04);
        assert_eq!(table.base_rate(PolicyType::Life), 0.005);
    }

    #[test]
    fn test_invalid_values_ignored() {
        let cfg = PricingConfig::from_lookup(lookup(&[
            (FALLBACK_RATE_VAR, "lots"),
            (REFUND_FEE_VAR, "free"),
        ]));
        assert_eq!(cfg.fallback_rate, None);
        assert_eq!(cfg.refund_fee, DEFAULT_PROCESSING_FEE);
    }

    #[test]
    fn test_negative_fallback_rejected() {
        let cfg = PricingConfig::from_lookup(lookup(&[(FALLBACK_RATE_VAR, "-1")]));
        assert!(matches!(cfg.rate_table(), Err(CoverwiseError::Config(_))));
    }

    #[test]
    fn test_missing_rates_file_fails() {
        let cfg = PricingConfig::from_lookup(lookup(&[(RATES_FILE_VAR, "/no/such/rates.json")]));
        assert!(cfg.calculator().is_err());
    }
}
