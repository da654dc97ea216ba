//! Coverwise quoting binary
//!
//! Reads a JSON request, prices or scores it, and writes a JSON quote to
//! stdout. Logs go to stderr.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

use coverwise_common::{PolicyType, RiskScore, VERSION};
use coverwise_pricing::{
    assess_claim, calculate_commission, calculate_policy_term, claim_payout, payment_matches,
    refund_amount, target_achievement, Claim, PerformanceLevel, PremiumBreakdown,
    PremiumCalculator, PricingConfig, RiskFactors, RiskModel, RiskProfile, RiskScorer,
};

#[derive(Debug, Parser)]
#[command(name = "coverwise", version, about = "Insurance premium quoting")]
struct Cli {
    /// JSON rate table overriding COVERWISE_RATES_FILE
    #[arg(long, global = true)]
    rates: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Price a premium request
    Premium {
        /// Request file, or `-` for stdin
        input: PathBuf,
    },
    /// Score a risk profile
    Score {
        /// Profile file, or `-` for stdin
        input: PathBuf,
    },
    /// Whole months between two dates
    Term {
        #[arg(long)]
        start: NaiveDate,
        #[arg(long)]
        end: NaiveDate,
    },
    /// Claim payout after deductible
    Payout {
        #[arg(long)]
        claim: Decimal,
        #[arg(long)]
        coverage: Decimal,
        #[arg(long, default_value = "0")]
        deductible: Decimal,
        /// Payment received, checked against the payout
        #[arg(long)]
        paid: Option<Decimal>,
    },
    /// Refund after the processing fee
    Refund {
        #[arg(long)]
        payment: Decimal,
        /// Overrides COVERWISE_REFUND_FEE
        #[arg(long)]
        fee: Option<Decimal>,
    },
    /// Assess a filed claim
    Assess {
        /// Claim file, or `-` for stdin
        input: PathBuf,
        /// Assessment date (default today, UTC)
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },
    /// Agent commission on a sale
    Commission {
        #[arg(long)]
        sale: Decimal,
        #[arg(long)]
        rate: Decimal,
        /// Agent's sales so far this period
        #[arg(long, default_value = "0")]
        total_sales: Decimal,
        #[arg(long, default_value = "0")]
        target: Decimal,
        /// Customer satisfaction out of 5
        #[arg(long, default_value_t = 0.0)]
        satisfaction: f64,
    },
}

/// Premium request body
#[derive(Debug, Deserialize)]
struct PremiumRequest {
    /// Integer policy type code
    policy_type: PolicyType,
    coverage_amount: f64,
    term_months: u32,
    #[serde(default)]
    risk_factors: RiskFactors,
    /// Scored pricing; takes precedence over `risk_factors`
    #[serde(default)]
    risk_profile: Option<RiskProfile>,
}

/// Output envelope
#[derive(Debug, Serialize)]
struct Quote<T> {
    quote_id: Uuid,
    issued_at: DateTime<Utc>,
    #[serde(flatten)]
    body: T,
}

impl<T: Serialize> Quote<T> {
    fn new(body: T) -> Self {
        Self {
            quote_id: Uuid::now_v7(),
            issued_at: Utc::now(),
            body,
        }
    }
}

#[derive(Debug, Serialize)]
struct PremiumQuote {
    #[serde(flatten)]
    breakdown: PremiumBreakdown,
    #[serde(skip_serializing_if = "Option::is_none")]
    risk_score: Option<RiskScore>,
}

#[derive(Debug, Serialize)]
struct TermResult {
    start: NaiveDate,
    end: NaiveDate,
    term_months: u32,
}

#[derive(Debug, Serialize)]
struct PayoutResult {
    claim_amount: Decimal,
    coverage_amount: Decimal,
    deductible: Decimal,
    payout: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    payment_matches: Option<bool>,
}

#[derive(Debug, Serialize)]
struct RefundResult {
    payment_amount: Decimal,
    processing_fee: Decimal,
    refund: Decimal,
}

#[derive(Debug, Serialize)]
struct CommissionResult {
    sale_amount: Decimal,
    target_achievement: Decimal,
    performance_level: PerformanceLevel,
    commission: Decimal,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    info!("Coverwise v{}", VERSION);

    let mut config = PricingConfig::load();
    if let Some(path) = cli.rates {
        config.rates_file = Some(path);
    }

    match cli.command {
        Command::Premium { input } => {
            let request: PremiumRequest = read_input(&input)?;
            let calculator = config.calculator()?;
            emit(&Quote::new(price(&calculator, request)?))
        }
        Command::Score { input } => {
            let profile: RiskProfile = read_input(&input)?;
            emit(&Quote::new(RiskScorer::new().score(&profile)))
        }
        Command::Term { start, end } => emit(&TermResult {
            start,
            end,
            term_months: calculate_policy_term(Some(start), Some(end)),
        }),
        Command::Payout {
            claim,
            coverage,
            deductible,
            paid,
        } => {
            let payout = claim_payout(claim, coverage, deductible);
            emit(&PayoutResult {
                claim_amount: claim,
                coverage_amount: coverage,
                deductible,
                payout,
                payment_matches: paid.map(|amount| payment_matches(amount, payout)),
            })
        }
        Command::Refund { payment, fee } => {
            let processing_fee = fee.unwrap_or(config.refund_fee);
            emit(&RefundResult {
                payment_amount: payment,
                processing_fee,
                refund: refund_amount(payment, processing_fee),
            })
        }
        Command::Assess { input, as_of } => {
            let claim: Claim = read_input(&input)?;
            let as_of = as_of.unwrap_or_else(|| Utc::now().date_naive());
            emit(&assess_claim(&claim, as_of))
        }
        Command::Commission {
            sale,
            rate,
            total_sales,
            target,
            satisfaction,
        } => {
            let achievement = target_achievement(total_sales, target);
            let level = PerformanceLevel::from_performance(achievement, satisfaction);
            emit(&CommissionResult {
                sale_amount: sale,
                target_achievement: achievement,
                performance_level: level,
                commission: calculate_commission(sale, rate, level)?,
            })
        }
    }
}

fn price(calculator: &PremiumCalculator, request: PremiumRequest) -> Result<PremiumQuote> {
    let Some(profile) = request.risk_profile else {
        let breakdown = calculator.quote(
            request.policy_type,
            request.coverage_amount,
            request.term_months,
            &request.risk_factors,
        )?;
        return Ok(PremiumQuote {
            breakdown,
            risk_score: None,
        });
    };

    if profile.policy_type() != request.policy_type {
        warn!(
            policy_type = %request.policy_type,
            profile_type = %profile.policy_type(),
            "Risk profile describes a different policy type"
        );
    }
    let score = RiskScorer::new().score(&profile);
    let breakdown = calculator.calculate_scored_premium(
        request.policy_type,
        request.coverage_amount,
        request.term_months,
        &score,
    )?;
    Ok(PremiumQuote {
        breakdown,
        risk_score: Some(score),
    })
}

fn read_input<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    };
    serde_json::from_str(&raw).with_context(|| format!("Invalid request in {}", path.display()))
}

fn emit<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: &str) -> PremiumRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_categorical_pricing_without_profile() {
        let quote = price(
            &PremiumCalculator::default(),
            request(
                r#"{
                    "policy_type": 1,
                    "coverage_amount": 100000,
                    "term_months": 12,
                    "risk_factors": { "kind": "life", "age": 65 }
                }"#,
            ),
        )
        .unwrap();

        assert!(quote.risk_score.is_none());
        assert_eq!(quote.breakdown.risk_multiplier.factors[0].name, "age");
        assert_eq!(quote.breakdown.premium.amount(), Decimal::new(75000, 2));
    }

    #[test]
    fn test_profile_takes_precedence_over_factors() {
        let quote = price(
            &PremiumCalculator::default(),
            request(
                r#"{
                    "policy_type": 1,
                    "coverage_amount": 100000,
                    "term_months": 12,
                    "risk_factors": { "kind": "life", "age": 65 },
                    "risk_profile": {
                        "kind": "life",
                        "age": 40,
                        "health_score": 0.4,
                        "lifestyle_factors": { "smoking": 1.0 },
                        "family_history": ["heart disease"]
                    }
                }"#,
            ),
        )
        .unwrap();

        let names: Vec<_> = quote
            .breakdown
            .risk_multiplier
            .factors
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, vec!["risk_score"]);
        assert!(quote.risk_score.is_some());
        // 500 × (1 + 0.475)
        assert_eq!(quote.breakdown.premium.amount(), Decimal::new(73750, 2));
    }

    #[test]
    fn test_profile_for_other_type_still_scores() {
        let quote = price(
            &PremiumCalculator::default(),
            request(
                r#"{
                    "policy_type": 1,
                    "coverage_amount": 100000,
                    "term_months": 12,
                    "risk_profile": {
                        "kind": "car",
                        "driver_age": 80,
                        "vehicle_score": 0.9,
                        "accident_history": ["2021", "2022", "2023"],
                        "location_risk": 0.9
                    }
                }"#,
            ),
        )
        .unwrap();

        assert_eq!(quote.breakdown.policy_type, PolicyType::Life);
        assert_eq!(quote.risk_score.map(|s| s.base_score), Some(1.0));
        assert_eq!(quote.breakdown.premium.amount(), Decimal::new(100000, 2));
    }

    #[test]
    fn test_unknown_policy_code_prices_at_fallback() {
        let quote = price(
            &PremiumCalculator::default(),
            request(r#"{ "policy_type": 9, "coverage_amount": 10000, "term_months": 12 }"#),
        )
        .unwrap();

        assert_eq!(quote.breakdown.policy_type, PolicyType::Other(9));
        assert_eq!(quote.breakdown.base_rate, 0.03);
        assert_eq!(quote.breakdown.premium.amount(), Decimal::new(30000, 2));
    }

    #[test]
    fn test_invalid_request_is_an_error() {
        let result = price(
            &PremiumCalculator::default(),
            request(r#"{ "policy_type": 2, "coverage_amount": 0, "term_months": 12 }"#),
        );
        assert!(result.is_err());
    }
}
