//! Algebraic properties of the premium calculator

use coverwise_common::{PolicyType, Premium};
use coverwise_pricing::{PremiumCalculator, RiskFactors};
use proptest::prelude::*;
use rust_decimal_macros::dec;

fn policy_type() -> impl Strategy<Value = PolicyType> {
    prop::sample::select(PolicyType::ALL.to_vec())
}

proptest! {
    #[test]
    fn test_unadjusted_premium_matches_formula(
        policy_type in policy_type(),
        coverage in 1.0f64..10_000_000.0,
        term in 1u32..600,
    ) {
        let calc = PremiumCalculator::default();
        let rate = calc.rates().base_rate(policy_type);

        let premium = calc
            .calculate_premium(policy_type, coverage, term, &RiskFactors::None)
            .unwrap();
        let expected = Premium::from_f64(coverage * rate * (term as f64 / 12.0)).unwrap();

        prop_assert_eq!(premium, expected);
    }

    #[test]
    fn test_premium_linear_in_term(
        policy_type in policy_type(),
        coverage in 1.0f64..10_000_000.0,
        term in 1u32..300,
    ) {
        let calc = PremiumCalculator::default();
        let single = calc
            .calculate_premium(policy_type, coverage, term, &RiskFactors::None)
            .unwrap();
        let double = calc
            .calculate_premium(policy_type, coverage, term * 2, &RiskFactors::None)
            .unwrap();

        let drift = (double.amount() - single.amount() * dec!(2)).abs();
        prop_assert!(drift <= dec!(0.02), "drift {} too large", drift);
    }

    #[test]
    fn test_non_positive_coverage_always_rejected(
        policy_type in policy_type(),
        coverage in -1_000_000.0f64..=0.0,
        term in 1u32..600,
    ) {
        let calc = PremiumCalculator::default();
        prop_assert!(calc
            .calculate_premium(policy_type, coverage, term, &RiskFactors::None)
            .is_err());
    }
}
