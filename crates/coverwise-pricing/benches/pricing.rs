//! Pricing benchmarks
//!
//! Hot paths:
//! - Premium calculation per policy type
//! - Risk scoring per policy type

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use coverwise_common::{DrivingHistory, HealthCondition, ParkingLocation, PolicyType};
use coverwise_pricing::{
    CarFactors, CarRiskInput, HealthFactors, LifeFactors, LifeRiskInput, PremiumCalculator,
    PropertyFactors, RiskFactors, RiskProfile, RiskScorer,
};

fn bench_premium(c: &mut Criterion) {
    let mut group = c.benchmark_group("premium");
    let calc = PremiumCalculator::default();

    let cases = [
        (PolicyType::Life, RiskFactors::Life(LifeFactors { age: 52.0 })),
        (
            PolicyType::Car,
            RiskFactors::Car(CarFactors {
                vehicle_age: 8.0,
                annual_mileage: 18_000.0,
                driving_history: DrivingHistory::MajorViolations,
                parking_location: ParkingLocation::Street,
            }),
        ),
        (PolicyType::Health, RiskFactors::Health(HealthFactors { pre_conditions: 2.0 })),
        (PolicyType::Property, RiskFactors::Property(PropertyFactors::default())),
    ];

    for (policy_type, factors) in cases.iter() {
        group.bench_with_input(
            BenchmarkId::new("calculate", policy_type),
            factors,
            |b, factors| {
                b.iter(|| {
                    calc.calculate_premium(
                        black_box(*policy_type),
                        black_box(250_000.0),
                        black_box(12),
                        black_box(factors),
                    )
                })
            },
        );
    }

    group.finish();
}

fn bench_risk_scoring(c: &mut Criterion) {
    let mut group = c.benchmark_group("risk_score");
    let scorer = RiskScorer::new();

    let life = RiskProfile::Life(
        LifeRiskInput::new(47, &HealthCondition::Fair)
            .with_lifestyle_factor("smoking", 1.0)
            .with_family_condition("stroke"),
    );
    let car = RiskProfile::Car(CarRiskInput {
        driver_age: 23,
        vehicle_score: 0.4,
        accident_history: vec!["2022".into()],
        location_risk: 0.3,
    });

    group.bench_function("life", |b| b.iter(|| scorer.score(black_box(&life))));
    group.bench_function("car", |b| b.iter(|| scorer.score(black_box(&car))));

    group.finish();
}

criterion_group!(benches, bench_premium, bench_risk_scoring);
criterion_main!(benches);
