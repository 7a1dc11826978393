//! Criterion benchmarks for pricer_risk Greeks and sweeps.
//!
//! Benchmarks cover:
//! - Finite-difference Greeks over closed-form and lattice valuators
//! - Greeks curves with sequential vs parallel evaluation
//! - Price surfaces at increasing grid sizes

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_core::traits::GreeksCalculator;
use pricer_core::types::PricingParameters;
use pricer_models::analytical::BlackScholes;
use pricer_models::lattice::BinomialLattice;
use pricer_risk::greeks::FiniteDifferenceGreeks;
use pricer_risk::parallel::ParallelConfig;
use pricer_risk::sweeps::{CurveGenerator, CurveType, SurfaceGenerator, SweepRange};

fn bench_finite_difference_greeks(c: &mut Criterion) {
    let mut group = c.benchmark_group("fd_greeks");
    let params = PricingParameters::default();

    let closed_form = FiniteDifferenceGreeks::new(BlackScholes::new());
    group.bench_function("black_scholes", |b| {
        b.iter(|| closed_form.greeks(black_box(&params)));
    });

    for steps in [50, 200] {
        let lattice = FiniteDifferenceGreeks::new(BinomialLattice::new(steps));
        group.bench_with_input(BenchmarkId::new("binomial", steps), &lattice, |b, lattice| {
            b.iter(|| lattice.greeks(black_box(&params)));
        });
    }

    group.finish();
}

fn bench_greeks_curve(c: &mut Criterion) {
    let mut group = c.benchmark_group("greeks_curve");
    let params = PricingParameters::default();
    let range = SweepRange::around_strike(params.strike_price);
    let lattice = FiniteDifferenceGreeks::new(BinomialLattice::new(50));

    for (label, config) in [
        ("sequential", ParallelConfig::sequential()),
        ("parallel", ParallelConfig::default()),
    ] {
        let generator = CurveGenerator::new(config);
        group.bench_function(label, |b| {
            b.iter(|| generator.greeks_curve(black_box(&params), range, CurveType::Gamma, &lattice));
        });
    }

    group.finish();
}

fn bench_surface(c: &mut Criterion) {
    let mut group = c.benchmark_group("surface");
    let params = PricingParameters::default();
    let generator = SurfaceGenerator::default();
    let lattice = BinomialLattice::new(50);

    for grid in [10, 25, 50] {
        let spot = SweepRange::new(50.0, 150.0, grid).unwrap();
        let time = SweepRange::new(0.1, 2.0, grid).unwrap();
        group.bench_with_input(BenchmarkId::new("binomial", grid), &grid, |b, _| {
            b.iter(|| generator.generate(black_box(&params), spot, time, &lattice));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_finite_difference_greeks,
    bench_greeks_curve,
    bench_surface
);
criterion_main!(benches);
