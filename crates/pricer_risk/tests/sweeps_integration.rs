//! Integration tests for sweeps across the built-in models.

use approx::assert_abs_diff_eq;
use pricer_core::traits::{FnValuator, GreeksCalculator, Valuator};
use pricer_core::types::{OptionValues, PricingParameters};
use pricer_models::analytical::BlackScholes;
use pricer_models::lattice::BinomialLattice;
use pricer_models::models::{ModelKind, PricingModel};
use pricer_risk::greeks::FiniteDifferenceGreeks;
use pricer_risk::sweeps::{
    generate_call_put_curve, generate_delta_curve, generate_greeks_curve, generate_surface,
    CurveType, SweepRange,
};
use proptest::prelude::*;

#[test]
fn test_reference_curve_has_101_ascending_points() {
    let range = SweepRange::new(50.0, 150.0, 100).unwrap();
    let params = PricingParameters::default();
    for curve_type in [CurveType::Gamma, CurveType::Vega] {
        let curve = generate_greeks_curve(&params, range, curve_type, &BlackScholes::new()).unwrap();
        assert_eq!(curve.x_values.len(), 101);
        assert_eq!(curve.y_values.len(), 101);
        assert!(curve.x_values.windows(2).all(|w| w[1] > w[0]));
    }
}

#[test]
fn test_lattice_and_closed_form_delta_curves_agree() {
    let params = PricingParameters::default();
    let range = SweepRange::new(70.0, 130.0, 12).unwrap();
    let analytic = generate_delta_curve(&params, range, &BlackScholes::new()).unwrap();
    let lattice = generate_delta_curve(
        &params,
        range,
        &FiniteDifferenceGreeks::new(BinomialLattice::new(200)),
    )
    .unwrap();

    assert_eq!(analytic.spot_prices, lattice.spot_prices);
    for (a, l) in analytic.call_deltas.iter().zip(&lattice.call_deltas) {
        assert_abs_diff_eq!(a, l, epsilon = 0.02);
    }
}

#[test]
fn test_surface_through_model_dispatch() {
    let params = PricingParameters::default();
    let spot = SweepRange::new(80.0, 120.0, 8).unwrap();
    let time = SweepRange::new(0.25, 2.0, 7).unwrap();

    let model = PricingModel::from_kind(ModelKind::Binomial, 50).unwrap();
    let surface = generate_surface(&params, spot, time, &model).unwrap();
    assert_eq!(surface.dimensions(), (9, 8));
    assert_eq!(surface.call_prices.len(), 9);
    assert!(surface.call_prices.iter().all(|row| row.len() == 8));

    // Calls rise with spot down each column
    for j in 0..8 {
        for i in 1..9 {
            assert!(surface.call_prices[i][j] > surface.call_prices[i - 1][j]);
            assert!(surface.put_prices[i][j] < surface.put_prices[i - 1][j]);
        }
    }
}

#[test]
fn test_surface_accepts_external_valuator() {
    // Stand-in for a host-side simulation model
    let external = FnValuator::new(|p: &PricingParameters| {
        BlackScholes::new().price(p)
    });
    let params = PricingParameters::default();
    let spot = SweepRange::new(90.0, 110.0, 2).unwrap();
    let time = SweepRange::new(0.5, 1.0, 1).unwrap();

    let via_external = generate_surface(&params, spot, time, &external).unwrap();
    let direct = generate_surface(&params, spot, time, &BlackScholes::new()).unwrap();
    assert_eq!(via_external, direct);
}

#[test]
fn test_call_put_curve_parity_on_closed_form() {
    let params = PricingParameters::default();
    let range = SweepRange::around_strike(params.strike_price);
    let curve = generate_call_put_curve(&params, range, &BlackScholes::new()).unwrap();
    let discounted_strike = 100.0 * (-0.05_f64).exp();
    for i in 0..curve.spot_prices.len() {
        let forward = curve.spot_prices[i] - discounted_strike;
        assert_abs_diff_eq!(curve.call_prices[i] - curve.put_prices[i], forward, epsilon = 1e-4);
    }
}

#[test]
fn test_degenerate_samples_do_not_error() {
    // The swept spot starts at zero; that sample degrades to zero values
    let params = PricingParameters::default();
    let range = SweepRange::new(0.0, 100.0, 4).unwrap();
    let zero = FnValuator::new(|_: &PricingParameters| OptionValues::zero());
    let curve = generate_call_put_curve(&params, range, &BlackScholes::new()).unwrap();
    assert_eq!(curve.call_prices[0], 0.0);
    assert_eq!(curve.put_prices[0], 0.0);
    assert!(generate_call_put_curve(&params, range, &zero).is_ok());

    let greeks = FiniteDifferenceGreeks::new(BinomialLattice::new(20));
    assert_eq!(
        greeks.greeks(&params.with_spot(0.0)),
        pricer_core::types::Greeks::zero()
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn test_curve_length_matches_steps(
        min in 1.0f64..100.0,
        width in 0.0f64..100.0,
        steps in 1usize..300,
    ) {
        let range = SweepRange::new(min, min + width, steps).unwrap();
        let curve = generate_greeks_curve(
            &PricingParameters::default(),
            range,
            CurveType::Gamma,
            &BlackScholes::new(),
        )
        .unwrap();
        prop_assert_eq!(curve.x_values.len(), steps + 1);
        prop_assert_eq!(curve.y_values.len(), steps + 1);
        prop_assert!(curve.y_values.iter().all(|&g| g >= 0.0));
    }
}
