//! Integration tests for module exports.
//!
//! Verify that the Greeks, sweep and parallel items downstream crates rely on
//! resolve at their module-level paths.

/// Default bump sizes are reachable next to the config they seed.
#[test]
fn test_greeks_module_exports() {
    use pricer_risk::greeks::{
        FiniteDifferenceGreeks, GreeksConfig, GreeksConfigBuilder, GreeksConfigError,
        DEFAULT_RATE_BUMP_ABSOLUTE, DEFAULT_SPOT_BUMP_RELATIVE, DEFAULT_TIME_BUMP_YEARS,
        DEFAULT_VOL_BUMP_ABSOLUTE,
    };
    use pricer_models::analytical::BlackScholes;

    let config = GreeksConfig::default();
    assert_eq!(config.spot_bump_relative, DEFAULT_SPOT_BUMP_RELATIVE);
    assert_eq!(config.vol_bump_absolute, DEFAULT_VOL_BUMP_ABSOLUTE);
    assert_eq!(config.time_bump_years, DEFAULT_TIME_BUMP_YEARS);
    assert_eq!(config.rate_bump_absolute, DEFAULT_RATE_BUMP_ABSOLUTE);

    let built: Result<GreeksConfig, GreeksConfigError> = GreeksConfig::builder().build();
    assert_eq!(built.unwrap(), config);
    let _: GreeksConfigBuilder = GreeksConfig::builder();

    let calculator = FiniteDifferenceGreeks::with_config(BlackScholes::new(), config);
    assert_eq!(*calculator.config(), config);
}

/// Sweep and parallel re-exports resolve.
#[test]
fn test_sweeps_and_parallel_exports() {
    use pricer_risk::parallel::{ParallelConfig, DEFAULT_BATCH_SIZE, DEFAULT_PARALLEL_THRESHOLD};
    use pricer_risk::sweeps::{SweepError, SweepRange, DEFAULT_CURVE_STEPS};

    let parallel = ParallelConfig::default();
    assert_eq!(parallel.batch_size, DEFAULT_BATCH_SIZE);
    assert_eq!(parallel.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);

    let range = SweepRange::around_strike(100.0);
    assert_eq!(range.steps, DEFAULT_CURVE_STEPS);
    assert!(matches!(
        SweepRange::new(1.0, 2.0, 0),
        Err(SweepError::ZeroSteps)
    ));
}
