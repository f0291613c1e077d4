//! Integration tests for the full comparison pipeline

use adaptive_compare::{
    analyze, Comparison, ComparisonOptions, EqualityMethod, Error, MagnitudeClass, RatioHeuristic,
    VarianceMode,
};
use approx::assert_abs_diff_eq;
use proptest::prelude::*;

fn run(data1: &[f64], data2: &[f64]) -> Comparison {
    analyze(data1, data2, &ComparisonOptions::default()).unwrap()
}

#[test]
fn identical_samples_give_maximal_p_and_no_rejection() {
    let data = [1.0, 2.0, 3.0, 4.0, 5.0];
    let comparison = run(&data, &data);

    assert_abs_diff_eq!(comparison.test.p_value, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(comparison.test.t_statistic, 0.0, epsilon = 1e-12);
    assert!(!comparison.test.reject_null);
}

#[test]
fn confidence_interval_is_always_ordered() {
    let cases: [(&[f64], &[f64]); 4] = [
        (&[1.0, 2.0, 3.0, 4.0, 5.0], &[3.0, 4.0, 5.0, 6.0, 7.0]),
        (&[10.0, 11.0, 9.0], &[1.0, 2.0, 3.0]),
        (&[0.5, 0.6, 0.4, 0.5], &[0.5, 0.6, 0.4, 0.5]),
        // Degenerate: zero-width interval still satisfies the ordering
        (&[3.0, 3.0, 3.0], &[5.0, 5.0, 5.0]),
    ];

    for (data1, data2) in cases {
        let comparison = run(data1, data2);
        let ci = comparison.test.confidence_interval;
        assert!(ci.lower <= ci.upper, "unordered CI for {data1:?} vs {data2:?}");
    }
}

#[test]
fn decision_always_matches_p_value() {
    let cases: [(&[f64], &[f64]); 3] = [
        (&[1.0, 2.0, 3.0, 4.0, 5.0], &[3.0, 4.0, 5.0, 6.0, 7.0]),
        (&[1.0, 1.1, 0.9, 1.2, 0.8], &[9.0, 9.1, 8.9, 9.2, 8.8]),
        (&[3.0, 3.0, 3.0], &[5.0, 5.0, 5.0]),
    ];

    for (data1, data2) in cases {
        let comparison = run(data1, data2);
        // NaN < alpha is false, so the invariant also covers the
        // degenerate marker result
        assert_eq!(
            comparison.test.reject_null,
            comparison.test.p_value < 0.05,
            "inconsistent verdict for {data1:?} vs {data2:?}"
        );
    }
}

#[test]
fn effect_sign_matches_mean_difference() {
    let lower = [1.0, 2.0, 3.0, 4.0];
    let higher = [5.0, 6.0, 7.0, 8.0];

    let comparison = run(&lower, &higher);
    assert!(comparison.effect.magnitude < 0.0);

    let comparison = run(&higher, &lower);
    assert!(comparison.effect.magnitude > 0.0);
}

#[test]
fn nan_values_are_dropped_and_pipeline_proceeds() {
    let data1 = [1.0, 2.0, 3.0, 4.0, 5.0];
    let data2 = [1.0, 2.0, 3.0, 4.0, 5.0, f64::NAN];

    let comparison = run(&data1, &data2);

    assert_eq!(comparison.group2.n, 5);
    assert_abs_diff_eq!(comparison.test.p_value, 1.0, epsilon = 1e-12);
}

#[test]
fn single_valid_value_fails_before_any_statistic() {
    let err = analyze(&[5.0], &[1.0, 2.0, 3.0], &ComparisonOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        Error::InsufficientData {
            expected: 2,
            actual: 1
        }
    ));
}

#[test]
fn heuristic_fallback_triggers_without_raising() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .try_init();

    // Zero variance in both groups makes the F-test unavailable
    let comparison = run(&[1.0, 1.0, 1.0], &[2.0, 2.0, 2.0]);

    assert_eq!(comparison.assessment.method, EqualityMethod::Heuristic);
    assert!(comparison.assessment.equality_p_value.is_none());
    assert!(comparison.test.is_degenerate());
    assert!(!comparison.test.reject_null);
    // The report must still render all of its sections
    assert_eq!(comparison.report.sections().len(), 7);
    assert!(!comparison.report.to_string().is_empty());
}

#[test]
fn heuristic_threshold_classifications() {
    let heuristic = RatioHeuristic::default();
    assert!(heuristic.variances_unequal(1.0, 10.0));
    assert!(!heuristic.variances_unequal(1.0, 1.5));
}

#[test]
fn welch_is_selected_for_clearly_unequal_variances() {
    let tight: Vec<f64> = (0..20).map(|i| i as f64 * 0.01).collect();
    let wide: Vec<f64> = (0..20).map(|i| i as f64 * 10.0).collect();

    let comparison = run(&tight, &wide);

    assert_eq!(comparison.assessment.method, EqualityMethod::FTest);
    assert!(!comparison.assessment.variances_equal);
    assert_eq!(comparison.test.variance_mode, VarianceMode::Unequal);
}

#[test]
fn pooled_is_selected_for_identical_variances() {
    let data1: Vec<f64> = (0..10).map(|i| i as f64).collect();
    let data2: Vec<f64> = (0..10).map(|i| i as f64 + 100.0).collect();

    let comparison = run(&data1, &data2);

    assert!(comparison.assessment.variances_equal);
    assert_eq!(comparison.test.variance_mode, VarianceMode::Equal);
    // Pooled df is exact: n1 + n2 - 2
    assert_abs_diff_eq!(comparison.test.degrees_of_freedom, 18.0, epsilon = 1e-12);
}

#[test]
fn hedges_g_shrinks_cohens_d_for_small_samples() {
    use adaptive_compare::{CohenD, HedgesG};

    let comparison = run(&[1.0, 2.0, 3.0, 4.0, 5.0], &[3.0, 4.0, 5.0, 6.0, 7.0]);
    let d = CohenD::new().compute(&comparison.group1, &comparison.group2);
    let g = HedgesG::new().compute(&comparison.group1, &comparison.group2);

    assert!(g.abs_magnitude() < d.abs_magnitude());
    assert_eq!(g.magnitude.signum(), d.magnitude.signum());
}

#[test]
fn report_sections_are_ordered_and_deterministic() {
    let data1 = [4.1, 5.2, 6.3, 5.8, 4.9, 5.5];
    let data2 = [6.8, 7.1, 6.2, 7.9, 7.4, 6.6];

    let first = run(&data1, &data2);
    let second = run(&data1, &data2);
    assert_eq!(first.report.to_string(), second.report.to_string());

    let sections = first.report.sections();
    assert_eq!(sections.len(), 7);
    assert!(sections[0].contains("Group 1"));
    assert!(sections[1].contains("F test"));
    assert!(sections[2].contains("t test was selected"));
    assert!(sections[3].contains("p-value"));
    assert!(sections[4].contains("null hypothesis"));
    assert!(sections[5].contains("confidence interval"));
    assert!(sections[6].contains("Cohen's d"));
}

#[test]
fn generated_normal_samples_reject_cleanly() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rand_distr::{Distribution, Normal};

    let mut rng = StdRng::seed_from_u64(42);
    let baseline = Normal::new(0.0, 1.0).unwrap();
    let shifted = Normal::new(5.0, 1.0).unwrap();

    let data1: Vec<f64> = (0..50).map(|_| baseline.sample(&mut rng)).collect();
    let data2: Vec<f64> = (0..50).map(|_| shifted.sample(&mut rng)).collect();

    let comparison = run(&data1, &data2);

    assert!(comparison.test.reject_null);
    assert_eq!(comparison.effect.class, MagnitudeClass::Large);
    assert!(!comparison.test.confidence_interval.straddles_zero());
}

proptest! {
    // Scaling both samples by the same positive constant must leave the
    // p-value, verdict and magnitude class unchanged, while the interval
    // scales proportionally.
    #[test]
    fn scaling_preserves_decision_and_classification(scale in 0.1f64..10.0) {
        let data1 = [4.1, 5.2, 6.3, 5.8, 4.9, 5.5];
        let data2 = [6.8, 7.1, 6.2, 7.9, 7.4, 6.6];

        let base = run(&data1, &data2);

        let scaled1: Vec<f64> = data1.iter().map(|v| v * scale).collect();
        let scaled2: Vec<f64> = data2.iter().map(|v| v * scale).collect();
        let scaled = run(&scaled1, &scaled2);

        prop_assert!((base.test.p_value - scaled.test.p_value).abs() < 1e-8);
        prop_assert_eq!(base.test.reject_null, scaled.test.reject_null);
        prop_assert_eq!(base.effect.class, scaled.effect.class);

        let tolerance = 1e-6 * scale.max(1.0);
        prop_assert!(
            (scaled.test.confidence_interval.lower
                - base.test.confidence_interval.lower * scale)
                .abs()
                < tolerance
        );
        prop_assert!(
            (scaled.test.confidence_interval.upper
                - base.test.confidence_interval.upper * scale)
                .abs()
                < tolerance
        );
    }
}
