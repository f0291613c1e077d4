//! Cohen's d effect size
//!
//! Cohen's d expresses the difference between two group means in terms
//! of the pooled standard deviation:
//!
//! d = (mean1 − mean2) / s_pooled
//!
//! The pooled spread is always used, whichever variance mode the
//! hypothesis test selected: effect size describes practical magnitude,
//! independent of the significance formula.

use crate::EffectSize;
use compare_core::DescriptiveStats;

/// Cohen's d estimator over two summary records
#[derive(Debug, Clone, Copy, Default)]
pub struct CohenD;

impl CohenD {
    /// Create a new Cohen's d estimator
    pub fn new() -> Self {
        Self
    }

    /// Pooled standard deviation across both groups
    pub fn pooled_std_dev(group1: &DescriptiveStats, group2: &DescriptiveStats) -> f64 {
        let (n1, n2) = (group1.n as f64, group2.n as f64);
        (((n1 - 1.0) * group1.variance + (n2 - 1.0) * group2.variance) / (n1 + n2 - 2.0)).sqrt()
    }

    /// Compute the effect size
    ///
    /// Zero pooled spread leaves d undefined; the record carries NaN so
    /// downstream rendering can state that explicitly.
    pub fn compute(&self, group1: &DescriptiveStats, group2: &DescriptiveStats) -> EffectSize {
        let pooled = Self::pooled_std_dev(group1, group2);
        let d = if pooled > 0.0 {
            (group1.mean - group2.mean) / pooled
        } else {
            f64::NAN
        };
        EffectSize::new(d, (group1.n, group2.n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MagnitudeClass;
    use compare_core::Sample;
    use approx::assert_abs_diff_eq;

    fn descriptive(data: &[f64]) -> DescriptiveStats {
        DescriptiveStats::from_sample(&Sample::clean(data).unwrap())
    }

    #[test]
    fn test_known_cohens_d() {
        let group1 = descriptive(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let group2 = descriptive(&[3.0, 4.0, 5.0, 6.0, 7.0]);

        let effect = CohenD::new().compute(&group1, &group2);

        // (3 - 5) / sqrt(2.5) = -1.265
        assert_abs_diff_eq!(effect.magnitude, -2.0 / 2.5f64.sqrt(), epsilon = 1e-10);
        assert_eq!(effect.class, MagnitudeClass::Large);
        assert_eq!(effect.sample_sizes, (5, 5));
    }

    #[test]
    fn test_sign_follows_mean_difference() {
        let lower = descriptive(&[1.0, 2.0, 3.0]);
        let higher = descriptive(&[4.0, 5.0, 6.0]);

        assert!(CohenD::new().compute(&lower, &higher).magnitude < 0.0);
        assert!(CohenD::new().compute(&higher, &lower).magnitude > 0.0);
    }

    #[test]
    fn test_zero_difference() {
        let group = descriptive(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let effect = CohenD::new().compute(&group, &group);

        assert_abs_diff_eq!(effect.magnitude, 0.0, epsilon = 1e-12);
        assert_eq!(effect.class, MagnitudeClass::VerySmall);
    }

    #[test]
    fn test_zero_pooled_spread_is_undefined() {
        let group1 = descriptive(&[3.0, 3.0, 3.0]);
        let group2 = descriptive(&[5.0, 5.0, 5.0]);

        let effect = CohenD::new().compute(&group1, &group2);
        assert!(effect.is_undefined());
    }

    #[test]
    fn test_scale_invariance() {
        let group1 = descriptive(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let group2 = descriptive(&[3.0, 4.0, 5.0, 6.0, 7.0]);
        let scaled1 = descriptive(&[10.0, 20.0, 30.0, 40.0, 50.0]);
        let scaled2 = descriptive(&[30.0, 40.0, 50.0, 60.0, 70.0]);

        let base = CohenD::new().compute(&group1, &group2);
        let scaled = CohenD::new().compute(&scaled1, &scaled2);

        assert_abs_diff_eq!(base.magnitude, scaled.magnitude, epsilon = 1e-10);
        assert_eq!(base.class, scaled.class);
    }
}
