//! Two-sample t-test execution
//!
//! Selection between the pooled and Welch formulas is driven by the
//! variance assessment; both variants are also exposed directly for
//! callers that already know which assumption they want.

use crate::{TestResult, VarianceMode};
use compare_core::{ConfidenceInterval, DescriptiveStats, SignificanceLevel};
use compare_variance::VarianceAssessment;
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Two-sample t-test under a fixed variance assumption
#[derive(Debug, Clone, Copy)]
pub struct TwoSampleTTest {
    level: SignificanceLevel,
    mode: VarianceMode,
}

impl TwoSampleTTest {
    /// Pooled-variance test (assumes equal population variances)
    pub fn pooled(level: SignificanceLevel) -> Self {
        Self {
            level,
            mode: VarianceMode::Equal,
        }
    }

    /// Welch's test (no equal-variance assumption)
    pub fn welch(level: SignificanceLevel) -> Self {
        Self {
            level,
            mode: VarianceMode::Unequal,
        }
    }

    /// Select the variant matching a variance assessment
    pub fn for_assessment(level: SignificanceLevel, assessment: &VarianceAssessment) -> Self {
        if assessment.variances_equal {
            Self::pooled(level)
        } else {
            Self::welch(level)
        }
    }

    /// The variance assumption this test runs under
    pub fn mode(&self) -> VarianceMode {
        self.mode
    }

    /// Run the test against two summary records
    ///
    /// Never fails: numerically degenerate inputs (zero standard error,
    /// invalid degrees of freedom) produce the NaN marker result so a
    /// report can still be rendered.
    pub fn run(&self, group1: &DescriptiveStats, group2: &DescriptiveStats) -> TestResult {
        let mean_diff = group1.mean - group2.mean;
        let (std_error, df) = match self.mode {
            VarianceMode::Equal => pooled_error(group1, group2),
            VarianceMode::Unequal => welch_error(group1, group2),
        };

        if !(std_error > 0.0 && std_error.is_finite() && df > 0.0 && df.is_finite()) {
            return self.degenerate(mean_diff);
        }
        let dist = match StudentsT::new(0.0, 1.0, df) {
            Ok(dist) => dist,
            Err(_) => return self.degenerate(mean_diff),
        };

        let t = mean_diff / std_error;
        let p_value = (2.0 * (1.0 - dist.cdf(t.abs()))).clamp(0.0, 1.0);
        let critical = dist.inverse_cdf(1.0 - self.level.tail_probability());
        let margin = critical * std_error;
        let confidence_interval = ConfidenceInterval::new(
            mean_diff - margin,
            mean_diff + margin,
            mean_diff,
            self.level.confidence(),
        );

        TestResult {
            reject_null: p_value < self.level.alpha(),
            p_value,
            confidence_interval,
            t_statistic: t,
            degrees_of_freedom: df,
            variance_mode: self.mode,
        }
    }

    // No variation in either group leaves the statistic undefined; the
    // result is marked rather than raised so the report stays renderable.
    fn degenerate(&self, mean_diff: f64) -> TestResult {
        TestResult {
            reject_null: false,
            p_value: f64::NAN,
            confidence_interval: ConfidenceInterval::new(
                mean_diff,
                mean_diff,
                mean_diff,
                self.level.confidence(),
            ),
            t_statistic: f64::NAN,
            degrees_of_freedom: f64::NAN,
            variance_mode: self.mode,
        }
    }
}

// Pooled standard error: SE = s_p * sqrt(1/n1 + 1/n2), df = n1 + n2 - 2
fn pooled_error(group1: &DescriptiveStats, group2: &DescriptiveStats) -> (f64, f64) {
    let (n1, n2) = (group1.n as f64, group2.n as f64);
    let df = n1 + n2 - 2.0;
    let pooled_var = ((n1 - 1.0) * group1.variance + (n2 - 1.0) * group2.variance) / df;
    ((pooled_var * (1.0 / n1 + 1.0 / n2)).sqrt(), df)
}

// Welch standard error: SE = sqrt(var1/n1 + var2/n2), with the
// Welch-Satterthwaite degrees-of-freedom approximation.
fn welch_error(group1: &DescriptiveStats, group2: &DescriptiveStats) -> (f64, f64) {
    let (n1, n2) = (group1.n as f64, group2.n as f64);
    let (a, b) = (group1.variance / n1, group2.variance / n2);
    let std_error = (a + b).sqrt();
    let df = (a + b).powi(2) / (a.powi(2) / (n1 - 1.0) + b.powi(2) / (n2 - 1.0));
    (std_error, df)
}
