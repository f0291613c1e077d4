//! Result types for the two-sample t-test

use compare_core::ConfidenceInterval;
use std::fmt;

/// Which variance assumption the test ran under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarianceMode {
    /// Pooled-variance test, df = n1 + n2 − 2
    Equal,
    /// Welch's test, Welch–Satterthwaite df
    Unequal,
}

impl fmt::Display for VarianceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Equal => "equal",
            Self::Unequal => "unequal",
        };
        write!(f, "{}", s)
    }
}

/// Outcome of a two-sample mean comparison
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestResult {
    /// Whether the null hypothesis of equal means is rejected at alpha
    pub reject_null: bool,
    /// Two-tailed p-value; NaN marks a degenerate result
    pub p_value: f64,
    /// Confidence interval for (mean1 − mean2)
    pub confidence_interval: ConfidenceInterval,
    /// The t statistic
    pub t_statistic: f64,
    /// Degrees of freedom of the reference distribution
    pub degrees_of_freedom: f64,
    /// Variance assumption the statistic was computed under
    pub variance_mode: VarianceMode,
}

impl TestResult {
    /// Whether the statistic degenerated (no variation in either group)
    pub fn is_degenerate(&self) -> bool {
        self.p_value.is_nan()
    }
}
