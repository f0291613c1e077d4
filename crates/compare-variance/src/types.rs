//! Types for variance-equality assessment

use compare_core::ConfidenceInterval;
use std::fmt;

/// How the equality decision was reached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EqualityMethod {
    /// Two-sided F-test of the variance ratio
    FTest,
    /// Variance-ratio threshold heuristic
    Heuristic,
}

impl fmt::Display for EqualityMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::FTest => "test",
            Self::Heuristic => "heuristic",
        };
        write!(f, "{}", s)
    }
}

/// Auxiliary output of the F-test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FTestOutcome {
    /// F statistic, var1 / var2
    pub statistic: f64,
    /// Two-sided p-value
    pub p_value: f64,
    /// Equal-tailed confidence interval for the population variance ratio
    pub ratio_ci: ConfidenceInterval,
}

/// Decision record on whether the two groups' variances are compatible
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VarianceAssessment {
    /// P-value of the equality test; `None` when the heuristic decided
    pub equality_p_value: Option<f64>,
    /// Whether the variances are treated as equal downstream
    pub variances_equal: bool,
    /// Which path produced the decision
    pub method: EqualityMethod,
    /// F-test details when the primary path ran
    pub f_test: Option<FTestOutcome>,
}
