//! Variance-equality assessment
//!
//! Decides whether two samples' variances are compatible, which drives
//! the choice between the pooled-variance and Welch t-test downstream.
//! The primary path is a two-sided F-test of the variance ratio; when
//! that test cannot run, the assessor silently falls back to a
//! variance-ratio heuristic, so assessment itself never fails.

mod heuristic;
mod types;

pub use f_test::FTest;
pub use heuristic::{RatioHeuristic, DEFAULT_RATIO_THRESHOLD};
pub use types::{EqualityMethod, FTestOutcome, VarianceAssessment};

use compare_core::{DescriptiveStats, SignificanceLevel};

/// Assessor combining the F-test with the ratio fallback
#[derive(Debug, Clone, Copy)]
pub struct VarianceAssessor {
    level: SignificanceLevel,
    heuristic: RatioHeuristic,
}

impl VarianceAssessor {
    /// Create an assessor at the given significance level
    pub fn new(level: SignificanceLevel) -> Self {
        Self {
            level,
            heuristic: RatioHeuristic::default(),
        }
    }

    /// Override the fallback ratio threshold
    pub fn with_ratio_threshold(mut self, threshold: f64) -> Self {
        self.heuristic = RatioHeuristic::new(threshold);
        self
    }

    /// Decide whether the two groups' variances are compatible
    ///
    /// The primary test is probed exactly once; an unavailable test is
    /// routed to the heuristic and never surfaced to the caller.
    pub fn assess(
        &self,
        group1: &DescriptiveStats,
        group2: &DescriptiveStats,
    ) -> VarianceAssessment {
        let primary = FTest::new(self.level).run(group1, group2).ok();
        match primary {
            Some(outcome) => VarianceAssessment {
                equality_p_value: Some(outcome.p_value),
                variances_equal: outcome.p_value >= self.level.alpha(),
                method: EqualityMethod::FTest,
                f_test: Some(outcome),
            },
            None => {
                tracing::debug!(
                    threshold = self.heuristic.threshold(),
                    "equality test unavailable, falling back to variance-ratio heuristic"
                );
                let unequal = self
                    .heuristic
                    .variances_unequal(group1.variance, group2.variance);
                VarianceAssessment {
                    equality_p_value: None,
                    variances_equal: !unequal,
                    method: EqualityMethod::Heuristic,
                    f_test: None,
                }
            }
        }
    }
}
