//! Two-sample t-test selection and execution
//!
//! Computes the t statistic, degrees of freedom, two-tailed p-value and
//! confidence interval for the difference of two group means. The
//! variance mode is either selected from a
//! [`VarianceAssessment`](compare_variance::VarianceAssessment) (the
//! adaptive path) or fixed directly via [`TwoSampleTTest::pooled`] /
//! [`TwoSampleTTest::welch`].

mod executor;
mod types;

pub use executor::TwoSampleTTest;
pub use types::{TestResult, VarianceMode};
