//! Adaptive two-sample mean comparison
//!
//! Given two sets of numeric measurements, this crate decides whether
//! their population means differ in a statistically defensible way: it
//! cleans the inputs, checks whether the group variances are
//! compatible, picks the pooled-variance or Welch t-test accordingly,
//! computes the p-value, confidence interval and effect size, and
//! composes a structured plain-language report.
//!
//! The intended audience is instructional and laboratory use: callers
//! get a defensible answer without manually selecting a test variant.
//!
//! # Example
//!
//! ```
//! use adaptive_compare::compare;
//!
//! let placebo = vec![12.1, 11.8, 12.4, 12.0, 11.9];
//! let treated = vec![13.0, 13.4, 12.9, 13.1, 13.3];
//!
//! let comparison = compare(&placebo, &treated, None).unwrap();
//! assert_eq!(
//!     comparison.test.reject_null,
//!     comparison.test.p_value < 0.05
//! );
//! ```

mod pipeline;

pub use pipeline::{analyze, compare, Comparison, ComparisonOptions};

// Re-export the member crates' public surface
pub use compare_core::{
    ConfidenceInterval, DescriptiveStats, Error, Result, Sample, SignificanceLevel,
};
pub use compare_effect::{CohenD, EffectSize, HedgesG, MagnitudeClass};
pub use compare_report::{compose, Report};
pub use compare_ttest::{TestResult, TwoSampleTTest, VarianceMode};
pub use compare_variance::{
    EqualityMethod, FTest, FTestOutcome, RatioHeuristic, VarianceAssessment, VarianceAssessor,
    DEFAULT_RATIO_THRESHOLD,
};
