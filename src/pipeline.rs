//! The decision pipeline
//!
//! Stage order: sanitize, descriptive statistics, variance-equality
//! assessment, test selection and execution, effect size, report.
//! Each stage consumes only the records of the stages before it; raw
//! input is not read again after sanitization. The pipeline is a pure
//! function of its two inputs and the options, so concurrent
//! invocations need no synchronization.

use compare_core::{DescriptiveStats, Result, Sample, SignificanceLevel};
use compare_effect::{CohenD, EffectSize};
use compare_report::{compose, Report};
use compare_ttest::{TestResult, TwoSampleTTest};
use compare_variance::{VarianceAssessment, VarianceAssessor, DEFAULT_RATIO_THRESHOLD};

/// Tunable knobs of the pipeline
#[derive(Debug, Clone, Copy)]
pub struct ComparisonOptions {
    /// Significance level for both the equality assessment and the t-test
    pub level: SignificanceLevel,
    /// Variance-ratio threshold for the heuristic fallback
    pub ratio_threshold: f64,
}

impl Default for ComparisonOptions {
    fn default() -> Self {
        Self {
            level: SignificanceLevel::default(),
            ratio_threshold: DEFAULT_RATIO_THRESHOLD,
        }
    }
}

/// Aggregate output of one comparison
///
/// Every record is produced by exactly one pipeline stage; the report
/// is a derived view over the others.
#[derive(Debug, Clone)]
pub struct Comparison {
    /// Summary of the first cleaned sample
    pub group1: DescriptiveStats,
    /// Summary of the second cleaned sample
    pub group2: DescriptiveStats,
    /// How the variance-equality decision was reached
    pub assessment: VarianceAssessment,
    /// The hypothesis test outcome
    pub test: TestResult,
    /// Standardized effect size (Cohen's d, pooled spread)
    pub effect: EffectSize,
    /// The composed narrative
    pub report: Report,
}

/// Run the full pipeline without side effects
pub fn analyze(data1: &[f64], data2: &[f64], options: &ComparisonOptions) -> Result<Comparison> {
    let sample1 = Sample::clean(data1)?;
    let sample2 = Sample::clean(data2)?;
    tracing::debug!(n1 = sample1.len(), n2 = sample2.len(), "samples sanitized");

    let group1 = DescriptiveStats::from_sample(&sample1);
    let group2 = DescriptiveStats::from_sample(&sample2);

    let assessment = VarianceAssessor::new(options.level)
        .with_ratio_threshold(options.ratio_threshold)
        .assess(&group1, &group2);

    let test = TwoSampleTTest::for_assessment(options.level, &assessment).run(&group1, &group2);
    tracing::debug!(
        mode = %test.variance_mode,
        p = test.p_value,
        "hypothesis test executed"
    );

    let effect = CohenD::new().compute(&group1, &group2);
    let report = compose(&group1, &group2, &assessment, &test, &effect, options.level);

    Ok(Comparison {
        group1,
        group2,
        assessment,
        test,
        effect,
        report,
    })
}

/// Compare two samples and print the composed report to standard output
///
/// `alpha` defaults to 0.05. The printed report is a view over the
/// returned records; callers that only want the records should use
/// [`analyze`].
pub fn compare(data1: &[f64], data2: &[f64], alpha: Option<f64>) -> Result<Comparison> {
    let level = match alpha {
        Some(alpha) => SignificanceLevel::new(alpha)?,
        None => SignificanceLevel::default(),
    };
    let options = ComparisonOptions {
        level,
        ..ComparisonOptions::default()
    };
    let comparison = analyze(data1, data2, &options)?;
    println!("{}", comparison.report);
    Ok(comparison)
}
