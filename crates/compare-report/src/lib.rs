//! Report composition for two-sample comparison
//!
//! Renders the computed comparison records into an ordered,
//! deterministic narrative. Strictly a view: no statistical quantity is
//! computed here, only text around values the pipeline already
//! produced, so the records stay fully testable without string
//! matching.

use compare_core::{DescriptiveStats, SignificanceLevel};
use compare_effect::EffectSize;
use compare_ttest::{TestResult, VarianceMode};
use compare_variance::{EqualityMethod, VarianceAssessment};
use std::fmt;

/// A composed report: ordered text sections
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    sections: Vec<String>,
}

impl Report {
    /// The sections in presentation order
    pub fn sections(&self) -> &[String] {
        &self.sections
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sections.join("\n"))
    }
}

/// Compose the narrative for one comparison
///
/// Section order: descriptive comparison, variance-equality method and
/// decision, chosen test and its numbers, what the p-value means, the
/// verdict, the confidence interval, and the effect-size magnitude.
pub fn compose(
    group1: &DescriptiveStats,
    group2: &DescriptiveStats,
    assessment: &VarianceAssessment,
    test: &TestResult,
    effect: &EffectSize,
    level: SignificanceLevel,
) -> Report {
    let mut sections = Vec::with_capacity(7);

    sections.push(format!(
        "Group 1: n = {}, mean = {:.4}, sd = {:.4}. Group 2: n = {}, mean = {:.4}, sd = {:.4}. \
         Observed mean difference: {:.4}.",
        group1.n,
        group1.mean,
        group1.std_dev,
        group2.n,
        group2.mean,
        group2.std_dev,
        group1.mean - group2.mean,
    ));

    sections.push(variance_section(assessment));
    sections.push(test_section(test));

    sections.push(format!(
        "The p-value is the probability of seeing a mean difference at least this extreme if \
         both groups shared one population mean; it is compared against the significance \
         cutoff alpha = {}.",
        level,
    ));

    sections.push(verdict_section(test));
    sections.push(interval_section(test));
    sections.push(effect_section(effect));

    Report { sections }
}

fn equality_word(equal: bool) -> &'static str {
    if equal {
        "equal"
    } else {
        "unequal"
    }
}

fn mode_phrase(mode: VarianceMode) -> &'static str {
    match mode {
        VarianceMode::Equal => "pooled-variance",
        VarianceMode::Unequal => "Welch (unequal-variance)",
    }
}

fn variance_section(assessment: &VarianceAssessment) -> String {
    match (assessment.method, assessment.equality_p_value) {
        (EqualityMethod::FTest, Some(p)) => format!(
            "Variance equality was assessed with a two-sided F test (p = {:.4}); the variances \
             were treated as {}.",
            p,
            equality_word(assessment.variances_equal),
        ),
        _ => format!(
            "The F test was unavailable; the variance-ratio heuristic classified the variances \
             as {}.",
            equality_word(assessment.variances_equal),
        ),
    }
}

fn test_section(test: &TestResult) -> String {
    if test.is_degenerate() {
        format!(
            "A {} two-sample t test was selected, but the statistic is not defined: there is \
             no variation in either sample (p = NaN).",
            mode_phrase(test.variance_mode),
        )
    } else {
        format!(
            "A {} two-sample t test was selected: t({:.2}) = {:.4}, p = {:.4}.",
            mode_phrase(test.variance_mode),
            test.degrees_of_freedom,
            test.t_statistic,
            test.p_value,
        )
    }
}

fn verdict_section(test: &TestResult) -> String {
    if test.is_degenerate() {
        "No verdict can be given: the test statistic is undefined for these samples.".to_string()
    } else if test.reject_null {
        "p < alpha: the null hypothesis of equal population means is rejected.".to_string()
    } else {
        "p >= alpha: the null hypothesis of equal population means is not rejected.".to_string()
    }
}

fn interval_section(test: &TestResult) -> String {
    let ci = &test.confidence_interval;
    let zero_phrase = if ci.straddles_zero() {
        "includes zero, consistent with no difference between the groups"
    } else {
        "excludes zero"
    };
    format!(
        "{:.1}% confidence interval for the mean difference: [{:.4}, {:.4}]; the interval {}.",
        ci.confidence_level * 100.0,
        ci.lower,
        ci.upper,
        zero_phrase,
    )
}

fn effect_section(effect: &EffectSize) -> String {
    if effect.is_undefined() {
        "Cohen's d is not defined for these samples (zero pooled spread).".to_string()
    } else {
        format!(
            "Cohen's d = {:.3}: a {} effect.",
            effect.magnitude, effect.class,
        )
    }
}
