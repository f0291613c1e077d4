//! Shared numeric types for the comparison pipeline

use crate::{Error, Result};
use std::fmt;

/// Significance level for hypothesis tests, validated to lie in (0, 1)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignificanceLevel(f64);

impl SignificanceLevel {
    /// Create a new significance level
    pub fn new(alpha: f64) -> Result<Self> {
        if !(alpha > 0.0 && alpha < 1.0) {
            return Err(Error::invalid_alpha(alpha));
        }
        Ok(Self(alpha))
    }

    /// The alpha value itself
    pub fn alpha(&self) -> f64 {
        self.0
    }

    /// The matching confidence level (1 − alpha)
    pub fn confidence(&self) -> f64 {
        1.0 - self.0
    }

    /// Tail probability for a two-sided test (alpha / 2)
    pub fn tail_probability(&self) -> f64 {
        self.0 / 2.0
    }

    /// The conventional 5% level
    pub const FIVE_PERCENT: Self = Self(0.05);
    /// The stricter 1% level
    pub const ONE_PERCENT: Self = Self(0.01);
}

impl Default for SignificanceLevel {
    fn default() -> Self {
        Self::FIVE_PERCENT
    }
}

impl fmt::Display for SignificanceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

/// A confidence interval with lower and upper bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceInterval {
    /// Lower bound of the interval
    pub lower: f64,
    /// Upper bound of the interval
    pub upper: f64,
    /// The point estimate (center of interval)
    pub estimate: f64,
    /// Confidence level (e.g., 0.95 for 95% CI)
    pub confidence_level: f64,
}

impl ConfidenceInterval {
    /// Create a new confidence interval
    pub fn new(lower: f64, upper: f64, estimate: f64, confidence_level: f64) -> Self {
        Self {
            lower,
            upper,
            estimate,
            confidence_level,
        }
    }

    /// Width of the confidence interval
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Margin of error (half-width)
    pub fn margin_of_error(&self) -> f64 {
        self.width() / 2.0
    }

    /// Check if a value is contained in the interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Whether the interval includes zero, i.e. is consistent with no
    /// difference between the groups
    pub fn straddles_zero(&self) -> bool {
        self.contains(0.0)
    }
}

impl fmt::Display for ConfidenceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1}% CI: [{:.4}, {:.4}]",
            self.confidence_level * 100.0,
            self.lower,
            self.upper
        )
    }
}
