//! Per-group summary statistics

use crate::Sample;
use std::fmt;

/// Summary record for one cleaned sample
///
/// Variance is the unbiased sample variance (n − 1 denominator) and the
/// standard error is `std_dev / sqrt(n)`. Derived solely from one
/// [`Sample`] and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescriptiveStats {
    /// Number of observations
    pub n: usize,
    /// Sample mean
    pub mean: f64,
    /// Sample standard deviation
    pub std_dev: f64,
    /// Unbiased sample variance
    pub variance: f64,
    /// Standard error of the mean
    pub std_error: f64,
}

impl DescriptiveStats {
    /// Compute the summary for one sample
    ///
    /// Pure and infallible: the `Sample` invariant guarantees at least
    /// two finite observations.
    pub fn from_sample(sample: &Sample) -> Self {
        let n = sample.len();
        let nf = n as f64;
        let mean = sample.values().iter().sum::<f64>() / nf;
        let variance = sample
            .values()
            .iter()
            .map(|&x| (x - mean).powi(2))
            .sum::<f64>()
            / (nf - 1.0);
        let std_dev = variance.sqrt();
        Self {
            n,
            mean,
            std_dev,
            variance,
            std_error: std_dev / nf.sqrt(),
        }
    }
}

impl fmt::Display for DescriptiveStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n = {}, mean = {:.4}, sd = {:.4}, se = {:.4}",
            self.n, self.mean, self.std_dev, self.std_error
        )
    }
}
