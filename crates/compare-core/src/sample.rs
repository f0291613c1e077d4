//! Sample sanitization
//!
//! Raw measurement vectors may carry missing values recorded as NaN. A
//! `Sample` can only be constructed by cleaning a raw slice, so every
//! statistic downstream sees at least two valid observations.

use crate::{Error, Result};

/// A cleaned, ordered collection of observations for one group
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    values: Vec<f64>,
}

impl Sample {
    /// Minimum number of valid observations per group
    pub const MIN_LEN: usize = 2;

    /// Clean a raw vector: drop NaN entries, keep the original order
    ///
    /// Fails when fewer than two valid values survive, since sample
    /// variance and standard error are undefined below that.
    pub fn clean(raw: &[f64]) -> Result<Self> {
        let values: Vec<f64> = raw.iter().copied().filter(|v| !v.is_nan()).collect();
        if values.len() < Self::MIN_LEN {
            return Err(Error::too_few_observations(values.len()));
        }
        Ok(Self { values })
    }

    /// Number of valid observations
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a constructed sample; present for completeness
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The cleaned observations
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}
