//! Hedges' g effect size
//!
//! Hedges' g is a bias-corrected version of Cohen's d:
//!
//! g = d × J, with J ≈ 1 − 3/(4(n1 + n2) − 9)
//!
//! For large samples g ≈ d; for small samples g shrinks toward zero.

use crate::{CohenD, EffectSize};
use compare_core::DescriptiveStats;

/// Hedges' g estimator
#[derive(Debug, Clone, Copy, Default)]
pub struct HedgesG {
    cohen_d: CohenD,
}

impl HedgesG {
    /// Create a new Hedges' g estimator
    pub fn new() -> Self {
        Self {
            cohen_d: CohenD::new(),
        }
    }

    /// Calculate the bias correction factor J
    fn bias_correction_factor(n1: usize, n2: usize) -> f64 {
        let total = n1 + n2;
        if total <= 9 {
            // For very small samples, correct on the degrees of freedom
            let df = total.saturating_sub(2);
            if df == 0 {
                return 1.0;
            }
            1.0 - 3.0 / (4.0 * df as f64 - 1.0)
        } else {
            // Hedges' approximation for larger samples
            1.0 - 3.0 / (4.0 * total as f64 - 9.0)
        }
    }

    /// Compute the bias-corrected effect size
    pub fn compute(&self, group1: &DescriptiveStats, group2: &DescriptiveStats) -> EffectSize {
        let effect = self.cohen_d.compute(group1, group2);
        let j = Self::bias_correction_factor(group1.n, group2.n);
        EffectSize::new(effect.magnitude * j, effect.sample_sizes)
    }
}
