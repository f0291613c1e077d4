//! Effect size measurement for two-sample comparison
//!
//! Quantifies the practical magnitude of the difference between two
//! group means, independently of statistical significance. Cohen's d is
//! the primary measure; Hedges' g applies a small-sample bias
//! correction to the same standardized difference.

mod cohen_d;
mod hedges_g;
mod types;

pub use cohen_d::CohenD;
pub use hedges_g::HedgesG;
pub use types::{EffectSize, MagnitudeClass};

// Convenience constructors
pub fn cohen_d() -> CohenD {
    CohenD::new()
}

pub fn hedges_g() -> HedgesG {
    HedgesG::new()
}
