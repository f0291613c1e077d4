//! Core types for adaptive two-sample comparison
//!
//! This crate provides the foundation shared by every stage of the
//! comparison pipeline: the unified error type, sample sanitization,
//! per-group descriptive statistics, and the significance-level and
//! confidence-interval types.
//!
//! A [`Sample`] can only exist after cleaning, so every downstream
//! record is derived from validated data. Each record is produced by
//! exactly one pipeline stage and is read-only afterwards.

pub mod descriptive;
pub mod error;
pub mod sample;
pub mod types;

pub use descriptive::DescriptiveStats;
pub use error::{Error, Result};
pub use sample::Sample;
pub use types::{ConfidenceInterval, SignificanceLevel};
