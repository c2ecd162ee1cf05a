//! Tunables for searches and sweeps.

use serde::{Deserialize, Serialize};

/// Configuration for [`find_max_order_matrix`](crate::find_max_order_matrix).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Probability that a sampled cell is set.
    pub density: f64,
    /// Draw budget for each non-singular candidate.
    pub max_sample_attempts: usize,
    /// Number of candidates to test before giving up.
    pub max_candidates: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            density: 0.5,
            max_sample_attempts: 10_000,
            max_candidates: 100_000,
        }
    }
}

/// Table geometry for [`discrete_log`](crate::discrete_log).
///
/// The search covers exponents `1..=table_size * batches` when
/// `batches <= table_size`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscreteLogConfig {
    /// Giant-step stride; the table stores powers of `A^table_size`.
    pub table_size: u64,
    /// Number of giant steps stored, and of baby steps probed.
    pub batches: usize,
}

impl Default for DiscreteLogConfig {
    fn default() -> Self {
        Self {
            table_size: 1024,
            batches: 1024,
        }
    }
}

/// Configuration for [`order_statistics_sweep`](crate::order_statistics_sweep).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Smallest matrix dimension sampled.
    pub min_size: usize,
    /// Largest matrix dimension sampled (inclusive).
    pub max_size: usize,
    /// Samples per dimension.
    pub trials: usize,
    /// Probability that a sampled cell is set.
    pub density: f64,
    /// Draw budget for each non-singular sample.
    pub max_sample_attempts: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            min_size: 2,
            max_size: 12,
            trials: 50,
            density: 0.5,
            max_sample_attempts: 10_000,
        }
    }
}
