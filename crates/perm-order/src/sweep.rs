//! Consistency sweep between the order signals.
//!
//! For each dimension `n` the sweep samples random non-singular matrices and
//! checks the observed relationship
//! `order_by_squaring(A) == n ⇔ order(A) == 2^n - 1`. The relationship is
//! measured, never assumed: at `n = 4` a matrix of order 5 also closes its
//! squaring cycle after four steps.

use gf2_core::{Gf2Matrix, MatrixError, Result};
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::SweepConfig;
use crate::order::{order_by_repeated_multiply, order_by_squaring, orbit_length};
use crate::search::max_order;

/// Statistics for one matrix dimension.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeReport {
    /// Matrix dimension.
    pub size: usize,
    /// Matrices sampled.
    pub trials: usize,
    /// Samples whose order is `2^size - 1`.
    pub max_order_hits: usize,
    /// Samples whose squaring cycle has length `size`.
    pub squaring_hits: usize,
    /// Samples where exactly one of the two hit counts above applied.
    pub violations: usize,
    /// Largest order observed.
    pub largest_order: u64,
    /// Maximal-order samples whose basis-vector orbit is shorter than the order.
    pub orbit_mismatches: usize,
}

impl SizeReport {
    /// True when no sample contradicted the squaring relationship.
    pub fn consistent(&self) -> bool {
        self.violations == 0
    }
}

/// Per-dimension results of [`order_statistics_sweep`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepReport {
    /// One entry per dimension, in increasing order.
    pub sizes: Vec<SizeReport>,
}

impl SweepReport {
    /// True when every dimension was consistent.
    pub fn consistent(&self) -> bool {
        self.sizes.iter().all(SizeReport::consistent)
    }

    /// Report for dimension `n`, if it was swept.
    pub fn size(&self, n: usize) -> Option<&SizeReport> {
        self.sizes.iter().find(|report| report.size == n)
    }
}

/// Samples `trials` matrices per dimension and compares the order signals.
pub fn order_statistics_sweep<R: RngCore + CryptoRng>(
    config: &SweepConfig,
    rng: &mut R,
) -> Result<SweepReport> {
    let mut report = SweepReport::default();
    for n in config.min_size..=config.max_size {
        let target = max_order(n).ok_or(MatrixError::UnsupportedSize { size: n })?;
        let mut stats = SizeReport {
            size: n,
            trials: config.trials,
            ..SizeReport::default()
        };
        for trial in 0..config.trials {
            let a = Gf2Matrix::random_non_singular(
                n,
                config.density,
                config.max_sample_attempts,
                rng,
            )?;
            let order = order_by_repeated_multiply(&a)?;
            let squaring = order_by_squaring(&a)?;
            let is_max = order == Some(target);
            let squaring_hit = squaring == Some(n as u64);

            if is_max {
                stats.max_order_hits += 1;
                if orbit_length(&a)? != order {
                    stats.orbit_mismatches += 1;
                }
            }
            if squaring_hit {
                stats.squaring_hits += 1;
            }
            if is_max != squaring_hit {
                stats.violations += 1;
                debug!(n, trial, order = ?order, squaring = ?squaring, "order signals disagree");
            }
            if let Some(order) = order {
                stats.largest_order = stats.largest_order.max(order);
            }
        }
        info!(
            size = n,
            trials = stats.trials,
            max_order_hits = stats.max_order_hits,
            violations = stats.violations,
            largest_order = stats.largest_order,
            "sweep size complete"
        );
        report.sizes.push(stats);
    }
    Ok(report)
}
