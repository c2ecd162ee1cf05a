//! Random search for maximal-order (primitive) matrices.

use gf2_core::{Gf2Matrix, MatrixError, Result};
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::SearchConfig;
use crate::order::order_by_repeated_multiply;

/// Largest possible order of an invertible `n × n` matrix, `2^n - 1`.
///
/// Returns `None` for `n == 0` and when the value does not fit in `u64`.
pub fn max_order(n: usize) -> Option<u64> {
    if n == 0 || n >= 64 {
        None
    } else {
        Some((1u64 << n) - 1)
    }
}

/// A matrix found by [`find_max_order_matrix`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaxOrderMatch {
    /// The generator.
    pub matrix: Gf2Matrix,
    /// Its order, always `2^n - 1`.
    pub order: u64,
    /// Candidates tested, including the accepted one.
    pub candidates: usize,
}

/// Draws random non-singular `n × n` matrices until one has order `2^n - 1`.
///
/// Candidates come from [`Gf2Matrix::random_non_singular`], so none has a
/// fixed non-zero vector; for `n == 1` no such matrix exists and sampling
/// reports [`MatrixError::SearchExhausted`].
pub fn find_max_order_matrix<R: RngCore + CryptoRng>(
    n: usize,
    config: &SearchConfig,
    rng: &mut R,
) -> Result<MaxOrderMatch> {
    let target = max_order(n).ok_or(MatrixError::UnsupportedSize { size: n })?;
    for candidates in 1..=config.max_candidates {
        let matrix = Gf2Matrix::random_non_singular(
            n,
            config.density,
            config.max_sample_attempts,
            rng,
        )?;
        let order = order_by_repeated_multiply(&matrix)?;
        if order == Some(target) {
            info!(n, order = target, candidates, "found maximal-order matrix");
            return Ok(MaxOrderMatch {
                matrix,
                order: target,
                candidates,
            });
        }
        debug!(n, candidate = candidates, order = ?order, "order below maximum");
    }
    Err(MatrixError::SearchExhausted {
        attempts: config.max_candidates,
    })
}
