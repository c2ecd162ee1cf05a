//! Baby-step/giant-step discrete logarithms in the cyclic group of a matrix.

use std::collections::HashMap;

use gf2_core::{CanonicalKey, Gf2Matrix, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::DiscreteLogConfig;

/// Outcome of a [`discrete_log`] search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscreteLog {
    /// Smallest exponent `x` found with `A^x == A^target`, or `None` when no
    /// giant step was hit in the searched range.
    pub exponent: Option<u64>,
    /// Number of baby steps that hit the giant-step table.
    pub candidates: usize,
    /// Giant steps whose key was already in the table.
    pub table_collisions: usize,
}

/// Recovers an exponent `x` with `A^x == A^target_exponent` without knowing
/// `target_exponent` beyond the power it produces.
///
/// Giant steps `K^j` with `K = A^table_size` are tabulated for
/// `j = 1..=batches`; a collision keeps the later exponent. Baby steps probe
/// `A^target · A^i` for `i < batches`, and a hit on `j·table_size` yields the
/// candidate `j·table_size - i`. Tabulation stops at the first `j` whose
/// exponent does not fit in a `u64`. Finding nothing is a normal outcome.
pub fn discrete_log(
    a: &Gf2Matrix,
    target_exponent: u64,
    config: &DiscreteLogConfig,
) -> Result<DiscreteLog> {
    let stride = a.pow(config.table_size)?;
    let mut table: HashMap<CanonicalKey, u64> = HashMap::with_capacity(config.batches);
    let mut table_collisions = 0usize;
    let mut giant = stride.clone();
    for j in 1..=config.batches as u64 {
        let exponent = match j.checked_mul(config.table_size) {
            Some(exponent) => exponent,
            None => {
                debug!(j, "giant-step exponent overflows u64, table truncated");
                break;
            }
        };
        if let Some(previous) = table.insert(giant.canonical_key(), exponent) {
            table_collisions += 1;
            debug!(previous, exponent, "giant-step table collision");
        }
        if j < config.batches as u64 {
            giant = giant.mul(&stride)?;
        }
    }

    let mut probe = a.pow(target_exponent)?;
    let mut exponent: Option<u64> = None;
    let mut candidates = 0usize;
    for i in 0..config.batches as u64 {
        if let Some(&table_exponent) = table.get(&probe.canonical_key()) {
            if let Some(candidate) = table_exponent.checked_sub(i) {
                candidates += 1;
                exponent = Some(exponent.map_or(candidate, |best| best.min(candidate)));
            }
        }
        probe = probe.mul(a)?;
    }

    match exponent {
        Some(found) => info!(found, candidates, table_collisions, "discrete log found"),
        None => info!(
            range = config.table_size.saturating_mul(config.batches as u64),
            "no discrete log in range"
        ),
    }
    Ok(DiscreteLog {
        exponent,
        candidates,
        table_collisions,
    })
}
