//! Random matrix sampling from a caller-supplied RNG.

use rand::distributions::Bernoulli;
use rand::{CryptoRng, Rng, RngCore};
use tracing::trace;

use crate::error::{MatrixError, Result};
use crate::matrix::Gf2Matrix;

impl Gf2Matrix {
    /// Generates a `rows × cols` matrix whose cells are independently set with
    /// probability `density`.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn random<R: RngCore + CryptoRng>(
        rows: usize,
        cols: usize,
        density: f64,
        rng: &mut R,
    ) -> Result<Self> {
        let cell = Bernoulli::new(density).map_err(|_| MatrixError::InvalidDensity(density))?;
        let mut mat = Self::zero(rows, cols);
        for row in 0..rows {
            for col in 0..cols {
                if rng.sample(cell) {
                    mat.set(row, col, true);
                }
            }
        }
        Ok(mat)
    }

    /// Rejection-samples an `n × n` matrix `M` such that both `M` and `M + I`
    /// are non-singular.
    ///
    /// The second condition rules out eigenvalue 1, i.e. any non-zero vector
    /// fixed by `M`. Gives up with [`MatrixError::SearchExhausted`] after
    /// `max_attempts` draws.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    pub fn random_non_singular<R: RngCore + CryptoRng>(
        n: usize,
        density: f64,
        max_attempts: usize,
        rng: &mut R,
    ) -> Result<Self> {
        let identity = Self::identity(n);
        for attempt in 1..=max_attempts {
            let candidate = Self::random(n, n, density, rng)?;
            if candidate.is_singular() {
                trace!(attempt, "rejected singular draw");
                continue;
            }
            if candidate.add(&identity)?.is_singular() {
                trace!(attempt, "rejected draw with a fixed vector");
                continue;
            }
            trace!(attempt, n, "accepted non-singular draw");
            return Ok(candidate);
        }
        Err(MatrixError::SearchExhausted {
            attempts: max_attempts,
        })
    }
}
