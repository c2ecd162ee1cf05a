//! Linear algebra over GF(2) for permutation-generator experiments.
//!
//! Provides a bit-packed matrix type of arbitrary shape with XOR addition,
//! Boolean products, square-and-multiply powers, Gauss–Jordan inversion and
//! seeded random sampling. Every sampling routine takes the RNG explicitly so
//! experiments replay exactly from a seed.
//!
//! Arithmetic is variable-time and is not intended to handle secrets.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod canonical;
mod error;
mod matrix;
mod sample;

pub use crate::canonical::CanonicalKey;
pub use crate::error::{MatrixError, Result};
pub use crate::matrix::Gf2Matrix;
