//! Lookup keys for order and discrete-log collision tables.

use serde::{Deserialize, Serialize};

/// Order-stable snapshot of a matrix's contents.
///
/// Two keys are equal exactly when the matrices they came from are equal, and
/// the ordering is lexicographic on `(rows, cols, words)`, so keys can back
/// both hashed and ordered tables.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CanonicalKey {
    rows: usize,
    cols: usize,
    words: Box<[u64]>,
}

impl CanonicalKey {
    pub(crate) fn new(rows: usize, cols: usize, words: Box<[u64]>) -> Self {
        Self { rows, cols, words }
    }

    /// Shape of the matrix the key was taken from, as `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Packed row words, row-major.
    pub fn words(&self) -> &[u64] {
        &self.words
    }
}
