//! Bit-packed GF(2) matrices of arbitrary shape.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::canonical::CanonicalKey;
use crate::error::{MatrixError, Result};

const WORD_BITS: usize = 64;

/// Matrix over GF(2), stored row-major with each row packed into `u64` words.
///
/// Column `c` of a row lives in word `c / 64` at bit `c % 64`. Bits past the
/// last column are always zero, so the derived equality and hash compare
/// values. Binary operations return new matrices; only the in-place operators
/// (`set`, `xor_row`, `xor_col`, `expand`) mutate, and they need `&mut self`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "EncodedMatrix", into = "EncodedMatrix")]
pub struct Gf2Matrix {
    cols: usize,
    rows: Vec<Vec<u64>>,
}

impl Gf2Matrix {
    /// Returns the `rows × cols` zero matrix.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn zero(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "matrix dimensions must be non-zero");
        Self {
            cols,
            rows: vec![vec![0u64; words_for(cols)]; rows],
        }
    }

    /// Returns the `n × n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut mat = Self::zero(n, n);
        for (i, row) in mat.rows.iter_mut().enumerate() {
            row[i / WORD_BITS] |= 1u64 << (i % WORD_BITS);
        }
        mat
    }

    /// Builds a matrix from rows of booleans.
    ///
    /// Every row must have the width of the first one.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        if cols == 0 {
            return Err(MatrixError::EmptyMatrix);
        }
        let mut packed = Vec::with_capacity(rows.len());
        for row in rows {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(MatrixError::InvalidRowLength {
                    expected: cols,
                    actual: row.len(),
                });
            }
            packed.push(pack_row(row));
        }
        Ok(Self { cols, rows: packed })
    }

    /// Returns the `n × 1` column vector with a single one at `index`.
    pub fn unit_column(n: usize, index: usize) -> Self {
        assert!(index < n, "basis index out of range");
        let mut vector = Self::zero(n, 1);
        vector.set(index, 0, true);
        vector
    }

    /// Companion matrix of the monic polynomial
    /// `x^n + c[n-1]·x^(n-1) + … + c[1]·x + c[0]`.
    ///
    /// Ones sit on the sub-diagonal and the coefficients fill the last column,
    /// so the multiplicative order of the result equals the order of `x`
    /// modulo the polynomial.
    pub fn companion(coefficients: &[bool]) -> Self {
        let n = coefficients.len();
        let mut mat = Self::zero(n, n);
        for i in 1..n {
            mat.set(i, i - 1, true);
        }
        for (i, &c) in coefficients.iter().enumerate() {
            mat.set(i, n - 1, c);
        }
        mat
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns true for `n × n` matrices.
    pub fn is_square(&self) -> bool {
        self.rows.len() == self.cols
    }

    fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.cols)
    }

    /// Reads the cell at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> bool {
        assert!(col < self.cols, "column index out of range");
        bit(&self.rows[row], col)
    }

    /// Writes the cell at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: bool) {
        assert!(col < self.cols, "column index out of range");
        let mask = 1u64 << (col % WORD_BITS);
        let word = &mut self.rows[row][col / WORD_BITS];
        if value {
            *word |= mask;
        } else {
            *word &= !mask;
        }
    }

    /// Unpacks the matrix into rows of booleans.
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.rows
            .iter()
            .map(|row| (0..self.cols).map(|col| bit(row, col)).collect())
            .collect()
    }

    /// Elementwise XOR (`self + rhs`).
    pub fn add(&self, rhs: &Self) -> Result<Self> {
        if self.shape() != rhs.shape() {
            return Err(self.mismatch("add", rhs));
        }
        let mut result = self.clone();
        for (dst, src) in result.rows.iter_mut().zip(rhs.rows.iter()) {
            xor_words(dst, src);
        }
        Ok(result)
    }

    /// Multiplies two matrices (`self * rhs`).
    pub fn mul(&self, rhs: &Self) -> Result<Self> {
        if self.cols != rhs.rows.len() {
            return Err(self.mismatch("multiply", rhs));
        }
        Ok(self.product(rhs))
    }

    /// Product without the shape check; callers guarantee `self.cols == rhs.rows`.
    fn product(&self, rhs: &Self) -> Self {
        let out_words = words_for(rhs.cols);
        let rows = self
            .rows
            .iter()
            .map(|row| {
                let mut acc = vec![0u64; out_words];
                for (word_idx, word) in row.iter().enumerate() {
                    let mut bits = *word;
                    while bits != 0 {
                        let source_row = word_idx * WORD_BITS + bits.trailing_zeros() as usize;
                        xor_words(&mut acc, &rhs.rows[source_row]);
                        bits &= bits - 1;
                    }
                }
                acc
            })
            .collect();
        Self {
            cols: rhs.cols,
            rows,
        }
    }

    /// Raises a square matrix to `exponent` by square-and-multiply.
    ///
    /// The successive squares `A, A^2, A^4, …` are tabulated up to the highest
    /// set bit of the exponent, then the selected entries are multiplied
    /// together. `pow(0)` is the identity.
    pub fn pow(&self, exponent: u64) -> Result<Self> {
        self.require_square()?;
        let bits = (u64::BITS - exponent.leading_zeros()) as usize;
        let mut squares: Vec<Self> = Vec::with_capacity(bits);
        if bits > 0 {
            squares.push(self.clone());
        }
        while squares.len() < bits {
            let last = &squares[squares.len() - 1];
            let next = last.product(last);
            squares.push(next);
        }

        let mut result = Self::identity(self.cols);
        for (bit, square) in squares.iter().enumerate() {
            if (exponent >> bit) & 1 == 1 {
                result = result.product(square);
            }
        }
        Ok(result)
    }

    /// Returns the transpose.
    pub fn transpose(&self) -> Self {
        let mut result = Self::zero(self.cols, self.rows.len());
        for (row_idx, row) in self.rows.iter().enumerate() {
            for col in set_bits(row) {
                result.set(col, row_idx, true);
            }
        }
        result
    }

    /// Quarter turn: the transpose with its row order reversed.
    pub fn rotate(&self) -> Self {
        let mut result = self.transpose();
        result.rows.reverse();
        result
    }

    /// XORs row `source` into row `dest`.
    pub fn xor_row(&mut self, source: usize, dest: usize) {
        xor_rows(&mut self.rows, source, dest);
    }

    /// XORs column `source` into column `dest`.
    pub fn xor_col(&mut self, source: usize, dest: usize) {
        assert!(
            source < self.cols && dest < self.cols,
            "column index out of range"
        );
        let flip = 1u64 << (dest % WORD_BITS);
        for row in self.rows.iter_mut() {
            if bit(row, source) {
                row[dest / WORD_BITS] ^= flip;
            }
        }
    }

    /// Inverts the matrix with Gauss–Jordan elimination.
    ///
    /// The forward pass brings a pivot into place by XOR-ing the first lower
    /// row that has one into the pivot row, then clears the column below it.
    /// The backward pass clears every column above its pivot. Replaying the
    /// same row operations on the identity yields the inverse.
    pub fn invert(&self) -> Result<Self> {
        self.require_square()?;
        let mut left = self.rows.clone();
        let mut right = Self::identity(self.cols).rows;

        eliminate_forward(&mut left, Some(&mut right))?;
        for pivot in (0..left.len()).rev() {
            for upper in 0..pivot {
                if bit(&left[upper], pivot) {
                    xor_rows(&mut left, pivot, upper);
                    xor_rows(&mut right, pivot, upper);
                }
            }
        }

        Ok(Self {
            cols: self.cols,
            rows: right,
        })
    }

    /// Runs forward elimination only and reports whether a pivot was missing.
    ///
    /// For square matrices this is true exactly when `invert` fails with
    /// [`MatrixError::SingularMatrix`]. Every non-square matrix is reported
    /// singular, including a tall matrix of full column rank, while `invert`
    /// rejects it with [`MatrixError::NotSquare`] instead.
    pub fn is_singular(&self) -> bool {
        if !self.is_square() {
            return true;
        }
        let mut left = self.rows.clone();
        eliminate_forward(&mut left, None).is_err()
    }

    /// Returns true if the matrix has an inverse.
    pub fn is_invertible(&self) -> bool {
        !self.is_singular()
    }

    /// Appends `row`, first widening the matrix with zero columns if `row` is
    /// wider than the current column count.
    pub fn expand(&mut self, row: &[bool]) -> Result<()> {
        if row.len() > self.cols {
            let words = words_for(row.len());
            for existing in self.rows.iter_mut() {
                existing.resize(words, 0);
            }
            self.cols = row.len();
        }
        if row.len() != self.cols {
            return Err(MatrixError::InvalidRowLength {
                expected: self.cols,
                actual: row.len(),
            });
        }
        self.rows.push(pack_row(row));
        Ok(())
    }

    /// Returns the hashable, order-stable key used by collision tables.
    pub fn canonical_key(&self) -> CanonicalKey {
        let words = self.rows.iter().flatten().copied().collect();
        CanonicalKey::new(self.rows.len(), self.cols, words)
    }

    /// Renders the matrix as `0`/`1` lines, optionally preceded by a label line.
    pub fn dump(&self, label: Option<&str>) -> String {
        let mut out = String::with_capacity((self.cols + 1) * (self.rows.len() + 1));
        if let Some(label) = label {
            out.push_str(label);
            out.push('\n');
        }
        out.push_str(&self.to_string());
        out.push('\n');
        out
    }

    /// Each row as lowercase hex of its little-endian packed bytes.
    pub fn hex_rows(&self) -> Vec<String> {
        let row_bytes = self.cols.div_ceil(8);
        self.rows
            .iter()
            .map(|row| {
                let bytes: Vec<u8> = row.iter().flat_map(|word| word.to_le_bytes()).collect();
                hex::encode(&bytes[..row_bytes])
            })
            .collect()
    }

    /// Serializes the matrix with `bincode`.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Deserializes a matrix with `bincode`, re-checking every shape invariant.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }

    fn require_square(&self) -> Result<()> {
        if self.is_square() {
            Ok(())
        } else {
            Err(MatrixError::NotSquare {
                rows: self.rows.len(),
                cols: self.cols,
            })
        }
    }

    fn mismatch(&self, op: &'static str, rhs: &Self) -> MatrixError {
        MatrixError::DimensionMismatch {
            op,
            left: self.shape(),
            right: rhs.shape(),
        }
    }
}

impl fmt::Display for Gf2Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, row) in self.rows.iter().enumerate() {
            if idx > 0 {
                f.write_str("\n")?;
            }
            for col in 0..self.cols {
                f.write_str(if bit(row, col) { "1" } else { "0" })?;
            }
        }
        Ok(())
    }
}

/// Wire form of [`Gf2Matrix`]: shape plus the row words concatenated.
#[derive(Serialize, Deserialize)]
struct EncodedMatrix {
    rows: usize,
    cols: usize,
    words: Vec<u64>,
}

impl From<Gf2Matrix> for EncodedMatrix {
    fn from(mat: Gf2Matrix) -> Self {
        Self {
            rows: mat.rows.len(),
            cols: mat.cols,
            words: mat.rows.into_iter().flatten().collect(),
        }
    }
}

impl TryFrom<EncodedMatrix> for Gf2Matrix {
    type Error = MatrixError;

    fn try_from(encoded: EncodedMatrix) -> Result<Self> {
        if encoded.rows == 0 || encoded.cols == 0 {
            return Err(MatrixError::EmptyMatrix);
        }
        let per_row = words_for(encoded.cols);
        if Some(encoded.words.len()) != encoded.rows.checked_mul(per_row) {
            return Err(MatrixError::Encoding(format!(
                "expected {} words per row for {} rows, got {} words",
                per_row,
                encoded.rows,
                encoded.words.len()
            )));
        }
        let tail_bits = encoded.cols % WORD_BITS;
        let rows: Vec<Vec<u64>> = encoded
            .words
            .chunks(per_row)
            .map(<[u64]>::to_vec)
            .collect();
        if tail_bits != 0 && rows.iter().any(|row| row[per_row - 1] >> tail_bits != 0) {
            return Err(MatrixError::Encoding(
                "bits set past the last column".to_string(),
            ));
        }
        Ok(Self {
            cols: encoded.cols,
            rows,
        })
    }
}

fn words_for(cols: usize) -> usize {
    cols.div_ceil(WORD_BITS)
}

fn pack_row(bits: &[bool]) -> Vec<u64> {
    let mut row = vec![0u64; words_for(bits.len())];
    for (col, &value) in bits.iter().enumerate() {
        if value {
            row[col / WORD_BITS] |= 1u64 << (col % WORD_BITS);
        }
    }
    row
}

#[inline]
fn bit(row: &[u64], col: usize) -> bool {
    (row[col / WORD_BITS] >> (col % WORD_BITS)) & 1 == 1
}

fn set_bits(row: &[u64]) -> impl Iterator<Item = usize> + '_ {
    row.iter().enumerate().flat_map(|(word_idx, &word)| {
        let mut bits = word;
        core::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            let col = word_idx * WORD_BITS + bits.trailing_zeros() as usize;
            bits &= bits - 1;
            Some(col)
        })
    })
}

fn xor_words(dst: &mut [u64], src: &[u64]) {
    for (d, s) in dst.iter_mut().zip(src.iter()) {
        *d ^= *s;
    }
}

fn xor_rows(rows: &mut [Vec<u64>], source: usize, dest: usize) {
    if source == dest {
        rows[dest].iter_mut().for_each(|word| *word = 0);
        return;
    }
    let (src, dst) = if source < dest {
        let (head, tail) = rows.split_at_mut(dest);
        (&head[source], &mut tail[0])
    } else {
        let (head, tail) = rows.split_at_mut(source);
        (&tail[0], &mut head[dest])
    };
    xor_words(dst, src);
}

/// Forward pass of Gauss–Jordan elimination on a square system.
///
/// Mirrors every row operation onto `companion` when one is given.
fn eliminate_forward(
    left: &mut [Vec<u64>],
    mut companion: Option<&mut [Vec<u64>]>,
) -> Result<()> {
    let n = left.len();
    for pivot in 0..n {
        let found = (pivot..n)
            .find(|&row| bit(&left[row], pivot))
            .ok_or(MatrixError::SingularMatrix)?;
        if found != pivot {
            xor_rows(left, found, pivot);
            if let Some(other) = companion.as_deref_mut() {
                xor_rows(other, found, pivot);
            }
        }
        for lower in pivot + 1..n {
            if bit(&left[lower], pivot) {
                xor_rows(left, pivot, lower);
                if let Some(other) = companion.as_deref_mut() {
                    xor_rows(other, pivot, lower);
                }
            }
        }
    }
    Ok(())
}
