//! Multiplicative order and orbit signals.
//!
//! All walks are bounded by `2^n` steps: every cycle of powers of an `n × n`
//! matrix, and every orbit of a vector, has length at most `2^n - 1`. A walk
//! that reaches the bound without returning yields `None`.

use std::collections::HashMap;

use gf2_core::{CanonicalKey, Gf2Matrix, MatrixError, Result};

/// Smallest `i ≥ 1` with `A^(i+1) == A`, by multiplying `A` in one step at a
/// time.
///
/// For invertible `A` this is the multiplicative order. Cost is linear in the
/// order, so only small dimensions are practical. Returns `None` when `A`
/// never recurs (a singular matrix with a nilpotent part).
pub fn order_by_repeated_multiply(a: &Gf2Matrix) -> Result<Option<u64>> {
    require_square(a)?;
    let bound = cycle_bound(a.rows());
    let mut power = a.mul(a)?;
    let mut steps = 1u64;
    loop {
        if power == *a {
            return Ok(Some(steps));
        }
        if steps >= bound {
            return Ok(None);
        }
        power = power.mul(a)?;
        steps += 1;
    }
}

/// Length of the cycle `A, A^2, A^4, A^8, …` when it returns to `A` within
/// `n` squarings.
///
/// Returns `None` when the squares fall into a cycle that does not contain `A`
/// or when no value repeats within the bound. This is a cheap signal whose
/// relation to the true order is checked by the sweep, not assumed.
pub fn order_by_squaring(a: &Gf2Matrix) -> Result<Option<u64>> {
    require_square(a)?;
    let limit = a.rows() as u64;
    let mut seen: HashMap<CanonicalKey, u64> = HashMap::new();
    seen.insert(a.canonical_key(), 0);
    let mut power = a.clone();
    for step in 1..=limit {
        power = power.mul(&power)?;
        let key = power.canonical_key();
        if let Some(&first) = seen.get(&key) {
            return Ok((first == 0).then_some(step));
        }
        seen.insert(key, step);
    }
    Ok(None)
}

/// Orbit length of the first standard basis vector under `A`.
pub fn orbit_length(a: &Gf2Matrix) -> Result<Option<u64>> {
    require_square(a)?;
    orbit_length_of(a, &Gf2Matrix::unit_column(a.rows(), 0))
}

/// Smallest `i ≥ 1` with `A^i · v == v` for an `n × 1` column `v`.
pub fn orbit_length_of(a: &Gf2Matrix, v: &Gf2Matrix) -> Result<Option<u64>> {
    require_square(a)?;
    if v.rows() != a.cols() || v.cols() != 1 {
        return Err(MatrixError::DimensionMismatch {
            op: "orbit",
            left: (a.rows(), a.cols()),
            right: (v.rows(), v.cols()),
        });
    }
    let bound = cycle_bound(a.rows());
    let mut image = a.mul(v)?;
    let mut steps = 1u64;
    loop {
        if image == *v {
            return Ok(Some(steps));
        }
        if steps >= bound {
            return Ok(None);
        }
        image = a.mul(&image)?;
        steps += 1;
    }
}

fn cycle_bound(n: usize) -> u64 {
    if n >= 64 {
        u64::MAX
    } else {
        1u64 << n
    }
}

fn require_square(a: &Gf2Matrix) -> Result<()> {
    if a.is_square() {
        Ok(())
    } else {
        Err(MatrixError::NotSquare {
            rows: a.rows(),
            cols: a.cols(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mat(rows: &[&[u8]]) -> Gf2Matrix {
        let rows: Vec<Vec<bool>> = rows
            .iter()
            .map(|row| row.iter().map(|&b| b == 1).collect())
            .collect();
        Gf2Matrix::from_rows(&rows).unwrap()
    }

    #[test]
    fn identity_has_order_one() {
        let a = Gf2Matrix::identity(3);
        assert_eq!(order_by_repeated_multiply(&a).unwrap(), Some(1));
        assert_eq!(order_by_squaring(&a).unwrap(), Some(1));
        assert_eq!(orbit_length(&a).unwrap(), Some(1));
    }

    #[test]
    fn two_by_two_generator() {
        let a = mat(&[&[0, 1], &[1, 1]]);
        assert_eq!(order_by_repeated_multiply(&a).unwrap(), Some(3));
        assert_eq!(order_by_squaring(&a).unwrap(), Some(2));
        assert_eq!(orbit_length(&a).unwrap(), Some(3));
    }

    #[test]
    fn singular_inputs() {
        assert_eq!(
            order_by_repeated_multiply(&Gf2Matrix::zero(3, 3)).unwrap(),
            Some(1)
        );
        let nilpotent = mat(&[&[0, 1], &[0, 0]]);
        assert_eq!(order_by_repeated_multiply(&nilpotent).unwrap(), None);
        assert_eq!(order_by_squaring(&nilpotent).unwrap(), None);
        assert_eq!(orbit_length(&nilpotent).unwrap(), None);
    }

    #[test]
    fn even_order_escapes_the_squaring_cycle() {
        let swap = mat(&[&[0, 1], &[1, 0]]);
        assert_eq!(order_by_repeated_multiply(&swap).unwrap(), Some(2));
        assert_eq!(order_by_squaring(&swap).unwrap(), None);
    }

    #[test]
    fn rejects_bad_shapes() {
        let wide = Gf2Matrix::zero(2, 3);
        assert_eq!(
            order_by_repeated_multiply(&wide),
            Err(MatrixError::NotSquare { rows: 2, cols: 3 })
        );
        assert!(order_by_squaring(&wide).is_err());
        assert!(orbit_length(&wide).is_err());
        assert!(matches!(
            orbit_length_of(&Gf2Matrix::identity(3), &Gf2Matrix::zero(2, 1)),
            Err(MatrixError::DimensionMismatch { op: "orbit", .. })
        ));
    }

    #[test]
    fn orbit_of_other_vectors() {
        let a = Gf2Matrix::companion(&[true, true, false]);
        let v = mat(&[&[1], &[1], &[0]]);
        assert_eq!(orbit_length_of(&a, &v).unwrap(), Some(7));
        assert_eq!(
            orbit_length_of(&a, &Gf2Matrix::zero(3, 1)).unwrap(),
            Some(1)
        );
    }
}
