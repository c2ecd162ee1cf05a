use gf2_core::{Gf2Matrix, MatrixError};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn singularity_agrees_with_inversion() {
    let mut rng = ChaCha20Rng::from_seed([30u8; 32]);
    for n in 1..10 {
        for _ in 0..40 {
            let a = Gf2Matrix::random(n, n, 0.4, &mut rng).unwrap();
            let inverse = a.invert();
            assert_eq!(
                a.is_singular(),
                inverse == Err(MatrixError::SingularMatrix),
                "n = {}\n{}",
                n,
                a
            );
            if let Ok(inv) = inverse {
                assert_eq!(a.mul(&inv).unwrap(), Gf2Matrix::identity(n));
                assert_eq!(inv.mul(&a).unwrap(), Gf2Matrix::identity(n));
            }
        }
    }
}

#[test]
fn inverse_of_product_reverses_order() {
    let mut rng = ChaCha20Rng::from_seed([31u8; 32]);
    let a = Gf2Matrix::random_non_singular(70, 0.5, 1_000, &mut rng).unwrap();
    let b = Gf2Matrix::random_non_singular(70, 0.5, 1_000, &mut rng).unwrap();
    let lhs = a.mul(&b).unwrap().invert().unwrap();
    let rhs = b.invert().unwrap().mul(&a.invert().unwrap()).unwrap();
    assert_eq!(lhs, rhs);
}

#[test]
fn transpose_reverses_products() {
    let mut rng = ChaCha20Rng::from_seed([32u8; 32]);
    let a = Gf2Matrix::random(5, 66, 0.5, &mut rng).unwrap();
    let b = Gf2Matrix::random(66, 4, 0.5, &mut rng).unwrap();
    assert_eq!(
        a.mul(&b).unwrap().transpose(),
        b.transpose().mul(&a.transpose()).unwrap()
    );
    assert_eq!(a.transpose().transpose(), a);
}

#[test]
fn powers_of_companion_matrix() {
    // x^3 + x + 1 is primitive, so its companion matrix has order 7
    let a = Gf2Matrix::companion(&[true, true, false]);
    assert_eq!(a.pow(7).unwrap(), Gf2Matrix::identity(3));
    for e in 1..7 {
        assert_ne!(a.pow(e).unwrap(), Gf2Matrix::identity(3), "exponent {}", e);
    }
    assert_eq!(
        a.pow(5).unwrap().invert().unwrap(),
        a.pow(2).unwrap()
    );
}

#[test]
fn expand_builds_up_a_permutation() {
    let mut p = Gf2Matrix::identity(2);
    p.expand(&[true, false, true]).unwrap();
    assert_eq!(p.rows(), 3);
    assert_eq!(p.cols(), 3);
    assert_eq!(p.to_string(), "100\n010\n101");
    assert!(p.is_invertible());
    assert!(matches!(
        p.expand(&[true]),
        Err(MatrixError::InvalidRowLength { expected: 3, actual: 1 })
    ));
}
