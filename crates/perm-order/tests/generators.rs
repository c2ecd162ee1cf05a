use gf2_core::Gf2Matrix;
use perm_order::{
    discrete_log, find_max_order_matrix, order_by_repeated_multiply, order_by_squaring,
    orbit_length, DiscreteLogConfig, SearchConfig,
};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

fn mat(rows: &[&[u8]]) -> Gf2Matrix {
    let rows: Vec<Vec<bool>> = rows
        .iter()
        .map(|row| row.iter().map(|&b| b == 1).collect())
        .collect();
    Gf2Matrix::from_rows(&rows).unwrap()
}

#[test]
fn sampled_orders_divide_group_bound_for_small_sizes() {
    init_tracing();
    let mut rng = ChaCha20Rng::from_seed([60u8; 32]);
    for n in 2..=3usize {
        for _ in 0..25 {
            let a = Gf2Matrix::random_non_singular(n, 0.5, 10_000, &mut rng).unwrap();
            let order = order_by_repeated_multiply(&a).unwrap().unwrap();
            assert_eq!(((1u64 << n) - 1) % order, 0);
            assert_eq!(a.pow(order).unwrap(), Gf2Matrix::identity(n));
        }
    }
}

#[test]
fn order_is_the_smallest_identity_power() {
    let mut rng = ChaCha20Rng::from_seed([61u8; 32]);
    for n in 4..=7 {
        let a = Gf2Matrix::random_non_singular(n, 0.5, 10_000, &mut rng).unwrap();
        let order = order_by_repeated_multiply(&a).unwrap().unwrap();
        assert_eq!(a.pow(order).unwrap(), Gf2Matrix::identity(n));
        for smaller in 1..order {
            assert_ne!(a.pow(smaller).unwrap(), Gf2Matrix::identity(n));
        }
    }
}

#[test]
fn non_semisimple_matrix_has_even_order() {
    // [[C, I], [0, C]] with C of order 3: no eigenvalue 1, yet order 6 does not divide 15
    let a = mat(&[
        &[0, 1, 1, 0],
        &[1, 1, 0, 1],
        &[0, 0, 0, 1],
        &[0, 0, 1, 1],
    ]);
    assert!(a.is_invertible());
    assert!(a.add(&Gf2Matrix::identity(4)).unwrap().is_invertible());
    assert_eq!(order_by_repeated_multiply(&a).unwrap(), Some(6));
    assert_eq!(order_by_squaring(&a).unwrap(), None);
}

#[test]
fn squaring_signal_against_known_polynomials() {
    // x^4 + x + 1 is primitive
    let primitive = Gf2Matrix::companion(&[true, true, false, false]);
    assert_eq!(order_by_repeated_multiply(&primitive).unwrap(), Some(15));
    assert_eq!(order_by_squaring(&primitive).unwrap(), Some(4));

    // x^4 + x^3 + x^2 + x + 1 is irreducible of order 5: the squaring cycle
    // still closes after four steps
    let order_five = Gf2Matrix::companion(&[true, true, true, true]);
    assert_eq!(order_by_repeated_multiply(&order_five).unwrap(), Some(5));
    assert_eq!(order_by_squaring(&order_five).unwrap(), Some(4));
}

#[test]
fn generator_orbits_cover_every_nonzero_vector() {
    init_tracing();
    let mut rng = ChaCha20Rng::from_seed([62u8; 32]);
    let found = find_max_order_matrix(6, &SearchConfig::default(), &mut rng).unwrap();
    assert_eq!(found.order, 63);
    assert_eq!(orbit_length(&found.matrix).unwrap(), Some(63));
    assert_eq!(order_by_squaring(&found.matrix).unwrap(), Some(6));
}

#[test]
fn discrete_log_roundtrip_on_found_generator() {
    init_tracing();
    let mut rng = ChaCha20Rng::from_seed([63u8; 32]);
    let found = find_max_order_matrix(5, &SearchConfig::default(), &mut rng).unwrap();
    let config = DiscreteLogConfig {
        table_size: 8,
        batches: 8,
    };
    for e in 1..found.order {
        let log = discrete_log(&found.matrix, e, &config).unwrap();
        let x = log.exponent.expect("exponent inside the searched range");
        assert_eq!(
            found.matrix.pow(x).unwrap(),
            found.matrix.pow(e).unwrap(),
            "target {}",
            e
        );
    }
}
