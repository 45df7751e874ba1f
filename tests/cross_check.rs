use bigfact::Algorithm;
use num_bigint::BigUint;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

// Moessner's construction is cubic in `n`, keep it to small inputs.
const MOESSNER_LIMIT: i64 = 120;

fn algorithms(n: i64) -> impl Iterator<Item = Algorithm> {
    Algorithm::ALL
        .into_iter()
        .filter(move |&a| a != Algorithm::Moessner || n <= MOESSNER_LIMIT)
}

fn parse(value: &str) -> BigUint {
    BigUint::parse_bytes(value.as_bytes(), 10).unwrap()
}

fn check_agree(n: i64) {
    let expected = bigfact::long_multiplication(n).unwrap();
    for algorithm in algorithms(n) {
        assert_eq!(algorithm.compute(n).unwrap(), expected, "{}({})", algorithm, n);
    }
}

#[test]
fn test_contiguous_range() {
    for n in 0..=MOESSNER_LIMIT {
        check_agree(n);
    }
}

#[test]
fn test_random() {
    let mut rng = ChaCha20Rng::seed_from_u64(0);
    for _ in 0..20 {
        check_agree(rng.gen_range(21..=2000));
    }
}

#[test]
fn test_limb_boundaries() {
    // 27!, 33!, 39! and 44! are the first to need 4, 5, 6 and 7 limbs.
    for n in [26, 27, 28, 32, 33, 34, 38, 39, 40, 43, 44, 45, 500, 1000, 1001] {
        check_agree(n);
    }
}

#[test]
fn test_recurrence() {
    for algorithm in algorithms(MOESSNER_LIMIT) {
        let mut previous = parse(&algorithm.compute(0).unwrap());
        for n in 1..=MOESSNER_LIMIT {
            let current = parse(&algorithm.compute(n).unwrap());
            assert_eq!(current, &previous * n as u64, "{}({})", algorithm, n);
            previous = current;
        }
    }
}

#[test]
fn test_idempotent() {
    for algorithm in Algorithm::ALL {
        for n in [0, 21, 77] {
            assert_eq!(algorithm.compute(n).unwrap(), algorithm.compute(n).unwrap());
        }
    }
}

#[test]
fn test_canonical_decimal() {
    for algorithm in Algorithm::ALL {
        for n in [0, 1, 20, 21, 50, 99] {
            let value = algorithm.compute(n).unwrap();
            assert!(!value.is_empty());
            assert!(value.bytes().all(|b| b.is_ascii_digit()), "{}", value);
            assert!(value == "0" || !value.starts_with('0'), "{}", value);
        }
    }
}

#[test]
fn test_digit_estimate() {
    for n in [2u64, 10, 100, 1000, 3000] {
        let value = bigfact::binary_split(n as i64).unwrap();
        let estimate = bigfact::estimate::factorial_len(n);
        assert!(estimate.abs_diff(value.len()) <= 1, "{}! {} vs {}", n, estimate, value.len());
    }
}
