//! Balanced recursive multiplication.
//!
//! Multiplying a huge accumulator by one small factor at a time never lets
//! the bignum library use anything better than a linear pass. Splitting the
//! range of factors in half instead keeps both operands of every
//! multiplication about the same size, which is where asymptotically
//! faster multiplication pays off. `num-bigint` switches from long
//! multiplication to Karatsuba above 32 digits and to Toom-3 above 256
//! digits.
//!
//! <https://gmplib.org/manual/Factorial-Algorithm.html>

use crate::cache::{self, CACHE_LEN, LARGEST};
use crate::error::{check_argument, Result};
use crate::render;
use log::debug;
use num_bigint::BigUint;

/// Product of every integer in `[a, b]`.
///
/// ```
/// use num_bigint::BigUint;
///
/// assert_eq!(bigfact::sub_product(3, 5), BigUint::from(60u32));
/// assert_eq!(bigfact::sub_product(7, 7), BigUint::from(7u32));
/// ```
///
/// # Panics
///
/// Panics if `a > b`.
pub fn sub_product(a: u64, b: u64) -> BigUint {
    assert!(a <= b, "empty range [{}, {}]", a, b);
    match b - a {
        0 => BigUint::from(a),
        1 => BigUint::from(a) * b,
        2 => BigUint::from(a) * (a + 1) * b,
        span => {
            let mid = a + span / 2;
            sub_product(a, mid) * sub_product(mid + 1, b)
        }
    }
}

/// Big integer factorial, multiplying halves of the range of factors
/// together recursively.
///
/// The prefix `1..=20` comes from the cache, so only `[21, n]` is split.
/// With Karatsuba and Toom-3 doing the merges this runs in roughly
/// `O(n (n log n)^1.5)`.
///
/// ```
/// assert_eq!(bigfact::binary_split(23).unwrap(), "25852016738884976640000");
/// ```
pub fn binary_split(n: i64) -> Result<String> {
    let n = check_argument(n)?;
    if let Some(cached) = cache::render(n) {
        return Ok(cached);
    }

    let first = CACHE_LEN as u64;
    debug!("binary_split: n = {}, splitting [{}, {}]", n, first, n);
    let product = sub_product(first, n) * LARGEST;
    Ok(render::biguint_to_string(&product))
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;

    fn naive(a: u64, b: u64) -> BigUint {
        (a..=b).fold(BigUint::one(), |acc, i| acc * i)
    }

    #[test]
    fn base_cases_test() {
        assert_eq!(sub_product(21, 21), BigUint::from(21u32));
        assert_eq!(sub_product(21, 22), BigUint::from(462u32));
        assert_eq!(sub_product(21, 23), BigUint::from(10626u32));
    }

    #[test]
    fn matches_naive_test() {
        for a in 1..40 {
            for b in a..80 {
                assert_eq!(sub_product(a, b), naive(a, b), "[{}, {}]", a, b);
            }
        }
    }

    #[test]
    fn no_overflow_near_max_test() {
        let a = u64::MAX - 2;
        let expected = BigUint::from(a) * (a + 1) * (a + 2);
        assert_eq!(sub_product(a, u64::MAX), expected);
    }

    #[test]
    #[should_panic(expected = "empty range")]
    fn empty_range_test() {
        sub_product(5, 4);
    }

    #[test]
    fn binary_split_test() {
        assert_eq!(binary_split(20).unwrap(), "2432902008176640000");
        assert_eq!(binary_split(21).unwrap(), "51090942171709440000");
        assert_eq!(binary_split(24).unwrap(), "620448401733239439360000");
        assert!(binary_split(-3).unwrap_err().is_invalid_argument());
    }
}
