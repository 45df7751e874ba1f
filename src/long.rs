//! Reference implementation.

use crate::error::{check_argument, Result};
use crate::render;
use log::debug;
use num_bigint::BigUint;
use num_traits::One;

/// Big integer factorial, multiplying a `BigUint` accumulator by `2..=n`
/// one factor at a time.
///
/// This is the slowest of the algorithms and the one the others are
/// checked against. It deliberately skips the small-value cache so that it
/// exercises the same code path for every `n`.
///
/// ```
/// assert_eq!(bigfact::long_multiplication(5).unwrap(), "120");
/// ```
pub fn long_multiplication(n: i64) -> Result<String> {
    let n = check_argument(n)?;
    debug!("long_multiplication: n = {}", n);

    let mut product = BigUint::one();
    for i in 2..=n {
        product *= i;
    }
    Ok(render::biguint_to_string(&product))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::FACTORIALS;

    #[test]
    fn agrees_with_cache_test() {
        for (n, &expected) in FACTORIALS.iter().enumerate() {
            assert_eq!(long_multiplication(n as i64).unwrap(), expected.to_string());
        }
    }

    #[test]
    fn long_multiplication_test() {
        assert_eq!(
            long_multiplication(30).unwrap(),
            "265252859812191058636308480000000"
        );
        let err = long_multiplication(-1).unwrap_err();
        assert_eq!(err.to_string(), "factorial: n has to be >= 0, but was -1");
    }
}
