//! Factorials as a product of prime powers.
//!
//! Every prime `p <= n` divides `n!` exactly `Σ floor(n / p^k)` times
//! (Legendre's formula), so `n!` is the product of `p^e` over the primes
//! found by a sieve of Eratosthenes. Raising each prime to its exponent by
//! squaring replaces `e` multiplications with about `log2(e)`.
//!
//! <https://en.wikipedia.org/wiki/Sieve_of_Eratosthenes>
//! <https://en.wikipedia.org/wiki/Legendre%27s_formula>

use crate::cache;
use crate::error::{check_argument, Result};
use crate::render;
use log::{debug, trace};
use num_bigint::BigUint;
use num_traits::One;

/// Sieve of Eratosthenes over `0..=n`.
///
/// `flags[i]` is `false` exactly when `i` is prime. `0` and `1` are
/// flagged along with the composites.
///
/// ```
/// let flags = bigfact::sieve(10);
/// let primes: Vec<usize> = (0..=10).filter(|&i| !flags[i]).collect();
/// assert_eq!(primes, [2, 3, 5, 7]);
/// ```
pub fn sieve(n: usize) -> Vec<bool> {
    let mut flags = vec![false; n + 1];
    flags[0] = true;
    if n >= 1 {
        flags[1] = true;
    }

    let mut i = 2;
    while i * i <= n {
        if !flags[i] {
            for j in (i * i..=n).step_by(i) {
                flags[j] = true;
            }
        }
        i += 1;
    }
    flags
}

/// Exponent of the prime `p` in the factorization of `n!`.
///
/// Sums `n / p^k` for as long as `p^k <= n`. The power is tracked with
/// checked multiplication, so a `p^k` that would overflow `u64` ends the
/// sum instead of wrapping.
///
/// ```
/// // 10! = 2^8 * 3^4 * 5^2 * 7
/// assert_eq!(bigfact::legendre(10, 2), 8);
/// assert_eq!(bigfact::legendre(10, 3), 4);
/// assert_eq!(bigfact::legendre(10, 5), 2);
/// assert_eq!(bigfact::legendre(10, 7), 1);
/// ```
pub fn legendre(n: u64, p: u64) -> u64 {
    debug_assert!(p >= 2);
    let mut count = 0;
    let mut power = p;
    while power <= n {
        count += n / power;
        power = match power.checked_mul(p) {
            Some(next) => next,
            None => break,
        };
    }
    count
}

/// `base^exp` by repeated squaring.
///
/// ```
/// use num_bigint::BigUint;
///
/// assert_eq!(bigfact::quick_pow(2, 10), BigUint::from(1024u32));
/// assert_eq!(bigfact::quick_pow(7, 0), BigUint::from(1u32));
/// ```
pub fn quick_pow(base: u64, mut exp: u64) -> BigUint {
    let mut acc = BigUint::one();
    let mut square = BigUint::from(base);
    while exp > 0 {
        if exp & 1 == 1 {
            acc *= &square;
        }
        exp >>= 1;
        if exp > 0 {
            square = &square * &square;
        }
    }
    acc
}

/// Big integer factorial, assembled from the prime factorization of `n!`.
///
/// The sieve costs `O(n log log n)` and needs one flag per integer up to
/// `n`. The product of the prime powers dominates at roughly
/// `O(n (n log n)^1.5)`.
///
/// ```
/// assert_eq!(bigfact::prime(22).unwrap(), "1124000727777607680000");
/// ```
///
/// # Panics
///
/// Panics if `n` does not fit in `usize`, since the sieve holds a flag for
/// every integer up to `n`.
pub fn prime(n: i64) -> Result<String> {
    let n = check_argument(n)?;
    if let Some(cached) = cache::render(n) {
        return Ok(cached);
    }
    let len = match usize::try_from(n) {
        Ok(len) => len,
        Err(_) => panic!("{} is too large to sieve", n),
    };

    let flags = sieve(len);
    debug!("prime: n = {}, sieved {} flags", n, flags.len());

    let mut product = BigUint::one();
    for (p, _) in flags.iter().enumerate().filter(|&(_, &composite)| !composite) {
        let p = p as u64;
        let exp = legendre(n, p);
        trace!("prime: {}^{}", p, exp);
        product *= quick_pow(p, exp);
    }
    Ok(render::biguint_to_string(&product))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_prime(n: usize) -> bool {
        n >= 2 && (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0)
    }

    #[test]
    fn sieve_test() {
        assert_eq!(sieve(0), [true]);
        assert_eq!(sieve(1), [true, true]);
        assert_eq!(sieve(2), [true, true, false]);
        assert_eq!(sieve(4), [true, true, false, false, true]);

        let flags = sieve(1000);
        for (i, &composite) in flags.iter().enumerate() {
            assert_eq!(composite, !is_prime(i), "{}", i);
        }
        assert_eq!(flags.iter().filter(|&&f| !f).count(), 168);
    }

    #[test]
    fn legendre_test() {
        assert_eq!(legendre(0, 2), 0);
        assert_eq!(legendre(1, 2), 0);
        assert_eq!(legendre(5, 2), 3);
        assert_eq!(legendre(100, 2), 97);
        assert_eq!(legendre(100, 5), 24);
        assert_eq!(legendre(100, 97), 1);
        assert_eq!(legendre(96, 97), 0);
    }

    #[test]
    fn legendre_overflow_test() {
        // 2^63 <= u64::MAX but 2^64 overflows, which ends the sum.
        let expected: u64 = (1..64).map(|k| u64::MAX >> k).sum();
        assert_eq!(legendre(u64::MAX, 2), expected);

        let big = u64::MAX - 58;
        assert_eq!(legendre(u64::MAX, big), 1);
    }

    #[test]
    fn quick_pow_test() {
        for base in 0..12u64 {
            for exp in 0..40u64 {
                let expected = BigUint::from(base).pow(exp as u32);
                assert_eq!(quick_pow(base, exp), expected, "{}^{}", base, exp);
            }
        }
    }

    #[test]
    fn prime_test() {
        assert_eq!(prime(5).unwrap(), "120");
        assert_eq!(prime(21).unwrap(), "51090942171709440000");
        assert_eq!(
            prime(30).unwrap(),
            "265252859812191058636308480000000"
        );
        assert!(prime(-1).unwrap_err().is_invalid_argument());
    }
}
