//! Factorials small enough to fit in a `u64`.
//!
//! Every algorithm consults this table before doing any work, which also
//! keeps the degenerate inputs `0` and `1` away from the bignum code.

use crate::render;

/// `FACTORIALS[i] == i!` for every `i` in `0..=20`.
///
/// `20!` is the last factorial representable in a `u64`.
pub const FACTORIALS: [u64; 21] = [
    1,
    1,
    2,
    6,
    24,
    120,
    720,
    5040,
    40320,
    362880,
    3628800,
    39916800,
    479001600,
    6227020800,
    87178291200,
    1307674368000,
    20922789888000,
    355687428096000,
    6402373705728000,
    121645100408832000,
    2432902008176640000,
];

/// Number of entries in [`FACTORIALS`]. The first `n` outside of the cache.
pub const CACHE_LEN: usize = FACTORIALS.len();

/// Largest cached factorial, `20!`.
pub const LARGEST: u64 = FACTORIALS[CACHE_LEN - 1];

/// Looks up `n!` in the table.
///
/// ```
/// assert_eq!(bigfact::cache::get(5), Some(120));
/// assert_eq!(bigfact::cache::get(21), None);
/// ```
#[inline]
pub fn get(n: u64) -> Option<u64> {
    usize::try_from(n).ok().and_then(|i| FACTORIALS.get(i)).copied()
}

/// Decimal rendering of the cached `n!`, if there is one.
#[inline]
pub(crate) fn render(n: u64) -> Option<String> {
    let value = get(n)?;
    log::trace!("{}! served from cache", n);
    Some(render::u64_to_string(value))
}
