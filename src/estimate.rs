//! Digit-length estimate for `n!` via Stirling's approximation.
//!
//! <https://en.wikipedia.org/wiki/Stirling%27s_approximation>

use std::f64::consts::{E, PI};

/// Estimated number of decimal digits in `n!`.
///
/// Computes `floor(0.5 * log10(2πn) + n * log10(n / e) + 1)`. This is an
/// asymptotic approximation, good enough to size a buffer but not exact:
/// callers must over-provision instead of relying on it as a hard bound.
/// For `n < 2` the answer is `1`.
///
/// ```
/// assert_eq!(bigfact::estimate::factorial_len(10), 7); // 3628800
/// assert_eq!(bigfact::estimate::factorial_len(100), 158);
/// ```
pub fn factorial_len(n: u64) -> usize {
    if n < 2 {
        return 1;
    }
    let n = n as f64;
    let len = 0.5 * (2.0 * n * PI).log10() + n * (n / E).log10() + 1.0;
    len as usize
}
