//! Factorials with nothing but addition.
//!
//! Moessner's construction: write out the integers, strike every `k`th
//! entry, take running sums, and repeat with a shrinking stride. Laid out
//! as a triangle of running sums, the last entry after round `n` is `n!`.
//!
//! <https://thatsmaths.com/2017/09/14/moessners-magical-method/>

use crate::cache;
use crate::error::{check_argument, Result};
use crate::render;
use log::debug;
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Big integer factorial by Moessner's construction.
///
/// Keeps one row of `n + 1` running sums. Round `i` opens a new zero entry
/// at `row[i]`, then sweeps `i` times over a shrinking prefix, adding each
/// entry's left neighbour into it. Only additions are performed, but there
/// are `O(n³)` of them on numbers of up to `O(n log n)` digits.
///
/// ```
/// assert_eq!(bigfact::moessner(21).unwrap(), "51090942171709440000");
/// ```
///
/// # Panics
///
/// Panics if `n` does not fit in `usize`.
pub fn moessner(n: i64) -> Result<String> {
    let n = check_argument(n)?;
    if let Some(cached) = cache::render(n) {
        return Ok(cached);
    }
    let n = match usize::try_from(n) {
        Ok(n) => n,
        Err(_) => panic!("{} is too large for a row of running sums", n),
    };

    debug!("moessner: n = {}, {} running sums", n, n + 1);
    let row = triangle(n);
    Ok(render::biguint_to_string(&row[n]))
}

/// The row of running sums after `n` rounds.
///
/// `row[k]` ends up as the unsigned Stirling number of the first kind
/// `[n + 1, n + 1 - k]`, so the row sums to `(n + 1)!` and `row[n]` is `n!`.
fn triangle(n: usize) -> Vec<BigUint> {
    let mut row = vec![BigUint::zero(); n + 1];
    row[0] = BigUint::one();

    for i in 1..=n {
        row[i].set_zero();
        for j in (1..=i).rev() {
            // Left to right, so every entry sees its neighbour's new value.
            for k in 1..=j {
                let (done, rest) = row.split_at_mut(k);
                rest[0] += &done[k - 1];
            }
        }
    }
    row
}
