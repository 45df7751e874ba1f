//! Building-blocks for base-10^9 arbitrary-precision math.
//!
//! Unlike the rest of the crate, which leans on `num_bigint::BigUint`, the
//! limb buffer is managed by hand. It is a fixed-size `Vec` in big-endian
//! order: for `vec![0, 0, 3, 2, 1]` with `head == 2`, `3` is the most
//! significant limb, `1` is the least significant limb, and the two leading
//! zeros are spare capacity. Each limb holds nine decimal digits, which
//! makes rendering to decimal a matter of zero-padding.
//!
//! The buffer never grows. It is sized up front from the Stirling estimate
//! in [`crate::estimate`], and running out of room is a bug in the estimate,
//! not a recoverable condition.

use crate::cache;
use crate::error::{check_argument, Result};
use crate::estimate::factorial_len;
use crate::render;
use log::debug;
use std::fmt::{self, Display};

// ALIASES
// -------

/// Type for a single limb of the big integer.
///
/// A limb is analogous to a digit in base10, except it stores values in
/// `[0, 10^9)`.
pub type Limb = u32;

/// Type wide enough to hold the product of two limbs plus a carry.
type Wide = u64;

/// Radix of a single limb, `10^9`.
pub const RADIX: Limb = 1_000_000_000;

/// Decimal digits stored per limb, `log10(RADIX)`.
pub const LIMB_DIGITS: usize = 9;

/// Spare limbs allocated on top of the Stirling estimate.
pub const SAFETY_LIMBS: usize = 1;

/// Number of limbs needed to hold `n!`, with margin.
#[inline]
pub fn limb_count(n: u64) -> usize {
    factorial_len(n) / LIMB_DIGITS + 1 + SAFETY_LIMBS
}

// SCALAR
// ------

// Scalar-to-scalar operations, the building-blocks for the buffer.

mod scalar {
    use super::*;

    /// Multiply a limb by a small integer, with carry.
    ///
    /// Returns the (low, high) components: the new limb value in
    /// `[0, RADIX)` and the carry into the next more-significant limb.
    #[inline]
    pub fn mul(x: Limb, y: Limb, carry: Limb) -> (Limb, Limb) {
        // Cannot overflow: `(RADIX - 1) * Limb::MAX + Limb::MAX` is less than
        // `RADIX * 2^32`, which fits in 64 bits, and the high component of
        // that is below `2^32`.
        let z = Wide::from(x) * Wide::from(y) + Wide::from(carry);
        let radix = Wide::from(RADIX);
        ((z % radix) as Limb, (z / radix) as Limb)
    }

    /// Multiply a limb by a small integer in place, returning the carry.
    #[inline]
    pub fn imul(x: &mut Limb, y: Limb, carry: Limb) -> Limb {
        let t = mul(*x, y, carry);
        *x = t.0;
        t.1
    }
}

// BUFFER
// ------

/// Fixed-capacity base-10^9 natural number.
///
/// `buff[head..=tail]` holds the significant limbs, most significant first.
/// Every limb is below [`RADIX`].
#[derive(Clone, PartialEq, Eq)]
pub struct LimbBuffer {
    buff: Vec<Limb>,
    head: usize,
}

impl LimbBuffer {
    /// Buffer holding the value `1`, with room for `limbs` limbs.
    ///
    /// # Panics
    ///
    /// Panics if `limbs` is zero.
    pub fn with_capacity(limbs: usize) -> Self {
        assert!(limbs > 0, "limb buffer needs at least one limb");
        let mut buff = vec![0; limbs];
        buff[limbs - 1] = 1;
        LimbBuffer {
            buff,
            head: limbs - 1,
        }
    }

    /// Buffer holding `1! == 1`, sized to eventually hold `n!`.
    pub fn allocate(n: u64) -> Self {
        Self::with_capacity(limb_count(n))
    }

    /// Index of the most significant limb.
    #[inline]
    pub fn head(&self) -> usize {
        self.head
    }

    /// Index of the least significant limb, fixed at the end of the buffer.
    #[inline]
    pub fn tail(&self) -> usize {
        self.buff.len() - 1
    }

    /// Total number of limbs the buffer can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buff.len()
    }

    /// The significant limbs, most significant first.
    #[inline]
    pub fn limbs(&self) -> &[Limb] {
        &self.buff[self.head..]
    }

    /// MulAssign small integer.
    ///
    /// Walks from `tail` up to `head` multiplying each limb and propagating
    /// the carry, then stores whatever carry is left in front of `head`.
    ///
    /// # Panics
    ///
    /// Panics if the carry does not fit in the remaining capacity. That
    /// means the buffer was sized too small for the value it holds.
    pub fn imul_small(&mut self, y: Limb) {
        let head = self.head;
        let mut carry: Limb = 0;
        for xi in self.buff[head..].iter_mut().rev() {
            carry = scalar::imul(xi, y, carry);
        }

        // Overflow of value, add to the front. A multiplier below RADIX
        // leaves at most one limb of carry.
        while carry != 0 {
            assert!(
                self.head > 0,
                "limb buffer overflow: {} limbs are not enough",
                self.buff.len()
            );
            self.head -= 1;
            self.buff[self.head] = carry % RADIX;
            carry /= RADIX;
        }

        self.normalize();
    }

    /// Move `head` past any leading zero limbs, keeping at least one limb.
    #[inline]
    fn normalize(&mut self) {
        let tail = self.tail();
        while self.head < tail && self.buff[self.head] == 0 {
            self.head += 1;
        }
    }

    /// Render as a decimal string.
    pub fn to_decimal_string(&self) -> String {
        render::limbs_to_string(self.limbs())
    }
}

impl Display for LimbBuffer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        render::write_limbs(f, self.limbs())
    }
}

impl fmt::Debug for LimbBuffer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("LimbBuffer")
            .field("head", &self.head)
            .field("tail", &self.tail())
            .field("limbs", &self.limbs())
            .finish()
    }
}

// FACTORIAL
// ---------

/// Big integer factorial, multiplying a hand-rolled limb buffer by each
/// small factor in turn.
///
/// The buffer is a `Vec<u32>` where every element stores nine decimal
/// digits. Each step walks the buffer from its least significant limb,
/// multiplying by `i` and adding the previous carry; the low nine digits of
/// the product stay in place and the rest carries forward.
///
/// The result has about `n log n` digits, so the buffer has `O(n log n)`
/// limbs and the whole computation costs `O(n² log n)` limb operations.
///
/// ```
/// assert_eq!(bigfact::multiply_by_int(25).unwrap(), "15511210043330985984000000");
/// ```
///
/// # Panics
///
/// Panics if `n` exceeds `u32::MAX`, since every factor has to fit in a
/// single limb-sized multiplier.
pub fn multiply_by_int(n: i64) -> Result<String> {
    let n = check_argument(n)?;
    if let Some(cached) = cache::render(n) {
        return Ok(cached);
    }
    assert!(n <= u64::from(Limb::MAX), "{} does not fit in a single limb multiplier", n);

    let mut buffer = LimbBuffer::allocate(n);
    debug!(
        "multiply_by_int: n = {}, {} limbs allocated",
        n,
        buffer.capacity()
    );

    for i in 2..=n {
        buffer.imul_small(i as Limb);
    }

    debug!(
        "multiply_by_int: n = {}, {} of {} limbs used",
        n,
        buffer.limbs().len(),
        buffer.capacity()
    );
    Ok(buffer.to_decimal_string())
}

// TESTS
// -----
