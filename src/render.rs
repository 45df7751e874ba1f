//! Decimal rendering.
//!
//! Results leave this crate as plain decimal strings: no sign, no
//! separators, no leading zeros.

use crate::limb::{Limb, LIMB_DIGITS};
use num_bigint::BigUint;
use std::fmt;

const ZEROS: &str = "000000000";

/// Render a native integer.
#[inline]
pub(crate) fn u64_to_string(value: u64) -> String {
    let mut buffer = itoa::Buffer::new();
    buffer.format(value).to_owned()
}

/// Render an arbitrary-precision value.
#[inline]
pub(crate) fn biguint_to_string(value: &BigUint) -> String {
    value.to_str_radix(10)
}

/// Write base-10^9 limbs, most significant first.
///
/// The leading limb is written as is, every following limb is zero-padded
/// to nine digits. An empty slice writes nothing.
pub(crate) fn write_limbs<W>(writer: &mut W, limbs: &[Limb]) -> fmt::Result
where
    W: ?Sized + fmt::Write,
{
    let (first, rest) = match limbs.split_first() {
        Some(split) => split,
        None => return Ok(()),
    };

    let mut buffer = itoa::Buffer::new();
    writer.write_str(buffer.format(*first))?;
    for limb in rest {
        let digits = buffer.format(*limb);
        debug_assert!(digits.len() <= LIMB_DIGITS);
        writer.write_str(&ZEROS[digits.len()..])?;
        writer.write_str(digits)?;
    }
    Ok(())
}

/// Render base-10^9 limbs, most significant first.
pub(crate) fn limbs_to_string(limbs: &[Limb]) -> String {
    let mut out = String::with_capacity(limbs.len() * LIMB_DIGITS);
    // Writing to a String cannot fail.
    let _ = write_limbs(&mut out, limbs);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limbs_test() {
        assert_eq!(limbs_to_string(&[]), "");
        assert_eq!(limbs_to_string(&[0]), "0");
        assert_eq!(limbs_to_string(&[7]), "7");
        assert_eq!(limbs_to_string(&[999_999_999]), "999999999");

        // Only the leading limb goes unpadded.
        assert_eq!(limbs_to_string(&[1, 0]), "1000000000");
        assert_eq!(limbs_to_string(&[1, 5]), "1000000005");
        assert_eq!(limbs_to_string(&[51, 90942171, 709440000]), "51090942171709440000");
        assert_eq!(limbs_to_string(&[12, 0, 1]), "12000000000000000001");
    }

    #[test]
    fn native_test() {
        assert_eq!(u64_to_string(0), "0");
        assert_eq!(u64_to_string(u64::MAX), "18446744073709551615");
        assert_eq!(biguint_to_string(&BigUint::from(0u32)), "0");
        assert_eq!(
            biguint_to_string(&(BigUint::from(u64::MAX) * 3u32)),
            "55340232221128654845"
        );
    }
}
