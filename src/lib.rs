//! # Bigfact
//!
//! Exact factorials of arbitrarily large `n`, as decimal strings, computed
//! five independent ways.
//!
//! ```
//! # fn main() -> bigfact::Result<()> {
//! let expected = "51090942171709440000";
//!
//! assert_eq!(bigfact::long_multiplication(21)?, expected);
//! assert_eq!(bigfact::multiply_by_int(21)?, expected);
//! assert_eq!(bigfact::binary_split(21)?, expected);
//! assert_eq!(bigfact::prime(21)?, expected);
//! assert_eq!(bigfact::moessner(21)?, expected);
//! #     Ok(())
//! # }
//! ```
//!
//! The algorithms trade simplicity for speed in different ways:
//!
//! - [`long_multiplication`] multiplies an accumulator by every factor in
//!   turn. It is the reference the others are tested against.
//! - [`multiply_by_int`] does the same on a hand-managed base-10^9 limb
//!   buffer, sized up front from Stirling's approximation.
//! - [`binary_split`] multiplies the two halves of the range of factors
//!   recursively, so that fast multiplication can do its job.
//! - [`prime`] builds `n!` from its prime factorization, found with a sieve
//!   and Legendre's formula.
//! - [`moessner`] uses nothing but additions.
//!
//! Every algorithm answers `0..=20` from a table of `u64` values and
//! rejects a negative `n` with an [`Error`]:
//!
//! ```
//! let err = bigfact::prime(-1).unwrap_err();
//! assert_eq!(err.to_string(), "factorial: n has to be >= 0, but was -1");
//! ```
//!
//! # Comparing algorithms
//!
//! [`compare`] runs any set of algorithms on the same `n`, times each one
//! and checks that they agree.
//!
//! ```
//! use bigfact::{compare, Algorithm, Mode};
//!
//! let report = compare(100, &[Algorithm::BinarySplit, Algorithm::Prime], Mode::Parallel)?;
//! assert_eq!(report.value().len(), 158);
//! for timing in report.timings() {
//!     println!("{}: {:?}", timing.algorithm, timing.elapsed);
//! }
//! # Ok::<(), bigfact::CompareError>(())
//! ```
//!
//! # Features
//!
//! - `parallel` (default): run the algorithms of a comparison on rayon.
//! - `serde`: `Serialize` for [`Algorithm`], [`Timing`] and [`Report`].
//! - `cli` (default): the `factorial` command-line harness.

#![doc(html_root_url = "https://docs.rs/bigfact/0.1.0")]
#![deny(missing_docs)]
#![allow(
    // limbs and factors are narrowed after range checks
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    // things are often more readable this way
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::needless_range_loop,
)]

pub use crate::algorithm::{Algorithm, ParseAlgorithmError};
pub use crate::error::{check_argument, Error, ErrorCode, Result};
pub use crate::harness::{compare, CompareError, Mode, Report, Timing};
pub use crate::limb::multiply_by_int;
pub use crate::long::long_multiplication;
pub use crate::moessner::moessner;
pub use crate::prime::{legendre, prime, quick_pow, sieve};
pub use crate::split::{binary_split, sub_product};

pub mod cache;
pub mod error;
pub mod estimate;
pub mod limb;

mod algorithm;
mod harness;
mod long;
mod moessner;
mod prime;
mod render;
mod split;
