//! Naming and dispatching the five factorial algorithms.

use crate::error::Result;
use std::error;
use std::fmt::{self, Display};
use std::result;
use std::str::FromStr;

/// One of the factorial algorithms exported by this crate.
///
/// ```
/// use bigfact::Algorithm;
///
/// let algorithm: Algorithm = "binary-split".parse().unwrap();
/// assert_eq!(algorithm, Algorithm::BinarySplit);
/// assert_eq!(algorithm.compute(6).unwrap(), "720");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Algorithm {
    /// [`long_multiplication`](crate::long_multiplication)
    LongMultiplication,
    /// [`multiply_by_int`](crate::multiply_by_int)
    MultiplyByInt,
    /// [`binary_split`](crate::binary_split)
    BinarySplit,
    /// [`prime`](crate::prime())
    Prime,
    /// [`moessner`](crate::moessner())
    Moessner,
}

const NAMES: &[&str] = &[
    "long-multiplication",
    "multiply-by-int",
    "binary-split",
    "prime",
    "moessner",
];

impl Algorithm {
    /// Every algorithm, reference implementation first.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::LongMultiplication,
        Algorithm::MultiplyByInt,
        Algorithm::BinarySplit,
        Algorithm::Prime,
        Algorithm::Moessner,
    ];

    /// Stable kebab-case name, as accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::LongMultiplication => NAMES[0],
            Algorithm::MultiplyByInt => NAMES[1],
            Algorithm::BinarySplit => NAMES[2],
            Algorithm::Prime => NAMES[3],
            Algorithm::Moessner => NAMES[4],
        }
    }

    /// Computes `n!` with this algorithm.
    pub fn compute(self, n: i64) -> Result<String> {
        match self {
            Algorithm::LongMultiplication => crate::long_multiplication(n),
            Algorithm::MultiplyByInt => crate::multiply_by_int(n),
            Algorithm::BinarySplit => crate::binary_split(n),
            Algorithm::Prime => crate::prime(n),
            Algorithm::Moessner => crate::moessner(n),
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    /// Accepts the kebab-case name, its snake_case spelling, or the
    /// camelCase spelling.
    fn from_str(s: &str) -> result::Result<Self, Self::Err> {
        match s {
            "long-multiplication" | "long_multiplication" | "longMultiplication" => {
                Ok(Algorithm::LongMultiplication)
            }
            "multiply-by-int" | "multiply_by_int" | "multiplyByInt" => Ok(Algorithm::MultiplyByInt),
            "binary-split" | "binary_split" | "binarySplit" => Ok(Algorithm::BinarySplit),
            "prime" => Ok(Algorithm::Prime),
            "moessner" => Ok(Algorithm::Moessner),
            _ => Err(ParseAlgorithmError {
                name: s.to_owned(),
            }),
        }
    }
}

/// The error returned when parsing an unknown algorithm name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseAlgorithmError {
    name: String,
}

impl ParseAlgorithmError {
    /// The name that failed to parse.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "unknown algorithm `{}`, expected {}",
            self.name,
            OneOf { names: NAMES }
        )
    }
}

impl error::Error for ParseAlgorithmError {}

/// Used in error messages.
///
/// - expected `a`
/// - expected `a` or `b`
/// - expected one of `a`, `b`, `c`
///
/// The slice of names must not be empty.
struct OneOf {
    names: &'static [&'static str],
}

impl Display for OneOf {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self.names {
            [] => Ok(()),
            [only] => write!(formatter, "`{}`", only),
            [a, b] => write!(formatter, "`{}` or `{}`", a, b),
            names => {
                formatter.write_str("one of ")?;
                for (i, alt) in names.iter().enumerate() {
                    if i > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "`{}`", alt)?;
                }
                Ok(())
            }
        }
    }
}
