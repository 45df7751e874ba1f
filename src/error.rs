//! When a factorial cannot be computed.

use std::error;
use std::fmt::{self, Debug, Display};
use std::result;

/// This type represents all possible errors that can occur when asking for a
/// factorial.
pub struct Error {
    /// This `Box` allows us to keep the size of `Error` as small as possible,
    /// matching the other `Result<String, Error>` returns in this crate.
    err: Box<ErrorImpl>,
}

/// Alias for a `Result` with the error type `bigfact::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// Specifies the cause of this error.
    pub fn code(&self) -> &ErrorCode {
        &self.err.code
    }

    /// Returns true if this error was caused by an argument outside of the
    /// domain of the factorial, i.e. a negative `n`.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self.err.code, ErrorCode::InvalidArgument(_))
    }

    #[cold]
    pub(crate) fn invalid_argument(n: i64) -> Self {
        Error {
            err: Box::new(ErrorImpl {
                code: ErrorCode::InvalidArgument(n),
            }),
        }
    }
}

struct ErrorImpl {
    code: ErrorCode,
}

/// This type describes all possible errors that can occur when asking for a
/// factorial.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// `n` was negative. Carries the offending value.
    InvalidArgument(i64),
}

impl Debug for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::InvalidArgument(n) => f.debug_tuple("InvalidArgument").field(n).finish(),
        }
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::InvalidArgument(n) => {
                write!(f, "factorial: n has to be >= 0, but was {}", n)
            }
        }
    }
}

impl error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&self.err.code, f)
    }
}

// Remove a layer of verbosity from the debug representation. Humans often
// end up seeing this representation because it is what unwrap() shows.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Error({:?})", self.err.code.to_string())
    }
}

/// Checks that `n` is inside the domain of the factorial.
///
/// Every algorithm in this crate calls this before doing any work.
///
/// ```
/// assert_eq!(bigfact::check_argument(5).unwrap(), 5);
/// assert!(bigfact::check_argument(-1).unwrap_err().is_invalid_argument());
/// ```
pub fn check_argument(n: i64) -> Result<u64> {
    u64::try_from(n).map_err(|_| Error::invalid_argument(n))
}
