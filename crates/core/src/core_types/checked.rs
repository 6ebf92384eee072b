//! Soft-failure results for operations with a degenerate-input case.
//!
//! `angle`, `angle_quick` and `normalize` are undefined for zero-length
//! operands. They never panic; instead they hand back a documented sentinel
//! alongside a [`DomainError`] so hot loops can carry on while callers that
//! care can still see what happened.

use std::error::Error;
use std::fmt;

/// Operations that can hit a numeric domain error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Angle,
    AngleQuick,
    Normalize,
}

impl Operation {
    pub const fn as_str(self) -> &'static str {
        match self {
            Operation::Angle => "angle",
            Operation::AngleQuick => "angle_quick",
            Operation::Normalize => "normalize",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recoverable numeric domain error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    /// An operand's length was below [`crate::EPSILON`].
    ZeroLengthVector { operation: Operation },
}

impl DomainError {
    pub const fn operation(&self) -> Operation {
        match self {
            DomainError::ZeroLengthVector { operation } => *operation,
        }
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::ZeroLengthVector {
                operation: op @ (Operation::Angle | Operation::AngleQuick),
            } => write!(f, "{op}: cannot compute angle with zero length vector"),
            DomainError::ZeroLengthVector {
                operation: op @ Operation::Normalize,
            } => write!(f, "{op}: cannot normalize zero length vector"),
        }
    }
}

impl Error for DomainError {}

/// A computed value plus the domain error, if any, that forced it to a sentinel.
///
/// The value is always defined: on a degenerate input it is the operation's
/// sentinel (`0.0` for `angle`, `1.0` for `angle_quick`, the zero vector for
/// `normalize`).
#[derive(Debug, Clone, Copy, PartialEq)]
#[must_use = "a degenerate input is only observable through the returned Checked"]
pub struct Checked<T> {
    value: T,
    error: Option<DomainError>,
}

impl<T: Copy> Checked<T> {
    #[inline]
    pub(crate) const fn ok(value: T) -> Self {
        Checked { value, error: None }
    }

    #[inline]
    pub(crate) const fn degenerate(sentinel: T, error: DomainError) -> Self {
        Checked {
            value: sentinel,
            error: Some(error),
        }
    }

    /// The computed value, or the sentinel when the input was degenerate.
    #[inline]
    pub fn value(&self) -> T {
        self.value
    }

    #[inline]
    pub fn error(&self) -> Option<DomainError> {
        self.error
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.error.is_some()
    }

    #[inline]
    pub fn into_parts(self) -> (T, Option<DomainError>) {
        (self.value, self.error)
    }

    /// Convert into a hard `Result`, discarding the sentinel.
    ///
    /// # Errors
    /// Returns the recorded [`DomainError`] when the input was degenerate.
    #[inline]
    pub fn into_result(self) -> Result<T, DomainError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.value),
        }
    }
}
