//! Anyrt Error Types
//!
//! Defines every error condition the erased-value runtime can produce.
//! Kind mismatches are contract violations by generated code; everything
//! raised inside a closure crosses the generic operations unchanged.

use std::error;
use std::fmt;

use crate::value::Kind;

#[derive(Debug, Clone, PartialEq)]
pub enum AnyrtError {
    // Erased value access
    KindMismatch { expected: Kind, found: Kind },
    Incomparable { left: Kind, right: Kind },

    // Arithmetic
    DivisionByZero,

    // Raised by compiled code inside a closure
    Raised(String),
}

impl AnyrtError {
    /// Build a kind mismatch and record it; reaching this is a code generation bug.
    pub fn kind_mismatch(expected: Kind, found: Kind) -> Self {
        log::debug!("kind mismatch: expected {}, found {}", expected, found);
        AnyrtError::KindMismatch { expected, found }
    }

    /// Failure raised by the compiled program itself.
    pub fn raised(msg: impl Into<String>) -> Self {
        AnyrtError::Raised(msg.into())
    }

    pub fn is_kind_mismatch(&self) -> bool {
        matches!(self, AnyrtError::KindMismatch { .. })
    }
}

impl fmt::Display for AnyrtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyrtError::KindMismatch { expected, found } =>
                write!(f, "kind mismatch: expected {}, found {}", expected, found),
            AnyrtError::Incomparable { left, right } =>
                write!(f, "no ordering between {} and {}", left, right),

            AnyrtError::DivisionByZero =>
                write!(f, "division by zero"),

            AnyrtError::Raised(msg) =>
                write!(f, "{}", msg),
        }
    }
}

impl error::Error for AnyrtError {}

pub type AnyrtResult<T> = Result<T, AnyrtError>;
