//! Error types for the toolbox.
//!
//! Errors raised by caller-supplied functions are never wrapped here; they
//! reach the caller unchanged. This type only covers misuse of the toolbox
//! surface itself.

use crate::fixed_point::ReturnMode;
use thiserror::Error;

/// Errors that can occur when configuring or projecting fixed-point results.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// A return mode name did not match any known spelling
    #[error("Unknown return mode '{name}'. Expected one of: value, iterator, infiter, thunk, callable")]
    UnknownReturnMode { name: String },

    /// A result was projected into a shape it does not hold
    #[error("Result holds {found} mode, but {expected} was requested")]
    ModeMismatch {
        expected: ReturnMode,
        found: ReturnMode,
    },
}

/// Convenience alias for toolbox results.
pub type Result<T> = std::result::Result<T, Error>;
