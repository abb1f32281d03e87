//! Error types for SpSparse.
//!
//! All errors in SpSparse are strongly typed using thiserror.
//! Fatal conditions carry the return code that was handed to the
//! error hook together with the human-readable message.

use thiserror::Error;

/// Return code reported for validation failures.
pub const VALIDATION_RETCODE: i32 = -1;

/// Return code reported for internal failures.
pub const INTERNAL_RETCODE: i32 = -2;

/// Validation errors that occur during input validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Unknown duplicate policy '{name}'")]
    UnknownPolicy {
        name: String,
    },

    #[error("Duplicate policy ordinal {ordinal} is out of range [0, 3]")]
    InvalidOrdinal {
        ordinal: u8,
    },

    #[error("Duplicate policy {policy} is only valid for dense destinations")]
    DenseOnlyPolicy {
        policy: String,
    },

    #[error("A process-wide error handler is already installed")]
    HandlerAlreadyInstalled,

    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        reason: String,
    },
}

/// Top-level error type for SpSparse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpsparseError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Fatal error (code {retcode}): {message}")]
    Fatal {
        retcode: i32,
        message: String,
    },

    #[error("Internal error: {message}")]
    Internal {
        message: String,
    },
}

impl SpsparseError {
    /// Creates a fatal error with the given return code.
    #[must_use]
    pub fn fatal(retcode: i32, message: impl Into<String>) -> Self {
        Self::Fatal {
            retcode,
            message: message.into(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns the return code associated with this error.
    #[must_use]
    pub const fn retcode(&self) -> i32 {
        match self {
            Self::Validation(_) => VALIDATION_RETCODE,
            Self::Fatal { retcode, .. } => *retcode,
            Self::Internal { .. } => INTERNAL_RETCODE,
        }
    }

    /// Returns true if this is a validation error.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if this error came through the error hook.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal { .. })
    }

    /// Returns true if this is an internal error.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal { .. })
    }
}

/// Result type alias for SpSparse operations.
pub type SpsparseResult<T> = Result<T, SpsparseError>;
