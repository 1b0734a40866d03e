//! Script error types.
//!
//! Every failure that crosses the boundary into the scripting runtime is a
//! [`ScriptError`]. The runtime reports the call as failed with the error's
//! message; no partial result accompanies an error.

use std::fmt;

/// The kind of script error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed input text (e.g. invalid YAML or JSON)
    SyntaxError,
    /// A value of the wrong kind for the operation
    TypeError,
    /// A value of the right kind that still cannot be represented
    ValueError,
    /// A call that does not match the callee's calling convention
    ArgumentError,
    /// A failure that valid input should never produce
    InternalError,
}

impl ErrorKind {
    /// Get the error name as a string
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::SyntaxError => "SyntaxError",
            ErrorKind::TypeError => "TypeError",
            ErrorKind::ValueError => "ValueError",
            ErrorKind::ArgumentError => "ArgumentError",
            ErrorKind::InternalError => "InternalError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An error reported to the calling script.
///
/// # Examples
///
/// ```
/// use core_types::{ErrorKind, ScriptError};
///
/// let error = ScriptError::type_error("unhashable type: list");
/// assert_eq!(error.kind, ErrorKind::TypeError);
/// assert_eq!(error.to_string(), "TypeError: unhashable type: list");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ScriptError {
    /// The category of error
    pub kind: ErrorKind,
    /// Human-readable error message
    pub message: String,
}

impl ScriptError {
    /// Create a new error of the given kind
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        ScriptError {
            kind,
            message: message.into(),
        }
    }

    /// Create a SyntaxError
    pub fn syntax_error(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SyntaxError, message)
    }

    /// Create a TypeError
    pub fn type_error(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::TypeError, message)
    }

    /// Create a ValueError
    pub fn value_error(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ValueError, message)
    }

    /// Create an ArgumentError
    pub fn argument_error(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ArgumentError, message)
    }

    /// Create an InternalError
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InternalError, message)
    }

    /// Prefix the message with the name of the function that failed.
    pub fn in_function(mut self, name: &str) -> Self {
        self.message = format!("{}: {}", name, self.message);
        self
    }
}

/// Result type for script-facing operations
pub type ScriptResult<T> = Result<T, ScriptError>;
