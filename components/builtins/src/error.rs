//! Conversion error types
//!
//! This module provides the error taxonomy for the data modules:
//! - Parse errors surfaced verbatim from the YAML codec
//! - Unsupported key and unsupported type errors from the decoder
//! - Encoder errors from JSON canonicalization
//!
//! Every error converts into a [`ScriptError`] at the module boundary.

use core_types::{ErrorKind, ScriptError};
use thiserror::Error;

/// Errors raised while canonicalizing runtime values as JSON, or parsing JSON text.
#[derive(Debug, Error)]
pub enum JsonError {
    /// A dict key that is not a string
    #[error("dict has {key_type} key, want string")]
    NonStringKey {
        /// Type name of the offending key
        key_type: &'static str,
    },
    /// NaN or an infinity
    #[error("cannot encode non-finite float {0}")]
    NonFiniteFloat(String),
    /// An integer too large for any JSON number
    #[error("cannot encode int {0} as JSON: out of range")]
    IntOutOfRange(String),
    /// A value kind with no JSON representation
    #[error("cannot encode {0} as JSON")]
    Unsupported(&'static str),
    /// A list or dict that contains itself
    #[error("cycle in JSON structure")]
    Cycle,
    /// Failure writing the JSON text
    #[error("{0}")]
    Serialize(#[source] serde_json::Error),
    /// Malformed JSON text
    #[error("{0}")]
    Parse(#[source] serde_json::Error),
}

/// Errors raised while converting between YAML and runtime values.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// Malformed YAML text
    #[error("{0}")]
    Parse(#[source] serde_yaml::Error),
    /// A mapping key that is not a scalar
    #[error("{kind} ({repr}) is not a supported key type")]
    UnsupportedKey {
        /// Kind of the offending key
        kind: &'static str,
        /// Debug rendering of the key
        repr: String,
    },
    /// A node outside the supported kind set
    #[error("{kind} ({repr}) is not a supported type")]
    UnsupportedType {
        /// Kind of the offending node
        kind: &'static str,
        /// Debug rendering of the node
        repr: String,
    },
    /// The JSON canonicalizer rejected the value
    #[error(transparent)]
    Json(#[from] JsonError),
    /// The canonical form could not be turned back into YAML
    #[error("{0}")]
    Reencode(#[source] serde_yaml::Error),
    /// The runtime refused a constructed value (e.g. an unhashable key)
    #[error(transparent)]
    Script(#[from] ScriptError),
}

impl From<JsonError> for ScriptError {
    fn from(err: JsonError) -> Self {
        let kind = match err {
            JsonError::Parse(_) => ErrorKind::SyntaxError,
            _ => ErrorKind::ValueError,
        };
        ScriptError::new(kind, err.to_string())
    }
}

impl From<ConversionError> for ScriptError {
    fn from(err: ConversionError) -> Self {
        match err {
            ConversionError::Parse(e) => ScriptError::syntax_error(e.to_string()),
            ConversionError::UnsupportedKey { .. } | ConversionError::UnsupportedType { .. } => {
                ScriptError::type_error(err.to_string())
            }
            ConversionError::Json(e) => e.into(),
            ConversionError::Reencode(e) => ScriptError::internal_error(e.to_string()),
            ConversionError::Script(e) => e,
        }
    }
}
