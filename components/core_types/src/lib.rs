//! Core runtime value types and error handling.
//!
//! This crate provides the foundational types for the embedded scripting
//! runtime: the dynamic value model exposed to scripts, the ordered
//! dictionary used for mappings, and the error type surfaced at call sites.
//!
//! # Overview
//!
//! - [`Value`] - Tagged representation of runtime values
//! - [`Dict`] - Insertion-ordered mapping with hashable keys
//! - [`ScriptError`] - Errors reported to the calling script
//! - [`ErrorKind`] - Categories of script errors
//!
//! # Examples
//!
//! ```
//! use core_types::{Dict, Value};
//!
//! let mut dict = Dict::new();
//! dict.set_key(Value::string("hello"), Value::list(vec![Value::string("world")]))
//!     .unwrap();
//!
//! let value = Value::dict(dict);
//! assert_eq!(value.type_name(), "dict");
//! assert_eq!(value.to_string(), r#"{"hello": ["world"]}"#);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod dict;
mod error;
mod value;

pub use dict::Dict;
pub use error::{ErrorKind, ScriptError, ScriptResult};
pub use value::Value;
