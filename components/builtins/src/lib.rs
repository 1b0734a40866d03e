//! Native data modules for the scripting runtime
//!
//! This crate provides the modules scripts use to read and emit structured data:
//! - `yaml` module (`decode`, `encode`, and the deprecated `unmarshal`/`marshal`)
//! - `json` module (`decode`, `encode`)
//! - The builtin calling convention shared by both
//!
//! # Example
//!
//! ```
//! use builtins::yaml;
//! use core_types::Value;
//!
//! let module = yaml::new_module();
//! let decoded = module
//!     .call("decode", &[Value::string("a: 1\nb: [true, null]\n")], &[])
//!     .unwrap();
//! assert_eq!(decoded.dict_get(&Value::string("a")), Some(Value::int(1)));
//!
//! let encoded = module.call("encode", &[decoded], &[]).unwrap();
//! assert_eq!(encoded.as_str(), Some("a: 1\nb:\n- true\n- null\n"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod json;
pub mod module;
pub mod yaml;

use std::collections::BTreeMap;

use core_types::{ScriptError, ScriptResult, Value};

// Re-export main types for convenience
pub use error::{ConversionError, JsonError};
pub use json::JSONObject;
pub use module::{Builtin, Module};
pub use yaml::YAMLObject;

/// The modules predeclared in every script environment, keyed by name
pub fn predeclared() -> BTreeMap<String, Module> {
    [json::new_module(), yaml::new_module()]
        .into_iter()
        .map(|module| (module.name().to_string(), module))
        .collect()
}

/// Resolve a builtin by qualified name
pub fn lookup_builtin(name: &str) -> Option<Builtin> {
    match name {
        "json.decode" => Some(json::decode()),
        "json.encode" => Some(json::encode()),
        "yaml.decode" => Some(yaml::decode()),
        "yaml.encode" => Some(yaml::encode()),
        _ => None,
    }
}

/// Call the builtin a [`Value::NativeFunction`] refers to
pub fn call_native_function(name: &str, args: &[Value], kwargs: &[(String, Value)]) -> ScriptResult<Value> {
    let builtin = lookup_builtin(name)
        .ok_or_else(|| ScriptError::type_error(format!("unknown builtin {}", name)))?;
    builtin.call(args, kwargs)
}
