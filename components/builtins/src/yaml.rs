//! YAML module: conversion between YAML text and runtime values
//!
//! Decoding walks the `serde_yaml::Value` tree produced by the parser and
//! rebuilds it with runtime types. Encoding never walks runtime values
//! itself: it canonicalizes through [`JSONObject`], reparses the JSON as YAML
//! and lets `serde_yaml` choose the output style. Only JSON-representable data
//! can therefore be emitted.
//!
//! # Example
//!
//! ```
//! use builtins::yaml::YAMLObject;
//! use core_types::Value;
//!
//! let value = YAMLObject::decode("hello:\n- world\n").unwrap();
//! assert_eq!(
//!     value.dict_get(&Value::string("hello")),
//!     Some(Value::list(vec![Value::string("world")]))
//! );
//!
//! assert_eq!(YAMLObject::encode(&value).unwrap(), "hello:\n- world\n");
//! ```

use core_types::{Dict, ScriptError, ScriptResult, Value};
use serde_yaml::Value as YamlValue;
use tracing::{debug, trace};

use crate::error::ConversionError;
use crate::json::JSONObject;
use crate::module::{expect_string, unpack_positional_args, Builtin, Module};

/// Converts parsed YAML data into runtime values.
pub struct Decoder;

impl Decoder {
    /// Depth-first structural translation.
    ///
    /// Lists keep their order. Mapping keys must be scalars; a list, mapping
    /// or tagged key fails the whole conversion. The first error met in a
    /// left-to-right walk is returned and no partial value escapes.
    pub fn convert(value: &YamlValue) -> Result<Value, ConversionError> {
        if let Some(scalar) = Self::convert_scalar(value) {
            return Ok(scalar);
        }
        match value {
            YamlValue::Sequence(seq) => {
                let elements = seq
                    .iter()
                    .map(Self::convert)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Value::list(elements))
            }
            YamlValue::Mapping(map) => {
                let mut dict = Dict::with_capacity(map.len());
                for (key, val) in map {
                    let key = Self::convert_scalar(key).ok_or_else(|| {
                        ConversionError::UnsupportedKey {
                            kind: kind_name(key),
                            repr: flow_repr(key),
                        }
                    })?;
                    dict.set_key(key, Self::convert(val)?)?;
                }
                Ok(Value::dict(dict))
            }
            other => Err(ConversionError::UnsupportedType {
                kind: kind_name(other),
                repr: flow_repr(other),
            }),
        }
    }

    /// The scalar-only path: null, bool, any integer, float or string.
    pub fn convert_scalar(value: &YamlValue) -> Option<Value> {
        match value {
            YamlValue::Null => Some(Value::None),
            YamlValue::Bool(b) => Some(Value::Bool(*b)),
            YamlValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(Value::int(i))
                } else if let Some(u) = n.as_u64() {
                    Some(Value::int(u))
                } else {
                    n.as_f64().map(Value::float)
                }
            }
            YamlValue::String(s) => Some(Value::string(s.as_str())),
            YamlValue::Sequence(_) | YamlValue::Mapping(_) | YamlValue::Tagged(_) => None,
        }
    }
}

fn kind_name(value: &YamlValue) -> &'static str {
    match value {
        YamlValue::Null => "null",
        YamlValue::Bool(_) => "bool",
        YamlValue::Number(n) if n.is_f64() => "float",
        YamlValue::Number(_) => "int",
        YamlValue::String(_) => "string",
        YamlValue::Sequence(_) => "sequence",
        YamlValue::Mapping(_) => "mapping",
        YamlValue::Tagged(_) => "tagged",
    }
}

/// Compact flow rendering of a node for error messages, e.g. `[a, {b: 1}]`.
fn flow_repr(value: &YamlValue) -> String {
    match value {
        YamlValue::Null => "null".to_string(),
        YamlValue::Bool(b) => b.to_string(),
        YamlValue::Number(n) => n.to_string(),
        YamlValue::String(s) if is_plain(s) => s.clone(),
        YamlValue::String(s) => format!("{:?}", s),
        YamlValue::Sequence(seq) => {
            let items: Vec<String> = seq.iter().map(flow_repr).collect();
            format!("[{}]", items.join(", "))
        }
        YamlValue::Mapping(map) => {
            let items: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", flow_repr(k), flow_repr(v)))
                .collect();
            format!("{{{}}}", items.join(", "))
        }
        YamlValue::Tagged(tagged) => format!("{} {}", tagged.tag, flow_repr(&tagged.value)),
    }
}

fn is_plain(s: &str) -> bool {
    !s.is_empty()
        && s.trim() == s
        && !s.contains(|c: char| c.is_control() || ",[]{}:#\"'".contains(c))
}

/// Converts runtime values into YAML text.
pub struct Encoder;

impl Encoder {
    /// Runtime value → JSON bytes → YAML value → YAML text.
    pub fn convert(value: &Value) -> Result<String, ConversionError> {
        let json = JSONObject::to_vec(value)?;
        trace!(json = %String::from_utf8_lossy(&json), "canonical form");
        let inflated: YamlValue =
            serde_yaml::from_slice(&json).map_err(ConversionError::Reencode)?;
        serde_yaml::to_string(&inflated).map_err(ConversionError::Reencode)
    }
}

/// YAML object with static methods
pub struct YAMLObject;

impl YAMLObject {
    /// yaml.decode(text)
    ///
    /// Anchors and aliases are expanded by the parser. A `<<` key is an
    /// ordinary string key, since the parsed tree cannot tell `<<` from
    /// `"<<"`. Input holding more than one document is a parse error.
    pub fn decode(text: &str) -> Result<Value, ConversionError> {
        debug!(bytes = text.len(), "yaml decode");
        let inflated: YamlValue = serde_yaml::from_str(text).map_err(ConversionError::Parse)?;
        Decoder::convert(&inflated).inspect_err(|e| debug!(error = %e, "yaml decode failed"))
    }

    /// yaml.encode(value)
    pub fn encode(value: &Value) -> Result<String, ConversionError> {
        debug!(kind = value.type_name(), "yaml encode");
        Encoder::convert(value).inspect_err(|e| debug!(error = %e, "yaml encode failed"))
    }
}

/// Options for building the `yaml` module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleOptions {
    /// Install the deprecated `marshal`/`unmarshal` aliases.
    // TODO: default to false, then drop the aliases, in the 1.0 release.
    pub legacy_aliases: bool,
}

impl Default for ModuleOptions {
    fn default() -> Self {
        ModuleOptions {
            legacy_aliases: true,
        }
    }
}

/// Create the `yaml` module with default options
///
/// ```text
/// yaml = module(
///   decode,
///   encode,
/// )
/// ```
pub fn new_module() -> Module {
    new_module_with(ModuleOptions::default())
}

/// Create the `yaml` module
pub fn new_module_with(options: ModuleOptions) -> Module {
    let mut module = Module::new("yaml");
    module.insert("decode", decode());
    module.insert("encode", encode());
    if options.legacy_aliases {
        module.insert("marshal", encode());
        module.insert("unmarshal", decode());
    }
    module
}

/// The `yaml.decode` builtin
///
/// ```text
/// >>> yaml.decode("hello:\n- world\n")
/// {"hello": ["world"]}
/// ```
pub fn decode() -> Builtin {
    Builtin::new("yaml.decode", yaml_decode)
}

/// The `yaml.encode` builtin
///
/// ```text
/// >>> yaml.encode({"hello": ["world"]})
/// "hello:\n- world\n"
/// ```
pub fn encode() -> Builtin {
    Builtin::new("yaml.encode", yaml_encode)
}

fn yaml_decode(f: &Builtin, args: &[Value], kwargs: &[(String, Value)]) -> ScriptResult<Value> {
    let [blob] = unpack_positional_args::<1>(f.name(), args, kwargs)?;
    let text = expect_string(f.name(), 1, blob)?;
    YAMLObject::decode(text).map_err(|e| ScriptError::from(e).in_function(f.name()))
}

fn yaml_encode(f: &Builtin, args: &[Value], kwargs: &[(String, Value)]) -> ScriptResult<Value> {
    let [value] = unpack_positional_args::<1>(f.name(), args, kwargs)?;
    YAMLObject::encode(value)
        .map(Value::String)
        .map_err(|e| ScriptError::from(e).in_function(f.name()))
}
