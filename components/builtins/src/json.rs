//! JSON module methods
//!
//! `JSONObject` is the canonicalizer the YAML encoder is built on: it maps a
//! runtime value onto `serde_json::Value`, rejecting anything JSON cannot
//! represent. It is also exposed to scripts as the `json` module.

use std::rc::Rc;

use core_types::{Dict, ScriptError, ScriptResult, Value};
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use tracing::debug;

use crate::error::JsonError;
use crate::module::{expect_string, unpack_positional_args, Builtin, Module};

/// JSON object with static methods
pub struct JSONObject;

impl JSONObject {
    /// json.decode(text)
    pub fn parse(text: &str) -> Result<Value, JsonError> {
        let json_value: serde_json::Value = serde_json::from_str(text).map_err(JsonError::Parse)?;
        Ok(Self::json_to_value(&json_value))
    }

    /// json.encode(value)
    pub fn stringify(value: &Value) -> Result<String, JsonError> {
        let json_value = Self::to_json_value(value)?;
        serde_json::to_string(&json_value).map_err(JsonError::Serialize)
    }

    /// Canonical JSON bytes for a runtime value
    pub fn to_vec(value: &Value) -> Result<Vec<u8>, JsonError> {
        let json_value = Self::to_json_value(value)?;
        serde_json::to_vec(&json_value).map_err(JsonError::Serialize)
    }

    /// Convert a runtime value to serde_json::Value.
    ///
    /// Object keys come out sorted, since `serde_json::Map` is ordered by key.
    pub fn to_json_value(value: &Value) -> Result<serde_json::Value, JsonError> {
        Self::value_to_json(value, &mut Vec::new())
    }

    /// Convert serde_json::Value to a runtime value
    fn json_to_value(json: &serde_json::Value) -> Value {
        match json {
            serde_json::Value::Null => Value::None,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::int(i)
                } else if let Some(u) = n.as_u64() {
                    Value::int(u)
                } else {
                    Value::float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::string(s.as_str()),
            serde_json::Value::Array(arr) => {
                Value::list(arr.iter().map(Self::json_to_value).collect())
            }
            serde_json::Value::Object(obj) => {
                let mut dict = Dict::with_capacity(obj.len());
                for (key, val) in obj {
                    dict.set_str_key(key.as_str(), Self::json_to_value(val));
                }
                Value::dict(dict)
            }
        }
    }

    fn value_to_json(value: &Value, path: &mut Vec<usize>) -> Result<serde_json::Value, JsonError> {
        match value {
            Value::None => Ok(serde_json::Value::Null),
            Value::Bool(b) => Ok(serde_json::Value::Bool(*b)),
            Value::Int(n) => int_to_json(n),
            Value::Float(n) => serde_json::Number::from_f64(*n)
                .map(serde_json::Value::Number)
                .ok_or_else(|| JsonError::NonFiniteFloat(value.to_string())),
            Value::String(s) => Ok(serde_json::Value::String(s.clone())),
            Value::List(list) => {
                enter(path, Rc::as_ptr(list) as usize)?;
                let elements = list
                    .borrow()
                    .iter()
                    .map(|element| Self::value_to_json(element, path))
                    .collect::<Result<Vec<_>, _>>()?;
                path.pop();
                Ok(serde_json::Value::Array(elements))
            }
            Value::Dict(dict) => {
                enter(path, Rc::as_ptr(dict) as usize)?;
                let mut map = serde_json::Map::new();
                for (key, val) in dict.borrow().iter() {
                    let key = key.as_str().ok_or(JsonError::NonStringKey {
                        key_type: key.type_name(),
                    })?;
                    map.insert(key.to_string(), Self::value_to_json(val, path)?);
                }
                path.pop();
                Ok(serde_json::Value::Object(map))
            }
            Value::NativeFunction(_) => Err(JsonError::Unsupported(value.type_name())),
        }
    }
}

fn enter(path: &mut Vec<usize>, id: usize) -> Result<(), JsonError> {
    if path.contains(&id) {
        return Err(JsonError::Cycle);
    }
    path.push(id);
    Ok(())
}

/// Integers outside the 64-bit range degrade to the nearest float.
fn int_to_json(n: &BigInt) -> Result<serde_json::Value, JsonError> {
    if let Some(i) = n.to_i64() {
        return Ok(serde_json::Value::from(i));
    }
    if let Some(u) = n.to_u64() {
        return Ok(serde_json::Value::from(u));
    }
    n.to_f64()
        .and_then(serde_json::Number::from_f64)
        .map(serde_json::Value::Number)
        .ok_or_else(|| JsonError::IntOutOfRange(n.to_string()))
}

/// Create the `json` module
pub fn new_module() -> Module {
    let mut module = Module::new("json");
    module.insert("decode", decode());
    module.insert("encode", encode());
    module
}

/// The `json.decode` builtin
pub fn decode() -> Builtin {
    Builtin::new("json.decode", json_decode)
}

/// The `json.encode` builtin
pub fn encode() -> Builtin {
    Builtin::new("json.encode", json_encode)
}

fn json_decode(f: &Builtin, args: &[Value], kwargs: &[(String, Value)]) -> ScriptResult<Value> {
    let [text] = unpack_positional_args::<1>(f.name(), args, kwargs)?;
    let text = expect_string(f.name(), 1, text)?;
    JSONObject::parse(text).map_err(|e| {
        debug!(error = %e, "json decode failed");
        ScriptError::from(e).in_function(f.name())
    })
}

fn json_encode(f: &Builtin, args: &[Value], kwargs: &[(String, Value)]) -> ScriptResult<Value> {
    let [value] = unpack_positional_args::<1>(f.name(), args, kwargs)?;
    JSONObject::stringify(value)
        .map(Value::String)
        .map_err(|e| {
            debug!(error = %e, "json encode failed");
            ScriptError::from(e).in_function(f.name())
        })
}
