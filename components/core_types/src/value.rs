//! Runtime value representation.
//!
//! This module provides the core `Value` enum that represents every value a
//! script can observe. Scalars are stored inline; lists and dicts are shared,
//! mutable containers behind `Rc<RefCell<..>>` so that aliasing behaves the
//! way scripts expect.

use num_bigint::BigInt;
use num_traits::{FromPrimitive, ToPrimitive, Zero};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::dict::Dict;
use crate::error::{ScriptError, ScriptResult};

/// Represents any runtime value.
///
/// # Examples
///
/// ```
/// use core_types::Value;
///
/// let none = Value::None;
/// let number = Value::int(42);
/// let float = Value::float(2.5);
///
/// assert!(!none.is_truthy());
/// assert!(number.is_truthy());
/// assert_eq!(number.type_name(), "int");
/// assert_eq!(float.to_string(), "2.5");
/// ```
#[derive(Clone)]
pub enum Value {
    /// The absent value
    None,
    /// Boolean (True or False)
    Bool(bool),
    /// Arbitrary precision integer
    Int(BigInt),
    /// IEEE 754 double-precision floating point
    Float(f64),
    /// UTF-8 string
    String(std::string::String),
    /// Mutable ordered sequence
    List(Rc<RefCell<Vec<Value>>>),
    /// Mutable ordered mapping
    Dict(Rc<RefCell<Dict>>),
    /// Native function reference by qualified name (e.g. `yaml.decode`)
    NativeFunction(std::string::String),
}

impl Value {
    /// Create an integer value
    pub fn int(n: impl Into<BigInt>) -> Self {
        Value::Int(n.into())
    }

    /// Create a float value
    pub fn float(n: f64) -> Self {
        Value::Float(n)
    }

    /// Create a string value
    pub fn string(s: impl Into<std::string::String>) -> Self {
        Value::String(s.into())
    }

    /// Create a list from values
    pub fn list(values: Vec<Value>) -> Self {
        Value::List(Rc::new(RefCell::new(values)))
    }

    /// Wrap a dictionary
    pub fn dict(dict: Dict) -> Self {
        Value::Dict(Rc::new(RefCell::new(dict)))
    }

    /// Create an empty dictionary
    pub fn new_dict() -> Self {
        Value::dict(Dict::new())
    }

    /// Build a dictionary from key/value pairs.
    ///
    /// # Errors
    /// Returns a `TypeError` if any key is unhashable.
    pub fn dict_from<I>(entries: I) -> ScriptResult<Self>
    where
        I: IntoIterator<Item = (Value, Value)>,
    {
        let mut dict = Dict::new();
        for (key, value) in entries {
            dict.set_key(key, value)?;
        }
        Ok(Value::dict(dict))
    }

    /// The type name scripts see for this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::None => "NoneType",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Dict(_) => "dict",
            Value::NativeFunction(_) => "builtin_function_or_method",
        }
    }

    /// Whether the value may be used as a dict key.
    ///
    /// Mutable containers are unhashable.
    pub fn is_hashable(&self) -> bool {
        !matches!(self, Value::List(_) | Value::Dict(_))
    }

    /// Returns whether this value is truthy.
    ///
    /// `None`, `False`, zero, the empty string and empty containers are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::None => false,
            Value::Bool(b) => *b,
            Value::Int(n) => !n.is_zero(),
            Value::Float(n) => *n != 0.0,
            Value::String(s) => !s.is_empty(),
            Value::List(list) => !list.borrow().is_empty(),
            Value::Dict(dict) => !dict.borrow().is_empty(),
            Value::NativeFunction(_) => true,
        }
    }

    /// Check if value is None
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Get as boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as integer
    pub fn as_int(&self) -> Option<&BigInt> {
        match self {
            Value::Int(n) => Some(n),
            _ => None,
        }
    }

    /// Get as integer if it fits in an i64
    pub fn as_i64(&self) -> Option<i64> {
        self.as_int().and_then(ToPrimitive::to_i64)
    }

    /// Get as float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get a copy of the list elements
    pub fn list_elements(&self) -> Option<Vec<Value>> {
        match self {
            Value::List(list) => Some(list.borrow().clone()),
            _ => None,
        }
    }

    /// Get list length (0 for non-lists)
    pub fn list_len(&self) -> usize {
        match self {
            Value::List(list) => list.borrow().len(),
            _ => 0,
        }
    }

    /// Append to a list.
    ///
    /// # Errors
    /// Returns a `TypeError` if the value is not a list.
    pub fn list_append(&self, value: Value) -> ScriptResult<()> {
        match self {
            Value::List(list) => {
                list.borrow_mut().push(value);
                Ok(())
            }
            other => Err(ScriptError::type_error(format!(
                "{} has no method append",
                other.type_name()
            ))),
        }
    }

    /// Get dict length (0 for non-dicts)
    pub fn dict_len(&self) -> usize {
        match self {
            Value::Dict(dict) => dict.borrow().len(),
            _ => 0,
        }
    }

    /// Look up a dict entry
    pub fn dict_get(&self, key: &Value) -> Option<Value> {
        match self {
            Value::Dict(dict) => dict.borrow().get(key).cloned(),
            _ => None,
        }
    }

    /// Insert into a dict.
    ///
    /// # Errors
    /// Returns a `TypeError` if the value is not a dict or the key is unhashable.
    pub fn dict_set(&self, key: Value, value: Value) -> ScriptResult<()> {
        match self {
            Value::Dict(dict) => dict.borrow_mut().set_key(key, value),
            other => Err(ScriptError::type_error(format!(
                "{} does not support item assignment",
                other.type_name()
            ))),
        }
    }

    /// Equality as scripts observe it.
    ///
    /// Ints and floats compare numerically; bools are not numbers. Lists
    /// compare element-wise and dicts compare as sets of entries.
    pub fn equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::None, Value::None) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(i), Value::Float(f)) | (Value::Float(f), Value::Int(i)) => {
                int_equals_float(i, *f)
            }
            (Value::String(a), Value::String(b)) => a == b,
            (Value::List(a), Value::List(b)) => {
                if Rc::ptr_eq(a, b) {
                    return true;
                }
                let (a, b) = (a.borrow(), b.borrow());
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.equals(y))
            }
            (Value::Dict(a), Value::Dict(b)) => Rc::ptr_eq(a, b) || *a.borrow() == *b.borrow(),
            (Value::NativeFunction(a), Value::NativeFunction(b)) => a == b,
            _ => false,
        }
    }

    fn write_repr(&self, f: &mut fmt::Formatter<'_>, path: &mut Vec<usize>) -> fmt::Result {
        match self {
            Value::None => write!(f, "None"),
            Value::Bool(true) => write!(f, "True"),
            Value::Bool(false) => write!(f, "False"),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(n) => {
                if n.is_nan() {
                    write!(f, "nan")
                } else if n.is_infinite() {
                    write!(f, "{}inf", if n.is_sign_positive() { "+" } else { "-" })
                } else {
                    write!(f, "{:?}", n)
                }
            }
            Value::String(s) => write!(f, "{:?}", s),
            Value::List(list) => {
                let id = Rc::as_ptr(list) as usize;
                if path.contains(&id) {
                    return write!(f, "[...]");
                }
                path.push(id);
                write!(f, "[")?;
                for (i, element) in list.borrow().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    element.write_repr(f, path)?;
                }
                path.pop();
                write!(f, "]")
            }
            Value::Dict(dict) => {
                let id = Rc::as_ptr(dict) as usize;
                if path.contains(&id) {
                    return write!(f, "{{...}}");
                }
                path.push(id);
                write!(f, "{{")?;
                for (i, (key, value)) in dict.borrow().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    key.write_repr(f, path)?;
                    write!(f, ": ")?;
                    value.write_repr(f, path)?;
                }
                path.pop();
                write!(f, "}}")
            }
            Value::NativeFunction(name) => write!(f, "<built-in function {}>", name),
        }
    }
}

fn int_equals_float(i: &BigInt, f: f64) -> bool {
    if !f.is_finite() || f.fract() != 0.0 {
        return false;
    }
    BigInt::from_f64(f).is_some_and(|g| &g == i)
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => write!(f, "None"),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Int(n) => f.debug_tuple("Int").field(n).finish(),
            Value::Float(n) => f.debug_tuple("Float").field(n).finish(),
            Value::String(s) => f.debug_tuple("String").field(s).finish(),
            Value::List(_) | Value::Dict(_) => write!(f, "{}", self),
            Value::NativeFunction(name) => f.debug_tuple("NativeFunction").field(name).finish(),
        }
    }
}

/// Script-style repr.
///
/// # Examples
///
/// ```
/// use core_types::Value;
///
/// assert_eq!(Value::None.to_string(), "None");
/// assert_eq!(Value::Bool(true).to_string(), "True");
/// assert_eq!(Value::float(1.0).to_string(), "1.0");
/// assert_eq!(Value::string("a").to_string(), "\"a\"");
/// ```
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_repr(f, &mut Vec::new())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::int(n)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::int(n)
    }
}

impl From<BigInt> for Value {
    fn from(n: BigInt) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<std::string::String> for Value {
    fn from(s: std::string::String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Value::list(values)
    }
}
