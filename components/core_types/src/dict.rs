//! Insertion-ordered dictionary for runtime mappings.

use std::fmt;
use std::hash::{Hash, Hasher};

use indexmap::{Equivalent, IndexMap};
use num_bigint::BigInt;
use num_traits::FromPrimitive;

use crate::error::{ScriptError, ScriptResult};
use crate::value::Value;

/// An ordered mapping from hashable [`Value`] keys to values.
///
/// Entries iterate in insertion order. Re-inserting an equal key replaces
/// the value but keeps the original position.
///
/// # Examples
///
/// ```
/// use core_types::{Dict, Value};
///
/// let mut dict = Dict::new();
/// dict.set_key(Value::int(1), Value::string("one")).unwrap();
/// dict.set_key(Value::float(1.0), Value::string("uno")).unwrap();
///
/// // 1 and 1.0 are the same key
/// assert_eq!(dict.len(), 1);
/// assert_eq!(dict.get(&Value::int(1)), Some(&Value::string("uno")));
///
/// assert!(dict.set_key(Value::list(vec![]), Value::None).is_err());
/// ```
#[derive(Clone, Default)]
pub struct Dict {
    entries: IndexMap<DictKey, Value>,
}

impl Dict {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Dict {
            entries: IndexMap::new(),
        }
    }

    /// Create an empty dictionary with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Dict {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Insert or replace the value stored under `key`.
    ///
    /// # Errors
    /// Returns a `TypeError` if `key` is not hashable (a list or dict).
    pub fn set_key(&mut self, key: Value, value: Value) -> ScriptResult<()> {
        if !key.is_hashable() {
            return Err(ScriptError::type_error(format!(
                "unhashable type: {}",
                key.type_name()
            )));
        }
        self.entries.insert(DictKey(key), value);
        Ok(())
    }

    /// Insert or replace the value stored under a string key
    pub fn set_str_key(&mut self, key: impl Into<String>, value: Value) {
        self.entries.insert(DictKey(Value::String(key.into())), value);
    }

    /// Look up the value stored under `key`
    pub fn get(&self, key: &Value) -> Option<&Value> {
        if !key.is_hashable() {
            return None;
        }
        self.entries.get(&KeyRef(key))
    }

    /// Check whether `key` is present
    pub fn contains_key(&self, key: &Value) -> bool {
        self.get(key).is_some()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &Value> {
        self.entries.keys().map(|k| &k.0)
    }

    /// Values in insertion order
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.entries.iter().map(|(k, v)| (&k.0, v))
    }
}

/// A stored key. Only hashable values are ever wrapped.
#[derive(Clone)]
struct DictKey(Value);

/// A borrowed key used for lookups without cloning.
struct KeyRef<'a>(&'a Value);

/// Hash consistent with [`Value::equals`]: an integral float hashes like the
/// equal int, so `1` and `1.0` land in the same slot.
fn hash_key<H: Hasher>(value: &Value, state: &mut H) {
    match value {
        Value::None => 0u8.hash(state),
        Value::Bool(b) => {
            1u8.hash(state);
            b.hash(state);
        }
        Value::Int(n) => {
            2u8.hash(state);
            n.hash(state);
        }
        Value::Float(f) => match BigInt::from_f64(*f).filter(|_| f.fract() == 0.0) {
            Some(n) => {
                2u8.hash(state);
                n.hash(state);
            }
            None => {
                3u8.hash(state);
                f.to_bits().hash(state);
            }
        },
        Value::String(s) => {
            4u8.hash(state);
            s.hash(state);
        }
        Value::NativeFunction(name) => {
            5u8.hash(state);
            name.hash(state);
        }
        Value::List(_) | Value::Dict(_) => 6u8.hash(state),
    }
}

impl Hash for DictKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_key(&self.0, state);
    }
}

impl PartialEq for DictKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.equals(&other.0)
    }
}

impl Eq for DictKey {}

impl Hash for KeyRef<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_key(self.0, state);
    }
}

impl Equivalent<DictKey> for KeyRef<'_> {
    fn equivalent(&self, key: &DictKey) -> bool {
        self.0.equals(&key.0)
    }
}

impl PartialEq for Dict {
    /// Two dictionaries are equal when they hold the same key/value pairs,
    /// regardless of insertion order.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(k, v)| other.get(k).is_some_and(|o| v.equals(o)))
    }
}

impl fmt::Debug for Dict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
