//! Native modules and the builtin calling convention
//!
//! A [`Module`] is a named set of [`Builtin`] members, installed into the
//! runtime's predeclared environment. Several member names may resolve to the
//! same builtin, which is how deprecated aliases are kept.

use std::collections::BTreeMap;
use std::fmt;

use core_types::{ScriptError, ScriptResult, Value};

/// Signature of a native function body.
///
/// Receives the builtin itself (for its name), the positional arguments and
/// the keyword arguments of the call.
pub type NativeFn = fn(&Builtin, &[Value], &[(String, Value)]) -> ScriptResult<Value>;

/// A native function callable from scripts
#[derive(Clone, Copy)]
pub struct Builtin {
    name: &'static str,
    func: NativeFn,
}

impl Builtin {
    /// Create a builtin with a qualified name such as `yaml.decode`
    pub const fn new(name: &'static str, func: NativeFn) -> Self {
        Builtin { name, func }
    }

    /// The qualified name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Invoke the builtin
    pub fn call(&self, args: &[Value], kwargs: &[(String, Value)]) -> ScriptResult<Value> {
        (self.func)(self, args, kwargs)
    }

    /// The runtime value that refers to this builtin
    pub fn to_value(&self) -> Value {
        Value::NativeFunction(self.name.to_string())
    }
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Builtin").field(&self.name).finish()
    }
}

impl PartialEq for Builtin {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// A named collection of builtins
#[derive(Debug, Clone)]
pub struct Module {
    name: String,
    members: BTreeMap<String, Builtin>,
}

impl Module {
    /// Create an empty module
    pub fn new(name: impl Into<String>) -> Self {
        Module {
            name: name.into(),
            members: BTreeMap::new(),
        }
    }

    /// The module name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add or replace a member
    pub fn insert(&mut self, member: impl Into<String>, builtin: Builtin) {
        self.members.insert(member.into(), builtin);
    }

    /// Look up a member
    pub fn get(&self, member: &str) -> Option<&Builtin> {
        self.members.get(member)
    }

    /// Member names in sorted order
    pub fn member_names(&self) -> impl Iterator<Item = &str> {
        self.members.keys().map(String::as_str)
    }

    /// Runtime value for a member
    pub fn member_value(&self, member: &str) -> Option<Value> {
        self.get(member).map(Builtin::to_value)
    }

    /// Call a member by name.
    ///
    /// # Errors
    /// Returns a `TypeError` if the module has no such member, otherwise
    /// whatever the builtin returns.
    pub fn call(&self, member: &str, args: &[Value], kwargs: &[(String, Value)]) -> ScriptResult<Value> {
        let builtin = self.get(member).ok_or_else(|| {
            ScriptError::type_error(format!(
                "module {} has no .{} field or method",
                self.name, member
            ))
        })?;
        builtin.call(args, kwargs)
    }
}

/// Check that a call passed exactly `N` positional arguments and no keywords.
///
/// # Examples
///
/// ```
/// use builtins::module::unpack_positional_args;
/// use core_types::Value;
///
/// let args = vec![Value::string("a: 1")];
/// let [text] = unpack_positional_args::<1>("yaml.decode", &args, &[]).unwrap();
/// assert_eq!(text.as_str(), Some("a: 1"));
///
/// let err = unpack_positional_args::<1>("yaml.decode", &[], &[]).unwrap_err();
/// assert_eq!(err.message, "yaml.decode: got 0 arguments, want 1");
/// ```
pub fn unpack_positional_args<'a, const N: usize>(
    fn_name: &str,
    args: &'a [Value],
    kwargs: &[(String, Value)],
) -> ScriptResult<[&'a Value; N]> {
    if !kwargs.is_empty() {
        return Err(ScriptError::argument_error(format!(
            "{}: unexpected keyword arguments",
            fn_name
        )));
    }
    if args.len() != N {
        return Err(ScriptError::argument_error(format!(
            "{}: got {} arguments, want {}",
            fn_name,
            args.len(),
            N
        )));
    }
    Ok(std::array::from_fn(|i| &args[i]))
}

/// Require a string argument. `index` is 1-based, as reported to scripts.
pub fn expect_string<'a>(fn_name: &str, index: usize, value: &'a Value) -> ScriptResult<&'a str> {
    value.as_str().ok_or_else(|| {
        ScriptError::type_error(format!(
            "{}: for parameter {}: got {}, want string",
            fn_name,
            index,
            value.type_name()
        ))
    })
}
