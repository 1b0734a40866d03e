//! Runtime orchestration for the CLI
//!
//! The Runtime holds the predeclared `json` and `yaml` modules and drives
//! them the way a script would: by calling module members with runtime
//! values.

use std::collections::BTreeMap;
use std::io::Read;

use builtins::module::Module;
use builtins::yaml::ModuleOptions;
use builtins::{json, yaml};
use core_types::{ScriptError, Value};
use tracing::{debug, info};

use crate::cli::Command;
use crate::error::{CliError, CliResult};

/// Runtime that routes CLI commands through the data modules
pub struct Runtime {
    /// Predeclared modules, keyed by name
    modules: BTreeMap<String, Module>,
}

impl Runtime {
    /// Create a new runtime instance
    ///
    /// # Example
    /// ```
    /// use builtins::yaml::ModuleOptions;
    /// use yaml_cli::Runtime;
    ///
    /// let runtime = Runtime::new(ModuleOptions::default());
    /// assert!(runtime.has_member("yaml", "unmarshal"));
    /// ```
    pub fn new(options: ModuleOptions) -> Self {
        let mut modules = BTreeMap::new();
        for module in [json::new_module(), yaml::new_module_with(options)] {
            modules.insert(module.name().to_string(), module);
        }
        Self { modules }
    }

    /// Whether `module.member` is defined
    pub fn has_member(&self, module: &str, member: &str) -> bool {
        self.modules
            .get(module)
            .is_some_and(|m| m.get(member).is_some())
    }

    /// Call `module.member(arg)`
    ///
    /// # Errors
    /// Returns `CliError::Script` if the module is unknown or the call fails
    pub fn call(&self, module: &str, member: &str, arg: Value) -> CliResult<Value> {
        let m = self
            .modules
            .get(module)
            .ok_or_else(|| ScriptError::type_error(format!("undefined: {}", module)))?;
        debug!(module, member, "calling builtin");
        Ok(m.call(member, &[arg], &[])?)
    }

    /// Decode YAML text into a runtime value
    pub fn decode_string(&self, source: &str) -> CliResult<Value> {
        self.call("yaml", "decode", Value::string(source))
    }

    /// Decode the YAML file at `path`; `-` reads stdin
    ///
    /// # Errors
    /// Returns `CliError` if the file cannot be read or decoding fails
    pub fn decode_file(&self, path: &str) -> CliResult<Value> {
        let source = read_source(path)?;
        self.decode_string(&source)
    }

    /// Canonical YAML for a runtime value
    pub fn fmt(&self, value: Value) -> CliResult<String> {
        self.call("yaml", "encode", value).and_then(into_text)
    }

    /// JSON for a runtime value
    pub fn to_json(&self, value: Value) -> CliResult<String> {
        self.call("json", "encode", value).and_then(into_text)
    }

    /// Run a subcommand and return what it prints
    pub fn execute(&self, command: &Command) -> CliResult<String> {
        let value = self.decode_file(command.path())?;
        info!(path = command.path(), kind = value.type_name(), "decoded input");
        match command {
            Command::Decode { .. } => Ok(format!("{}\n", value)),
            Command::Fmt { .. } => self.fmt(value),
            Command::Json { .. } => self.to_json(value).map(|json| json + "\n"),
        }
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new(ModuleOptions::default())
    }
}

fn read_source(path: &str) -> CliResult<String> {
    if path == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        return Ok(source);
    }
    Ok(std::fs::read_to_string(path)?)
}

fn into_text(value: Value) -> CliResult<String> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(CliError::Script(ScriptError::internal_error(format!(
            "encoder returned {}, want string",
            other.type_name()
        )))),
    }
}
