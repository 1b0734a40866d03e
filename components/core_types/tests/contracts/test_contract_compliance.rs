//! Contract compliance tests for core_types
//!
//! These tests pin the value capability set the conversion layer relies on.

use core_types::{Dict, ErrorKind, ScriptError, Value};

#[cfg(test)]
mod value_contract_tests {
    use super::*;

    /// Contract: every scalar kind has its own variant
    #[test]
    fn test_value_has_scalar_variants() {
        let _: Value = Value::None;
        let _: Value = Value::Bool(true);
        let _: Value = Value::Int(0.into());
        let _: Value = Value::Float(0.0);
        let _: Value = Value::String(String::new());
    }

    /// Contract: list and dict are shared mutable containers
    #[test]
    fn test_containers_are_shared() {
        let dict = Value::new_dict();
        let alias = dict.clone();
        alias.dict_set(Value::string("k"), Value::None).unwrap();
        assert_eq!(dict.dict_len(), 1);
    }

    /// Contract: integers keep arbitrary precision
    #[test]
    fn test_int_is_arbitrary_precision() {
        let big: num_bigint::BigInt = "123456789012345678901234567890".parse().unwrap();
        let value = Value::Int(big.clone());
        assert_eq!(value.as_int(), Some(&big));
    }

    #[test]
    fn test_only_containers_are_unhashable() {
        assert!(Value::None.is_hashable());
        assert!(Value::Bool(true).is_hashable());
        assert!(Value::int(1).is_hashable());
        assert!(Value::float(1.5).is_hashable());
        assert!(Value::string("s").is_hashable());
        assert!(!Value::list(vec![]).is_hashable());
        assert!(!Value::dict(Dict::new()).is_hashable());
    }
}

#[cfg(test)]
mod script_error_contract_tests {
    use super::*;

    #[test]
    fn test_script_error_has_kind_and_message_fields() {
        let error = ScriptError {
            kind: ErrorKind::ValueError,
            message: "test".to_string(),
        };
        assert_eq!(error.kind, ErrorKind::ValueError);
        assert_eq!(error.message, "test");
    }
}
