//! Full pipeline tests: YAML text through the predeclared modules and back.

use builtins::predeclared;
use core_types::{ErrorKind, Value};
use integration_tests::call1;

fn s(text: &str) -> Value {
    Value::string(text)
}

#[test]
fn test_decode_hello_world() {
    let value = call1("yaml.decode", s("hello:\n- world\n")).unwrap();
    let expected = Value::dict_from(vec![(s("hello"), Value::list(vec![s("world")]))]).unwrap();
    assert_eq!(value, expected);
}

#[test]
fn test_encode_hello_world() {
    let value = Value::dict_from(vec![(s("hello"), Value::list(vec![s("world")]))]).unwrap();
    let text = call1("yaml.encode", value).unwrap();
    assert_eq!(text, s("hello:\n- world\n"));
}

#[test]
fn test_decode_scalar_kinds() {
    let value = call1("yaml.decode", s("a: 1\nb: 2.5\nc: true\nd: null\n")).unwrap();

    let a = value.dict_get(&s("a")).unwrap();
    let b = value.dict_get(&s("b")).unwrap();
    assert!(matches!(a, Value::Int(_)));
    assert!(matches!(b, Value::Float(_)));
    assert_eq!(a.as_i64(), Some(1));
    assert_eq!(b.as_float(), Some(2.5));
    assert_eq!(value.dict_get(&s("c")), Some(Value::Bool(true)));
    assert_eq!(value.dict_get(&s("d")), Some(Value::None));
}

#[test]
fn test_yaml_round_trip_through_json() {
    let source = "name: svc\nreplicas: 3\nlabels:\n  tier: web\n";
    let value = call1("yaml.decode", s(source)).unwrap();

    let json = call1("json.encode", value.clone()).unwrap();
    assert_eq!(json, s(r#"{"labels":{"tier":"web"},"name":"svc","replicas":3}"#));

    let back = call1("json.decode", json).unwrap();
    assert_eq!(back, value);
}

#[test]
fn test_encode_then_decode_preserves_structure() {
    let inner = Value::dict_from(vec![(s("x"), Value::float(0.5)), (s("y"), Value::None)]).unwrap();
    let value = Value::list(vec![Value::int(-7), s("text"), inner, Value::list(vec![])]);

    let text = call1("yaml.encode", value.clone()).unwrap();
    let back = call1("yaml.decode", text).unwrap();

    assert_eq!(back, value);
}

#[test]
fn test_list_key_is_rejected() {
    let err = call1("yaml.decode", s("? [a, b]\n: 1\n")).unwrap_err();
    assert_eq!(err.kind, ErrorKind::TypeError);
    assert!(err.message.starts_with("yaml.decode: sequence"));
    assert!(err.message.ends_with("is not a supported key type"));
}

#[test]
fn test_encode_rejects_int_key() {
    let value = Value::dict_from(vec![(Value::int(1), s("one"))]).unwrap();
    let err = call1("yaml.encode", value).unwrap_err();
    assert_eq!(err.kind, ErrorKind::ValueError);
}

#[test]
fn test_legacy_aliases_share_callables() {
    let modules = predeclared();
    let yaml = &modules["yaml"];

    assert_eq!(yaml.get("marshal"), yaml.get("encode"));
    assert_eq!(yaml.get("unmarshal"), yaml.get("decode"));

    let via_alias = yaml.call("unmarshal", &[s("[1, 2]")], &[]).unwrap();
    let direct = yaml.call("decode", &[s("[1, 2]")], &[]).unwrap();
    assert_eq!(via_alias, direct);
}

#[test]
fn test_calling_convention() {
    let err = builtins::call_native_function("yaml.decode", &[s("a"), s("b")], &[]).unwrap_err();
    assert_eq!(err.kind, ErrorKind::ArgumentError);

    let err = builtins::call_native_function(
        "yaml.encode",
        &[Value::None],
        &[("value".to_string(), Value::None)],
    )
    .unwrap_err();
    assert_eq!(err.kind, ErrorKind::ArgumentError);
}
