//! Contract tests for YAMLObject, Decoder and Encoder

use builtins::yaml::{Decoder, Encoder, YAMLObject};
use builtins::ConversionError;
use core_types::Value;
use serde_yaml::Value as YamlValue;

fn yaml(text: &str) -> YamlValue {
    serde_yaml::from_str(text).unwrap()
}

#[test]
fn test_decode_hello_world() {
    let value = YAMLObject::decode("hello:\n- world\n").unwrap();
    let expected = Value::dict_from(vec![(
        Value::string("hello"),
        Value::list(vec![Value::string("world")]),
    )])
    .unwrap();
    assert_eq!(value, expected);
}

#[test]
fn test_encode_hello_world() {
    let value = Value::dict_from(vec![(
        Value::string("hello"),
        Value::list(vec![Value::string("world")]),
    )])
    .unwrap();
    assert_eq!(YAMLObject::encode(&value).unwrap(), "hello:\n- world\n");
}

#[test]
fn test_decode_scalar_example() {
    let value = YAMLObject::decode("a: 1\nb: 2.5\nc: true\nd: null\n").unwrap();
    assert_eq!(value.dict_len(), 4);
    assert_eq!(value.dict_get(&Value::string("a")).unwrap().as_i64(), Some(1));
    assert_eq!(value.dict_get(&Value::string("b")).unwrap().as_float(), Some(2.5));
    assert_eq!(value.dict_get(&Value::string("c")), Some(Value::Bool(true)));
    assert!(value.dict_get(&Value::string("d")).unwrap().is_none());
}

#[test]
fn test_decoder_scalars_map_one_to_one() {
    assert!(Decoder::convert(&YamlValue::Null).unwrap().is_none());
    assert_eq!(Decoder::convert(&yaml("false")).unwrap(), Value::Bool(false));
    assert!(matches!(Decoder::convert(&yaml("7")).unwrap(), Value::Int(_)));
    assert!(matches!(Decoder::convert(&yaml("-7")).unwrap(), Value::Int(_)));
    assert!(matches!(Decoder::convert(&yaml("7.0")).unwrap(), Value::Float(_)));
    assert_eq!(
        Decoder::convert(&yaml("'héllo wörld'")).unwrap(),
        Value::string("héllo wörld")
    );
}

#[test]
fn test_decoder_preserves_list_order() {
    let value = Decoder::convert(&yaml("[3, 1, 2, [b, a]]")).unwrap();
    assert_eq!(value.to_string(), r#"[3, 1, 2, ["b", "a"]]"#);
}

#[test]
fn test_decoder_keeps_every_pair() {
    let value = Decoder::convert(&yaml("{z: 1, a: [x], m: {k: v}}")).unwrap();
    assert_eq!(value.dict_len(), 3);
    assert_eq!(value.dict_get(&Value::string("z")), Some(Value::int(1)));
    assert_eq!(
        value.dict_get(&Value::string("a")),
        Some(Value::list(vec![Value::string("x")]))
    );
    let inner = value.dict_get(&Value::string("m")).unwrap();
    assert_eq!(inner.dict_get(&Value::string("k")), Some(Value::string("v")));
}

#[test]
fn test_decoder_rejects_list_key_without_dropping_it() {
    let err = Decoder::convert(&yaml("? [1, 2]\n: x\nok: y\n")).unwrap_err();
    assert!(matches!(err, ConversionError::UnsupportedKey { .. }));
}

#[test]
fn test_decoder_scalar_path_rejects_compounds() {
    assert!(Decoder::convert_scalar(&yaml("[1]")).is_none());
    assert!(Decoder::convert_scalar(&yaml("{a: 1}")).is_none());
    assert!(Decoder::convert_scalar(&yaml("!t x")).is_none());
}

#[test]
fn test_encoder_top_level_scalars() {
    assert_eq!(Encoder::convert(&Value::None).unwrap(), "null\n");
    assert_eq!(Encoder::convert(&Value::int(7)).unwrap(), "7\n");
    assert_eq!(Encoder::convert(&Value::string("x")).unwrap(), "x\n");
}

#[test]
fn test_encoder_quotes_ambiguous_strings() {
    let value = Value::list(vec![Value::string("true"), Value::string("1")]);
    let text = Encoder::convert(&value).unwrap();
    let back = YAMLObject::decode(&text).unwrap();
    assert_eq!(back, value);
}

#[test]
fn test_encoder_rejects_native_function() {
    let value = Value::list(vec![Value::NativeFunction("yaml.decode".into())]);
    assert!(matches!(
        Encoder::convert(&value),
        Err(ConversionError::Json(_))
    ));
}

#[test]
fn test_encoder_rejects_list_keyed_dict() {
    // Lists are unhashable, so the closest runtime shape is a non-string key
    let value = Value::dict_from(vec![(Value::float(1.5), Value::None)]).unwrap();
    let err = Encoder::convert(&value).unwrap_err();
    assert_eq!(err.to_string(), "dict has float key, want string");
}

#[test]
fn test_decode_rejects_multiple_documents() {
    assert!(matches!(
        YAMLObject::decode("a: 1\n---\nb: 2\n"),
        Err(ConversionError::Parse(_))
    ));
}

#[test]
fn test_decode_expands_aliases() {
    let value = YAMLObject::decode("x: &v [1, 2]\ny: *v\n").unwrap();
    assert_eq!(
        value.dict_get(&Value::string("x")),
        value.dict_get(&Value::string("y"))
    );
}
