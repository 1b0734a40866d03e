//! End-to-End CLI Integration Tests
//!
//! Tests the complete bridge through the yaml_cli Runtime API, from a file
//! on disk to the text the command prints.

use std::fs;

use yaml_cli::{Command, Runtime};

fn write_input(dir: &tempfile::TempDir, name: &str, contents: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_e2e_fmt_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_input(&dir, "in.yaml", "b: [x, {k: 1}]\na: 2.0\n");
    let runtime = Runtime::default();

    let first = runtime.execute(&Command::Fmt { path }).unwrap();
    let again = write_input(&dir, "again.yaml", &first);
    let second = runtime.execute(&Command::Fmt { path: again }).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_e2e_aliases_expand_and_double_angle_stays_a_key() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_input(
        &dir,
        "anchors.yaml",
        "base: &base\n  a: 1\nderived:\n  <<: *base\n  b: 2\n",
    );
    let runtime = Runtime::default();

    let output = runtime.execute(&Command::Json { path }).unwrap();

    assert_eq!(
        output,
        "{\"base\":{\"a\":1},\"derived\":{\"<<\":{\"a\":1},\"b\":2}}\n"
    );
}

#[test]
fn test_e2e_decode_prints_repr() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_input(&dir, "scalars.yaml", "[1, 1.5, true, ~, text]\n");
    let runtime = Runtime::default();

    let output = runtime.execute(&Command::Decode { path }).unwrap();

    assert_eq!(output, "[1, 1.5, True, None, \"text\"]\n");
}

#[test]
fn test_e2e_malformed_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_input(&dir, "bad.yaml", "key: [unterminated\n");
    let runtime = Runtime::default();

    let err = runtime.execute(&Command::Fmt { path }).unwrap_err();

    assert!(err.to_string().starts_with("SyntaxError: yaml.decode: "));
}
