use std::fs;

use bakehook::config::{load_config, parse_config, Config};
use bakehook::error::Error;
use serde_json::json;
use tempfile::TempDir;

#[test]
fn test_missing_config_uses_defaults() {
    let template_dir = TempDir::new().unwrap();
    assert_eq!(load_config(template_dir.path()).unwrap(), Config::default());
}

#[test]
fn test_load_yaml_config() {
    let template_dir = TempDir::new().unwrap();
    fs::write(
        template_dir.path().join("bakehook.yml"),
        "serializers:\n  yaml: yaml\nrun_hooks_in_place: true\ninterpreters:\n  rb: ruby\n",
    )
    .unwrap();

    let config = load_config(template_dir.path()).unwrap();
    assert_eq!(config.serializers["yaml"], "yaml");
    assert!(config.run_hooks_in_place);
    assert_eq!(config.interpreters["rb"], "ruby");
}

#[test]
fn test_json_config_takes_precedence() {
    let template_dir = TempDir::new().unwrap();
    fs::write(
        template_dir.path().join("bakehook.json"),
        r#"{"run_hooks_in_place": true}"#,
    )
    .unwrap();
    fs::write(template_dir.path().join("bakehook.yaml"), "run_hooks_in_place: false\n").unwrap();

    assert!(load_config(template_dir.path()).unwrap().run_hooks_in_place);
}

#[test]
fn test_invalid_config() {
    match parse_config("serializers: [unclosed") {
        Err(Error::ConfigError(msg)) => assert!(msg.contains("Invalid configuration format")),
        other => panic!("Expected ConfigError, got {:?}", other),
    }
}

#[test]
fn test_build_facade_registers_serializers() {
    let config =
        parse_config(r#"{"serializers": {"yaml": "yaml", "legacy.json": "json"}}"#).unwrap();
    let mut facade = config.build_facade().unwrap();
    assert_eq!(facade.types().collect::<Vec<_>>(), vec!["json", "yaml", "legacy.json"]);

    let context = json!({"my_key": "my_val"}).as_object().cloned().unwrap();
    let serialized = facade.serialize(&context, Some("yaml")).unwrap();
    assert_eq!(facade.deserialize(&serialized).unwrap(), context);
    assert_eq!(facade.get_type(), "yaml");
}

#[test]
fn test_build_facade_rejects_unknown_codec() {
    let config = parse_config(r#"{"serializers": {"custom": "pickle"}}"#).unwrap();
    assert!(matches!(config.build_facade(), Err(Error::InvalidType { .. })));
}

#[test]
fn test_build_facade_rejects_invalid_tag() {
    let config = parse_config(r#"{"serializers": {"9yaml": "yaml"}}"#).unwrap();
    assert!(matches!(config.build_facade(), Err(Error::InvalidSerializerType { .. })));
}
