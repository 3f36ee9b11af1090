//! Pluggable context codecs.
//!
//! A serializer only turns a [`Context`] into a textual payload and back. The
//! `tag|payload$` framing is handled by
//! [`SerializationFacade`](crate::serialization::SerializationFacade), so new
//! formats can be added without touching envelope parsing.

use log::debug;

use crate::context::Context;
use crate::error::{Error, Result};

/// Codec capability required from everything registered in a facade.
///
/// Implementing this trait is the only way to take part in serialization; a
/// type that merely has methods with the same names is rejected by the
/// compiler:
///
/// ```compile_fail
/// use bakehook::context::Context;
/// use bakehook::serialization::SerializationFacade;
///
/// struct FakeSerializer;
///
/// impl FakeSerializer {
///     fn serialize(&self, _context: &Context) -> String {
///         "serialized".to_string()
///     }
///
///     fn deserialize(&self, _payload: &str) -> Context {
///         Context::new()
///     }
/// }
///
/// let mut facade = SerializationFacade::new();
/// facade.register("fake", FakeSerializer).unwrap();
/// ```
pub trait Serializer {
    /// Encodes a context into its payload representation.
    fn serialize(&self, context: &Context) -> Result<String>;

    /// Decodes a payload previously produced by [`Serializer::serialize`].
    fn deserialize(&self, payload: &str) -> Result<Context>;
}

/// JSON codec, the default serializer of every facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonSerializer;

impl JsonSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl Serializer for JsonSerializer {
    fn serialize(&self, context: &Context) -> Result<String> {
        serde_json::to_string(context).map_err(|e| Error::SerializationError(e.to_string()))
    }

    fn deserialize(&self, payload: &str) -> Result<Context> {
        serde_json::from_str(payload).map_err(|e| Error::SerializationError(e.to_string()))
    }
}

/// YAML codec.
///
/// Payloads are block-style YAML and therefore span several lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct YamlSerializer;

impl YamlSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl Serializer for YamlSerializer {
    fn serialize(&self, context: &Context) -> Result<String> {
        serde_yaml::to_string(context).map_err(|e| Error::SerializationError(e.to_string()))
    }

    fn deserialize(&self, payload: &str) -> Result<Context> {
        serde_yaml::from_str(payload).map_err(|e| Error::SerializationError(e.to_string()))
    }
}

/// Creates a built-in serializer from its codec name.
///
/// Used where serializers are chosen at runtime, e.g. from a template
/// configuration file.
///
/// # Arguments
/// * `name` - Codec name: `json` or `yaml`
///
/// # Errors
/// * `Error::InvalidType` if no `Serializer` implementation is known under `name`
pub fn serializer_from_name(name: &str) -> Result<Box<dyn Serializer>> {
    debug!("Resolving serializer codec '{}'", name);
    match name {
        "json" => Ok(Box::new(JsonSerializer::new())),
        "yaml" | "yml" => Ok(Box::new(YamlSerializer::new())),
        _ => Err(Error::InvalidType { expected: format!("Serializer (no codec named '{name}')") }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn context() -> Context {
        json!({"name": "demo", "nested": {"list": [1, 2, 3], "flag": true}})
            .as_object()
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_json_serializer_keeps_key_order() {
        let payload = JsonSerializer::new().serialize(&context()).unwrap();
        assert_eq!(payload, r#"{"name":"demo","nested":{"list":[1,2,3],"flag":true}}"#);
    }

    #[test]
    fn test_yaml_serializer_decodes_its_payload() {
        let serializer = YamlSerializer::new();
        let payload = serializer.serialize(&context()).unwrap();
        assert!(payload.contains("name: demo"));
        assert_eq!(serializer.deserialize(&payload).unwrap(), context());
    }

    #[test]
    fn test_json_serializer_rejects_non_object() {
        let result = JsonSerializer::new().deserialize("[1, 2]");
        assert!(matches!(result, Err(Error::SerializationError(_))));
    }

    #[test]
    fn test_serializer_from_name() {
        assert!(serializer_from_name("json").is_ok());
        assert!(serializer_from_name("yaml").is_ok());
        match serializer_from_name("pickle") {
            Err(Error::InvalidType { expected }) => assert!(expected.contains("Serializer")),
            _ => panic!("Expected InvalidType"),
        }
    }
}
