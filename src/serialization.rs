//! Serializer registry and envelope facade.
//!
//! [`SerializationFacade`] owns the tag → serializer mapping and the
//! "current type": the tag of the last successful [`deserialize`] call, used
//! when [`serialize`] is called without an explicit tag.
//!
//! The facade is plain owned state with no interior locking. Share it between
//! threads behind a `Mutex` if needed.
//!
//! [`serialize`]: SerializationFacade::serialize
//! [`deserialize`]: SerializationFacade::deserialize

use indexmap::IndexMap;
use log::debug;

use crate::constants::DEFAULT_SERIALIZER_TYPE;
use crate::context::Context;
use crate::envelope;
use crate::error::{Error, Result};
use crate::serializer::{serializer_from_name, JsonSerializer, Serializer};

/// Registry of serializers addressed by tag.
pub struct SerializationFacade {
    serializers: IndexMap<String, Box<dyn Serializer>>,
    current_type: String,
}

impl SerializationFacade {
    /// Creates a facade with only the default `json` serializer registered.
    pub fn new() -> Self {
        let mut serializers: IndexMap<String, Box<dyn Serializer>> = IndexMap::new();
        serializers.insert(DEFAULT_SERIALIZER_TYPE.to_string(), Box::new(JsonSerializer::new()));
        Self { serializers, current_type: DEFAULT_SERIALIZER_TYPE.to_string() }
    }

    /// Creates a facade seeded with extra serializers.
    ///
    /// The default `json` serializer stays registered unless `serializers`
    /// overrides it.
    ///
    /// # Errors
    /// * `Error::InvalidSerializerType` if a tag is malformed
    pub fn with_serializers<I, S>(serializers: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Box<dyn Serializer>)>,
        S: Into<String>,
    {
        let mut facade = Self::new();
        for (tag, serializer) in serializers {
            facade.register_boxed(tag, serializer)?;
        }
        Ok(facade)
    }

    /// Registers a serializer instance under `tag`, replacing any previous one.
    ///
    /// # Errors
    /// * `Error::InvalidSerializerType` if the tag is malformed; the registry is left unchanged
    pub fn register<S>(&mut self, tag: impl Into<String>, serializer: S) -> Result<()>
    where
        S: Serializer + 'static,
    {
        self.register_boxed(tag, Box::new(serializer))
    }

    /// Registers a default-constructed `S` under `tag`.
    pub fn register_default<S>(&mut self, tag: impl Into<String>) -> Result<()>
    where
        S: Serializer + Default + 'static,
    {
        self.register(tag, S::default())
    }

    /// Registers a built-in serializer chosen by codec name (`json`, `yaml`).
    ///
    /// # Errors
    /// * `Error::InvalidSerializerType` if the tag is malformed
    /// * `Error::InvalidType` if `codec` does not name a `Serializer` implementation
    pub fn register_named(&mut self, tag: impl Into<String>, codec: &str) -> Result<()> {
        let tag = tag.into();
        envelope::validate_tag(&tag)?;
        let serializer = serializer_from_name(codec)?;
        self.register_boxed(tag, serializer)
    }

    /// Registers an already boxed serializer under `tag`.
    pub fn register_boxed(
        &mut self,
        tag: impl Into<String>,
        serializer: Box<dyn Serializer>,
    ) -> Result<()> {
        let tag = tag.into();
        envelope::validate_tag(&tag)?;
        if self.serializers.insert(tag.clone(), serializer).is_some() {
            debug!("Replaced serializer '{}'", tag);
        } else {
            debug!("Registered serializer '{}'", tag);
        }
        Ok(())
    }

    /// Serializes `context` into a `tag|payload$` envelope.
    ///
    /// # Arguments
    /// * `context` - Context to serialize
    /// * `tag` - Serializer to use; the current type when `None`
    ///
    /// # Errors
    /// * `Error::UnknownSerializerType` if no serializer is registered under the tag
    pub fn serialize(&self, context: &Context, tag: Option<&str>) -> Result<String> {
        let tag = tag.unwrap_or(&self.current_type);
        let payload = self.serializer(tag)?.serialize(context)?;
        Ok(envelope::frame(tag, &payload))
    }

    /// Deserializes the last envelope found in `input`.
    ///
    /// Text around the envelope is ignored, so raw hook output can be passed
    /// as is. Earlier envelopes never stand in for the last one. When the
    /// payload holds `$` itself, the later terminators are tried longest
    /// first. On success the current type becomes the envelope's tag.
    ///
    /// # Errors
    /// * `Error::BadSerializedStringFormat` if `input` holds no envelope
    /// * `Error::UnknownSerializerType` if the last envelope's tag is not registered
    /// * The serializer's error if the last envelope does not decode
    pub fn deserialize(&mut self, input: &str) -> Result<Context> {
        let last = envelope::find_last(input).ok_or(Error::BadSerializedStringFormat)?;
        let serializer = self.serializer(last.tag)?;

        let mut first_error = None;
        for payload in last.payloads() {
            match serializer.deserialize(payload) {
                Ok(context) => {
                    if self.current_type != last.tag {
                        debug!("Current serializer type is now '{}'", last.tag);
                        self.current_type = last.tag.to_string();
                    }
                    return Ok(context);
                }
                Err(e) => {
                    debug!("'{}' payload does not decode: {}", last.tag, e);
                    first_error.get_or_insert(e);
                }
            }
        }

        Err(first_error.unwrap_or(Error::BadSerializedStringFormat))
    }

    /// Returns the current serializer type.
    pub fn get_type(&self) -> &str {
        &self.current_type
    }

    /// Lists registered tags in registration order.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.serializers.keys().map(String::as_str)
    }

    fn serializer(&self, tag: &str) -> Result<&dyn Serializer> {
        self.serializers
            .get(tag)
            .map(|serializer| serializer.as_ref())
            .ok_or_else(|| Error::UnknownSerializerType { tag: tag.to_string() })
    }
}

impl Default for SerializationFacade {
    fn default() -> Self {
        SerializationFacade::new()
    }
}

impl std::fmt::Debug for SerializationFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerializationFacade")
            .field("types", &self.serializers.keys().collect::<Vec<_>>())
            .field("current_type", &self.current_type)
            .finish()
    }
}
