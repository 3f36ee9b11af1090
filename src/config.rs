//! Configuration handling for hook-enabled templates.
//! This module loads the optional `bakehook.json`, `bakehook.yml` or
//! `bakehook.yaml` file from the template root.

use crate::constants::CONFIG_FILES;
use crate::error::{Error, Result};
use crate::serialization::SerializationFacade;
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use std::path::Path;

/// Template-level settings. Every field is optional in the file.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Extra serializers: tag -> built-in codec name
    pub serializers: IndexMap<String, String>,

    /// Run hook scripts without template rendering
    pub run_hooks_in_place: bool,

    /// Interpreters by script extension, e.g. `rb: ruby`
    pub interpreters: IndexMap<String, String>,
}

impl Config {
    /// Builds a serialization facade with the configured serializers registered.
    ///
    /// # Errors
    /// * `Error::InvalidSerializerType` if a tag is malformed
    /// * `Error::InvalidType` if a codec name is unknown
    pub fn build_facade(&self) -> Result<SerializationFacade> {
        let mut facade = SerializationFacade::new();
        for (tag, codec) in &self.serializers {
            facade.register_named(tag.as_str(), codec)?;
        }
        Ok(facade)
    }
}

/// Loads configuration from a template directory, trying multiple file formats.
///
/// # Arguments
/// * `template_dir` - Directory containing the template configuration
///
/// # Returns
/// * `Result<Config>` - Parsed configuration, or defaults when no file exists
///
/// # Errors
/// * `Error::ConfigError` if the file exists but cannot be parsed
pub fn load_config<P: AsRef<Path>>(template_dir: P) -> Result<Config> {
    for file in CONFIG_FILES {
        let config_path = template_dir.as_ref().join(file);
        if config_path.exists() {
            debug!("Loading configuration from {}", config_path.display());
            let content = std::fs::read_to_string(&config_path)?;
            return parse_config(&content);
        }
    }

    debug!("No configuration file found (tried: {})", CONFIG_FILES.join(", "));
    Ok(Config::default())
}

/// Parses configuration content, trying JSON first and YAML second.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither valid JSON nor valid YAML
pub fn parse_config(content: &str) -> Result<Config> {
    match serde_json::from_str(content) {
        Ok(config) => Ok(config),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {}", e))),
    }
}
