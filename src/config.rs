//! Settings for the engine and its logger.
//!
//! ```yaml
//! transform:
//!   placeholder_namespace: "http://www.semanticweb.org/ontology#"
//!   placeholder_prefix: X
//!   avoid_signature_collisions: true
//! logger:
//!   enable: true
//!   level: debug
//!   format: compact
//! ```

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    logger,
    ontology::vocab,
    transform::naming::DEFAULT_PLACEHOLDER_PREFIX,
    Error, Result,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub transform: TransformSettings,
    pub logger: LoggerSettings,
}

/// Placeholder naming.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TransformSettings {
    pub placeholder_namespace: String,
    pub placeholder_prefix: String,
    /// Skip counter values whose name already occurs in the input batch.
    pub avoid_signature_collisions: bool,
}

impl Default for TransformSettings {
    fn default() -> Self {
        Self {
            placeholder_namespace: vocab::DEFAULT_PLACEHOLDER_NAMESPACE.to_string(),
            placeholder_prefix: DEFAULT_PLACEHOLDER_PREFIX.to_string(),
            avoid_signature_collisions: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggerSettings {
    pub enable: bool,
    pub level: logger::LogLevel,
    pub format: logger::Format,
    /// Overrides `level` with a full `EnvFilter` directive when set.
    pub override_filter: Option<String>,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            enable: true,
            level: logger::LogLevel::default(),
            format: logger::Format::default(),
            override_filter: None,
        }
    }
}

impl Settings {
    /// Parses YAML settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Yaml`] when the text is not valid settings YAML.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Parses TOML settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Toml`] when the text is not valid settings TOML.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Loads settings from a file, picking the format from its extension.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read, has an unknown
    /// extension, or does not parse.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Self::from_yaml_str(&content),
            Some("toml") => Self::from_toml_str(&content),
            _ => Err(Error::Message(format!(
                "unsupported settings file: {}",
                path.display()
            ))),
        }
    }
}
