//! @acp:module "Configuration"
//! @acp:summary "Project configuration loading and defaults"
//! @acp:domain docs
//! @acp:layer config

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::docstring::ParserConfig;

/// Default configuration file name
pub const CONFIG_FILE: &str = ".exdoc.config.json";

fn default_version() -> String {
    "1.0.0".to_string()
}

/// @acp:summary "Main exdoc configuration structure"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Configuration format version
    #[serde(default = "default_version")]
    pub version: String,

    /// Docstring dialect selection and host boilerplate masking
    #[serde(default)]
    pub docstring: ParserConfig,

    /// Relational schema reading
    #[serde(default)]
    pub schema: SchemaConfig,

    /// Output formatting
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            docstring: ParserConfig::default(),
            schema: SchemaConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// @acp:summary "Load config from a .exdoc.config.json file"
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// @acp:summary "Save config to a file"
    pub fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// @acp:summary "Load an explicit path, or the default location when none is given"
    ///
    /// An explicit path must exist; the default location is optional.
    pub fn resolve(path: Option<&Path>) -> crate::Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(CONFIG_FILE).exists() => Self::load(CONFIG_FILE),
            None => Ok(Self::default()),
        }
    }
}

fn default_fallback_dialect() -> String {
    "postgresql".to_string()
}

/// @acp:summary "Schema reader settings"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaConfig {
    /// SQL dialect used for column types without a portable name
    #[serde(default = "default_fallback_dialect")]
    pub fallback_dialect: String,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            fallback_dialect: default_fallback_dialect(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// @acp:summary "Output formatting settings"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print JSON output
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}
