//! Pipeline configuration
//!
//! All fields default to the built-in heuristics, so an empty YAML file (or
//! no file at all) reproduces the standard behavior.

use crate::decode::Charset;
use crate::error::{Error, Result};
use crate::schema::HeaderRules;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ============================================================================
// Pipeline Config
// ============================================================================

/// Tunables for decoding and structure detection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Charsets to try, in order
    #[serde(default = "default_encodings")]
    pub encodings: Vec<Charset>,

    /// Candidate field delimiters, in order
    #[serde(default = "default_delimiters")]
    pub delimiters: Vec<char>,

    /// Exact header of the identifier column
    #[serde(default = "default_index_header")]
    pub index_header: String,

    /// Substring of the quantity column header
    #[serde(default = "default_quantity_fragment")]
    pub quantity_header_fragment: String,
}

fn default_encodings() -> Vec<Charset> {
    Charset::DEFAULT_ORDER.to_vec()
}

fn default_delimiters() -> Vec<char> {
    vec![';', ',']
}

fn default_index_header() -> String {
    HeaderRules::default().index_header
}

fn default_quantity_fragment() -> String {
    HeaderRules::default().quantity_fragment
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            encodings: default_encodings(),
            delimiters: default_delimiters(),
            index_header: default_index_header(),
            quantity_header_fragment: default_quantity_fragment(),
        }
    }
}

impl PipelineConfig {
    /// Parse config from YAML
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as an empty map
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)
            .map_err(|e| Error::config(format!("Failed to parse pipeline config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_yaml_str(&content)
    }

    /// Header rules for the structure detector
    pub fn header_rules(&self) -> HeaderRules {
        HeaderRules {
            index_header: self.index_header.clone(),
            quantity_fragment: self.quantity_header_fragment.clone(),
        }
    }

    /// Validate the config
    pub fn validate(&self) -> Result<()> {
        if self.encodings.is_empty() {
            return Err(Error::config("At least one encoding is required"));
        }
        if self.delimiters.is_empty() {
            return Err(Error::config("At least one delimiter is required"));
        }
        if let Some(d) = self.delimiters.iter().find(|d| !d.is_ascii() || **d == '"') {
            return Err(Error::config(format!("Invalid delimiter: {d:?}")));
        }
        if self.index_header.trim().is_empty() {
            return Err(Error::config("index_header cannot be empty"));
        }
        if self.quantity_header_fragment.trim().is_empty() {
            return Err(Error::config("quantity_header_fragment cannot be empty"));
        }
        Ok(())
    }
}
