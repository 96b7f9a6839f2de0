//! Locale templates and the catalog that resolves them
//!
//! Templates are plain data. Adding a language means adding a YAML file and
//! one entry in [`BUILTIN_LOCALES`], or shipping a custom catalog file.

use crate::error::{Error, Result, ResultExt};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Language used when a request names an unknown one
pub const DEFAULT_LANGUAGE: &str = "pl";

/// Built-in locale YAML definitions, keyed by language code
pub const BUILTIN_LOCALES: &[(&str, &str)] = &[
    ("pl", include_str!("../../locales/pl.yaml")),
    ("en", include_str!("../../locales/en.yaml")),
];

/// User-facing error message keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKey {
    /// No file was selected
    NoFile,
    /// Filename does not end in `.csv`
    NotCsv,
    /// No charset could decode the file
    DecodeError,
    /// File has zero bytes
    EmptyFile,
    /// No usable table or no order lines
    InvalidFormat,
}

/// Localized error messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleErrors {
    pub no_file: String,
    pub not_csv: String,
    pub decode_error: String,
    pub empty_file: String,
    pub invalid_format: String,
}

/// Header, footer and error texts for one language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleTemplate {
    /// Text placed before the order lines
    pub header: String,
    /// Text placed after the order lines
    pub footer: String,
    /// Error messages
    pub errors: LocaleErrors,
}

impl LocaleTemplate {
    /// Parse a template from YAML
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Get the message for an error key
    pub fn message(&self, key: ErrorKey) -> &str {
        match key {
            ErrorKey::NoFile => &self.errors.no_file,
            ErrorKey::NotCsv => &self.errors.not_csv,
            ErrorKey::DecodeError => &self.errors.decode_error,
            ErrorKey::EmptyFile => &self.errors.empty_file,
            ErrorKey::InvalidFormat => &self.errors.invalid_format,
        }
    }
}

/// On-disk layout of a custom catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    /// Fallback language code
    #[serde(default = "default_language")]
    pub default_language: String,
    /// Templates by language code
    pub locales: BTreeMap<String, LocaleTemplate>,
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

/// Immutable set of locale templates with a default language.
///
/// Built once at startup and shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct LocaleCatalog {
    default_language: String,
    locales: BTreeMap<String, LocaleTemplate>,
    fallback: LocaleTemplate,
}

impl LocaleCatalog {
    /// Build a catalog, checking that the default language exists
    pub fn new(
        default_language: impl Into<String>,
        locales: BTreeMap<String, LocaleTemplate>,
    ) -> Result<Self> {
        let default_language = default_language.into();
        if locales.is_empty() {
            return Err(Error::config("Locale catalog cannot be empty"));
        }
        let fallback = locales.get(&default_language).cloned().ok_or_else(|| {
            Error::config(format!(
                "Default language '{default_language}' has no template"
            ))
        })?;

        Ok(Self {
            default_language,
            locales,
            fallback,
        })
    }

    /// Catalog of the embedded locales
    pub fn builtin() -> Result<Self> {
        let mut locales = BTreeMap::new();
        for (code, yaml) in BUILTIN_LOCALES {
            let template = LocaleTemplate::from_yaml_str(yaml)
                .with_context(|| format!("Built-in locale '{code}'"))?;
            locales.insert((*code).to_string(), template);
        }
        Self::new(DEFAULT_LANGUAGE, locales)
    }

    /// Parse a catalog from YAML
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let file: CatalogFile = serde_yaml::from_str(yaml)
            .map_err(|e| Error::config(format!("Failed to parse locale catalog: {e}")))?;
        Self::new(file.default_language, file.locales)
    }

    /// Load a catalog from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read locale catalog '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_yaml_str(&content)
    }

    /// Default language code
    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Known language codes, sorted
    pub fn languages(&self) -> Vec<&str> {
        self.locales.keys().map(String::as_str).collect()
    }

    /// Check if a language code is known
    pub fn contains(&self, language: &str) -> bool {
        self.locales.contains_key(language)
    }

    /// Template for a language, falling back to the default
    pub fn resolve(&self, language: &str) -> &LocaleTemplate {
        self.locales.get(language.trim()).unwrap_or(&self.fallback)
    }

    /// Localized message for an error key
    pub fn message(&self, language: &str, key: ErrorKey) -> &str {
        self.resolve(language).message(key)
    }
}
