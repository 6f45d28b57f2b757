//! Compiler configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Whether free-text instructions carry algorithm provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FreeTextProvenance {
    /// Attach the generated-dosage-instructions extension naming the text
    /// algorithm and its version.
    #[default]
    Attach,
    /// Emit the text only.
    Omit,
}

/// Options controlling schedule compilation.
///
/// # TOML
///
/// ```toml
/// free_text_provenance = "omit"
/// default_medication = "Ibuprofen 400mg"
/// default_unit_code = "tab"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerConfig {
    /// Provenance mode applied to every free-text instruction.
    pub free_text_provenance: FreeTextProvenance,

    /// Medication display name used when a request names none.
    pub default_medication: String,

    /// Dose unit code used when a request names none.
    /// An empty string leaves such doses without a unit code.
    pub default_unit_code: String,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            free_text_provenance: FreeTextProvenance::Attach,
            default_medication: "Arzneimittel".to_string(),
            default_unit_code: "pc".to_string(),
        }
    }
}

impl CompilerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_free_text_provenance(mut self, provenance: FreeTextProvenance) -> Self {
        self.free_text_provenance = provenance;
        self
    }

    pub fn with_default_medication(mut self, medication: impl Into<String>) -> Self {
        self.default_medication = medication.into();
        self
    }

    pub fn with_default_unit_code(mut self, code: impl Into<String>) -> Self {
        self.default_unit_code = code.into();
        self
    }

    /// Parse configuration from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Default unit code, or `None` when configured empty.
    pub fn default_unit(&self) -> Option<&str> {
        Some(self.default_unit_code.as_str()).filter(|code| !code.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CompilerConfig::default();
        assert_eq!(config.free_text_provenance, FreeTextProvenance::Attach);
        assert_eq!(config.default_medication, "Arzneimittel");
        assert_eq!(config.default_unit(), Some("pc"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = CompilerConfig::from_toml_str("free_text_provenance = \"omit\"\n").unwrap();
        assert_eq!(config.free_text_provenance, FreeTextProvenance::Omit);
        assert_eq!(config.default_medication, "Arzneimittel");
    }

    #[test]
    fn test_empty_default_unit() {
        let config = CompilerConfig::new().with_default_unit_code("");
        assert_eq!(config.default_unit(), None);
    }

    #[test]
    fn test_unknown_provenance_mode_rejected() {
        assert!(CompilerConfig::from_toml_str("free_text_provenance = \"sometimes\"\n").is_err());
    }
}
