//! Configuration types and management for textdup-rs.
//!
//! The top-level [`TextdupConfig`] groups the similarity core settings with the
//! tokenizer settings used by the engine and CLI. Files may be YAML or JSON.

pub mod similarity;
pub mod validation;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::errors::{Result, TextdupError};

pub use similarity::{SimilarityConfig, SimilarityWeights, WEIGHT_SUM_TOLERANCE};
pub use validation::{
    validate_at_most, validate_non_negative, validate_positive_usize, weights_sum_to_one,
};

/// Main configuration for the textdup engine
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextdupConfig {
    /// Similarity scoring settings
    #[serde(default)]
    pub similarity: SimilarityConfig,

    /// Tokenization settings
    #[serde(default)]
    pub tokenizer: TokenizerConfig,
}

impl TextdupConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = read_config_file(&path)?;
        serde_yaml::from_str(&content).map_err(Into::into)
    }

    /// Load configuration from a YAML or JSON file, chosen by extension.
    ///
    /// Unknown extensions are parsed as YAML, which also accepts JSON documents.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = read_config_file(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content).map_err(Into::into),
            _ => serde_yaml::from_str(&content).map_err(Into::into),
        }
    }

    /// Save configuration to a YAML file
    pub fn to_yaml_file(&self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        let content = serde_yaml::to_string(self)?;
        std::fs::write(&path, content).map_err(|e| {
            TextdupError::io(
                format!("Failed to write config file: {}", path.display()),
                e,
            )
        })
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<()> {
        self.similarity.validate()?;
        self.tokenizer.validate()?;
        Ok(())
    }
}

fn read_config_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(TextdupError::config_field(
            format!("Config file not found: {}", path.display()),
            "path",
        ));
    }
    std::fs::read_to_string(path).map_err(|e| {
        TextdupError::io(
            format!("Failed to read config file: {}", path.display()),
            e,
        )
    })
}

/// Tokenizer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenizerConfig {
    /// Tokens dropped before scoring
    #[serde(default = "TokenizerConfig::default_stop_words")]
    pub stop_words: Vec<String>,

    /// Remove punctuation and symbols from each token
    #[serde(default = "TokenizerConfig::default_strip_punctuation")]
    pub strip_punctuation: bool,
}

/// Default implementation for [`TokenizerConfig`].
impl Default for TokenizerConfig {
    /// Returns the Chinese modal-particle stop list with punctuation stripping.
    fn default() -> Self {
        Self {
            stop_words: Self::default_stop_words(),
            strip_punctuation: Self::default_strip_punctuation(),
        }
    }
}

impl TokenizerConfig {
    fn default_stop_words() -> Vec<String> {
        ["的", "了", "啊", "吧", "吗", "呢", "哦", "嗯"]
            .iter()
            .map(|w| (*w).to_string())
            .collect()
    }

    const fn default_strip_punctuation() -> bool {
        true
    }

    /// Validate tokenizer configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(pos) = self.stop_words.iter().position(|w| w.trim().is_empty()) {
            return Err(TextdupError::invalid_parameter(
                "tokenizer.stop_words",
                format!("stop word at index {} is blank", pos),
            ));
        }
        Ok(())
    }
}
