//! Configuration Layer Management
//!
//! Layers are applied in order: built-in defaults, then a configuration file
//! (explicit `--config`, else `.textdup.yml`/`.textdup.yaml` in the working
//! directory), then command-line overrides.

use std::path::PathBuf;

use anyhow::Context;
use textdup_rs::core::config::{SimilarityConfig, TextdupConfig};

use crate::cli::args::CompareArgs;

/// Trait for merging configuration layers
pub trait ConfigMerge<T> {
    /// Merge another configuration into this one, with the other taking priority
    fn merge_with(&mut self, other: T);
}

/// Convert CLI arguments to partial configuration overrides
pub trait FromCliArgs<T> {
    /// Create a partial configuration from CLI arguments
    fn from_cli_args(args: &T) -> Self;
}

/// Similarity settings that may be overridden from the command line
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SimilarityOverrides {
    pub hashbits: Option<usize>,
    pub ngram_size: Option<usize>,
    pub parallel: Option<bool>,
}

impl FromCliArgs<CompareArgs> for SimilarityOverrides {
    fn from_cli_args(args: &CompareArgs) -> Self {
        Self {
            hashbits: args.hashbits,
            ngram_size: args.ngram_size,
            // a bare flag can only switch parallelism on
            parallel: args.parallel.then_some(true),
        }
    }
}

impl ConfigMerge<SimilarityOverrides> for SimilarityConfig {
    fn merge_with(&mut self, other: SimilarityOverrides) {
        if let Some(hashbits) = other.hashbits {
            self.hashbits = hashbits;
        }
        if let Some(ngram_size) = other.ngram_size {
            self.ngram_size = ngram_size;
        }
        if let Some(parallel) = other.parallel {
            self.parallel = parallel;
        }
    }
}

/// Locate `.textdup.yml` or `.textdup.yaml` in the working directory.
fn implicit_config_path() -> Option<PathBuf> {
    [".textdup.yml", ".textdup.yaml"]
        .iter()
        .map(PathBuf::from)
        .find(|p| p.exists())
}

/// Build the effective configuration for a compare run.
pub fn build_layered_config(args: &CompareArgs) -> anyhow::Result<TextdupConfig> {
    let config_path = args.config.clone().or_else(implicit_config_path);

    let mut config = match &config_path {
        Some(path) => TextdupConfig::from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => TextdupConfig::default(),
    };

    config
        .similarity
        .merge_with(SimilarityOverrides::from_cli_args(args));

    config
        .validate()
        .context("Invalid configuration after applying command-line overrides")?;

    Ok(config)
}
