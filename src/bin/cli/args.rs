//! CLI Argument Structures and Configuration
//!
//! This module contains all CLI argument definitions, command structures,
//! and configuration enums used by the textdup CLI binary.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Weighted text duplication checker
#[derive(Parser)]
#[command(name = "textdup")]
#[command(version = VERSION)]
#[command(about = "Textdup - weighted text duplication checker")]
#[command(long_about = "
Compare a candidate document against a reference document and report how much
of the reference it duplicates. The score combines LCS ratio, token edit
distance, n-gram Jaccard overlap and SimHash similarity.

Common Usage:

  # Score a copy against its original and write the rate to result.txt
  textdup compare orig.txt copy.txt result.txt

  # Show the per-metric breakdown
  textdup compare --details orig.txt copy.txt result.txt

  # Machine-readable report
  textdup compare --format json orig.txt copy.txt result.txt

  # Start from the default configuration
  textdup init-config --output .textdup.yml
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare a candidate document against a reference document
    Compare(CompareArgs),

    /// Print default configuration in YAML format
    #[command(name = "print-default-config")]
    PrintDefaultConfig,

    /// Initialize a configuration file with defaults
    #[command(name = "init-config")]
    InitConfig(InitConfigArgs),

    /// Validate a textdup configuration file
    #[command(name = "validate-config")]
    ValidateConfig(ValidateConfigArgs),
}

/// Arguments for the compare command
#[derive(Args)]
pub struct CompareArgs {
    /// Reference (original) document
    pub orig_path: PathBuf,

    /// Candidate document checked for duplication
    pub copy_path: PathBuf,

    /// File the two-decimal duplication rate is written to
    pub output_path: PathBuf,

    /// Configuration file path (YAML or JSON)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// SimHash fingerprint width in bits [default: 64]
    #[arg(long)]
    pub hashbits: Option<usize>,

    /// Token n-gram length for Jaccard overlap [default: 2]
    #[arg(long)]
    pub ngram_size: Option<usize>,

    /// Compute the four metrics in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Console output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Print the per-metric breakdown in text mode
    #[arg(long)]
    pub details: bool,
}

/// Arguments for init-config command
#[derive(Args)]
pub struct InitConfigArgs {
    /// Output configuration file name
    #[arg(short, long, default_value = ".textdup.yml")]
    pub output: PathBuf,

    /// Overwrite existing configuration file
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for validate-config command
#[derive(Args)]
pub struct ValidateConfigArgs {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: PathBuf,
}

/// Console output formats
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// JSON report
    Json,
    /// YAML report
    Yaml,
}
