//! Command execution logic for the textdup CLI.

use std::path::Path;

use anyhow::Context;
use owo_colors::OwoColorize;
use tabled::{settings::Style as TableStyle, Table, Tabled};
use tracing::{debug, info};

use textdup_rs::core::config::TextdupConfig;
use textdup_rs::io::documents::write_score;
use textdup_rs::DuplicationEngine;

use crate::cli::args::{CompareArgs, InitConfigArgs, ValidateConfigArgs};
use crate::cli::config_layer::build_layered_config;
use crate::cli::output::render_report;

/// Compare two documents, write the score file and print the report.
pub async fn compare_command(args: CompareArgs) -> anyhow::Result<()> {
    let config = build_layered_config(&args)?;
    debug!(?config, "Effective configuration");

    let engine = DuplicationEngine::new(config)?;
    let report = engine
        .compare_files(&args.orig_path, &args.copy_path)
        .await
        .context("Failed to compute duplication score")?;

    write_score(&args.output_path, report.final_score)?;
    info!("Score written to {}", args.output_path.display());

    let rendered = render_report(
        &report,
        &engine.config().similarity.weights,
        args.format,
        args.details,
    )?;
    println!("{rendered}");

    Ok(())
}

/// Print default configuration in YAML format
pub async fn print_default_config() -> anyhow::Result<()> {
    println!("{}", "# Default textdup configuration".dimmed());
    println!("{}", "# Save this to a file and customize as needed".dimmed());
    println!(
        "{}",
        "# Usage: textdup compare --config your-config.yml orig.txt copy.txt out.txt".dimmed()
    );
    println!();

    let yaml_output = serde_yaml::to_string(&TextdupConfig::default())?;
    println!("{}", yaml_output);

    Ok(())
}

/// Initialize a configuration file with defaults
pub async fn init_config(args: InitConfigArgs) -> anyhow::Result<()> {
    if args.output.exists() && !args.force {
        anyhow::bail!(
            "Configuration file already exists: {} (use --force to overwrite)",
            args.output.display()
        );
    }

    let yaml_content = serde_yaml::to_string(&TextdupConfig::default())?;
    tokio::fs::write(&args.output, yaml_content)
        .await
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    println!(
        "{} {}",
        "Configuration saved to:".bright_green().bold(),
        args.output.display().to_string().cyan()
    );
    println!();
    println!(
        "   Run a comparison with: {}",
        format!(
            "textdup compare --config {} orig.txt copy.txt out.txt",
            args.output.display()
        )
        .cyan()
    );

    Ok(())
}

/// Validate configuration file and display a summary
pub async fn validate_config(args: ValidateConfigArgs) -> anyhow::Result<()> {
    println!(
        "{} {}",
        "Validating configuration:".bright_blue().bold(),
        args.config.display().to_string().cyan()
    );
    println!();

    let config = load_and_validate(&args.config)?;
    println!("{}", "Configuration file is valid!".bright_green().bold());
    println!();
    display_config_summary(&config);

    Ok(())
}

fn load_and_validate(path: &Path) -> anyhow::Result<TextdupConfig> {
    let config = TextdupConfig::from_file(path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
    config.validate().context("Configuration validation failed")?;
    Ok(config)
}

fn display_config_summary(config: &TextdupConfig) {
    #[derive(Tabled)]
    struct ConfigRow {
        setting: String,
        value: String,
    }

    let similarity = &config.similarity;
    let weights = &similarity.weights;
    let rows = vec![
        ConfigRow {
            setting: "SimHash Bits".to_string(),
            value: similarity.hashbits.to_string(),
        },
        ConfigRow {
            setting: "N-gram Size".to_string(),
            value: similarity.ngram_size.to_string(),
        },
        ConfigRow {
            setting: "Parallel Metrics".to_string(),
            value: similarity.parallel.to_string(),
        },
        ConfigRow {
            setting: "Weights (lcs/edit/jaccard/simhash)".to_string(),
            value: format!(
                "{:.2} / {:.2} / {:.2} / {:.2}",
                weights.lcs, weights.edit, weights.jaccard, weights.simhash
            ),
        },
        ConfigRow {
            setting: "Stop Words".to_string(),
            value: config.tokenizer.stop_words.len().to_string(),
        },
        ConfigRow {
            setting: "Strip Punctuation".to_string(),
            value: config.tokenizer.strip_punctuation.to_string(),
        },
    ];

    let mut table = Table::new(rows);
    table.with(TableStyle::rounded());
    println!("{}", table);
}
