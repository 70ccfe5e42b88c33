//! Output Formatting and Display Functions
//!
//! Renders duplication reports for the console as text, JSON or YAML.

use owo_colors::OwoColorize;
use tabled::{settings::Style as TableStyle, Table, Tabled};
use textdup_rs::core::config::SimilarityWeights;
use textdup_rs::io::documents::format_score;
use textdup_rs::DuplicationReport;

use crate::cli::args::OutputFormat;

#[derive(Tabled)]
struct MetricRow {
    metric: String,
    similarity: String,
    weight: String,
    contribution: String,
}

fn metric_rows(report: &DuplicationReport, weights: &SimilarityWeights) -> Vec<MetricRow> {
    report
        .similarities
        .iter()
        .map(|(metric, value)| {
            let weight = metric.weight(weights);
            MetricRow {
                metric: metric.name().to_string(),
                similarity: format!("{value:.4}"),
                weight: format!("{weight:.2}"),
                contribution: format!("{:.2}", 100.0 * weight * value),
            }
        })
        .collect()
}

/// Render a report in the requested console format.
pub fn render_report(
    report: &DuplicationReport,
    weights: &SimilarityWeights,
    format: OutputFormat,
    details: bool,
) -> anyhow::Result<String> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(report)?,
        OutputFormat::Yaml => serde_yaml::to_string(report)?,
        OutputFormat::Text => {
            let mut out = format!(
                "{} {} %",
                "Duplication rate:".bold(),
                format_score(report.final_score).bright_green().bold()
            );
            if details {
                let mut table = Table::new(metric_rows(report, weights));
                table.with(TableStyle::rounded());
                out.push_str("\n\n");
                out.push_str(&table.to_string());
            }
            out
        }
    };
    Ok(rendered)
}
