//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::classifier::{ClassificationStats, LabelScore};
use crate::cli::args::{InsuranceClassifierArgs, OutputFormat};
use crate::error::Result;

/// Number of labels listed in the human-readable summary.
const TOP_LABELS: usize = 20;

/// Result of a batch classification run.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassifyResult {
    pub output_path: String,
    pub duration_ms: u64,
    pub companies_per_second: f64,
    pub stats: ClassificationStats,
}

/// Result of classifying one record.
#[derive(Debug, Serialize, Deserialize)]
pub struct LabelResult {
    pub insurance_labels: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scores: Option<Vec<LabelScore>>,
}

/// Print a batch result in the selected format.
pub fn output_classify_result(
    result: &ClassifyResult,
    args: &InsuranceClassifierArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            output_classify_human(result, args);
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Print a single-record result in the selected format.
pub fn output_label_result(result: &LabelResult, args: &InsuranceClassifierArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            output_label_human(result);
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

fn output_classify_human(result: &ClassifyResult, args: &InsuranceClassifierArgs) {
    let stats = &result.stats;

    if args.verbosity() > 0 {
        println!("Classification complete");
        println!();
    }

    println!("Results written to: {}", result.output_path);
    println!("Total companies processed: {}", stats.total_companies);
    println!(
        "Companies with insurance labels: {} ({:.2}%)",
        stats.labeled_companies, stats.coverage_rate
    );
    println!(
        "Duration: {} ms ({:.1} companies/s)",
        result.duration_ms, result.companies_per_second
    );

    if stats.label_counts.is_empty() {
        return;
    }

    let shown = if args.verbosity() > 1 {
        stats.label_counts.len()
    } else {
        TOP_LABELS.min(stats.label_counts.len())
    };

    println!();
    println!("Label distribution:");
    for (label, count) in &stats.label_counts[..shown] {
        println!(
            "  {label}: {count} companies ({:.2}%)",
            stats.label_share(*count)
        );
    }
    if shown < stats.label_counts.len() {
        println!("  ... and {} more", stats.label_counts.len() - shown);
    }
}

fn output_label_human(result: &LabelResult) {
    if result.insurance_labels.is_empty() {
        println!("No insurance labels");
    } else {
        for label in &result.insurance_labels {
            println!("{label}");
        }
    }

    if let Some(scores) = &result.scores {
        println!();
        println!("Similarity ranking:");
        for score in scores {
            println!("  {:.4}  {}", score.similarity, score.label);
        }
    }
}

fn output_json<T: Serialize>(result: &T, args: &InsuranceClassifierArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}
