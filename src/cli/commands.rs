//! Command implementations for the insurance classifier CLI.

use std::path::Path;
use std::time::Instant;

use log::info;

use crate::classifier::{
    BusinessTags, ClassificationEngine, ClassificationStats, ClassifierConfig, CompanyRecord,
};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::io::{read_companies, read_taxonomy, write_results};

/// Execute a CLI command.
pub fn execute_command(args: InsuranceClassifierArgs) -> Result<()> {
    match &args.command {
        Command::Classify(classify_args) => classify(classify_args.clone(), &args),
        Command::Label(label_args) => label(label_args.clone(), &args),
    }
}

/// Classify a CSV of companies and write the labeled CSV.
fn classify(args: ClassifyArgs, cli_args: &InsuranceClassifierArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if args.threads.is_some() {
        config.threads = args.threads;
    }

    let engine = build_engine(&args.taxonomy, config)?;

    info!("Loading companies from {}", args.companies.display());
    let companies = read_companies(&args.companies)?;
    info!("Classifying {} companies", companies.len());

    let start_time = Instant::now();
    let results = if args.parallel {
        engine.classify_companies_parallel(&companies)?
    } else {
        engine.classify_companies(&companies)?
    };
    let duration = start_time.elapsed();

    write_results(&args.output, &results)?;

    let seconds = duration.as_secs_f64();
    let result = ClassifyResult {
        output_path: args.output.to_string_lossy().to_string(),
        duration_ms: duration.as_millis() as u64,
        companies_per_second: if seconds > 0.0 {
            results.len() as f64 / seconds
        } else {
            0.0
        },
        stats: ClassificationStats::from_results(&results),
    };

    output_classify_result(&result, cli_args)
}

/// Classify one record given on the command line.
fn label(args: LabelArgs, cli_args: &InsuranceClassifierArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let engine = build_engine(&args.taxonomy, config)?;

    let mut record = CompanyRecord::new()
        .with_description(args.description)
        .with_sector(args.sector)
        .with_category(args.category)
        .with_niche(args.niche);
    if let Some(tags) = args.tags {
        record = record.with_business_tags(BusinessTags::Raw(tags));
    }

    let insurance_labels = engine.classify_company(&record)?;
    let scores = if args.scores {
        Some(engine.score_company(&record)?)
    } else {
        None
    };

    output_label_result(
        &LabelResult {
            insurance_labels,
            scores,
        },
        cli_args,
    )
}

fn load_config(path: Option<&Path>) -> Result<ClassifierConfig> {
    match path {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            ClassifierConfig::from_file(path)
        }
        None => Ok(ClassifierConfig::default()),
    }
}

fn build_engine(taxonomy_path: &Path, config: ClassifierConfig) -> Result<ClassificationEngine> {
    info!("Loading taxonomy from {}", taxonomy_path.display());
    let taxonomy = read_taxonomy(taxonomy_path)?;
    ClassificationEngine::with_config(taxonomy, config)
}
