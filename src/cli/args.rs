//! Command line argument parsing using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Assign insurance taxonomy labels to company records
#[derive(Parser, Debug, Clone)]
#[command(name = "insurance-classifier")]
#[command(about = "Assigns insurance taxonomy labels to company records")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct InsuranceClassifierArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl InsuranceClassifierArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Classify every company in a CSV file and write the results
    Classify(ClassifyArgs),

    /// Classify a single company given on the command line
    Label(LabelArgs),
}

/// Arguments for batch classification
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// Taxonomy CSV file (one label per row)
    #[arg(short, long, value_name = "TAXONOMY_FILE")]
    pub taxonomy: PathBuf,

    /// Company CSV file
    #[arg(short, long, value_name = "COMPANIES_FILE")]
    pub companies: PathBuf,

    /// Where to write the classified CSV
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    pub output: PathBuf,

    /// Classifier configuration file (JSON)
    #[arg(long, value_name = "CONFIG_FILE", env = "INSURANCE_CLASSIFIER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Classify on a worker pool
    #[arg(short, long)]
    pub parallel: bool,

    /// Worker threads for --parallel (default: number of CPUs)
    #[arg(long)]
    pub threads: Option<usize>,
}

/// Arguments for classifying one record
#[derive(Parser, Debug, Clone)]
pub struct LabelArgs {
    /// Taxonomy CSV file (one label per row)
    #[arg(short, long, value_name = "TAXONOMY_FILE")]
    pub taxonomy: PathBuf,

    /// Company description
    #[arg(short, long, default_value = "")]
    pub description: String,

    /// Business tags, comma separated or as a ['a', 'b'] list
    #[arg(long)]
    pub tags: Option<String>,

    /// Sector
    #[arg(long, default_value = "")]
    pub sector: String,

    /// Category
    #[arg(long, default_value = "")]
    pub category: String,

    /// Niche
    #[arg(long, default_value = "")]
    pub niche: String,

    /// Classifier configuration file (JSON)
    #[arg(long, value_name = "CONFIG_FILE", env = "INSURANCE_CLASSIFIER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Also print the similarity ranking
    #[arg(long)]
    pub scores: bool,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
