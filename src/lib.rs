//! # Insurance Classifier
//!
//! Assigns insurance taxonomy labels to company records.
//!
//! ## Features
//!
//! - Substring trigger table for direct label assignment
//! - TF-IDF vector space over the taxonomy and an insurance vocabulary
//! - Cosine similarity ranking with threshold and label validation
//! - Sequential and parallel batch classification
//! - CSV input and output

pub mod analysis;
pub mod classifier;
pub mod cli;
pub mod error;
pub mod io;
pub mod keyword;
pub mod vector;

pub mod prelude {
    pub use crate::classifier::{
        BusinessTags, ClassificationEngine, ClassificationStats, ClassifiedRecord,
        ClassifierConfig, CompanyRecord,
    };
    pub use crate::error::{ClassifierError, Result};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
