//! Configuration for the classification engine.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ClassifierError, Result};
use crate::keyword::{CategoryMapping, KeywordIndex};

/// Tunable parameters of the decision policy.
///
/// Every field has a default, so a JSON file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Labels must score strictly above this cosine similarity.
    pub similarity_threshold: f64,

    /// Maximum number of similarity-derived labels per record.
    pub max_labels: usize,

    /// How many times tags, sector, category and niche are repeated in the
    /// combined text relative to the description.
    pub field_weight: usize,

    /// Substrings that make a label acceptable in addition to the vocabulary.
    pub validation_terms: Vec<String>,

    /// Batch progress is logged after every this many records.
    pub progress_interval: usize,

    /// Replacement keyword vocabulary. If None, the built-in list is used.
    pub keywords: Option<Vec<String>>,

    /// Replacement trigger table. If None, the built-in table is used.
    pub category_mappings: Option<Vec<CategoryMapping>>,

    /// Worker threads for parallel batches.
    /// If None, uses the number of CPU cores.
    pub threads: Option<usize>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.3,
            max_labels: 3,
            field_weight: 3,
            validation_terms: ["insurance", "coverage", "liability", "protection"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            progress_interval: 1000,
            keywords: None,
            category_mappings: None,
            threads: None,
        }
    }
}

impl ClassifierConfig {
    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: ClassifierConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the settings describe a usable policy.
    pub fn validate(&self) -> Result<()> {
        if !self.similarity_threshold.is_finite() {
            return Err(ClassifierError::config(
                "similarity_threshold must be a finite number",
            ));
        }
        if self.max_labels == 0 {
            return Err(ClassifierError::config("max_labels must be at least 1"));
        }
        if self.field_weight == 0 {
            return Err(ClassifierError::config("field_weight must be at least 1"));
        }
        if self.progress_interval == 0 {
            return Err(ClassifierError::config(
                "progress_interval must be at least 1",
            ));
        }
        if self.threads == Some(0) {
            return Err(ClassifierError::config("threads must be at least 1"));
        }
        Ok(())
    }

    /// Build the keyword index described by this configuration.
    pub fn keyword_index(&self) -> KeywordIndex {
        match (&self.keywords, &self.category_mappings) {
            (None, None) => KeywordIndex::builtin(),
            (keywords, mappings) => {
                let builtin = KeywordIndex::builtin();
                let keywords = keywords
                    .clone()
                    .unwrap_or_else(|| builtin.keywords().to_vec());
                let mappings = mappings
                    .clone()
                    .unwrap_or_else(|| builtin.mappings().to_vec());
                KeywordIndex::new(keywords, mappings)
            }
        }
    }
}
