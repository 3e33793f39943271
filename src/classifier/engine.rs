//! Per-record classification.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::classifier::config::ClassifierConfig;
use crate::classifier::record::CompanyRecord;
use crate::error::{ClassifierError, Result};
use crate::keyword::KeywordIndex;
use crate::vector::{Vector, VectorSpaceModel};

/// Similarity of one taxonomy label to a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelScore {
    pub label: String,
    pub similarity: f64,
}

/// Classification engine over a fixed taxonomy.
///
/// Everything is built in the constructor and read-only afterwards, so one
/// engine can classify from many threads at once.
#[derive(Debug)]
pub struct ClassificationEngine {
    taxonomy: Vec<String>,
    keyword_index: KeywordIndex,
    space: VectorSpaceModel,
    /// One vector per taxonomy label, same order as `taxonomy`.
    taxonomy_vectors: Vec<Vector>,
    config: ClassifierConfig,
}

impl ClassificationEngine {
    /// Create an engine with the default configuration.
    pub fn new(taxonomy: Vec<String>) -> Result<Self> {
        Self::with_config(taxonomy, ClassifierConfig::default())
    }

    /// Create an engine; the keyword index comes from the configuration.
    pub fn with_config(taxonomy: Vec<String>, config: ClassifierConfig) -> Result<Self> {
        let keyword_index = config.keyword_index();
        Self::with_keyword_index(taxonomy, keyword_index, config)
    }

    /// Create an engine with an explicit keyword index.
    ///
    /// Fails with an initialization error when the taxonomy is empty or the
    /// configuration is invalid.
    pub fn with_keyword_index(
        taxonomy: Vec<String>,
        keyword_index: KeywordIndex,
        config: ClassifierConfig,
    ) -> Result<Self> {
        config
            .validate()
            .map_err(|e| ClassifierError::initialization(e.to_string()))?;

        let space = VectorSpaceModel::build(&taxonomy, keyword_index.keywords())?;
        let taxonomy_vectors = taxonomy
            .iter()
            .map(|label| space.vectorize_text(&label.to_lowercase()))
            .collect::<Result<Vec<_>>>()?;

        info!(
            "Initialized classifier: {} labels, {} keywords, {} dimensions, {} terms",
            taxonomy.len(),
            keyword_index.keywords().len(),
            space.dimension(),
            space.vocabulary_size()
        );

        Ok(ClassificationEngine {
            taxonomy,
            keyword_index,
            space,
            taxonomy_vectors,
            config,
        })
    }

    pub fn taxonomy(&self) -> &[String] {
        &self.taxonomy
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn keyword_index(&self) -> &KeywordIndex {
        &self.keyword_index
    }

    pub fn space(&self) -> &VectorSpaceModel {
        &self.space
    }

    pub fn taxonomy_vectors(&self) -> &[Vector] {
        &self.taxonomy_vectors
    }

    /// Assign up to `max_labels` taxonomy labels to a record.
    ///
    /// Trigger hits are returned as-is (uncapped). Without hits, records
    /// lacking insurance context get no labels; the rest are ranked by
    /// similarity.
    pub fn classify_company(&self, record: &CompanyRecord) -> Result<Vec<String>> {
        let normalized = record.normalize();

        let direct = self.keyword_index.find_direct_matches_in(normalized.texts());
        if !direct.is_empty() {
            debug!("Direct match: {direct:?}");
            return Ok(direct);
        }

        if !self.keyword_index.has_insurance_context_in(normalized.texts()) {
            debug!("No insurance context");
            return Ok(Vec::new());
        }

        let ranked = self.rank_text(&normalized.weighted_text(self.config.field_weight))?;
        let labels = self.select_labels(&ranked);
        debug!("Similarity match: {labels:?}");
        Ok(labels)
    }

    /// Similarity ranking of a record, skipping the trigger and context checks.
    pub fn score_company(&self, record: &CompanyRecord) -> Result<Vec<LabelScore>> {
        let normalized = record.normalize();
        self.rank_text(&normalized.weighted_text(self.config.field_weight))
    }

    fn rank_text(&self, text: &str) -> Result<Vec<LabelScore>> {
        let vector = self.space.vectorize_text(text)?;
        Ok(self.rank(&vector))
    }

    /// Every taxonomy label scored against `vector`, most similar first.
    ///
    /// Ties keep taxonomy order.
    pub fn rank(&self, vector: &Vector) -> Vec<LabelScore> {
        let mut scores: Vec<LabelScore> = self
            .taxonomy
            .iter()
            .zip(&self.taxonomy_vectors)
            .map(|(label, label_vector)| LabelScore {
                label: label.clone(),
                similarity: vector.cosine_similarity(label_vector),
            })
            .collect();

        scores.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
        scores
    }

    /// Threshold, validate and cap a ranking.
    ///
    /// Keeps labels scoring strictly above the threshold that look like
    /// insurance labels, then takes the first `max_labels`.
    pub fn select_labels(&self, ranked: &[LabelScore]) -> Vec<String> {
        ranked
            .iter()
            .filter(|score| score.similarity > self.config.similarity_threshold)
            .filter(|score| self.is_insurance_label(&score.label))
            .take(self.config.max_labels)
            .map(|score| score.label.clone())
            .collect()
    }

    /// A label is acceptable when it contains a vocabulary keyword or one of
    /// the validation terms.
    pub fn is_insurance_label(&self, label: &str) -> bool {
        let lowered = label.to_lowercase();
        self.keyword_index.has_insurance_context(&lowered)
            || self
                .config
                .validation_terms
                .iter()
                .any(|term| lowered.contains(&term.to_lowercase()))
    }
}
