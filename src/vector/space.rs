//! Frozen TF-IDF vector space.
//!
//! The corpus holds one seed document per taxonomy label followed by one per
//! vocabulary keyword. Statistics are computed once in [`VectorSpaceModel::build`]
//! and never change afterwards, so a model can be shared by reference across
//! threads.
//!
//! Weights follow the classic formulation:
//!
//! ```text
//! tf(t, d)     = count of t in d
//! idf(t)       = 1 + ln(N / (1 + df(t)))
//! tfidf(t, d)  = tf(t, d) * idf(t)
//! ```

use std::sync::Arc;

use ahash::AHashMap;

use crate::analysis::analyzer::{Analyzer, StandardAnalyzer};
use crate::error::{ClassifierError, Result};
use crate::vector::dense::Vector;

/// One seed document of the corpus.
#[derive(Debug, Clone)]
pub struct SeedDocument {
    /// Lowercased source text (a taxonomy label or a keyword).
    pub source: String,
    /// Term counts after analysis.
    pub terms: AHashMap<String, usize>,
}

impl SeedDocument {
    /// Raw count of `term` in this document.
    pub fn term_frequency(&self, term: &str) -> usize {
        self.terms.get(term).copied().unwrap_or(0)
    }
}

/// TF-IDF space with one dimension per seed document.
pub struct VectorSpaceModel {
    documents: Vec<SeedDocument>,
    /// Number of leading documents that come from the taxonomy.
    taxonomy_len: usize,
    idf: AHashMap<String, f64>,
    /// term -> (document index, tf-idf weight) for every document containing it.
    postings: AHashMap<String, Vec<(usize, f64)>>,
    query_analyzer: Arc<dyn Analyzer>,
}

impl std::fmt::Debug for VectorSpaceModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VectorSpaceModel")
            .field("dimension", &self.documents.len())
            .field("taxonomy_len", &self.taxonomy_len)
            .field("vocabulary_size", &self.idf.len())
            .field("query_analyzer", &self.query_analyzer.name())
            .finish()
    }
}

impl VectorSpaceModel {
    /// Build the space over `taxonomy` followed by `keywords`.
    ///
    /// Seed documents are analyzed with stop word removal; text passed to
    /// [`vectorize_text`](Self::vectorize_text) is only lowercased and split.
    pub fn build<T, K>(taxonomy: &[T], keywords: &[K]) -> Result<Self>
    where
        T: AsRef<str>,
        K: AsRef<str>,
    {
        let corpus_analyzer: Arc<dyn Analyzer> = Arc::new(StandardAnalyzer::new()?);
        let query_analyzer: Arc<dyn Analyzer> = Arc::new(StandardAnalyzer::without_stop_words()?);
        Self::build_with_analyzers(taxonomy, keywords, corpus_analyzer, query_analyzer)
    }

    /// Build the space with explicit corpus and query analyzers.
    pub fn build_with_analyzers<T, K>(
        taxonomy: &[T],
        keywords: &[K],
        corpus_analyzer: Arc<dyn Analyzer>,
        query_analyzer: Arc<dyn Analyzer>,
    ) -> Result<Self>
    where
        T: AsRef<str>,
        K: AsRef<str>,
    {
        if taxonomy.is_empty() {
            return Err(ClassifierError::initialization(
                "taxonomy must contain at least one label",
            ));
        }
        if let Some(position) = taxonomy.iter().position(|l| l.as_ref().trim().is_empty()) {
            return Err(ClassifierError::initialization(format!(
                "taxonomy label at position {position} is blank"
            )));
        }

        let sources = taxonomy
            .iter()
            .map(|label| label.as_ref().to_lowercase())
            .chain(keywords.iter().map(|k| k.as_ref().to_lowercase()));

        let mut documents = Vec::with_capacity(taxonomy.len() + keywords.len());
        let mut document_frequency: AHashMap<String, usize> = AHashMap::new();

        for source in sources {
            let mut terms: AHashMap<String, usize> = AHashMap::new();
            for term in corpus_analyzer.terms(&source)? {
                *terms.entry(term).or_insert(0) += 1;
            }
            for term in terms.keys() {
                *document_frequency.entry(term.clone()).or_insert(0) += 1;
            }
            documents.push(SeedDocument { source, terms });
        }

        let n_documents = documents.len() as f64;
        let idf: AHashMap<String, f64> = document_frequency
            .iter()
            .map(|(term, df)| {
                let weight = 1.0 + (n_documents / (*df as f64 + 1.0)).ln();
                (term.clone(), weight)
            })
            .collect();

        let mut postings: AHashMap<String, Vec<(usize, f64)>> = AHashMap::new();
        for (index, document) in documents.iter().enumerate() {
            for (term, count) in &document.terms {
                let weight = *count as f64 * idf.get(term).copied().unwrap_or_default();
                postings
                    .entry(term.clone())
                    .or_default()
                    .push((index, weight));
            }
        }

        Ok(VectorSpaceModel {
            documents,
            taxonomy_len: taxonomy.len(),
            idf,
            postings,
            query_analyzer,
        })
    }

    /// Dimensionality of every vector in this space.
    pub fn dimension(&self) -> usize {
        self.documents.len()
    }

    /// Number of seed documents that come from the taxonomy.
    pub fn taxonomy_len(&self) -> usize {
        self.taxonomy_len
    }

    /// The seed documents, taxonomy labels first.
    pub fn documents(&self) -> &[SeedDocument] {
        &self.documents
    }

    /// Number of distinct terms across the corpus.
    pub fn vocabulary_size(&self) -> usize {
        self.idf.len()
    }

    /// Inverse document frequency of `term`, if it occurs in the corpus.
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.idf.get(term).copied()
    }

    /// TF-IDF score of `term` against seed document `index`; 0 when absent.
    pub fn tfidf(&self, term: &str, index: usize) -> f64 {
        match (self.documents.get(index), self.idf.get(term)) {
            (Some(document), Some(idf)) => document.term_frequency(term) as f64 * idf,
            _ => 0.0,
        }
    }

    /// Sum of each token's TF-IDF score per seed document.
    ///
    /// Tokens that do not occur in the corpus contribute nothing.
    pub fn vectorize<S: AsRef<str>>(&self, tokens: &[S]) -> Vector {
        let mut vector = Vector::zeros(self.dimension());
        for token in tokens {
            if let Some(entries) = self.postings.get(token.as_ref()) {
                for (index, weight) in entries {
                    vector.data[*index] += weight;
                }
            }
        }
        vector
    }

    /// Tokenize `text` with the query analyzer and vectorize the tokens.
    pub fn vectorize_text(&self, text: &str) -> Result<Vector> {
        let tokens = self.tokenize(text)?;
        Ok(self.vectorize(&tokens))
    }

    /// Tokenize `text` with the query analyzer.
    pub fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        self.query_analyzer.terms(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyword::builtin::INSURANCE_KEYWORDS;

    fn space() -> VectorSpaceModel {
        VectorSpaceModel::build(&["Flood Insurance", "Auto Insurance"], INSURANCE_KEYWORDS)
            .unwrap()
    }

    #[test]
    fn test_dimension_is_taxonomy_plus_keywords() {
        let space = space();
        assert_eq!(space.dimension(), 52);
        assert_eq!(space.taxonomy_len(), 2);
        assert_eq!(space.documents()[0].source, "flood insurance");
        assert_eq!(space.documents()[2].source, "insurance");
        assert_eq!(space.documents()[51].source, "insured");
    }

    #[test]
    fn test_idf_formula() {
        let space = space();
        let n = 52.0_f64;

        // "insurance": both labels plus the keyword itself.
        let expected = 1.0 + (n / 4.0).ln();
        assert!((space.idf("insurance").unwrap() - expected).abs() < 1e-12);

        // "flood": one label plus the keyword.
        let expected = 1.0 + (n / 3.0).ln();
        assert!((space.idf("flood").unwrap() - expected).abs() < 1e-12);

        assert!(space.idf("bakery").is_none());
    }

    #[test]
    fn test_vectorize_sums_token_scores() {
        let space = space();
        let vector = space.vectorize(&["flood", "insurance"]);
        let idf_flood = space.idf("flood").unwrap();
        let idf_insurance = space.idf("insurance").unwrap();

        assert_eq!(vector.dimension(), 52);
        assert!((vector.data[0] - (idf_flood + idf_insurance)).abs() < 1e-12);
        assert!((vector.data[1] - idf_insurance).abs() < 1e-12);
        assert!((vector.data[2] - idf_insurance).abs() < 1e-12);
        // Keyword document "flood" sits at 2 + 33.
        assert!((vector.data[35] - idf_flood).abs() < 1e-12);
        assert_eq!(vector.data[3], 0.0);

        for index in 0..space.dimension() {
            let expected = space.tfidf("flood", index) + space.tfidf("insurance", index);
            assert!((vector.data[index] - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_repeated_tokens_accumulate() {
        let space = space();
        let once = space.vectorize(&["flood"]);
        let thrice = space.vectorize(&["flood", "flood", "flood"]);
        assert!((thrice.data[0] - 3.0 * once.data[0]).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_tokens_contribute_nothing() {
        let space = space();
        assert!(space.vectorize(&["bakery", "bread"]).is_zero());
        assert!(space.vectorize::<&str>(&[]).is_zero());
    }

    #[test]
    fn test_stop_words_are_not_in_corpus() {
        let space = VectorSpaceModel::build(&["Directors and Officers Insurance"], &["risk"])
            .unwrap();
        assert!(space.idf("and").is_none());
        assert_eq!(space.documents()[0].term_frequency("directors"), 1);
        assert_eq!(space.documents()[0].term_frequency("and"), 0);
    }

    #[test]
    fn test_vectorize_text_lowercases() {
        let space = space();
        let from_text = space.vectorize_text("FLOOD Insurance").unwrap();
        let from_tokens = space.vectorize(&["flood", "insurance"]);
        assert_eq!(from_text, from_tokens);
    }

    #[test]
    fn test_empty_taxonomy_fails() {
        let empty: [&str; 0] = [];
        let err = VectorSpaceModel::build(&empty, INSURANCE_KEYWORDS).unwrap_err();
        assert!(matches!(err, ClassifierError::Initialization(_)));
    }

    #[test]
    fn test_blank_label_fails() {
        let err = VectorSpaceModel::build(&["Life Insurance", "  "], INSURANCE_KEYWORDS)
            .unwrap_err();
        assert!(matches!(err, ClassifierError::Initialization(_)));
    }
}
