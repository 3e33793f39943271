//! The two analyzers the vector space is built with.
//!
//! Both split on [`WORD_PATTERN`](crate::analysis::tokenizer::regex::WORD_PATTERN)
//! and lowercase. The corpus analyzer ([`StandardAnalyzer::new`]) also drops
//! stop words; the query analyzer ([`StandardAnalyzer::without_stop_words`])
//! keeps every word.
//!
//! ```
//! use insurance_classifier::analysis::analyzer::{Analyzer, StandardAnalyzer};
//!
//! let corpus = StandardAnalyzer::new().unwrap();
//! assert_eq!(
//!     corpus.terms("Errors and Omissions Insurance").unwrap(),
//!     vec!["errors", "omissions", "insurance"]
//! );
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::RegexTokenizer;
use crate::error::Result;

/// Word tokenizer, lowercase, and optionally stop word removal.
#[derive(Debug)]
pub struct StandardAnalyzer {
    inner: PipelineAnalyzer,
}

impl StandardAnalyzer {
    /// Analyzer for seed documents.
    pub fn new() -> Result<Self> {
        Self::build(true)
    }

    /// Analyzer for record and label text.
    pub fn without_stop_words() -> Result<Self> {
        Self::build(false)
    }

    fn build(remove_stop_words: bool) -> Result<Self> {
        let mut inner = PipelineAnalyzer::new(Arc::new(RegexTokenizer::new()?))
            .add_filter(Arc::new(LowercaseFilter::new()));
        inner = if remove_stop_words {
            inner
                .add_filter(Arc::new(StopFilter::new()))
                .with_name("corpus")
        } else {
            inner.with_name("query")
        };

        Ok(StandardAnalyzer { inner })
    }
}

impl Analyzer for StandardAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}
