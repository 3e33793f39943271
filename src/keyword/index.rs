//! Substring lookups over the keyword vocabulary and the trigger table.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::keyword::builtin::{CATEGORY_MAPPINGS, INSURANCE_KEYWORDS};

/// A trigger phrase and the taxonomy labels it directly implies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryMapping {
    /// Lowercase phrase matched as a substring of the input text.
    pub trigger: String,
    /// Labels assigned when the trigger fires.
    pub labels: Vec<String>,
}

impl CategoryMapping {
    /// Create a mapping; the trigger is lowercased.
    pub fn new<S, I, L>(trigger: S, labels: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        CategoryMapping {
            trigger: trigger.into().to_lowercase(),
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }
}

/// Immutable keyword vocabulary plus category mapping table.
///
/// Lookups are pure and deterministic: direct matches come back in
/// first-seen order (table order within one text, field order across texts)
/// with duplicates collapsed.
#[derive(Debug, Clone)]
pub struct KeywordIndex {
    keywords: Vec<String>,
    mappings: Vec<CategoryMapping>,
}

impl KeywordIndex {
    /// Create an index from a custom vocabulary and trigger table.
    pub fn new<I, S>(keywords: I, mappings: Vec<CategoryMapping>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keywords = keywords
            .into_iter()
            .map(|k| k.into().to_lowercase())
            .collect();
        let mappings = mappings
            .into_iter()
            .map(|m| CategoryMapping::new(m.trigger, m.labels))
            .collect();

        KeywordIndex { keywords, mappings }
    }

    /// Create the index with the built-in insurance vocabulary and triggers.
    pub fn builtin() -> Self {
        let mappings = CATEGORY_MAPPINGS
            .iter()
            .map(|(trigger, labels)| CategoryMapping::new(*trigger, labels.iter().copied()))
            .collect();

        Self::new(INSURANCE_KEYWORDS.iter().copied(), mappings)
    }

    /// The keyword vocabulary, in corpus order.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// The trigger table, in lookup order.
    pub fn mappings(&self) -> &[CategoryMapping] {
        &self.mappings
    }

    /// Labels whose trigger phrase occurs anywhere in `text`.
    pub fn find_direct_matches(&self, text: &str) -> Vec<String> {
        self.find_direct_matches_in([text])
    }

    /// Union of direct matches over several texts, in first-seen order.
    pub fn find_direct_matches_in<'a, I>(&self, texts: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut seen: AHashSet<&str> = AHashSet::new();
        let mut matches = Vec::new();

        for text in texts {
            let lowered = text.to_lowercase();
            for mapping in &self.mappings {
                if !lowered.contains(mapping.trigger.as_str()) {
                    continue;
                }
                for label in &mapping.labels {
                    if seen.insert(label.as_str()) {
                        matches.push(label.clone());
                    }
                }
            }
        }

        matches
    }

    /// True iff any vocabulary keyword occurs as a substring of `text`.
    pub fn has_insurance_context(&self, text: &str) -> bool {
        let lowered = text.to_lowercase();
        self.keywords
            .iter()
            .any(|keyword| lowered.contains(keyword.as_str()))
    }

    /// True iff any of the texts has insurance context.
    pub fn has_insurance_context_in<'a, I>(&self, texts: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        texts
            .into_iter()
            .any(|text| self.has_insurance_context(text))
    }
}

impl Default for KeywordIndex {
    fn default() -> Self {
        Self::builtin()
    }
}
