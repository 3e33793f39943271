//! Company records as consumed and produced by the engine.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::classifier::tags::parse_tags;

/// Business tags as they arrive: already a list, or a raw string to parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BusinessTags {
    /// Tags supplied as a list.
    List(Vec<String>),
    /// Tags supplied as one string (`"a, b"` or `"['a', 'b']"`).
    Raw(String),
}

impl BusinessTags {
    /// The tags as an ordered list, parsing a raw string if necessary.
    pub fn to_list(&self) -> Vec<String> {
        match self {
            BusinessTags::List(tags) => tags.clone(),
            BusinessTags::Raw(raw) => parse_tags(raw),
        }
    }
}

impl fmt::Display for BusinessTags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BusinessTags::Raw(raw) => write!(f, "{raw}"),
            BusinessTags::List(tags) => {
                let quoted: Vec<String> = tags.iter().map(|t| format!("'{t}'")).collect();
                write!(f, "[{}]", quoted.join(", "))
            }
        }
    }
}

/// A company to classify.
///
/// Every known field is optional; absent fields behave as empty strings.
/// Unrecognized fields are kept in `extra` and written back out unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_tags: Option<BusinessTags>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub niche: Option<String>,

    /// Passthrough for fields the engine does not read.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl CompanyRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_business_tags(mut self, tags: BusinessTags) -> Self {
        self.business_tags = Some(tags);
        self
    }

    pub fn with_sector<S: Into<String>>(mut self, sector: S) -> Self {
        self.sector = Some(sector.into());
        self
    }

    pub fn with_category<S: Into<String>>(mut self, category: S) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_niche<S: Into<String>>(mut self, niche: S) -> Self {
        self.niche = Some(niche.into());
        self
    }

    /// Lowercased view of the fields the engine reads.
    pub fn normalize(&self) -> NormalizedRecord {
        let lower = |field: &Option<String>| field.as_deref().unwrap_or("").to_lowercase();

        NormalizedRecord {
            description: lower(&self.description),
            tags: self
                .business_tags
                .as_ref()
                .map(|tags| tags.to_list())
                .unwrap_or_default()
                .into_iter()
                .map(|tag| tag.to_lowercase())
                .collect(),
            sector: lower(&self.sector),
            category: lower(&self.category),
            niche: lower(&self.niche),
        }
    }
}

/// Lowercased record fields, tags already parsed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedRecord {
    pub description: String,
    pub tags: Vec<String>,
    pub sector: String,
    pub category: String,
    pub niche: String,
}

impl NormalizedRecord {
    /// All fields in checking order: description, each tag, sector, category, niche.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.description.as_str())
            .chain(self.tags.iter().map(|t| t.as_str()))
            .chain([
                self.sector.as_str(),
                self.category.as_str(),
                self.niche.as_str(),
            ])
    }

    /// Description once, then every tag, sector, category and niche repeated
    /// `weight` times, all space-joined.
    pub fn weighted_text(&self, weight: usize) -> String {
        let repeat = |text: &str| vec![text; weight].join(" ");

        let mut parts = Vec::with_capacity(self.tags.len() + 4);
        parts.push(self.description.clone());
        parts.extend(self.tags.iter().map(|tag| repeat(tag)));
        parts.push(repeat(&self.sector));
        parts.push(repeat(&self.category));
        parts.push(repeat(&self.niche));
        parts.join(" ")
    }
}

/// A record together with the labels assigned to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedRecord {
    #[serde(flatten)]
    pub record: CompanyRecord,

    /// Assigned labels, most relevant first.
    pub insurance_labels: Vec<String>,
}

impl ClassifiedRecord {
    /// The labels rendered as one comma-and-space-joined string.
    pub fn labels_joined(&self) -> String {
        self.insurance_labels.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_parses_tags() {
        let record = CompanyRecord::new()
            .with_description("Marine CARGO Services")
            .with_business_tags(BusinessTags::Raw("['Freight', 'Shipping']".to_string()))
            .with_sector("Logistics");

        let normalized = record.normalize();
        assert_eq!(normalized.description, "marine cargo services");
        assert_eq!(normalized.tags, vec!["freight", "shipping"]);
        assert_eq!(normalized.sector, "logistics");
        assert_eq!(normalized.category, "");
        assert_eq!(normalized.niche, "");
    }

    #[test]
    fn test_list_tags_are_lowercased() {
        let record = CompanyRecord::new()
            .with_business_tags(BusinessTags::List(vec!["Auto".into(), "HOME".into()]));
        assert_eq!(record.normalize().tags, vec!["auto", "home"]);
    }

    #[test]
    fn test_texts_order() {
        let normalized = NormalizedRecord {
            description: "d".into(),
            tags: vec!["t1".into(), "t2".into()],
            sector: "s".into(),
            category: "c".into(),
            niche: "n".into(),
        };
        let texts: Vec<&str> = normalized.texts().collect();
        assert_eq!(texts, vec!["d", "t1", "t2", "s", "c", "n"]);
    }

    #[test]
    fn test_weighted_text() {
        let normalized = NormalizedRecord {
            description: "we insure boats".into(),
            tags: vec!["yachts".into()],
            sector: "finance".into(),
            category: "".into(),
            niche: "marine".into(),
        };
        assert_eq!(
            normalized.weighted_text(3),
            "we insure boats yachts yachts yachts finance finance finance    marine marine marine"
        );
    }

    #[test]
    fn test_json_roundtrip_keeps_extra_fields() {
        let json = r#"{"description": "Broker", "business_tags": ["a", "b"], "website": "x.com"}"#;
        let record: CompanyRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.description.as_deref(), Some("Broker"));
        assert_eq!(
            record.business_tags,
            Some(BusinessTags::List(vec!["a".into(), "b".into()]))
        );
        assert_eq!(record.extra.get("website"), Some(&serde_json::json!("x.com")));

        let classified = ClassifiedRecord {
            record,
            insurance_labels: vec!["Life Insurance".into(), "Health Insurance".into()],
        };
        let value = serde_json::to_value(&classified).unwrap();
        assert_eq!(value["website"], "x.com");
        assert_eq!(value["insurance_labels"][1], "Health Insurance");
        assert_eq!(classified.labels_joined(), "Life Insurance, Health Insurance");
    }

    #[test]
    fn test_business_tags_display() {
        assert_eq!(BusinessTags::Raw("a,b".into()).to_string(), "a,b");
        assert_eq!(
            BusinessTags::List(vec!["a".into(), "b".into()]).to_string(),
            "['a', 'b']"
        );
    }
}
