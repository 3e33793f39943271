//! Two-stage insurance label classification.
//!
//! A record is first checked against the trigger table; any trigger hit is
//! the answer. Otherwise, if the record has insurance context, its weighted
//! text is vectorized and ranked against every taxonomy label by cosine
//! similarity, then thresholded, validated and capped.
//!
//! # Example
//!
//! ```
//! use insurance_classifier::classifier::{BusinessTags, ClassificationEngine, CompanyRecord};
//!
//! # fn main() -> insurance_classifier::error::Result<()> {
//! let engine = ClassificationEngine::new(vec![
//!     "Flood Insurance".to_string(),
//!     "Auto Insurance".to_string(),
//! ])?;
//!
//! let record = CompanyRecord::new()
//!     .with_description("We sell flood protection plans")
//!     .with_business_tags(BusinessTags::Raw("flood,water".to_string()));
//!
//! let labels = engine.classify_company(&record)?;
//! assert!(labels.contains(&"Flood Insurance".to_string()));
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod config;
pub mod engine;
pub mod record;
pub mod stats;
pub mod tags;

pub use self::config::ClassifierConfig;
pub use self::engine::{ClassificationEngine, LabelScore};
pub use self::record::{BusinessTags, ClassifiedRecord, CompanyRecord};
pub use self::stats::ClassificationStats;
pub use self::tags::parse_tags;
