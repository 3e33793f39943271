//! Domain vocabulary and trigger-phrase lookups.
//!
//! The [`KeywordIndex`] holds two immutable tables:
//!
//! - the keyword vocabulary: insurance terms that seed the vector space and
//!   decide whether a text has insurance context at all;
//! - the category mapping table: trigger phrases that directly imply one or
//!   more taxonomy labels.
//!
//! Both are matched as case-insensitive substrings, never as whole words, so
//! "lifestyle" fires the `life` trigger.

pub mod builtin;
pub mod index;

pub use self::index::{CategoryMapping, KeywordIndex};
