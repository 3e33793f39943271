//! Text analysis for the classifier.
//!
//! Turns free text into lowercase word tokens. Two pipelines are used:
//! the corpus pipeline (word tokenizer, lowercase, stop words) builds the seed
//! documents of the vector space, and the query pipeline (word tokenizer,
//! lowercase) turns record and label text into the tokens that get vectorized.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
