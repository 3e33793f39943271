//! Tokenizers that split raw text into tokens.
//!
//! The classifier only needs word tokenization: [`regex::RegexTokenizer`]
//! with its default pattern yields maximal runs of ASCII letters, digits
//! and underscores, so "long-term care" becomes `long`, `term`, `care`.

use crate::analysis::token::TokenStream;
use crate::error::Result;

pub mod regex;

pub use self::regex::RegexTokenizer;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so one tokenizer can be shared by every
/// worker of a parallel batch.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
