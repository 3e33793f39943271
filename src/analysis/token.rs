//! Tokens produced by the analysis pipeline.

/// One word of analyzed text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    /// 0-based index in the tokenizer output.
    pub position: usize,
}

impl Token {
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
        }
    }

    /// Replace the text, keeping the position.
    pub fn with_text<S: Into<String>>(self, text: S) -> Self {
        Token {
            text: text.into(),
            ..self
        }
    }
}

/// Tokens flowing from a tokenizer through the filters.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;
