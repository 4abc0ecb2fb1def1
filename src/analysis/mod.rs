// src/analysis/mod.rs
//! Lexical analysis pipeline.
//!
//! Raw text flows through [`preprocess`], then [`lexer`], and the resulting
//! token stream feeds every feature extractor:
//! - **Keyword / operator vectors**: dense counts over the fixed vocabulary
//! - **Normalized stream**: identifiers canonicalised, for structural n-grams
//! - **Identifier sequence**: canonical ids only, for naming-pattern n-grams

pub mod classify;
pub mod features;
pub mod lexer;
pub mod ngram;
pub mod normalize;
pub mod preprocess;

pub use classify::{classify, TokenKind};
pub use features::DenseVector;
pub use lexer::{tokenize, TokenStream};
pub use ngram::{extract_ngrams, GramCounts};

use tracing::trace;

/// Everything extracted from one source text.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub tokens: TokenStream,
    pub keywords: DenseVector,
    pub operators: DenseVector,
    /// Identifier-only canonical sequence.
    pub identifiers: Vec<String>,
    /// Full stream with identifiers canonicalised.
    pub normalized: Vec<String>,
}

impl Analysis {
    /// Runs the full pipeline over `source`.
    #[must_use]
    pub fn of(source: &str) -> Self {
        let cleaned = preprocess::process(source);
        let tokens = lexer::tokenize(&cleaned);
        let keywords = features::keyword_vector(&tokens);
        let operators = features::operator_vector(&tokens);
        let identifiers = normalize::identifier_sequence(&tokens);
        let normalized = normalize::normalize_stream(&tokens);

        trace!(
            tokens = tokens.len(),
            keywords = keywords.total(),
            operators = operators.total(),
            identifiers = identifiers.len(),
            "analysed source"
        );

        Self {
            tokens,
            keywords,
            operators,
            identifiers,
            normalized,
        }
    }

    #[must_use]
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }
}
