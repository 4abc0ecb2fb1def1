//! Lexical structural similarity for source code.
//!
//! Two texts are preprocessed, tokenized and reduced to keyword, operator and
//! n-gram features, then scored with a weighted fusion of cosine similarities.
//!
//! ```
//! use codesim_core::similarity::{compute_similarity, Weights};
//!
//! let a = "int a; int b; a = b + 1;";
//! let b = "int x; int y; x = y + 1;";
//! let score = compute_similarity(a, b, &Weights::default()).unwrap_or(0.0);
//! assert!(score > 0.99);
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod discovery;
pub mod error;
pub mod exit;
pub mod logging;
pub mod report;
pub mod similarity;
pub mod vocab;

pub use similarity::{compute_feature_report, compute_similarity, SimilarityEngine, Weights};
