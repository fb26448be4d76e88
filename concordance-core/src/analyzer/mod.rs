//! Text analysis pipeline.
//!
//! This module provides the text processing components:
//! - **Normalizer**: lowercases raw text and folds whitespace
//! - **Tokenizer**: splits folded text into tokens, counts words in raw text
//! - **Lemmatizer**: maps each token to its dictionary base form

pub mod lemmatizer;
pub mod normalizer;
pub mod tokenizer;

pub use lemmatizer::{DictionaryLemmatizer, Lemmatize};
pub use normalizer::TextNormalizer;
pub use tokenizer::Tokenizer;
