//! Text analysis pipeline.
//!
//! This module provides the text processing components:
//! - **Normalizer**: Lowercases raw text and reduces it to `[a-z0-9]` words
//! - **Tokenizer**: Splits normalized text into word tokens
//! - **Frequency**: Counts tokens into a term-frequency map

pub mod frequency;
pub mod normalizer;
pub mod tokenizer;

pub use frequency::TermFrequencies;
pub use normalizer::{normalize, NormalizerConfig, TextNormalizer};
pub use tokenizer::{tokenize, Tokenizer};
