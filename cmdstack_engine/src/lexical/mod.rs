//! Placeholder scanning
//!
//! Splits a command template into literal runs and `@{...}` placeholders.
//! Scanning is single-pass and non-nested: a `}` closes the nearest
//! preceding `@{`, and an `@{` inside a placeholder body is ordinary body
//! text. Bodies are not interpreted here; that is the parser's job.

pub mod analyzer;

use crate::tokens::TokenStream;

pub use analyzer::{LexerError, LexicalAnalyzer, LexicalMetrics};

/// Scan a template with a fresh analyzer
pub fn tokenize(source: &str) -> Result<TokenStream, LexerError> {
    LexicalAnalyzer::new().tokenize(source)
}
