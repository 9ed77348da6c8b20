//! Ordered token sequence for one template

use crate::tokens::token::Token;
use crate::utils::{Span, Spanned};

/// A token with span information
pub type SpannedToken = Spanned<Token>;

/// Tokens of one template in source order.
///
/// Spans are contiguous: each token starts where the previous one ended and
/// the last one ends at the end of the source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenStream {
    tokens: Vec<SpannedToken>,
    placeholder_count: usize,
}

impl TokenStream {
    pub fn new(tokens: Vec<SpannedToken>) -> Self {
        let placeholder_count = tokens.iter().filter(|t| t.value.is_placeholder()).count();
        Self {
            tokens,
            placeholder_count,
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn placeholder_count(&self) -> usize {
        self.placeholder_count
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SpannedToken> {
        self.tokens.iter()
    }

    /// Placeholder tokens only, in source order
    pub fn placeholders(&self) -> impl Iterator<Item = &SpannedToken> {
        self.tokens.iter().filter(|t| t.value.is_placeholder())
    }

    /// Span of the n-th placeholder (0-based)
    pub fn placeholder_span(&self, index: usize) -> Option<Span> {
        self.placeholders().nth(index).map(|t| t.span)
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a SpannedToken;
    type IntoIter = std::slice::Iter<'a, SpannedToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
