use crate::lexical::LexicalMetrics;
use crate::parameters::Parameter;
use crate::substitution::{self, SubstitutionError};
use crate::tokens::TokenStream;

/// A parsed command template.
///
/// Holds the source text, its tokens and the ordered parameters, so blank
/// indexing and substitution can walk the same tokens the parser saw.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    source: String,
    tokens: TokenStream,
    parameters: Vec<Parameter>,
    metrics: LexicalMetrics,
}

impl Template {
    pub(crate) fn from_parts(
        source: String,
        tokens: TokenStream,
        parameters: Vec<Parameter>,
        metrics: LexicalMetrics,
    ) -> Self {
        debug_assert_eq!(tokens.placeholder_count(), parameters.len());
        Self {
            source,
            tokens,
            parameters,
            metrics,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tokens(&self) -> &TokenStream {
        &self.tokens
    }

    /// Scanner counters for this source
    pub fn metrics(&self) -> &LexicalMetrics {
        &self.metrics
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn into_parameters(self) -> Vec<Parameter> {
        self.parameters
    }

    pub fn placeholder_count(&self) -> usize {
        self.parameters.len()
    }

    pub fn blank_count(&self) -> usize {
        self.parameters.iter().filter(|p| p.is_blank()).count()
    }

    /// Source text with every blank replaced by `@{n}`, n counting blanks
    /// from 1
    pub fn index_blanks(&self) -> String {
        substitution::render_indexed(&self.tokens, self.parameters.iter().map(Parameter::is_blank))
    }

    /// Replace placeholder i with `values[i]`, copying all other text
    pub fn substitute<S: AsRef<str>>(&self, values: &[S]) -> Result<String, SubstitutionError> {
        substitution::render_substituted(&self.tokens, values)
    }

    /// Merge generated values and blank values into one value per placeholder
    pub fn resolve_values<G, B>(&self, generated: &[G], blanks: &[B]) -> Result<Vec<String>, SubstitutionError>
    where
        G: AsRef<str>,
        B: AsRef<str>,
    {
        substitution::resolve_values(&self.parameters, generated, blanks)
    }
}
