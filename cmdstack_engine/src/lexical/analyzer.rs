//! Core placeholder scanner with compile-time input limits

use crate::config::constants::compile_time::template::{MAX_PLACEHOLDERS, MAX_TEMPLATE_LENGTH};
use crate::logging::codes;
use crate::tokens::token::{PLACEHOLDER_CLOSE, PLACEHOLDER_OPEN};
use crate::tokens::{Token, TokenStream};
use crate::utils::{Position, Span, Spanned};
use crate::{log_debug, log_error};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexerError {
    #[error("Unterminated placeholder at {span}: '@{{' has no closing '}}'")]
    UnterminatedPlaceholder { span: Span },

    #[error("Template too large: {length} bytes (max {MAX_TEMPLATE_LENGTH})")]
    TemplateTooLarge { length: usize },

    #[error("Too many placeholders: more than {MAX_PLACEHOLDERS}")]
    TooManyPlaceholders { span: Span },
}

impl LexerError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            Self::UnterminatedPlaceholder { .. } => codes::lexical::UNTERMINATED_PLACEHOLDER,
            Self::TemplateTooLarge { .. } => codes::lexical::TEMPLATE_TOO_LARGE,
            Self::TooManyPlaceholders { .. } => codes::lexical::TOO_MANY_PLACEHOLDERS,
        }
    }

    pub fn span(&self) -> Option<Span> {
        match self {
            Self::UnterminatedPlaceholder { span } | Self::TooManyPlaceholders { span } => {
                Some(*span)
            }
            Self::TemplateTooLarge { .. } => None,
        }
    }
}

/// Counters from the most recent scan
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct LexicalMetrics {
    pub placeholder_count: usize,
    pub literal_count: usize,
    pub literal_bytes: usize,
    pub longest_body: usize,
}

impl LexicalMetrics {
    fn record(&mut self, token: &Token) {
        match token {
            Token::Literal(text) => {
                self.literal_count += 1;
                self.literal_bytes += text.len();
            }
            Token::Placeholder(body) => {
                self.placeholder_count += 1;
                self.longest_body = self.longest_body.max(body.len());
            }
        }
    }
}

pub struct LexicalAnalyzer {
    metrics: LexicalMetrics,
}

impl LexicalAnalyzer {
    pub fn new() -> Self {
        Self {
            metrics: LexicalMetrics::default(),
        }
    }

    pub fn metrics(&self) -> &LexicalMetrics {
        &self.metrics
    }

    /// Split `source` into literal and placeholder tokens
    pub fn tokenize(&mut self, source: &str) -> Result<TokenStream, LexerError> {
        self.metrics = LexicalMetrics::default();

        if source.len() > MAX_TEMPLATE_LENGTH {
            let error = LexerError::TemplateTooLarge {
                length: source.len(),
            };
            log_error!(error.error_code(), "Template exceeds maximum length",
                "length" => source.len(),
                "limit" => MAX_TEMPLATE_LENGTH
            );
            return Err(error);
        }

        let mut tokens = Vec::new();
        let mut rest = source;
        let mut pos = Position::start();

        while let Some(open) = rest.find(PLACEHOLDER_OPEN) {
            let literal = &rest[..open];
            let open_pos = pos.advance_str(literal);
            let after_open = &rest[open + PLACEHOLDER_OPEN.len()..];

            let Some(close) = after_open.find(PLACEHOLDER_CLOSE) else {
                let span = Span::new(open_pos, open_pos.advance_str(&rest[open..]));
                let error = LexerError::UnterminatedPlaceholder { span };
                log_error!(error.error_code(), "Placeholder is never closed", span = span);
                return Err(error);
            };

            if !literal.is_empty() {
                self.push(&mut tokens, Token::Literal(literal.to_string()), pos, open_pos);
            }

            let placeholder_len = PLACEHOLDER_OPEN.len() + close + PLACEHOLDER_CLOSE.len_utf8();
            let end_pos = open_pos.advance_str(&rest[open..open + placeholder_len]);

            if self.metrics.placeholder_count == MAX_PLACEHOLDERS {
                let error = LexerError::TooManyPlaceholders {
                    span: Span::new(open_pos, end_pos),
                };
                log_error!(error.error_code(), "Template has too many placeholders",
                    "limit" => MAX_PLACEHOLDERS
                );
                return Err(error);
            }

            self.push(
                &mut tokens,
                Token::Placeholder(after_open[..close].to_string()),
                open_pos,
                end_pos,
            );

            rest = &rest[open + placeholder_len..];
            pos = end_pos;
        }

        if !rest.is_empty() {
            let end_pos = pos.advance_str(rest);
            self.push(&mut tokens, Token::Literal(rest.to_string()), pos, end_pos);
        }

        log_debug!("Template scanned",
            "bytes" => source.len(),
            "placeholders" => self.metrics.placeholder_count,
            "literals" => self.metrics.literal_count
        );

        Ok(TokenStream::new(tokens))
    }

    fn push(&mut self, tokens: &mut Vec<Spanned<Token>>, token: Token, start: Position, end: Position) {
        self.metrics.record(&token);
        tokens.push(Spanned::new(token, Span::new(start, end)));
    }
}

impl Default for LexicalAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_metrics_track_last_scan() {
        let mut analyzer = LexicalAnalyzer::new();
        analyzer.tokenize("echo @{} @{string}").unwrap();

        assert_eq!(analyzer.metrics().placeholder_count, 2);
        assert_eq!(analyzer.metrics().literal_count, 2);
        assert_eq!(analyzer.metrics().literal_bytes, 6);
        assert_eq!(analyzer.metrics().longest_body, 6);

        analyzer.tokenize("plain").unwrap();
        assert_eq!(analyzer.metrics().placeholder_count, 0);
    }

    #[test]
    fn test_spans_cover_multibyte_and_newlines() {
        let stream = LexicalAnalyzer::new().tokenize("é\n@{int}").unwrap();
        let placeholder = stream.placeholders().next().unwrap();

        assert_eq!(placeholder.span.start().offset, 3);
        assert_eq!(placeholder.span.start().line, 2);
        assert_eq!(placeholder.span.start().column, 1);
        assert_eq!(placeholder.span.end().offset, 9);
    }

    #[test]
    fn test_template_length_limit() {
        let source = "x".repeat(MAX_TEMPLATE_LENGTH + 1);
        assert_matches!(
            LexicalAnalyzer::new().tokenize(&source),
            Err(LexerError::TemplateTooLarge { .. })
        );
    }

    #[test]
    fn test_placeholder_count_limit() {
        let at_limit = "@{}".repeat(MAX_PLACEHOLDERS);
        assert!(LexicalAnalyzer::new().tokenize(&at_limit).is_ok());

        let over = "@{}".repeat(MAX_PLACEHOLDERS + 1);
        assert_matches!(
            LexicalAnalyzer::new().tokenize(&over),
            Err(LexerError::TooManyPlaceholders { .. })
        );
    }
}
