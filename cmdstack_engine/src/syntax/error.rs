//! Placeholder grammar errors
//!
//! `ParseError` is the single error type returned by template parsing. Scan
//! failures from the lexer are folded into it so callers match on one enum.

use crate::config::compile_time::generation::MAX_GENERATED_STRING_LENGTH;
use crate::config::compile_time::template::{MAX_PLACEHOLDERS, MAX_TEMPLATE_LENGTH};
use crate::lexical::LexerError;
use crate::logging::{codes, Code};
use crate::parameters::ParameterKind;
use crate::utils::{format_error, Span};

pub type ParseResult<T> = Result<T, ParseError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Unterminated placeholder at {span}: '@{{' has no closing '}}'")]
    UnterminatedPlaceholder { span: Span },

    #[error("Unknown placeholder type '{tag}' at {span}: expected string, int, bool or nothing")]
    UnknownType { tag: String, span: Span },

    #[error("Invalid bound '{text}' at {span}: expected a non-negative integer")]
    InvalidBound { text: String, span: Span },

    #[error("Invalid range at {span}: min ({min}) cannot be greater than max ({max})")]
    InvalidRange { min: u64, max: u64, span: Span },

    #[error("Unexpected bounds at {span}: {kind} placeholders take no bounds")]
    UnexpectedBounds { kind: ParameterKind, span: Span },

    #[error("Malformed bounds at {span}: {expected}")]
    MalformedBounds { expected: &'static str, span: Span },

    #[error("String length bound {value} at {span} exceeds the limit of {MAX_GENERATED_STRING_LENGTH}")]
    BoundTooLarge { value: u64, span: Span },

    #[error("Template too large: {length} bytes (max {MAX_TEMPLATE_LENGTH})")]
    TemplateTooLarge { length: usize },

    #[error("Too many placeholders: more than {MAX_PLACEHOLDERS}")]
    TooManyPlaceholders { span: Span },
}

impl ParseError {
    pub fn unknown_type(tag: &str, span: Span) -> Self {
        Self::UnknownType {
            tag: tag.to_string(),
            span,
        }
    }

    pub fn invalid_bound(text: &str, span: Span) -> Self {
        Self::InvalidBound {
            text: text.to_string(),
            span,
        }
    }

    pub fn malformed_bounds(expected: &'static str, span: Span) -> Self {
        Self::MalformedBounds { expected, span }
    }

    /// Get error code for global logging system
    pub fn error_code(&self) -> Code {
        match self {
            Self::UnterminatedPlaceholder { .. } => codes::lexical::UNTERMINATED_PLACEHOLDER,
            Self::TemplateTooLarge { .. } => codes::lexical::TEMPLATE_TOO_LARGE,
            Self::TooManyPlaceholders { .. } => codes::lexical::TOO_MANY_PLACEHOLDERS,
            Self::UnknownType { .. } => codes::syntax::UNKNOWN_TYPE,
            Self::InvalidBound { .. } => codes::syntax::INVALID_BOUND,
            Self::InvalidRange { .. } => codes::syntax::INVALID_RANGE,
            Self::UnexpectedBounds { .. } => codes::syntax::UNEXPECTED_BOUNDS,
            Self::MalformedBounds { .. } => codes::syntax::MALFORMED_BOUNDS,
            Self::BoundTooLarge { .. } => codes::syntax::BOUND_TOO_LARGE,
        }
    }

    pub fn span(&self) -> Option<Span> {
        match self {
            Self::UnterminatedPlaceholder { span }
            | Self::UnknownType { span, .. }
            | Self::InvalidBound { span, .. }
            | Self::InvalidRange { span, .. }
            | Self::UnexpectedBounds { span, .. }
            | Self::MalformedBounds { span, .. }
            | Self::BoundTooLarge { span, .. }
            | Self::TooManyPlaceholders { span } => Some(*span),
            Self::TemplateTooLarge { .. } => None,
        }
    }

    pub fn category(&self) -> &'static str {
        codes::get_category(self.error_code().as_str())
    }

    pub fn recommended_action(&self) -> &'static str {
        codes::get_action(self.error_code().as_str())
    }

    /// Render with the offending template line and a caret underline
    pub fn render(&self, source: &str) -> String {
        match self.span() {
            Some(span) => {
                let mut rendered = format_error(source, &span, &self.to_string());
                rendered.push_str(&format!("  = help: {}\n", self.recommended_action()));
                rendered
            }
            None => format!("error: {}\n", self),
        }
    }
}

impl From<LexerError> for ParseError {
    fn from(error: LexerError) -> Self {
        match error {
            LexerError::UnterminatedPlaceholder { span } => Self::UnterminatedPlaceholder { span },
            LexerError::TemplateTooLarge { length } => Self::TemplateTooLarge { length },
            LexerError::TooManyPlaceholders { span } => Self::TooManyPlaceholders { span },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::Position;

    #[test]
    fn test_lexer_errors_keep_their_code() {
        let span = Span::new(Position::start(), Position::new(2, 1, 3));
        let lexer_error = LexerError::UnterminatedPlaceholder { span };
        let code = lexer_error.error_code();

        let parse_error = ParseError::from(lexer_error);
        assert_eq!(parse_error.error_code(), code);
        assert_eq!(parse_error.span(), Some(span));
        assert_eq!(parse_error.category(), "Lexical");
    }

    #[test]
    fn test_render_points_at_placeholder() {
        let source = "echo @{int[9,1]}";
        let start = Position::start().advance_str("echo ");
        let span = Span::new(start, start.advance_str("@{int[9,1]}"));
        let error = ParseError::InvalidRange { min: 9, max: 1, span };

        let rendered = error.render(source);
        assert!(rendered.starts_with("error: Invalid range at 1:6-17"));
        assert!(rendered.contains("^^^^^^^^^^^"));
        assert!(rendered.contains("= help: Swap or correct the bounds"));
    }
}
