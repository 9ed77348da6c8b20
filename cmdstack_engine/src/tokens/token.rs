use serde::{Deserialize, Serialize};
use std::fmt;

/// Opening delimiter of a placeholder
pub const PLACEHOLDER_OPEN: &str = "@{";
/// Closing delimiter of a placeholder
pub const PLACEHOLDER_CLOSE: char = '}';

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Token {
    /// Text outside any placeholder, carried through unchanged
    Literal(String),
    /// A whole `@{...}` span; holds the text between the delimiters
    Placeholder(String),
}

impl Token {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }

    /// Placeholder body, if this is a placeholder
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Placeholder(body) => Some(body),
            Self::Literal(_) => None,
        }
    }

    /// The exact source text this token was scanned from
    pub fn source_text(&self) -> String {
        match self {
            Self::Literal(text) => text.clone(),
            Self::Placeholder(body) => {
                format!("{}{}{}", PLACEHOLDER_OPEN, body, PLACEHOLDER_CLOSE)
            }
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => write!(f, "literal {:?}", text),
            Self::Placeholder(body) => write!(f, "placeholder {:?}", body),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_text_restores_delimiters() {
        let token = Token::Placeholder("int[1,5]".to_string());
        assert_eq!(token.source_text(), "@{int[1,5]}");
        assert_eq!(token.body(), Some("int[1,5]"));

        let literal = Token::Literal("echo ".to_string());
        assert_eq!(literal.source_text(), "echo ");
        assert!(!literal.is_placeholder());
    }
}
