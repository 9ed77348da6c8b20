use crate::logging::{codes, Code};
use crate::syntax::ParseError;

/// Caller contract violations detected before any output is produced
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubstitutionError {
    #[error("Expected {expected} values, one per placeholder, but {provided} were provided")]
    ValueCountMismatch { expected: usize, provided: usize },

    #[error("Template has {expected} blanks but {provided} blank values were provided")]
    BlankValueCountMismatch { expected: usize, provided: usize },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl SubstitutionError {
    pub fn error_code(&self) -> Code {
        match self {
            Self::ValueCountMismatch { .. } => codes::substitution::VALUE_COUNT_MISMATCH,
            Self::BlankValueCountMismatch { .. } => codes::substitution::BLANK_VALUE_COUNT_MISMATCH,
            Self::Parse(error) => error.error_code(),
        }
    }

    /// Count mismatches are programming errors in the caller
    pub fn is_contract_violation(&self) -> bool {
        !matches!(self, Self::Parse(_))
    }
}
