use crate::logging::Code;
use crate::substitution::SubstitutionError;
use crate::syntax::ParseError;

/// Pipeline processing errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PipelineError {
    #[error("Template parsing failed: {0}")]
    Parse(#[from] ParseError),

    #[error("Substitution failed: {0}")]
    Substitution(#[from] SubstitutionError),
}

impl PipelineError {
    pub fn error_code(&self) -> Code {
        match self {
            Self::Parse(error) => error.error_code(),
            Self::Substitution(error) => error.error_code(),
        }
    }

    /// Render the error against the template text it came from
    pub fn render(&self, source: &str) -> String {
        match self {
            Self::Parse(error) => error.render(source),
            Self::Substitution(SubstitutionError::Parse(error)) => error.render(source),
            Self::Substitution(error) => format!("error: {}\n", error),
        }
    }
}
