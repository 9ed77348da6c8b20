use cmdstack_engine::logging::Code;
use cmdstack_engine::{ConfigError, PipelineError};

/// User-facing CLI failures
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Template error already rendered against its source text
    #[error("{rendered}")]
    Template { rendered: String, code: Code },

    #[error("Failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub fn template(source: &str, error: impl Into<PipelineError>) -> Self {
        let error = error.into();
        Self::Template {
            rendered: error.render(source).trim_end().to_string(),
            code: error.error_code(),
        }
    }

    pub fn error_code(&self) -> Option<Code> {
        match self {
            Self::Config(error) => Some(error.error_code()),
            Self::Template { code, .. } => Some(*code),
            Self::Json(_) => None,
        }
    }

    /// Text printed to stderr
    pub fn report(&self) -> String {
        match self {
            Self::Template { rendered, .. } => rendered.clone(),
            other => format!("error: {}", other),
        }
    }
}
