use crate::lexical::LexicalMetrics;
use crate::parameters::Parameter;
use serde::Serialize;
use std::time::Duration;

/// Everything one pass over a template produces
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineResult {
    pub source: String,
    pub parameters: Vec<Parameter>,
    pub indexed_command: String,
    /// One value per placeholder, blanks already folded in
    pub values: Vec<String>,
    pub generated_command: String,
    pub lexical_metrics: LexicalMetrics,
    #[serde(skip)]
    pub processing_duration: Duration,
}

impl PipelineResult {
    pub fn blank_count(&self) -> usize {
        self.parameters.iter().filter(|p| p.is_blank()).count()
    }

    pub fn log_success(&self) {
        crate::log_success!(
            crate::logging::codes::success::PIPELINE_COMPLETE,
            "Template pipeline completed",
            "parameters" => self.parameters.len(),
            "blanks" => self.blank_count(),
            "literal_bytes" => self.lexical_metrics.literal_bytes,
            "duration_ms" => format!("{:.3}", self.processing_duration.as_secs_f64() * 1000.0)
        );
    }
}
