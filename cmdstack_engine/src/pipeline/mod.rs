//! End-to-end template processing
//!
//! `process_template` runs parse, generate and substitute once over a text.
//! `TemplateSession` keeps one open command and recomputes only the stage a
//! change invalidates. `RequestSequencer` lets an asynchronous caller drop
//! responses that a newer request has superseded.

mod error;
mod result;
mod sequencer;
mod session;

pub use error::PipelineError;
pub use result::PipelineResult;
pub use sequencer::{RequestSequencer, RequestTicket};
pub use session::{SessionError, SessionState, TemplateSession};

use crate::config::RuntimeConfig;
use crate::generation::{RandomSource, ValueGenerator};
use crate::syntax::parse_template;
use std::time::Instant;

/// Run the whole flow over `text` (parse -> index -> generate -> substitute)
///
/// `blanks` fills Blank placeholders in order; missing ones become empty.
pub fn process_template<G, B>(
    text: &str,
    config: &RuntimeConfig,
    rng: &mut G,
    blanks: &[B],
) -> Result<PipelineResult, PipelineError>
where
    G: RandomSource,
    B: AsRef<str>,
{
    let start_time = Instant::now();
    crate::log_debug!("Processing template", "length" => text.len(), "blank_values" => blanks.len());

    let template = parse_template(text, &config.defaults)?;
    let indexed_command = template.index_blanks();

    let generator = ValueGenerator::new(config.generation.string_alphabet);
    let generated = generator.generate(template.parameters(), rng);
    let values = template.resolve_values(&generated, blanks)?;
    let generated_command = template.substitute(&values)?;

    let lexical_metrics = template.metrics().clone();
    let result = PipelineResult {
        source: text.to_string(),
        parameters: template.into_parameters(),
        indexed_command,
        values,
        generated_command,
        lexical_metrics,
        processing_duration: start_time.elapsed(),
    };

    result.log_success();

    Ok(result)
}
