use crate::CliError;
use cmdstack_engine::{
    parse_template, process_template, RandomSource, RuntimeConfig, SeededRandom, ThreadRandom,
};

pub fn parse(template: &str, config: &RuntimeConfig, json: bool) -> Result<String, CliError> {
    let parsed = parse_template(template, &config.defaults).map_err(|e| CliError::template(template, e))?;

    if json {
        return Ok(serde_json::to_string_pretty(parsed.parameters())?);
    }

    let header = format!("{} parameters ({} blank)", parsed.placeholder_count(), parsed.blank_count());
    let lines = parsed
        .parameters()
        .iter()
        .enumerate()
        .map(|(index, parameter)| format!("  {}. {}", index + 1, parameter));

    Ok(std::iter::once(header).chain(lines).collect::<Vec<_>>().join("\n"))
}

pub fn index(template: &str, config: &RuntimeConfig) -> Result<String, CliError> {
    let parsed = parse_template(template, &config.defaults).map_err(|e| CliError::template(template, e))?;
    Ok(parsed.index_blanks())
}

pub fn generate(
    template: &str,
    config: &RuntimeConfig,
    blanks: &[String],
    seed: Option<u64>,
    count: usize,
    json: bool,
) -> Result<String, CliError> {
    let mut seeded;
    let mut thread = ThreadRandom;
    let mut rng: &mut dyn RandomSource = match seed {
        Some(seed) => {
            seeded = SeededRandom::new(seed);
            &mut seeded
        }
        None => &mut thread,
    };

    let results = (0..count)
        .map(|_| process_template(template, config, &mut rng, blanks))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| CliError::template(template, e))?;

    if json {
        return Ok(serde_json::to_string_pretty(&results)?);
    }

    Ok(results
        .iter()
        .map(|result| result.generated_command.as_str())
        .collect::<Vec<_>>()
        .join("\n"))
}
