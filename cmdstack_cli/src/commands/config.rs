use crate::cli::BoundsArgs;
use crate::CliError;
use cmdstack_engine::{BoundedKind, DefaultsResolver, RuntimeConfig};
use std::path::Path;

pub fn show(config: &RuntimeConfig, path: &Path) -> Result<String, CliError> {
    let content = config.to_toml_string()?;
    Ok(format!("# {}\n{}", path.display(), content.trim_end()))
}

/// Update one default range and persist the whole config
pub fn set_bounds(
    config: &RuntimeConfig,
    path: &Path,
    kind: BoundedKind,
    bounds: BoundsArgs,
) -> Result<String, CliError> {
    let defaults = config.defaults.with_bounds(kind, bounds.min, bounds.max)?;
    let (min, max) = defaults.resolve(kind);

    let updated = RuntimeConfig {
        defaults,
        ..config.clone()
    };
    updated.save(path)?;

    Ok(format!("{} set to [{},{}]", kind.setting(), min, max))
}
