//! Environment overrides of the parameter defaults.
//!
//! Kept in its own test binary because it mutates the process environment.

use assert_matches::assert_matches;
use cmdstack_engine::config::runtime::env_vars;
use cmdstack_engine::{ConfigError, ParameterDefaults, RuntimeConfig};

#[test]
fn env_overrides_feed_defaults_and_are_validated() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("config.toml");

    std::env::set_var(env_vars::PARAM_STRING_LENGTH_MAX, "8");
    let defaults = ParameterDefaults::default();
    assert_eq!(defaults.string_length_max, 8);
    assert_eq!(defaults.string_length_min, 5);

    let config = RuntimeConfig::load_or_default(&missing).unwrap();
    assert_eq!(config.defaults.string_length_max, 8);

    std::env::set_var(env_vars::PARAM_INT_RANGE_MIN, "20");
    assert_matches!(
        RuntimeConfig::load_or_default(&missing),
        Err(ConfigError::InvalidRange {
            setting: "param-int-range",
            min: 20,
            max: 10
        })
    );

    std::env::set_var(env_vars::PARAM_INT_RANGE_MIN, "1");
    std::env::set_var(env_vars::PARAM_STRING_LENGTH_MAX, "100000");
    assert_matches!(
        RuntimeConfig::load_or_default(&missing),
        Err(ConfigError::ValueTooLarge { value: 100000, .. })
    );
}
