// RUNTIME PREFERENCES (User Experience)

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use super::constants::compile_time::generation::MAX_GENERATED_STRING_LENGTH;
use super::ConfigError;
use crate::generation::StringAlphabet;
use crate::parameters::{BoundedKind, DefaultsResolver};

/// Bounds applied to `@{string}` and `@{int}` placeholders that omit them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterDefaults {
    /// Shortest generated string for `@{string}`
    pub string_length_min: u64,

    /// Longest generated string for `@{string}`
    pub string_length_max: u64,

    /// Smallest generated value for `@{int}`
    pub int_range_min: u64,

    /// Largest generated value for `@{int}`
    pub int_range_max: u64,
}

impl Default for ParameterDefaults {
    fn default() -> Self {
        Self {
            string_length_min: env::var(env_vars::PARAM_STRING_LENGTH_MIN)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            string_length_max: env::var(env_vars::PARAM_STRING_LENGTH_MAX)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            int_range_min: env::var(env_vars::PARAM_INT_RANGE_MIN)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            int_range_max: env::var(env_vars::PARAM_INT_RANGE_MAX)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }
}

impl ParameterDefaults {
    /// Check both default ranges the same way explicit bounds are checked
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.string_length_min > self.string_length_max {
            return Err(ConfigError::InvalidRange {
                setting: "param-string-length",
                min: self.string_length_min,
                max: self.string_length_max,
            });
        }

        if self.string_length_max > MAX_GENERATED_STRING_LENGTH {
            return Err(ConfigError::ValueTooLarge {
                setting: "param-string-length-max",
                value: self.string_length_max,
                limit: MAX_GENERATED_STRING_LENGTH,
            });
        }

        if self.int_range_min > self.int_range_max {
            return Err(ConfigError::InvalidRange {
                setting: "param-int-range",
                min: self.int_range_min,
                max: self.int_range_max,
            });
        }

        Ok(())
    }

    /// Copy with one default range replaced; an omitted end keeps its
    /// current value. The result is validated.
    pub fn with_bounds(
        &self,
        kind: BoundedKind,
        min: Option<u64>,
        max: Option<u64>,
    ) -> Result<Self, ConfigError> {
        let mut updated = self.clone();
        let (current_min, current_max) = match kind {
            BoundedKind::StringLength => (&mut updated.string_length_min, &mut updated.string_length_max),
            BoundedKind::IntRange => (&mut updated.int_range_min, &mut updated.int_range_max),
        };
        if let Some(min) = min {
            *current_min = min;
        }
        if let Some(max) = max {
            *current_max = max;
        }

        updated.validate()?;
        Ok(updated)
    }
}

impl DefaultsResolver for ParameterDefaults {
    fn resolve(&self, kind: BoundedKind) -> (u64, u64) {
        match kind {
            BoundedKind::StringLength => (self.string_length_min, self.string_length_max),
            BoundedKind::IntRange => (self.int_range_min, self.int_range_max),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationPreferences {
    /// Characters drawn for `@{string}` values
    pub string_alphabet: StringAlphabet,
}

impl Default for GenerationPreferences {
    fn default() -> Self {
        Self {
            string_alphabet: env::var(env_vars::GENERATION_ALPHABET)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingPreferences {
    /// Whether to use structured JSON logging
    pub use_structured_logging: bool,

    /// Whether to enable console output
    pub enable_console_logging: bool,

    /// Minimum level that reaches the logger
    pub min_log_level: LogLevel,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            use_structured_logging: env::var(env_vars::LOGGING_USE_STRUCTURED)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            enable_console_logging: env::var(env_vars::LOGGING_ENABLE_CONSOLE)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            min_log_level: env::var(env_vars::LOGGING_MIN_LEVEL)
                .ok()
                .and_then(|v| parse_log_level(&v))
                .unwrap_or(LogLevel::Warning),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// Convert to events::LogLevel for the logging service
    pub fn to_events_log_level(&self) -> crate::logging::events::LogLevel {
        match self {
            LogLevel::Error => crate::logging::events::LogLevel::Error,
            LogLevel::Warning => crate::logging::events::LogLevel::Warning,
            LogLevel::Info => crate::logging::events::LogLevel::Info,
            LogLevel::Debug => crate::logging::events::LogLevel::Debug,
        }
    }
}

/// Parse log level from string (used for environment variables)
fn parse_log_level(level: &str) -> Option<LogLevel> {
    match level.to_lowercase().as_str() {
        "error" | "0" => Some(LogLevel::Error),
        "warning" | "warn" | "1" => Some(LogLevel::Warning),
        "info" | "2" => Some(LogLevel::Info),
        "debug" | "3" => Some(LogLevel::Debug),
        _ => None,
    }
}

/// All persisted preferences, one TOML table per section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub defaults: ParameterDefaults,
    pub generation: GenerationPreferences,
    pub logging: LoggingPreferences,
}

impl RuntimeConfig {
    /// `<user config dir>/cmdstack/config.toml`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let mut path = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        path.push("cmdstack");
        path.push("config.toml");
        Ok(path)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Read and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        let config = Self::from_toml_str(&content)?;

        crate::log_success!(
            crate::logging::codes::success::CONFIG_LOADED,
            "Configuration loaded",
            "path" => path.display()
        );

        Ok(config)
    }

    /// Like `load`, but a missing file yields the defaults. Environment
    /// overrides are validated like file contents.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            crate::log_debug!("No config file found, using defaults",
                "path" => path.display()
            );
            let config = Self::default();
            config.validate()?;
            return Ok(config);
        }
        Self::load(path)
    }

    /// Validate, then write the config, creating parent directories
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::io(parent, e))?;
        }

        let content = self.to_toml_string()?;
        fs::write(path, content).map_err(|e| ConfigError::io(path, e))?;

        crate::log_success!(
            crate::logging::codes::success::CONFIG_SAVED,
            "Configuration saved",
            "path" => path.display()
        );

        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.defaults.validate()
    }
}

/// Environment variable names for configuration
pub mod env_vars {
    // Parameter defaults
    pub const PARAM_STRING_LENGTH_MIN: &str = "CMDSTACK_PARAM_STRING_LENGTH_MIN";
    pub const PARAM_STRING_LENGTH_MAX: &str = "CMDSTACK_PARAM_STRING_LENGTH_MAX";
    pub const PARAM_INT_RANGE_MIN: &str = "CMDSTACK_PARAM_INT_RANGE_MIN";
    pub const PARAM_INT_RANGE_MAX: &str = "CMDSTACK_PARAM_INT_RANGE_MAX";

    // Generation
    pub const GENERATION_ALPHABET: &str = "CMDSTACK_GENERATION_ALPHABET";

    // Logging
    pub const LOGGING_USE_STRUCTURED: &str = "CMDSTACK_LOGGING_USE_STRUCTURED";
    pub const LOGGING_ENABLE_CONSOLE: &str = "CMDSTACK_LOGGING_ENABLE_CONSOLE";
    pub const LOGGING_MIN_LEVEL: &str = "CMDSTACK_LOGGING_MIN_LEVEL";
}
