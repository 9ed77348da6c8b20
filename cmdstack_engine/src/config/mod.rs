//! Configuration module for the cmdstack engine
//!
//! Compile-time limits live in `constants`; user preferences (default
//! parameter bounds, generation alphabet, logging) live in `runtime` and
//! are persisted as TOML.

pub mod constants;
pub mod error;
pub mod runtime;

pub use constants::compile_time;
pub use error::ConfigError;
pub use runtime::{
    GenerationPreferences, LogLevel, LoggingPreferences, ParameterDefaults, RuntimeConfig,
};
