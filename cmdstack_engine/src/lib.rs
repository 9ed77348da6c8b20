//! Command template engine
//!
//! A command template is shell text with typed placeholders:
//!
//! ```text
//! curl -X @{} https://example.com/items/@{int[1,100]}?verbose=@{bool}
//! ```
//!
//! `@{string}`, `@{int}` and `@{bool}` are filled with random values,
//! optionally bounded as `@{int[1,100]}` or `@{string[8,8]}`. `@{}` is a
//! blank the user fills in. Everything outside a placeholder is copied to
//! the generated command byte for byte.

// Internal modules
pub mod config;
pub mod generation;
pub mod lexical;
#[macro_use]
pub mod logging;
pub mod parameters;
pub mod pipeline;
pub mod substitution;
pub mod syntax;
pub mod tokens;
pub mod utils;

// Re-export key types for library consumers
pub use config::{ConfigError, ParameterDefaults, RuntimeConfig};
pub use generation::{
    generate_values, RandomSource, ScriptedRandom, SeededRandom, StringAlphabet, ThreadRandom,
    ValueGenerator,
};
pub use parameters::{BoundedKind, Bounds, DefaultsResolver, Parameter, ParameterKind};
pub use pipeline::{
    process_template, PipelineError, PipelineResult, RequestSequencer, RequestTicket,
    SessionError, SessionState, TemplateSession,
};
pub use substitution::{index_blanks, resolve_values, substitute, SubstitutionError};
pub use syntax::{parse, parse_template, ParseError, ParseResult, Template};
