//! Parameter model shared by the parser, generator and substitution engine
//!
//! A `Parameter` is the parsed form of one placeholder. Parameters keep the
//! left-to-right order of their placeholders in the source text; that order
//! is the index every later stage uses.

pub mod parameter;
pub mod resolver;

pub use parameter::{BoundedKind, Bounds, BoundsError, Parameter, ParameterKind};
pub use resolver::DefaultsResolver;
