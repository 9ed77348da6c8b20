//! Shared primitive types used by the scanner, parser and substitution engine.

pub mod span;

pub use span::{format_error, Position, Span, Spanned};
