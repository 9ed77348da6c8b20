//! Token model for command templates
//!
//! A template is scanned into alternating literal runs and placeholders.
//! Concatenating the source slices of all tokens reproduces the template
//! byte for byte; substitution and blank indexing rely on that.

pub mod token;
pub mod token_stream;

pub use token::Token;
pub use token_stream::{SpannedToken, TokenStream};

pub use crate::utils::{Position, Span, Spanned};
