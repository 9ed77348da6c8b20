//! Blank indexing and substitution
//!
//! Both operations walk the token stream once and copy literal tokens
//! through unchanged, so no byte outside a placeholder is ever altered.

pub mod engine;
pub mod error;
pub mod indexer;

pub use engine::{render_substituted, resolve_values, substitute};
pub use error::SubstitutionError;
pub use indexer::{index_blanks, render_indexed};
