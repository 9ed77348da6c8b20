//! Template parsing: token stream to ordered parameter list
//!
//! `parse_template` is the main entry point. It scans the text, parses every
//! placeholder body and returns a `Template` that later stages (blank
//! indexing, substitution) reuse without scanning again.

mod error;
mod parser;
mod template;

pub use error::{ParseError, ParseResult};
pub use parser::PlaceholderParser;
pub use template::Template;

use crate::lexical::LexicalAnalyzer;
use crate::logging::codes;
use crate::parameters::{DefaultsResolver, Parameter};
use crate::{log_error, log_success};

/// Scan and parse `text`, resolving omitted bounds through `resolver`
pub fn parse_template<R: DefaultsResolver>(text: &str, resolver: R) -> ParseResult<Template> {
    let mut analyzer = LexicalAnalyzer::new();
    let result = analyzer
        .tokenize(text)
        .map_err(ParseError::from)
        .and_then(|tokens| {
            let parameters = PlaceholderParser::new(resolver).parse_stream(&tokens)?;
            Ok(Template::from_parts(
                text.to_string(),
                tokens,
                parameters,
                analyzer.metrics().clone(),
            ))
        });

    match &result {
        Ok(template) => {
            log_success!(codes::success::TEMPLATE_PARSED, "Template parsed",
                "parameters" => template.parameters().len(),
                "blanks" => template.blank_count()
            );
        }
        Err(error) => match error.span() {
            Some(span) => log_error!(error.error_code(), "Template parsing failed",
                span = span,
                "error" => error
            ),
            None => log_error!(error.error_code(), "Template parsing failed",
                "error" => error
            ),
        },
    }

    result
}

/// Ordered parameters of `text`
pub fn parse<R: DefaultsResolver>(text: &str, resolver: R) -> ParseResult<Vec<Parameter>> {
    parse_template(text, resolver).map(Template::into_parameters)
}
