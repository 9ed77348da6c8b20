//! Placeholder body parser
//!
//! Grammar of the text between `@{` and `}`:
//!
//! ```text
//! body   := ws tag ws [ "[" ws bound ws "," ws bound ws "]" ws ]
//! tag    := "string" | "int" | "bool" | ""
//! bound  := digit+
//! ```
//!
//! The empty tag is a Blank. String and Int without bounds take theirs from
//! the `DefaultsResolver`.

use crate::config::compile_time::generation::MAX_GENERATED_STRING_LENGTH;
use crate::parameters::{BoundedKind, Bounds, DefaultsResolver, Parameter, ParameterKind};
use crate::syntax::error::{ParseError, ParseResult};
use crate::tokens::token::PLACEHOLDER_OPEN;
use crate::tokens::{Token, TokenStream};
use crate::utils::{Position, Span};
use crate::log_debug;

/// Cursor over one placeholder body
struct BodyCursor<'a> {
    body: &'a str,
    cursor: usize,
    body_start: Position,
    placeholder: Span,
}

impl<'a> BodyCursor<'a> {
    fn new(body: &'a str, placeholder: Span) -> Self {
        Self {
            body,
            cursor: 0,
            body_start: placeholder.start().advance_str(PLACEHOLDER_OPEN),
            placeholder,
        }
    }

    fn peek(&self) -> Option<char> {
        self.body[self.cursor..].chars().next()
    }

    fn at_end(&self) -> bool {
        self.cursor >= self.body.len()
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if !ch.is_whitespace() {
                break;
            }
            self.cursor += ch.len_utf8();
        }
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.cursor += expected.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consume characters until whitespace or one of `stops`
    fn read_run(&mut self, stops: &[char]) -> (&'a str, Span) {
        let start = self.cursor;
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() || stops.contains(&ch) {
                break;
            }
            self.cursor += ch.len_utf8();
        }
        (&self.body[start..self.cursor], self.span_of(start, self.cursor))
    }

    /// Span of `body[start..end]` in template coordinates
    fn span_of(&self, start: usize, end: usize) -> Span {
        let from = self.body_start.advance_str(&self.body[..start]);
        Span::new(from, from.advance_str(&self.body[start..end]))
    }

    /// Empty span at the cursor, or the closing brace when at the end
    fn here(&self) -> Span {
        if self.at_end() {
            let close = self.body_start.advance_str(self.body);
            Span::new(close, self.placeholder.end())
        } else {
            let next = self.peek().map(char::len_utf8).unwrap_or(0);
            self.span_of(self.cursor, self.cursor + next)
        }
    }
}

/// Parses placeholder tokens into parameters, resolving omitted bounds
pub struct PlaceholderParser<R> {
    resolver: R,
}

impl<R: DefaultsResolver> PlaceholderParser<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    /// All parameters of a token stream, in placeholder order
    pub fn parse_stream(&self, tokens: &TokenStream) -> ParseResult<Vec<Parameter>> {
        let mut parameters = Vec::with_capacity(tokens.placeholder_count());
        for token in tokens {
            if let Token::Placeholder(body) = &token.value {
                parameters.push(self.parse_body(body, token.span)?);
            }
        }
        Ok(parameters)
    }

    /// Parse the text between `@{` and `}` of the placeholder at `span`
    pub fn parse_body(&self, body: &str, span: Span) -> ParseResult<Parameter> {
        let mut cursor = BodyCursor::new(body, span);

        cursor.skip_whitespace();
        let (tag, tag_span) = cursor.read_run(&['[']);
        let kind = ParameterKind::from_tag(tag).ok_or_else(|| ParseError::unknown_type(tag, tag_span))?;

        cursor.skip_whitespace();
        if cursor.at_end() {
            return self.with_default_bounds(kind, span);
        }

        if cursor.peek() != Some('[') {
            return Err(ParseError::malformed_bounds(
                "expected '[' or the end of the placeholder after the type",
                cursor.here(),
            ));
        }

        if kind.bounded_kind().is_none() {
            return Err(ParseError::UnexpectedBounds { kind, span });
        }

        let (min, max) = self.parse_bounds(&mut cursor)?;
        let bounds = Bounds::new(min, max).ok_or(ParseError::InvalidRange { min, max, span })?;
        self.build(kind, bounds, span)
    }

    /// `"[" ws bound ws "," ws bound ws "]" ws` up to the end of the body
    fn parse_bounds(&self, cursor: &mut BodyCursor<'_>) -> ParseResult<(u64, u64)> {
        cursor.eat('[');

        cursor.skip_whitespace();
        let min = Self::parse_bound(cursor)?;

        cursor.skip_whitespace();
        if !cursor.eat(',') {
            return Err(ParseError::malformed_bounds(
                "expected ',' between min and max",
                cursor.here(),
            ));
        }

        cursor.skip_whitespace();
        let max = Self::parse_bound(cursor)?;

        cursor.skip_whitespace();
        if !cursor.eat(']') {
            return Err(ParseError::malformed_bounds(
                "expected ']' after max",
                cursor.here(),
            ));
        }

        cursor.skip_whitespace();
        if !cursor.at_end() {
            return Err(ParseError::malformed_bounds(
                "unexpected text after ']'",
                cursor.here(),
            ));
        }

        Ok((min, max))
    }

    fn parse_bound(cursor: &mut BodyCursor<'_>) -> ParseResult<u64> {
        let (text, span) = cursor.read_run(&[',', ']', '[']);

        if text.is_empty() {
            return Err(ParseError::invalid_bound(text, cursor.here()));
        }

        if !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::invalid_bound(text, span));
        }

        // digits only, so the only failure left is overflow
        text.parse::<u64>()
            .map_err(|_| ParseError::invalid_bound(text, span))
    }

    fn with_default_bounds(&self, kind: ParameterKind, span: Span) -> ParseResult<Parameter> {
        let Some(bounded) = kind.bounded_kind() else {
            return Ok(match kind {
                ParameterKind::Bool => Parameter::Bool,
                _ => Parameter::Blank,
            });
        };

        let (min, max) = self.resolver.resolve(bounded);
        log_debug!("Applying default bounds",
            "kind" => kind,
            "min" => min,
            "max" => max
        );

        let bounds = Bounds::new(min, max).ok_or(ParseError::InvalidRange { min, max, span })?;
        self.build(kind, bounds, span)
    }

    fn build(&self, kind: ParameterKind, bounds: Bounds, span: Span) -> ParseResult<Parameter> {
        match kind.bounded_kind() {
            Some(BoundedKind::StringLength) => {
                if bounds.max() > MAX_GENERATED_STRING_LENGTH {
                    return Err(ParseError::BoundTooLarge {
                        value: bounds.max(),
                        span,
                    });
                }
                Ok(Parameter::String(bounds))
            }
            Some(BoundedKind::IntRange) => Ok(Parameter::Int(bounds)),
            None => Err(ParseError::UnexpectedBounds { kind, span }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexical::tokenize;
    use assert_matches::assert_matches;

    struct Fixed;

    impl DefaultsResolver for Fixed {
        fn resolve(&self, kind: BoundedKind) -> (u64, u64) {
            match kind {
                BoundedKind::StringLength => (5, 10),
                BoundedKind::IntRange => (0, 99),
            }
        }
    }

    struct Inverted;

    impl DefaultsResolver for Inverted {
        fn resolve(&self, _kind: BoundedKind) -> (u64, u64) {
            (8, 2)
        }
    }

    fn parse_with<R: DefaultsResolver>(resolver: R, text: &str) -> ParseResult<Vec<Parameter>> {
        let tokens = tokenize(text)?;
        PlaceholderParser::new(resolver).parse_stream(&tokens)
    }

    fn parse(text: &str) -> ParseResult<Vec<Parameter>> {
        parse_with(Fixed, text)
    }

    fn bounds(min: u64, max: u64) -> Bounds {
        Bounds::new(min, max).unwrap()
    }

    #[test]
    fn test_all_kinds() {
        assert_eq!(
            parse("@{string[3,3]} @{int[1,5]} @{bool} @{}").unwrap(),
            vec![
                Parameter::String(bounds(3, 3)),
                Parameter::Int(bounds(1, 5)),
                Parameter::Bool,
                Parameter::Blank,
            ]
        );
    }

    #[test]
    fn test_defaults_fill_missing_bounds() {
        assert_eq!(
            parse("@{string} @{int}").unwrap(),
            vec![Parameter::String(bounds(5, 10)), Parameter::Int(bounds(0, 99))]
        );
    }

    #[test]
    fn test_whitespace_is_tolerated() {
        assert_eq!(
            parse("@{ } @{ int [ 1 , 5 ] } @{\tbool\t}").unwrap(),
            vec![Parameter::Blank, Parameter::Int(bounds(1, 5)), Parameter::Bool]
        );
    }

    #[test]
    fn test_unknown_types() {
        assert_matches!(parse("@{uuid}"), Err(ParseError::UnknownType { tag, .. }) if tag == "uuid");
        assert_matches!(parse("@{Int}"), Err(ParseError::UnknownType { .. }));
        assert_matches!(parse("@{str ing}"), Err(ParseError::UnknownType { tag, .. }) if tag == "str");
    }

    #[test]
    fn test_unknown_type_span_covers_tag() {
        let err = parse("ls @{ uuid }").unwrap_err();
        let span = err.span().unwrap();
        assert_eq!(span.slice("ls @{ uuid }"), "uuid");
    }

    #[test]
    fn test_invalid_bounds() {
        assert_matches!(parse("@{int[-1,5]}"), Err(ParseError::InvalidBound { text, .. }) if text == "-1");
        assert_matches!(parse("@{int[1.5,5]}"), Err(ParseError::InvalidBound { .. }));
        assert_matches!(parse("@{int[a,5]}"), Err(ParseError::InvalidBound { .. }));
        assert_matches!(
            parse("@{int[0,99999999999999999999]}"),
            Err(ParseError::InvalidBound { .. })
        );
    }

    #[test]
    fn test_invalid_range() {
        assert_matches!(
            parse("@{int[10,2]}"),
            Err(ParseError::InvalidRange { min: 10, max: 2, .. })
        );
        assert_matches!(
            parse("@{string[4,1]}"),
            Err(ParseError::InvalidRange { min: 4, max: 1, .. })
        );
    }

    #[test]
    fn test_inverted_defaults_are_rejected() {
        assert_matches!(
            parse_with(Inverted, "@{int}"),
            Err(ParseError::InvalidRange { min: 8, max: 2, .. })
        );
        assert!(parse_with(Inverted, "@{bool} @{}").is_ok());
    }

    #[test]
    fn test_unexpected_bounds() {
        assert_matches!(
            parse("@{bool[1,2]}"),
            Err(ParseError::UnexpectedBounds { kind: ParameterKind::Bool, .. })
        );
        assert_matches!(
            parse("@{[1,2]}"),
            Err(ParseError::UnexpectedBounds { kind: ParameterKind::Blank, .. })
        );
        // checked before the bound text
        assert_matches!(
            parse("@{bool[x,y]}"),
            Err(ParseError::UnexpectedBounds { .. })
        );
    }

    #[test]
    fn test_malformed_bounds() {
        for text in [
            "@{int[1 2]}",
            "@{int[1,2}",
            "@{int[1,2] x}",
            "@{int x}",
            "@{int[1,2][3,4]}",
        ] {
            assert_matches!(parse(text), Err(ParseError::MalformedBounds { .. }), "{}", text);
        }
    }

    #[test]
    fn test_empty_bound_is_invalid() {
        for text in ["@{int[,2]}", "@{int[1,]}", "@{string[ , ]}", "@{int[]}"] {
            assert_matches!(
                parse(text),
                Err(ParseError::InvalidBound { text: ref bound, .. }) if bound.is_empty(),
                "{}",
                text
            );
        }

        let err = parse("echo @{int[,2]}").unwrap_err();
        assert_eq!(err.span().map(|s| s.start.offset), Some(11));
    }

    #[test]
    fn test_string_length_ceiling() {
        let text = format!("@{{string[1,{}]}}", MAX_GENERATED_STRING_LENGTH + 1);
        assert_matches!(parse(&text), Err(ParseError::BoundTooLarge { .. }));

        let text = format!("@{{string[1,{}]}}", MAX_GENERATED_STRING_LENGTH);
        assert!(parse(&text).is_ok());

        // ints have no ceiling
        assert!(parse("@{int[0,18446744073709551615]}").is_ok());
    }

    #[test]
    fn test_first_error_wins() {
        assert_matches!(
            parse("@{int[9,1]} @{uuid}"),
            Err(ParseError::InvalidRange { .. })
        );
    }
}
