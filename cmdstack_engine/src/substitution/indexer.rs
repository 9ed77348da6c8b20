use crate::lexical::tokenize;
use crate::tokens::{Token, TokenStream};

/// Render `tokens` with the k-th blank placeholder replaced by `@{k}`.
///
/// `blank_flags` yields one flag per placeholder in source order; typed
/// placeholders and literals are copied through unchanged.
pub fn render_indexed<I>(tokens: &TokenStream, blank_flags: I) -> String
where
    I: IntoIterator<Item = bool>,
{
    let mut flags = blank_flags.into_iter();
    let mut ordinal = 0usize;
    let mut output = String::new();

    for token in tokens {
        match &token.value {
            Token::Literal(text) => output.push_str(text),
            Token::Placeholder(_) => {
                if flags.next().unwrap_or(false) {
                    ordinal += 1;
                    output.push_str(&format!("@{{{}}}", ordinal));
                } else {
                    output.push_str(&token.value.source_text());
                }
            }
        }
    }

    output
}

/// Display form of `text` with blanks numbered from 1.
///
/// Purely cosmetic. A blank is a placeholder whose body is empty or
/// whitespace, which matches the parser on any text it accepts. Text that
/// does not scan is returned unchanged.
pub fn index_blanks(text: &str) -> String {
    match tokenize(text) {
        Ok(tokens) => {
            let flags: Vec<bool> = tokens
                .placeholders()
                .map(|t| t.value.body().is_some_and(|body| body.trim().is_empty()))
                .collect();
            render_indexed(&tokens, flags)
        }
        Err(_) => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blanks_numbered_left_to_right() {
        assert_eq!(index_blanks("echo @{} @{}"), "echo @{1} @{2}");
    }

    #[test]
    fn test_typed_placeholders_do_not_count() {
        assert_eq!(
            index_blanks("@{int[1,5]} @{} @{bool} @{ }"),
            "@{int[1,5]} @{1} @{bool} @{2}"
        );
    }

    #[test]
    fn test_literal_text_is_verbatim() {
        let text = "  tabs\tand\nnewlines @{}  {x} @ ";
        assert_eq!(index_blanks(text), "  tabs\tand\nnewlines @{1}  {x} @ ");
        assert_eq!(index_blanks("no placeholders"), "no placeholders");
    }

    #[test]
    fn test_unscannable_text_is_returned_as_is() {
        assert_eq!(index_blanks("echo @{} @{int"), "echo @{} @{int");
    }
}
