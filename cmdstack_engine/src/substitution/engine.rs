use super::SubstitutionError;
use crate::lexical::tokenize;
use crate::log_error;
use crate::logging::codes;
use crate::parameters::Parameter;
use crate::tokens::{Token, TokenStream};

/// Replace the i-th placeholder of `tokens` with `values[i]`.
///
/// The value count must equal the placeholder count; a mismatch is rejected
/// before any output is built.
pub fn render_substituted<S: AsRef<str>>(
    tokens: &TokenStream,
    values: &[S],
) -> Result<String, SubstitutionError> {
    let expected = tokens.placeholder_count();
    if values.len() != expected {
        let error = SubstitutionError::ValueCountMismatch {
            expected,
            provided: values.len(),
        };
        log_error!(error.error_code(), "Refusing to substitute",
            "expected" => expected,
            "provided" => values.len()
        );
        return Err(error);
    }

    let mut values = values.iter();
    let mut output = String::new();

    for token in tokens {
        match &token.value {
            Token::Literal(text) => output.push_str(text),
            Token::Placeholder(_) => {
                if let Some(value) = values.next() {
                    output.push_str(value.as_ref());
                }
            }
        }
    }

    Ok(output)
}

/// Scan `text` and substitute `values` into its placeholders
pub fn substitute<S: AsRef<str>>(text: &str, values: &[S]) -> Result<String, SubstitutionError> {
    let tokens = tokenize(text).map_err(|e| SubstitutionError::Parse(e.into()))?;
    let output = render_substituted(&tokens, values)?;

    crate::log_success!(codes::success::COMMAND_SUBSTITUTED, "Command substituted",
        "placeholders" => values.len()
    );

    Ok(output)
}

/// One value per parameter: the generated value for typed parameters, the
/// next blank value for blanks.
///
/// Blanks without a supplied value resolve to the empty string. More blank
/// values than blanks, or a generated list of the wrong length, is an error.
pub fn resolve_values<G, B>(
    parameters: &[Parameter],
    generated: &[G],
    blanks: &[B],
) -> Result<Vec<String>, SubstitutionError>
where
    G: AsRef<str>,
    B: AsRef<str>,
{
    if generated.len() != parameters.len() {
        let error = SubstitutionError::ValueCountMismatch {
            expected: parameters.len(),
            provided: generated.len(),
        };
        log_error!(error.error_code(), "Generated values do not match parameters",
            "expected" => parameters.len(),
            "provided" => generated.len()
        );
        return Err(error);
    }

    let blank_count = parameters.iter().filter(|p| p.is_blank()).count();
    if blanks.len() > blank_count {
        let error = SubstitutionError::BlankValueCountMismatch {
            expected: blank_count,
            provided: blanks.len(),
        };
        log_error!(error.error_code(), "Too many blank values",
            "expected" => blank_count,
            "provided" => blanks.len()
        );
        return Err(error);
    }

    let mut blanks = blanks.iter();
    Ok(parameters
        .iter()
        .zip(generated)
        .map(|(parameter, value)| {
            if parameter.is_blank() {
                blanks
                    .next()
                    .map(|b| b.as_ref().to_string())
                    .unwrap_or_default()
            } else {
                value.as_ref().to_string()
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameters::Bounds;
    use assert_matches::assert_matches;

    #[test]
    fn test_substitute_preserves_literals() {
        assert_eq!(
            substitute("ssh @{string[3,3]}@host", &["abc"]).unwrap(),
            "ssh abc@host"
        );
        assert_eq!(
            substitute("  a\t@{}\n{b} @ @{int}  ", &["X", "7"]).unwrap(),
            "  a\tX\n{b} @ 7  "
        );
        assert_eq!(substitute::<&str>("plain text", &[]).unwrap(), "plain text");
    }

    #[test]
    fn test_substitute_does_not_validate_bodies() {
        // only the scan matters here
        assert_eq!(substitute("@{whatever}", &["v"]).unwrap(), "v");
    }

    #[test]
    fn test_value_count_mismatch_is_rejected() {
        assert_matches!(
            substitute("echo @{} @{}", &["only one"]),
            Err(SubstitutionError::ValueCountMismatch { expected: 2, provided: 1 })
        );
        assert_matches!(
            substitute("echo", &["extra"]),
            Err(SubstitutionError::ValueCountMismatch { expected: 0, provided: 1 })
        );
    }

    #[test]
    fn test_unterminated_text_is_a_parse_error() {
        let err = substitute("echo @{", &["x"]).unwrap_err();
        assert_matches!(err, SubstitutionError::Parse(_));
        assert!(!err.is_contract_violation());
    }

    #[test]
    fn test_substitute_is_pure() {
        let text = "curl @{bool} @{int[1,5]} @{}";
        let values = ["false", "2", "x"];
        assert_eq!(
            substitute(text, &values).unwrap(),
            substitute(text, &values).unwrap()
        );
    }

    #[test]
    fn test_resolve_values_folds_in_blanks() {
        let parameters = [
            Parameter::Blank,
            Parameter::Int(Bounds::exact(4)),
            Parameter::Blank,
            Parameter::Bool,
        ];
        let generated = ["", "4", "", "true"];

        assert_eq!(
            resolve_values(&parameters, &generated, &["a", "b"]).unwrap(),
            vec!["a", "4", "b", "true"]
        );
        assert_eq!(
            resolve_values::<&str, &str>(&parameters, &generated, &["a"]).unwrap(),
            vec!["a", "4", "", "true"]
        );
    }

    #[test]
    fn test_resolve_values_rejects_bad_counts() {
        let parameters = [Parameter::Blank, Parameter::Bool];

        assert_matches!(
            resolve_values(&parameters, &["", "true"], &["a", "b"]),
            Err(SubstitutionError::BlankValueCountMismatch { expected: 1, provided: 2 })
        );
        assert_matches!(
            resolve_values::<&str, &str>(&parameters, &["true"], &[]),
            Err(SubstitutionError::ValueCountMismatch { expected: 2, provided: 1 })
        );
    }
}
