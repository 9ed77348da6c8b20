use crate::generation::{RandomSource, ValueGenerator};
use crate::log_error;
use crate::logging::{codes, Code};
use crate::parameters::{DefaultsResolver, Parameter};
use crate::substitution::SubstitutionError;
use crate::syntax::{parse_template, ParseError, Template};

/// Stage a recomputation starts from
///
/// A text change re-enters at `Parsed`, a refresh at `Generated` and a blank
/// edit at `Substituted`. Every later stage is then recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SessionState {
    Parsed,
    Generated,
    Substituted,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Blank @{{{ordinal}}} does not exist: the template has {blank_count} blanks")]
    BlankOrdinalOutOfRange { ordinal: usize, blank_count: usize },

    #[error(transparent)]
    Substitution(#[from] SubstitutionError),
}

impl SessionError {
    pub fn error_code(&self) -> Code {
        match self {
            Self::Parse(error) => error.error_code(),
            Self::BlankOrdinalOutOfRange { .. } => codes::session::BLANK_ORDINAL_OUT_OF_RANGE,
            Self::Substitution(error) => error.error_code(),
        }
    }
}

/// One open command and its derived projections.
///
/// The generated command is always recomputed from the current template,
/// the current generated values and the current blank values; nothing is
/// committed. Blank values are addressed by blank ordinal (1-based, counting
/// only blanks) and are reset to empty strings whenever the text is
/// re-parsed.
#[derive(Debug)]
pub struct TemplateSession<R, G> {
    resolver: R,
    rng: G,
    generator: ValueGenerator,
    template: Template,
    generated: Vec<String>,
    blank_values: Vec<String>,
    command: String,
    state: SessionState,
}

impl<R: DefaultsResolver, G: RandomSource> TemplateSession<R, G> {
    /// Parse `text` and run generation and substitution once
    pub fn open(text: &str, resolver: R, rng: G) -> Result<Self, SessionError> {
        Self::with_generator(text, resolver, rng, ValueGenerator::default())
    }

    pub fn with_generator(
        text: &str,
        resolver: R,
        rng: G,
        generator: ValueGenerator,
    ) -> Result<Self, SessionError> {
        let template = parse_template(text, &resolver)?;
        let blank_values = vec![String::new(); template.blank_count()];

        let mut session = Self {
            resolver,
            rng,
            generator,
            template,
            generated: Vec::new(),
            blank_values,
            command: String::new(),
            state: SessionState::Parsed,
        };
        session.generate()?;
        session.state = SessionState::Parsed;

        Ok(session)
    }

    /// Replace the text and recompute everything.
    ///
    /// On a parse error the session keeps its previous template, values and
    /// command.
    pub fn set_text(&mut self, text: &str) -> Result<(), SessionError> {
        let template = parse_template(text, &self.resolver)?;

        self.blank_values = vec![String::new(); template.blank_count()];
        self.template = template;
        self.generate()?;
        self.state = SessionState::Parsed;

        Ok(())
    }

    /// Draw fresh values for the typed parameters, keeping blank values
    pub fn refresh(&mut self) -> Result<(), SessionError> {
        self.generate()
    }

    /// Set the value of blank `@{ordinal}` and re-substitute
    pub fn set_blank_value(&mut self, ordinal: usize, value: impl Into<String>) -> Result<(), SessionError> {
        let blank_count = self.blank_values.len();
        if ordinal == 0 || ordinal > blank_count {
            let error = SessionError::BlankOrdinalOutOfRange { ordinal, blank_count };
            log_error!(error.error_code(), "Blank ordinal out of range",
                "ordinal" => ordinal,
                "blank_count" => blank_count
            );
            return Err(error);
        }

        self.blank_values[ordinal - 1] = value.into();
        self.substitute()
    }

    pub fn source(&self) -> &str {
        self.template.source()
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn parameters(&self) -> &[Parameter] {
        self.template.parameters()
    }

    pub fn blank_values(&self) -> &[String] {
        &self.blank_values
    }

    /// Generated value per placeholder; empty for blanks
    pub fn generated_values(&self) -> &[String] {
        &self.generated
    }

    pub fn generated_command(&self) -> &str {
        &self.command
    }

    pub fn indexed_command(&self) -> String {
        self.template.index_blanks()
    }

    /// Stage the most recent recomputation started from
    pub fn state(&self) -> SessionState {
        self.state
    }

    fn generate(&mut self) -> Result<(), SessionError> {
        self.generated = self
            .generator
            .generate(self.template.parameters(), &mut self.rng);
        self.substitute()?;
        self.state = SessionState::Generated;
        Ok(())
    }

    fn substitute(&mut self) -> Result<(), SessionError> {
        let values = self
            .template
            .resolve_values(&self.generated, &self.blank_values)?;
        self.command = self.template.substitute(&values)?;
        self.state = SessionState::Substituted;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParameterDefaults;
    use crate::generation::{ScriptedRandom, SeededRandom};
    use assert_matches::assert_matches;

    fn defaults() -> ParameterDefaults {
        ParameterDefaults {
            string_length_min: 5,
            string_length_max: 10,
            int_range_min: 5,
            int_range_max: 10,
        }
    }

    #[test]
    fn test_open_runs_every_stage() {
        let session = TemplateSession::open("ssh @{}@@{} -p @{int[22,22]}", defaults(), SeededRandom::new(1))
            .unwrap();

        assert_eq!(session.state(), SessionState::Parsed);
        assert_eq!(session.blank_values(), ["", ""]);
        assert_eq!(session.indexed_command(), "ssh @{1}@@{2} -p @{int[22,22]}");
        assert_eq!(session.generated_command(), "ssh @ -p 22");
    }

    #[test]
    fn test_blank_edit_only_resubstitutes() {
        let mut session = TemplateSession::open("ping @{} -c @{int[1,9]}", defaults(), SeededRandom::new(9))
            .unwrap();
        let count = session.generated_values()[1].clone();

        session.set_blank_value(1, "example.com").unwrap();

        assert_eq!(session.state(), SessionState::Substituted);
        assert_eq!(session.generated_values()[1], count);
        assert_eq!(session.generated_command(), format!("ping example.com -c {}", count));
    }

    #[test]
    fn test_refresh_keeps_blank_values() {
        let mut session = TemplateSession::open(
            "echo @{} @{int[1,3]}",
            defaults(),
            ScriptedRandom::new(vec![0, 1, 2]),
        )
        .unwrap();
        assert_eq!(session.generated_command(), "echo  1");

        session.set_blank_value(1, "hi").unwrap();
        session.refresh().unwrap();

        assert_eq!(session.state(), SessionState::Generated);
        assert_eq!(session.blank_values(), ["hi"]);
        assert_eq!(session.generated_command(), "echo hi 2");
    }

    #[test]
    fn test_reparse_resets_blank_values() {
        let mut session = TemplateSession::open("cp @{} @{}", defaults(), SeededRandom::new(2)).unwrap();
        session.set_blank_value(2, "dst").unwrap();
        assert_eq!(session.generated_command(), "cp  dst");

        session.set_text("cp -r @{} @{} @{}").unwrap();

        assert_eq!(session.state(), SessionState::Parsed);
        assert_eq!(session.blank_values(), ["", "", ""]);
        assert_eq!(session.generated_command(), "cp -r   ");
    }

    #[test]
    fn test_parse_error_keeps_previous_projection() {
        let mut session = TemplateSession::open("echo @{bool}", defaults(), SeededRandom::new(4)).unwrap();
        let before = session.generated_command().to_string();

        let err = session.set_text("echo @{bool").unwrap_err();

        assert_matches!(err, SessionError::Parse(ParseError::UnterminatedPlaceholder { .. }));
        assert_eq!(session.source(), "echo @{bool}");
        assert_eq!(session.generated_command(), before);
    }

    #[test]
    fn test_blank_ordinal_is_checked() {
        let mut session = TemplateSession::open("echo @{} @{bool}", defaults(), SeededRandom::new(4)).unwrap();

        assert_matches!(
            session.set_blank_value(0, "x"),
            Err(SessionError::BlankOrdinalOutOfRange { ordinal: 0, blank_count: 1 })
        );
        assert_matches!(
            session.set_blank_value(2, "x"),
            Err(SessionError::BlankOrdinalOutOfRange { ordinal: 2, blank_count: 1 })
        );
        assert_eq!(
            session.set_blank_value(2, "x").unwrap_err().error_code(),
            codes::session::BLANK_ORDINAL_OUT_OF_RANGE
        );
    }
}
