use super::{RandomSource, StringAlphabet};
use crate::logging::codes;
use crate::parameters::{Bounds, Parameter};
use crate::{log_error, log_success};

/// Produces one value per parameter.
///
/// - String: length uniform in the bounds, characters uniform over the
///   alphabet
/// - Int: uniform in the bounds, both ends included, plain base 10
/// - Bool: `"true"` or `"false"` with equal odds
/// - Blank: always `""`; blank values come from the user
#[derive(Debug, Clone, Default)]
pub struct ValueGenerator {
    alphabet: StringAlphabet,
}

impl ValueGenerator {
    pub fn new(alphabet: StringAlphabet) -> Self {
        Self { alphabet }
    }

    pub fn alphabet(&self) -> StringAlphabet {
        self.alphabet
    }

    /// Values for `parameters`, position-aligned
    pub fn generate<R: RandomSource>(&self, parameters: &[Parameter], rng: &mut R) -> Vec<String> {
        let values: Vec<String> = parameters
            .iter()
            .map(|parameter| self.generate_value(parameter, rng))
            .collect();

        log_success!(codes::success::VALUES_GENERATED, "Parameter values generated",
            "count" => values.len(),
            "alphabet" => self.alphabet
        );

        values
    }

    pub fn generate_value<R: RandomSource>(&self, parameter: &Parameter, rng: &mut R) -> String {
        match parameter {
            Parameter::String(bounds) => self.generate_string(*bounds, rng),
            Parameter::Int(bounds) => draw(*bounds, rng).to_string(),
            Parameter::Bool => rng.next_bool().to_string(),
            Parameter::Blank => String::new(),
        }
    }

    fn generate_string<R: RandomSource>(&self, bounds: Bounds, rng: &mut R) -> String {
        let chars = self.alphabet.chars();
        let last = (chars.len() - 1) as u64;
        let length = draw(bounds, rng);

        (0..length)
            .map(|_| {
                let index = rng.next_in_range(0, last).min(last);
                chars[index as usize]
            })
            .collect()
    }
}

/// Uniform draw within `bounds`, clamped if the source misbehaves
fn draw<R: RandomSource>(bounds: Bounds, rng: &mut R) -> u64 {
    debug_assert!(bounds.min() <= bounds.max());

    let value = rng.next_in_range(bounds.min(), bounds.max());
    if bounds.contains(value) {
        return value;
    }

    log_error!(codes::generation::RANDOM_VALUE_OUT_OF_RANGE, "Random source ignored its range",
        "value" => value,
        "bounds" => bounds
    );
    value.clamp(bounds.min(), bounds.max())
}

/// Values for `parameters` with the default alphanumeric alphabet
pub fn generate_values<R: RandomSource>(parameters: &[Parameter], rng: &mut R) -> Vec<String> {
    ValueGenerator::default().generate(parameters, rng)
}
