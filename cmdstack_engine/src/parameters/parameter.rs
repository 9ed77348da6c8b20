use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// BOUNDS
// ============================================================================

/// Inclusive `[min, max]` constraint with `min <= max` guaranteed.
///
/// For strings the bounds constrain the length, for integers the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBounds")]
pub struct Bounds {
    min: u64,
    max: u64,
}

#[derive(Deserialize)]
struct RawBounds {
    min: u64,
    max: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("min ({min}) cannot be greater than max ({max})")]
pub struct BoundsError {
    pub min: u64,
    pub max: u64,
}

impl Bounds {
    /// `None` when `min > max`
    pub fn new(min: u64, max: u64) -> Option<Self> {
        (min <= max).then_some(Self { min, max })
    }

    /// Single-value bounds
    pub fn exact(value: u64) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    pub fn min(&self) -> u64 {
        self.min
    }

    pub fn max(&self) -> u64 {
        self.max
    }

    pub fn contains(&self, value: u64) -> bool {
        self.min <= value && value <= self.max
    }
}

impl TryFrom<RawBounds> for Bounds {
    type Error = BoundsError;

    fn try_from(raw: RawBounds) -> Result<Self, Self::Error> {
        Self::new(raw.min, raw.max).ok_or(BoundsError {
            min: raw.min,
            max: raw.max,
        })
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.min, self.max)
    }
}

// ============================================================================
// KINDS
// ============================================================================

/// Placeholder types, named by their tag in the template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterKind {
    String,
    Int,
    Bool,
    Blank,
}

impl ParameterKind {
    /// Map a type tag to its kind; the empty tag is Blank. Tags are
    /// case-sensitive.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "string" => Some(Self::String),
            "int" => Some(Self::Int),
            "bool" => Some(Self::Bool),
            "" => Some(Self::Blank),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Bool => "bool",
            Self::Blank => "blank",
        }
    }

    /// Which configured default applies when bounds are omitted
    pub fn bounded_kind(&self) -> Option<BoundedKind> {
        match self {
            Self::String => Some(BoundedKind::StringLength),
            Self::Int => Some(BoundedKind::IntRange),
            Self::Bool | Self::Blank => None,
        }
    }
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kinds that carry bounds, used to ask a `DefaultsResolver` for defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundedKind {
    StringLength,
    IntRange,
}

impl BoundedKind {
    /// Name of the matching setting, as the CLI spells it
    pub fn setting(&self) -> &'static str {
        match self {
            Self::StringLength => "param-string-length",
            Self::IntRange => "param-int-range",
        }
    }
}

// ============================================================================
// PARAMETER
// ============================================================================

/// One parsed placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Parameter {
    /// Random alphanumeric string whose length lies within the bounds
    String(Bounds),
    /// Random integer within the bounds
    Int(Bounds),
    Bool,
    /// Value supplied by the user rather than generated
    Blank,
}

impl Parameter {
    pub fn kind(&self) -> ParameterKind {
        match self {
            Self::String(_) => ParameterKind::String,
            Self::Int(_) => ParameterKind::Int,
            Self::Bool => ParameterKind::Bool,
            Self::Blank => ParameterKind::Blank,
        }
    }

    pub fn bounds(&self) -> Option<Bounds> {
        match self {
            Self::String(bounds) | Self::Int(bounds) => Some(*bounds),
            Self::Bool | Self::Blank => None,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.bounds() {
            Some(bounds) => write!(f, "{}{}", self.kind(), bounds),
            None => write!(f, "{}", self.kind()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_reject_inverted_range() {
        assert!(Bounds::new(10, 2).is_none());
        assert_eq!(Bounds::new(2, 2), Some(Bounds::exact(2)));

        let bounds = Bounds::new(1, 5).unwrap();
        assert!(bounds.contains(1));
        assert!(bounds.contains(5));
        assert!(!bounds.contains(6));
    }

    #[test]
    fn test_tags_are_case_sensitive() {
        assert_eq!(ParameterKind::from_tag("int"), Some(ParameterKind::Int));
        assert_eq!(ParameterKind::from_tag(""), Some(ParameterKind::Blank));
        assert_eq!(ParameterKind::from_tag("Int"), None);
        assert_eq!(ParameterKind::from_tag("uuid"), None);
    }

    #[test]
    fn test_parameter_display() {
        let string = Parameter::String(Bounds::exact(3));
        assert_eq!(string.to_string(), "string[3,3]");
        assert_eq!(Parameter::Bool.to_string(), "bool");
        assert_eq!(Parameter::Blank.to_string(), "blank");
    }

    #[test]
    fn test_parameter_json_shape() {
        let int = Parameter::Int(Bounds::new(1, 5).unwrap());
        let json = serde_json::to_value(int).unwrap();
        assert_eq!(json, serde_json::json!({"type": "int", "min": 1, "max": 5}));

        let blank = serde_json::to_value(Parameter::Blank).unwrap();
        assert_eq!(blank, serde_json::json!({"type": "blank"}));
    }

    #[test]
    fn test_deserialize_enforces_bounds_invariant() {
        let ok: Parameter = serde_json::from_str(r#"{"type":"string","min":2,"max":4}"#).unwrap();
        assert_eq!(ok.bounds(), Bounds::new(2, 4));

        let inverted = serde_json::from_str::<Parameter>(r#"{"type":"int","min":9,"max":1}"#);
        assert!(inverted.is_err());
    }
}
