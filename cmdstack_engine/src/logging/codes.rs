//! Error and success codes with their classification metadata
//!
//! Every error enum in the engine maps its variants onto one of these codes
//! through an `error_code()` method, so log output and front ends can key on
//! a stable identifier rather than message text.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ERROR CLASSIFICATION TYPES
// ============================================================================

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for a code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub requires_halt: bool,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

// ============================================================================
// CODE CONSTANTS
// ============================================================================

/// Preference loading and persistence
pub mod config {
    use super::Code;

    pub const CONFIG_IO_FAILURE: Code = Code::new("E010");
    pub const CONFIG_DECODE_FAILURE: Code = Code::new("E011");
    pub const CONFIG_ENCODE_FAILURE: Code = Code::new("E012");
    pub const INVALID_DEFAULT_RANGE: Code = Code::new("E013");
    pub const DEFAULT_VALUE_TOO_LARGE: Code = Code::new("E014");
    pub const CONFIG_DIR_UNAVAILABLE: Code = Code::new("E015");
}

/// Placeholder scanning
pub mod lexical {
    use super::Code;

    pub const UNTERMINATED_PLACEHOLDER: Code = Code::new("E020");
    pub const TEMPLATE_TOO_LARGE: Code = Code::new("E021");
    pub const TOO_MANY_PLACEHOLDERS: Code = Code::new("E022");
}

/// Placeholder grammar
pub mod syntax {
    use super::Code;

    pub const UNKNOWN_TYPE: Code = Code::new("E030");
    pub const INVALID_BOUND: Code = Code::new("E031");
    pub const INVALID_RANGE: Code = Code::new("E032");
    pub const UNEXPECTED_BOUNDS: Code = Code::new("E033");
    pub const MALFORMED_BOUNDS: Code = Code::new("E034");
    pub const BOUND_TOO_LARGE: Code = Code::new("E035");
}

/// Value generation
pub mod generation {
    use super::Code;

    pub const RANDOM_VALUE_OUT_OF_RANGE: Code = Code::new("E040");
}

/// Substitution contract violations
pub mod substitution {
    use super::Code;

    pub const VALUE_COUNT_MISMATCH: Code = Code::new("E050");
    pub const BLANK_VALUE_COUNT_MISMATCH: Code = Code::new("E051");
}

/// Open-command session handling
pub mod session {
    use super::Code;

    pub const BLANK_ORDINAL_OUT_OF_RANGE: Code = Code::new("E060");
    pub const STALE_RESPONSE_DISCARDED: Code = Code::new("W061");
}

pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I001");
    pub const CONFIG_LOADED: Code = Code::new("I002");
    pub const CONFIG_SAVED: Code = Code::new("I003");

    pub const TEMPLATE_PARSED: Code = Code::new("I010");
    pub const VALUES_GENERATED: Code = Code::new("I011");
    pub const COMMAND_SUBSTITUTED: Code = Code::new("I012");
    pub const PIPELINE_COMPLETE: Code = Code::new("I013");
}

// ============================================================================
// METADATA REGISTRY
// ============================================================================

type Entry = (
    &'static str,
    &'static str,
    Severity,
    bool,
    bool,
    &'static str,
    &'static str,
);

#[rustfmt::skip]
const REGISTRY_ENTRIES: &[Entry] = &[
    // code, category, severity, recoverable, requires_halt, description, action
    ("E010", "Config", Severity::Medium, false, false,
        "Config file could not be read or written", "Check the path and its permissions"),
    ("E011", "Config", Severity::Medium, true, false,
        "Config file is not valid TOML for this engine", "Fix or remove the config file"),
    ("E012", "Config", Severity::Medium, false, false,
        "Config could not be serialized", "Report the config values that failed"),
    ("E013", "Config", Severity::Medium, true, false,
        "Default parameter range has min greater than max", "Set min no larger than max"),
    ("E014", "Config", Severity::Medium, true, false,
        "Default parameter value exceeds the engine limit", "Lower the configured value"),
    ("E015", "Config", Severity::Low, true, false,
        "No user configuration directory available", "Pass an explicit config path"),

    ("E020", "Lexical", Severity::Medium, true, false,
        "Placeholder opened with @{ is never closed", "Add the closing brace"),
    ("E021", "Lexical", Severity::Medium, true, false,
        "Command template exceeds the maximum length", "Shorten the command"),
    ("E022", "Lexical", Severity::Medium, true, false,
        "Command template has too many placeholders", "Reduce the number of placeholders"),

    ("E030", "Syntax", Severity::Medium, true, false,
        "Unknown placeholder type", "Use string, int, bool or an empty placeholder"),
    ("E031", "Syntax", Severity::Medium, true, false,
        "Placeholder bound is not a non-negative integer", "Write bounds as plain digits"),
    ("E032", "Syntax", Severity::Medium, true, false,
        "Placeholder range has min greater than max", "Swap or correct the bounds"),
    ("E033", "Syntax", Severity::Medium, true, false,
        "Bounds given on a placeholder that takes none", "Remove the bracketed bounds"),
    ("E034", "Syntax", Severity::Medium, true, false,
        "Placeholder bounds are not of the form [min,max]", "Write bounds as [min,max]"),
    ("E035", "Syntax", Severity::Medium, true, false,
        "String length bound exceeds the engine limit", "Request a shorter string"),

    ("E040", "Generation", Severity::High, true, false,
        "Random source returned a value outside the requested range", "Fix the RandomSource implementation"),

    ("E050", "Substitution", Severity::Critical, false, true,
        "Resolved value count differs from placeholder count", "Generate values from the same template text"),
    ("E051", "Substitution", Severity::Critical, false, true,
        "More blank values supplied than blank placeholders", "Resize blank values after re-parsing"),

    ("E060", "Session", Severity::High, true, false,
        "Blank ordinal does not exist in the current template", "Use a 1-based ordinal within the blank count"),
    ("W061", "Session", Severity::Low, true, false,
        "Response for a superseded request was discarded", "No action needed"),

    ("I001", "System", Severity::Low, true, false,
        "Logging system initialized", "Continue"),
    ("I002", "Config", Severity::Low, true, false,
        "Configuration loaded", "Continue"),
    ("I003", "Config", Severity::Low, true, false,
        "Configuration saved", "Continue"),
    ("I010", "Syntax", Severity::Low, true, false,
        "Template parsed", "Continue to value generation"),
    ("I011", "Generation", Severity::Low, true, false,
        "Parameter values generated", "Continue to substitution"),
    ("I012", "Substitution", Severity::Low, true, false,
        "Command substituted", "Command is ready to use"),
    ("I013", "Pipeline", Severity::Low, true, false,
        "Template pipeline completed", "Command is ready to use"),
];

fn get_error_registry() -> &'static HashMap<&'static str, ErrorMetadata> {
    static REGISTRY: OnceLock<HashMap<&'static str, ErrorMetadata>> = OnceLock::new();

    REGISTRY.get_or_init(|| {
        REGISTRY_ENTRIES
            .iter()
            .map(
                |&(code, category, severity, recoverable, requires_halt, description, action)| {
                    (
                        code,
                        ErrorMetadata {
                            code,
                            category,
                            severity,
                            recoverable,
                            requires_halt,
                            description,
                            recommended_action: action,
                        },
                    )
                },
            )
            .collect()
    })
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

pub fn get_error_metadata(code: &str) -> Option<&'static ErrorMetadata> {
    get_error_registry().get(code)
}

pub fn get_severity(code: &str) -> Severity {
    get_error_metadata(code)
        .map(|metadata| metadata.severity)
        .unwrap_or(Severity::Medium)
}

pub fn is_recoverable(code: &str) -> bool {
    get_error_metadata(code)
        .map(|metadata| metadata.recoverable)
        .unwrap_or(true)
}

pub fn requires_halt(code: &str) -> bool {
    get_error_metadata(code)
        .map(|metadata| metadata.requires_halt)
        .unwrap_or(false)
}

pub fn get_description(code: &str) -> &'static str {
    get_error_metadata(code)
        .map(|metadata| metadata.description)
        .unwrap_or("Unknown error")
}

pub fn get_action(code: &str) -> &'static str {
    get_error_metadata(code)
        .map(|metadata| metadata.recommended_action)
        .unwrap_or("No specific action available")
}

pub fn get_category(code: &str) -> &'static str {
    get_error_metadata(code)
        .map(|metadata| metadata.category)
        .unwrap_or("Unknown")
}
