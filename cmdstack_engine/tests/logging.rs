//! Engine failures reach an installed logger with their codes.
//!
//! Kept in its own test binary because it installs the global logger.

use assert_matches::assert_matches;
use cmdstack_engine::logging::{self, codes, LogLevel, Logger, LoggingService, MemoryLogger};
use cmdstack_engine::{parse, substitute, ParameterDefaults, SubstitutionError};
use std::sync::{Arc, OnceLock};

fn memory_logger() -> &'static Arc<MemoryLogger> {
    static MEMORY: OnceLock<Arc<MemoryLogger>> = OnceLock::new();
    MEMORY.get_or_init(|| {
        let memory = Arc::new(MemoryLogger::new());
        let sink: Arc<dyn Logger> = memory.clone();
        logging::init_global_logging_with_service(Arc::new(LoggingService::new(sink, LogLevel::Debug)))
            .unwrap();
        memory
    })
}

fn defaults() -> ParameterDefaults {
    ParameterDefaults {
        string_length_min: 5,
        string_length_max: 10,
        int_range_min: 5,
        int_range_max: 10,
    }
}

#[test]
fn value_count_mismatch_is_logged_as_critical() {
    let memory = memory_logger();

    let result = substitute("echo @{} @{}", &["one"]);
    assert_matches!(result, Err(SubstitutionError::ValueCountMismatch { expected: 2, provided: 1 }));

    assert!(memory.has_error_with_code(codes::substitution::VALUE_COUNT_MISMATCH));
    assert_eq!(
        codes::get_severity(codes::substitution::VALUE_COUNT_MISMATCH.as_str()),
        codes::Severity::Critical
    );
}

#[test]
fn parse_failure_is_logged_with_span() {
    let memory = memory_logger();

    assert!(parse("@{int[9,1]}", defaults()).is_err());

    assert!(memory.has_error_with_code(codes::syntax::INVALID_RANGE));
    let events = memory.get_events_with_code(codes::syntax::INVALID_RANGE);
    assert!(events.iter().any(|event| event.span.is_some()));
}

#[test]
fn debug_events_follow_the_installed_service() {
    let memory = memory_logger();
    assert!(logging::debug_enabled());

    parse("@{int}", defaults()).unwrap();

    assert!(memory
        .get_events()
        .iter()
        .any(|event| event.level == LogLevel::Debug && event.message.contains("default bounds")));
    assert!(memory.has_success_with_code(codes::success::TEMPLATE_PARSED));
}
