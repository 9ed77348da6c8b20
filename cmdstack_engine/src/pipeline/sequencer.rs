use crate::log_warning;
use crate::logging::codes;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one generation or substitution request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Last-issued-request-wins ordering for one open command.
///
/// Issue a ticket before starting work, then pass the response through
/// `accept`. A response whose ticket is no longer the latest is dropped,
/// however late or early it completes.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: AtomicU64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding every earlier one
    pub fn issue(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.load(Ordering::Acquire) == ticket.0
    }

    /// `Some(value)` if `ticket` is still the latest request
    pub fn accept<T>(&self, ticket: RequestTicket, value: T) -> Option<T> {
        if self.is_current(ticket) {
            return Some(value);
        }

        log_warning!(code = codes::session::STALE_RESPONSE_DISCARDED, "Discarding stale response",
            "ticket" => ticket.0,
            "latest" => self.latest.load(Ordering::Acquire)
        );
        None
    }
}
