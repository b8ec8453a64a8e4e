//! Sync error taxonomy.
//!
//! Parser-level outcomes (no template match, an unusable field) are handled
//! inside the parser as `None` and never reach this type. Only whole-run
//! failures escalate to the caller, so a failed run is always visible and
//! retriable.

use thiserror::Error;

/// Failures that abort a sync run.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The device message store could not be read, e.g. the SMS permission
    /// was denied. No cursor update happens; the next run retries from the
    /// same starting point.
    #[error("sms source unavailable: {0}")]
    SourceUnavailable(String),

    /// A bulk insert or settings write failed. The pagination offset and
    /// cursor are not advanced past the failed batch, so the batch stays
    /// retryable. Batches committed earlier in the run remain committed.
    #[error("persistence failure: {0}")]
    Persistence(String),
}
