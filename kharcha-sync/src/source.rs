//! Paged, read-only view of the device message store.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::SyncError;

/// One inbox entry as returned by the device message store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMessage {
    /// Verbatim message text.
    pub body: String,
    /// Receipt time in epoch millis. Authoritative transaction time for
    /// anything parsed out of this message.
    pub timestamp_millis: i64,
    /// Opaque position hint within the store, not a business timestamp.
    pub sequence_index: usize,
}

/// Inbox read filter for one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmsFilter {
    /// Minimum receipt timestamp in epoch millis; 0 means all history.
    pub min_timestamp: i64,
    /// Maximum number of messages to return.
    pub max_count: usize,
    /// Pagination offset for continuation.
    pub index_from: usize,
}

/// The device message source. Implementations wrap the platform inbox API
/// (inbox-only filtering is the implementation's concern) and must honor
/// the filter's floor, page size, and offset.
#[async_trait]
pub trait SmsSource: Send + Sync {
    /// List inbox messages matching `filter`, in store-native order.
    async fn list_messages(&self, filter: &SmsFilter) -> Result<Vec<RawMessage>, SyncError>;
}
