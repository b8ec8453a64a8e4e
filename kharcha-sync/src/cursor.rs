//! Typed wrapper around the persisted sync high-water-mark.
//!
//! The cursor lives in the generic settings table under a single key. It is
//! read once at the start of a run and written only after the run completes;
//! it is never advanced speculatively mid-run.

use crate::error::SyncError;
use crate::store::SettingsStore;

/// Settings key for the timestamp below which all messages are assumed
/// already processed.
pub const LAST_SMS_TIMESTAMP_KEY: &str = "lastSmsTimestamp";

/// Read the cursor. An absent or unreadable value means "all history".
pub async fn load(settings: &dyn SettingsStore) -> Result<i64, SyncError> {
    let raw = settings.get(LAST_SMS_TIMESTAMP_KEY).await?;
    Ok(raw.and_then(|value| value.parse().ok()).unwrap_or(0))
}

/// Persist a new cursor value. Called only after a completed run.
pub async fn store(settings: &dyn SettingsStore, millis: i64) -> Result<(), SyncError> {
    settings.set(LAST_SMS_TIMESTAMP_KEY, &millis.to_string()).await
}
