//! In-memory store for settled decisions.

use std::collections::HashMap;
use std::fmt;
use std::sync::RwLock;

use warden_core::RequestId;

use crate::decision::DecisionRecord;

/// Session-scoped store mapping request ids to their decision records.
///
/// One instance is created at session start, shared (behind an `Arc`) by
/// every coordinator instance in the process, and never torn down or
/// cleared mid-session. Records accumulate for the session's lifetime;
/// request ids are bounded by session length, so nothing is evicted.
///
/// A present record is authoritative: later observations of the same
/// request id must not re-prompt, whatever the server-reported historical
/// flag says.
///
/// # Example
///
/// ```
/// use warden_approval::DecisionStore;
///
/// let store = DecisionStore::new();
/// assert_eq!(store.count(), 0);
/// ```
pub struct DecisionStore {
    records: RwLock<HashMap<RequestId, DecisionRecord>>,
}

impl DecisionStore {
    /// Create a new empty decision store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Look up the decision record for a request id.
    ///
    /// Returns a clone of the record, or `None` if the request has not
    /// been decided in this process. Reads are idempotent: two calls with
    /// no intervening write agree.
    #[must_use]
    pub fn get(&self, id: &RequestId) -> Option<DecisionRecord> {
        let records = self.records.read().unwrap_or_else(|e| {
            tracing::warn!("DecisionStore read lock poisoned, recovering");
            e.into_inner()
        });
        records.get(id).cloned()
    }

    /// Record the decision for a request id.
    ///
    /// Last write wins, with no merge; writing the same logical decision
    /// twice is a harmless no-op. The two callers are the coordinator's
    /// user-action commit and the historical reconciliation, both of which
    /// only write while no decided record exists.
    pub fn set(&self, id: RequestId, record: DecisionRecord) {
        let mut records = self.records.write().unwrap_or_else(|e| {
            tracing::warn!("DecisionStore write lock poisoned, recovering");
            e.into_inner()
        });
        records.insert(id, record);
    }

    /// Number of decided requests in the store.
    #[must_use]
    pub fn count(&self) -> usize {
        self.records.read().map(|records| records.len()).unwrap_or(0)
    }
}

impl Default for DecisionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DecisionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecisionStore")
            .field("count", &self.count())
            .finish()
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
