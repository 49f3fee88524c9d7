use chrono::{DateTime, Utc};
use std::collections::HashMap;

use crate::models::ActionKind;

#[derive(Debug, Clone)]
pub struct PendingRequest {
    pub kind: ActionKind,
    pub started_at: DateTime<Utc>,
}

/// Rows with a request on the wire, keyed by [`ActionDescriptor::row_key`].
///
/// [`ActionDescriptor::row_key`]: crate::models::ActionDescriptor::row_key
#[derive(Debug, Clone, Default)]
pub struct InFlight {
    pending: HashMap<String, PendingRequest>,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a row busy. Returns false if it already was.
    pub fn begin(&mut self, kind: ActionKind, row_key: &str) -> bool {
        if self.pending.contains_key(row_key) {
            return false;
        }
        self.pending.insert(
            row_key.to_string(),
            PendingRequest {
                kind,
                started_at: Utc::now(),
            },
        );
        true
    }

    pub fn finish(&mut self, row_key: &str) -> Option<PendingRequest> {
        self.pending.remove(row_key)
    }

    pub fn contains(&self, row_key: &str) -> bool {
        self.pending.contains_key(row_key)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl PendingRequest {
    pub fn elapsed_ms(&self) -> i64 {
        (Utc::now() - self.started_at).num_milliseconds()
    }
}
