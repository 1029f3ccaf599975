//! Log-entry collection abstraction
//!
//! The directive engine never owns the store behind the admin log. It sees a
//! [`LogSource`]: a lazily-evaluated collection with exactly the two
//! capabilities rendering needs, narrowing by user and taking a bounded
//! prefix. A database-backed implementation lives with the embedder;
//! [`MemoryLogSource`] covers tests and in-process use.

use std::sync::Arc;

use crate::entry::LogEntry;

/// A filterable, sliceable collection of log entries.
///
/// Implementations are expected to stay lazy under `filter_by_user` and only
/// force evaluation in `first`. Any blocking (e.g. a database query) happens
/// inside the implementation; the engine itself never blocks.
pub trait LogSource: Send + Sync {
    /// Narrow the collection to entries owned by one user.
    ///
    /// Returns a new collection of the same kind; the receiver is unchanged.
    fn filter_by_user(&self, user_id: u64) -> Arc<dyn LogSource>;

    /// Force evaluation and return at most the first `limit` entries, in
    /// whatever order the underlying store provides.
    fn first(&self, limit: usize) -> Vec<LogEntry>;
}

/// In-memory [`LogSource`] backed by a shared `Vec<LogEntry>`.
///
/// The user filter is recorded, not applied; entries are only walked when
/// `first` forces the collection.
///
/// # Example
///
/// ```
/// use adminlog::{ActionKind, LogEntry, LogSource, MemoryLogSource};
///
/// let source = MemoryLogSource::new(vec![
///     LogEntry::new(1, 7, ActionKind::Addition, "article #1"),
///     LogEntry::new(2, 9, ActionKind::Change, "article #1"),
/// ]);
///
/// let mine = source.filter_by_user(7);
/// assert_eq!(mine.first(10).len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MemoryLogSource {
    entries: Arc<Vec<LogEntry>>,
    user_filter: Option<u64>,
}

impl MemoryLogSource {
    /// Create a source over the given entries, unfiltered.
    pub fn new(entries: Vec<LogEntry>) -> Self {
        Self {
            entries: Arc::new(entries),
            user_filter: None,
        }
    }
}

impl LogSource for MemoryLogSource {
    fn filter_by_user(&self, user_id: u64) -> Arc<dyn LogSource> {
        Arc::new(Self {
            entries: Arc::clone(&self.entries),
            user_filter: Some(user_id),
        })
    }

    fn first(&self, limit: usize) -> Vec<LogEntry> {
        self.entries
            .iter()
            .filter(|entry| self.user_filter.is_none_or(|id| entry.user_id == id))
            .take(limit)
            .cloned()
            .collect()
    }
}
