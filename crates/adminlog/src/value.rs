//! Value representation for render-context bindings
//!
//! Context slots are heterogeneous: a slot may hold a scalar, a user, the
//! lazy log-entry collection, or a materialized result bound by a node.
//! Values follow a two-tier layout: inline primitives, and Arc-wrapped heap
//! payloads that stay cheap to clone across renders.

use std::fmt;
use std::sync::Arc;

use crate::entry::{LogEntry, UserRecord};
use crate::source::LogSource;

/// A value bound in a render context.
#[derive(Clone)]
pub enum Value {
    // ═══════════════════════════════════════════════════════════════════
    // Tier 1: Inline Primitives
    // ═══════════════════════════════════════════════════════════════════
    /// The unit value (a bound-but-empty slot)
    Unit,

    /// Boolean
    Bool(bool),

    /// Integer (default integer type)
    Int(i64),

    // ═══════════════════════════════════════════════════════════════════
    // Tier 2: Heap-Allocated Payloads
    // ═══════════════════════════════════════════════════════════════════
    /// Heap-allocated string
    Str(Arc<String>),

    /// A user, as consulted by `for_user` variable references
    User(Arc<UserRecord>),

    /// The lazily-evaluated log-entry collection
    Source(Arc<dyn LogSource>),

    /// A materialized, truncated run of entries bound by a node
    Entries(Arc<Vec<LogEntry>>),
}

impl Value {
    /// Create a string value.
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Arc::new(s.into()))
    }

    /// Create a user value.
    pub fn user(user: UserRecord) -> Self {
        Value::User(Arc::new(user))
    }

    /// Create a source value from a concrete collection.
    pub fn source(source: impl LogSource + 'static) -> Self {
        Value::Source(Arc::new(source))
    }

    /// Create a source value from an already-shared collection.
    pub fn shared_source(source: Arc<dyn LogSource>) -> Self {
        Value::Source(source)
    }

    /// Create an entries value.
    pub fn entries(entries: Vec<LogEntry>) -> Self {
        Value::Entries(Arc::new(entries))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Type Predicates and Extractors
    // ═══════════════════════════════════════════════════════════════════

    /// Check if the value is a string.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    /// Check if the value is a user.
    pub fn is_user(&self) -> bool {
        matches!(self, Value::User(_))
    }

    /// Check if the value is a log-entry collection.
    pub fn is_source(&self) -> bool {
        matches!(self, Value::Source(_))
    }

    /// Check if the value is a materialized run of entries.
    pub fn is_entries(&self) -> bool {
        matches!(self, Value::Entries(_))
    }

    /// Borrow the entries if this value holds a materialized run.
    pub fn as_entries(&self) -> Option<&[LogEntry]> {
        match self {
            Value::Entries(entries) => Some(entries),
            _ => None,
        }
    }

    /// Borrow the user record if this value holds one.
    pub fn as_user(&self) -> Option<&UserRecord> {
        match self {
            Value::User(user) => Some(user),
            _ => None,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unit => write!(f, "()"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Str(s) => write!(f, "{:?}", s.as_ref()),
            Value::User(u) => write!(f, "User({}, {:?})", u.pk, u.username),
            Value::Source(_) => write!(f, "<log source>"),
            Value::Entries(entries) => write!(f, "<{} entries>", entries.len()),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Unit, Value::Unit) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::User(a), Value::User(b)) => a == b,
            // Sources have no structural identity; compare by pointer.
            (Value::Source(a), Value::Source(b)) => Arc::ptr_eq(a, b),
            (Value::Entries(a), Value::Entries(b)) => a == b,
            _ => false,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}
