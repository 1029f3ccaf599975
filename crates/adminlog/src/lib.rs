//! # Adminlog
//!
//! A small template-directive engine for surfacing admin action logs in
//! rendered templates.
//!
//! The engine compiles a directive such as
//! `{% get_admin_log 10 as admin_log for_user request_user %}` into an
//! immutable renderable node. Rendering the node against a context fetches
//! the log-entry collection, optionally narrows it to one user, truncates it
//! to a limit, and binds the result back into the context. The node itself
//! produces no text output.
//!
//! ## Architecture
//!
//! ```text
//! Directive text → [TagRegistry / TagParser] → RenderNode
//!                                                  │ render(context)
//!                                      RenderContext ← bound entries
//! ```
//!
//! - **Compile time**: [`TagRegistry::compile`] tokenizes the directive,
//!   dispatches on its name, and the handler validates the arguments.
//! - **Render time**: the node reads a [`LogSource`] out of the context,
//!   applies the parsed user filter, takes a bounded prefix, and binds it.
//!
//! The backing store is external; the engine only sees the two-capability
//! [`LogSource`] trait. [`MemoryLogSource`] is provided for tests and
//! in-process use.
//!
//! ## Example
//!
//! ```
//! use adminlog::{
//!     ActionKind, LogEntry, MemoryLogSource, RenderContext, RenderNode, TagRegistry,
//!     UserRecord, Value,
//! };
//!
//! let registry = TagRegistry::with_builtins();
//! let node = registry
//!     .compile("{% get_admin_log 2 as recent for_user reviewer %}")
//!     .unwrap();
//!
//! let mut context = RenderContext::new();
//! context.bind(
//!     "log_entries",
//!     Value::source(MemoryLogSource::new(vec![
//!         LogEntry::new(1, 7, ActionKind::Addition, "article #1"),
//!         LogEntry::new(2, 9, ActionKind::Change, "article #1"),
//!         LogEntry::new(3, 7, ActionKind::Deletion, "article #2"),
//!     ])),
//! );
//! context.bind("reviewer", Value::user(UserRecord::new(7, "alice")));
//!
//! let output = node.render(&mut context).unwrap();
//! assert!(output.is_empty());
//!
//! let bound = context.get("recent").and_then(|v| v.as_entries()).unwrap();
//! assert_eq!(bound.len(), 2);
//! assert!(bound.iter().all(|entry| entry.user_id == 7));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod entry;
pub mod error;
pub mod node;
pub mod registry;
pub mod source;
pub mod tags;
pub mod token;
pub mod value;

// Re-export main types
pub use context::{RenderContext, LOG_ENTRIES_KEY};
pub use entry::{ActionKind, LogEntry, UserRecord};
pub use error::{RenderError, Result, SyntaxError, TagError};
pub use node::{AdminLogNode, RenderNode, UserTarget};
pub use registry::TagRegistry;
pub use source::{LogSource, MemoryLogSource};
pub use tags::{parse_admin_log, GetAdminLogTag, TagParser};
pub use token::Token;
pub use value::Value;

/// Adminlog version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }
}
