//! Render context: the key-value environment a node renders against
//!
//! A context is built fresh per render and passed in explicitly; the engine
//! keeps no ambient state. The same mapping serves as input (the log-entry
//! collection, any user bindings) and output (the entries a node binds).

use indexmap::IndexMap;

use crate::error::RenderError;
use crate::value::Value;

/// Default binding name for the log-entry collection.
pub const LOG_ENTRIES_KEY: &str = "log_entries";

/// The key-value environment available during a render.
///
/// Insertion order is preserved, so iterating bindings is deterministic.
///
/// # Example
///
/// ```
/// use adminlog::{MemoryLogSource, RenderContext, Value};
///
/// let mut context = RenderContext::new();
/// context.bind("log_entries", Value::source(MemoryLogSource::new(vec![])));
///
/// assert!(context.contains("log_entries"));
/// assert!(context.lookup("missing").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct RenderContext {
    bindings: IndexMap<String, Value>,

    /// Which binding holds the log-entry collection.
    source_key: String,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderContext {
    /// Create an empty context using the default source key.
    pub fn new() -> Self {
        Self {
            bindings: IndexMap::new(),
            source_key: LOG_ENTRIES_KEY.to_string(),
        }
    }

    /// Use a different binding name for the log-entry collection.
    pub fn with_source_key(mut self, key: impl Into<String>) -> Self {
        self.source_key = key.into();
        self
    }

    /// The binding name nodes read the log-entry collection from.
    pub fn source_key(&self) -> &str {
        &self.source_key
    }

    /// Bind a value, replacing any previous binding of the same name.
    pub fn bind(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    /// Look up a binding, or `None` if absent.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Look up a binding, raising on absence.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::UndefinedVariable`] if nothing is bound under
    /// `name`.
    pub fn lookup(&self, name: &str) -> Result<&Value, RenderError> {
        self.bindings
            .get(name)
            .ok_or_else(|| RenderError::UndefinedVariable {
                name: name.to_string(),
            })
    }

    /// Check if a binding exists.
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// All binding names, in insertion order.
    pub fn names(&self) -> Vec<&str> {
        self.bindings.keys().map(|s| s.as_str()).collect()
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if the context has no bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl FromIterator<(String, Value)> for RenderContext {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        let mut context = Self::new();
        for (name, value) in iter {
            context.bind(name, value);
        }
        context
    }
}
