//! Directive registry
//!
//! Maps directive names to [`TagParser`] handlers and drives compilation:
//! tokenize, dispatch on the leading name, hand the token to the handler.
//! The registry is consulted once per directive occurrence at template
//! compile time; rendering never touches it.

use std::fmt;

use indexmap::IndexMap;
use tracing::trace;

use crate::error::SyntaxError;
use crate::node::RenderNode;
use crate::tags::{GetAdminLogTag, TagParser};
use crate::token::Token;

/// A registry of directive handlers.
///
/// # Example
///
/// ```
/// use adminlog::TagRegistry;
///
/// let registry = TagRegistry::with_builtins();
/// let node = registry.compile("{% get_admin_log 5 as entries %}").unwrap();
/// let _ = node;
/// ```
pub struct TagRegistry {
    tags: IndexMap<String, Box<dyn TagParser>>,
}

impl Default for TagRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TagRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            tags: IndexMap::new(),
        }
    }

    /// Create a registry with the built-in handlers registered.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(GetAdminLogTag::new());
        registry
    }

    /// Register a handler under its own name, replacing any previous handler
    /// with that name.
    pub fn register(&mut self, parser: impl TagParser + 'static) {
        self.tags.insert(parser.name().to_string(), Box::new(parser));
    }

    /// Look up a handler by directive name.
    pub fn get(&self, name: &str) -> Option<&dyn TagParser> {
        self.tags.get(name).map(|parser| parser.as_ref())
    }

    /// All registered directive names, in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.tags.keys().map(|s| s.as_str()).collect()
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Check if no handlers are registered.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Compile one directive occurrence into a renderable node.
    ///
    /// Accepts the bare directive contents or the `{% ... %}`-wrapped form.
    ///
    /// # Errors
    ///
    /// - [`SyntaxError::EmptyTag`] if the text contains no tokens.
    /// - [`SyntaxError::UnknownTag`] if the leading token names no handler.
    /// - Whatever the handler itself raises for a malformed invocation.
    pub fn compile(&self, source: &str) -> Result<Box<dyn RenderNode>, SyntaxError> {
        let token = Token::from_source(source);
        let bits = token.split_contents();
        let name = bits.first().ok_or(SyntaxError::EmptyTag)?;

        let parser = self
            .tags
            .get(name.as_str())
            .ok_or_else(|| SyntaxError::UnknownTag { name: name.clone() })?;

        trace!(directive = %name, "compiling directive");
        parser.parse(&token)
    }
}

impl fmt::Debug for TagRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagRegistry")
            .field("tags", &self.names())
            .finish()
    }
}
