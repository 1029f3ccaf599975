//! Renderable nodes
//!
//! A compiled directive lives as a [`RenderNode`]: immutable after
//! construction, invoked once per render against a fresh context. One node
//! may render concurrently on multiple threads as long as each render gets
//! its own context.

use std::sync::Arc;

use tracing::debug;

use crate::context::RenderContext;
use crate::error::{type_name, RenderError};
use crate::source::LogSource;
use crate::value::Value;

/// The seam between compilation and rendering.
pub trait RenderNode: Send + Sync + std::fmt::Debug {
    /// Render against a context.
    ///
    /// The returned string is the node's direct text output; nodes whose
    /// effect is purely a context binding return an empty string.
    fn render(&self, context: &mut RenderContext) -> Result<String, RenderError>;
}

/// The user a log node narrows to, decided once at parse time.
///
/// An all-digits argument becomes a literal id; anything else is a variable
/// reference resolved against the context at render time. Nothing re-inspects
/// string contents after parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserTarget {
    /// A literal user id from the directive text.
    Id(u64),

    /// A context variable expected to hold a user.
    Var(String),
}

impl UserTarget {
    /// Classify one argument bit.
    pub fn classify(bit: &str) -> Self {
        if !bit.is_empty() && bit.chars().all(|c| c.is_ascii_digit()) {
            if let Ok(id) = bit.parse::<u64>() {
                return UserTarget::Id(id);
            }
        }
        UserTarget::Var(bit.to_string())
    }

    /// Resolve to a concrete user id.
    ///
    /// # Errors
    ///
    /// - [`RenderError::UndefinedVariable`] if a variable reference is not
    ///   bound in the context. Propagated uncaught: a dangling `for_user`
    ///   reference is a template-author error.
    /// - [`RenderError::TypeError`] if the variable is bound to something
    ///   that is not a user.
    pub fn resolve(&self, context: &RenderContext) -> Result<u64, RenderError> {
        match self {
            UserTarget::Id(id) => Ok(*id),
            UserTarget::Var(name) => match context.lookup(name)? {
                Value::User(user) => Ok(user.pk),
                other => Err(RenderError::TypeError {
                    expected: "User".to_string(),
                    got: type_name(other).to_string(),
                }),
            },
        }
    }
}

/// Node for `get_admin_log LIMIT as VARNAME [for_user USER]`.
///
/// Rendering reads the log-entry collection from the context's source key,
/// optionally narrows it to one user, takes the first `limit` entries in
/// source order, and binds the result under `varname`. The node's own text
/// output is always empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminLogNode {
    limit: usize,
    varname: String,
    user: Option<UserTarget>,
}

impl AdminLogNode {
    /// Create a node from parsed arguments.
    pub fn new(limit: usize, varname: impl Into<String>, user: Option<UserTarget>) -> Self {
        Self {
            limit,
            varname: varname.into(),
            user,
        }
    }

    /// Maximum number of entries the node binds.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Context key the node binds its result under.
    pub fn varname(&self) -> &str {
        &self.varname
    }

    /// The user filter, if one was parsed.
    pub fn user(&self) -> Option<&UserTarget> {
        self.user.as_ref()
    }
}

impl RenderNode for AdminLogNode {
    fn render(&self, context: &mut RenderContext) -> Result<String, RenderError> {
        let source: Arc<dyn LogSource> = match context.lookup(context.source_key())? {
            Value::Source(source) => Arc::clone(source),
            other => {
                return Err(RenderError::TypeError {
                    expected: "LogSource".to_string(),
                    got: type_name(other).to_string(),
                })
            }
        };

        let source = match &self.user {
            Some(target) => source.filter_by_user(target.resolve(context)?),
            None => source,
        };

        let entries = source.first(self.limit);
        debug!(
            varname = %self.varname,
            count = entries.len(),
            "bound admin log entries"
        );
        context.bind(self.varname.clone(), Value::entries(entries));

        Ok(String::new())
    }
}
