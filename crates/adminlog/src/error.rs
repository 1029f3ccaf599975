//! Error types for directive parsing and rendering

use thiserror::Error;

use crate::value::Value;

/// Syntax errors raised while parsing a directive invocation.
///
/// These abort compilation of the template that contains the directive;
/// nothing here is recoverable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// The invocation has fewer than the four required tokens.
    #[error("'{tag}' statements require two arguments")]
    MissingArguments {
        /// Directive name the invocation started with
        tag: String,
    },

    /// The limit token is not a non-negative integer literal.
    #[error("first argument to '{tag}' must be an integer")]
    LimitNotInteger {
        /// Directive name the invocation started with
        tag: String,
    },

    /// The token after the limit is not the literal `as`.
    #[error("second argument to '{tag}' must be 'as'")]
    ExpectedAs {
        /// Directive name the invocation started with
        tag: String,
    },

    /// A fifth token is present but is not the literal `for_user`.
    #[error("fourth argument to '{tag}' must be 'for_user'")]
    ExpectedForUser {
        /// Directive name the invocation started with
        tag: String,
    },

    /// The directive name is not registered.
    #[error("unknown directive '{name}'")]
    UnknownTag {
        /// Name the invocation started with
        name: String,
    },

    /// The directive text contained no tokens at all.
    #[error("empty directive")]
    EmptyTag,
}

/// Errors raised while rendering a compiled node against a context.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// A name was looked up in the render context and was not bound.
    ///
    /// Deliberately propagated uncaught: a dangling variable reference is a
    /// template-author error, not a condition to degrade from.
    #[error("variable '{name}' is not defined in the render context")]
    UndefinedVariable {
        /// The missing binding name
        name: String,
    },

    /// A context binding held a value of the wrong kind.
    #[error("type error: expected {expected}, got {got}")]
    TypeError {
        /// Expected value kind
        expected: String,
        /// Actual value kind found
        got: String,
    },
}

/// Sum of both phases' errors, for callers that drive compile and render.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TagError {
    /// Parse-time failure.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    /// Render-time failure.
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Result type alias for directive operations.
pub type Result<T> = std::result::Result<T, TagError>;

/// Get a human-readable name for a value's kind (for error messages).
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Unit => "()",
        Value::Bool(_) => "bool",
        Value::Int(_) => "i64",
        Value::Str(_) => "String",
        Value::User(_) => "User",
        Value::Source(_) => "LogSource",
        Value::Entries(_) => "Vec<LogEntry>",
    }
}
