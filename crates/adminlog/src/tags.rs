//! Built-in directive handlers

use tracing::trace;

use crate::error::SyntaxError;
use crate::node::{AdminLogNode, RenderNode, UserTarget};
use crate::token::Token;

/// A named directive handler.
///
/// Implementations turn one directive invocation into a renderable node.
/// Parsing is a pure function of the token; any validation failure aborts
/// compilation of the containing template.
pub trait TagParser: Send + Sync {
    /// The directive name this handler answers to.
    fn name(&self) -> &str;

    /// Parse one invocation into a node.
    fn parse(&self, token: &Token) -> Result<Box<dyn RenderNode>, SyntaxError>;
}

/// Handler for `get_admin_log LIMIT as VARNAME [for_user USER]`.
#[derive(Debug, Clone, Default)]
pub struct GetAdminLogTag;

impl GetAdminLogTag {
    /// Create the handler.
    pub fn new() -> Self {
        Self
    }
}

impl TagParser for GetAdminLogTag {
    fn name(&self) -> &str {
        "get_admin_log"
    }

    fn parse(&self, token: &Token) -> Result<Box<dyn RenderNode>, SyntaxError> {
        let bits = token.split_contents();
        parse_admin_log(&bits).map(|node| Box::new(node) as Box<dyn RenderNode>)
    }
}

/// Parse the split argument bits of a `get_admin_log` invocation.
///
/// Validation runs in argument order and each failure carries a message
/// naming the malformed position:
///
/// 1. fewer than four bits: the statement requires two arguments
/// 2. bit 1 not all digits: the limit must be an integer
/// 3. bit 2 not `as`
/// 4. bit 4 present but not `for_user`
///
/// A trailing `for_user` with no following argument parses successfully with
/// no user filter.
pub fn parse_admin_log(bits: &[String]) -> Result<AdminLogNode, SyntaxError> {
    let tag = bits
        .first()
        .map(String::as_str)
        .unwrap_or("get_admin_log")
        .to_string();

    if bits.len() < 4 {
        return Err(SyntaxError::MissingArguments { tag });
    }

    let limit = match parse_limit(&bits[1]) {
        Some(limit) => limit,
        None => return Err(SyntaxError::LimitNotInteger { tag }),
    };

    if bits[2] != "as" {
        return Err(SyntaxError::ExpectedAs { tag });
    }
    let varname = bits[3].clone();

    if bits.len() > 4 && bits[4] != "for_user" {
        return Err(SyntaxError::ExpectedForUser { tag });
    }
    let user = bits.get(5).map(|bit| UserTarget::classify(bit));

    trace!(%tag, limit, varname = %varname, "parsed admin log directive");
    Ok(AdminLogNode::new(limit, varname, user))
}

/// Parse a non-negative integer literal. A digit string too large for
/// `usize` is rejected the same way as a non-numeric one.
fn parse_limit(bit: &str) -> Option<usize> {
    if bit.is_empty() || !bit.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    bit.parse::<usize>().ok()
}
