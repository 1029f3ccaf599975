//! Log entry and user records

/// The kind of admin action a log entry records.
///
/// Stored codes are stable (1/2/3) and round-trip through
/// [`ActionKind::code`] / [`ActionKind::from_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// An object was created.
    Addition,

    /// An object was modified.
    Change,

    /// An object was deleted.
    Deletion,
}

impl ActionKind {
    /// The stable numeric code for this action.
    pub fn code(self) -> u8 {
        match self {
            ActionKind::Addition => 1,
            ActionKind::Change => 2,
            ActionKind::Deletion => 3,
        }
    }

    /// Decode a stored action code.
    ///
    /// Returns `None` for codes outside the known range.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(ActionKind::Addition),
            2 => Some(ActionKind::Change),
            3 => Some(ActionKind::Deletion),
            _ => None,
        }
    }

    /// Human-readable label for this action.
    pub fn label(self) -> &'static str {
        match self {
            ActionKind::Addition => "addition",
            ActionKind::Change => "change",
            ActionKind::Deletion => "deletion",
        }
    }
}

/// One logged admin action, tied to an owning user.
///
/// Entries are opaque to the directive engine: nothing here is inspected
/// during rendering except `user_id`, and only when a `for_user` filter is
/// in play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Entry identifier.
    pub id: u64,

    /// Primary key of the user who performed the action.
    pub user_id: u64,

    /// What kind of action this was.
    pub action: ActionKind,

    /// Display representation of the object acted on.
    pub object_repr: String,

    /// Free-form description of the change.
    pub change_message: String,
}

impl LogEntry {
    /// Create a log entry with an empty change message.
    pub fn new(id: u64, user_id: u64, action: ActionKind, object_repr: impl Into<String>) -> Self {
        Self {
            id,
            user_id,
            action,
            object_repr: object_repr.into(),
            change_message: String::new(),
        }
    }

    /// Set the change message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.change_message = message.into();
        self
    }
}

/// A user bound in the render context.
///
/// Only the primary key matters to the engine; it is what a `for_user`
/// variable reference resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    /// Primary key.
    pub pk: u64,

    /// Login name (for diagnostics).
    pub username: String,
}

impl UserRecord {
    /// Create a user record.
    pub fn new(pk: u64, username: impl Into<String>) -> Self {
        Self {
            pk,
            username: username.into(),
        }
    }
}
