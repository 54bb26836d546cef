use crate::config::Labels;
use crate::protocol::HistoryRecord;

/// Author of a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    User,
    Assistant,
    /// A failed turn, rendered in place of the missing reply
    Error,
}

impl Role {
    /// Tag used as the entry's CSS class
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::Error => "error",
        }
    }

    pub fn label<'a>(&self, labels: &'a Labels) -> &'a str {
        match self {
            Role::User => &labels.user,
            Role::Assistant => &labels.assistant,
            Role::Error => &labels.error,
        }
    }
}

/// CSS class list of a transcript entry
pub fn entry_class(role: Role) -> String {
    format!("msg {}", role.as_str())
}

/// Visible text of a transcript entry, `<label>: <text>`
pub fn entry_text(labels: &Labels, role: Role, text: &str) -> String {
    format!("{}: {}", role.label(labels), text)
}

/// One line of the history results, `<created_at> [<role>] <content>`
pub fn history_line(record: &HistoryRecord) -> String {
    format!("{} [{}] {}", record.created_at, record.role, record.content)
}
