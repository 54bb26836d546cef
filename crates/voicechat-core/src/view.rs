use crate::protocol::HistoryRecord;
use crate::transcript::Role;

/// Raw values of the chat form, read at the moment of sending
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatForm {
    pub text: String,
    pub persona: String,
    pub enable_search: bool,
}

/// Everything the controller needs from the page
pub trait ChatView {
    fn read_form(&self) -> ChatForm;

    fn set_input(&self, text: &str);

    fn clear_input(&self);

    /// Append an entry to the transcript and scroll it into view
    fn append_entry(&self, role: Role, text: &str);

    fn history_query(&self) -> String;

    /// Replace the results container with one line per record
    fn show_history(&self, records: &[HistoryRecord]);

    /// Replace the results container with a failure line
    fn show_history_error(&self, message: &str);

    /// Blocking notice to the user
    fn notify(&self, message: &str);
}
