use crate::protocol::{ChatReply, ChatRequest};

/// Conversation state kept for the lifetime of the page.
///
/// The identifier starts absent and is replaced by every successful reply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatSession {
    conversation_id: Option<String>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn conversation_id(&self) -> Option<&str> {
        self.conversation_id.as_deref()
    }

    /// Build the request for an already trimmed, non-empty message.
    /// An empty persona is sent as absent; any other value goes out as is.
    pub fn request_for(&self, message: &str, persona: &str, enable_search: bool) -> ChatRequest {
        ChatRequest {
            message: message.to_string(),
            persona: if persona.is_empty() {
                None
            } else {
                Some(persona.to_string())
            },
            conversation_id: self.conversation_id.clone(),
            enable_search,
        }
    }

    /// The reply's identifier is authoritative, even when unchanged.
    pub fn apply_reply(&mut self, reply: &ChatReply) {
        self.conversation_id = Some(reply.conversation_id.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_has_no_id() {
        let session = ChatSession::new();
        assert_eq!(session.conversation_id(), None);
        let req = session.request_for("hi", "", false);
        assert_eq!(req.conversation_id, None);
        assert_eq!(req.persona, None);
    }

    #[test]
    fn test_reply_overwrites_id() {
        let mut session = ChatSession::new();
        session.apply_reply(&ChatReply {
            conversation_id: "c1".to_string(),
            reply: "a".to_string(),
        });
        session.apply_reply(&ChatReply {
            conversation_id: "c2".to_string(),
            reply: "b".to_string(),
        });
        assert_eq!(session.conversation_id(), Some("c2"));

        let req = session.request_for("next", "calm", true);
        assert_eq!(req.conversation_id.as_deref(), Some("c2"));
        assert_eq!(req.persona.as_deref(), Some("calm"));
        assert!(req.enable_search);
    }
}
