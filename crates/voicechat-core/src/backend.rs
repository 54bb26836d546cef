use async_trait::async_trait;

use crate::error::ChatError;
use crate::protocol::{ChatReply, ChatRequest, HistoryQuery, HistoryResponse};

/// Transport to the chat service.
///
/// Futures are not `Send`: the browser implementation runs on the page's
/// single event loop.
#[async_trait(?Send)]
pub trait ChatBackend {
    /// `POST` the request to the chat endpoint and decode the reply
    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatReply, ChatError>;

    /// `GET` the history search endpoint
    async fn search_history(&self, query: &HistoryQuery) -> Result<HistoryResponse, ChatError>;
}
