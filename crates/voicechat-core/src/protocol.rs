use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ChatError;

/// Body of `POST /api/chat`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub persona: Option<String>,
    pub conversation_id: Option<String>,
    pub enable_search: bool,
}

/// Consumed part of the `/api/chat` response. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub conversation_id: String,
    pub reply: String,
}

/// Parameters of `GET /api/history/search`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryQuery {
    pub q: String,
    pub limit: Option<u32>,
}

impl HistoryQuery {
    /// Query pairs in the order they go on the URL. Encoding is left to the
    /// transport.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("q", self.q.clone())];
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        params
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryResponse {
    #[serde(default)]
    pub results: Vec<HistoryRecord>,
}

/// One stored message returned by the history search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub conversation_id: Option<String>,
}

/// Map a fetched response to its decoded body.
///
/// Non-2xx statuses become [`ChatError::Status`] carrying the body text; a
/// 2xx body that does not match `T` is a [`ChatError::Decode`].
pub fn decode_body<T: DeserializeOwned>(ok: bool, status: u16, body: &str) -> Result<T, ChatError> {
    if !ok {
        return Err(ChatError::Status {
            status,
            body: body.to_string(),
        });
    }
    Ok(serde_json::from_str(body)?)
}
