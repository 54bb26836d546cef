use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use voicechat_core::{
    decode_body, ChatBackend, ChatError, ChatReply, ChatRequest, Endpoints, HistoryQuery,
    HistoryResponse,
};

/// `fetch`-backed transport to the chat service
pub struct HttpBackend {
    endpoints: Endpoints,
}

impl HttpBackend {
    pub fn new(endpoints: Endpoints) -> Self {
        Self { endpoints }
    }
}

#[async_trait(?Send)]
impl ChatBackend for HttpBackend {
    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatReply, ChatError> {
        log::debug!("POST {}", self.endpoints.chat);
        let response = Request::post(&self.endpoints.chat)
            .json(request)
            .map_err(|e| ChatError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        decode(response).await
    }

    async fn search_history(&self, query: &HistoryQuery) -> Result<HistoryResponse, ChatError> {
        log::debug!("GET {}", self.endpoints.history_search);
        let params = query.params();
        let response = Request::get(&self.endpoints.history_search)
            .query(params.iter().map(|(k, v)| (*k, v.as_str())))
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        decode(response).await
    }
}

/// Read the body and hand it to [`decode_body`]. Error bodies are only
/// informational, so a failed read there falls back to an empty string.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ChatError> {
    let ok = response.ok();
    let status = response.status();
    let body = match response.text().await {
        Ok(body) => body,
        Err(e) if !ok => {
            log::warn!("Failed to read error body (status {}): {}", status, e);
            String::new()
        }
        Err(e) => return Err(ChatError::Network(e.to_string())),
    };
    decode_body(ok, status, &body)
}
