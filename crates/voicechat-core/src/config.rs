//! Client configuration
//!
//! Every field has a default matching the stock host page, so a host can
//! pass a partial JSON object and override only what it needs.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub elements: ElementIds,
    pub endpoints: Endpoints,
    /// BCP 47 tag used for both recognition and synthesis
    pub speech_lang: String,
    pub labels: Labels,
    /// Shown when the mic is pressed without speech recognition support
    pub unsupported_notice: String,
    /// Forwarded as `limit` on history searches; the service defaults to 10
    pub history_limit: Option<u32>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            elements: ElementIds::default(),
            endpoints: Endpoints::default(),
            speech_lang: "zh-CN".to_string(),
            labels: Labels::default(),
            unsupported_notice: "当前浏览器不支持语音识别，请手动输入".to_string(),
            history_limit: None,
        }
    }
}

impl ClientConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoints.chat.trim().is_empty() {
            return Err(ConfigError::Invalid("endpoints.chat is empty".to_string()));
        }
        if self.endpoints.history_search.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "endpoints.history_search is empty".to_string(),
            ));
        }
        if self.history_limit == Some(0) {
            return Err(ConfigError::Invalid(
                "history_limit must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// DOM element identifiers supplied by the host page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub messages: String,
    pub text: String,
    pub send: String,
    pub mic: String,
    pub persona: String,
    pub enable_search: String,
    pub history_query: String,
    pub history_button: String,
    pub history_results: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            messages: "messages".to_string(),
            text: "text".to_string(),
            send: "send".to_string(),
            mic: "mic".to_string(),
            persona: "persona".to_string(),
            enable_search: "enableSearch".to_string(),
            history_query: "histq".to_string(),
            history_button: "histbtn".to_string(),
            history_results: "histres".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub chat: String,
    pub history_search: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            chat: "/api/chat".to_string(),
            history_search: "/api/history/search".to_string(),
        }
    }
}

/// Prefixes of transcript entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub user: String,
    pub assistant: String,
    pub error: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            user: "我".to_string(),
            assistant: "助手".to_string(),
            error: "错误".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            ClientConfig::from_json(r#"{"speech_lang":"en-US","elements":{"text":"input"}}"#)
                .unwrap();
        assert_eq!(config.speech_lang, "en-US");
        assert_eq!(config.elements.text, "input");
        assert_eq!(config.elements.messages, "messages");
        assert_eq!(config.endpoints.chat, "/api/chat");
        assert_eq!(config.labels.user, "我");
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(ClientConfig::from_json("{}").unwrap(), ClientConfig::default());
    }

    #[test]
    fn test_rejects_bad_json() {
        assert!(matches!(
            ClientConfig::from_json("{not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_rejects_zero_limit() {
        assert!(matches!(
            ClientConfig::from_json(r#"{"history_limit":0}"#),
            Err(ConfigError::Invalid(_))
        ));
    }
}
