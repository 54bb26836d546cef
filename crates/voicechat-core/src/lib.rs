//! Platform-independent core of the voicechat client
//!
//! This crate owns the wire types of the chat service, the conversation
//! session, transcript formatting and the [`ChatController`] that sequences
//! sends, history searches and the voice-input toggle. Everything that
//! touches the browser sits behind the capability traits defined here and is
//! implemented by `voicechat-wasm`.

pub mod backend;
pub mod config;
pub mod controller;
pub mod error;
pub mod protocol;
pub mod session;
pub mod speech;
pub mod transcript;
pub mod view;

// Re-export commonly used types
pub use backend::ChatBackend;
pub use config::{ClientConfig, ElementIds, Endpoints, Labels};
pub use controller::{ChatController, MicAction, SearchOutcome, SendOutcome};
pub use error::{ChatError, ConfigError, SpeechError};
pub use protocol::{decode_body, ChatReply, ChatRequest, HistoryQuery, HistoryRecord, HistoryResponse};
pub use session::ChatSession;
pub use speech::{NoSpeech, SpeechInput, SpeechOutput};
pub use transcript::Role;
pub use view::{ChatForm, ChatView};
