//! Chat, history and voice-input flows
//!
//! [`ChatController`] is shared by every event handler of the page. It runs
//! on a single thread, so its state lives in `Cell`/`RefCell` and no borrow
//! is ever held across an `.await`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::backend::ChatBackend;
use crate::config::ClientConfig;
use crate::error::{ChatError, SpeechError};
use crate::protocol::{ChatReply, HistoryQuery};
use crate::session::ChatSession;
use crate::speech::{SpeechInput, SpeechOutput};
use crate::transcript::Role;
use crate::view::ChatView;

/// Result of one send attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Input was empty after trimming; nothing rendered or sent
    Empty,
    /// Another send is still in flight; the input was left untouched
    Busy,
    Replied(ChatReply),
    Failed(ChatError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Empty,
    /// Number of records rendered
    Shown(usize),
    Failed(ChatError),
}

/// What a mic press did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MicAction {
    Unsupported,
    Started,
    Stopped,
    StartFailed(SpeechError),
}

pub struct ChatController {
    config: ClientConfig,
    backend: Rc<dyn ChatBackend>,
    view: Rc<dyn ChatView>,
    speech_in: Rc<dyn SpeechInput>,
    speech_out: Rc<dyn SpeechOutput>,
    session: RefCell<ChatSession>,
    in_flight: Cell<bool>,
    listening: Cell<bool>,
}

/// Clears the in-flight flag when the send finishes or is dropped
struct InFlightGuard<'a>(&'a Cell<bool>);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.replace(true) {
            None
        } else {
            Some(Self(flag))
        }
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl ChatController {
    pub fn new(
        config: ClientConfig,
        backend: Rc<dyn ChatBackend>,
        view: Rc<dyn ChatView>,
        speech_in: Rc<dyn SpeechInput>,
        speech_out: Rc<dyn SpeechOutput>,
    ) -> Self {
        Self {
            config,
            backend,
            view,
            speech_in,
            speech_out,
            session: RefCell::new(ChatSession::new()),
            in_flight: Cell::new(false),
            listening: Cell::new(false),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Snapshot of the conversation session
    pub fn session(&self) -> ChatSession {
        self.session.borrow().clone()
    }

    pub fn is_sending(&self) -> bool {
        self.in_flight.get()
    }

    pub fn is_listening(&self) -> bool {
        self.listening.get()
    }

    /// Send the current contents of the input field.
    ///
    /// The user entry is rendered and the field cleared before the request
    /// goes out. On failure an error entry takes the place of the reply and
    /// the session is left unchanged.
    pub async fn send(&self) -> SendOutcome {
        let form = self.view.read_form();
        let message = form.text.trim();
        if message.is_empty() {
            return SendOutcome::Empty;
        }

        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            log::debug!("Send ignored: a request is already in flight");
            return SendOutcome::Busy;
        };

        self.view.append_entry(Role::User, message);
        self.view.clear_input();

        let request = self
            .session
            .borrow()
            .request_for(message, &form.persona, form.enable_search);
        log::debug!(
            "Sending chat message (conversation: {:?}, search: {})",
            request.conversation_id,
            request.enable_search
        );

        match self.backend.send_chat(&request).await {
            Ok(reply) => {
                self.session.borrow_mut().apply_reply(&reply);
                self.view.append_entry(Role::Assistant, &reply.reply);
                if self.speech_out.is_supported() {
                    self.speech_out.speak(&reply.reply, &self.config.speech_lang);
                }
                SendOutcome::Replied(reply)
            }
            Err(e) => {
                log::error!("Chat request failed: {}", e);
                self.view.append_entry(Role::Error, &e.to_string());
                SendOutcome::Failed(e)
            }
        }
    }

    /// Run a history search for the contents of the query field
    pub async fn search_history(&self) -> SearchOutcome {
        let q = self.view.history_query();
        let q = q.trim();
        if q.is_empty() {
            return SearchOutcome::Empty;
        }

        let query = HistoryQuery {
            q: q.to_string(),
            limit: self.config.history_limit,
        };
        log::debug!("Searching history for {:?}", query.q);

        match self.backend.search_history(&query).await {
            Ok(response) => {
                self.view.show_history(&response.results);
                SearchOutcome::Shown(response.results.len())
            }
            Err(e) => {
                log::error!("History search failed: {}", e);
                self.view.show_history_error(&e.to_string());
                SearchOutcome::Failed(e)
            }
        }
    }

    /// Mic button: start listening when idle, stop when listening
    pub fn toggle_mic(&self) -> MicAction {
        if !self.speech_in.is_supported() {
            self.view.notify(&self.config.unsupported_notice);
            return MicAction::Unsupported;
        }

        if self.listening.get() {
            self.speech_in.stop();
            self.listening.set(false);
            return MicAction::Stopped;
        }

        self.listening.set(true);
        match self.speech_in.start() {
            Ok(()) => MicAction::Started,
            Err(e) => {
                log::warn!("{}", e);
                self.listening.set(false);
                MicAction::StartFailed(e)
            }
        }
    }

    /// Platform signalled the end of the recognition session
    pub fn on_recognition_end(&self) {
        self.listening.set(false);
    }

    /// A recognized phrase is put in the input field and sent right away
    pub async fn on_transcript(&self, transcript: &str) -> SendOutcome {
        self.listening.set(false);
        self.view.set_input(transcript);
        self.send().await
    }
}
