#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;
use voicechat_core::{
    ChatBackend, ChatController, ChatError, ChatForm, ChatReply, ChatRequest, ChatView,
    ClientConfig, HistoryQuery, HistoryRecord, HistoryResponse, Role, SpeechError, SpeechInput,
    SpeechOutput,
};

/// Backend answering from canned queues and recording what it was asked
#[derive(Default)]
pub struct FakeBackend {
    pub chat_replies: RefCell<VecDeque<Result<ChatReply, ChatError>>>,
    pub search_replies: RefCell<VecDeque<Result<HistoryResponse, ChatError>>>,
    pub chat_requests: RefCell<Vec<ChatRequest>>,
    pub search_queries: RefCell<Vec<HistoryQuery>>,
    /// When set, the next chat call waits for this to fire before answering
    pub gate: RefCell<Option<oneshot::Receiver<()>>>,
}

impl FakeBackend {
    pub fn reply(&self, conversation_id: &str, reply: &str) {
        self.chat_replies.borrow_mut().push_back(Ok(ChatReply {
            conversation_id: conversation_id.to_string(),
            reply: reply.to_string(),
        }));
    }

    pub fn fail(&self, err: ChatError) {
        self.chat_replies.borrow_mut().push_back(Err(err));
    }

    pub fn results(&self, response: HistoryResponse) {
        self.search_replies.borrow_mut().push_back(Ok(response));
    }

    /// Hold the next chat call until the returned sender fires
    pub fn hold_next(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.gate.borrow_mut() = Some(rx);
        tx
    }
}

#[async_trait(?Send)]
impl ChatBackend for FakeBackend {
    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatReply, ChatError> {
        self.chat_requests.borrow_mut().push(request.clone());
        let gate = self.gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.chat_replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ChatError::Network("no canned reply".to_string())))
    }

    async fn search_history(&self, query: &HistoryQuery) -> Result<HistoryResponse, ChatError> {
        self.search_queries.borrow_mut().push(query.clone());
        self.search_replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ChatError::Network("no canned results".to_string())))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryPane {
    Untouched,
    Lines(Vec<HistoryRecord>),
    Error(String),
}

/// In-memory page
pub struct FakeView {
    pub input: RefCell<String>,
    pub persona: RefCell<String>,
    pub enable_search: Cell<bool>,
    pub query: RefCell<String>,
    pub entries: RefCell<Vec<(Role, String)>>,
    pub history: RefCell<HistoryPane>,
    pub notices: RefCell<Vec<String>>,
}

impl Default for FakeView {
    fn default() -> Self {
        Self {
            input: RefCell::new(String::new()),
            persona: RefCell::new(String::new()),
            enable_search: Cell::new(false),
            query: RefCell::new(String::new()),
            entries: RefCell::new(Vec::new()),
            history: RefCell::new(HistoryPane::Untouched),
            notices: RefCell::new(Vec::new()),
        }
    }
}

impl FakeView {
    pub fn type_text(&self, text: &str) {
        *self.input.borrow_mut() = text.to_string();
    }

    pub fn type_query(&self, text: &str) {
        *self.query.borrow_mut() = text.to_string();
    }

    pub fn roles(&self) -> Vec<Role> {
        self.entries.borrow().iter().map(|(role, _)| *role).collect()
    }
}

impl ChatView for FakeView {
    fn read_form(&self) -> ChatForm {
        ChatForm {
            text: self.input.borrow().clone(),
            persona: self.persona.borrow().clone(),
            enable_search: self.enable_search.get(),
        }
    }

    fn set_input(&self, text: &str) {
        *self.input.borrow_mut() = text.to_string();
    }

    fn clear_input(&self) {
        self.input.borrow_mut().clear();
    }

    fn append_entry(&self, role: Role, text: &str) {
        self.entries.borrow_mut().push((role, text.to_string()));
    }

    fn history_query(&self) -> String {
        self.query.borrow().clone()
    }

    fn show_history(&self, records: &[HistoryRecord]) {
        *self.history.borrow_mut() = HistoryPane::Lines(records.to_vec());
    }

    fn show_history_error(&self, message: &str) {
        *self.history.borrow_mut() = HistoryPane::Error(message.to_string());
    }

    fn notify(&self, message: &str) {
        self.notices.borrow_mut().push(message.to_string());
    }
}

/// Speech capability that records calls
pub struct FakeSpeech {
    pub supported: bool,
    pub refuse_start: bool,
    pub starts: Cell<usize>,
    pub stops: Cell<usize>,
    pub spoken: RefCell<Vec<(String, String)>>,
}

impl FakeSpeech {
    pub fn supported() -> Self {
        Self {
            supported: true,
            refuse_start: false,
            starts: Cell::new(0),
            stops: Cell::new(0),
            spoken: RefCell::new(Vec::new()),
        }
    }

    pub fn unsupported() -> Self {
        Self {
            supported: false,
            ..Self::supported()
        }
    }
}

impl SpeechInput for FakeSpeech {
    fn is_supported(&self) -> bool {
        self.supported
    }

    fn start(&self) -> Result<(), SpeechError> {
        self.starts.set(self.starts.get() + 1);
        if self.refuse_start {
            Err(SpeechError::Start("InvalidStateError".to_string()))
        } else {
            Ok(())
        }
    }

    fn stop(&self) {
        self.stops.set(self.stops.get() + 1);
    }
}

impl SpeechOutput for FakeSpeech {
    fn is_supported(&self) -> bool {
        self.supported
    }

    fn speak(&self, text: &str, lang: &str) {
        self.spoken
            .borrow_mut()
            .push((text.to_string(), lang.to_string()));
    }
}

pub struct Harness {
    pub backend: Rc<FakeBackend>,
    pub view: Rc<FakeView>,
    pub speech: Rc<FakeSpeech>,
    pub controller: ChatController,
}

impl Harness {
    pub fn new() -> Self {
        Self::with(ClientConfig::default(), FakeSpeech::supported())
    }

    pub fn with(config: ClientConfig, speech: FakeSpeech) -> Self {
        let backend = Rc::new(FakeBackend::default());
        let view = Rc::new(FakeView::default());
        let speech = Rc::new(speech);
        let controller = ChatController::new(
            config,
            backend.clone(),
            view.clone(),
            speech.clone(),
            speech.clone(),
        );
        Self {
            backend,
            view,
            speech,
            controller,
        }
    }
}
