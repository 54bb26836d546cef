use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::Document;

use voicechat_core::{ChatController, ClientConfig, NoSpeech, SpeechInput, SpeechOutput};

use crate::dom;
use crate::http::HttpBackend;
use crate::speech::{WebSpeechInput, WebSpeechOutput};
use crate::view::DomChatView;

pub struct VoiceChatApp {
    document: Document,
    config: ClientConfig,
}

impl VoiceChatApp {
    pub fn new(config: ClientConfig) -> Result<Self, JsValue> {
        Ok(Self {
            document: crate::document()?,
            config,
        })
    }

    /// Resolve the page elements, probe speech support and attach the
    /// event listeners. Listeners live as long as the page.
    pub fn start(self) -> Result<(), JsValue> {
        let view = Rc::new(DomChatView::new(
            self.document.clone(),
            &self.config.elements,
            self.config.labels.clone(),
        )?);
        let backend = Rc::new(HttpBackend::new(self.config.endpoints.clone()));

        let recognizer = WebSpeechInput::detect(&self.config.speech_lang).map(Rc::new);
        let speech_in: Rc<dyn SpeechInput> = match &recognizer {
            Some(recognizer) => recognizer.clone(),
            None => Rc::new(NoSpeech),
        };
        let speech_out: Rc<dyn SpeechOutput> = match WebSpeechOutput::detect() {
            Some(synth) => Rc::new(synth),
            None => Rc::new(NoSpeech),
        };
        log::info!(
            "Speech support: recognition={}, synthesis={}",
            speech_in.is_supported(),
            speech_out.is_supported()
        );

        let controller = Rc::new(ChatController::new(
            self.config.clone(),
            backend,
            view,
            speech_in,
            speech_out,
        ));
        if let Some(recognizer) = recognizer {
            recognizer.bind(controller.clone());
        }

        self.setup_send(&controller)?;
        self.setup_mic(&controller)?;
        self.setup_history_search(&controller)?;

        log::info!("Voice chat ready");
        Ok(())
    }

    fn setup_send(&self, controller: &Rc<ChatController>) -> Result<(), JsValue> {
        let ids = &self.config.elements;

        // Send button
        let send_btn = dom::get_element_by_id(&self.document, &ids.send)?;
        let ctrl = controller.clone();
        dom::add_click_listener(&send_btn, move || spawn_send(ctrl.clone()))?;

        // Enter key handler
        let input = dom::get_element_by_id(&self.document, &ids.text)?;
        let ctrl = controller.clone();
        dom::add_keydown_listener(&input, move |event| {
            if event.key() == "Enter" && !event.is_composing() {
                event.prevent_default();
                spawn_send(ctrl.clone());
            }
        })?;

        Ok(())
    }

    fn setup_mic(&self, controller: &Rc<ChatController>) -> Result<(), JsValue> {
        let mic_btn = dom::get_element_by_id(&self.document, &self.config.elements.mic)?;
        let ctrl = controller.clone();
        dom::add_click_listener(&mic_btn, move || {
            let action = ctrl.toggle_mic();
            log::debug!("Mic: {:?}", action);
        })
    }

    fn setup_history_search(&self, controller: &Rc<ChatController>) -> Result<(), JsValue> {
        let button = dom::get_element_by_id(&self.document, &self.config.elements.history_button)?;
        let ctrl = controller.clone();
        dom::add_click_listener(&button, move || {
            let ctrl = ctrl.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = ctrl.search_history().await;
                log::debug!("History search: {:?}", outcome);
            });
        })
    }
}

fn spawn_send(controller: Rc<ChatController>) {
    wasm_bindgen_futures::spawn_local(async move {
        let outcome = controller.send().await;
        log::debug!("Send: {:?}", outcome);
    });
}
