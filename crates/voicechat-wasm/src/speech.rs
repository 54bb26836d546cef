//! Web Speech API implementations of the speech capabilities

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{SpeechRecognition, SpeechRecognitionEvent, SpeechSynthesis, SpeechSynthesisUtterance};

use voicechat_core::{ChatController, SpeechError, SpeechInput, SpeechOutput};

/// Constructor names, unprefixed first
const RECOGNITION_CONSTRUCTORS: [&str; 2] = ["SpeechRecognition", "webkitSpeechRecognition"];

/// Look up a global property, treating `undefined` and `null` as missing
fn global_property(name: &str) -> Option<JsValue> {
    let window = web_sys::window()?;
    js_sys::Reflect::get(&window, &JsValue::from_str(name))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

/// The page's single recognizer
pub struct WebSpeechInput {
    recognizer: SpeechRecognition,
}

impl WebSpeechInput {
    /// Build the recognizer if the browser has one. Configured once:
    /// non-continuous, final results only.
    pub fn detect(lang: &str) -> Option<Self> {
        let ctor = RECOGNITION_CONSTRUCTORS
            .iter()
            .find_map(|name| global_property(name).filter(|value| value.is_function()))?;
        let ctor: js_sys::Function = ctor.unchecked_into();

        let recognizer = match js_sys::Reflect::construct(&ctor, &js_sys::Array::new()) {
            Ok(instance) => instance.unchecked_into::<SpeechRecognition>(),
            Err(e) => {
                log::warn!("Speech recognition constructor failed: {:?}", e);
                return None;
            }
        };
        recognizer.set_lang(lang);
        recognizer.set_continuous(false);
        recognizer.set_interim_results(false);

        Some(Self { recognizer })
    }

    /// Route recognition results and end events to the controller
    pub fn bind(&self, controller: Rc<ChatController>) {
        let on_result_controller = controller.clone();
        let onresult = Closure::wrap(Box::new(move |event: SpeechRecognitionEvent| {
            let transcript = event
                .results()
                .and_then(|results| results.get(0))
                .and_then(|result| result.get(0))
                .map(|alternative| alternative.transcript());
            let Some(transcript) = transcript else {
                log::warn!("Recognition result without a transcript");
                return;
            };

            let controller = on_result_controller.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = controller.on_transcript(&transcript).await;
                log::debug!("Voice message: {:?}", outcome);
            });
        }) as Box<dyn FnMut(_)>);
        self.recognizer
            .set_onresult(Some(onresult.as_ref().unchecked_ref()));
        onresult.forget();

        let onend = Closure::wrap(Box::new(move || {
            controller.on_recognition_end();
        }) as Box<dyn FnMut()>);
        self.recognizer.set_onend(Some(onend.as_ref().unchecked_ref()));
        onend.forget();
    }
}

impl SpeechInput for WebSpeechInput {
    fn is_supported(&self) -> bool {
        true
    }

    fn start(&self) -> Result<(), SpeechError> {
        self.recognizer
            .start()
            .map_err(|e| SpeechError::Start(format!("{:?}", e)))
    }

    fn stop(&self) {
        self.recognizer.stop();
    }
}

pub struct WebSpeechOutput {
    synth: SpeechSynthesis,
}

impl WebSpeechOutput {
    pub fn detect() -> Option<Self> {
        let synth = global_property("speechSynthesis")?;
        Some(Self {
            synth: synth.unchecked_into(),
        })
    }
}

impl SpeechOutput for WebSpeechOutput {
    fn is_supported(&self) -> bool {
        true
    }

    fn speak(&self, text: &str, lang: &str) {
        match SpeechSynthesisUtterance::new_with_text(text) {
            Ok(utterance) => {
                utterance.set_lang(lang);
                self.synth.speak(&utterance);
            }
            Err(e) => log::warn!("Failed to create utterance: {:?}", e),
        }
    }
}
