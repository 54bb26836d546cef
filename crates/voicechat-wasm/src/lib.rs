use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use voicechat_core::ClientConfig;

mod app;
mod dom;
mod http;
mod speech;
mod view;

pub use app::VoiceChatApp;

/// Initialize the WASM module
/// This sets up panic hooks and logging
#[wasm_bindgen(start)]
pub fn init() {
    // Set panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    wasm_logger::init(wasm_logger::Config::default());

    log::info!("voicechat WASM initialized");
}

/// Wire the chat widget to the host page using the stock element ids
#[wasm_bindgen]
pub fn init_voice_chat() -> Result<(), JsValue> {
    VoiceChatApp::new(ClientConfig::default())?.start()
}

/// Wire the chat widget with a JSON configuration. Fields that are left out
/// keep their defaults.
#[wasm_bindgen]
pub fn init_voice_chat_with_config(config_json: String) -> Result<(), JsValue> {
    let config = ClientConfig::from_json(&config_json)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    VoiceChatApp::new(config)?.start()
}

/// Get the window object
fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("No window object"))
}

/// Get the document object
fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("No document object"))
}
