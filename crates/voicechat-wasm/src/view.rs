use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlInputElement};

use voicechat_core::transcript::{entry_class, entry_text, history_line};
use voicechat_core::{ChatForm, ChatView, ElementIds, HistoryRecord, Labels, Role};

use crate::dom::{self, ValueField};

/// [`ChatView`] over the host page's elements, resolved once at startup
pub struct DomChatView {
    document: Document,
    labels: Labels,
    messages: Element,
    text: HtmlInputElement,
    persona: ValueField,
    enable_search: HtmlInputElement,
    history_query: HtmlInputElement,
    history_results: Element,
}

impl DomChatView {
    pub fn new(document: Document, ids: &ElementIds, labels: Labels) -> Result<Self, JsValue> {
        Ok(Self {
            messages: dom::get_element_by_id(&document, &ids.messages)?,
            text: dom::get_input_by_id(&document, &ids.text)?,
            persona: dom::get_value_field_by_id(&document, &ids.persona)?,
            enable_search: dom::get_input_by_id(&document, &ids.enable_search)?,
            history_query: dom::get_input_by_id(&document, &ids.history_query)?,
            history_results: dom::get_element_by_id(&document, &ids.history_results)?,
            document,
            labels,
        })
    }

    fn render_entry(&self, role: Role, text: &str) -> Result<(), JsValue> {
        let entry = dom::create_element_with_class(&self.document, "div", &entry_class(role))?;
        entry.set_text_content(Some(&entry_text(&self.labels, role, text)));
        self.messages.append_child(&entry)?;
        dom::scroll_to_bottom(&self.messages);
        Ok(())
    }

    fn render_history(&self, records: &[HistoryRecord]) -> Result<(), JsValue> {
        dom::clear_element(&self.history_results);
        for record in records {
            let item = dom::create_element_with_class(&self.document, "div", "hist-item")?;
            item.set_text_content(Some(&history_line(record)));
            self.history_results.append_child(&item)?;
        }
        Ok(())
    }

    fn render_history_error(&self, message: &str) -> Result<(), JsValue> {
        dom::clear_element(&self.history_results);
        let item = dom::create_element_with_class(&self.document, "div", "hist-error")?;
        item.set_text_content(Some(&entry_text(&self.labels, Role::Error, message)));
        self.history_results.append_child(&item)?;
        Ok(())
    }
}

impl ChatView for DomChatView {
    fn read_form(&self) -> ChatForm {
        ChatForm {
            text: self.text.value(),
            persona: self.persona.value(),
            enable_search: self.enable_search.checked(),
        }
    }

    fn set_input(&self, text: &str) {
        self.text.set_value(text);
    }

    fn clear_input(&self) {
        self.text.set_value("");
    }

    fn append_entry(&self, role: Role, text: &str) {
        if let Err(e) = self.render_entry(role, text) {
            log::error!("Failed to render {} entry: {:?}", role.as_str(), e);
        }
    }

    fn history_query(&self) -> String {
        self.history_query.value()
    }

    fn show_history(&self, records: &[HistoryRecord]) {
        if let Err(e) = self.render_history(records) {
            log::error!("Failed to render history: {:?}", e);
        }
    }

    fn show_history_error(&self, message: &str) {
        if let Err(e) = self.render_history_error(message) {
            log::error!("Failed to render history error: {:?}", e);
        }
    }

    fn notify(&self, message: &str) {
        let shown = crate::window().and_then(|w| w.alert_with_message(message));
        if let Err(e) = shown {
            log::error!("Failed to show notice: {:?}", e);
        }
    }
}
