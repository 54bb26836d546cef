use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlSelectElement};

/// Get element by ID
pub fn get_element_by_id(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Element not found: {}", id)))
}

/// Get input element by ID
pub fn get_input_by_id(document: &Document, id: &str) -> Result<HtmlInputElement, JsValue> {
    let element = get_element_by_id(document, id)?;
    element
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| JsValue::from_str(&format!("Element is not HtmlInputElement: {}", id)))
}

/// Form control whose value can be read, `<input>` or `<select>`
#[derive(Clone)]
pub enum ValueField {
    Input(HtmlInputElement),
    Select(HtmlSelectElement),
}

impl ValueField {
    pub fn value(&self) -> String {
        match self {
            ValueField::Input(input) => input.value(),
            ValueField::Select(select) => select.value(),
        }
    }
}

/// Get an `<input>` or `<select>` by ID
pub fn get_value_field_by_id(document: &Document, id: &str) -> Result<ValueField, JsValue> {
    let element = get_element_by_id(document, id)?;
    let element = match element.dyn_into::<HtmlInputElement>() {
        Ok(input) => return Ok(ValueField::Input(input)),
        Err(element) => element,
    };
    element
        .dyn_into::<HtmlSelectElement>()
        .map(ValueField::Select)
        .map_err(|_| JsValue::from_str(&format!("Element has no value: {}", id)))
}

/// Create element with class
pub fn create_element_with_class(
    document: &Document,
    tag: &str,
    class: &str,
) -> Result<Element, JsValue> {
    let element = document.create_element(tag)?;
    element.set_class_name(class);
    Ok(element)
}

/// Add event listener to element
pub fn add_click_listener<F>(element: &Element, callback: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget(); // Keep the closure alive
    Ok(())
}

pub fn add_keydown_listener<F>(element: &Element, callback: F) -> Result<(), JsValue>
where
    F: FnMut(web_sys::KeyboardEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut(_)>);
    element.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Clear element content
pub fn clear_element(element: &Element) {
    element.set_inner_html("");
}

/// Scroll element to bottom
pub fn scroll_to_bottom(element: &Element) {
    if let Ok(html_element) = element.clone().dyn_into::<HtmlElement>() {
        html_element.set_scroll_top(html_element.scroll_height());
    }
}
