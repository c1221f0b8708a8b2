use citysuggest_core::SuggestionView;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlElement, HtmlInputElement};

/// Attribute carrying an entry's position in the rendered list.
pub const INDEX_ATTR: &str = "data-index";

/// The two pre-existing elements the widget is bound to.
///
/// The view only toggles the list's `display` style and replaces its `<li>`
/// children; it never creates or removes the bound elements themselves.
pub struct DomView {
    document: Document,
    input: HtmlInputElement,
    list: HtmlElement,
}

impl DomView {
    pub fn bind(document: &Document, input_id: &str, list_id: &str) -> Result<Self, JsValue> {
        let input = document
            .get_element_by_id(input_id)
            .ok_or_else(|| missing(input_id))?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| JsValue::from_str(&format!("#{input_id} is not an <input>")))?;

        let list = document
            .get_element_by_id(list_id)
            .ok_or_else(|| missing(list_id))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| JsValue::from_str(&format!("#{list_id} is not an HTML element")))?;

        Ok(Self {
            document: document.clone(),
            input,
            list,
        })
    }

    pub fn input(&self) -> &HtmlInputElement {
        &self.input
    }

    pub fn list(&self) -> &HtmlElement {
        &self.list
    }

    pub fn input_value(&self) -> String {
        self.input.value()
    }

    /// `true` if `target` is the bound input element itself.
    pub fn is_input(&self, target: Option<&EventTarget>) -> bool {
        target.is_some_and(|t| {
            let t: &JsValue = t.as_ref();
            let input: &JsValue = self.input.as_ref();
            t == input
        })
    }

    /// Position of the entry a click inside the list landed on, if any.
    pub fn entry_index(&self, target: Option<&EventTarget>) -> Option<usize> {
        let element = target?.dyn_ref::<Element>()?;
        let entry = element.closest(&format!("li[{INDEX_ATTR}]")).ok()??;
        if !self.list.contains(Some(&*entry)) {
            return None;
        }
        entry.get_attribute(INDEX_ATTR)?.parse().ok()
    }

    fn set_display(&self, value: &str) {
        if let Err(e) = self.list.style().set_property("display", value) {
            log::warn!("could not set list display to {value}: {e:?}");
        }
    }

    fn append_entry(&self, index: usize, name: &str) -> Result<(), JsValue> {
        let li = self.document.create_element("li")?;
        li.set_text_content(Some(name));
        li.set_attribute(INDEX_ATTR, &index.to_string())?;
        self.list.append_child(&li)?;
        Ok(())
    }
}

impl SuggestionView for DomView {
    fn show(&mut self, entries: &[String]) {
        self.clear();
        for (index, name) in entries.iter().enumerate() {
            if let Err(e) = self.append_entry(index, name) {
                log::warn!("could not render suggestion '{name}': {e:?}");
            }
        }
        self.set_display("block");
    }

    fn hide(&mut self) {
        self.set_display("none");
    }

    fn clear(&mut self) {
        self.list.set_inner_html("");
    }

    fn set_input_value(&mut self, value: &str) {
        self.input.set_value(value);
    }
}

fn missing(id: &str) -> JsValue {
    JsValue::from_str(&format!("element #{id} not found"))
}
