#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use web_sys::{Document, Event, HtmlElement, HtmlInputElement};

use citysuggest_wasm::AutocompleteWidget;

wasm_bindgen_test_configure!(run_in_browser);

const BER: &str = r#"[
    {"address":{"city":"Berlin"}},
    {"address":{"town":"Bern"}},
    {"address":{"village":"Berlin"}}
]"#;

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Creates a fresh `<input>` + `<ul>` pair with ids unique to `name`.
fn fixture(name: &str) -> (HtmlInputElement, HtmlElement, String, String) {
    let doc = document();
    let body = doc.body().unwrap();

    let input_id = format!("{name}-input");
    let list_id = format!("{name}-list");

    let input: HtmlInputElement = doc.create_element("input").unwrap().dyn_into().unwrap();
    input.set_id(&input_id);
    let list: HtmlElement = doc.create_element("ul").unwrap().dyn_into().unwrap();
    list.set_id(&list_id);

    body.append_child(&input).unwrap();
    body.append_child(&list).unwrap();
    (input, list, input_id, list_id)
}

fn attach(input_id: &str, list_id: &str) -> AutocompleteWidget {
    AutocompleteWidget::new(
        Some(input_id.to_string()),
        Some(list_id.to_string()),
        JsValue::UNDEFINED,
    )
    .unwrap()
}

fn display(list: &HtmlElement) -> String {
    list.style().get_property_value("display").unwrap()
}

fn entry(list: &HtmlElement, index: u32) -> HtmlElement {
    list.children().item(index).unwrap().dyn_into().unwrap()
}

/// Sets the input's value and fires the `input` event a keystroke would.
fn type_text(input: &HtmlInputElement, text: &str) {
    input.set_value(text);
    input.dispatch_event(&Event::new("input").unwrap()).unwrap();
}

fn debounced(name: &str, debounce_ms: f64) -> (HtmlInputElement, HtmlElement, AutocompleteWidget) {
    let (input, list, input_id, list_id) = fixture(name);
    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &"debounce_ms".into(), &JsValue::from_f64(debounce_ms)).unwrap();
    // Nothing listens here, so a lookup that does fire fails fast.
    js_sys::Reflect::set(&options, &"endpoint".into(), &"http://127.0.0.1:9/search".into())
        .unwrap();
    let widget = AutocompleteWidget::new(Some(input_id), Some(list_id), options.into()).unwrap();
    (input, list, widget)
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    wasm_bindgen_futures::JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
fn attach_fails_without_elements() {
    citysuggest_wasm::start();

    let result = AutocompleteWidget::new(
        Some("does-not-exist".into()),
        Some("also-missing".into()),
        JsValue::UNDEFINED,
    );
    assert!(result.is_err());
}

#[wasm_bindgen_test]
fn renders_deduplicated_entries() {
    let (_input, list, input_id, list_id) = fixture("render");
    let widget = attach(&input_id, &list_id);

    assert!(widget.apply_response(BER));
    assert!(widget.is_visible());
    assert_eq!(list.child_element_count(), 2);
    assert_eq!(entry(&list, 0).text_content().as_deref(), Some("Berlin"));
    assert_eq!(entry(&list, 1).text_content().as_deref(), Some("Bern"));
    assert_eq!(display(&list), "block");

    let names: Vec<String> =
        serde_wasm_bindgen::from_value(widget.suggestions().unwrap()).unwrap();
    assert_eq!(names, vec!["Berlin", "Bern"]);
}

#[wasm_bindgen_test]
fn empty_response_hides_list() {
    let (_input, list, input_id, list_id) = fixture("empty");
    let widget = attach(&input_id, &list_id);

    widget.apply_response(BER);
    assert!(!widget.apply_response("[]"));
    assert_eq!(list.child_element_count(), 0);
    assert_eq!(display(&list), "none");
}

#[wasm_bindgen_test]
fn clicking_an_entry_selects_it() {
    let (input, list, input_id, list_id) = fixture("select");
    let widget = attach(&input_id, &list_id);

    widget.apply_response(BER);
    entry(&list, 1).click();

    assert_eq!(input.value(), "Bern");
    assert!(!widget.is_visible());
    assert_eq!(display(&list), "none");
}

#[wasm_bindgen_test]
fn clicking_elsewhere_hides_list() {
    let (input, list, input_id, list_id) = fixture("outside");
    let widget = attach(&input_id, &list_id);

    widget.apply_response(BER);
    input.click();
    assert!(widget.is_visible());

    document().body().unwrap().click();
    assert!(!widget.is_visible());
    assert_eq!(display(&list), "none");

    // Already hidden: still harmless.
    document().body().unwrap().click();
    assert!(!widget.is_visible());
}

#[wasm_bindgen_test]
fn short_input_hides_list() {
    let (input, list, input_id, list_id) = fixture("short");
    let widget = attach(&input_id, &list_id);

    widget.apply_response(BER);
    type_text(&input, " b ");

    assert!(!widget.is_visible());
    assert_eq!(display(&list), "none");
    assert_eq!(input.value(), " b ");
}

#[wasm_bindgen_test]
fn detach_hides_and_allows_reattach() {
    let (_input, list, input_id, list_id) = fixture("detach");

    let widget = attach(&input_id, &list_id);
    widget.apply_response(BER);
    widget.detach();
    assert_eq!(display(&list), "none");

    let again = attach(&input_id, &list_id);
    assert!(again.apply_response(BER));
}

#[wasm_bindgen_test]
fn detached_widget_stops_listening() {
    let (input, list, input_id, list_id) = fixture("released");

    let widget = attach(&input_id, &list_id);
    widget.apply_response(BER);
    widget.detach();

    list.style().set_property("display", "block").unwrap();

    document().body().unwrap().click();
    assert_eq!(display(&list), "block");

    type_text(&input, "b");
    assert_eq!(display(&list), "block");

    entry(&list, 0).click();
    assert_eq!(input.value(), "b");
    assert_eq!(display(&list), "block");
}

#[wasm_bindgen_test]
fn debounce_waits_and_short_query_cancels() {
    let (input, list, widget) = debounced("debounce-cancel", 50.0);

    type_text(&input, "ber");
    assert!(widget.pending_lookup());

    type_text(&input, "b");
    assert!(!widget.pending_lookup());
    assert!(!widget.is_visible());
    assert_eq!(display(&list), "none");
}

#[wasm_bindgen_test]
async fn debounce_timer_is_released_after_firing() {
    let (input, list, widget) = debounced("debounce-fire", 10.0);

    type_text(&input, "ber");
    type_text(&input, "berl");
    assert!(widget.pending_lookup());

    sleep(60).await;
    assert!(!widget.pending_lookup());
    assert_eq!(display(&list), "none");
}

#[wasm_bindgen_test]
fn detach_cancels_pending_lookup() {
    let (input, _list, widget) = debounced("debounce-detach", 50.0);

    type_text(&input, "ber");
    assert!(widget.pending_lookup());
    widget.detach();
}

#[wasm_bindgen_test]
fn rejects_invalid_options() {
    let (_input, _list, input_id, list_id) = fixture("options");
    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &"limit".into(), &JsValue::from_f64(0.0)).unwrap();

    let result = AutocompleteWidget::new(Some(input_id), Some(list_id), options.into());
    assert!(result.is_err());
}

#[wasm_bindgen_test]
fn partial_options_keep_defaults() {
    let (_input, _list, input_id, list_id) = fixture("partial");
    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &"debounce_ms".into(), &JsValue::from_f64(150.0)).unwrap();

    let widget = AutocompleteWidget::new(Some(input_id), Some(list_id), options.into()).unwrap();
    assert!(!widget.is_visible());
}
