use citysuggest_core::{parse_places, Place, Result, SuggestError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// GETs `url` with the browser's `fetch` and parses the body as places.
///
/// No timeout or retry; the browser defaults apply.
pub async fn fetch_places(url: &str) -> Result<Vec<Place>> {
    let window = web_sys::window()
        .ok_or_else(|| SuggestError::Transport("no global window".into()))?;

    let response: Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(transport)?
        .dyn_into()
        .map_err(transport)?;

    if !response.ok() {
        return Err(SuggestError::Status(response.status()));
    }

    let body = JsFuture::from(response.text().map_err(transport)?)
        .await
        .map_err(transport)?
        .as_string()
        .ok_or_else(|| SuggestError::Transport("response body is not text".into()))?;

    parse_places(&body)
}

fn transport(err: JsValue) -> SuggestError {
    let message = err
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{err:?}"));
    SuggestError::Transport(message)
}
