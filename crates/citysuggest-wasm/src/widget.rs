use crate::dom::DomView;
use crate::fetch::fetch_places;
use crate::listener::ListenerGuard;
use citysuggest_core::config::{DEFAULT_INPUT_ID, DEFAULT_LIST_ID};
use citysuggest_core::{Controller, LookupRequest, ResponseOutcome, SuggestConfig, SuggestError};
use serde_wasm_bindgen::{from_value, to_value};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::Event;

/// A pending debounced lookup.
struct Timer {
    handle: i32,
    // Kept alive until the timeout fires or is cleared.
    _callback: Closure<dyn FnMut()>,
}

/// State shared between the widget handle, its listeners and in-flight lookups.
struct Shared {
    controller: RefCell<Controller<DomView>>,
    timer: RefCell<Option<Timer>>,
}

impl Shared {
    fn on_input(self: &Rc<Self>) {
        let raw = self.controller.borrow().view().input_value();
        let request = self.controller.borrow_mut().on_input(&raw);

        match request {
            Ok(Some(request)) => {
                let delay = self.controller.borrow().config().debounce_ms;
                if delay == 0 {
                    self.cancel_timer();
                    spawn_lookup(Rc::clone(self), request);
                } else {
                    self.schedule(request, delay);
                }
            }
            Ok(None) => self.cancel_timer(),
            Err(e) => log::error!("could not build lookup request: {e}"),
        }
    }

    fn on_list_click(&self, event: &Event) {
        let mut controller = self.controller.borrow_mut();
        let Some(index) = controller.view().entry_index(event.target().as_ref()) else {
            return;
        };
        // The document-level handler must not see this click.
        event.stop_propagation();
        if let Some(name) = controller.on_entry_click(index) {
            log::debug!("selected '{name}'");
        }
    }

    fn on_document_click(&self, event: &Event) {
        let mut controller = self.controller.borrow_mut();
        let target_is_input = controller.view().is_input(event.target().as_ref());
        controller.on_outside_click(target_is_input);
    }

    fn schedule(self: &Rc<Self>, request: LookupRequest, delay_ms: u32) {
        self.cancel_timer();

        let Some(window) = web_sys::window() else {
            log::error!("no global window; cannot debounce lookup");
            return;
        };

        let shared = Rc::clone(self);
        let mut request = Some(request);
        let callback = Closure::<dyn FnMut()>::new(move || {
            // The slot holds this closure; release it outside of its own call.
            let spent = shared.timer.borrow_mut().take();
            spawn_local(async move { drop(spent) });

            if let Some(request) = request.take() {
                spawn_lookup(Rc::clone(&shared), request);
            }
        });

        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            delay,
        ) {
            Ok(handle) => {
                *self.timer.borrow_mut() = Some(Timer {
                    handle,
                    _callback: callback,
                });
            }
            Err(e) => log::error!("could not schedule lookup: {e:?}"),
        }
    }

    fn cancel_timer(&self) {
        let Some(timer) = self.timer.borrow_mut().take() else {
            return;
        };
        if let Some(window) = web_sys::window() {
            window.clear_timeout_with_handle(timer.handle);
        }
    }
}

fn spawn_lookup(shared: Rc<Shared>, request: LookupRequest) {
    spawn_local(async move {
        let result = fetch_places(request.url.as_str()).await;
        let outcome = shared
            .controller
            .borrow_mut()
            .on_response(request.generation, result);
        log::debug!("lookup #{} for '{}': {outcome:?}", request.generation, request.query);
    });
}

/// City-name autocomplete bound to one `<input>` and one list container.
///
/// ```javascript
/// import init, { AutocompleteWidget } from 'citysuggest-wasm';
///
/// await init();
/// const widget = new AutocompleteWidget('city-input', 'suggestions', { debounce_ms: 150 });
/// // ... later, when the component unmounts:
/// widget.detach();
/// ```
///
/// All listeners are owned by the widget. Calling `detach()` (or letting the
/// handle be garbage-collected via `free()`) removes them, cancels a pending
/// debounced lookup and makes in-flight responses stale.
#[wasm_bindgen]
pub struct AutocompleteWidget {
    shared: Rc<Shared>,
    _listeners: Vec<ListenerGuard>,
}

#[wasm_bindgen]
impl AutocompleteWidget {
    /// Binds to `#input_id` and `#list_id` (defaults `city-input` and
    /// `suggestions`). `options` is an optional partial `SuggestConfig`.
    #[wasm_bindgen(constructor)]
    pub fn new(
        input_id: Option<String>,
        list_id: Option<String>,
        options: JsValue,
    ) -> Result<AutocompleteWidget, JsValue> {
        let config: SuggestConfig = if options.is_undefined() || options.is_null() {
            SuggestConfig::default()
        } else {
            from_value(options)?
        };

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document available"))?;

        let input_id = input_id.as_deref().unwrap_or(DEFAULT_INPUT_ID);
        let list_id = list_id.as_deref().unwrap_or(DEFAULT_LIST_ID);
        let view = DomView::bind(&document, input_id, list_id)?;

        let input = view.input().clone();
        let list = view.list().clone();

        let mut controller = Controller::try_new(config, view).map_err(to_js)?;
        controller.hide();
        let shared = Rc::new(Shared {
            controller: RefCell::new(controller),
            timer: RefCell::new(None),
        });

        let listeners = vec![
            {
                let shared = Rc::clone(&shared);
                ListenerGuard::new(&input, "input", move |_| shared.on_input())?
            },
            {
                let shared = Rc::clone(&shared);
                ListenerGuard::new(&list, "click", move |e| shared.on_list_click(&e))?
            },
            {
                let shared = Rc::clone(&shared);
                ListenerGuard::new(&document, "click", move |e| shared.on_document_click(&e))?
            },
        ];

        log::info!("autocomplete attached to #{input_id} / #{list_id}");
        Ok(AutocompleteWidget {
            shared,
            _listeners: listeners,
        })
    }

    /// Entries currently shown, as an array of strings (empty while hidden).
    pub fn suggestions(&self) -> Result<JsValue, JsValue> {
        let controller = self.shared.controller.borrow();
        Ok(to_value(controller.state().entries())?)
    }

    pub fn is_visible(&self) -> bool {
        self.shared.controller.borrow().state().is_visible()
    }

    /// Renders a service response the host fetched itself, as if it answered
    /// the latest keystroke. Returns whether the list ended up visible.
    pub fn apply_response(&self, payload: &str) -> bool {
        self.shared.cancel_timer();
        let outcome = self.shared.controller.borrow_mut().apply_payload(payload);
        matches!(outcome, ResponseOutcome::Shown(_))
    }

    /// `true` while a debounced lookup is waiting for its timer.
    pub fn pending_lookup(&self) -> bool {
        self.shared.timer.borrow().is_some()
    }

    /// Hides the list without touching the input.
    pub fn hide(&self) {
        self.shared.controller.borrow_mut().hide();
    }

    /// Removes every listener and stops reacting to pending lookups.
    pub fn detach(self) {
        drop(self);
    }
}

impl Drop for AutocompleteWidget {
    fn drop(&mut self) {
        self.shared.cancel_timer();
        if let Ok(mut controller) = self.shared.controller.try_borrow_mut() {
            controller.invalidate();
            controller.hide();
        }
        log::info!("autocomplete detached");
    }
}

fn to_js(err: SuggestError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}
