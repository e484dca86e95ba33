// Shared harness for browser component tests.
//
// Provides mount/cleanup helpers and synthetic event builders so that
// individual test files stay focused on assertions.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    DataTransfer, Event, EventInit, File, FilePropertyBag, HtmlElement, HtmlInputElement,
    MouseEvent, MouseEventInit,
};

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> HtmlElement {
    let document = document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div.unchecked_into()
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &HtmlElement) {
    document().body().unwrap().remove_child(mount).ok();
}

/// Yield to the browser event loop so Leptos can flush pending effects.
pub async fn yield_now() {
    gloo_timers::future::TimeoutFuture::new(0).await;
}

pub fn location_hash() -> String {
    window().location().hash().unwrap_or_default()
}

pub fn reset_hash() {
    window().location().set_hash("").unwrap();
}

pub fn query(mount: &HtmlElement, selector: &str) -> Option<HtmlElement> {
    mount
        .query_selector(selector)
        .unwrap()
        .map(|el| el.unchecked_into())
}

// ---------------------------------------------------------------------------
// Synthetic events
// ---------------------------------------------------------------------------

/// Dispatch a bubbling, cancelable click. Returns `false` if the default
/// action was prevented.
pub fn click(target: &HtmlElement) -> bool {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = MouseEvent::new_with_mouse_event_init_dict("click", &init).unwrap();
    target.dispatch_event(&event).unwrap()
}

/// Put `files` into a file input and fire `change`, as the chooser would.
pub fn pick_files(input: &HtmlInputElement, files: &[File]) {
    let transfer = DataTransfer::new().unwrap();
    for file in files {
        transfer.items().add_with_file(file).unwrap();
    }
    input.set_files(transfer.files().as_ref());

    let init = EventInit::new();
    init.set_bubbles(true);
    let event = Event::new_with_event_init_dict("change", &init).unwrap();
    input.dispatch_event(&event).unwrap();
}

pub fn file(name: &str, media_type: &str) -> File {
    let parts = js_sys::Array::of1(&"%PDF-1.4".into());
    let options = FilePropertyBag::new();
    options.set_type(media_type);
    File::new_with_str_sequence_and_options(&parts, name, &options).unwrap()
}

// ---------------------------------------------------------------------------
// window.alert stub
// ---------------------------------------------------------------------------

/// Replaces `window.alert` with a recorder until dropped, so rejection
/// notices do not block the test runner.
pub struct AlertStub {
    original: JsValue,
    messages: Rc<RefCell<Vec<String>>>,
    _recorder: Closure<dyn FnMut(JsValue)>,
}

impl AlertStub {
    pub fn install() -> Self {
        let window = window();
        let original = js_sys::Reflect::get(&window, &"alert".into()).unwrap();
        let messages = Rc::new(RefCell::new(Vec::new()));

        let sink = messages.clone();
        let recorder = Closure::<dyn FnMut(JsValue)>::new(move |message: JsValue| {
            sink.borrow_mut().push(message.as_string().unwrap_or_default());
        });
        js_sys::Reflect::set(&window, &"alert".into(), recorder.as_ref()).unwrap();

        Self {
            original,
            messages,
            _recorder: recorder,
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Drop for AlertStub {
    fn drop(&mut self) {
        js_sys::Reflect::set(&window(), &"alert".into(), &self.original).ok();
    }
}
