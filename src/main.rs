use docgate::app::App;
use docgate::config::LOG_LEVEL;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();
    // Only fails if a logger is already installed
    let _ = console_log::init_with_level(LOG_LEVEL);

    let root = document()
        .get_element_by_id("app")
        .expect("Failed to find #app element")
        .unchecked_into::<web_sys::HtmlElement>();

    mount_to(root, App).forget();
}
