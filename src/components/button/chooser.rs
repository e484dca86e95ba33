//! Browser bindings for the dispatch and validation traits.
//!
//! The hidden `<input type="file">` is held in a [`NodeRef`], which is empty
//! until the input mounts and empty again after it unmounts.

use leptos::html::Input;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, MouseEvent};

use crate::core::{ActivationEvent, FileChooser, SelectedFile};

impl ActivationEvent for MouseEvent {
    fn suppress_default(&self) {
        let event: &web_sys::Event = self;
        event.prevent_default();
    }
}

impl FileChooser for NodeRef<Input> {
    fn open(&self) -> bool {
        match self.get_untracked() {
            Some(input) => {
                input.click();
                true
            }
            None => false,
        }
    }

    fn reset(&self) {
        if let Some(input) = self.get_untracked() {
            input.set_value("");
        }
    }
}

/// Read the (at most one) picked file from a chooser `change` event.
pub fn selection_from_event(event: &web_sys::Event) -> Option<SelectedFile> {
    let input = event.target()?.dyn_into::<HtmlInputElement>().ok()?;
    let file = input.files()?.get(0)?;
    Some(SelectedFile::new(file.name(), file.type_()))
}
