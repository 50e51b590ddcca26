// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Utilities for mounting views in the DOM

use std::cell::RefCell;
use std::collections::HashMap;
use std::mem::ManuallyDrop;

use wasm_bindgen::UnwrapThrowExt;
use web_sys::{Document, Element, Node, Text};

use crate::{init_panic_hook, MountError, Mountable, View};

/// Conventional id of the element views are mounted into.
pub const ROOT: &str = "root";

thread_local! {
    static DOCUMENT: Document = web_sys::window()
        .and_then(|window| window.document())
        .expect_throw("views can only be built inside a browser document");

    static MOUNTED: RefCell<HashMap<String, Box<dyn Mountable>>> = RefCell::default();
}

fn document() -> Result<Document, MountError> {
    web_sys::window()
        .ok_or(MountError::NoWindow)?
        .document()
        .ok_or(MountError::NoDocument)
}

/// Build the view and append it to the `<body>` of the document.
///
/// The built view is never dropped. Errors are logged, use [`start_at`](start_at)
/// to handle them instead.
pub fn start(view: impl View) {
    init_panic_hook();

    let body = match document().and_then(|document| document.body().ok_or(MountError::NoBody)) {
        Ok(body) => body,
        Err(err) => {
            log::error!("failed to start: {err}");
            return;
        }
    };

    let product = ManuallyDrop::new(view.build());

    product.mount(&body);
}

/// Build the view and mount it as the only content of the element with the given `id`.
///
/// Anything previously mounted at the same `id` is unmounted and dropped, together
/// with any state it owned.
pub fn start_at(id: &str, view: impl View) -> Result<(), MountError> {
    init_panic_hook();

    let container = document()?
        .get_element_by_id(id)
        .ok_or_else(|| MountError::MissingMountPoint(id.to_owned()))?;

    let product = view.build();

    container.set_text_content(None);
    product.mount(&container);

    let previous = MOUNTED.with(|mounted| {
        mounted
            .borrow_mut()
            .insert(id.to_owned(), Box::new(product))
    });

    if previous.is_some() {
        log::trace!("replaced view mounted at #{id}");
    } else {
        log::trace!("mounted view at #{id}");
    }

    Ok(())
}

pub(crate) fn element(tag: &str) -> Element {
    DOCUMENT
        .with(|document| document.create_element(tag))
        .unwrap_throw()
}

pub(crate) fn text_node(text: &str) -> Text {
    DOCUMENT.with(|document| document.create_text_node(text))
}

pub(crate) fn append(parent: &Node, child: &Node) {
    if let Err(err) = parent.append_child(child) {
        log::error!("failed to append a child node: {err:?}");
    }
}
