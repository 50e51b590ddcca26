// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Writing views out as HTML markup

use std::fmt::Write;

use askama_escape::{escape, Html};

use crate::View;

/// Render a view to a `String` of HTML without touching the DOM.
///
/// Stateful views are rendered with freshly initialized state.
///
/// ```
/// use kobold_lite::prelude::*;
///
/// let html = kobold_lite::render_to_string(div(h1("Hello")));
///
/// assert_eq!(html, "<div><h1>Hello</h1></div>");
/// ```
pub fn render_to_string(view: impl View) -> String {
    let mut out = String::new();

    view.render_html(&mut out);

    out
}

pub(crate) fn escape_into(out: &mut String, text: &str) {
    // Writing into a `String` cannot fail
    let _ = write!(out, "{}", escape(text, Html));
}
