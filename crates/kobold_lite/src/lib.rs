// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Kobold Lite
//!
//! _Tiny declarative web views._
//!
//! Views are transient values built from plain functions such as [`div`](element::div) or
//! [`h1`](element::h1). A view is consumed once to **build** a product that owns the DOM
//! nodes, and any later view of the same type is consumed to **update** that product, which
//! only touches the DOM where a value has actually changed.
//!
//! The same view can also be written out as HTML markup without a browser, see
//! [`render_to_string`](render_to_string).
//!
//! ### Hello World
//!
//! ```no_run
//! use kobold_lite::prelude::*;
//!
//! struct Hello {
//!     name: &'static str,
//! }
//!
//! impl Hello {
//!     fn render(self) -> impl View {
//!         h1(("Hello ", self.name, "!"))
//!     }
//! }
//!
//! fn main() {
//!     kobold_lite::start(Hello { name: "Kobold" }.render());
//! }
//! ```
//!
//! ### Stateful views
//!
//! Views that need to own mutable state use the [`stateful`](stateful::stateful) function,
//! see the [`stateful`](stateful) module for details.

use web_sys::Node;

mod error;
mod html;
mod text;

pub mod attribute;
pub mod dom;
pub mod element;
pub mod event;

#[cfg(feature = "stateful")]
pub mod stateful;

pub use dom::{start, start_at, ROOT};
pub use error::MountError;
pub use html::render_to_string;

/// The prelude module with most commonly used types.
pub mod prelude {
    pub use crate::element::{div, h1, input, p};
    pub use crate::event::{Event, Listener, TargetValue};
    pub use crate::{Static, View};

    #[cfg(feature = "stateful")]
    pub use crate::stateful::{stateful, Link, ShouldRender, Then};
}

/// Re-exports of the DOM bindings used by the views.
pub mod reexport {
    pub use wasm_bindgen;
    pub use web_sys;
}

/// Trait that describes types that can be rendered in the DOM.
pub trait View: Sized {
    /// Product of this type, this is effectively the strongly-typed
    /// virtual DOM equivalent for Kobold Lite.
    type Product: Mountable;

    /// Build a product that can be mounted in the DOM from this type.
    fn build(self) -> Self::Product;

    /// Update the product and apply changes to the DOM if necessary.
    fn update(self, p: &mut Self::Product);

    /// Write this view as HTML markup. Event listeners produce no markup.
    fn render_html(self, out: &mut String);
}

/// Retained DOM state of a built [`View`](View).
pub trait Mountable: 'static {
    /// Push the top level DOM nodes of this product, in document order.
    fn collect_nodes(&self, nodes: &mut Vec<Node>);

    /// Append all top level nodes of this product to `parent`.
    fn mount(&self, parent: &Node) {
        let mut nodes = Vec::new();

        self.collect_nodes(&mut nodes);

        for node in &nodes {
            dom::append(parent, node);
        }
    }
}

/// Wrapper that builds the inner view once and ignores all updates.
pub struct Static<V>(pub V);

impl<V: View> View for Static<V> {
    type Product = V::Product;

    fn build(self) -> V::Product {
        self.0.build()
    }

    fn update(self, _: &mut V::Product) {}

    fn render_html(self, out: &mut String) {
        self.0.render_html(out)
    }
}

impl View for () {
    type Product = ();

    fn build(self) {}

    fn update(self, _: &mut ()) {}

    fn render_html(self, _: &mut String) {}
}

impl Mountable for () {
    fn collect_nodes(&self, _: &mut Vec<Node>) {}
}

macro_rules! impl_tuple {
    ($($t:ident $i:tt),*) => {
        impl<$($t: View),*> View for ($($t,)*) {
            type Product = ($($t::Product,)*);

            fn build(self) -> Self::Product {
                ($(self.$i.build(),)*)
            }

            fn update(self, p: &mut Self::Product) {
                $(self.$i.update(&mut p.$i);)*
            }

            fn render_html(self, out: &mut String) {
                $(self.$i.render_html(out);)*
            }
        }

        impl<$($t: Mountable),*> Mountable for ($($t,)*) {
            fn collect_nodes(&self, nodes: &mut Vec<Node>) {
                $(self.$i.collect_nodes(nodes);)*
            }
        }
    };
}

impl_tuple!(A 0, B 1);
impl_tuple!(A 0, B 1, C 2);
impl_tuple!(A 0, B 1, C 2, D 3);

fn init_panic_hook() {
    // Only enable console hook on debug builds
    #[cfg(debug_assertions)]
    {
        use std::cell::Cell;

        thread_local! {
            static INIT: Cell<bool> = Cell::new(false);
        }
        if !INIT.with(|init| init.get()) {
            std::panic::set_hook(Box::new(console_error_panic_hook::hook));

            INIT.with(|init| init.set(true));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use super::render_to_string;

    #[test]
    fn siblings_render_in_order() {
        let html = render_to_string(div((h1("Title"), p("body"), "tail")));

        assert_eq!(html, "<div><h1>Title</h1><p>body</p>tail</div>");
    }

    #[test]
    fn text_is_escaped() {
        let html = render_to_string(p("<b>Fish & Chips</b>"));

        assert_eq!(html, "<p>&lt;b&gt;Fish &amp; Chips&lt;/b&gt;</p>");
    }

    #[test]
    fn owned_and_borrowed_text() {
        let name = String::from("Bob");

        assert_eq!(render_to_string(h1(&name)), "<h1>Bob</h1>");
        assert_eq!(render_to_string(h1(name)), "<h1>Bob</h1>");
    }

    #[test]
    fn input_is_a_void_element() {
        let html = render_to_string(input().class("field").value("hi"));

        assert_eq!(html, r#"<input class="field" value="hi">"#);
    }

    #[test]
    fn listeners_produce_no_markup() {
        let html = render_to_string(input().on_input(|_: Event| {}).value(""));

        assert_eq!(html, r#"<input value="">"#);
    }

    #[test]
    fn static_renders_inner_view() {
        let html = render_to_string(div(Static(h1("Fixed"))));

        assert_eq!(html, "<div><h1>Fixed</h1></div>");
    }
}
