// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTML elements
//!
//! ```
//! use kobold_lite::prelude::*;
//!
//! let view = div((
//!     h1("Sign in"),
//!     input().class("name").value("Alice"),
//! ));
//!
//! assert_eq!(
//!     kobold_lite::render_to_string(view),
//!     r#"<div><h1>Sign in</h1><input class="name" value="Alice"></div>"#,
//! );
//! ```

use web_sys::Node;

use crate::attribute::{Attribute, Class, On, Value};
use crate::event::{EventCast, Listener};
use crate::{dom, Mountable, View};

/// An HTML element with children `C` and attributes `A`.
pub struct Element<C, A = ()> {
    tag: &'static str,
    void: bool,
    children: C,
    attrs: A,
}

pub struct ElementProduct<C, A> {
    el: web_sys::Element,
    children: C,
    attrs: A,
}

impl<C> Element<C> {
    pub fn new(tag: &'static str, children: C) -> Self {
        Element {
            tag,
            void: false,
            children,
            attrs: (),
        }
    }
}

/// `<div>` element
pub fn div<C: View>(children: C) -> Element<C> {
    Element::new("div", children)
}

/// `<h1>` element
pub fn h1<C: View>(children: C) -> Element<C> {
    Element::new("h1", children)
}

/// `<p>` element
pub fn p<C: View>(children: C) -> Element<C> {
    Element::new("p", children)
}

/// `<input>` element, which never has children.
pub fn input() -> Element<()> {
    Element {
        tag: "input",
        void: true,
        children: (),
        attrs: (),
    }
}

impl<C, A> Element<C, A> {
    fn with<B>(self, attr: B) -> Element<C, (A, B)> {
        Element {
            tag: self.tag,
            void: self.void,
            children: self.children,
            attrs: (self.attrs, attr),
        }
    }

    /// Set the `class` attribute.
    pub fn class<V: AsRef<str>>(self, class: V) -> Element<C, (A, Class<V>)> {
        self.with(Class(class))
    }

    /// Set the `value` property, turning the field into a controlled one.
    pub fn value<V: AsRef<str>>(self, value: V) -> Element<C, (A, Value<V>)> {
        self.with(Value(value))
    }

    /// Listen to `input` events, fired on every edit of a text field.
    pub fn on_input<E, L>(self, listener: L) -> Element<C, (A, On<E, L>)>
    where
        E: EventCast,
        L: Listener<E>,
    {
        self.with(On::new("input", listener))
    }

    /// Listen to `change` events, fired when an edit of a text field is committed.
    pub fn on_change<E, L>(self, listener: L) -> Element<C, (A, On<E, L>)>
    where
        E: EventCast,
        L: Listener<E>,
    {
        self.with(On::new("change", listener))
    }
}

impl<C, A> View for Element<C, A>
where
    C: View,
    A: Attribute,
{
    type Product = ElementProduct<C::Product, A::Product>;

    fn build(self) -> Self::Product {
        let el = dom::element(self.tag);
        let attrs = self.attrs.build_in(&el);
        let children = self.children.build();

        children.mount(&el);

        ElementProduct { el, children, attrs }
    }

    fn update(self, p: &mut Self::Product) {
        self.attrs.update_in(&p.el, &mut p.attrs);
        self.children.update(&mut p.children);
    }

    fn render_html(self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        self.attrs.render_html(out);
        out.push('>');

        if self.void {
            return;
        }

        self.children.render_html(out);

        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

impl<C, A> Mountable for ElementProduct<C, A>
where
    C: Mountable,
    A: 'static,
{
    fn collect_nodes(&self, nodes: &mut Vec<Node>) {
        nodes.push(self.el.clone().into());
    }
}
