// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Attributes, properties and event listeners of an [`Element`](crate::element::Element)

use std::cell::RefCell;
use std::marker::PhantomData;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, HtmlTextAreaElement};

use crate::event::{EventCast, Listener};
use crate::html::escape_into;

/// Something that can be set on an existing DOM element.
pub trait Attribute {
    type Product: 'static;

    fn build_in(self, el: &Element) -> Self::Product;

    fn update_in(self, el: &Element, p: &mut Self::Product);

    fn render_html(self, out: &mut String);
}

impl Attribute for () {
    type Product = ();

    fn build_in(self, _: &Element) {}

    fn update_in(self, _: &Element, _: &mut ()) {}

    fn render_html(self, _: &mut String) {}
}

impl<A, B> Attribute for (A, B)
where
    A: Attribute,
    B: Attribute,
{
    type Product = (A::Product, B::Product);

    fn build_in(self, el: &Element) -> Self::Product {
        (self.0.build_in(el), self.1.build_in(el))
    }

    fn update_in(self, el: &Element, p: &mut Self::Product) {
        self.0.update_in(el, &mut p.0);
        self.1.update_in(el, &mut p.1);
    }

    fn render_html(self, out: &mut String) {
        self.0.render_html(out);
        self.1.render_html(out);
    }
}

fn render_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    escape_into(out, value);
    out.push('"');
}

/// The `class` attribute, diffed against the last rendered value.
pub struct Class<V>(pub V);

impl<V> Attribute for Class<V>
where
    V: AsRef<str>,
{
    type Product = String;

    fn build_in(self, el: &Element) -> String {
        let class = self.0.as_ref();

        el.set_class_name(class);
        class.to_owned()
    }

    fn update_in(self, el: &Element, memo: &mut String) {
        let class = self.0.as_ref();

        if *memo != class {
            el.set_class_name(class);
            memo.replace_range(.., class);
        }
    }

    fn render_html(self, out: &mut String) {
        render_attr(out, "class", self.0.as_ref())
    }
}

/// The `value` property of an `<input>` or `<textarea>`.
///
/// This makes the field controlled: on every update the live value of the
/// field is compared with the rendered one and overwritten if they differ.
pub struct Value<V>(pub V);

fn set_value(el: &Element, value: &str) {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        if input.value() != value {
            input.set_value(value);
        }
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        if area.value() != value {
            area.set_value(value);
        }
    } else {
        log::warn!("`value` set on a <{}> element", el.tag_name());
    }
}

impl<V> Attribute for Value<V>
where
    V: AsRef<str>,
{
    type Product = ();

    fn build_in(self, el: &Element) {
        set_value(el, self.0.as_ref())
    }

    fn update_in(self, el: &Element, _: &mut ()) {
        set_value(el, self.0.as_ref())
    }

    fn render_html(self, out: &mut String) {
        render_attr(out, "value", self.0.as_ref())
    }
}

/// An event listener for the DOM event `event`.
pub struct On<E, L> {
    event: &'static str,
    listener: L,
    _event: PhantomData<fn(E)>,
}

impl<E, L> On<E, L> {
    pub fn new(event: &'static str, listener: L) -> Self {
        On {
            event,
            listener,
            _event: PhantomData,
        }
    }
}

/// A single JavaScript closure registered with the element, forwarding events
/// to whichever listener was rendered last.
pub struct ListenerProduct<L> {
    el: Element,
    event: &'static str,
    listener: Rc<RefCell<L>>,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl<E, L> Attribute for On<E, L>
where
    E: EventCast,
    L: Listener<E>,
{
    type Product = ListenerProduct<L>;

    fn build_in(self, el: &Element) -> Self::Product {
        let listener = Rc::new(RefCell::new(self.listener));

        let closure = {
            let listener = listener.clone();

            Closure::wrap(Box::new(move |event: web_sys::Event| {
                if let Ok(listener) = listener.try_borrow() {
                    listener.handle(E::cast_from(event));
                }
            }) as Box<dyn FnMut(web_sys::Event)>)
        };

        if let Err(err) =
            el.add_event_listener_with_callback(self.event, closure.as_ref().unchecked_ref())
        {
            log::error!("failed to add `{}` listener: {err:?}", self.event);
        }

        ListenerProduct {
            el: el.clone(),
            event: self.event,
            listener,
            closure,
        }
    }

    fn update_in(self, _: &Element, p: &mut Self::Product) {
        // The listener is borrowed while it's handling an event, which is also when
        // a stateful view re-renders. The old listener is bound to the same state,
        // so it's fine to keep it.
        if let Ok(mut listener) = p.listener.try_borrow_mut() {
            *listener = self.listener;
        }
    }

    fn render_html(self, _: &mut String) {}
}

impl<L> Drop for ListenerProduct<L> {
    fn drop(&mut self) {
        if let Err(err) = self
            .el
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref())
        {
            log::error!("failed to remove `{}` listener: {err:?}", self.event);
        }
    }
}
