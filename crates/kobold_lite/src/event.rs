// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Utilities for handling DOM events

use std::marker::PhantomData;
use std::ops::Deref;

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement, HtmlTextAreaElement};

/// Types a raw [`web_sys::Event`](web_sys::Event) can be turned into before it's
/// passed to a [`Listener`](Listener).
pub trait EventCast: 'static {
    fn cast_from(event: web_sys::Event) -> Self;
}

impl EventCast for web_sys::Event {
    fn cast_from(event: web_sys::Event) -> Self {
        event
    }
}

/// Smart wrapper around a [`web_sys::Event`](web_sys::Event) which includes the type
/// information of the event target.
#[repr(transparent)]
pub struct Event<T = HtmlElement> {
    event: web_sys::Event,
    _target: PhantomData<T>,
}

impl<T> From<web_sys::Event> for Event<T> {
    fn from(event: web_sys::Event) -> Self {
        Event {
            event,
            _target: PhantomData,
        }
    }
}

impl<T: 'static> EventCast for Event<T> {
    fn cast_from(event: web_sys::Event) -> Self {
        event.into()
    }
}

impl<T> Deref for Event<T> {
    type Target = web_sys::Event;

    fn deref(&self) -> &Self::Target {
        &self.event
    }
}

impl<T> Event<T>
where
    T: JsCast,
{
    /// Return the target element of this event.
    ///
    /// This method shadows over the [`Event::target`](web_sys::Event::target)
    /// method provided by `web-sys`, returning `None` if the target is missing
    /// or is not a `T`.
    pub fn target(&self) -> Option<T> {
        self.event.target()?.dyn_into().ok()
    }
}

/// Events that carry the current value of an editable field.
pub trait TargetValue {
    /// Current value of the field, `None` if the event has no usable value.
    fn target_value(&self) -> Option<String>;
}

impl TargetValue for Event<HtmlInputElement> {
    fn target_value(&self) -> Option<String> {
        self.target().map(|input| input.value())
    }
}

impl TargetValue for Event<HtmlTextAreaElement> {
    fn target_value(&self) -> Option<String> {
        self.target().map(|area| area.value())
    }
}

/// Anything that can handle events of type `E`.
///
/// Implemented for all `Fn(E)` closures, and for
/// [`Callback`s](crate::stateful::Callback) bound to stateful views.
pub trait Listener<E>: 'static {
    fn handle(&self, event: E);
}

impl<E, F> Listener<E> for F
where
    F: Fn(E) + 'static,
{
    fn handle(&self, event: E) {
        self(event)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn closures_are_listeners() {
        let seen = Rc::new(Cell::new(0));
        let listener = {
            let seen = seen.clone();
            move |n: i32| seen.set(seen.get() + n)
        };

        listener.handle(2);
        listener.handle(3);

        assert_eq!(seen.get(), 5);
    }
}
