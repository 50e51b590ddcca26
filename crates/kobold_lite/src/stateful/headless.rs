// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::rc::Rc;

use crate::stateful::{Inner, IntoState, Link};
use crate::View;

/// A stateful view driven without a DOM.
///
/// State lives as long as the `Headless` does, and its links and callbacks work
/// exactly like the ones of a mounted view. Rendering produces HTML markup of
/// the current state instead of updating DOM nodes.
pub struct Headless<S, F> {
    inner: Rc<Inner<S>>,
    render: F,
}

impl<S, F, V> Headless<S, F>
where
    S: 'static,
    F: Fn(&S, Link<S>) -> V,
    V: View,
{
    pub fn new<I>(state: I, render: F) -> Self
    where
        I: IntoState<State = S>,
    {
        Headless {
            inner: Inner::new(state.init()),
            render,
        }
    }

    /// Get a [`Link`](Link) to the state.
    pub fn link(&self) -> Link<S> {
        self.inner.link()
    }

    /// Read the current state, see [`Link::with`](Link::with).
    pub fn with<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R> {
        self.link().with(f)
    }

    /// Render the current state as HTML markup.
    ///
    /// Updates requested by the render function are applied after it returns.
    pub fn render_html(&self) -> String {
        let mut out = String::new();

        {
            let state = self.inner.state.borrow();

            (self.render)(&*state, self.link()).render_html(&mut out);
        }

        self.inner.drive();

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::p;
    use crate::stateful::Then;

    fn count_view(count: &u32, _: Link<u32>) -> impl View {
        p(count.to_string())
    }

    #[test]
    fn renders_current_state() {
        let headless = Headless::new(|| 0_u32, count_view);

        assert_eq!(headless.render_html(), "<p>0</p>");

        headless.link().set(7);

        assert_eq!(headless.render_html(), "<p>7</p>");
        assert_eq!(headless.render_html(), "<p>7</p>");
    }

    #[test]
    fn updates_requested_by_render_are_applied_after() {
        let headless = Headless::new(
            || 0_u32,
            |count: &u32, link: Link<u32>| {
                if *count == 0 {
                    link.set(5);
                }
                p(count.to_string())
            },
        );

        assert_eq!(headless.render_html(), "<p>0</p>");
        assert_eq!(headless.with(|count| *count), Some(5));
        assert_eq!(headless.render_html(), "<p>5</p>");
    }

    #[test]
    fn updates_requested_while_reading_are_applied_after() {
        let headless = Headless::new(|| 0_u32, count_view);
        let link = headless.link();

        let seen = headless.with(move |count| {
            link.set(5);
            *count
        });

        assert_eq!(seen, Some(0));
        assert_eq!(headless.with(|count| *count), Some(5));
    }

    #[test]
    fn reading_during_a_mutation_yields_none() {
        let headless = Headless::new(|| 0_u32, count_view);
        let link = headless.link();
        let seen = Rc::new(std::cell::Cell::new(Some(0)));

        headless.link().update({
            let seen = seen.clone();

            move |count| {
                *count = 3;
                seen.set(link.with(|count| *count));
            }
        });

        assert_eq!(seen.get(), None);
        assert_eq!(headless.with(|count| *count), Some(3));
    }

    #[test]
    fn callbacks_survive_being_detached() {
        let headless = Headless::new(String::new, |text: &String, _| p(text.clone()));

        let callback = headless
            .link()
            .callback(|text: &mut String, word: &'static str| text.push_str(word));

        let detached: Box<dyn Fn(&'static str)> = Box::new(move |word: &'static str| callback.call(word));

        detached("hello");
        detached(" world");

        assert_eq!(headless.render_html(), "<p>hello world</p>");
    }

    #[test]
    fn silent_callbacks_still_mutate() {
        let headless = Headless::new(|| 1_u32, count_view);

        let double = headless.link().callback(|count: &mut u32, _: ()| {
            *count *= 2;
            Then::Stop
        });

        double.call(());
        double.call(());

        assert_eq!(headless.with(|count| *count), Some(4));
    }

    #[test]
    fn dead_links_are_no_ops() {
        let headless = Headless::new(|| 0_u32, count_view);
        let link = headless.link();

        assert!(link.is_alive());
        assert_eq!(link.with(|count| *count), Some(0));

        drop(headless);

        link.update(|count| *count += 1);

        assert!(!link.is_alive());
        assert_eq!(link.with(|count| *count), None);
    }
}
