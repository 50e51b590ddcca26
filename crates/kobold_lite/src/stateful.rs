// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Utilities for building stateful views
//!
//! Plain views hold no state of their own, and there is no way to update them
//! short of the parent view re-rendering them. To get around this the
//! [`stateful`](stateful) function can be used to create views that have ownership
//! over some arbitrary mutable state.
//!
//! The render function of a stateful view receives a reference to the current state
//! and a [`Link`](Link) to it. Links can produce [`Callback`s](Callback) which are
//! regular event [`Listener`s](crate::event::Listener) that mutate the state and
//! trigger a render of the view.
//!
//! ```
//! use kobold_lite::prelude::*;
//! use kobold_lite::stateful::Headless;
//!
//! fn counter(count: &u32, link: Link<u32>) -> impl View {
//!     let reset = link.callback(|count: &mut u32, _: Event| *count = 0);
//!
//!     p(count.to_string()).on_change(reset)
//! }
//!
//! let view = stateful(|| 0_u32, counter);
//! # let _ = view;
//!
//! // Without a DOM the same component can be driven headless:
//! let headless = Headless::new(|| 0_u32, counter);
//!
//! headless.link().update(|count| *count += 2);
//!
//! assert_eq!(headless.render_html(), "<p>2</p>");
//! ```
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use web_sys::Node;

use crate::{Mountable, View};

mod headless;
mod link;
mod should_render;

pub use headless::Headless;
pub use link::{Callback, Link};
pub use should_render::{ShouldRender, Then};

type Mutator<S> = Box<dyn FnOnce(&mut S) -> bool>;
type Updater<S> = Box<dyn FnMut(&S, Link<S>)>;

/// Shared core of a stateful view.
pub(crate) struct Inner<S> {
    state: RefCell<S>,
    /// Mutations requested while `state` was borrowed.
    pending: RefCell<VecDeque<Mutator<S>>>,
    /// Re-renders the view into its product, `None` while not built.
    updater: RefCell<Option<Updater<S>>>,
    dirty: Cell<bool>,
    this: Weak<Inner<S>>,
}

impl<S: 'static> Inner<S> {
    pub(crate) fn new(state: S) -> Rc<Self> {
        Rc::new_cyclic(|this| Inner {
            state: RefCell::new(state),
            pending: RefCell::default(),
            updater: RefCell::new(None),
            dirty: Cell::new(false),
            this: this.clone(),
        })
    }

    pub(crate) fn link(&self) -> Link<S> {
        Link::new(self.this.clone())
    }

    /// Mutate the state, or queue the mutation if the state is currently borrowed.
    pub(crate) fn update<F, O>(&self, mutator: F)
    where
        F: FnOnce(&mut S) -> O + 'static,
        O: ShouldRender,
    {
        let render = match self.state.try_borrow_mut() {
            Ok(mut state) => mutator(&mut *state).should_render(),
            Err(_) => {
                log::trace!("state is borrowed, queueing update");

                self.pending
                    .borrow_mut()
                    .push_back(Box::new(move |state: &mut S| mutator(state).should_render()));
                return;
            }
        };

        if render {
            self.dirty.set(true);
        }

        // The mutator itself may have queued more updates
        self.drive();
    }

    /// Apply queued mutations and render until the view reflects the latest state.
    ///
    /// Calls made while a render is already running only mark the view dirty,
    /// the running loop picks that up.
    pub(crate) fn drive(&self) {
        let Ok(mut updater) = self.updater.try_borrow_mut() else {
            return;
        };

        loop {
            self.flush_pending();

            if !self.dirty.replace(false) {
                break;
            }

            if let (Some(updater), Ok(state)) = (updater.as_mut(), self.state.try_borrow()) {
                updater(&*state, self.link());
            }
        }
    }

    fn flush_pending(&self) {
        loop {
            let next = self.pending.borrow_mut().pop_front();

            let Some(mutator) = next else {
                break;
            };

            match self.state.try_borrow_mut() {
                Ok(mut state) => {
                    if mutator(&mut *state) {
                        self.dirty.set(true);
                    }
                }
                Err(_) => {
                    self.pending.borrow_mut().push_front(mutator);
                    break;
                }
            }
        }
    }
}

/// Trait used to create the initial state of stateful views, see [`stateful`](stateful).
pub trait IntoState: Sized {
    type State: 'static;

    fn init(self) -> Self::State;
}

impl<F, S> IntoState for F
where
    S: 'static,
    F: FnOnce() -> S,
{
    type State = S;

    fn init(self) -> S {
        (self)()
    }
}

pub struct Stateful<S, F> {
    state: S,
    render: F,
}

pub struct StatefulProduct<S> {
    inner: Rc<Inner<S>>,
    nodes: Vec<Node>,
}

/// Create a stateful [`View`](crate::View) over some mutable state. The state
/// is created with the [`IntoState`](IntoState) trait.
///
/// The state is initialized once when the view is built, and is owned by the
/// built product from then on. It's dropped when the product is.
///
/// ```
/// # use kobold_lite::prelude::*;
/// // a closure creating the state...
/// let count_view = stateful(|| 0_u32, |count: &u32, _| p(count.to_string()));
///
/// // ...or a function with no parameters
/// let text_view = stateful(String::new, |text: &String, _| p(text.clone()));
/// # let _ = (count_view, text_view);
/// ```
pub fn stateful<S, F, V>(state: S, render: F) -> Stateful<S, F>
where
    S: IntoState,
    F: Fn(&S::State, Link<S::State>) -> V + 'static,
    V: View,
{
    Stateful { state, render }
}

impl<S, F, V> View for Stateful<S, F>
where
    S: IntoState,
    F: Fn(&S::State, Link<S::State>) -> V + 'static,
    V: View,
{
    type Product = StatefulProduct<S::State>;

    fn build(self) -> Self::Product {
        let inner = Inner::new(self.state.init());

        let mut product = {
            let state = inner.state.borrow();

            (self.render)(&*state, inner.link()).build()
        };

        let mut nodes = Vec::new();
        product.collect_nodes(&mut nodes);

        let render = self.render;

        *inner.updater.borrow_mut() = Some(Box::new(move |state: &S::State, link: Link<S::State>| {
            render(state, link).update(&mut product);
        }));

        // Apply anything requested during the first render
        inner.drive();

        StatefulProduct { inner, nodes }
    }

    fn update(self, _: &mut Self::Product) {
        // State is owned by the product and survives renders of the parent view
    }

    fn render_html(self, out: &mut String) {
        let inner = Inner::new(self.state.init());
        let state = inner.state.borrow();

        (self.render)(&*state, inner.link()).render_html(out);
    }
}

impl<S: 'static> Mountable for StatefulProduct<S> {
    fn collect_nodes(&self, nodes: &mut Vec<Node>) {
        nodes.extend(self.nodes.iter().cloned());
    }
}

impl<S, R> Stateful<S, R>
where
    S: IntoState,
{
    /// Run `handler` with a [`Link`](Link) to the state once the view is built.
    ///
    /// This is the way to get hold of the state of a mounted view from the outside,
    /// for example to drive it from timers or to inspect it in tests.
    pub fn once<H>(self, handler: H) -> Once<S, R, H>
    where
        H: FnOnce(Link<S::State>),
    {
        Once {
            with_state: self,
            handler,
        }
    }
}

pub struct Once<S, R, H> {
    with_state: Stateful<S, R>,
    handler: H,
}

impl<S, F, H, V> View for Once<S, F, H>
where
    S: IntoState,
    F: Fn(&S::State, Link<S::State>) -> V + 'static,
    H: FnOnce(Link<S::State>),
    V: View,
{
    type Product = StatefulProduct<S::State>;

    fn build(self) -> Self::Product {
        let product = self.with_state.build();

        (self.handler)(product.link());

        product
    }

    fn update(self, p: &mut Self::Product) {
        self.with_state.update(p);
    }

    fn render_html(self, out: &mut String) {
        self.with_state.render_html(out);
    }
}

impl<S: 'static> StatefulProduct<S> {
    /// Get a [`Link`](Link) to the state owned by this product.
    pub fn link(&self) -> Link<S> {
        self.inner.link()
    }
}
