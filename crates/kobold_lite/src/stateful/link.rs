// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::rc::{Rc, Weak};

use crate::event::Listener;
use crate::stateful::{Inner, ShouldRender};

/// A weak handle to the state of a stateful view.
///
/// Links don't keep the state alive, once the view is dropped all operations
/// on its links are no-ops.
pub struct Link<S> {
    weak: Weak<Inner<S>>,
}

impl<S> Clone for Link<S> {
    fn clone(&self) -> Self {
        Link {
            weak: self.weak.clone(),
        }
    }
}

impl<S: 'static> Link<S> {
    pub(super) fn new(weak: Weak<Inner<S>>) -> Self {
        Link { weak }
    }

    /// Bind a closure to the state, producing a [`Callback`](Callback) that can be
    /// used as an event listener or called directly.
    ///
    /// The callback carries its own link, so it keeps working no matter where it's
    /// moved to or who calls it.
    pub fn callback<E, F, O>(&self, cb: F) -> Callback<S, F>
    where
        F: Fn(&mut S, E) -> O + 'static,
        O: ShouldRender,
    {
        Callback {
            cb: Rc::new(cb),
            link: self.clone(),
        }
    }

    /// Update the state behind this `Link`.
    ///
    /// ```
    /// # use kobold_lite::prelude::*;
    /// fn example(count: Link<i32>) {
    ///     // increment count and trigger a render
    ///     count.update(|count| *count += 1);
    ///
    ///     // increment count if less than 10, only render on change
    ///     count.update(|count| {
    ///         if *count < 10 {
    ///             *count += 1;
    ///             Then::Render
    ///         } else {
    ///             Then::Stop
    ///         }
    ///     })
    /// }
    /// ```
    ///
    /// If the state is borrowed, for example when called from inside a render,
    /// the update is applied once the borrow ends.
    pub fn update<F, O>(&self, mutator: F)
    where
        F: FnOnce(&mut S) -> O + 'static,
        O: ShouldRender,
    {
        if let Some(inner) = self.weak.upgrade() {
            inner.update(mutator);
        }
    }

    /// Replace the entire state with a new value and trigger a render.
    pub fn set(&self, value: S) {
        self.update(move |state| *state = value);
    }

    /// Read the current state. Returns `None` if the view has been dropped
    /// or the state is being mutated.
    ///
    /// Updates requested from within `f` are applied once it returns.
    pub fn with<F, R>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&S) -> R,
    {
        let inner = self.weak.upgrade()?;
        let out = {
            let state = inner.state.try_borrow().ok()?;

            f(&*state)
        };

        inner.drive();

        Some(out)
    }

    /// Check whether the state behind this link still exists.
    pub fn is_alive(&self) -> bool {
        self.weak.strong_count() > 0
    }
}

/// A closure bound to the state of a stateful view, see [`Link::callback`](Link::callback).
pub struct Callback<S, F> {
    cb: Rc<F>,
    link: Link<S>,
}

impl<S, F> Clone for Callback<S, F> {
    fn clone(&self) -> Self {
        Callback {
            cb: self.cb.clone(),
            link: self.link.clone(),
        }
    }
}

impl<S, F> Callback<S, F>
where
    S: 'static,
    F: 'static,
{
    /// Run the callback with `event`, rendering the view if the callback says so.
    pub fn call<E, O>(&self, event: E)
    where
        E: 'static,
        F: Fn(&mut S, E) -> O,
        O: ShouldRender,
    {
        let cb = self.cb.clone();

        self.link.update(move |state| cb(state, event));
    }
}

impl<S, F, E, O> Listener<E> for Callback<S, F>
where
    S: 'static,
    E: 'static,
    F: Fn(&mut S, E) -> O + 'static,
    O: ShouldRender,
{
    fn handle(&self, event: E) {
        self.call(event)
    }
}
