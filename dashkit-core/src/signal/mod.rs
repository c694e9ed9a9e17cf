// SPDX-License-Identifier: MIT OR Apache-2.0
use std::cell;
use std::ops::Deref;
use std::rc::Rc;

/// Contains the [StateSignal](state::StateSignal).
pub mod state;

/// A boxed signal.
pub type BoxedSignal<T> = Box<dyn Signal<T>>;

/// A listener called with the new value whenever a signal changes.
pub type Listener<T> = Box<dyn Fn(Ref<'_, T>)>;

/// A read handle to a signal value.
pub enum Ref<'a, T> {
    /// Borrowed from a [RefCell](cell::RefCell).
    Borrow(cell::Ref<'a, T>),
    /// Shared ownership of a fixed value.
    Rc(Rc<T>),
}

impl<T> Deref for Ref<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        match self {
            Ref::Borrow(r) => r,
            Ref::Rc(r) => r,
        }
    }
}

/// A value that notifies listeners when it changes.
pub trait Signal<T: 'static> {
    /// Read the current value.
    fn get(&self) -> Ref<'_, T>;

    /// Replace the value and notify listeners.
    fn set_value(&self, value: T);

    /// Replace the value and notify listeners.
    fn set(&self, value: T) {
        self.set_value(value);
    }

    /// Register a listener.
    fn listen(&self, listener: Listener<T>);

    /// Call all listeners with the current value.
    fn notify(&self);

    /// Clone into a boxed signal sharing the same value.
    fn dyn_clone(&self) -> BoxedSignal<T>;
}

/// Either a fixed value or a signal.
///
/// Widget properties that a parent may want to drive from state take a
/// `impl Into<MaybeSignal<T>>`.
pub enum MaybeSignal<T: 'static> {
    /// A live signal.
    Signal(BoxedSignal<T>),
    /// A fixed value.
    Value(Rc<T>),
}

impl<T: 'static> MaybeSignal<T> {
    /// Wrap a fixed value.
    pub fn value(value: T) -> Self {
        Self::Value(Rc::new(value))
    }

    /// Wrap a signal.
    pub fn signal(signal: impl Signal<T> + 'static) -> Self {
        Self::Signal(Box::new(signal))
    }

    /// Read the current value.
    pub fn get(&self) -> Ref<'_, T> {
        match self {
            MaybeSignal::Signal(signal) => signal.get(),
            MaybeSignal::Value(value) => Ref::Rc(value.clone()),
        }
    }
}

impl<T: 'static> From<T> for MaybeSignal<T> {
    fn from(value: T) -> Self {
        Self::value(value)
    }
}

impl<T: 'static> Clone for MaybeSignal<T> {
    fn clone(&self) -> Self {
        match self {
            MaybeSignal::Signal(signal) => MaybeSignal::Signal(signal.dyn_clone()),
            MaybeSignal::Value(value) => MaybeSignal::Value(value.clone()),
        }
    }
}
