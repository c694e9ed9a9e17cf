// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::signal::{BoxedSignal, Listener, Ref, Signal};
use std::cell::RefCell;
use std::rc::Rc;

/// Simple signal implementation based on [Rc] and [RefCell] to get/set a value and notify listeners when it changes.
///
/// Clones share both the value and the listener list. You can also mutate
/// the inner value in place, but only in a set scope via [StateSignal::mutate].
pub struct StateSignal<T: 'static> {
    value: Rc<RefCell<T>>,
    listeners: Rc<RefCell<Vec<Rc<Listener<T>>>>>,
}

impl<T: 'static> StateSignal<T> {
    /// Creates a new signal with the given value.
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            listeners: Rc::new(RefCell::new(Vec::with_capacity(1))),
        }
    }

    /// Mutate the inner value in a set scope. Listeners run after the scope ends.
    pub fn mutate(&self, op: impl FnOnce(&mut T)) {
        op(&mut self.value.borrow_mut());
        self.notify();
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl<T: 'static> Signal<T> for StateSignal<T> {
    fn get(&self) -> Ref<'_, T> {
        Ref::Borrow(self.value.borrow())
    }

    fn set_value(&self, value: T) {
        self.mutate(move |old| *old = value);
    }

    fn listen(&self, listener: Listener<T>) {
        self.listeners.borrow_mut().push(Rc::new(listener));
    }

    fn notify(&self) {
        // listeners may register further listeners while running
        let listeners = self.listeners.borrow().clone();
        for listener in listeners {
            listener(self.get());
        }
    }

    fn dyn_clone(&self) -> BoxedSignal<T> {
        Box::new(self.clone())
    }
}

impl<T: 'static> Clone for StateSignal<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            listeners: self.listeners.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_set_notifies_listeners() {
        let signal = StateSignal::new(1);
        let seen = Rc::new(Cell::new(0));
        let sink = seen.clone();
        signal.listen(Box::new(move |value| sink.set(*value)));

        signal.set(5);
        assert_eq!(*signal.get(), 5);
        assert_eq!(seen.get(), 5);
    }

    #[test]
    fn test_clones_share_value_and_listeners() {
        let signal = StateSignal::new(String::from("a"));
        let clone = signal.clone();
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        clone.listen(Box::new(move |_| counter.set(counter.get() + 1)));

        signal.mutate(|s| s.push('b'));
        assert_eq!(&*clone.get(), "ab");
        assert_eq!(calls.get(), 1);
        assert_eq!(signal.listener_count(), 1);
    }
}
