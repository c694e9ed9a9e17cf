// SPDX-License-Identifier: MIT OR Apache-2.0
//! Typed publish/subscribe between widgets.
//!
//! An [EventChannel] is created by the nearest common parent of the widgets
//! that need to talk and handed down as a cloned handle. Handlers run
//! synchronously in subscription order. Events emitted from inside a handler
//! are queued and delivered once the current dispatch finishes.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

/// Handle returned by [EventChannel::subscribe], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Handler<E> = Rc<dyn Fn(&E)>;

struct Subscriber<E> {
    id: SubscriptionId,
    slot: Option<&'static str>,
    handler: Handler<E>,
}

struct Inner<E> {
    subscribers: Vec<Subscriber<E>>,
    next_id: u64,
    queue: VecDeque<E>,
    dispatching: bool,
}

/// A single-threaded, typed event channel.
pub struct EventChannel<E: 'static> {
    inner: Rc<RefCell<Inner<E>>>,
}

impl<E: 'static> EventChannel<E> {
    /// Create an empty channel.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                subscribers: Vec::new(),
                next_id: 0,
                queue: VecDeque::new(),
                dispatching: false,
            })),
        }
    }

    /// Register a handler for every event.
    pub fn subscribe(&self, handler: impl Fn(&E) + 'static) -> SubscriptionId {
        self.insert(None, Rc::new(handler))
    }

    /// Register a handler in a named slot, replacing whatever handler held
    /// the slot before. A slot has at most one subscriber.
    pub fn subscribe_exclusive(
        &self,
        slot: &'static str,
        handler: impl Fn(&E) + 'static,
    ) -> SubscriptionId {
        let replaced = self.unsubscribe_slot(slot);
        if replaced {
            log::debug!("Replaced subscriber in slot '{}'", slot);
        }
        self.insert(Some(slot), Rc::new(handler))
    }

    fn insert(&self, slot: Option<&'static str>, handler: Handler<E>) -> SubscriptionId {
        let mut inner = self.inner.borrow_mut();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.subscribers.push(Subscriber { id, slot, handler });
        id
    }

    /// Remove a handler. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.subscribers.len();
        inner.subscribers.retain(|s| s.id != id);
        inner.subscribers.len() != before
    }

    /// Remove the handler in a named slot. Returns `false` if the slot was empty.
    pub fn unsubscribe_slot(&self, slot: &'static str) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.subscribers.len();
        inner.subscribers.retain(|s| s.slot != Some(slot));
        inner.subscribers.len() != before
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    /// Deliver an event to all subscribers.
    ///
    /// Returns how many handlers received it. When called from inside a
    /// handler the event is queued and `0` is returned.
    pub fn emit(&self, event: E) -> usize {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.dispatching {
                inner.queue.push_back(event);
                return 0;
            }
            inner.dispatching = true;
        }
        let _guard = DispatchGuard(&*self.inner);

        let delivered = self.dispatch(&event);
        loop {
            let next = self.inner.borrow_mut().queue.pop_front();
            match next {
                Some(queued) => {
                    self.dispatch(&queued);
                }
                None => break,
            }
        }

        delivered
    }

    fn dispatch(&self, event: &E) -> usize {
        // handlers may (un)subscribe while running
        let handlers: Vec<Handler<E>> = self
            .inner
            .borrow()
            .subscribers
            .iter()
            .map(|s| s.handler.clone())
            .collect();
        for handler in &handlers {
            handler(event);
        }
        handlers.len()
    }
}

/// Clears the dispatching flag when `emit` returns or a handler panics.
struct DispatchGuard<'a, E>(&'a RefCell<Inner<E>>);

impl<E> Drop for DispatchGuard<'_, E> {
    fn drop(&mut self) {
        if let Ok(mut inner) = self.0.try_borrow_mut() {
            inner.dispatching = false;
            if std::thread::panicking() {
                inner.queue.clear();
            }
        }
    }
}

impl<E: 'static> Default for EventChannel<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: 'static> Clone for EventChannel<E> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<E: 'static> fmt::Debug for EventChannel<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventChannel")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// A dashboard page that can be asked to reload its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    /// Router inventory.
    Routers,
    /// Subscriber packages.
    Packages,
    /// Team members.
    Team,
    /// Subscribers.
    Clients,
    /// Dashboard users.
    Users,
    /// Payments and billing.
    Payments,
}

/// Notifications exchanged between dashboard widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DashboardEvent {
    /// A page should refetch its list, e.g. after an edit dialog saved.
    Reload(Page),
    /// The side drawer should close.
    DrawerClose,
    /// The side drawer was opened or closed.
    DrawerToggle {
        /// New drawer state.
        open: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_emit_reaches_all_subscribers() {
        let channel = EventChannel::<DashboardEvent>::new();
        let hits = Rc::new(Cell::new(0));
        for _ in 0..3 {
            let hits = hits.clone();
            channel.subscribe(move |_| hits.set(hits.get() + 1));
        }

        assert_eq!(channel.emit(DashboardEvent::DrawerClose), 3);
        assert_eq!(hits.get(), 3);
    }

    #[test]
    fn test_unsubscribe() {
        let channel = EventChannel::<u32>::new();
        let id = channel.subscribe(|_| {});
        assert!(channel.unsubscribe(id));
        assert!(!channel.unsubscribe(id));
        assert_eq!(channel.emit(1), 0);
    }

    #[test]
    fn test_exclusive_slot_replaces_previous_handler() {
        let channel = EventChannel::<DashboardEvent>::new();
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));

        let f = first.clone();
        channel.subscribe_exclusive("routers", move |_| f.set(f.get() + 1));
        let s = second.clone();
        channel.subscribe_exclusive("routers", move |_| s.set(s.get() + 1));

        channel.emit(DashboardEvent::Reload(Page::Routers));
        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
        assert_eq!(channel.subscriber_count(), 1);

        assert!(channel.unsubscribe_slot("routers"));
        assert_eq!(channel.subscriber_count(), 0);
    }

    #[test]
    fn test_reentrant_emit_is_queued() {
        let channel = EventChannel::<u32>::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        let relay = channel.clone();
        let log = order.clone();
        channel.subscribe(move |n| {
            log.borrow_mut().push(*n);
            if *n == 1 {
                assert_eq!(relay.emit(2), 0);
                log.borrow_mut().push(100);
            }
        });

        assert_eq!(channel.emit(1), 1);
        assert_eq!(*order.borrow(), vec![1, 100, 2]);
    }

    #[test]
    fn test_panicking_handler_does_not_wedge_channel() {
        let channel = EventChannel::<u32>::new();
        let seen = Rc::new(Cell::new(0));
        let counter = seen.clone();
        let relay = channel.clone();
        channel.subscribe(move |n| {
            counter.set(counter.get() + 1);
            if *n == 13 {
                relay.emit(99);
                panic!("handler failed");
            }
        });

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| channel.emit(13)));
        assert!(result.is_err());

        assert_eq!(channel.emit(1), 1);
        assert_eq!(seen.get(), 2);
    }
}
