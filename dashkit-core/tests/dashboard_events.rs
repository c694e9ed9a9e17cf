// SPDX-License-Identifier: MIT OR Apache-2.0
use std::cell::RefCell;
use std::rc::Rc;

use dashkit_core::events::{DashboardEvent, EventChannel, Page};

/// A page that refetches when its reload event arrives.
struct ListPage {
    page: Page,
    fetches: Rc<RefCell<u32>>,
}

impl ListPage {
    fn attach(page: Page, channel: &EventChannel<DashboardEvent>) -> Self {
        let fetches = Rc::new(RefCell::new(0));
        let counter = fetches.clone();
        channel.subscribe(move |event| {
            if *event == DashboardEvent::Reload(page) {
                *counter.borrow_mut() += 1;
            }
        });
        Self { page, fetches }
    }

    fn fetches(&self) -> u32 {
        *self.fetches.borrow()
    }
}

#[test]
fn reload_reaches_only_the_named_page() {
    let channel = EventChannel::new();
    let routers = ListPage::attach(Page::Routers, &channel);
    let packages = ListPage::attach(Page::Packages, &channel);

    // an edit dialog holding its own handle
    let dialog = channel.clone();
    assert_eq!(dialog.emit(DashboardEvent::Reload(Page::Routers)), 2);
    dialog.emit(DashboardEvent::Reload(Page::Routers));

    assert_eq!(routers.page, Page::Routers);
    assert_eq!(routers.fetches(), 2);
    assert_eq!(packages.fetches(), 0);
}

#[test]
fn drawer_toggle_closing_from_handler_is_delivered_after() {
    let channel: EventChannel<DashboardEvent> = EventChannel::new();
    let log = Rc::new(RefCell::new(Vec::new()));

    let relay = channel.clone();
    channel.subscribe_exclusive("drawer", move |event| {
        if let DashboardEvent::DrawerToggle { open: false } = event {
            relay.emit(DashboardEvent::DrawerClose);
        }
    });
    let seen = log.clone();
    channel.subscribe(move |event| seen.borrow_mut().push(*event));

    channel.emit(DashboardEvent::DrawerToggle { open: false });
    assert_eq!(
        *log.borrow(),
        vec![
            DashboardEvent::DrawerToggle { open: false },
            DashboardEvent::DrawerClose,
        ]
    );
}

#[test]
fn exclusive_slot_keeps_one_drawer_listener() {
    let channel: EventChannel<DashboardEvent> = EventChannel::new();
    let hits = Rc::new(RefCell::new((0, 0)));

    let first = hits.clone();
    channel.subscribe_exclusive("drawer", move |_| first.borrow_mut().0 += 1);
    let second = hits.clone();
    channel.subscribe_exclusive("drawer", move |_| second.borrow_mut().1 += 1);

    channel.emit(DashboardEvent::DrawerClose);
    assert_eq!(*hits.borrow(), (0, 1));
    assert_eq!(channel.subscriber_count(), 1);
    assert!(channel.unsubscribe_slot("drawer"));
    assert_eq!(channel.emit(DashboardEvent::DrawerClose), 0);
}
