use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::tier::Tier;

fn recorder() -> (Rc<RefCell<Vec<ViewportDescriptor>>>, impl Fn(&ViewportDescriptor) + 'static) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    (seen, move |d: &ViewportDescriptor| sink.borrow_mut().push(*d))
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn new_classifies_startup_geometry() {
    let store = ViewportBroadcast::new(800, 600);
    assert_eq!(store.current(), classify(800, 600));
    assert_eq!(store.current().tier(), Tier::Desktop);
    assert_eq!(store.revision(), 0);
    assert_eq!(store.subscriber_count(), 0);
}

#[test]
fn subscribe_does_not_replay_current() {
    let store = ViewportBroadcast::new(800, 600);
    let (seen, callback) = recorder();
    let _sub = store.subscribe(callback);
    assert!(seen.borrow().is_empty());
}

// =============================================================
// Publish
// =============================================================

#[test]
fn publish_replaces_descriptor_and_notifies() {
    let store = ViewportBroadcast::new(800, 600);
    let (seen, callback) = recorder();
    let _sub = store.subscribe(callback);

    let published = store.publish(2560, 1440);

    assert_eq!(published.tier(), Tier::FourK);
    assert_eq!(store.current(), published);
    assert_eq!(*seen.borrow(), vec![published]);
    assert_eq!(store.revision(), 1);
}

#[test]
fn every_event_publishes_without_debouncing() {
    let store = ViewportBroadcast::new(800, 600);
    let (seen, callback) = recorder();
    let _sub = store.subscribe(callback);

    for width in [801, 802, 803, 803] {
        store.publish(width, 600);
    }

    let widths: Vec<u32> = seen.borrow().iter().map(ViewportDescriptor::width).collect();
    assert_eq!(widths, vec![801, 802, 803, 803]);
}

#[test]
fn subscribers_run_in_registration_order() {
    let store = ViewportBroadcast::new(800, 600);
    let order = Rc::new(RefCell::new(Vec::new()));
    let subs: Vec<Subscription> = (0..3)
        .map(|n| {
            let order = Rc::clone(&order);
            store.subscribe(move |_| order.borrow_mut().push(n))
        })
        .collect();

    store.publish(1000, 600);

    assert_eq!(*order.borrow(), vec![0, 1, 2]);
    drop(subs);
}

#[test]
fn callback_observes_new_descriptor_through_store() {
    let store = ViewportBroadcast::new(800, 600);
    let seen = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&seen);
    let reader = store.clone();
    let _sub = store.subscribe(move |d| {
        *sink.borrow_mut() = Some((reader.current(), *d));
    });

    store.publish(1300, 700);

    let (current, delivered) = seen.borrow().unwrap_or_default();
    assert_eq!(current, delivered);
    assert_eq!(delivered.width(), 1300);
}

// =============================================================
// Detach
// =============================================================

#[test]
fn detached_subscriber_is_not_notified() {
    let store = ViewportBroadcast::new(800, 600);
    let (seen, callback) = recorder();
    let mut sub = store.subscribe(callback);

    sub.detach();
    store.publish(2000, 1000);

    assert!(seen.borrow().is_empty());
    assert!(!sub.is_attached());
    assert_eq!(store.subscriber_count(), 0);
}

#[test]
fn dropping_subscription_detaches() {
    let store = ViewportBroadcast::new(800, 600);
    let (seen, callback) = recorder();
    {
        let _sub = store.subscribe(callback);
        assert_eq!(store.subscriber_count(), 1);
    }
    store.publish(2000, 1000);
    assert!(seen.borrow().is_empty());
}

#[test]
fn detach_twice_is_harmless() {
    let store = ViewportBroadcast::new(800, 600);
    let mut sub = store.subscribe(|_| {});
    sub.detach();
    sub.detach();
    assert_eq!(store.subscriber_count(), 0);
}

#[test]
fn subscription_may_outlive_store() {
    let store = ViewportBroadcast::new(800, 600);
    let mut sub = store.subscribe(|_| {});
    drop(store);
    assert!(!sub.is_attached());
    sub.detach();
}

#[test]
fn subscriber_detached_mid_publish_is_skipped() {
    let store = ViewportBroadcast::new(800, 600);
    let victim: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

    let victim_handle = Rc::clone(&victim);
    let _killer = store.subscribe(move |_| {
        if let Some(mut sub) = victim_handle.borrow_mut().take() {
            sub.detach();
        }
    });
    let (seen, callback) = recorder();
    *victim.borrow_mut() = Some(store.subscribe(callback));

    store.publish(1500, 900);
    store.publish(1600, 900);

    assert!(seen.borrow().is_empty());
    assert_eq!(store.subscriber_count(), 1);
}

#[test]
fn subscriber_can_detach_itself() {
    let store = ViewportBroadcast::new(800, 600);
    let own: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
    let calls = Rc::new(RefCell::new(0));

    let own_handle = Rc::clone(&own);
    let counter = Rc::clone(&calls);
    *own.borrow_mut() = Some(store.subscribe(move |_| {
        *counter.borrow_mut() += 1;
        own_handle.borrow_mut().take();
    }));

    store.publish(900, 600);
    store.publish(901, 600);

    assert_eq!(*calls.borrow(), 1);
    assert_eq!(store.subscriber_count(), 0);
}

#[test]
fn subscriber_added_during_publish_waits_for_next_one() {
    let store = ViewportBroadcast::new(800, 600);
    let late: Rc<RefCell<Vec<Subscription>>> = Rc::new(RefCell::new(Vec::new()));
    let (seen, callback) = recorder();
    let pending = Rc::new(RefCell::new(Some(callback)));

    let registrar = store.clone();
    let late_handle = Rc::clone(&late);
    let _first = store.subscribe(move |_| {
        if let Some(cb) = pending.borrow_mut().take() {
            late_handle.borrow_mut().push(registrar.subscribe(cb));
        }
    });

    store.publish(900, 600);
    assert!(seen.borrow().is_empty());

    store.publish(1100, 600);
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn nested_publish_never_delivers_stale_descriptor() {
    let store = ViewportBroadcast::new(800, 600);
    let republisher = store.clone();
    let _first = store.subscribe(move |d| {
        if d.width() == 1000 {
            republisher.publish(2000, 600);
        }
    });
    let (seen, callback) = recorder();
    let _second = store.subscribe(callback);

    store.publish(1000, 600);

    let widths: Vec<u32> = seen.borrow().iter().map(ViewportDescriptor::width).collect();
    assert_eq!(widths, vec![2000]);
    assert_eq!(store.current().width(), 2000);
}
