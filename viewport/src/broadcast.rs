//! Process-wide viewport store with push-based change notification.
//!
//! DESIGN
//! ======
//! The store owns exactly one [`ViewportDescriptor`] and replaces it wholesale
//! on every `publish`. Subscribers are plain callbacks registered through
//! [`ViewportBroadcast::subscribe`]; the returned [`Subscription`] is the only
//! way to detach and detaches on drop.
//!
//! ORDERING
//! ========
//! `publish` stores the new descriptor before the first callback runs, then
//! notifies the subscribers that were registered when the publish started, in
//! registration order. A subscriber detached during the loop is skipped. A
//! publish issued from inside a callback notifies everyone with the newer
//! descriptor and the outer loop stops, so no subscriber is handed a
//! descriptor older than one it has already seen.
//!
//! Single-threaded by construction (`Rc`/`Cell`): geometry events arrive on
//! the UI event loop and every publish completes before control returns to it.

#[cfg(test)]
#[path = "broadcast_test.rs"]
mod broadcast_test;

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use crate::descriptor::{ViewportDescriptor, classify};

type Callback = Rc<dyn Fn(&ViewportDescriptor)>;

struct Slot {
    id: u64,
    callback: Callback,
}

struct Inner {
    current: Cell<ViewportDescriptor>,
    revision: Cell<u64>,
    next_id: Cell<u64>,
    slots: RefCell<Vec<Slot>>,
}

impl Inner {
    fn callback_for(&self, id: u64) -> Option<Callback> {
        self.slots
            .borrow()
            .iter()
            .find(|slot| slot.id == id)
            .map(|slot| Rc::clone(&slot.callback))
    }

    fn remove(&self, id: u64) {
        self.slots.borrow_mut().retain(|slot| slot.id != id);
    }
}

/// Shared handle to the viewport store. Clones refer to the same store.
#[derive(Clone)]
pub struct ViewportBroadcast {
    inner: Rc<Inner>,
}

impl ViewportBroadcast {
    /// Create the store from the geometry available at startup.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            inner: Rc::new(Inner {
                current: Cell::new(classify(width, height)),
                revision: Cell::new(0),
                next_id: Cell::new(0),
                slots: RefCell::new(Vec::new()),
            }),
        }
    }

    /// The descriptor most recently published.
    #[must_use]
    pub fn current(&self) -> ViewportDescriptor {
        self.inner.current.get()
    }

    /// Number of publishes since creation.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.inner.revision.get()
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.slots.borrow().len()
    }

    /// Register `callback` for every future publish.
    ///
    /// The callback is not invoked with the current descriptor; read
    /// [`current`](Self::current) for the initial value.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&ViewportDescriptor) + 'static,
    {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner.slots.borrow_mut().push(Slot { id, callback: Rc::new(callback) });
        Subscription { id, store: Rc::downgrade(&self.inner) }
    }

    /// Recompute the descriptor for new geometry and notify subscribers.
    ///
    /// Every call publishes, even when the tier did not change; consumers that
    /// size things in pixels still need the new width.
    pub fn publish(&self, width: u32, height: u32) -> ViewportDescriptor {
        let next = classify(width, height);
        let revision = self.inner.revision.get() + 1;
        self.inner.current.set(next);
        self.inner.revision.set(revision);

        let ids: Vec<u64> = self.inner.slots.borrow().iter().map(|slot| slot.id).collect();
        for id in ids {
            if self.inner.revision.get() != revision {
                break;
            }
            if let Some(callback) = self.inner.callback_for(id) {
                callback(&next);
            }
        }
        next
    }
}

impl fmt::Debug for ViewportBroadcast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewportBroadcast")
            .field("current", &self.current())
            .field("revision", &self.revision())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Detach handle returned by [`ViewportBroadcast::subscribe`].
///
/// Dropping the handle detaches the callback. Outliving the store is fine.
#[must_use = "dropping a Subscription detaches it immediately"]
pub struct Subscription {
    id: u64,
    store: Weak<Inner>,
}

impl Subscription {
    /// Stop receiving notifications. Calling this more than once is a no-op.
    pub fn detach(&mut self) {
        if let Some(inner) = self.store.upgrade() {
            inner.remove(self.id);
        }
        self.store = Weak::new();
    }

    /// Whether this handle is still attached to a live store.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.store
            .upgrade()
            .is_some_and(|inner| inner.slots.borrow().iter().any(|slot| slot.id == self.id))
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.detach();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish_non_exhaustive()
    }
}
