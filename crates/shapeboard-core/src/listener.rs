//! Global listener registry with scoped subscriptions.
//!
//! The registry stands in for the host's global event targets (window and
//! document listeners). A [`Subscription`] is the only handle to a
//! registration and removes it when dropped, so a listener cannot outlive
//! the scope that acquired it.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

/// Global event channel a listener can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    KeyDown,
    PointerMove,
    PointerUp,
}

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    active: HashMap<u64, Channel>,
}

/// Shared registry of live listener subscriptions.
///
/// Cloning yields another handle to the same registry.
#[derive(Debug, Clone, Default)]
pub struct ListenerRegistry {
    inner: Rc<RefCell<Registry>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener on `channel`. The registration lasts until the
    /// returned guard is dropped.
    pub fn subscribe(&self, channel: Channel) -> Subscription {
        let mut registry = self.inner.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.active.insert(id, channel);
        log::trace!("Listener {} attached to {:?}", id, channel);
        Subscription {
            id,
            channel,
            registry: Rc::downgrade(&self.inner),
        }
    }

    /// Whether at least one listener is attached to `channel`.
    pub fn is_listening(&self, channel: Channel) -> bool {
        self.listener_count(channel) > 0
    }

    /// Number of listeners attached to `channel`.
    pub fn listener_count(&self, channel: Channel) -> usize {
        self.inner
            .borrow()
            .active
            .values()
            .filter(|&&c| c == channel)
            .count()
    }

    /// Total number of live listeners.
    pub fn active_count(&self) -> usize {
        self.inner.borrow().active.len()
    }
}

/// Guard for a registered listener. Dropping it unregisters the listener.
#[must_use = "dropping a Subscription immediately detaches the listener"]
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    channel: Channel,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    pub fn channel(&self) -> Channel {
        self.channel
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().active.remove(&self.id);
            log::trace!("Listener {} detached from {:?}", self.id, self.channel);
        }
    }
}
