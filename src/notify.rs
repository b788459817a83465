//! Explicit publish/subscribe registry for short user-facing messages.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

pub const MSG_CHART_SAVED: &str = "Chart saved to gallery!";
pub const MSG_CHART_DELETED: &str = "Chart deleted";

type Listener = Rc<dyn Fn(&str)>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Observer registry owned by whoever composes the application; pass it where needed.
///
/// Cloning yields another handle to the same registry.
#[derive(Clone, Default)]
pub struct MessageBus {
    inner: Rc<RefCell<Registry>>,
}

impl std::fmt::Debug for MessageBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageBus")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl MessageBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener`. It stays registered until the returned [`Subscription`] is dropped
    /// or unsubscribed.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, listener: impl Fn(&str) + 'static) -> Subscription {
        let mut reg = self.inner.borrow_mut();
        let id = reg.next_id;
        reg.next_id += 1;
        reg.listeners.push((id, Rc::new(listener)));
        Subscription {
            registry: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Deliver `msg` to every current listener in subscription order.
    ///
    /// Listeners may subscribe or unsubscribe while being called; such changes apply from the
    /// next publish.
    pub fn publish(&self, msg: &str) {
        let listeners: Vec<Listener> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        tracing::debug!(msg, listeners = listeners.len(), "publish");
        for l in listeners {
            l(msg);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

/// Disposer returned by [`MessageBus::subscribe`].
#[derive(Debug)]
pub struct Subscription {
    registry: Weak<RefCell<Registry>>,
    id: u64,
}

impl Subscription {
    /// Remove the listener now instead of at drop.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(reg) = self.registry.upgrade() {
            reg.borrow_mut().listeners.retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/notify/bus.rs"]
mod tests;
