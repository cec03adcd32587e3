use alloc::vec::Vec;

use crate::{Registry, Subscription};

/// Owns every [`Subscription`] a view creates, so teardown is a single drop.
///
/// [`Scope::revert`] disposes all subscriptions while keeping the scope reusable; dropping the
/// scope does the same.
#[derive(Debug)]
pub struct Scope<K> {
    registry: Registry<K>,
    subscriptions: Vec<Subscription<K>>,
}

impl<K> Scope<K> {
    pub fn new(registry: Registry<K>) -> Self {
        Self {
            registry,
            subscriptions: Vec::new(),
        }
    }

    pub fn registry(&self) -> &Registry<K> {
        &self.registry
    }

    /// Takes ownership of `subscription`; it is disposed with the scope.
    pub fn adopt(&mut self, subscription: Subscription<K>) {
        self.subscriptions.push(subscription);
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// Disposes every owned subscription, in registration order.
    pub fn revert(&mut self) {
        fdebug!(count = self.subscriptions.len(), "Scope::revert");
        for subscription in self.subscriptions.drain(..) {
            subscription.dispose();
        }
    }
}

impl<K> Drop for Scope<K> {
    fn drop(&mut self) {
        self.revert();
    }
}
