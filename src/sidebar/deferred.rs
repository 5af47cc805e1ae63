//! Deferred release of replaced values
//!
//! Slot rebuilds swap a fresh slot in before the old one goes away. The old
//! slots are parked in a [`DeferredRelease`] and dropped together when the
//! handle goes out of scope, after every swap has completed.

/// Owns retired values until it is dropped
#[derive(Debug)]
pub struct DeferredRelease<T> {
    label: &'static str,
    items: Vec<T>,
}

impl<T> DeferredRelease<T> {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            items: Vec::new(),
        }
    }

    pub fn retire(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Drop for DeferredRelease<T> {
    fn drop(&mut self) {
        if !self.items.is_empty() {
            tracing::trace!(label = self.label, count = self.items.len(), "releasing retired values");
        }
        self.items.clear();
    }
}
