#![forbid(unsafe_code)]

//! Ordered subscriber storage.
//!
//! A thin wrapper over `SmallVec` with the operations an event needs:
//! append, equality search, order-preserving removal, clear, and snapshot.
//! Small subscriber counts (the common case) stay inline.
//!
//! # Invariants
//!
//! 1. Iteration order is insertion order.
//! 2. [`SubscriberList::remove_first`] removes only the first equal entry and
//!    keeps the relative order of the rest.

use smallvec::SmallVec;

/// Subscribers stored inline before spilling to the heap.
pub(crate) const INLINE_SUBSCRIBERS: usize = 4;

pub(crate) type Snapshot<T> = SmallVec<[T; INLINE_SUBSCRIBERS]>;

#[derive(Debug, Clone)]
pub(crate) struct SubscriberList<T> {
    items: SmallVec<[T; INLINE_SUBSCRIBERS]>,
}

impl<T> Default for SubscriberList<T> {
    fn default() -> Self {
        Self {
            items: SmallVec::new(),
        }
    }
}

impl<T: PartialEq + Clone> SubscriberList<T> {
    pub(crate) fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Index of the first entry equal to `item`.
    pub(crate) fn position(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|x| x == item)
    }

    pub(crate) fn contains(&self, item: &T) -> bool {
        self.position(item).is_some()
    }

    /// Remove the first entry equal to `item`. Returns whether one was found.
    pub(crate) fn remove_first(&mut self, item: &T) -> bool {
        match self.position(item) {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        }
    }

    pub(crate) fn retain(&mut self, keep: impl FnMut(&mut T) -> bool) {
        self.items.retain(keep);
    }

    pub(crate) fn clear(&mut self) {
        self.items.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn snapshot(&self) -> Snapshot<T> {
        self.items.iter().cloned().collect()
    }

    pub(crate) fn to_vec(&self) -> Vec<T> {
        self.items.to_vec()
    }
}
