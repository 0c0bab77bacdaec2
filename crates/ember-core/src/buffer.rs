//! Fixed-capacity FIFO with count-based eviction.

use crate::error::{EngineError, EngineResult};
use std::collections::VecDeque;

/// FIFO that never holds more than `capacity` items.
///
/// Eviction is purely by insertion order: the oldest entry goes first,
/// whatever its contents.
#[derive(Clone, Debug)]
pub struct BoundedBuffer<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> BoundedBuffer<T> {
    pub fn with_capacity(capacity: usize) -> EngineResult<Self> {
        if capacity == 0 {
            return Err(EngineError::ZeroCapacity);
        }
        Ok(Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        })
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append `item`, returning the entry evicted to make room, if any.
    pub fn push(&mut self, item: T) -> Option<T> {
        let evicted = if self.items.len() == self.capacity {
            self.items.pop_front()
        } else {
            None
        };
        self.items.push_back(item);
        evicted
    }

    /// Drop the oldest entries until at most `keep` remain. Returns how many
    /// were dropped.
    pub fn truncate_oldest(&mut self, keep: usize) -> usize {
        let excess = self.items.len().saturating_sub(keep);
        self.items.drain(..excess);
        excess
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator + '_ {
        self.items.iter()
    }

    pub fn oldest(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn newest(&self) -> Option<&T> {
        self.items.back()
    }
}
