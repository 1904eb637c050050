//! Fixed-capacity circular buffer with overwrite-on-full semantics.
//!
//! Two ways of looking at the contents are exposed and they must not be mixed:
//!
//! - Logical order: [`RingBuffer::front`], [`RingBuffer::back`] and [`RingBuffer::iter`]
//!   walk the valid elements oldest to newest, starting at the tail slot.
//! - Physical slots: [`RingBuffer::get`] and `buffer[slot]` address raw storage.
//!   Slot 0 is only the logical front until the buffer wraps for the first time.

use anyhow::{bail, Result};
use std::iter::FusedIterator;
use std::ops::Index;

/// Circular buffer that evicts its oldest element when a push would overflow it.
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    slots: Vec<T>,
    capacity: usize,
    head: usize,
    tail: usize,
    total_inserts: u64,
}

impl<T> RingBuffer<T> {
    /// Creates an empty buffer. A zero capacity is rejected.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            bail!("ring buffer capacity must be at least 1");
        }
        Ok(Self {
            slots: Vec::with_capacity(capacity),
            capacity,
            head: 0,
            tail: 0,
            total_inserts: 0,
        })
    }

    /// Appends `value`, evicting the logical oldest element once the buffer is full.
    pub fn push(&mut self, value: T) {
        if self.head < self.slots.len() {
            self.slots[self.head] = value;
        } else {
            self.slots.push(value);
        }
        self.total_inserts = self.total_inserts.saturating_add(1);
        self.head = (self.head + 1) % self.capacity;
        if self.total_inserts > self.capacity as u64 {
            self.tail = (self.tail + 1) % self.capacity;
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of valid elements: `min(total_inserts, capacity)`.
    pub fn len(&self) -> usize {
        if self.total_inserts >= self.capacity as u64 {
            self.capacity
        } else {
            self.total_inserts as usize
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_inserts == 0
    }

    /// Whether every slot holds a valid element.
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity
    }

    /// Pushes accepted since construction or the last [`clear`](Self::clear).
    pub fn total_inserts(&self) -> u64 {
        self.total_inserts
    }

    /// Resets to empty. Storage is kept, so capacity never changes.
    pub fn clear(&mut self) {
        self.head = 0;
        self.tail = 0;
        self.total_inserts = 0;
    }

    /// Logical oldest element, or `None` when empty.
    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots.get(self.tail)
    }

    /// Most recently pushed element, or `None` when empty.
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        let newest = (self.head + self.capacity - 1) % self.capacity;
        self.slots.get(newest)
    }

    /// Physical slot access. Returns `None` for `slot >= capacity` and for slots
    /// that have never been written. After [`clear`](Self::clear) a slot may still
    /// hold a stale value; this is storage, not logical position.
    pub fn get(&self, slot: usize) -> Option<&T> {
        if slot >= self.capacity {
            return None;
        }
        self.slots.get(slot)
    }

    /// Iterates the valid elements oldest to newest.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            buffer: self,
            position: self.tail,
            remaining: self.len(),
        }
    }
}

impl<T> Index<usize> for RingBuffer<T> {
    type Output = T;

    /// Physical slot access; panics when the slot is out of range or unwritten.
    fn index(&self, slot: usize) -> &T {
        match self.get(slot) {
            Some(value) => value,
            None => panic!(
                "ring buffer slot {slot} out of range (capacity {}, written {})",
                self.capacity,
                self.slots.len()
            ),
        }
    }
}

impl<'a, T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Logical-order iterator returned by [`RingBuffer::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    buffer: &'a RingBuffer<T>,
    position: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.buffer.slots.get(self.position)?;
        self.position = (self.position + 1) % self.buffer.capacity;
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::RingBuffer;

    fn filled(capacity: usize, pushes: usize) -> RingBuffer<usize> {
        let mut buffer = RingBuffer::new(capacity).expect("capacity");
        for value in 0..pushes {
            buffer.push(value);
        }
        buffer
    }

    #[test]
    fn rejects_zero_capacity() {
        assert!(RingBuffer::<u8>::new(0).is_err());
    }

    #[test]
    fn exact_fill_yields_pushed_sequence() {
        for capacity in 1..=9 {
            let buffer = filled(capacity, capacity);
            assert_eq!(buffer.len(), capacity);
            assert!(buffer.is_full());
            let items: Vec<usize> = buffer.iter().copied().collect();
            assert_eq!(items, (0..capacity).collect::<Vec<_>>());
        }
    }

    #[test]
    fn partial_fill_iterates_only_valid_elements() {
        let buffer = filled(8, 4);
        assert_eq!(buffer.len(), 4);
        assert!(!buffer.is_full());
        assert_eq!(buffer.iter().len(), 4);
        assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert_eq!(buffer.front(), Some(&0));
        assert_eq!(buffer.back(), Some(&3));
    }

    #[test]
    fn overflow_keeps_last_capacity_elements() {
        for capacity in 1..=8 {
            for pushes in [capacity + 1, capacity * 2 + 3, 127] {
                let buffer = filled(capacity, pushes);
                assert_eq!(buffer.len(), capacity);
                assert_eq!(buffer.total_inserts(), pushes as u64);
                // front is the (pushes - capacity + 1)-th pushed value, zero-based.
                assert_eq!(buffer.front(), Some(&(pushes - capacity)));
                assert_eq!(buffer.back(), Some(&(pushes - 1)));
                let items: Vec<usize> = buffer.iter().copied().collect();
                assert_eq!(items, (pushes - capacity..pushes).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn iteration_is_restartable() {
        let buffer = filled(3, 5);
        let first: Vec<usize> = buffer.iter().copied().collect();
        let second: Vec<usize> = (&buffer).into_iter().copied().collect();
        assert_eq!(first, second);
        assert_eq!(first, vec![2, 3, 4]);
    }

    #[test]
    fn empty_buffer_has_no_front_or_back() {
        let buffer = RingBuffer::<i32>::new(4).unwrap();
        assert!(buffer.front().is_none());
        assert!(buffer.back().is_none());
        assert_eq!(buffer.iter().count(), 0);
    }

    #[test]
    fn clear_behaves_like_fresh_buffer() {
        let mut reused = filled(5, 13);
        reused.clear();
        assert!(reused.is_empty());
        assert!(reused.front().is_none());
        assert_eq!(reused.capacity(), 5);

        let mut fresh = RingBuffer::new(5).unwrap();
        for value in 100..107 {
            reused.push(value);
            fresh.push(value);
            assert_eq!(reused.len(), fresh.len());
            assert_eq!(reused.front(), fresh.front());
            assert_eq!(reused.back(), fresh.back());
            assert!(reused.iter().eq(fresh.iter()));
        }
    }

    #[test]
    fn physical_slots_diverge_from_logical_order_after_wrap() {
        let buffer = filled(4, 6);
        // Slots hold [4, 5, 2, 3]; logical order is [2, 3, 4, 5].
        assert_eq!(buffer[0], 4);
        assert_eq!(buffer.get(2), Some(&2));
        assert_eq!(buffer.front(), Some(&2));
        assert!(buffer.get(4).is_none());
    }

    #[test]
    fn unwritten_slot_is_none() {
        let buffer = filled(4, 1);
        assert_eq!(buffer.get(0), Some(&0));
        assert!(buffer.get(1).is_none());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn index_past_capacity_panics() {
        let buffer = filled(2, 2);
        let _ = buffer[2];
    }

    #[test]
    fn owns_non_copy_values() {
        let mut buffer = RingBuffer::new(8).unwrap();
        for i in 0..10 {
            buffer.push(format!("testing{i}"));
        }
        let items: Vec<&str> = buffer.iter().map(String::as_str).collect();
        assert_eq!(items.first(), Some(&"testing2"));
        assert_eq!(items.last(), Some(&"testing9"));
        assert_eq!(items.len(), 8);
    }
}
