// Copyright 2025 the Prog1 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A bounded queue of integers on a ring buffer.

use prog1_graphics::{
    HAlign, Image, VAlign, arc, circle, css, overlay, overlay_aligned, pen, rotate, text,
};
use thiserror::Error;
use tracing::warn;

/// Errors from [`Queue::put`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum QueueError {
    /// Every slot is in use.
    #[error("queue overflow: all {capacity} slots are in use")]
    Overflow {
        /// Number of slots.
        capacity: usize,
    },
}

/// First in, first out, with a fixed number of slots.
#[derive(Clone, Debug)]
pub struct Queue {
    slots: Vec<i32>,
    /// Next slot to read.
    head: usize,
    /// Next slot to write.
    tail: usize,
    len: usize,
}

impl Queue {
    /// An empty queue with `capacity` slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![0; capacity],
            head: 0,
            tail: 0,
            len: 0,
        }
    }

    /// Append `value`; fails when the queue is full.
    pub fn put(&mut self, value: i32) -> Result<(), QueueError> {
        let capacity = self.capacity();
        if self.len == capacity {
            warn!(capacity, "queue overflow");
            return Err(QueueError::Overflow { capacity });
        }
        self.slots[self.tail] = value;
        self.len += 1;
        self.tail = (self.tail + 1) % capacity;
        Ok(())
    }

    /// Remove the oldest value, or `None` (with a warning) when empty.
    pub fn get(&mut self) -> Option<i32> {
        if self.len == 0 {
            warn!("queue underflow");
            return None;
        }
        let value = self.slots[self.head];
        self.len -= 1;
        self.head = (self.head + 1) % self.capacity();
        Some(value)
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Whether slot `i` holds a value.
    fn used(&self, i: usize) -> bool {
        if self.len == 0 {
            return false;
        }
        if self.len == self.capacity() {
            return true;
        }
        if self.head < self.tail {
            (self.head..self.tail).contains(&i)
        } else {
            i >= self.head || i < self.tail
        }
    }

    /// The slots as a ring of pie segments.
    ///
    /// Used slots are yellow and show their value. The slot that will be
    /// read next is orange and the slot that will be written next is light
    /// green.
    pub fn to_image(&self) -> Image {
        let mut ring = circle(100.0, pen(css::BLACK));
        let capacity = self.capacity();
        if capacity == 0 {
            return ring;
        }
        let pie_angle = 360.0 / capacity as f64;
        for i in (0..capacity).rev() {
            let mut fill = css::TRANSPARENT;
            if self.used(i) {
                fill = css::YELLOW;
            }
            if i == self.tail && self.len < capacity {
                fill = css::LIGHT_GREEN;
            }
            if i == self.head && self.len > 0 {
                fill = css::ORANGE;
            }
            let pie = arc(100.0, -pie_angle / 2.0, pie_angle, (fill, pen(css::BLACK)));
            let value = if self.used(i) {
                self.slots[i].to_string()
            } else {
                String::new()
            };
            let label = overlay(&[text(value, 20.0, css::BLACK), circle(20.0, css::TRANSPARENT)]);
            let label = rotate(-(i as f64) * pie_angle, &label);
            ring = overlay_aligned(
                Some(HAlign::Right),
                Some(VAlign::Center),
                &[label, pie, rotate(pie_angle, &ring)],
            );
        }
        overlay(&[circle(60.0, (css::WHITE, pen(css::BLACK))), ring])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_in_first_out() {
        let mut q = Queue::new(8);
        q.put(3).unwrap();
        q.put(6).unwrap();
        assert_eq!(q.len(), 2);
        assert_eq!(q.get(), Some(3));
        assert_eq!(q.get(), Some(6));
        assert!(q.is_empty());
        assert_eq!(q.get(), None);
    }

    #[test]
    fn overflow_is_an_error_and_keeps_contents() {
        let mut q = Queue::new(2);
        q.put(1).unwrap();
        q.put(2).unwrap();
        assert_eq!(q.put(3), Err(QueueError::Overflow { capacity: 2 }));
        assert_eq!(
            q.put(3).unwrap_err().to_string(),
            "queue overflow: all 2 slots are in use"
        );
        assert_eq!(q.get(), Some(1));
        assert_eq!(q.get(), Some(2));
    }

    #[test]
    fn wraps_around() {
        let mut q = Queue::new(3);
        for round in 0..5 {
            q.put(round).unwrap();
            q.put(round + 10).unwrap();
            assert_eq!(q.get(), Some(round));
            assert_eq!(q.get(), Some(round + 10));
        }
        assert!(q.is_empty());
        assert!(!q.used(0) && !q.used(1) && !q.used(2));
    }

    #[test]
    fn used_slots_follow_head_and_tail() {
        let mut q = Queue::new(4);
        for v in [1, 2, 3] {
            q.put(v).unwrap();
        }
        q.get();
        q.get();
        // head = 2, tail = 3
        assert_eq!(
            (0..4).map(|i| q.used(i)).collect::<Vec<_>>(),
            vec![false, false, true, false]
        );
        q.put(4).unwrap();
        q.put(5).unwrap();
        // head = 2, tail = 1: wrapped
        assert_eq!(
            (0..4).map(|i| q.used(i)).collect::<Vec<_>>(),
            vec![true, false, true, true]
        );
        q.put(6).unwrap();
        assert!((0..4).all(|i| q.used(i)));
    }

    #[test]
    fn zero_capacity_queue() {
        let mut q = Queue::new(0);
        assert!(q.put(1).is_err());
        assert_eq!(q.get(), None);
        assert_eq!(q.to_image().width(), 200.0);
    }

    #[test]
    fn picture_is_a_ring_with_a_hub() {
        let mut q = Queue::new(8);
        q.put(3).unwrap();
        q.put(6).unwrap();
        let img = q.to_image();
        let g = img.as_group().unwrap();
        assert_eq!(g.len(), 2);
        // The hub is in front of the ring.
        let hub = g.get(1).unwrap();
        assert_eq!(hub.width(), 120.0);
        assert!(img.width() > 199.9);
        assert!(img.height() > 199.9);
    }
}
