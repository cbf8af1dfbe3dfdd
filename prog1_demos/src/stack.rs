// Copyright 2025 the Prog1 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A stack of integers on a singly linked list.

use core::iter;

use prog1_graphics::{HAlign, Image, VAlign, above, css, overlay_aligned_offset, pen, rectangle};
use tracing::warn;

use crate::cells::{arrow, cell};

#[derive(Debug)]
struct Node {
    value: i32,
    next: Option<Box<Node>>,
}

/// Last in, first out.
#[derive(Debug, Default)]
pub struct Stack {
    top: Option<Box<Node>>,
    len: usize,
}

impl Stack {
    /// An empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Put `value` on top.
    pub fn push(&mut self, value: i32) {
        let next = self.top.take();
        self.top = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    /// Take the top value off, or `None` (with a warning) when empty.
    pub fn pop(&mut self) -> Option<i32> {
        let Some(node) = self.top.take() else {
            warn!("stack underflow");
            return None;
        };
        self.top = node.next;
        self.len -= 1;
        Some(node.value)
    }

    /// The top value.
    pub fn peek(&self) -> Option<i32> {
        self.top.as_ref().map(|n| n.value)
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` if there are no values.
    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    /// Values from top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        iter::successors(self.top.as_deref(), |n| n.next.as_deref()).map(|n| n.value)
    }

    /// The stack as a column of cells joined by arrows, resting on the
    /// bottom of a 50 × 260 frame.
    pub fn to_image(&self) -> Image {
        let frame = rectangle(50.0, 260.0, pen(css::BLUE));
        let mut values = self.iter();
        let Some(top) = values.next() else {
            return frame;
        };
        let arrow = arrow(180.0);
        let mut column = above(&[cell(&top.to_string()), arrow.clone()]);
        for value in values {
            column = above(&[column, cell(&value.to_string()), arrow.clone()]);
        }
        overlay_aligned_offset(
            Some(HAlign::Center),
            Some(VAlign::Bottom),
            0.0,
            5.0,
            &[column, frame],
        )
    }
}

impl Drop for Stack {
    fn drop(&mut self) {
        let mut next = self.top.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_in_first_out() {
        let mut s = Stack::new();
        s.push(10);
        assert_eq!(s.pop(), Some(10));
        s.push(10);
        s.push(20);
        assert_eq!(s.peek(), Some(20));
        assert_eq!(s.len(), 2);
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![20, 10]);
        assert_eq!(s.pop(), Some(20));
        assert_eq!(s.pop(), Some(10));
        assert!(s.is_empty());
        assert_eq!(s.pop(), None);
        assert_eq!(s.len(), 0);
    }

    #[test]
    fn empty_stack_is_just_the_frame() {
        let img = Stack::new().to_image();
        assert!(img.as_shape().is_some());
        assert_eq!((img.width(), img.height()), (50.0, 260.0));
    }

    #[test]
    fn cells_sit_above_the_frame_bottom() {
        let mut s = Stack::new();
        s.push(1);
        s.push(2);
        let img = s.to_image();
        assert_eq!((img.width(), img.height()), (50.0, 260.0));
        let g = img.as_group().unwrap();
        assert_eq!(g.len(), 2);
        // Two cells with their arrows, 40 tall each, 5 above the bottom.
        let column = g.get(1).unwrap();
        assert!((column.height() - 80.0).abs() < 1e-9);
        assert!((column.x() - 5.0).abs() < 1e-9);
        assert!((column.y() - 175.0).abs() < 1e-9);
    }

    #[test]
    fn long_stacks_drop_without_recursion() {
        let mut s = Stack::new();
        for i in 0..100_000 {
            s.push(i);
        }
        drop(s);
    }
}
