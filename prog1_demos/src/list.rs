// Copyright 2025 the Prog1 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A singly linked list of integers.

use core::iter;

use prog1_graphics::{Image, beside, space};

use crate::cells::{arrow, cell};

#[derive(Debug)]
struct Node {
    value: i32,
    next: Option<Box<Node>>,
}

/// Integers in insertion order.
#[derive(Debug, Default)]
pub struct List {
    first: Option<Box<Node>>,
}

impl List {
    /// An empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` at the front.
    pub fn prepend(&mut self, value: i32) {
        let next = self.first.take();
        self.first = Some(Box::new(Node { value, next }));
    }

    /// Insert `value` at the end.
    pub fn append(&mut self, value: i32) {
        let mut cursor = &mut self.first;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node { value, next: None }));
    }

    /// Remove the first element equal to `value`. Returns `false` if there
    /// is none.
    pub fn remove(&mut self, value: i32) -> bool {
        let mut cursor = &mut self.first;
        loop {
            match cursor {
                None => return false,
                Some(node) if node.value == value => {
                    *cursor = node.next.take();
                    return true;
                }
                Some(node) => cursor = &mut node.next,
            }
        }
    }

    /// The first value.
    pub fn first(&self) -> Option<i32> {
        self.first.as_ref().map(|n| n.value)
    }

    /// The last value.
    pub fn last(&self) -> Option<i32> {
        self.iter().last()
    }

    /// Number of values; walks the list.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// `true` if there are no values.
    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    /// Values from first to last.
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        iter::successors(self.first.as_deref(), |n| n.next.as_deref()).map(|n| n.value)
    }

    /// The list as a row of cells, each preceded by an arrow.
    pub fn to_image(&self) -> Image {
        let arrow = arrow(90.0);
        self.iter().fold(space(0.0), |row, value| {
            beside(&[row, arrow.clone(), cell(&value.to_string())])
        })
    }
}

impl Drop for List {
    fn drop(&mut self) {
        let mut next = self.first.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}
