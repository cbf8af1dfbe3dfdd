// Copyright 2025 the Prog1 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A growable array of integers that doubles its storage when full.

use prog1_graphics::{Image, beside};

use crate::cells::cell;

const INITIAL_CAPACITY: usize = 2;

/// A growable array.
///
/// The storage is managed by hand to show reallocation: when every slot is
/// in use, a new block of twice the size is allocated and the values are
/// copied over.
#[derive(Clone, Debug)]
pub struct Vector {
    slots: Box<[i32]>,
    len: usize,
}

impl Default for Vector {
    fn default() -> Self {
        Self {
            slots: vec![0; INITIAL_CAPACITY].into_boxed_slice(),
            len: 0,
        }
    }
}

impl Vector {
    /// An empty vector with room for two values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value`, doubling the storage first if it is full.
    pub fn add(&mut self, value: i32) {
        if self.len >= self.slots.len() {
            let mut grown = vec![0; 2 * self.slots.len()].into_boxed_slice();
            grown[..self.slots.len()].copy_from_slice(&self.slots);
            self.slots = grown;
        }
        self.slots[self.len] = value;
        self.len += 1;
    }

    /// The value at `index`, if it is in use.
    pub fn get(&self, index: usize) -> Option<i32> {
        self.as_slice().get(index).copied()
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` if there are no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots, used or not.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// The values in use.
    pub fn as_slice(&self) -> &[i32] {
        &self.slots[..self.len]
    }

    /// Every slot as a cell; unused slots are blank.
    pub fn to_image(&self) -> Image {
        let cells: Vec<Image> = self
            .slots
            .iter()
            .enumerate()
            .map(|(i, v)| {
                if i < self.len {
                    cell(&v.to_string())
                } else {
                    cell("")
                }
            })
            .collect();
        beside(&cells)
    }
}
