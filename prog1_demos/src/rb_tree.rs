// Copyright 2025 the Prog1 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A persistent red-black tree of integers.
//!
//! Insertion rebuilds the path from the root to the new leaf and repairs
//! red-red violations with the four rotations from Okasaki's *Purely
//! Functional Data Structures*. Untouched subtrees are shared between
//! versions.

use core::cmp::Ordering;
use core::fmt;
use std::rc::Rc;

use prog1_graphics::{
    Image, VAlign, above, beside_aligned, circle, css, overlay, pen, rectangle, space, text,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum NodeColor {
    Red,
    Black,
}

type Tree = Option<Rc<Node>>;

#[derive(Debug)]
struct Node {
    color: NodeColor,
    left: Tree,
    value: i32,
    right: Tree,
}

fn node(color: NodeColor, left: Tree, value: i32, right: Tree) -> Tree {
    Some(Rc::new(Node {
        color,
        left,
        value,
        right,
    }))
}

/// The root of `t` if it is red.
fn red(t: &Tree) -> Option<&Node> {
    t.as_deref().filter(|n| n.color == NodeColor::Red)
}

fn insert(x: i32, t: &Tree) -> Tree {
    let Some(n) = t else {
        return node(NodeColor::Red, None, x, None);
    };
    match x.cmp(&n.value) {
        Ordering::Less => balance(n.color, insert(x, &n.left), n.value, n.right.clone()),
        Ordering::Greater => balance(n.color, n.left.clone(), n.value, insert(x, &n.right)),
        Ordering::Equal => t.clone(),
    }
}

/// Rebuild a node, rotating away a red child with a red child under a
/// black parent.
fn balance(color: NodeColor, l: Tree, v: i32, r: Tree) -> Tree {
    use NodeColor::{Black, Red};

    if color == Black {
        if let Some(ln) = red(&l) {
            if let Some(ll) = red(&ln.left) {
                return node(
                    Red,
                    node(Black, ll.left.clone(), ll.value, ll.right.clone()),
                    ln.value,
                    node(Black, ln.right.clone(), v, r),
                );
            }
            if let Some(lr) = red(&ln.right) {
                return node(
                    Red,
                    node(Black, ln.left.clone(), ln.value, lr.left.clone()),
                    lr.value,
                    node(Black, lr.right.clone(), v, r),
                );
            }
        }
        if let Some(rn) = red(&r) {
            if let Some(rl) = red(&rn.left) {
                return node(
                    Red,
                    node(Black, l, v, rl.left.clone()),
                    rl.value,
                    node(Black, rl.right.clone(), rn.value, rn.right.clone()),
                );
            }
            if let Some(rr) = red(&rn.right) {
                return node(
                    Red,
                    node(Black, l, v, rn.left.clone()),
                    rn.value,
                    node(Black, rr.left.clone(), rr.value, rr.right.clone()),
                );
            }
        }
    }
    node(color, l, v, r)
}

fn height(t: &Tree) -> usize {
    t.as_deref()
        .map_or(0, |n| 1 + height(&n.left).max(height(&n.right)))
}

fn in_order(t: &Tree, out: &mut Vec<i32>) {
    if let Some(n) = t {
        in_order(&n.left, out);
        out.push(n.value);
        in_order(&n.right, out);
    }
}

fn write_tree(f: &mut fmt::Formatter<'_>, t: &Tree) -> fmt::Result {
    match t {
        None => f.write_str("E"),
        Some(n) => {
            f.write_str("Node(")?;
            write_tree(f, &n.left)?;
            write!(f, ", {}, ", n.value)?;
            write_tree(f, &n.right)?;
            f.write_str(")")
        }
    }
}

/// A set of integers kept balanced by red-black rules.
///
/// Cloning is cheap: clones share all nodes, and inserting into one clone
/// leaves the others unchanged.
#[derive(Clone, Debug, Default)]
pub struct RbTree {
    root: Tree,
}

impl RbTree {
    /// An empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `x`; inserting a value twice keeps one copy.
    pub fn insert(&mut self, x: i32) {
        let root = insert(x, &self.root);
        // The root is always black.
        self.root = root.map(|n| match n.color {
            NodeColor::Black => n,
            NodeColor::Red => Rc::new(Node {
                color: NodeColor::Black,
                left: n.left.clone(),
                value: n.value,
                right: n.right.clone(),
            }),
        });
    }

    /// `true` if `x` was inserted.
    pub fn contains(&self, x: i32) -> bool {
        let mut t = self.root.as_deref();
        while let Some(n) = t {
            t = match x.cmp(&n.value) {
                Ordering::Less => n.left.as_deref(),
                Ordering::Greater => n.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Remove every value.
    pub fn clear(&mut self) {
        self.root = None;
    }

    /// `true` if there are no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        height(&self.root)
    }

    /// The values in ascending order.
    pub fn to_vec(&self) -> Vec<i32> {
        let mut out = Vec::new();
        in_order(&self.root, &mut out);
        out
    }

    /// The tree drawn top down: each value in a circle above its two
    /// subtrees, with empty subtrees left as gaps.
    pub fn to_image(&self) -> Image {
        let Some(root) = &self.root else {
            return space(0.0);
        };
        let frame = overlay(&[
            rectangle(40.0, 1.0, css::TRANSPARENT),
            circle(20.0, (css::WHITE, pen(css::BLACK))),
        ]);
        let empty = overlay(&[
            rectangle(40.0, 1.0, css::TRANSPARENT),
            circle(10.0, css::TRANSPARENT),
        ]);
        node_image(root, &frame, &empty)
    }
}

fn node_image(n: &Node, frame: &Image, empty: &Image) -> Image {
    let label = overlay(&[text(n.value.to_string(), 14.0, css::BLACK), frame.clone()]);
    let child = |t: &Tree| match t {
        Some(c) => node_image(c, frame, empty),
        None => empty.clone(),
    };
    above(&[
        label,
        beside_aligned(Some(VAlign::Top), &[child(&n.left), child(&n.right)]),
    ])
}

impl fmt::Display for RbTree {
    /// `E` for an empty tree, `Node(left, value, right)` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tree(f, &self.root)
    }
}
