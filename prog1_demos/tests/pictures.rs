// Copyright 2025 the Prog1 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Every demo picture lays out and renders.

use prog1_demos::{List, Queue, RbTree, Stack, Vector};
use prog1_graphics::{Image, RenderContent};

fn leaf_count(image: &Image) -> usize {
    let mut n = 0;
    image.render().for_each_leaf(|_, _| n += 1);
    n
}

#[test]
fn filled_structures_draw_their_values() {
    let mut stack = Stack::new();
    let mut queue = Queue::new(6);
    let mut list = List::new();
    let mut vector = Vector::new();
    let mut tree = RbTree::new();
    for x in [5, 3, 8, 1] {
        stack.push(x);
        queue.put(x).unwrap();
        list.append(x);
        vector.add(x);
        tree.insert(x);
    }

    for image in [
        stack.to_image(),
        queue.to_image(),
        list.to_image(),
        vector.to_image(),
        tree.to_image(),
    ] {
        assert!(image.width() > 0.0 && image.height() > 0.0);
        let dump = image.to_string();
        assert!(dump.contains("<Text "), "{dump}");
        assert!(leaf_count(&image) > 4);
    }
}

#[test]
fn values_appear_as_text_runs() {
    let mut tree = RbTree::new();
    for x in [42, 7, 99] {
        tree.insert(x);
    }
    let mut labels = Vec::new();
    tree.to_image().render().for_each_leaf(|node, _| {
        if let RenderContent::Text { run, .. } = &node.content {
            labels.push(run.text.clone());
        }
    });
    labels.sort();
    assert_eq!(labels, vec!["42", "7", "99"]);
}
