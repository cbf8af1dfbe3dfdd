// Copyright 2025 the Prog1 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the layout laws of `prog1_graphics`.
//!
//! These check the size and placement rules that hold for every combinator,
//! across shapes, nested groups and transforms.

use kurbo::{Affine, Rect, Size};
use prog1_graphics::{
    Group, HAlign, Image, VAlign, above, arc, beside, bitmap_with_size, circle, css, ellipse,
    isosceles_triangle, line, overlay, overlay_aligned, pen, polygon, rect_approx_eq, rectangle,
    right_triangle, rotate, scale, space, square, star, star_polygon, text, triangle, underlay,
    union_all,
};

const TOLERANCE: f64 = 1e-9;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < TOLERANCE
}

fn sample_images() -> Vec<Image> {
    vec![
        circle(25.0, css::RED),
        rectangle(40.0, 20.0, pen(css::BLACK)),
        square(15.0, css::BLUE),
        space(7.0),
        ellipse(30.0, 12.0, css::GREEN),
        arc(10.0, 30.0, 120.0, css::ORANGE),
        triangle(20.0, css::PURPLE),
        right_triangle(12.0, 18.0, css::NAVY),
        isosceles_triangle(30.0, 40.0, css::TEAL),
        star(5, 8.0, 20.0, css::GOLD),
        star_polygon(20.0, 7, 3, css::GOLD).unwrap(),
        polygon(&[0.0, -10.0, 30.0, 0.0, 60.0, -5.0, 20.0, 10.0], css::RED).unwrap(),
        line(-15.0, 25.0, pen(css::BLACK)),
        text("hello", 18.0, css::BLACK),
        bitmap_with_size("icon.png", 16.0, 16.0),
        rotate(30.0, &rectangle(40.0, 10.0, css::RED)),
        scale(1.5, &circle(4.0, css::RED)),
    ]
}

fn identity_box(image: &Image) -> Rect {
    image.bounding_box(Affine::IDENTITY)
}

#[test]
fn every_image_has_non_negative_size_matching_its_box() {
    for image in sample_images() {
        assert!(image.width() >= 0.0, "{image}");
        assert!(image.height() >= 0.0, "{image}");
        let bb = identity_box(&image);
        assert!(close(bb.width(), image.width()), "{image}");
        assert!(close(bb.height(), image.height()), "{image}");
    }
}

#[test]
fn group_extent_is_union_of_children() {
    let images = sample_images();
    let mut g = Group::new();
    for (i, image) in images.iter().enumerate() {
        let offset = i as f64 * 3.0;
        g.add(image.clone(), offset, -offset);
    }
    let manual = union_all(
        g.children()
            .iter()
            .map(|c| c.image().bounding_box(c.transform())),
    )
    .unwrap();
    assert!(close(g.width(), manual.width()));
    assert!(close(g.height(), manual.height()));
    assert!(rect_approx_eq(g.bounding_box(Affine::IDENTITY), manual));
}

#[test]
fn beside_adds_widths_and_takes_max_height() {
    let images = sample_images();
    let row = beside(&images);
    let width: f64 = images.iter().map(Image::width).sum();
    let height = images.iter().map(Image::height).fold(0.0, f64::max);
    assert!(close(row.width(), width), "{} vs {width}", row.width());
    assert!(close(row.height(), height));
}

#[test]
fn above_adds_heights_and_takes_max_width() {
    let images = sample_images();
    let column = above(&images);
    let height: f64 = images.iter().map(Image::height).sum();
    let width = images.iter().map(Image::width).fold(0.0, f64::max);
    assert!(close(column.height(), height));
    assert!(close(column.width(), width));
}

#[test]
fn overlay_and_underlay_take_max_of_both() {
    let images = sample_images();
    let width = images.iter().map(Image::width).fold(0.0, f64::max);
    let height = images.iter().map(Image::height).fold(0.0, f64::max);
    for img in [overlay(&images), underlay(&images)] {
        assert!(close(img.width(), width));
        assert!(close(img.height(), height));
    }
}

#[test]
fn centered_children_sit_in_the_middle() {
    let images = sample_images();
    let row = beside(&images);
    let g = row.as_group().unwrap();
    for c in g.children() {
        assert!(close(c.y(), (row.height() - c.height()) / 2.0));
    }
    let column = above(&images);
    let g = column.as_group().unwrap();
    for c in g.children() {
        assert!(close(c.x(), (column.width() - c.width()) / 2.0));
    }
}

#[test]
fn two_circles_beside() {
    let big = circle(25.0, css::RED);
    let small = circle(12.5, css::BLUE);
    let row = beside(&[big, small]);
    assert_eq!(row.size(), Size::new(75.0, 50.0));
    let g = row.as_group().unwrap();
    assert_eq!(g.get(1).unwrap().x(), 50.0);
    assert_eq!(g.get(1).unwrap().y(), 12.5);
}

#[test]
fn overlay_left_top_puts_first_argument_in_front() {
    let green = rectangle(40.0, 20.0, css::GREEN);
    let red = rectangle(20.0, 40.0, css::RED);
    let img = overlay_aligned(
        Some(HAlign::Left),
        Some(VAlign::Top),
        &[green.clone(), red.clone()],
    );
    let g = img.as_group().unwrap();
    assert_eq!(g.len(), 2);
    for c in g.children() {
        assert_eq!((c.x(), c.y()), (0.0, 0.0));
    }
    assert!(g.get(0).unwrap().image().ptr_eq(&red));
    assert!(g.get(1).unwrap().image().ptr_eq(&green));
    assert_eq!(img.size(), Size::new(40.0, 40.0));
}

#[test]
fn rotation_by_zero_and_ninety() {
    for image in sample_images() {
        let same = rotate(0.0, &image);
        assert!(close(same.width(), image.width()));
        assert!(close(same.height(), image.height()));
    }
    let r = rectangle(40.0, 20.0, css::RED);
    let turned = rotate(90.0, &r);
    assert!(close(turned.width(), 20.0));
    assert!(close(turned.height(), 40.0));
    let back = rotate(-90.0, &turned);
    assert!(close(back.width(), 40.0));
    assert!(close(back.height(), 20.0));
}

#[test]
fn rotated_children_are_placed_at_the_origin() {
    for image in sample_images() {
        let turned = rotate(33.0, &image);
        let c = turned.as_group().unwrap().get(0).unwrap();
        let bb = c.image().bounding_box(c.transform());
        assert!(close(bb.x0, 0.0), "{image}");
        assert!(close(bb.y0, 0.0), "{image}");
    }
}

#[test]
fn empty_group_is_zero_sized_and_degenerate() {
    let g = Group::new();
    assert_eq!(g.size(), Size::ZERO);
    let t = Affine::translate((12.0, -3.0)) * Affine::rotate(1.0);
    let bb = g.bounding_box(t);
    assert_eq!(bb.area(), 0.0);
    assert_eq!(bb.origin(), kurbo::Point::new(12.0, -3.0));
    let img = g.into_image();
    assert_eq!(img.size(), Size::ZERO);
}

#[test]
fn nested_layouts_compose() {
    let cell = square(10.0, css::RED);
    let row = beside(&[cell.clone(), cell.clone(), cell.clone()]);
    let block = above(&[row.clone(), row.clone()]);
    assert_eq!(block.size(), Size::new(30.0, 20.0));
    let framed = overlay(&[block.clone(), rectangle(50.0, 50.0, css::WHITE)]);
    let inner = framed.as_group().unwrap().get(1).unwrap();
    assert!(inner.image().ptr_eq(&block));
    assert_eq!((inner.x(), inner.y()), (10.0, 15.0));
}
