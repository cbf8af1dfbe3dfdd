// Copyright 2025 the Prog1 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Indented pseudo-XML dump of an image tree.
//!
//! `Display` for [`Image`] writes one element per line:
//!
//! ```text
//! <Group width="75.0" height="50.0">
//!   <Child x="0.0" y="0.0" width="50.0" height="50.0" angle="0.0" xScale="1.0" yScale="1.0">
//!     <Circle width="50.0" height="50.0" color="0xff0000ff" pen="null"/>
//!   </Child>
//! </Group>
//! ```

use core::fmt;

use kurbo::Size;

use crate::color::hex;
use crate::group::{Child, Group};
use crate::image::{Image, ImageKind};
use crate::shape::Shape;

const INDENT: &str = "  ";

impl fmt::Display for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_image(f, self, 0)
    }
}

fn pad(f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        f.write_str(INDENT)?;
    }
    Ok(())
}

fn write_image(f: &mut fmt::Formatter<'_>, image: &Image, depth: usize) -> fmt::Result {
    match image.kind() {
        ImageKind::Shape(s) => write_shape(f, s, depth),
        ImageKind::Bitmap(b) => {
            pad(f, depth)?;
            writeln!(
                f,
                "<Bitmap width=\"{:.1}\" height=\"{:.1}\" source=\"{}\"/>",
                b.size().width,
                b.size().height,
                b.source().display()
            )
        }
        ImageKind::Group(g) => write_group(f, "Group", image.size(), g, depth),
        ImageKind::ClippedGroup(g) => write_group(f, "ClippedGroup", image.size(), g, depth),
    }
}

fn write_shape(f: &mut fmt::Formatter<'_>, shape: &Shape, depth: usize) -> fmt::Result {
    let style = shape.style();
    let color = style.fill.map_or_else(|| "null".to_owned(), hex);
    let pen = style.pen.map_or_else(|| "null".to_owned(), |p| p.to_string());
    pad(f, depth)?;
    writeln!(
        f,
        "<{} width=\"{:.1}\" height=\"{:.1}\" color=\"{color}\" pen=\"{pen}\"/>",
        shape.kind().name(),
        shape.size().width,
        shape.size().height,
    )
}

fn write_group(
    f: &mut fmt::Formatter<'_>,
    tag: &str,
    size: Size,
    group: &Group,
    depth: usize,
) -> fmt::Result {
    pad(f, depth)?;
    writeln!(
        f,
        "<{tag} width=\"{:.1}\" height=\"{:.1}\">",
        size.width, size.height
    )?;
    for child in group.children() {
        write_child(f, child, depth + 1)?;
    }
    pad(f, depth)?;
    writeln!(f, "</{tag}>")
}

fn write_child(f: &mut fmt::Formatter<'_>, c: &Child, depth: usize) -> fmt::Result {
    pad(f, depth)?;
    writeln!(
        f,
        "<Child x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" angle=\"{:.1}\" xScale=\"{:.1}\" yScale=\"{:.1}\">",
        c.x(),
        c.y(),
        c.width(),
        c.height(),
        c.angle(),
        c.x_scale(),
        c.y_scale()
    )?;
    write_image(f, c.image(), depth + 1)?;
    pad(f, depth)?;
    writeln!(f, "</Child>")
}
