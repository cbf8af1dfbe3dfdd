// Copyright 2025 the Prog1 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised when an image is built from invalid parameters.

/// Usage errors reported by the fallible constructors.
///
/// These describe programming mistakes (a typo in a color name, an odd number
/// of polygon coordinates) rather than runtime conditions. Callers usually
/// propagate them with `?` or stop with `expect`.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum GraphicsError {
    /// The color name is neither a CSS color keyword nor a hex/functional color.
    #[error("the color \"{0}\" is unknown")]
    UnknownColor(String),
    /// A flat coordinate list must contain `x, y` pairs.
    #[error("even number of coordinates required: got {0}")]
    OddCoordinateCount(usize),
    /// A star polygon needs `gcd(sides, steps) == 1` to visit every vertex.
    #[error("star polygon needs coprime sides and steps: sides = {sides}, steps = {steps}")]
    StarNotCoprime {
        /// Number of outer vertices.
        sides: u32,
        /// Vertex step between consecutive edges.
        steps: u32,
    },
    /// An alignment keyword that is not one of the recognized names.
    #[error("unknown alignment \"{0}\"")]
    UnknownAlignment(String),
}
