// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing capability consumed by scene painting and the viewport.

use kurbo::{Affine, Circle, Line, Point};

use crate::color::Rgba8;

/// Immediate-mode drawing target with a persistent transform.
///
/// Drawing lands on a retained raster: nothing repaints unless a caller
/// draws again, and [`present`](Surface::present) blits the current raster
/// to the output. All geometry passes through the current transform at draw
/// time; the transform persists across calls until replaced.
/// [`clear`](Surface::clear) is the one exception and always covers the
/// full target.
pub trait Surface {
    /// Fill the entire target with `color`, ignoring the transform.
    fn clear(&mut self, color: Rgba8);

    /// Stroke a line segment.
    fn line(&mut self, line: Line, width: f64, color: Rgba8);

    /// Fill a circle and stroke its outline.
    fn circle(&mut self, circle: Circle, fill: Rgba8, outline: Rgba8, outline_width: f64);

    /// Draw `text` centered at `center`.
    ///
    /// Shaping and rasterization belong to the embedder; the string is
    /// carried through untouched.
    fn text(&mut self, center: Point, text: &str, size: f64, color: Rgba8);

    /// The current persistent transform.
    fn transform(&self) -> Affine;

    /// Replace the persistent transform.
    fn set_transform(&mut self, transform: Affine);

    /// Blit the raster to the output.
    fn present(&mut self);
}
