// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A recording surface: every call is retained as a command.

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::{Affine, Circle, Line, Point};

use crate::color::Rgba8;
use crate::surface::Surface;

/// One recorded drawing call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    /// Full-target clear.
    Clear(Rgba8),
    /// Stroked line segment.
    Line {
        /// Segment endpoints in world space.
        line: Line,
        /// Stroke width.
        width: f64,
        /// Stroke color.
        color: Rgba8,
    },
    /// Filled and outlined circle.
    Circle {
        /// Center and radius in world space.
        circle: Circle,
        /// Fill color.
        fill: Rgba8,
        /// Outline color.
        outline: Rgba8,
        /// Outline width.
        outline_width: f64,
    },
    /// Centered text run.
    Text {
        /// Center point in world space.
        center: Point,
        /// The text, carried through untouched.
        text: String,
        /// Text size.
        size: f64,
        /// Text color.
        color: Rgba8,
    },
    /// Transform replacement.
    SetTransform(Affine),
    /// Blit to output.
    Present,
}

/// A [`Surface`] that records calls verbatim.
///
/// This is the reference backend: embedders replay the commands against a
/// real rasterizer, and tests assert on them directly. Geometry is recorded
/// in world space together with [`DrawCmd::SetTransform`] markers, so a
/// replayer sees exactly the call sequence a raster target would have seen.
#[derive(Clone, Debug, Default)]
pub struct DisplayList {
    cmds: Vec<DrawCmd>,
    transform: Affine,
}

impl DisplayList {
    /// Create an empty display list with the identity transform.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands, in call order.
    pub fn cmds(&self) -> &[DrawCmd] {
        &self.cmds
    }

    /// Take the recorded commands, leaving the log empty.
    ///
    /// The persistent transform is kept; only the log drains.
    pub fn take(&mut self) -> Vec<DrawCmd> {
        core::mem::take(&mut self.cmds)
    }

    /// Commands recorded since the most recent [`DrawCmd::Clear`].
    ///
    /// Returns the whole log if nothing was cleared yet. This is the
    /// current frame's content for a full redraw.
    pub fn since_last_clear(&self) -> &[DrawCmd] {
        let start = self
            .cmds
            .iter()
            .rposition(|c| matches!(c, DrawCmd::Clear(_)))
            .map_or(0, |i| i + 1);
        &self.cmds[start..]
    }

    /// Number of [`DrawCmd::Present`] commands in the log.
    pub fn presents(&self) -> usize {
        self.cmds
            .iter()
            .filter(|c| matches!(c, DrawCmd::Present))
            .count()
    }
}

impl Surface for DisplayList {
    fn clear(&mut self, color: Rgba8) {
        self.cmds.push(DrawCmd::Clear(color));
    }

    fn line(&mut self, line: Line, width: f64, color: Rgba8) {
        self.cmds.push(DrawCmd::Line { line, width, color });
    }

    fn circle(&mut self, circle: Circle, fill: Rgba8, outline: Rgba8, outline_width: f64) {
        self.cmds.push(DrawCmd::Circle {
            circle,
            fill,
            outline,
            outline_width,
        });
    }

    fn text(&mut self, center: Point, text: &str, size: f64, color: Rgba8) {
        self.cmds.push(DrawCmd::Text {
            center,
            text: String::from(text),
            size,
            color,
        });
    }

    fn transform(&self) -> Affine {
        self.transform
    }

    fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
        self.cmds.push(DrawCmd::SetTransform(transform));
    }

    fn present(&mut self) {
        self.cmds.push(DrawCmd::Present);
    }
}
