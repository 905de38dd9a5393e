// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pan/zoom state and the transform math behind it.

use kurbo::{Affine, Point, Size, Vec2};

use arbor_surface::Surface;

use crate::types::{PointerButtons, PointerInput, ZoomDirection};

/// Pan/zoom state over a surface's persistent transform.
///
/// The viewport composes translations and pivoted scales onto whatever
/// transform the surface already carries; it never resets it. Because the
/// transform lives on the surface, every later draw call goes through it,
/// and the scene can repaint freely without knowing the viewport exists.
///
/// Panning works in screen pixels: the content tracks the pointer one to
/// one at any zoom level. Zooming steps by a fixed factor per notch, keeps
/// its pivot fixed on screen, and clamps the cumulative level to a
/// configurable range.
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    size: Size,
    offset: Vec2,
    zoom: f64,
    factor: f64,
    min_zoom: f64,
    max_zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            size: Size::ZERO,
            offset: Vec2::ZERO,
            zoom: 1.0,
            factor: 1.1,
            min_zoom: 0.1,
            max_zoom: 10.0,
        }
    }
}

impl Viewport {
    /// A viewport at zoom 1 with nothing panned.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the surface size in pixels; default zoom pivots use its
    /// center.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// The recorded surface size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Cumulative zoom level. `1.0` is unscaled.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Accumulated pan, in content units.
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Zoom multiplier applied per step.
    pub fn zoom_factor(&self) -> f64 {
        self.factor
    }

    /// Set the zoom multiplier applied per step. Values at or below 1 are
    /// ignored.
    pub fn set_zoom_factor(&mut self, factor: f64) {
        if factor > 1.0 {
            self.factor = factor;
        }
    }

    /// The zoom clamp range.
    pub fn zoom_limits(&self) -> (f64, f64) {
        (self.min_zoom, self.max_zoom)
    }

    /// Set the zoom clamp range. Ignored unless `0 < min <= max`.
    pub fn set_zoom_limits(&mut self, min: f64, max: f64) {
        if min > 0.0 && min <= max {
            self.min_zoom = min;
            self.max_zoom = max;
        }
    }

    /// Pan by a screen-space delta.
    ///
    /// The delta is divided by the zoom level before composing, so the
    /// content moves exactly `delta` pixels on screen however far in or out
    /// the view is.
    pub fn pan<S: Surface>(&mut self, surface: &mut S, delta: Vec2) {
        let shift = delta / self.zoom;
        self.offset += shift;
        let t = surface.transform();
        surface.set_transform(t * Affine::translate(shift));
    }

    /// Zoom one step about the content point at the viewport center.
    pub fn zoom_step<S: Surface>(&mut self, surface: &mut S, direction: ZoomDirection) {
        let center = Point::new(self.size.width / 2.0, self.size.height / 2.0);
        let pivot = surface.transform().inverse() * center;
        self.zoom_about(surface, direction, pivot);
    }

    /// Zoom one step about a content-space pivot, which stays fixed on
    /// screen.
    pub fn zoom_about<S: Surface>(
        &mut self,
        surface: &mut S,
        direction: ZoomDirection,
        pivot: Point,
    ) {
        let step = match direction {
            ZoomDirection::In => self.factor,
            ZoomDirection::Out => 1.0 / self.factor,
            ZoomDirection::Neutral => return,
        };
        let target = self.zoom * step;
        let clamped = target.clamp(self.min_zoom, self.max_zoom);
        if clamped != target {
            log::debug!("zoom clamped to {clamped}");
        }
        // Recompute the step against the clamp so the transform and the
        // tracked level cannot drift apart.
        let step = clamped / self.zoom;
        self.zoom = clamped;
        let t = surface.transform();
        surface.set_transform(t * Affine::scale_about(step, pivot));
    }

    /// Zoom from a wheel delta, about the viewport center.
    pub fn wheel<S: Surface>(&mut self, surface: &mut S, delta: Vec2) {
        self.zoom_step(surface, ZoomDirection::from_wheel(delta));
    }

    /// Apply one pointer interaction. Returns whether a repaint is needed,
    /// and every handled interaction needs one.
    ///
    /// Drags pan only while [`PointerButtons::PRIMARY`] is held; anything
    /// else is ignored. Wheel turns always count as handled, even when the
    /// zoom level is pinned at a clamp limit.
    pub fn handle<S: Surface>(&mut self, surface: &mut S, input: PointerInput) -> bool {
        match input {
            PointerInput::Drag { buttons, delta } => {
                if !buttons.contains(PointerButtons::PRIMARY) {
                    return false;
                }
                self.pan(surface, delta);
                true
            }
            PointerInput::Wheel { delta } => {
                self.wheel(surface, delta);
                true
            }
        }
    }
}
