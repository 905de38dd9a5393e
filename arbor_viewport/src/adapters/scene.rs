// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter helpers for Arbor Tree scenes.
//!
//! ## Feature
//!
//! Enable with `scene_adapter`.
//!
//! ## Notes
//!
//! Each helper applies a viewport change to the scene's own surface and then
//! repaints the scene through it, so an embedder's input handler is one call
//! per event. Embedders that batch several changes per frame should call the
//! [`Viewport`] methods directly and redraw once themselves.

use kurbo::Vec2;

use arbor_surface::Surface;
use arbor_tree::{Scene, TickScheduler};

use crate::types::{PointerInput, ZoomDirection};
use crate::viewport::Viewport;

/// Pan the scene by a screen-space delta and repaint it.
pub fn pan_scene<S: TickScheduler, F: Surface>(
    viewport: &mut Viewport,
    scene: &mut Scene<S, F>,
    delta: Vec2,
) {
    viewport.pan(scene.surface_mut(), delta);
    scene.redraw_all();
}

/// Zoom the scene one step about its viewport center and repaint it.
pub fn zoom_scene<S: TickScheduler, F: Surface>(
    viewport: &mut Viewport,
    scene: &mut Scene<S, F>,
    direction: ZoomDirection,
) {
    viewport.zoom_step(scene.surface_mut(), direction);
    scene.redraw_all();
}

/// Route one pointer interaction to the scene and repaint when the
/// viewport handled it. Returns whether it was handled.
pub fn handle_scene<S: TickScheduler, F: Surface>(
    viewport: &mut Viewport,
    scene: &mut Scene<S, F>,
    input: PointerInput,
) -> bool {
    let handled = viewport.handle(scene.surface_mut(), input);
    if handled {
        scene.redraw_all();
    }
    handled
}
