// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=arbor_viewport --heading-base-level=0

//! Arbor Viewport: pan/zoom state over a drawing surface.
//!
//! ## Overview
//!
//! This crate turns pointer input into a persistent view transform. It owns
//! no pixels and no tree: it composes translations and pivoted scales onto
//! the transform a surface already carries, and tells the caller when a
//! repaint is due. Anything drawn afterwards, by any crate, lands where the
//! pan and zoom say it should.
//!
//! ## Input model
//!
//! The embedder converts its native events into
//! [`PointerInput`](crate::types::PointerInput) values: drags carry the
//! held [`PointerButtons`](crate::types::PointerButtons) and a screen-space
//! delta, wheel turns carry the scroll delta. The viewport decides what they
//! mean; only primary-button drags pan, and scroll direction picks a
//! [`ZoomDirection`](crate::types::ZoomDirection).
//!
//! ## Interaction math
//!
//! - Pans divide the screen delta by the zoom level before composing, so
//!   the content tracks the pointer pixel for pixel at any magnification.
//! - Zoom steps multiply the level by a fixed factor per notch, pivot about
//!   the content point at the viewport center (the pivot stays fixed on
//!   screen), and clamp the level to a configurable range.
//! - The transform outlives every repaint: scenes clear and redraw through
//!   it without ever resetting it.
//!
//! ## Workflow
//!
//! 1) Feed each pointer event to
//!    [`Viewport::handle`](crate::viewport::Viewport::handle) with the
//!    surface being viewed.
//! 2) When it returns `true`, repaint the content; the new transform is
//!    already on the surface.
//! 3) With the `scene_adapter` feature, steps 1 and 2 collapse into one
//!    call per event via [`adapters::scene`](crate::adapters).
//!
//! ```
//! use arbor_surface::{DisplayList, Surface};
//! use arbor_viewport::types::{PointerButtons, PointerInput};
//! use arbor_viewport::viewport::Viewport;
//! use kurbo::{Size, Vec2};
//!
//! let mut viewport = Viewport::new();
//! viewport.set_size(Size::new(800.0, 600.0));
//! let mut surface = DisplayList::new();
//!
//! // Drag with the primary button held, then roll the wheel away.
//! let needs_redraw = viewport.handle(
//!     &mut surface,
//!     PointerInput::Drag {
//!         buttons: PointerButtons::PRIMARY,
//!         delta: Vec2::new(24.0, 10.0),
//!     },
//! );
//! assert!(needs_redraw);
//! viewport.handle(
//!     &mut surface,
//!     PointerInput::Wheel {
//!         delta: Vec2::new(0.0, -120.0),
//!     },
//! );
//!
//! assert!(viewport.zoom() > 1.0);
//! // Every draw call now goes through the pan/zoom transform.
//! assert_ne!(surface.transform(), kurbo::Affine::IDENTITY);
//! ```
//!
//! This crate is `no_std` and allocation-free.

#![no_std]

pub mod adapters;
pub mod types;
pub mod viewport;
