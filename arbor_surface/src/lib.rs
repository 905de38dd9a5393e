// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=arbor_surface --heading-base-level=0

//! Arbor Surface: the drawing seam for the Arbor tree scene.
//!
//! Arbor draws through a capability, not a backend. The tree and viewport
//! crates issue calls against the [`Surface`] trait and never touch pixels,
//! so any embedder that can clear, stroke a line, fill a circle, place a
//! centered text run, and blit can host the visualization.
//!
//! - [`Surface`]: clear, line, circle, centered text, persistent affine
//!   transform, present.
//! - [`Rgba8`]: plain 8-bit color.
//! - [`VisualState`] + [`Stylesheet`] + [`NodeStyle`]: tag-to-style
//!   resolution for node drawing. Nodes carry a tag; the stylesheet decides
//!   what a tag looks like.
//! - [`DisplayList`]: the reference backend. It records every call verbatim
//!   as a [`DrawCmd`], for replay against a real rasterizer or for direct
//!   assertions in tests.
//!
//! The rendering model is immediate-mode drawing onto a retained raster:
//! content stays on screen until something explicitly draws over it, and
//! [`Surface::present`] blits the raster to the output. The persistent
//! transform is how pan/zoom reaches every draw call without the scene
//! knowing about either.
//!
//! # Example
//!
//! ```rust
//! use arbor_surface::{DisplayList, DrawCmd, Stylesheet, Surface, VisualState};
//! use kurbo::{Circle, Point};
//!
//! let sheet = Stylesheet::default();
//! let style = sheet.style(VisualState::Success);
//!
//! let mut list = DisplayList::new();
//! list.clear(sheet.background);
//! list.circle(
//!     Circle::new(Point::new(40.0, 40.0), style.radius),
//!     style.fill,
//!     style.outline,
//!     style.outline_width,
//! );
//! list.text(Point::new(40.0, 40.0), "7", style.text_size, style.text_color);
//! list.present();
//!
//! assert_eq!(list.cmds().len(), 4);
//! assert!(matches!(list.cmds()[1], DrawCmd::Circle { .. }));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod color;
pub mod display_list;
pub mod style;
pub mod surface;

pub use color::Rgba8;
pub use display_list::{DisplayList, DrawCmd};
pub use style::{NodeStyle, Stylesheet, VisualState};
pub use surface::Surface;
