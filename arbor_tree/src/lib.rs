// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=arbor_tree --heading-base-level=0

//! Arbor Tree: an animated binary search tree scene.
//!
//! Arbor Tree keeps a binary search tree laid out, painted, and animated
//! over any [`arbor_surface::Surface`]. It is the model-and-conductor layer
//! of the Arbor stack: it owns the tree, decides where every node sits,
//! issues the drawing, and walks the step animations, while pixels, timers,
//! and input stay with the embedder.
//!
//! - Arena-backed tree with generational [`NodeId`]s and an unfilled-node
//!   frontier, so every traversal has one base case.
//! - Incremental spacing layout: an insert recomputes offsets along its
//!   descent path only and reports the minimal subtree that moved.
//! - Step-driven insert, search, and fill animations, pumped one tick at a
//!   time through an injected [`TickScheduler`].
//! - Damage-scoped repainting through a [`Stylesheet`](arbor_surface::Stylesheet),
//!   presenting after every visual change.
//!
//! ## Where this fits
//!
//! The Arbor stack separates model from pixels from navigation.
//! - [`arbor_surface`]: the drawing capability and the recording backend.
//! - Tree scene: layout, animation, painting (this crate).
//! - Viewport: pan/zoom transform handling (separate crate).
//!
//! ## Not a renderer
//!
//! This crate rasterizes nothing and waits on nothing. It issues surface
//! calls and arms scheduler ticks; the embedder brings the raster, the
//! timer, and the event loop that feeds fires back into [`Scene::tick`].
//!
//! ## Animation model
//!
//! Starting an animation installs its run state and arms exactly one tick.
//! Each scheduler fire is delivered to [`Scene::tick`], which executes one
//! step (compare, paint, advance) and either arms the next tick or returns
//! the typed [`Completion`]. While a run is in flight every other mutation
//! is refused with [`Error::AnimationRunning`], and [`Scene::cancel`]
//! disarms the pending tick so a stale step can never fire. Terminal steps
//! spend one extra tick before completing, which keeps the final frame on
//! screen for a full interval.
//!
//! ## API overview
//!
//! - [`Scene`]: tree + surface + scheduler + stylesheet; every operation
//!   repaints its own damage.
//! - [`Tree`]: the bare tree and layout, for embedders that paint
//!   themselves.
//! - [`NodeId`]: generational handle of a node.
//! - [`LayoutParams`]: gap, level step, and origin of the layout.
//! - [`TickScheduler`] / [`ManualScheduler`] / [`TickId`]: the timer
//!   capability and the deterministic hand-driven implementation.
//! - [`Progress`] / [`Completion`] / [`Activity`]: what the pump reports.
//!
//! Key operations:
//! - [`Scene::insert`] / [`Scene::fill`] / [`Scene::clear`] → immediate,
//!   one repaint.
//! - [`Scene::insert_animated`] / [`Scene::search_animated`] /
//!   [`Scene::fill_animated`] → one comparison per tick.
//! - [`Scene::tick`] → [`Progress`]; [`Scene::cancel`] → back to idle.
//! - [`Tree::insert`] → [`Inserted`] with the minimal moved subtree;
//!   [`Tree::assign_coords`] repositions exactly that subtree.
//!
//! # Example
//!
//! ```rust
//! use arbor_surface::DisplayList;
//! use arbor_tree::{Completion, ManualScheduler, Progress, Scene};
//!
//! let mut scene = Scene::new(ManualScheduler::new(), DisplayList::new());
//! for value in [50, 30, 70] {
//!     scene.insert(value)?;
//! }
//!
//! // Pump the search animation the way an event loop would.
//! scene.search_animated(30)?;
//! let completion = loop {
//!     scene.scheduler_mut().fire_next().expect("a tick is armed");
//!     match scene.tick() {
//!         Progress::Running => continue,
//!         Progress::Done(done) => break done,
//!         Progress::Idle => unreachable!("the run is still in flight"),
//!     }
//! };
//!
//! match completion {
//!     Completion::Found { value, .. } => assert_eq!(value, 30),
//!     other => panic!("unexpected completion: {other:?}"),
//! }
//! # Ok::<(), arbor_tree::Error>(())
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod anim;
pub mod error;
pub mod paint;
pub mod sched;
pub mod scene;
pub mod tree;
pub mod types;

pub use anim::{Activity, Completion, Progress};
pub use error::Error;
pub use sched::{ManualScheduler, TickId, TickScheduler};
pub use scene::{DEFAULT_INTERVAL, Scene};
pub use tree::{Inserted, Tree};
pub use types::{LayoutParams, NodeId};
