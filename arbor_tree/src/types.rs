// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Identifiers and layout configuration.

use kurbo::Point;

/// Identifier for a node in the tree (generational).
///
/// Ids are invalidated wholesale when the tree is cleared; stale ids are
/// detected by [`Tree::is_alive`](crate::tree::Tree::is_alive) and ignored
/// by the accessors, never resolved to a different node.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(u32, u32);

impl NodeId {
    pub(crate) fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) fn idx(self) -> usize {
        self.0 as usize
    }

    pub(crate) fn generation(self) -> u32 {
        self.1
    }
}

/// Layout configuration: horizontal clearance, vertical rhythm, and the
/// root anchor.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutParams {
    /// Minimum horizontal clearance between a node and the nearest extent
    /// of a child's subtree.
    pub gap: f64,
    /// Vertical distance from a parent to its children.
    pub level_step: f64,
    /// Coordinates assigned to the root. Every other node derives its
    /// position from its parent.
    pub origin: Point,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            gap: 40.0,
            level_step: 80.0,
            origin: Point::ZERO,
        }
    }
}
