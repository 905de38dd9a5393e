// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visual state tags and the stylesheet resolving them to drawing parameters.

use crate::color::Rgba8;

/// Cosmetic state tag carried by every tree node.
///
/// The tag selects a [`NodeStyle`] through a [`Stylesheet`]. Nodes never
/// store colors or sizes themselves, so restoring the neutral look is a tag
/// sweep and restyling the whole scene is a stylesheet swap.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum VisualState {
    /// Neutral; not part of any highlight.
    #[default]
    Default,
    /// Touched by a traversal; a comparison happened here.
    Visited,
    /// Terminal highlight: value found, or freshly inserted.
    Success,
    /// Pruned: a traversal excluded this subtree.
    Failure,
}

/// Resolved drawing parameters for one visual state.
///
/// `edge_color`/`edge_width` style the edge from the node up to its parent,
/// so a pruned subtree's connecting edge dims together with its nodes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NodeStyle {
    /// Disc radius in world units.
    pub radius: f64,
    /// Disc fill.
    pub fill: Rgba8,
    /// Disc outline color.
    pub outline: Rgba8,
    /// Disc outline width.
    pub outline_width: f64,
    /// Value text size.
    pub text_size: f64,
    /// Value text color.
    pub text_color: Rgba8,
    /// Color of the edge to the parent.
    pub edge_color: Rgba8,
    /// Width of the edge to the parent.
    pub edge_width: f64,
}

/// Maps each [`VisualState`] to a [`NodeStyle`], plus the canvas background.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Stylesheet {
    /// Style for [`VisualState::Default`].
    pub normal: NodeStyle,
    /// Style for [`VisualState::Visited`].
    pub visited: NodeStyle,
    /// Style for [`VisualState::Success`].
    pub success: NodeStyle,
    /// Style for [`VisualState::Failure`].
    pub failure: NodeStyle,
    /// Canvas clear color.
    pub background: Rgba8,
}

impl Stylesheet {
    /// Resolve the style for a state.
    pub const fn style(&self, state: VisualState) -> &NodeStyle {
        match state {
            VisualState::Default => &self.normal,
            VisualState::Visited => &self.visited,
            VisualState::Success => &self.success,
            VisualState::Failure => &self.failure,
        }
    }
}

impl Default for Stylesheet {
    fn default() -> Self {
        let base = NodeStyle {
            radius: 16.0,
            fill: Rgba8::WHITE,
            outline: Rgba8::rgb(0x2b, 0x2b, 0x2b),
            outline_width: 2.0,
            text_size: 12.0,
            text_color: Rgba8::rgb(0x2b, 0x2b, 0x2b),
            edge_color: Rgba8::rgb(0x2b, 0x2b, 0x2b),
            edge_width: 2.0,
        };
        Self {
            normal: base,
            visited: NodeStyle {
                fill: Rgba8::rgb(0xff, 0xc8, 0x3d),
                edge_color: Rgba8::rgb(0xc8, 0x96, 0x00),
                ..base
            },
            success: NodeStyle {
                fill: Rgba8::rgb(0x5d, 0xd3, 0x9e),
                edge_color: Rgba8::rgb(0x1f, 0x8a, 0x5c),
                ..base
            },
            failure: NodeStyle {
                fill: Rgba8::rgb(0xe0, 0xe0, 0xe0),
                outline: base.outline.with_alpha(0x60),
                text_color: base.text_color.with_alpha(0x80),
                edge_color: base.edge_color.with_alpha(0x48),
                ..base
            },
            background: Rgba8::rgb(0xfa, 0xfa, 0xf7),
        }
    }
}
