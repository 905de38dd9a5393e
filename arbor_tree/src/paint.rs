// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Painting a tree onto a [`Surface`].
//!
//! All functions here only draw; none of them presents. Callers batch the
//! damage they need and present once.

use alloc::string::ToString;
use alloc::vec::Vec;
use kurbo::{Circle, Line};

use arbor_surface::{Stylesheet, Surface};

use crate::tree::Tree;
use crate::types::NodeId;

/// Repaint the whole scene: background, then every edge, then every disc.
///
/// Edges go down first so discs cover the line joints.
pub fn draw_all<S: Surface>(tree: &Tree, surface: &mut S, sheet: &Stylesheet) {
    surface.clear(sheet.background);
    let nodes: Vec<NodeId> = tree.filled().collect();
    for &id in &nodes {
        draw_edge(tree, id, surface, sheet);
    }
    for &id in &nodes {
        draw_disc(tree, id, surface, sheet);
    }
}

/// Repaint the subtree rooted at `id`, including its upward edge.
///
/// The parent's disc is repainted last because the upward edge stroke cuts
/// across it. Draws nothing when `id` is unfilled.
pub fn draw_subtree<S: Surface>(tree: &Tree, id: NodeId, surface: &mut S, sheet: &Stylesheet) {
    let mut nodes = Vec::new();
    collect_filled(tree, id, &mut nodes);
    if nodes.is_empty() {
        return;
    }
    for &n in &nodes {
        draw_edge(tree, n, surface, sheet);
    }
    for &n in &nodes {
        draw_disc(tree, n, surface, sheet);
    }
    if let Some(parent) = tree.parent(id) {
        draw_disc(tree, parent, surface, sheet);
    }
}

/// Repaint one node in place: its upward edge, its disc, and its parent's
/// disc, which the edge stroke would otherwise cut across.
pub fn draw_node<S: Surface>(tree: &Tree, id: NodeId, surface: &mut S, sheet: &Stylesheet) {
    if !tree.is_filled(id) {
        return;
    }
    draw_edge(tree, id, surface, sheet);
    draw_disc(tree, id, surface, sheet);
    if let Some(parent) = tree.parent(id) {
        draw_disc(tree, parent, surface, sheet);
    }
}

/// Fill `id`'s disc and draw its value text, styled by its visual state.
pub fn draw_disc<S: Surface>(tree: &Tree, id: NodeId, surface: &mut S, sheet: &Stylesheet) {
    let (Some(pos), Some(value), Some(state)) =
        (tree.position(id), tree.value(id), tree.visual(id))
    else {
        return;
    };
    let style = sheet.style(state);
    surface.circle(
        Circle::new(pos, style.radius),
        style.fill,
        style.outline,
        style.outline_width,
    );
    surface.text(pos, &value.to_string(), style.text_size, style.text_color);
}

/// Stroke the edge joining `id` to its parent, styled by `id`'s state.
///
/// The root and unfilled nodes have no upward edge.
pub fn draw_edge<S: Surface>(tree: &Tree, id: NodeId, surface: &mut S, sheet: &Stylesheet) {
    let (Some(pos), Some(parent), Some(state)) =
        (tree.position(id), tree.parent(id), tree.visual(id))
    else {
        return;
    };
    let Some(parent_pos) = tree.position(parent) else {
        return;
    };
    let style = sheet.style(state);
    surface.line(Line::new(parent_pos, pos), style.edge_width, style.edge_color);
}

// --- internals ---

fn collect_filled(tree: &Tree, id: NodeId, out: &mut Vec<NodeId>) {
    if !tree.is_filled(id) {
        return;
    }
    out.push(id);
    if let Some(l) = tree.left(id) {
        collect_filled(tree, l, out);
    }
    if let Some(r) = tree.right(id) {
        collect_filled(tree, r, out);
    }
}
