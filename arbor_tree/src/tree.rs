// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arena-backed binary search tree with incremental spacing layout.

use alloc::vec::Vec;
use kurbo::Point;

use arbor_surface::VisualState;

use crate::error::Error;
use crate::types::{LayoutParams, NodeId};

/// Result of a successful [`Tree::insert`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Inserted {
    /// The node that received the value.
    pub node: NodeId,
    /// Root of the minimal subtree whose anchor offset changed.
    ///
    /// Equal to [`node`](Self::node) when no ancestor spacing widened;
    /// assigning coordinates from here repositions everything the insert
    /// displaced and nothing else.
    pub moved: NodeId,
}

#[derive(Clone, Debug)]
struct Node {
    value: Option<i64>,
    parent: Option<NodeId>,
    left: Option<NodeId>,
    right: Option<NodeId>,
    pos: Point,
    left_spacing: f64,
    right_spacing: f64,
    cum_left: f64,
    cum_right: f64,
    state: VisualState,
}

impl Node {
    fn unfilled(parent: Option<NodeId>) -> Self {
        Self {
            value: None,
            parent,
            left: None,
            right: None,
            pos: Point::ZERO,
            left_spacing: 0.0,
            right_spacing: 0.0,
            cum_left: 0.0,
            cum_right: 0.0,
            state: VisualState::Default,
        }
    }
}

/// Binary search tree with arena storage and incremental layout.
///
/// Unfilled placeholder nodes pad the frontier: a filled node always has two
/// children (possibly unfilled), an unfilled node never has any, and "is
/// this node filled" is the sole base case of every traversal. Placeholders
/// are never positioned and never drawn.
///
/// Layout state lives on the nodes. `left_spacing`/`right_spacing` hold the
/// horizontal offset from a node to each child, and `cum_left`/`cum_right`
/// the widest extent of each subtree. [`Tree::insert`] recomputes these
/// bottom-up along the descent path only and reports the minimal subtree
/// whose anchor moved, so [`Tree::assign_coords`] can skip everything else.
pub struct Tree {
    nodes: Vec<Node>,
    generation: u32,
    filled: usize,
    params: LayoutParams,
}

impl core::fmt::Debug for Tree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tree")
            .field("nodes_total", &self.nodes.len())
            .field("filled", &self.filled)
            .field("generation", &self.generation)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new(LayoutParams::default())
    }
}

impl Tree {
    /// Create an empty tree: a single unfilled root.
    pub fn new(params: LayoutParams) -> Self {
        Self {
            nodes: alloc::vec![Node::unfilled(None)],
            generation: 1,
            filled: 0,
            params,
        }
    }

    /// The layout configuration.
    pub fn params(&self) -> &LayoutParams {
        &self.params
    }

    /// The root node. Unfilled while the tree is empty.
    pub fn root(&self) -> NodeId {
        NodeId::new(0, self.generation)
    }

    /// Whether `id` refers to the current tree contents.
    ///
    /// Ids from before a [`Tree::clear`] are dead and are ignored by every
    /// accessor and mutator.
    pub fn is_alive(&self, id: NodeId) -> bool {
        id.generation() == self.generation && id.idx() < self.nodes.len()
    }

    /// Whether `id` holds a value.
    pub fn is_filled(&self, id: NodeId) -> bool {
        self.live(id).is_some_and(|n| n.value.is_some())
    }

    /// The value at `id`, if the node is alive and filled.
    pub fn value(&self, id: NodeId) -> Option<i64> {
        self.live(id).and_then(|n| n.value)
    }

    /// Left child of a filled node.
    pub fn left(&self, id: NodeId) -> Option<NodeId> {
        self.live(id).and_then(|n| n.left)
    }

    /// Right child of a filled node.
    pub fn right(&self, id: NodeId) -> Option<NodeId> {
        self.live(id).and_then(|n| n.right)
    }

    /// Parent of `id`; `None` for the root.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.live(id).and_then(|n| n.parent)
    }

    /// Assigned position of a filled node.
    pub fn position(&self, id: NodeId) -> Option<Point> {
        self.live(id).filter(|n| n.value.is_some()).map(|n| n.pos)
    }

    /// Visual state tag of a live node.
    pub fn visual(&self, id: NodeId) -> Option<VisualState> {
        self.live(id).map(|n| n.state)
    }

    /// Number of ancestors between `id` and the root.
    pub fn depth(&self, id: NodeId) -> Option<usize> {
        if !self.is_alive(id) {
            return None;
        }
        let mut depth = 0;
        let mut cur = id;
        while let Some(p) = self.node(cur).parent {
            depth += 1;
            cur = p;
        }
        Some(depth)
    }

    /// Number of filled nodes.
    pub fn len(&self) -> usize {
        self.filled
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.filled == 0
    }

    /// Iterate over all filled nodes, in arena order.
    pub fn filled(&self) -> impl Iterator<Item = NodeId> + '_ {
        let generation = self.generation;
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.value.is_some())
            .map(move |(i, _)| {
                #[allow(
                    clippy::cast_possible_truncation,
                    reason = "NodeId uses 32-bit indices by design."
                )]
                let idx = i as u32;
                NodeId::new(idx, generation)
            })
    }

    /// Filled values in ascending (in-order) sequence.
    pub fn in_order(&self) -> Vec<i64> {
        let mut out = Vec::with_capacity(self.filled);
        self.in_order_at(self.root(), &mut out);
        out
    }

    fn in_order_at(&self, id: NodeId, out: &mut Vec<i64>) {
        let n = self.node(id);
        let Some(value) = n.value else {
            return;
        };
        let (left, right) = (n.left, n.right);
        if let Some(l) = left {
            self.in_order_at(l, out);
        }
        out.push(value);
        if let Some(r) = right {
            self.in_order_at(r, out);
        }
    }

    /// Insert `value`, keeping spacing consistent along the descent path.
    ///
    /// Descends by comparison until an unfilled node takes the value (and
    /// grows two unfilled children). Returning from the recursion, each
    /// ancestor's descent-side spacing becomes the child subtree's opposite
    /// cumulative extent plus the gap, and its cumulative extents are
    /// refreshed. The reported [`Inserted::moved`] is the highest node whose
    /// anchor offset changed, or the fresh node when none did; callers pass
    /// it to [`Tree::assign_coords`].
    ///
    /// A value already present is refused with [`Error::DuplicateValue`]
    /// and the tree is untouched.
    pub fn insert(&mut self, value: i64) -> Result<Inserted, Error> {
        let root = self.root();
        self.insert_at(root, value)
    }

    fn insert_at(&mut self, id: NodeId, value: i64) -> Result<Inserted, Error> {
        let Some(node_value) = self.node(id).value else {
            self.fill_slot(id, value);
            return Ok(Inserted {
                node: id,
                moved: id,
            });
        };
        if value == node_value {
            return Err(Error::DuplicateValue(value));
        }
        let gap = self.params.gap;
        if value < node_value {
            let child = self.node(id).left.expect("filled node has children");
            let deeper = self.insert_at(child, value)?;
            let (child_cum_right, child_cum_left) = {
                let c = self.node(child);
                (c.cum_right, c.cum_left)
            };
            let spacing = child_cum_right + gap;
            let n = self.node_mut(id);
            let changed = spacing != n.left_spacing;
            n.left_spacing = spacing;
            n.cum_left = spacing + child_cum_left;
            Ok(Inserted {
                node: deeper.node,
                moved: if changed { child } else { deeper.moved },
            })
        } else {
            let child = self.node(id).right.expect("filled node has children");
            let deeper = self.insert_at(child, value)?;
            let (child_cum_left, child_cum_right) = {
                let c = self.node(child);
                (c.cum_left, c.cum_right)
            };
            let spacing = child_cum_left + gap;
            let n = self.node_mut(id);
            let changed = spacing != n.right_spacing;
            n.right_spacing = spacing;
            n.cum_right = spacing + child_cum_right;
            Ok(Inserted {
                node: deeper.node,
                moved: if changed { child } else { deeper.moved },
            })
        }
    }

    /// Whether `value` is in the tree. No visual effect.
    pub fn search(&self, value: i64) -> bool {
        let mut cur = self.root();
        loop {
            let n = self.node(cur);
            let Some(v) = n.value else {
                return false;
            };
            if v == value {
                return true;
            }
            cur = if value < v { n.left } else { n.right }.expect("filled node has children");
        }
    }

    /// Position the subtree rooted at `id`.
    ///
    /// The root takes the configured origin; every other node sits at its
    /// parent's position offset by the parent's spacing on the matching
    /// side, one level step down. Recursion stops at unfilled nodes, which
    /// never receive coordinates.
    pub fn assign_coords(&mut self, id: NodeId) {
        if !self.is_alive(id) || !self.is_filled(id) {
            return;
        }
        let pos = match self.node(id).parent {
            None => self.params.origin,
            Some(p) => {
                let parent = self.node(p);
                let x = if parent.left == Some(id) {
                    parent.pos.x - parent.left_spacing
                } else {
                    parent.pos.x + parent.right_spacing
                };
                Point::new(x, parent.pos.y + self.params.level_step)
            }
        };
        self.node_mut(id).pos = pos;
        let (left, right) = {
            let n = self.node(id);
            (n.left, n.right)
        };
        if let Some(l) = left {
            self.assign_coords(l);
        }
        if let Some(r) = right {
            self.assign_coords(r);
        }
    }

    /// Tag one node.
    pub fn set_state(&mut self, id: NodeId, state: VisualState) {
        if let Some(n) = self.live_mut(id) {
            n.state = state;
        }
    }

    /// Tag `id` and everything below it.
    pub fn set_subtree_state(&mut self, id: NodeId, state: VisualState) {
        if !self.is_alive(id) {
            return;
        }
        self.node_mut(id).state = state;
        let (left, right) = {
            let n = self.node(id);
            (n.left, n.right)
        };
        if let Some(l) = left {
            self.set_subtree_state(l, state);
        }
        if let Some(r) = right {
            self.set_subtree_state(r, state);
        }
    }

    /// Restore every node to [`VisualState::Default`].
    pub fn reset_visuals(&mut self) {
        for n in &mut self.nodes {
            n.state = VisualState::Default;
        }
    }

    /// Discard all nodes and start over with a fresh unfilled root.
    ///
    /// All previously issued ids go dead.
    pub fn clear(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.nodes.clear();
        self.nodes.push(Node::unfilled(None));
        self.filled = 0;
    }

    // --- internals ---

    fn live(&self, id: NodeId) -> Option<&Node> {
        if id.generation() != self.generation {
            return None;
        }
        self.nodes.get(id.idx())
    }

    fn live_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        if id.generation() != self.generation {
            return None;
        }
        self.nodes.get_mut(id.idx())
    }

    fn node(&self, id: NodeId) -> &Node {
        debug_assert!(self.is_alive(id), "dangling NodeId");
        &self.nodes[id.idx()]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        debug_assert!(self.is_alive(id), "dangling NodeId");
        &mut self.nodes[id.idx()]
    }

    fn fill_slot(&mut self, id: NodeId, value: i64) {
        debug_assert!(self.node(id).value.is_none(), "fill targets an unfilled node");
        let left = self.push_unfilled(id);
        let right = self.push_unfilled(id);
        let gap = self.params.gap;
        let n = self.node_mut(id);
        n.value = Some(value);
        n.left = Some(left);
        n.right = Some(right);
        n.left_spacing = gap;
        n.right_spacing = gap;
        self.filled += 1;
    }

    fn push_unfilled(&mut self, parent: NodeId) -> NodeId {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "NodeId uses 32-bit indices by design."
        )]
        let idx = self.nodes.len() as u32;
        self.nodes.push(Node::unfilled(Some(parent)));
        NodeId::new(idx, self.generation)
    }

    #[cfg(test)]
    fn spacing(&self, id: NodeId) -> (f64, f64) {
        let n = self.node(id);
        (n.left_spacing, n.right_spacing)
    }

    #[cfg(test)]
    fn extents(&self, id: NodeId) -> (f64, f64) {
        let n = self.node(id);
        (n.cum_left, n.cum_right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn find(tree: &Tree, value: i64) -> NodeId {
        let mut cur = tree.root();
        loop {
            let v = tree.value(cur).expect("value not in tree");
            if v == value {
                return cur;
            }
            cur = if value < v {
                tree.left(cur)
            } else {
                tree.right(cur)
            }
            .expect("filled node has children");
        }
    }

    fn grow(values: &[i64]) -> Tree {
        let mut tree = Tree::default();
        for &v in values {
            let ins = tree.insert(v).expect("distinct values");
            tree.assign_coords(ins.moved);
        }
        tree
    }

    #[test]
    fn first_insert_fills_root_at_origin() {
        let mut tree = Tree::default();
        assert!(tree.is_empty(), "fresh tree is empty");

        let ins = tree.insert(50).unwrap();
        tree.assign_coords(ins.moved);

        assert_eq!(ins.node, tree.root(), "first value lands at the root");
        assert_eq!(ins.moved, ins.node, "nothing else moved");
        assert_eq!(tree.position(ins.node), Some(tree.params().origin));
        assert_eq!(tree.len(), 1, "one filled node");
        let l = tree.left(ins.node).unwrap();
        let r = tree.right(ins.node).unwrap();
        assert!(!tree.is_filled(l) && !tree.is_filled(r), "children are placeholders");
        assert_eq!(tree.position(l), None, "placeholders are never positioned");
    }

    #[test]
    fn fresh_leaf_offsets_from_parent() {
        let tree = grow(&[50, 30, 70]);
        let origin = tree.params().origin;
        let gap = tree.params().gap;
        let step = tree.params().level_step;

        let left = find(&tree, 30);
        let right = find(&tree, 70);
        assert_eq!(
            tree.position(left),
            Some(Point::new(origin.x - gap, origin.y + step)),
            "left child sits one gap left, one level down"
        );
        assert_eq!(
            tree.position(right),
            Some(Point::new(origin.x + gap, origin.y + step)),
            "right child sits one gap right, one level down"
        );
    }

    #[test]
    fn unchanged_spacing_returns_the_fresh_leaf() {
        let mut tree = grow(&[50, 30]);
        let before = tree.spacing(find(&tree, 50));

        let ins = tree.insert(20).unwrap();
        tree.assign_coords(ins.moved);

        assert_eq!(ins.moved, ins.node, "no ancestor anchor moved");
        assert_eq!(ins.node, find(&tree, 20));
        assert_eq!(
            tree.spacing(find(&tree, 50)),
            before,
            "root spacing is untouched by a deep fresh leaf"
        );
    }

    #[test]
    fn widened_spacing_returns_the_shifted_child() {
        let mut tree = grow(&[50, 70]);

        // 60 widens the root's right spacing: 70 gains a left subtree that
        // would otherwise collide with 50.
        let ins = tree.insert(60).unwrap();
        tree.assign_coords(ins.moved);

        let seventy = find(&tree, 70);
        assert_eq!(ins.moved, seventy, "the displaced subtree root is reported");

        let origin = tree.params().origin;
        let gap = tree.params().gap;
        assert_eq!(
            tree.position(seventy).unwrap().x,
            origin.x + 2.0 * gap,
            "70 moved one extra gap right"
        );
        assert_eq!(
            tree.position(find(&tree, 60)).unwrap().x,
            origin.x + gap,
            "60 hangs a gap left of 70"
        );
    }

    #[test]
    fn left_chain_accumulates_extent_without_moving_anchors() {
        let mut tree = Tree::default();
        let values = [50, 40, 30, 20, 10];
        for (i, &v) in values.iter().enumerate() {
            let ins = tree.insert(v).unwrap();
            tree.assign_coords(ins.moved);
            assert_eq!(
                ins.moved, ins.node,
                "a pure chain never shifts an existing anchor (insert #{i})"
            );
        }
        let gap = tree.params().gap;
        let (cum_left, _) = tree.extents(find(&tree, 50));
        assert_eq!(cum_left, 4.0 * gap, "extent grows one gap per level");

        let step = tree.params().level_step;
        for (i, &v) in values.iter().enumerate() {
            let p = tree.position(find(&tree, v)).unwrap();
            assert_eq!(p.x, tree.params().origin.x - i as f64 * gap);
            assert_eq!(p.y, tree.params().origin.y + i as f64 * step);
        }
    }

    #[test]
    fn duplicate_insert_is_refused_and_harmless() {
        let mut tree = grow(&[50, 30, 70]);
        let nodes_before = tree.nodes.len();

        assert_eq!(tree.insert(30), Err(Error::DuplicateValue(30)));
        assert_eq!(tree.len(), 3, "no value added");
        assert_eq!(tree.nodes.len(), nodes_before, "no placeholder added");
        assert_eq!(tree.in_order(), vec![30, 50, 70]);
    }

    #[test]
    fn search_finds_present_and_misses_absent() {
        let tree = grow(&[50, 30, 70, 20, 40]);
        for v in [50, 30, 70, 20, 40] {
            assert!(tree.search(v), "present value {v}");
        }
        for v in [10, 35, 60, 80] {
            assert!(!tree.search(v), "absent value {v}");
        }
        assert!(!Tree::default().search(1), "empty tree misses everything");
    }

    #[test]
    fn clear_kills_old_ids() {
        let mut tree = grow(&[50, 30]);
        let old = find(&tree, 30);

        tree.clear();

        assert!(tree.is_empty());
        assert_eq!(tree.nodes.len(), 1, "one unfilled root remains");
        assert!(!tree.is_alive(old), "pre-clear ids are dead");
        assert_eq!(tree.value(old), None);
        assert_eq!(tree.visual(old), None);
        tree.set_state(old, VisualState::Success);
        assert_eq!(
            tree.visual(tree.root()),
            Some(VisualState::Default),
            "a dead id cannot repaint the new tree"
        );
    }

    #[test]
    fn subtree_state_covers_descendants_only() {
        let mut tree = grow(&[50, 30, 70, 20, 40]);
        tree.set_subtree_state(find(&tree, 30), VisualState::Failure);

        for v in [30, 20, 40] {
            assert_eq!(tree.visual(find(&tree, v)), Some(VisualState::Failure));
        }
        for v in [50, 70] {
            assert_eq!(tree.visual(find(&tree, v)), Some(VisualState::Default));
        }

        tree.reset_visuals();
        for v in [50, 30, 70, 20, 40] {
            assert_eq!(tree.visual(find(&tree, v)), Some(VisualState::Default));
        }
    }

    #[test]
    fn depth_counts_ancestors() {
        let tree = grow(&[50, 30, 20, 10]);
        assert_eq!(tree.depth(find(&tree, 50)), Some(0));
        assert_eq!(tree.depth(find(&tree, 30)), Some(1));
        assert_eq!(tree.depth(find(&tree, 10)), Some(3));
    }

    #[test]
    fn skewed_orders_keep_same_level_nodes_apart() {
        let orders: [&[i64]; 6] = [
            &[10, 20, 30, 40, 50, 60, 70, 80],
            &[80, 70, 60, 50, 40, 30, 20, 10],
            &[10, 80, 20, 70, 30, 60, 40, 50],
            &[50, 10, 90, 20, 80, 30, 70, 40, 60],
            &[40, 20, 60, 10, 30, 50, 70, 5, 15, 25, 35, 45, 55, 65, 75],
            &[50, 25, 75, 12, 37, 62, 87, 6, 18, 31, 43, 56, 68, 81, 93, 3],
        ];
        for values in orders {
            let mut tree = Tree::default();
            for &v in values {
                let ins = tree.insert(v).expect("distinct values");
                tree.assign_coords(ins.moved);
                check_invariants(&tree);
            }
        }
    }

    // Structural checks shared by the skewed-order test and the property
    // tests below.
    fn check_invariants(tree: &Tree) {
        let gap = tree.params().gap;
        let step = tree.params().level_step;

        let values = tree.in_order();
        assert!(
            values.windows(2).all(|w| w[0] < w[1]),
            "in-order traversal is strictly ascending"
        );

        for id in tree.filled() {
            let (ls, rs) = tree.spacing(id);
            let (cl, cr) = tree.extents(id);
            let pos = tree.position(id).unwrap();

            let left = tree.left(id).unwrap();
            let right = tree.right(id).unwrap();

            if tree.is_filled(left) {
                let (child_cl, child_cr) = tree.extents(left);
                assert!(
                    ls >= child_cr + gap,
                    "left spacing clears the left child's right extent"
                );
                assert_eq!(cl, ls + child_cl, "left extent is spacing plus child extent");

                let cp = tree.position(left).unwrap();
                assert!(cp.x < pos.x, "left child is left of its parent");
                assert_eq!(cp.x, pos.x - ls, "left child sits at the spacing offset");
                assert_eq!(cp.y, pos.y + step, "children are one level down");
            } else {
                assert_eq!(cl, 0.0, "no left subtree, no left extent");
            }

            if tree.is_filled(right) {
                let (child_cl, child_cr) = tree.extents(right);
                assert!(
                    rs >= child_cl + gap,
                    "right spacing clears the right child's left extent"
                );
                assert_eq!(cr, rs + child_cr, "right extent is spacing plus child extent");

                let cp = tree.position(right).unwrap();
                assert!(cp.x > pos.x, "right child is right of its parent");
                assert_eq!(cp.x, pos.x + rs, "right child sits at the spacing offset");
                assert_eq!(cp.y, pos.y + step, "children are one level down");
            } else {
                assert_eq!(cr, 0.0, "no right subtree, no right extent");
            }
        }

        // Any two nodes on the same level stay a full gap apart, not just
        // siblings under one parent.
        let mut levels: Vec<(usize, f64)> = tree
            .filled()
            .map(|id| {
                let depth = tree.depth(id).unwrap();
                (depth, tree.position(id).unwrap().x)
            })
            .collect();
        levels.sort_by(|a, b| a.partial_cmp(b).expect("coordinates are finite"));
        for pair in levels.windows(2) {
            if pair[0].0 == pair[1].0 {
                assert!(
                    pair[1].1 - pair[0].1 >= gap,
                    "nodes on one level keep a gap between them"
                );
            }
        }
    }

    mod props {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            #[test]
            fn layout_invariants_hold_under_random_inserts(
                values in prop::collection::vec(0_i64..400, 0..48),
            ) {
                let mut tree = Tree::default();
                for &v in &values {
                    match tree.insert(v) {
                        Ok(ins) => tree.assign_coords(ins.moved),
                        Err(e) => prop_assert_eq!(e, Error::DuplicateValue(v)),
                    }
                    check_invariants(&tree);
                }
            }

            #[test]
            fn moved_subtree_is_minimal(
                values in prop::collection::vec(0_i64..400, 1..48),
            ) {
                let mut tree = Tree::default();
                for &v in &values {
                    let before: Vec<(NodeId, (f64, f64))> =
                        tree.filled().map(|id| (id, tree.spacing(id))).collect();
                    let Ok(ins) = tree.insert(v) else { continue };
                    tree.assign_coords(ins.moved);

                    if ins.moved == ins.node {
                        // A fresh-leaf result promises no anchor moved anywhere.
                        for (id, spacing) in before {
                            prop_assert_eq!(tree.spacing(id), spacing);
                        }
                    } else {
                        // Otherwise the reported subtree's parent widened toward it.
                        let parent =
                            tree.parent(ins.moved).expect("shifted subtree has a parent");
                        let old = before
                            .iter()
                            .find(|(id, _)| *id == parent)
                            .map(|(_, s)| *s)
                            .expect("parent existed before the insert");
                        prop_assert_ne!(tree.spacing(parent), old);
                    }
                }
            }

            #[test]
            fn search_tracks_exactly_the_inserted_values(
                values in prop::collection::vec(0_i64..400, 0..48),
            ) {
                let mut tree = Tree::default();
                for &v in &values {
                    match tree.insert(v) {
                        Ok(ins) => tree.assign_coords(ins.moved),
                        Err(e) => prop_assert_eq!(e, Error::DuplicateValue(v)),
                    }
                }

                let mut expected = values.clone();
                expected.sort_unstable();
                expected.dedup();
                prop_assert_eq!(tree.in_order(), expected);

                for &v in &values {
                    prop_assert!(tree.search(v));
                }
                prop_assert!(!tree.search(-1));
                prop_assert!(!tree.search(400));
            }
        }
    }
}
