// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scene: one tree, one surface, one scheduler, at most one animation.

use core::fmt;
use core::time::Duration;

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

use arbor_surface::{Stylesheet, Surface};

use crate::anim::Animation;
use crate::error::Error;
use crate::paint;
use crate::sched::{TickId, TickScheduler};
use crate::tree::Tree;
use crate::types::{LayoutParams, NodeId};

/// Default delay between animation steps.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(300);

const DEFAULT_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

/// A binary search tree bound to a surface and a tick scheduler.
///
/// The scene owns the tree and repaints it through the surface after every
/// visual mutation, always finishing with a present. Animated operations
/// run as a chain of scheduled steps pumped by [`tick`](crate::Scene::tick);
/// while one runs, every other mutation is refused with
/// [`Error::AnimationRunning`]. Pure reads stay available throughout.
///
/// Construction touches neither the surface nor the scheduler. Call
/// [`redraw_all`](Scene::redraw_all) once the surface is ready to show the
/// first frame.
pub struct Scene<S, F> {
    pub(crate) tree: Tree,
    pub(crate) sched: S,
    pub(crate) surface: F,
    pub(crate) sheet: Stylesheet,
    pub(crate) interval: Duration,
    pub(crate) pending: Option<TickId>,
    pub(crate) anim: Option<Animation>,
    pub(crate) rng: Xoshiro256StarStar,
}

impl<S, F> fmt::Debug for Scene<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scene")
            .field("tree", &self.tree)
            .field("interval", &self.interval)
            .field("running", &self.anim.is_some())
            .finish_non_exhaustive()
    }
}

impl<S: TickScheduler, F: Surface> Scene<S, F> {
    /// Create a scene over an empty tree with default layout.
    pub fn new(sched: S, surface: F) -> Self {
        Self::with_params(sched, surface, LayoutParams::default())
    }

    /// Create a scene over an empty tree with the given layout.
    pub fn with_params(sched: S, surface: F, params: LayoutParams) -> Self {
        Self {
            tree: Tree::new(params),
            sched,
            surface,
            sheet: Stylesheet::default(),
            interval: DEFAULT_INTERVAL,
            pending: None,
            anim: None,
            rng: Xoshiro256StarStar::seed_from_u64(DEFAULT_SEED),
        }
    }

    /// Insert `value` immediately and repaint the damage.
    ///
    /// When only the fresh leaf appeared, just that node and its parent are
    /// repainted; when an ancestor's spacing widened, the displaced subtree
    /// invalidates enough of the scene that everything is redrawn.
    pub fn insert(&mut self, value: i64) -> Result<NodeId, Error> {
        self.ensure_idle()?;
        let inserted = self.tree.insert(value)?;
        self.tree.assign_coords(inserted.moved);
        if inserted.moved == inserted.node {
            self.redraw_node(inserted.node);
        } else {
            log::trace!("insert of {value} shifted a subtree, repainting all");
            self.redraw_all();
        }
        Ok(inserted.node)
    }

    /// Whether `value` is in the tree. Pure; allowed while animating.
    pub fn search(&self, value: i64) -> bool {
        self.tree.search(value)
    }

    /// Replace the contents with `count` distinct random values, drawn
    /// uniformly from `0..count`, and repaint once.
    ///
    /// Values are drawn by rejection, so the final draws at full density
    /// retry repeatedly before landing on the remaining holes.
    pub fn fill(&mut self, count: u32) -> Result<(), Error> {
        self.ensure_idle()?;
        self.tree.clear();
        let bound = i64::from(count);
        for _ in 0..count {
            let value = self.draw_value(bound);
            let inserted = self
                .tree
                .insert(value)
                .expect("draw_value rejects values already present");
            self.tree.assign_coords(inserted.moved);
        }
        self.redraw_all();
        log::debug!("filled with {count} random values");
        Ok(())
    }

    /// Drop every node and repaint the empty scene.
    pub fn clear(&mut self) -> Result<(), Error> {
        self.ensure_idle()?;
        self.tree.clear();
        self.redraw_all();
        Ok(())
    }

    /// Return every node to its default look and repaint.
    pub fn reset_visuals(&mut self) -> Result<(), Error> {
        self.ensure_idle()?;
        self.tree.reset_visuals();
        self.redraw_all();
        Ok(())
    }

    /// Repaint the whole scene and present.
    pub fn redraw_all(&mut self) {
        paint::draw_all(&self.tree, &mut self.surface, &self.sheet);
        self.surface.present();
    }

    /// The tree under the scene.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// The drawing target.
    pub fn surface(&self) -> &F {
        &self.surface
    }

    /// Mutable access to the drawing target, for resizes and transforms.
    pub fn surface_mut(&mut self) -> &mut F {
        &mut self.surface
    }

    /// Mutable access to the scheduler, for pumping armed ticks.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.sched
    }

    /// The styles nodes are painted with.
    pub fn stylesheet(&self) -> &Stylesheet {
        &self.sheet
    }

    /// Mutable access to the styles. Takes effect on the next repaint.
    pub fn stylesheet_mut(&mut self) -> &mut Stylesheet {
        &mut self.sheet
    }

    /// Delay requested between animation steps.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Set the delay between animation steps. Zero is valid; step order is
    /// preserved at any interval.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// Restart the random sequence behind [`fill`](Scene::fill).
    pub fn reseed(&mut self, seed: u64) {
        self.rng = Xoshiro256StarStar::seed_from_u64(seed);
    }

    // --- internals ---

    pub(crate) fn ensure_idle(&self) -> Result<(), Error> {
        if self.anim.is_some() {
            return Err(Error::AnimationRunning);
        }
        Ok(())
    }

    pub(crate) fn redraw_node(&mut self, id: NodeId) {
        paint::draw_node(&self.tree, id, &mut self.surface, &self.sheet);
        self.surface.present();
    }

    pub(crate) fn redraw_subtree(&mut self, id: NodeId) {
        paint::draw_subtree(&self.tree, id, &mut self.surface, &self.sheet);
        self.surface.present();
    }

    /// Draw a value from `0..bound` that is not yet in the tree.
    pub(crate) fn draw_value(&mut self, bound: i64) -> i64 {
        debug_assert!(bound > 0, "cannot draw from an empty range");
        loop {
            let value = self.rng.gen_range(0..bound);
            if !self.tree.search(value) {
                return value;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use arbor_surface::{DisplayList, DrawCmd};

    use super::*;
    use crate::sched::ManualScheduler;

    fn scene() -> Scene<ManualScheduler, DisplayList> {
        Scene::new(ManualScheduler::new(), DisplayList::new())
    }

    #[test]
    fn leaf_insert_repaints_node_and_parent_only() {
        let mut scene = scene();
        scene.insert(50).unwrap();
        scene.surface_mut().take();

        scene.insert(30).unwrap();

        let cmds = scene.surface_mut().take();
        assert!(
            !cmds.iter().any(|c| matches!(c, DrawCmd::Clear(_))),
            "a fresh leaf never forces a full repaint"
        );
        // Edge, two discs with text, one present.
        assert_eq!(cmds.len(), 6);
        assert_eq!(cmds.last(), Some(&DrawCmd::Present));
    }

    #[test]
    fn shifting_insert_repaints_everything() {
        let mut scene = scene();
        scene.insert(50).unwrap();
        scene.insert(70).unwrap();
        scene.surface_mut().take();

        scene.insert(60).unwrap();

        let cmds = scene.surface_mut().take();
        assert!(
            cmds.iter().any(|c| matches!(c, DrawCmd::Clear(_))),
            "a displaced subtree repaints the full scene"
        );
        assert_eq!(cmds.last(), Some(&DrawCmd::Present));
    }

    #[test]
    fn duplicate_insert_paints_nothing() {
        let mut scene = scene();
        scene.insert(50).unwrap();
        scene.surface_mut().take();

        assert_eq!(scene.insert(50), Err(Error::DuplicateValue(50)));
        assert!(scene.surface_mut().take().is_empty());
    }

    #[test]
    fn fill_lands_every_value_below_the_bound() {
        let mut scene = scene();
        scene.insert(999).unwrap();

        scene.fill(8).unwrap();

        assert_eq!(scene.tree().len(), 8, "previous contents are replaced");
        assert_eq!(
            scene.tree().in_order(),
            (0..8_i64).collect::<alloc::vec::Vec<_>>(),
            "count distinct draws below count cover the whole range"
        );
    }

    #[test]
    fn fill_is_deterministic_per_seed() {
        let mut a = scene();
        let mut b = scene();
        a.fill(12).unwrap();
        b.fill(12).unwrap();
        assert_eq!(
            a.surface_mut().take(),
            b.surface_mut().take(),
            "same seed, same insertion order, same frame"
        );
    }

    #[test]
    fn fill_zero_just_clears() {
        let mut scene = scene();
        scene.insert(1).unwrap();

        scene.fill(0).unwrap();

        assert!(scene.tree().is_empty());
        let cmds = scene.surface_mut().take();
        assert!(cmds.iter().any(|c| matches!(c, DrawCmd::Clear(_))));
        assert_eq!(cmds.last(), Some(&DrawCmd::Present));
    }

    #[test]
    fn reset_visuals_clears_marks_everywhere() {
        use arbor_surface::VisualState;

        let mut scene = scene();
        let root = scene.insert(50).unwrap();
        scene.insert(30).unwrap();
        scene.surface_mut().take();

        // Reach in the way an animation step would.
        scene.tree.set_state(root, VisualState::Visited);
        scene.reset_visuals().unwrap();

        assert!(
            scene
                .tree()
                .filled()
                .all(|id| scene.tree().visual(id) == Some(VisualState::Default))
        );
        assert_eq!(scene.surface_mut().take().last(), Some(&DrawCmd::Present));
    }
}
