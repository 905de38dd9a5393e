// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Step-driven animations: insert and search walks, and the chained fill.
//!
//! An animation is a queue of scheduled steps. Starting one installs the run
//! state and arms a single tick; every scheduler fire is delivered to
//! [`Scene::tick`], which executes exactly one step and either arms the next
//! tick or reports the typed completion. Nothing here blocks and nothing
//! runs between ticks, so an embedder can drive a scene from any event loop
//! that can fire a timer.

use arbor_surface::{Surface, VisualState};

use crate::error::Error;
use crate::scene::Scene;
use crate::sched::TickScheduler;
use crate::types::NodeId;

/// Which animation a scene is running.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Activity {
    /// Nothing in flight.
    Idle,
    /// An insert walk.
    Insert,
    /// A search walk.
    Search,
    /// A chained random fill.
    Fill,
}

/// What one [`Scene::tick`] call did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Progress {
    /// Nothing was running.
    Idle,
    /// A step executed and the next tick is armed.
    Running,
    /// The animation finished with this completion.
    Done(Completion),
}

/// Terminal value of a finished animation.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Completion {
    /// An insert walk landed `value` in a fresh node.
    Inserted {
        /// The inserted value.
        value: i64,
        /// The node that received it.
        node: NodeId,
    },
    /// A search walk reached `value`.
    Found {
        /// The value searched for.
        value: i64,
        /// The node holding it.
        node: NodeId,
    },
    /// A search walk ran off the frontier without finding `value`.
    Missing {
        /// The value searched for.
        value: i64,
    },
    /// A fill landed all its values.
    Filled {
        /// How many values were inserted.
        count: u32,
    },
}

#[derive(Clone, Debug)]
pub(crate) enum Animation {
    Insert(InsertRun),
    Search(SearchRun),
    Fill(FillRun),
}

#[derive(Clone, Debug)]
pub(crate) struct InsertRun {
    value: i64,
    cursor: NodeId,
    phase: InsertPhase,
}

/// A walk, then one finishing tick that keeps the landed frame visible for
/// a full interval before the completion is delivered.
#[derive(Copy, Clone, Debug)]
enum InsertPhase {
    Walk,
    Finish(NodeId),
}

#[derive(Clone, Debug)]
pub(crate) struct SearchRun {
    value: i64,
    cursor: NodeId,
    phase: SearchPhase,
}

#[derive(Copy, Clone, Debug)]
enum SearchPhase {
    /// Mark the root before any comparison happens.
    Prime,
    Walk,
    Finish(Option<NodeId>),
}

#[derive(Clone, Debug)]
pub(crate) struct FillRun {
    remaining: u32,
    count: u32,
    leg: Option<InsertRun>,
}

impl InsertRun {
    fn new(value: i64, root: NodeId) -> Self {
        Self {
            value,
            cursor: root,
            phase: InsertPhase::Walk,
        }
    }
}

impl<S: TickScheduler, F: Surface> Scene<S, F> {
    /// Animate inserting `value`, one comparison per tick.
    ///
    /// A duplicate is refused up front with [`Error::DuplicateValue`]; the
    /// walk only starts for values that will land. Each tick paints the
    /// compared node, the landing tick performs the real insertion and
    /// paints the fresh node, and one further tick delivers
    /// [`Completion::Inserted`] so the final frame stays up for a full
    /// interval.
    pub fn insert_animated(&mut self, value: i64) -> Result<(), Error> {
        self.ensure_idle()?;
        if self.tree.search(value) {
            return Err(Error::DuplicateValue(value));
        }
        self.tree.reset_visuals();
        self.redraw_all();
        self.anim = Some(Animation::Insert(InsertRun::new(value, self.tree.root())));
        self.arm();
        log::debug!("insert animation started for {value}");
        Ok(())
    }

    /// Animate searching for `value`, one comparison per tick.
    ///
    /// The first tick marks the root before any comparison. After that,
    /// every comparison paints the half of the tree that cannot hold the
    /// value in one stroke and steps into the other half. Finding the value
    /// paints it and delivers [`Completion::Found`] one tick later; running
    /// off the frontier delivers [`Completion::Missing`] the same way.
    pub fn search_animated(&mut self, value: i64) -> Result<(), Error> {
        self.ensure_idle()?;
        self.tree.reset_visuals();
        self.redraw_all();
        self.anim = Some(Animation::Search(SearchRun {
            value,
            cursor: self.tree.root(),
            phase: SearchPhase::Prime,
        }));
        self.arm();
        log::debug!("search animation started for {value}");
        Ok(())
    }

    /// Clear the tree, then animate inserting `count` distinct random
    /// values drawn uniformly from `0..count`, one full insert walk each.
    ///
    /// Visual marks reset between walks. [`Completion::Filled`] arrives on
    /// the finishing tick of the last walk; `fill_animated(0)` just clears
    /// and completes on its first tick.
    pub fn fill_animated(&mut self, count: u32) -> Result<(), Error> {
        self.ensure_idle()?;
        self.tree.clear();
        self.redraw_all();
        let leg = (count > 0).then(|| {
            let value = self.draw_value(i64::from(count));
            InsertRun::new(value, self.tree.root())
        });
        self.anim = Some(Animation::Fill(FillRun {
            remaining: count,
            count,
            leg,
        }));
        self.arm();
        log::debug!("fill animation started for {count} values");
        Ok(())
    }

    /// Stop the running animation and report whether one was stopped.
    ///
    /// The armed tick is disarmed at the scheduler, so no stale step can
    /// fire afterwards and no completion will be delivered. The tree keeps
    /// whatever marks the cancelled run had painted;
    /// [`reset_visuals`](Scene::reset_visuals) clears them.
    pub fn cancel(&mut self) -> bool {
        if self.anim.take().is_none() {
            return false;
        }
        if let Some(tick) = self.pending.take() {
            self.sched.cancel(tick);
        }
        log::debug!("animation cancelled");
        true
    }

    /// Execute one scheduled animation step.
    ///
    /// The embedder calls this on every scheduler fire. At most one tick is
    /// armed at a time, so steps can never interleave or arrive out of
    /// order, and a completion always arrives through a later `tick` than
    /// the call that started the run.
    pub fn tick(&mut self) -> Progress {
        self.pending = None;
        let Some(anim) = self.anim.take() else {
            return Progress::Idle;
        };
        let progress = match anim {
            Animation::Insert(run) => self.step_insert(run),
            Animation::Search(run) => self.step_search(run),
            Animation::Fill(run) => self.step_fill(run),
        };
        match progress {
            Progress::Running => self.arm(),
            Progress::Done(completion) => {
                debug_assert!(self.anim.is_none(), "a finished run leaves no state");
                log::debug!("animation finished: {completion:?}");
            }
            Progress::Idle => {}
        }
        progress
    }

    /// Whether an animation is in flight.
    pub fn is_running(&self) -> bool {
        self.anim.is_some()
    }

    /// Which animation is in flight.
    pub fn activity(&self) -> Activity {
        match &self.anim {
            None => Activity::Idle,
            Some(Animation::Insert(_)) => Activity::Insert,
            Some(Animation::Search(_)) => Activity::Search,
            Some(Animation::Fill(_)) => Activity::Fill,
        }
    }

    // --- steps ---

    fn arm(&mut self) {
        debug_assert!(self.pending.is_none(), "at most one armed tick");
        self.pending = Some(self.sched.schedule(self.interval));
    }

    fn step_insert(&mut self, mut run: InsertRun) -> Progress {
        let value = run.value;
        match self.drive_insert(&mut run) {
            Some(node) => Progress::Done(Completion::Inserted { value, node }),
            None => {
                self.anim = Some(Animation::Insert(run));
                Progress::Running
            }
        }
    }

    /// One step of an insert walk, shared with fill legs. Returns the
    /// landed node once the finishing tick has been consumed.
    fn drive_insert(&mut self, run: &mut InsertRun) -> Option<NodeId> {
        if let InsertPhase::Finish(node) = run.phase {
            return Some(node);
        }
        match self.tree.value(run.cursor) {
            Some(at) => {
                self.tree.set_state(run.cursor, VisualState::Visited);
                self.redraw_node(run.cursor);
                run.cursor = if run.value < at {
                    self.tree.left(run.cursor)
                } else {
                    self.tree.right(run.cursor)
                }
                .expect("filled node has children");
                log::trace!("insert walk of {} visits {at}", run.value);
            }
            None => {
                // The walk reached the frontier slot; do the real insert.
                let cursor = run.cursor;
                let inserted = self
                    .tree
                    .insert(run.value)
                    .expect("duplicates are rejected before the walk starts");
                debug_assert_eq!(inserted.node, cursor, "the walk tracked the descent");
                self.tree.assign_coords(inserted.moved);
                self.tree.set_state(inserted.node, VisualState::Success);
                if inserted.moved == inserted.node {
                    self.redraw_node(inserted.node);
                } else {
                    self.redraw_all();
                }
                run.phase = InsertPhase::Finish(inserted.node);
                log::trace!("insert walk landed {}", run.value);
            }
        }
        None
    }

    fn step_search(&mut self, mut run: SearchRun) -> Progress {
        match run.phase {
            SearchPhase::Prime => {
                self.tree.set_state(run.cursor, VisualState::Visited);
                if self.tree.is_filled(run.cursor) {
                    self.redraw_node(run.cursor);
                }
                run.phase = SearchPhase::Walk;
            }
            SearchPhase::Walk => {
                let Some(at) = self.tree.value(run.cursor) else {
                    // Ran off the frontier without a match.
                    run.phase = SearchPhase::Finish(None);
                    self.anim = Some(Animation::Search(run));
                    return Progress::Running;
                };
                if at == run.value {
                    self.tree.set_state(run.cursor, VisualState::Success);
                    self.redraw_node(run.cursor);
                    run.phase = SearchPhase::Finish(Some(run.cursor));
                    self.anim = Some(Animation::Search(run));
                    return Progress::Running;
                }
                // Rule out the half that cannot hold the value in one
                // stroke, then step into the other half.
                let (cut, next) = if run.value < at {
                    (self.tree.right(run.cursor), self.tree.left(run.cursor))
                } else {
                    (self.tree.left(run.cursor), self.tree.right(run.cursor))
                };
                let cut = cut.expect("filled node has children");
                let next = next.expect("filled node has children");
                self.tree.set_subtree_state(cut, VisualState::Failure);
                if self.tree.is_filled(cut) {
                    self.redraw_subtree(cut);
                }
                self.tree.set_state(next, VisualState::Visited);
                if self.tree.is_filled(next) {
                    self.redraw_node(next);
                }
                log::trace!("search walk of {} passes {at}", run.value);
                run.cursor = next;
            }
            SearchPhase::Finish(found) => {
                let value = run.value;
                return Progress::Done(match found {
                    Some(node) => Completion::Found { value, node },
                    None => Completion::Missing { value },
                });
            }
        }
        self.anim = Some(Animation::Search(run));
        Progress::Running
    }

    fn step_fill(&mut self, mut run: FillRun) -> Progress {
        let Some(mut leg) = run.leg.take() else {
            return Progress::Done(Completion::Filled { count: run.count });
        };
        match self.drive_insert(&mut leg) {
            None => {
                run.leg = Some(leg);
                self.anim = Some(Animation::Fill(run));
                Progress::Running
            }
            Some(_) => {
                run.remaining -= 1;
                if run.remaining == 0 {
                    return Progress::Done(Completion::Filled { count: run.count });
                }
                // Start the next walk with a clean slate.
                let value = self.draw_value(i64::from(run.count));
                self.tree.reset_visuals();
                self.redraw_all();
                run.leg = Some(InsertRun::new(value, self.tree.root()));
                log::trace!("fill advances, {} values to go", run.remaining);
                self.anim = Some(Animation::Fill(run));
                Progress::Running
            }
        }
    }
}
