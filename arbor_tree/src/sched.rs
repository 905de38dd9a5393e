// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick scheduling capability and the deterministic in-crate scheduler.

use alloc::collections::VecDeque;
use core::time::Duration;

/// Opaque handle to one armed tick.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct TickId(u64);

/// Timer capability injected into a [`Scene`](crate::Scene).
///
/// The scene arms at most one tick at a time and cancels it by id; a
/// cancelled tick must never fire. Implementations map [`schedule`] onto the
/// embedder's timing machinery (an event-loop timer, a frame callback, a
/// test queue) and deliver each fire by calling
/// [`Scene::tick`](crate::Scene::tick).
///
/// [`schedule`]: TickScheduler::schedule
pub trait TickScheduler {
    /// Arm a tick that should fire after `after`.
    fn schedule(&mut self, after: Duration) -> TickId;

    /// Disarm a previously scheduled tick.
    ///
    /// Ignores ids that already fired or were never issued.
    fn cancel(&mut self, id: TickId);
}

/// Deterministic FIFO scheduler driven by hand.
///
/// Armed ticks queue up with their requested delays and [`fire_next`] pops
/// the oldest. An embedder without a native timer sleeps the returned delay
/// itself; tests ignore it and pump as fast as they like.
///
/// [`fire_next`]: ManualScheduler::fire_next
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    queue: VecDeque<(TickId, Duration)>,
    next: u64,
}

impl ManualScheduler {
    /// Create a scheduler with nothing armed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pop the oldest armed tick together with its requested delay.
    pub fn fire_next(&mut self) -> Option<(TickId, Duration)> {
        self.queue.pop_front()
    }

    /// Number of currently armed ticks.
    pub fn armed(&self) -> usize {
        self.queue.len()
    }
}

impl TickScheduler for ManualScheduler {
    fn schedule(&mut self, after: Duration) -> TickId {
        let id = TickId(self.next);
        self.next += 1;
        self.queue.push_back((id, after));
        id
    }

    fn cancel(&mut self, id: TickId) {
        self.queue.retain(|&(armed, _)| armed != id);
    }
}
