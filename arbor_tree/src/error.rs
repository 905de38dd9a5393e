// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors surfaced by tree mutation and animation control.

use thiserror::Error;

/// Why a tree or scene operation was refused.
///
/// Refusals are clean: the tree, the running animation, and the surface are
/// all left exactly as they were.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// An animation is in progress. Wait for its completion, or
    /// [`cancel`](crate::scene::Scene::cancel) it first.
    #[error("an animation is already running")]
    AnimationRunning,
    /// The value is already in the tree.
    #[error("value {0} is already in the tree")]
    DuplicateValue(i64),
}
