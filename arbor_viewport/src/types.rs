// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input types delivered by the embedder.

use bitflags::bitflags;
use kurbo::Vec2;

bitflags! {
    /// Pointer buttons held during an interaction.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct PointerButtons: u8 {
        /// The primary button, usually the left one.
        const PRIMARY   = 0b0000_0001;
        /// The secondary button, usually the right one.
        const SECONDARY = 0b0000_0010;
        /// The middle button or wheel press.
        const MIDDLE    = 0b0000_0100;
    }
}

/// One pointer interaction, in screen coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PointerInput {
    /// The pointer moved with buttons held.
    Drag {
        /// Buttons held during the move.
        buttons: PointerButtons,
        /// Movement since the previous event, in screen pixels.
        delta: Vec2,
    },
    /// The wheel turned.
    Wheel {
        /// Scroll delta; positive `y` rolls toward the user.
        delta: Vec2,
    },
}

/// Which way a zoom step goes.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ZoomDirection {
    /// Magnify.
    In,
    /// Shrink.
    Out,
    /// Leave the zoom level alone.
    Neutral,
}

impl ZoomDirection {
    /// Map a wheel delta to a direction: rolling away zooms in.
    pub fn from_wheel(delta: Vec2) -> Self {
        if delta.y < 0.0 {
            Self::In
        } else if delta.y > 0.0 {
            Self::Out
        } else {
            Self::Neutral
        }
    }
}
