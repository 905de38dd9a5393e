// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan and zoom a scene with a synthetic pointer stream.
//!
//! Feeds drags and wheel turns through the viewport's scene adapter and
//! prints how the surface transform and the repaints evolve. The transform
//! persists on the surface, so tree edits afterwards draw through it
//! unchanged.
//!
//! Run:
//! - `cargo run -p arbor_demos --example viewport_pan_zoom`

use arbor_surface::{DisplayList, Surface};
use arbor_tree::{ManualScheduler, Scene};
use arbor_viewport::adapters::scene::handle_scene;
use arbor_viewport::types::{PointerButtons, PointerInput};
use arbor_viewport::viewport::Viewport;
use kurbo::{Size, Vec2};

fn main() {
    let mut scene = Scene::new(ManualScheduler::new(), DisplayList::new());
    let mut viewport = Viewport::new();
    viewport.set_size(Size::new(800.0, 600.0));

    for v in [50, 30, 70, 20, 40] {
        scene.insert(v).expect("values are distinct");
    }
    scene.surface_mut().take();

    let stream = [
        PointerInput::Drag {
            buttons: PointerButtons::PRIMARY,
            delta: Vec2::new(60.0, 25.0),
        },
        PointerInput::Drag {
            buttons: PointerButtons::PRIMARY,
            delta: Vec2::new(-15.0, 10.0),
        },
        PointerInput::Wheel {
            delta: Vec2::new(0.0, -120.0),
        },
        PointerInput::Wheel {
            delta: Vec2::new(0.0, -120.0),
        },
        PointerInput::Drag {
            buttons: PointerButtons::SECONDARY,
            delta: Vec2::new(99.0, 0.0),
        },
        PointerInput::Wheel {
            delta: Vec2::new(0.0, 120.0),
        },
    ];

    println!("Routing {} pointer events:", stream.len());
    for input in stream {
        let handled = handle_scene(&mut viewport, &mut scene, input);
        println!(
            "  {:?}\n    handled: {}  frame commands: {}  presents: {}",
            input,
            handled,
            scene.surface().since_last_clear().len(),
            scene.surface().presents(),
        );
        scene.surface_mut().take();
    }

    println!("\nFinal zoom: {:.3}", viewport.zoom());
    println!(
        "Final offset: ({:.1}, {:.1})",
        viewport.offset().x,
        viewport.offset().y
    );
    println!("Final transform: {:?}", scene.surface().transform());

    // The transform persists across tree mutations.
    let t = scene.surface().transform();
    scene.insert(65).expect("value is distinct");
    assert_eq!(scene.surface().transform(), t);
    println!("Insert of 65 drew through the same transform.");
}
