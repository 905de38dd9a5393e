// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drive insert, search, and fill animations from a manual pump.
//!
//! The scene arms one tick per step on its scheduler; this demo plays the
//! embedder, sleeping each requested delay before feeding the fire back
//! through `tick()`. With simplelog installed, the library's own debug
//! logs interleave with the step trace.
//!
//! Run:
//! - `cargo run -p arbor_demos --example tree_animation`

use std::time::Duration;

use arbor_surface::DisplayList;
use arbor_tree::{Completion, ManualScheduler, Progress, Scene};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

fn main() {
    TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .expect("failed to initialize logger");

    let mut scene = Scene::new(ManualScheduler::new(), DisplayList::new());
    scene.set_interval(Duration::from_millis(40));

    for v in [50, 30, 70] {
        scene.insert(v).expect("values are distinct");
    }
    scene.surface_mut().take();

    println!("== Animated insert of 42 ==");
    scene.insert_animated(42).expect("scene is idle");
    // A second animation on the same scene is refused, not queued.
    match scene.search_animated(30) {
        Err(e) => println!("  starting a search now fails: {e}"),
        Ok(()) => unreachable!("an insert is running"),
    }
    let done = pump(&mut scene);
    println!("  completion: {done:?}");

    println!("\n== Animated search for 70 ==");
    scene.search_animated(70).expect("scene is idle");
    let done = pump(&mut scene);
    println!("  completion: {done:?}");

    println!("\n== Cancel mid-search ==");
    scene.search_animated(31).expect("scene is idle");
    let _ = scene.scheduler_mut().fire_next();
    let _ = scene.tick();
    let cancelled = scene.cancel();
    println!("  cancelled: {cancelled}; no completion will be delivered");
    scene.reset_visuals().expect("scene is idle");

    println!("\n== Animated fill of a fresh tree ==");
    scene.fill_animated(6).expect("scene is idle");
    let done = pump(&mut scene);
    println!("  completion: {done:?}");
    println!("  in order: {:?}", scene.tree().in_order());
}

/// Fire each armed tick after its requested delay until the run completes.
fn pump(scene: &mut Scene<ManualScheduler, DisplayList>) -> Completion {
    loop {
        let (_, delay) = scene
            .scheduler_mut()
            .fire_next()
            .expect("a tick is armed while the animation runs");
        std::thread::sleep(delay);
        match scene.tick() {
            Progress::Running => {
                let painted = scene.surface_mut().take().len();
                println!("  step: {painted} draw commands");
            }
            Progress::Done(done) => return done,
            Progress::Idle => unreachable!("the pump only runs while animating"),
        }
    }
}
