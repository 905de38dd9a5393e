// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Build a small tree synchronously and inspect layout and painting.
//!
//! Inserts a handful of values, prints the tree shape with its assigned
//! coordinates, and summarizes what one full repaint records on the
//! display list.
//!
//! Run:
//! - `cargo run -p arbor_demos --example tree_basics`

use arbor_surface::{DisplayList, DrawCmd};
use arbor_tree::{ManualScheduler, NodeId, Scene, Tree};

fn main() {
    let mut scene = Scene::new(ManualScheduler::new(), DisplayList::new());

    let values = [50, 30, 70, 20, 40, 60, 80, 65];
    for v in values {
        scene.insert(v).expect("values are distinct");
    }

    println!("Tree after {} inserts:", values.len());
    print_ascii_tree(scene.tree());

    // One full repaint, then summarize what the surface recorded.
    scene.surface_mut().take();
    scene.redraw_all();
    let cmds = scene.surface_mut().take();
    let edges = cmds
        .iter()
        .filter(|c| matches!(c, DrawCmd::Line { .. }))
        .count();
    let discs = cmds
        .iter()
        .filter(|c| matches!(c, DrawCmd::Circle { .. }))
        .count();
    println!("\n== Full repaint ==");
    println!("  commands: {}", cmds.len());
    println!("  edges:    {}", edges);
    println!("  discs:    {}", discs);

    // Duplicates are refused without touching the tree.
    let before = scene.tree().len();
    match scene.insert(50) {
        Err(e) => println!("\nInserting 50 again: {e}"),
        Ok(_) => unreachable!("50 is already present"),
    }
    assert_eq!(scene.tree().len(), before);

    println!("\nIn order: {:?}", scene.tree().in_order());
}

fn print_ascii_tree(tree: &Tree) {
    let root = tree.root();
    if !tree.is_filled(root) {
        println!("(empty)");
        return;
    }
    print_node("", tree, root);
    fn go(tree: &Tree, node: NodeId, prefix: &str) {
        let kids: Vec<NodeId> = [tree.left(node), tree.right(node)]
            .into_iter()
            .flatten()
            .filter(|&k| tree.is_filled(k))
            .collect();
        let len = kids.len();
        for (i, k) in kids.into_iter().enumerate() {
            let last = i + 1 == len;
            let branch = if last { "└── " } else { "├── " };
            print_node(&format!("{}{}", prefix, branch), tree, k);
            let next_prefix = if last {
                format!("{}    ", prefix)
            } else {
                format!("{}│   ", prefix)
            };
            go(tree, k, &next_prefix);
        }
    }
    go(tree, root, "");
}

fn print_node(prefix: &str, tree: &Tree, id: NodeId) {
    let value = tree.value(id).expect("only filled nodes are printed");
    match tree.position(id) {
        Some(p) => println!("{}{}  at ({:.0},{:.0})", prefix, value, p.x, p.y),
        None => println!("{}{}", prefix, value),
    }
}
