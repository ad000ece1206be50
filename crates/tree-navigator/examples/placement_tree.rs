//! CLI example that builds a large placement tree and navigates it
//!
//! Usage:
//!   cargo run --example placement_tree [node-count]
//!
//! Nodes are numbered heap-style (children of `n` are `2n` and `2n + 1`), and
//! the last node points at children that do not exist, so the bottom of the
//! tree shows placeholders.

use std::env;
use tree_navigator::prelude::*;

fn main() {
    let args: Vec<String> = env::args().collect();
    let count: u64 = match args.get(1).map(|arg| arg.parse()) {
        Some(Ok(count)) if count > 0 => count,
        Some(_) => {
            eprintln!("node-count must be a positive integer");
            std::process::exit(1);
        }
        None => 100_000,
    };

    println!("Generating {} nodes...", count);
    let store = FlatNodeStore::new(generate(count), Some(NodeId::from(1u64)));

    let options = NavigatorOptions::default()
        .max_depth(2)
        .status_color("active", "#2e7d32")
        .detail_field(FieldSpec::new("Generation", "generation"))
        .detail_field(FieldSpec::new("Points", "points").fallback("0"));

    let mut navigator = match TreeNavigator::new(store, options) {
        Ok(navigator) => navigator,
        Err(e) => {
            eprintln!("Error creating navigator: {:#}", e);
            std::process::exit(1);
        }
    };

    let root = NodeId::from(1u64);
    let (left, right) = navigator.leg_sizes(&root);
    println!();
    println!("Total nodes: {}", navigator.index().len());
    println!("Left leg: {}  Right leg: {}", left, right);
    println!("═══════════════════════════════");

    println!("{}", navigator.render_window());

    navigator.to_bottom_left();
    println!("After bottom-left:");
    println!("{}", navigator.render_window());

    navigator.to_top();
    navigator.to_bottom_right();
    navigator.up_one_level();
    println!("After bottom-right, then up:");
    println!("{}", navigator.render_window());

    for event in navigator.drain_events() {
        println!("{:?}", event);
    }
}

/// Build heap-numbered records; the last node carries dangling references
fn generate(count: u64) -> Vec<NodeRecord> {
    (1..=count)
        .map(|n| {
            let mut record = NodeRecord::new(n)
                .name(format!("Member {}", n))
                .status(if n % 3 == 0 { "inactive" } else { "active" })
                .stat("generation", 64 - n.leading_zeros() - 1)
                .stat("points", n * 10 % 97);
            if 2 * n <= count || n == count {
                record = record.left(2 * n);
            }
            if 2 * n < count || n == count {
                record = record.right(2 * n + 1);
            }
            record
        })
        .collect()
}
