//! Interactive terminal viewer for a node snapshot
//!
//! Usage:
//!   tree-navigator <snapshot.json> [root-id|-] [options.json]
//!
//! Reads commands from stdin, one per line:
//!   t        back to the root
//!   u        up one level
//!   l / r    step into the left / right child
//!   L / R    go to the bottom-left / bottom-right node
//!   s <id>   select a node
//!   a <id>   activate a node
//!   q        quit

use anyhow::{bail, Context, Result};
use log::info;
use std::env;
use std::io::{self, BufRead};
use tree_navigator::prelude::*;

/// One parsed line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Top,
    Up,
    Left,
    Right,
    BottomLeft,
    BottomRight,
    Select(NodeId),
    Activate(NodeId),
    Quit,
}

impl Command {
    fn parse(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let command = match (parts.next()?, parts.next()) {
            ("t", None) => Command::Top,
            ("u", None) => Command::Up,
            ("l", None) => Command::Left,
            ("r", None) => Command::Right,
            ("L", None) => Command::BottomLeft,
            ("R", None) => Command::BottomRight,
            ("q", None) => Command::Quit,
            ("s", Some(id)) => Command::Select(NodeId::from(id)),
            ("a", Some(id)) => Command::Activate(NodeId::from(id)),
            _ => return None,
        };
        parts.next().is_none().then_some(command)
    }
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        bail!("usage: {} <snapshot.json> [root-id|-] [options.json]", args[0]);
    }

    let root = args
        .get(2)
        .filter(|arg| arg.as_str() != "-")
        .map(|arg| NodeId::from(arg.as_str()));
    let options = match args.get(3) {
        Some(path) => NavigatorOptions::from_json_file(path)?,
        None => NavigatorOptions::default(),
    };

    let store = FlatNodeStore::from_json_file(&args[1], root)?;
    info!("Loaded {} records from {}", store.len(), args[1]);

    let mut navigator = TreeNavigator::new(store, options)?;
    print_window(&navigator);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read command")?;
        if line.trim().is_empty() {
            continue;
        }

        let Some(command) = Command::parse(&line) else {
            println!("Unknown command: {}", line.trim());
            continue;
        };

        let moved = match command {
            Command::Quit => break,
            Command::Top => navigator.to_top(),
            Command::Up => navigator.up_one_level(),
            Command::Left => navigator.to_left_child(),
            Command::Right => navigator.to_right_child(),
            Command::BottomLeft => navigator.to_bottom_left(),
            Command::BottomRight => navigator.to_bottom_right(),
            Command::Select(id) => navigator.click(&id),
            Command::Activate(id) => navigator.activate(&id),
        };
        if !moved {
            println!("(no movement)");
        }

        for event in navigator.drain_events() {
            match event {
                NavigatorEvent::NodeSelected(id) => println!("selected {}", id),
                NavigatorEvent::NodeActivated(id) => print_details(&navigator, &id),
            }
        }
        print_window(&navigator);
    }

    Ok(())
}

fn print_window(navigator: &TreeNavigator) {
    println!();
    let crumbs: Vec<String> = navigator
        .breadcrumb()
        .iter()
        .map(|id| id.to_string())
        .collect();
    if !crumbs.is_empty() {
        println!("path: {}", crumbs.join(" > "));
    }
    print!("{}", navigator.render_window());
}

fn print_details(navigator: &TreeNavigator, id: &NodeId) {
    let Some(record) = navigator.index().lookup(id) else {
        return;
    };
    let (left, right) = navigator.leg_sizes(id);

    println!("═══════════════════════════════");
    println!("{} #{}", record.display_name, record.id);
    println!("  status: {}", record.status_tag);
    println!("  left leg: {}  right leg: {}", left, right);
    for row in navigator.details(id).unwrap_or_default() {
        println!("  {}: {}", row.label, row.value);
    }
    println!("═══════════════════════════════");
}
