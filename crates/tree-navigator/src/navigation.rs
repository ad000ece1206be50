//! Viewport state and directional navigation
//!
//! The controller owns only the viewport (selected id + level). Every move
//! reads the current [`TreeIndex`] passed in by the caller, and every move is
//! a no-op when its precondition does not hold: the data may be incomplete
//! while a refresh is in flight, so nothing here panics or errors.

use crate::tree::{ChildSlot, NodeId, Tree, TreeIndex};
use derive_more::Display;
use log::{debug, trace, warn};
use std::collections::HashSet;

/// Depth of the selection below the root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Level {
    /// Known distance from the root
    #[display(fmt = "{}", _0)]
    Depth(usize),
    /// The selection is not connected to the root
    #[display(fmt = "unreachable")]
    Unreachable,
}

impl Level {
    /// The depth, if known
    pub fn depth(self) -> Option<usize> {
        match self {
            Level::Depth(depth) => Some(depth),
            Level::Unreachable => None,
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::Depth(0)
    }
}

/// The focused node and its level
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Viewport {
    /// Selected node; `None` only when the snapshot has no root
    pub selected: Option<NodeId>,
    pub level: Level,
}

impl Viewport {
    pub fn new(selected: Option<NodeId>, level: Level) -> Self {
        Self { selected, level }
    }
}

/// Owns the viewport and applies navigation moves
#[derive(Debug, Clone, Default)]
pub struct NavigationController {
    viewport: Viewport,
}

impl NavigationController {
    /// A controller focused on the root of `index`
    pub fn new(index: &TreeIndex) -> Self {
        let mut controller = Self::default();
        controller.to_top(index);
        controller
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn selected(&self) -> Option<&NodeId> {
        self.viewport.selected.as_ref()
    }

    pub fn level(&self) -> Level {
        self.viewport.level
    }

    /// Focus the root at level 0
    ///
    /// Always applies, even when the root id does not resolve.
    pub fn to_top(&mut self, index: &TreeIndex) {
        self.viewport = Viewport::new(index.root_id().cloned(), Level::Depth(0));
        trace!("Viewport moved to top: {:?}", self.viewport);
    }

    /// Focus a node and recompute its level from the root
    ///
    /// Ids that do not resolve leave the viewport unchanged. A node that is
    /// not connected to the root gets [`Level::Unreachable`].
    pub fn select_node(&mut self, index: &TreeIndex, id: &NodeId) -> bool {
        if index.lookup(id).is_none() {
            debug!("Ignoring selection of unknown node {}", id);
            return false;
        }

        self.viewport = Viewport::new(Some(id.clone()), level_of(index, id));
        trace!("Viewport selected: {:?}", self.viewport);
        true
    }

    /// Move to the parent of the selection
    ///
    /// No-op at the root or when the selection has no parent. The level is
    /// recomputed for the parent, so a node reached through a link that
    /// `parent_of` does not confirm never reports a depth.
    pub fn up_one_level(&mut self, index: &TreeIndex) -> bool {
        let Some(selected) = self.viewport.selected.as_ref() else {
            return false;
        };
        if index.root_id() == Some(selected) {
            return false;
        }
        let Some(parent) = index.parent_of(selected) else {
            return false;
        };

        let level = level_of(index, parent);
        self.viewport = Viewport::new(Some(parent.clone()), level);
        trace!("Viewport moved up: {:?}", self.viewport);
        true
    }

    /// Move one step into the left child
    pub fn to_left_child(&mut self, index: &TreeIndex) -> bool {
        self.descend(index, ChildSlot::Left, 1)
    }

    /// Move one step into the right child
    pub fn to_right_child(&mut self, index: &TreeIndex) -> bool {
        self.descend(index, ChildSlot::Right, 1)
    }

    /// Follow left children until the chain ends
    pub fn to_bottom_left(&mut self, index: &TreeIndex) -> bool {
        self.descend(index, ChildSlot::Left, usize::MAX)
    }

    /// Follow right children until the chain ends
    pub fn to_bottom_right(&mut self, index: &TreeIndex) -> bool {
        self.descend(index, ChildSlot::Right, usize::MAX)
    }

    /// Follow one slot for at most `max_steps` steps
    ///
    /// Stops at an empty slot, a dangling reference, or a revisited id, and
    /// never takes more steps than the snapshot has nodes. The level of the
    /// node reached comes from its parent links, not from the steps taken.
    fn descend(&mut self, index: &TreeIndex, slot: ChildSlot, max_steps: usize) -> bool {
        let Some(start) = self.viewport.selected.clone() else {
            return false;
        };
        if index.lookup(&start).is_none() {
            return false;
        }

        let bound = max_steps.min(index.len());
        let mut visited = HashSet::from([&start]);
        let mut current = &start;
        let mut steps = 0;

        while steps < bound {
            let Some(next) = index.child(current, slot) else {
                break;
            };
            if !visited.insert(&next.id) {
                warn!(
                    "Cycle detected following {} children from {}: {} repeats",
                    slot, start, next.id
                );
                break;
            }
            current = &next.id;
            steps += 1;
        }

        if steps == 0 {
            return false;
        }

        let level = level_of(index, current);
        self.viewport = Viewport::new(Some(current.clone()), level);
        trace!("Viewport moved {} by {} steps: {:?}", slot, steps, self.viewport);
        true
    }
}

/// Level of a resolvable node, counted along `parent_of` links to the root
fn level_of(index: &TreeIndex, id: &NodeId) -> Level {
    match index.depth(id) {
        Some(depth) => Level::Depth(depth),
        None => {
            debug!("Node {} is not reachable from the root", id);
            Level::Unreachable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{FlatNodeStore, NodeRecord};

    fn index(records: Vec<NodeRecord>, root: &str) -> TreeIndex {
        TreeIndex::build(&FlatNodeStore::new(records, Some(root.into())))
    }

    #[test]
    fn test_level_helpers() {
        assert_eq!(Level::Depth(4).depth(), Some(4));
        assert_eq!(Level::Unreachable.depth(), None);
        assert_eq!(Level::Depth(2).to_string(), "2");
        assert_eq!(Level::Unreachable.to_string(), "unreachable");
    }

    #[test]
    fn test_new_controller_starts_at_root() {
        let index = index(vec![NodeRecord::new("r")], "r");
        let controller = NavigationController::new(&index);

        assert_eq!(controller.selected(), Some(&"r".into()));
        assert_eq!(controller.level(), Level::Depth(0));
    }

    #[test]
    fn test_descend_stops_on_cycle() {
        // 1 -> 2 -> 3 -> 2 on the left; 3 is the last record claiming 2
        let index = index(
            vec![
                NodeRecord::new("1").left("2"),
                NodeRecord::new("2").left("3"),
                NodeRecord::new("3").left("2"),
            ],
            "1",
        );
        let mut controller = NavigationController::new(&index);

        assert!(controller.to_bottom_left(&index));
        assert_eq!(controller.selected(), Some(&"3".into()));
        assert_eq!(controller.level(), Level::Unreachable);

        // From 3 the chain closes after one step
        assert!(controller.to_bottom_left(&index));
        assert_eq!(controller.selected(), Some(&"2".into()));
        assert_eq!(controller.level(), Level::Unreachable);
    }

    #[test]
    fn test_self_loop_is_no_movement() {
        let index = index(vec![NodeRecord::new("1").right("1")], "1");
        let mut controller = NavigationController::new(&index);

        assert!(!controller.to_bottom_right(&index));
        assert!(!controller.to_right_child(&index));
        assert_eq!(controller.viewport(), &Viewport::new(Some("1".into()), Level::Depth(0)));
    }

    #[test]
    fn test_moves_without_root_are_noops() {
        let index = TreeIndex::build(&FlatNodeStore::empty());
        let mut controller = NavigationController::new(&index);

        assert_eq!(controller.viewport(), &Viewport::default());
        assert!(!controller.up_one_level(&index));
        assert!(!controller.to_bottom_left(&index));
        assert!(!controller.select_node(&index, &"1".into()));
        assert_eq!(controller.viewport(), &Viewport::default());
    }

    #[test]
    fn test_unresolved_root_descends_nowhere() {
        let index = index(vec![NodeRecord::new("a").left("b")], "missing");
        let mut controller = NavigationController::new(&index);

        assert_eq!(controller.selected(), Some(&"missing".into()));
        assert!(!controller.to_left_child(&index));
        assert!(!controller.up_one_level(&index));
    }
}
