//! Core tree traits for binary relationship trees

use crate::tree::{ChildSlot, NodeId};
use std::collections::{HashSet, VecDeque};

/// A binary tree whose links may be incomplete or corrupt
///
/// Implementations provide resolution of ids, parents and child slots; the
/// derived methods walk those links. Every derived walk is bounded by
/// [`Tree::node_count`], so a cycle in the data ends the walk instead of
/// looping.
pub trait Tree {
    /// Data stored at each node
    type Node;

    /// The root id, if the tree has one
    fn root(&self) -> Option<&NodeId>;

    /// Get a node by its id
    ///
    /// Returns `None` if the id does not resolve.
    fn get(&self, id: &NodeId) -> Option<&Self::Node>;

    /// Get the parent of a node
    fn parent(&self, id: &NodeId) -> Option<&NodeId>;

    /// The resolved child id in a slot
    ///
    /// Returns `None` for an empty slot and for a reference that does not
    /// resolve.
    fn child_id(&self, id: &NodeId, slot: ChildSlot) -> Option<&NodeId>;

    /// Count distinct nodes in the tree
    fn node_count(&self) -> usize;

    /// Resolved children, left first
    fn children(&self, id: &NodeId) -> Vec<&NodeId> {
        ChildSlot::BOTH
            .into_iter()
            .filter_map(|slot| self.child_id(id, slot))
            .collect()
    }

    /// Check if a node has no resolvable children
    ///
    /// Returns false for ids that do not resolve.
    fn is_leaf(&self, id: &NodeId) -> bool {
        self.get(id).is_some() && self.children(id).is_empty()
    }

    /// Ancestors of a node, from parent upwards
    ///
    /// Stops at the first node without a parent or when an ancestor repeats.
    fn ancestors(&self, id: &NodeId) -> Vec<NodeId> {
        let mut ancestors = Vec::new();
        let mut seen = HashSet::from([id.clone()]);
        let mut current = self.parent(id);
        while let Some(parent_id) = current {
            if !seen.insert(parent_id.clone()) || ancestors.len() >= self.node_count() {
                break;
            }
            ancestors.push(parent_id.clone());
            current = self.parent(parent_id);
        }
        ancestors
    }

    /// Distance from the root (root = 0)
    ///
    /// Returns `None` when the node does not resolve or the upward walk does
    /// not reach the root within `node_count` steps.
    fn depth(&self, id: &NodeId) -> Option<usize> {
        let root = self.root()?;
        self.get(id)?;

        let mut current = id;
        let mut steps = 0;
        while current != root {
            if steps >= self.node_count() {
                return None;
            }
            current = self.parent(current)?;
            steps += 1;
        }
        Some(steps)
    }

    /// Ids from the root down to the node, both included
    ///
    /// Returns `None` when the node is not reachable from the root.
    fn path_from_root(&self, id: &NodeId) -> Option<Vec<NodeId>> {
        let depth = self.depth(id)?;
        let mut path = Vec::with_capacity(depth + 1);
        path.push(id.clone());
        path.extend(self.ancestors(id).into_iter().take(depth));
        path.reverse();
        Some(path)
    }

    /// Check if a node is an ancestor of another
    fn is_ancestor_of(&self, ancestor: &NodeId, descendant: &NodeId) -> bool {
        self.ancestors(descendant).iter().any(|id| id == ancestor)
    }
}

/// Traversal order for walking the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// Visit parent before children (top-down, left before right)
    PreOrder,
    /// Visit level by level
    BreadthFirst,
}

/// Extension trait providing traversal utilities
///
/// Automatically implemented for all types that implement `Tree`.
pub trait TreeTraversal: Tree {
    /// Walk the tree from the root in the specified order
    fn walk(&self, order: TraversalOrder) -> TreeWalker<'_, Self>
    where
        Self: Sized,
    {
        match self.root() {
            Some(root) => TreeWalker::new(self, root, order),
            None => TreeWalker::empty(self, order),
        }
    }

    /// Walk the tree starting from a specific node
    fn walk_from(&self, start: &NodeId, order: TraversalOrder) -> TreeWalker<'_, Self>
    where
        Self: Sized,
    {
        TreeWalker::new(self, start, order)
    }

    /// Number of distinct nodes reachable from `id`, itself included
    ///
    /// Returns 0 for ids that do not resolve.
    fn subtree_size(&self, id: &NodeId) -> usize
    where
        Self: Sized,
    {
        self.walk_from(id, TraversalOrder::PreOrder).count()
    }

    /// Size of the subtree hanging off one slot
    fn leg_size(&self, id: &NodeId, slot: ChildSlot) -> usize
    where
        Self: Sized,
    {
        self.child_id(id, slot)
            .map(|child| self.subtree_size(child))
            .unwrap_or(0)
    }

    /// Leaves reachable from the root
    fn leaves(&self) -> Vec<NodeId>
    where
        Self: Sized,
    {
        self.walk(TraversalOrder::PreOrder)
            .filter(|id| self.is_leaf(id))
            .collect()
    }

    /// Find reachable nodes matching a predicate
    fn find<F>(&self, predicate: F) -> Vec<NodeId>
    where
        F: Fn(&Self::Node) -> bool,
        Self: Sized,
    {
        self.walk(TraversalOrder::PreOrder)
            .filter(|id| self.get(id).map(&predicate).unwrap_or(false))
            .collect()
    }
}

// Blanket implementation for all Tree types
impl<T: Tree> TreeTraversal for T {}

/// Iterator for traversing a tree
///
/// Each id is yielded at most once, so cyclic links terminate the walk.
pub struct TreeWalker<'a, T: Tree + ?Sized> {
    tree: &'a T,
    order: TraversalOrder,
    pending: VecDeque<NodeId>,
    visited: HashSet<NodeId>,
}

impl<'a, T: Tree + ?Sized> TreeWalker<'a, T> {
    /// Create a new tree walker starting from the given node
    ///
    /// A start id that does not resolve yields nothing.
    pub fn new(tree: &'a T, start: &NodeId, order: TraversalOrder) -> Self {
        let mut walker = Self::empty(tree, order);
        if tree.get(start).is_some() {
            walker.pending.push_back(start.clone());
        }
        walker
    }

    fn empty(tree: &'a T, order: TraversalOrder) -> Self {
        Self {
            tree,
            order,
            pending: VecDeque::new(),
            visited: HashSet::new(),
        }
    }
}

impl<'a, T: Tree + ?Sized> Iterator for TreeWalker<'a, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            // Pre-order treats the deque as a stack, breadth-first as a queue
            let current = match self.order {
                TraversalOrder::PreOrder => self.pending.pop_back()?,
                TraversalOrder::BreadthFirst => self.pending.pop_front()?,
            };
            if !self.visited.insert(current.clone()) {
                continue;
            }

            let children: Vec<NodeId> = self.tree.children(&current).into_iter().cloned().collect();
            match self.order {
                TraversalOrder::PreOrder => {
                    // Reverse so the left child is popped first
                    self.pending.extend(children.into_iter().rev());
                }
                TraversalOrder::BreadthFirst => self.pending.extend(children),
            }

            return Some(current);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{FlatNodeStore, NodeRecord, TreeIndex};

    fn index(records: Vec<NodeRecord>, root: &str) -> TreeIndex {
        TreeIndex::build(&FlatNodeStore::new(records, Some(root.into())))
    }

    fn ids(raw: &[&str]) -> Vec<NodeId> {
        raw.iter().map(|&id| NodeId::from(id)).collect()
    }

    fn sample() -> TreeIndex {
        //        1
        //      /   \
        //     2     3
        //    / \   /
        //   5   6 4
        index(
            vec![
                NodeRecord::new("1").left("2").right("3"),
                NodeRecord::new("2").left("5").right("6"),
                NodeRecord::new("3").left("4"),
                NodeRecord::new("4"),
                NodeRecord::new("5"),
                NodeRecord::new("6"),
            ],
            "1",
        )
    }

    #[test]
    fn test_depth_and_path() {
        let tree = sample();

        assert_eq!(tree.depth(&"1".into()), Some(0));
        assert_eq!(tree.depth(&"4".into()), Some(2));
        assert_eq!(tree.depth(&"nope".into()), None);
        assert_eq!(tree.path_from_root(&"6".into()), Some(ids(&["1", "2", "6"])));
        assert!(tree.is_ancestor_of(&"1".into(), &"4".into()));
        assert!(!tree.is_ancestor_of(&"2".into(), &"4".into()));
    }

    #[test]
    fn test_depth_of_detached_node() {
        let tree = index(
            vec![
                NodeRecord::new("1").left("2"),
                NodeRecord::new("2"),
                NodeRecord::new("x").left("y"),
                NodeRecord::new("y"),
            ],
            "1",
        );

        assert_eq!(tree.depth(&"y".into()), None);
        assert_eq!(tree.path_from_root(&"y".into()), None);
        assert_eq!(tree.ancestors(&"y".into()), ids(&["x"]));
    }

    #[test]
    fn test_depth_with_parent_cycle() {
        // a <-> b never reaches the root
        let tree = index(
            vec![
                NodeRecord::new("root"),
                NodeRecord::new("a").left("b"),
                NodeRecord::new("b").left("a"),
            ],
            "root",
        );

        assert_eq!(tree.depth(&"a".into()), None);
        assert_eq!(tree.ancestors(&"a".into()), ids(&["b"]));
    }

    #[test]
    fn test_traversal_orders() {
        let tree = sample();

        let pre: Vec<_> = tree.walk(TraversalOrder::PreOrder).collect();
        assert_eq!(pre, ids(&["1", "2", "5", "6", "3", "4"]));

        let bfs: Vec<_> = tree.walk(TraversalOrder::BreadthFirst).collect();
        assert_eq!(bfs, ids(&["1", "2", "3", "5", "6", "4"]));
    }

    #[test]
    fn test_walk_terminates_on_cycle() {
        let tree = index(
            vec![
                NodeRecord::new("1").left("2"),
                NodeRecord::new("2").left("1").right("2"),
            ],
            "1",
        );

        let visited: Vec<_> = tree.walk(TraversalOrder::PreOrder).collect();
        assert_eq!(visited, ids(&["1", "2"]));
    }

    #[test]
    fn test_subtree_and_leg_sizes() {
        let tree = sample();

        assert_eq!(tree.subtree_size(&"1".into()), 6);
        assert_eq!(tree.leg_size(&"1".into(), ChildSlot::Left), 3);
        assert_eq!(tree.leg_size(&"1".into(), ChildSlot::Right), 2);
        assert_eq!(tree.leg_size(&"4".into(), ChildSlot::Left), 0);
        assert_eq!(tree.subtree_size(&"missing".into()), 0);
    }

    #[test]
    fn test_leaves_and_find() {
        let tree = sample();

        assert_eq!(tree.leaves(), ids(&["5", "6", "4"]));
        assert_eq!(tree.find(|node| node.id.as_str() > "4"), ids(&["5", "6"]));
    }

    #[test]
    fn test_walk_without_root_is_empty() {
        let tree = TreeIndex::build(&FlatNodeStore::new(vec![NodeRecord::new("1")], None));
        assert_eq!(tree.walk(TraversalOrder::PreOrder).count(), 0);
    }
}
