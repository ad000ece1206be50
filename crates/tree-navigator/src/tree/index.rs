//! Arena index over one snapshot
//!
//! Records stay in the contiguous arena owned by the snapshot; the index maps
//! ids to arena positions and children back to their parents so lookups and
//! upward walks are O(1) per step.

use crate::tree::{ChildSlot, FlatNodeStore, NodeId, NodeRecord, Tree};
use log::debug;
use std::collections::HashMap;

/// Lookup structures derived from a [`FlatNodeStore`]
///
/// Holds no state of its own beyond what the snapshot implies; build a new
/// index whenever the snapshot is replaced.
#[derive(Debug, Clone, Default)]
pub struct TreeIndex {
    /// The snapshot this index was built from (arena storage)
    store: FlatNodeStore,
    /// Id -> arena position of the winning record
    positions: HashMap<NodeId, usize>,
    /// Child id -> parent id
    parents: HashMap<NodeId, NodeId>,
}

impl TreeIndex {
    /// Build the index for a snapshot
    ///
    /// Duplicate ids resolve to the last record. Child references are not
    /// checked here; a dangling reference simply fails to resolve later.
    pub fn build(store: &FlatNodeStore) -> Self {
        let mut positions = HashMap::with_capacity(store.len());
        for (position, record) in store.nodes().iter().enumerate() {
            if positions.insert(record.id.clone(), position).is_some() {
                debug!("Duplicate node id {}, keeping the later record", record.id);
            }
        }

        // Only winning records contribute parent links
        let mut parents = HashMap::with_capacity(positions.len());
        for (position, record) in store.nodes().iter().enumerate() {
            if positions.get(&record.id) != Some(&position) {
                continue;
            }
            for slot in ChildSlot::BOTH {
                if let Some(child) = record.child_id(slot) {
                    parents.insert(child.clone(), record.id.clone());
                }
            }
        }

        debug!(
            "Built tree index: {} records, {} distinct ids, {} parent links",
            store.len(),
            positions.len(),
            parents.len()
        );

        Self {
            store: store.clone(),
            positions,
            parents,
        }
    }

    /// Resolve an id to its record
    pub fn lookup(&self, id: &NodeId) -> Option<&NodeRecord> {
        self.positions
            .get(id)
            .and_then(|&position| self.store.nodes().get(position))
    }

    /// Parent of a node, from the reverse map
    pub fn parent_of(&self, id: &NodeId) -> Option<&NodeId> {
        self.parents.get(id)
    }

    /// Resolve the child in a slot
    ///
    /// Returns `None` both for an empty slot and for a dangling reference.
    pub fn child(&self, id: &NodeId, slot: ChildSlot) -> Option<&NodeRecord> {
        self.lookup(id)?
            .child_id(slot)
            .and_then(|child| self.lookup(child))
    }

    /// The root supplied with the snapshot
    pub fn root_id(&self) -> Option<&NodeId> {
        self.store.root()
    }

    /// The snapshot backing this index
    pub fn store(&self) -> &FlatNodeStore {
        &self.store
    }

    /// Number of distinct ids; the bound for every walk over this snapshot
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.positions.contains_key(id)
    }
}

impl Tree for TreeIndex {
    type Node = NodeRecord;

    fn root(&self) -> Option<&NodeId> {
        self.root_id()
    }

    fn get(&self, id: &NodeId) -> Option<&NodeRecord> {
        self.lookup(id)
    }

    fn parent(&self, id: &NodeId) -> Option<&NodeId> {
        self.parent_of(id)
    }

    fn child_id(&self, id: &NodeId, slot: ChildSlot) -> Option<&NodeId> {
        self.child(id, slot).map(|record| &record.id)
    }

    fn node_count(&self) -> usize {
        self.len()
    }
}
