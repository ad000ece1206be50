//! Binary tree reconstruction from flat node lists
//!
//! Records arrive as a flat list linked by id references. This module stores
//! a snapshot of them, derives the lookup structures, and provides a generic
//! tree trait for walking the result.

mod index;
mod node;
mod store;
mod traits;

pub use index::TreeIndex;
pub use node::{ChildSlot, Description, NodeId, NodeRecord};
pub use store::FlatNodeStore;
pub use traits::{TraversalOrder, Tree, TreeTraversal, TreeWalker};

/// Re-export common types for convenience
pub mod prelude {
    pub use super::{
        ChildSlot, Description, FlatNodeStore, NodeId, NodeRecord, TraversalOrder, Tree,
        TreeIndex, TreeTraversal,
    };
}
