//! Tree Navigator Library
//!
//! Reconstructs a binary relationship tree (referral or placement networks,
//! where every entity has at most a left and a right successor) from a flat
//! list of records linked by id, and navigates it through a viewport that
//! only ever renders a depth-bounded window around the focused node.
//!
//! # Core Concepts
//!
//! - **FlatNodeStore**: one immutable snapshot of raw records plus the root id
//! - **TreeIndex**: id and parent lookups derived from a snapshot
//! - **NavigationController**: the viewport and its directional moves
//! - **BoundedRenderer**: fixed-shape view of the focus, placeholders included
//! - **DetailProjector**: description bag to label/value rows
//! - **TreeNavigator**: all of the above behind one UI-facing type
//!
//! Broken data (dangling references, cycles, nodes detached from the root)
//! never produces an error; it renders as placeholders or stops movement.
//!
//! # Example
//!
//! ```
//! use tree_navigator::prelude::*;
//!
//! let store = FlatNodeStore::new(
//!     vec![
//!         NodeRecord::new("1").left("2").right("3"),
//!         NodeRecord::new("2"),
//!         NodeRecord::new("3").left("4"),
//!         NodeRecord::new("4"),
//!     ],
//!     Some(NodeId::from("1")),
//! );
//!
//! let mut navigator = TreeNavigator::new(store, NavigatorOptions::default()).unwrap();
//! navigator.to_bottom_right();
//! assert_eq!(navigator.selected(), Some(&NodeId::from("3")));
//! assert_eq!(navigator.level(), Level::Depth(1));
//!
//! println!("{}", navigator.render_window());
//! ```

pub mod detail;
pub mod navigation;
pub mod navigator;
pub mod options;
pub mod refresh;
pub mod render;
pub mod tree;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::detail::{AllFieldsProjector, DetailProjector, DetailRow, FieldProjector, FieldSpec};
    pub use crate::navigation::{Level, NavigationController, Viewport};
    pub use crate::navigator::{NavigatorEvent, TreeNavigator};
    pub use crate::options::{NavigatorOptions, MAX_RENDER_DEPTH};
    pub use crate::refresh::{refresh_channel, SnapshotReceiver, SnapshotSender};
    pub use crate::render::{
        BoundedRenderer, NodeView, Placeholder, Position, RenderedNode, RenderedTree, Slot,
    };
    pub use crate::tree::prelude::*;
}
