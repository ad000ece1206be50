//! The navigator: snapshot, index, viewport and events in one place
//!
//! UI code talks to [`TreeNavigator`] only. It applies refreshes as a whole
//! (the new index is built before the old one is dropped), routes clicks to
//! the navigation controller and queues the events a caller reacts to.

use crate::detail::{AllFieldsProjector, DetailProjector, DetailRow, FieldProjector};
use crate::navigation::{Level, NavigationController, Viewport};
use crate::options::NavigatorOptions;
use crate::refresh::SnapshotReceiver;
use crate::render::{BoundedRenderer, RenderedTree};
use crate::tree::{ChildSlot, FlatNodeStore, NodeId, Tree, TreeIndex, TreeTraversal};
use anyhow::Result;
use log::{debug, info};

/// Events surfaced to the embedding UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigatorEvent {
    /// The selection moved to this node
    NodeSelected(NodeId),
    /// The user asked for this node's details
    NodeActivated(NodeId),
}

/// Owns one snapshot and the viewport over it
pub struct TreeNavigator {
    index: TreeIndex,
    controller: NavigationController,
    options: NavigatorOptions,
    projector: Box<dyn DetailProjector>,
    events: Vec<NavigatorEvent>,
}

impl TreeNavigator {
    /// Create a navigator focused on the snapshot's root
    ///
    /// The detail projector comes from `options.detail_fields`, or shows every
    /// description key when none are configured.
    pub fn new(store: FlatNodeStore, options: NavigatorOptions) -> Result<Self> {
        options.validate()?;

        let projector: Box<dyn DetailProjector> = if options.detail_fields.is_empty() {
            Box::new(AllFieldsProjector)
        } else {
            Box::new(FieldProjector::from_fields(options.detail_fields.clone()))
        };

        let index = TreeIndex::build(&store);
        let controller = NavigationController::new(&index);

        Ok(Self {
            index,
            controller,
            options,
            projector,
            events: Vec::new(),
        })
    }

    /// Replace the detail projector
    pub fn with_projector(mut self, projector: impl DetailProjector + 'static) -> Self {
        self.projector = Box::new(projector);
        self
    }

    /// Swap in a new snapshot and reset the viewport to its root
    ///
    /// Queues `NodeSelected` when the new root differs from the old
    /// selection.
    pub fn replace_snapshot(&mut self, store: FlatNodeStore) {
        let index = TreeIndex::build(&store);
        info!(
            "Replacing snapshot: {} nodes, root {:?}",
            index.len(),
            index.root_id()
        );
        self.index = index;
        self.to_top();
    }

    /// Apply the newest pending snapshot, if any
    pub fn poll_refresh(&mut self, receiver: &SnapshotReceiver) -> bool {
        match receiver.poll_latest() {
            Some(store) => {
                self.replace_snapshot(store);
                true
            }
            None => false,
        }
    }

    pub fn index(&self) -> &TreeIndex {
        &self.index
    }

    pub fn viewport(&self) -> &Viewport {
        self.controller.viewport()
    }

    pub fn selected(&self) -> Option<&NodeId> {
        self.controller.selected()
    }

    pub fn level(&self) -> Level {
        self.controller.level()
    }

    pub fn options(&self) -> &NavigatorOptions {
        &self.options
    }

    /// Focus the root
    pub fn to_top(&mut self) -> bool {
        self.track(|controller, index| {
            controller.to_top(index);
            true
        })
    }

    /// Handle a click on a rendered node
    pub fn click(&mut self, id: &NodeId) -> bool {
        self.select_node(id)
    }

    /// Focus a node by id
    pub fn select_node(&mut self, id: &NodeId) -> bool {
        self.track(|controller, index| controller.select_node(index, id))
    }

    pub fn up_one_level(&mut self) -> bool {
        self.track(NavigationController::up_one_level)
    }

    pub fn to_left_child(&mut self) -> bool {
        self.track(NavigationController::to_left_child)
    }

    pub fn to_right_child(&mut self) -> bool {
        self.track(NavigationController::to_right_child)
    }

    pub fn to_bottom_left(&mut self) -> bool {
        self.track(NavigationController::to_bottom_left)
    }

    pub fn to_bottom_right(&mut self) -> bool {
        self.track(NavigationController::to_bottom_right)
    }

    /// Request the detail view for a node
    ///
    /// Only ids present in the snapshot produce an event.
    pub fn activate(&mut self, id: &NodeId) -> bool {
        if !self.index.contains(id) {
            debug!("Ignoring activation of unknown node {}", id);
            return false;
        }
        self.events.push(NavigatorEvent::NodeActivated(id.clone()));
        true
    }

    /// Render the window around the current selection
    pub fn render_window(&self) -> RenderedTree {
        BoundedRenderer::new(&self.index, &self.options, self.projector.as_ref())
            .render_window(self.controller.viewport())
    }

    /// Ids from the root to the selection; empty if the selection is unreachable
    pub fn breadcrumb(&self) -> Vec<NodeId> {
        self.selected()
            .and_then(|id| self.index.path_from_root(id))
            .unwrap_or_default()
    }

    /// Detail rows for a node, through the configured projector
    pub fn details(&self, id: &NodeId) -> Option<Vec<DetailRow>> {
        self.index
            .lookup(id)
            .map(|record| self.projector.project(&record.description))
    }

    /// Sizes of the left and right subtrees below a node
    pub fn leg_sizes(&self, id: &NodeId) -> (usize, usize) {
        (
            self.index.leg_size(id, ChildSlot::Left),
            self.index.leg_size(id, ChildSlot::Right),
        )
    }

    /// Take all queued events, oldest first
    ///
    /// Selection changes caused by a snapshot refresh are included.
    pub fn drain_events(&mut self) -> Vec<NavigatorEvent> {
        std::mem::take(&mut self.events)
    }

    /// Run a move and queue `NodeSelected` when the selection changed
    fn track<F>(&mut self, step: F) -> bool
    where
        F: FnOnce(&mut NavigationController, &TreeIndex) -> bool,
    {
        let before = self.controller.selected().cloned();
        let applied = step(&mut self.controller, &self.index);

        if let Some(after) = self.controller.selected() {
            if before.as_ref() != Some(after) {
                self.events.push(NavigatorEvent::NodeSelected(after.clone()));
            }
        }
        applied
    }
}
