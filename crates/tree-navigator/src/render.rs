//! Depth-bounded rendering of the viewport
//!
//! The renderer turns the focused node's neighbourhood into a view model
//! with a fixed shape: every rendered node has exactly two child slots until
//! the depth limit, and slots without data hold a placeholder. Geometry is
//! left to the UI; the view model only says which node sits in which
//! relative position.

use crate::detail::{DetailProjector, DetailRow};
use crate::navigation::Viewport;
use crate::options::NavigatorOptions;
use crate::tree::{ChildSlot, NodeId, NodeRecord, TreeIndex};
use derive_more::Display;
use log::trace;
use std::fmt;

/// Where a rendered node sits relative to its parent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Position {
    #[display(fmt = "root")]
    Root,
    #[display(fmt = "L")]
    Left,
    #[display(fmt = "R")]
    Right,
}

impl From<ChildSlot> for Position {
    fn from(slot: ChildSlot) -> Self {
        match slot {
            ChildSlot::Left => Position::Left,
            ChildSlot::Right => Position::Right,
        }
    }
}

/// Display data for a real node
#[derive(Debug, Clone, PartialEq)]
pub struct NodeView {
    pub id: NodeId,
    pub name: String,
    pub status: String,
    pub image: Option<String>,
    pub color: String,
    pub details: Vec<DetailRow>,
}

/// Display data for an empty slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub id: String,
    pub label: String,
    pub image: String,
    pub color: String,
}

/// Contents of one rendered slot
#[derive(Debug, Clone, PartialEq)]
pub enum Slot {
    Present(NodeView),
    Missing(Placeholder),
}

/// One slot of the rendered window and everything below it
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedNode {
    pub position: Position,
    /// Depth relative to the window's top node
    pub depth: usize,
    pub slot: Slot,
    /// Left and right subtrees; `None` at the depth limit
    pub children: Option<Box<[RenderedNode; 2]>>,
}

impl RenderedNode {
    /// Id to pass to `select_node` when this slot is clicked
    ///
    /// Placeholders are not interactive.
    pub fn click_target(&self) -> Option<&NodeId> {
        match &self.slot {
            Slot::Present(view) => Some(&view.id),
            Slot::Missing(_) => None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.slot, Slot::Missing(_))
    }

    /// The rendered child in a slot, if the depth limit was not reached
    pub fn child(&self, slot: ChildSlot) -> Option<&RenderedNode> {
        let children = self.children.as_ref()?;
        Some(match slot {
            ChildSlot::Left => &children[0],
            ChildSlot::Right => &children[1],
        })
    }

    /// This node and every rendered descendant, pre-order
    pub fn iter(&self) -> impl Iterator<Item = &RenderedNode> + '_ {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            if let Some(children) = &node.children {
                stack.push(&children[1]);
                stack.push(&children[0]);
            }
            Some(node)
        })
    }

    /// Number of slots, real or placeholder, in this subtree
    pub fn slot_count(&self) -> usize {
        self.iter().count()
    }
}

/// A rendered window together with the viewport it was rendered for
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedTree {
    pub viewport: Viewport,
    pub root: RenderedNode,
}

impl RenderedTree {
    /// Returns true if the focus could not be resolved
    pub fn is_empty(&self) -> bool {
        self.root.is_placeholder()
    }
}

impl fmt::Display for RenderedTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let focus = self
            .viewport
            .selected
            .as_ref()
            .map(NodeId::as_str)
            .unwrap_or("-");
        writeln!(f, "focus: {} level: {}", focus, self.viewport.level)?;
        for node in self.root.iter() {
            write!(f, "{}[{}] ", "  ".repeat(node.depth), node.position)?;
            match &node.slot {
                Slot::Present(view) => {
                    if !view.name.is_empty() {
                        write!(f, "{} ", view.name)?;
                    }
                    write!(f, "#{}", view.id)?;
                    if !view.status.is_empty() {
                        write!(f, " ({})", view.status)?;
                    }
                    writeln!(f)?;
                }
                Slot::Missing(placeholder) => writeln!(f, "{}", placeholder.label)?,
            }
        }
        Ok(())
    }
}

/// Stateless recursive renderer over one index
pub struct BoundedRenderer<'a> {
    index: &'a TreeIndex,
    options: &'a NavigatorOptions,
    projector: &'a dyn DetailProjector,
}

impl<'a> BoundedRenderer<'a> {
    pub fn new(
        index: &'a TreeIndex,
        options: &'a NavigatorOptions,
        projector: &'a dyn DetailProjector,
    ) -> Self {
        Self {
            index,
            options,
            projector,
        }
    }

    /// Render the subtree under `node_id` from `depth` down to `max_depth`
    ///
    /// The result is always a complete binary subtree with
    /// `2^(max_depth - depth + 1) - 1` slots.
    ///
    /// # Panics
    ///
    /// Panics if `depth > max_depth`, which is a caller bug rather than a
    /// data problem. The configured window depth is capped separately by
    /// [`NavigatorOptions::validate`].
    pub fn render(&self, node_id: &NodeId, depth: usize, max_depth: usize) -> RenderedNode {
        self.render_slot(Some(node_id), Position::Root, depth, max_depth)
    }

    /// Render the window around the viewport's selection
    ///
    /// When the selection does not resolve (empty dataset, unset root) the
    /// window is a single placeholder at depth 0.
    pub fn render_window(&self, viewport: &Viewport) -> RenderedTree {
        let focus = viewport
            .selected
            .as_ref()
            .filter(|id| self.index.contains(id));

        let root = match focus {
            Some(id) => self.render(id, 0, self.options.max_depth),
            None => RenderedNode {
                position: Position::Root,
                depth: 0,
                slot: Slot::Missing(self.placeholder()),
                children: None,
            },
        };

        RenderedTree {
            viewport: viewport.clone(),
            root,
        }
    }

    fn render_slot(
        &self,
        node_id: Option<&NodeId>,
        position: Position,
        depth: usize,
        max_depth: usize,
    ) -> RenderedNode {
        assert!(
            depth <= max_depth,
            "render depth {} exceeds max_depth {}",
            depth,
            max_depth
        );

        let record = node_id.and_then(|id| {
            let record = self.index.lookup(id);
            if record.is_none() {
                trace!("Node {} missing from snapshot, rendering placeholder", id);
            }
            record
        });

        let slot = match record {
            Some(record) => Slot::Present(self.node_view(record)),
            None => Slot::Missing(self.placeholder()),
        };

        let children = (depth < max_depth).then(|| {
            let [left, right] = ChildSlot::BOTH.map(|child_slot| {
                let child_id = record.and_then(|record| record.child_id(child_slot));
                self.render_slot(child_id, child_slot.into(), depth + 1, max_depth)
            });
            Box::new([left, right])
        });

        RenderedNode {
            position,
            depth,
            slot,
            children,
        }
    }

    fn node_view(&self, record: &NodeRecord) -> NodeView {
        NodeView {
            id: record.id.clone(),
            name: record.display_name.clone(),
            status: record.status_tag.clone(),
            image: record.image_ref.clone(),
            color: self.options.color_for(&record.status_tag).to_string(),
            details: self.projector.project(&record.description),
        }
    }

    fn placeholder(&self) -> Placeholder {
        Placeholder {
            id: self.options.placeholder_id.clone(),
            label: self.options.placeholder_label.clone(),
            image: self.options.placeholder_image.clone(),
            color: self.options.default_color.clone(),
        }
    }
}
