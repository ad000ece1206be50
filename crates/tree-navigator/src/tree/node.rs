//! Core node types for the binary relationship tree

use derive_more::{Display, From};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Opaque identifier for a node, unique within a snapshot
///
/// Identifiers arrive from the data source either as JSON strings or as JSON
/// integers; both forms map onto the same textual id, so `1` and `"1"` refer
/// to the same node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Serialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Create a new NodeId from anything string-like
    pub fn new(id: impl Into<String>) -> Self {
        NodeId(id.into())
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        NodeId(id.to_string())
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        NodeId(id.to_string())
    }
}

impl<'de> Deserialize<'de> for NodeId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => NodeId(text),
            RawId::Signed(n) => NodeId(n.to_string()),
            RawId::Unsigned(n) => NodeId(n.to_string()),
        })
    }
}

/// One of the two successor slots of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ChildSlot {
    /// The left successor
    #[display(fmt = "Left")]
    Left,
    /// The right successor
    #[display(fmt = "Right")]
    Right,
}

impl ChildSlot {
    /// Both slots, left first
    pub const BOTH: [ChildSlot; 2] = [ChildSlot::Left, ChildSlot::Right];
}

/// Opaque key/value statistics attached to a node
pub type Description = BTreeMap<String, Value>;

/// A single raw node record as delivered by the data source
///
/// Child references are plain ids and may be dangling; nothing here checks
/// that they resolve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: NodeId,
    #[serde(default, alias = "leftChildId", alias = "left")]
    pub left_child_id: Option<NodeId>,
    #[serde(default, alias = "rightChildId", alias = "right")]
    pub right_child_id: Option<NodeId>,
    #[serde(default, rename = "displayName", alias = "display_name")]
    pub display_name: String,
    #[serde(default, rename = "statusTag", alias = "status_tag")]
    pub status_tag: String,
    #[serde(default, rename = "imageRef", alias = "image_ref")]
    pub image_ref: Option<String>,
    #[serde(default)]
    pub description: Description,
}

impl NodeRecord {
    /// Create a record with no children and empty attributes
    pub fn new(id: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            left_child_id: None,
            right_child_id: None,
            display_name: String::new(),
            status_tag: String::new(),
            image_ref: None,
            description: Description::new(),
        }
    }

    /// Set the left child reference
    pub fn left(mut self, id: impl Into<NodeId>) -> Self {
        self.left_child_id = Some(id.into());
        self
    }

    /// Set the right child reference
    pub fn right(mut self, id: impl Into<NodeId>) -> Self {
        self.right_child_id = Some(id.into());
        self
    }

    /// Set the display name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    /// Set the status tag
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status_tag = status.into();
        self
    }

    /// Set the image reference
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image_ref = Some(image.into());
        self
    }

    /// Add one description entry
    pub fn stat(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.description.insert(key.into(), value.into());
        self
    }

    /// The raw child reference stored in a slot, resolved or not
    pub fn child_id(&self, slot: ChildSlot) -> Option<&NodeId> {
        match slot {
            ChildSlot::Left => self.left_child_id.as_ref(),
            ChildSlot::Right => self.right_child_id.as_ref(),
        }
    }

    /// Returns true if neither slot holds a reference
    pub fn has_no_child_refs(&self) -> bool {
        self.left_child_id.is_none() && self.right_child_id.is_none()
    }
}
