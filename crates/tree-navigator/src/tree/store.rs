//! Immutable snapshots of flat node records

use crate::tree::{NodeId, NodeRecord};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// On-disk / on-wire shape of a snapshot
///
/// Either a document carrying its own root, or a bare array of records whose
/// root is supplied separately.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SnapshotDocument {
    Document {
        #[serde(default)]
        root: Option<NodeId>,
        nodes: Vec<NodeRecord>,
    },
    Bare(Vec<NodeRecord>),
}

/// One snapshot of the flat node list plus its externally supplied root
///
/// A store is never patched; a refresh produces a new store. Cloning is cheap
/// because the records are shared.
#[derive(Debug, Clone, Default)]
pub struct FlatNodeStore {
    nodes: Arc<Vec<NodeRecord>>,
    root: Option<NodeId>,
}

impl FlatNodeStore {
    /// Create a snapshot from records and an optional root id
    pub fn new(nodes: Vec<NodeRecord>, root: Option<NodeId>) -> Self {
        Self {
            nodes: Arc::new(nodes),
            root,
        }
    }

    /// A snapshot with no records and no root
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a snapshot from JSON
    ///
    /// `root_override` takes precedence over a root carried in the document.
    pub fn from_json_str(json: &str, root_override: Option<NodeId>) -> Result<Self> {
        let document: SnapshotDocument =
            serde_json::from_str(json).context("Failed to parse node snapshot")?;

        let (nodes, root) = match document {
            SnapshotDocument::Document { root, nodes } => (nodes, root),
            SnapshotDocument::Bare(nodes) => (nodes, None),
        };

        Ok(Self::new(nodes, root_override.or(root)))
    }

    /// Load a snapshot from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>, root_override: Option<NodeId>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot file {}", path.display()))?;
        Self::from_json_str(&json, root_override)
            .with_context(|| format!("Invalid snapshot file {}", path.display()))
    }

    /// The raw records, in delivery order
    pub fn nodes(&self) -> &[NodeRecord] {
        &self.nodes
    }

    /// The externally supplied root id, if any
    pub fn root(&self) -> Option<&NodeId> {
        self.root.as_ref()
    }

    /// Number of raw records, duplicates included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
