//! Snapshot - Read-Only Topology and Equipment Generations
//!
//! One snapshot is one immutable generation of the space tree plus the
//! flat equipment collection. A refresh replaces the whole `Arc`, never
//! mutates in place, so in-flight queries always observe a consistent
//! pair of topology and equipment.

use std::fs;
use std::path::Path;
use std::sync::{Arc, RwLock};

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::domain::{Equipment, SpaceKind, SpaceNode};
use crate::engine::scope::{ResolvedScope, ScopeSelection, resolve};
use crate::engine::topology::SpaceTree;
use crate::error::{Error, Result};

/// On-disk snapshot document (JSON or TOML)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotConfig {
    /// Forest of space roots; exactly one campus root expected
    pub spaces: Vec<SpaceNode>,
    /// Flat equipment collection
    #[serde(default)]
    pub equipment: Vec<Equipment>,
}

/// One immutable generation of topology plus equipment
#[derive(Debug, Clone)]
pub struct Snapshot {
    tree: Arc<SpaceTree>,
    equipment: Arc<Vec<Equipment>>,
}

impl Snapshot {
    /// Build and validate a snapshot from its parts
    pub fn new(spaces: Vec<SpaceNode>, equipment: Vec<Equipment>) -> Result<Self> {
        validate_spaces(&spaces)?;
        let tree = SpaceTree::new(spaces);
        validate_equipment(&tree, &equipment)?;
        Ok(Self {
            tree: Arc::new(tree),
            equipment: Arc::new(equipment),
        })
    }

    /// Build a snapshot from a deserialized config document
    pub fn from_config(config: SnapshotConfig) -> Result<Self> {
        Self::new(config.spaces, config.equipment)
    }

    /// Parse a snapshot from a JSON document
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: SnapshotConfig = serde_json::from_str(content)?;
        Self::from_config(config)
    }

    /// Parse a snapshot from a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SnapshotConfig = toml::from_str(content)?;
        Self::from_config(config)
    }

    /// Load a snapshot from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Load a snapshot from a TOML file
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// The indexed space topology
    pub fn tree(&self) -> &SpaceTree {
        &self.tree
    }

    /// The full equipment collection in source order
    pub fn equipment(&self) -> &[Equipment] {
        &self.equipment
    }

    /// Resolve a selection against this snapshot
    pub fn resolve(&self, selection: &ScopeSelection) -> ResolvedScope<'_> {
        resolve(&self.tree, &self.equipment, selection)
    }
}

fn validate_spaces(spaces: &[SpaceNode]) -> Result<()> {
    let root = spaces.first().ok_or_else(|| Error::Invalid {
        message: "Snapshot has no space topology".to_string(),
    })?;
    if spaces.len() > 1 {
        return Err(Error::Invalid {
            message: format!("Expected a single campus root, found {} roots", spaces.len()),
        });
    }
    if root.kind != SpaceKind::Campus {
        return Err(Error::Invalid {
            message: format!("Root node '{}' is not a campus", root.id),
        });
    }

    let mut seen = AHashSet::new();
    let mut stack: Vec<&SpaceNode> = spaces.iter().collect();
    while let Some(node) = stack.pop() {
        if !seen.insert(node.id.as_str()) {
            return Err(Error::Invalid {
                message: format!("Duplicate space id '{}'", node.id),
            });
        }
        stack.extend(node.children.iter());
    }
    Ok(())
}

fn validate_equipment(tree: &SpaceTree, equipment: &[Equipment]) -> Result<()> {
    let root_name = tree.root_name().unwrap_or_default();
    let mut seen = AHashSet::new();
    for eq in equipment {
        if !seen.insert(eq.id.as_str()) {
            return Err(Error::Invalid {
                message: format!("Duplicate equipment id '{}'", eq.id),
            });
        }
        if eq.path.first().map(String::as_str) != Some(root_name) {
            return Err(Error::Invalid {
                message: format!(
                    "Equipment '{}' path does not start at campus '{root_name}'",
                    eq.id
                ),
            });
        }
    }
    Ok(())
}

/// Process-wide holder of the current snapshot.
///
/// Readers clone the `Arc` and keep querying their generation even
/// while a refresh swaps in the next one; `replace` exchanges the whole
/// reference and never patches a live snapshot.
#[derive(Debug)]
pub struct SnapshotStore {
    current: RwLock<Arc<Snapshot>>,
}

impl SnapshotStore {
    /// Create a store holding an initial snapshot
    pub fn new(snapshot: Snapshot) -> Self {
        tracing::info!(
            nodes = snapshot.tree().node_count(),
            equipment = snapshot.equipment().len(),
            "Installed monitoring snapshot"
        );
        Self {
            current: RwLock::new(Arc::new(snapshot)),
        }
    }

    /// The current snapshot generation
    pub fn current(&self) -> Arc<Snapshot> {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Swap in a new snapshot generation
    pub fn replace(&self, snapshot: Snapshot) {
        tracing::info!(
            nodes = snapshot.tree().node_count(),
            equipment = snapshot.equipment().len(),
            "Replaced monitoring snapshot"
        );
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Arc::new(snapshot);
    }
}
