//! Scope - Selection Resolution
//!
//! Turns the dashboard's ephemeral (space, system) selection into the
//! active node, its breadcrumb and the equipment subset in scope. Every
//! call is a full pure recomputation; nothing is cached between calls.

use serde::{Deserialize, Serialize};

use crate::domain::{Equipment, SpaceNode, SystemType};
use crate::engine::filter::{filter_by_space, filter_by_system};
use crate::engine::topology::SpaceTree;

/// The user's current space/system selection
///
/// Recomputed state derives from this on every change; the selection
/// itself is owned by the presentation layer and never persisted here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeSelection {
    /// Selected space id; `None` means the whole campus
    pub space_id: Option<String>,
    /// Selected subsystem; `None` means the global overview
    pub system: Option<SystemType>,
}

impl ScopeSelection {
    /// Selection scoped to one space, no subsystem filter
    pub fn space(id: impl Into<String>) -> Self {
        Self {
            space_id: Some(id.into()),
            system: None,
        }
    }

    /// Add a subsystem filter to the selection
    pub fn with_system(mut self, system: SystemType) -> Self {
        self.system = Some(system);
        self
    }
}

/// Result of resolving a selection against a snapshot
#[derive(Debug, Clone)]
pub struct ResolvedScope<'a> {
    /// Node the selection points at, when the id resolves
    pub active_node: Option<&'a SpaceNode>,
    /// Path from the root down to the active node; empty when unresolved
    pub breadcrumb: Vec<&'a SpaceNode>,
    /// Equipment matching the space and system filters, source order preserved
    pub equipment: Vec<&'a Equipment>,
    /// Subsystem filter carried over from the selection
    pub system: Option<SystemType>,
}

impl ResolvedScope<'_> {
    /// Display name of the active node, the pivot for relative grouping
    pub fn anchor_name(&self) -> Option<&str> {
        self.active_node.map(|node| node.name.as_str())
    }
}

/// Resolve `selection` against the current topology and equipment.
///
/// An unresolvable space id yields an empty breadcrumb and the
/// fail-open unfiltered equipment set. The space filter is applied
/// before the system filter.
pub fn resolve<'a>(
    tree: &'a SpaceTree,
    equipment: &'a [Equipment],
    selection: &ScopeSelection,
) -> ResolvedScope<'a> {
    let space_id = selection.space_id.as_deref();
    let active_node = space_id.and_then(|id| tree.find_by_id(id));
    let breadcrumb = space_id.map(|id| tree.path_to(id)).unwrap_or_default();

    let in_space = filter_by_space(tree, equipment, space_id);
    let in_scope = filter_by_system(in_space, selection.system);

    ResolvedScope {
        active_node,
        breadcrumb,
        equipment: in_scope,
        system: selection.system,
    }
}
