//! Filter - Equipment Subset Predicates
//!
//! Space and system filtering over the flat equipment collection. Space
//! filtering is fail-open: a selector that cannot be resolved returns
//! the unfiltered input rather than an empty set, so a stale or invalid
//! selection never collapses the dashboard to nothing.

use crate::domain::{Equipment, EquipmentStatus, SystemType};
use crate::engine::topology::SpaceTree;

/// Filter equipment to the subtree rooted at `space_id`.
///
/// `None`, an empty id and the root campus id all mean "no filtering".
/// An id that resolves to no node also returns the full input.
/// Matching keeps every record whose `path` contains the resolved
/// node's name as an element, by exact string equality.
pub fn filter_by_space<'a>(
    tree: &SpaceTree,
    equipment: &'a [Equipment],
    space_id: Option<&str>,
) -> Vec<&'a Equipment> {
    let Some(id) = space_id.filter(|id| !id.is_empty()) else {
        return equipment.iter().collect();
    };
    if tree.root_id() == Some(id) {
        return equipment.iter().collect();
    }
    let Some(node) = tree.find_by_id(id) else {
        tracing::debug!(space_id = id, "Unresolvable space selection, returning unfiltered equipment");
        return equipment.iter().collect();
    };
    equipment
        .iter()
        .filter(|eq| eq.path.iter().any(|segment| segment == &node.name))
        .collect()
}

/// Keep only records of the given subsystem; `None` is the identity.
pub fn filter_by_system(
    equipment: Vec<&Equipment>,
    system: Option<SystemType>,
) -> Vec<&Equipment> {
    match system {
        Some(system) => equipment.into_iter().filter(|eq| eq.system == system).collect(),
        None => equipment,
    }
}

/// Keep only records in the given status, for status drill-down lists.
pub fn filter_by_status<'a>(
    equipment: &[&'a Equipment],
    status: EquipmentStatus,
) -> Vec<&'a Equipment> {
    equipment.iter().copied().filter(|eq| eq.status == status).collect()
}
