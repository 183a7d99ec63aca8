//! Aggregate - Status Tallies and Location Groupings
//!
//! Derived views over a resolved equipment subset: per-status counts,
//! relative location groupings for the drill-down list, and per-system
//! roll-ups for the overview cards. Aggregation never fails; empty
//! input yields zero tallies and empty mappings.

use hashlink::LinkedHashMap;
use serde::Serialize;

use crate::domain::{Equipment, EquipmentStatus, SystemType};
use crate::engine::scope::ResolvedScope;

/// Fallback label for equipment whose path stops at the campus level
const UNASSIGNED_GROUP: &str = "Unassigned";

/// Equipment counts per status category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusTally {
    pub normal: usize,
    pub offline: usize,
    pub abnormal: usize,
    pub maintenance: usize,
}

impl StatusTally {
    /// Sum of all buckets; always equals the number of tallied records
    pub fn total(&self) -> usize {
        self.normal + self.offline + self.abnormal + self.maintenance
    }

    /// Count for one status category
    pub fn count(&self, status: EquipmentStatus) -> usize {
        match status {
            EquipmentStatus::Normal => self.normal,
            EquipmentStatus::Offline => self.offline,
            EquipmentStatus::Abnormal => self.abnormal,
            EquipmentStatus::Maintenance => self.maintenance,
        }
    }
}

/// Count equipment per status. Every record lands in exactly one bucket.
pub fn tally<'a, I>(equipment: I) -> StatusTally
where
    I: IntoIterator<Item = &'a Equipment>,
{
    let mut counts = StatusTally::default();
    for eq in equipment {
        match eq.status {
            EquipmentStatus::Normal => counts.normal += 1,
            EquipmentStatus::Offline => counts.offline += 1,
            EquipmentStatus::Abnormal => counts.abnormal += 1,
            EquipmentStatus::Maintenance => counts.maintenance += 1,
        }
    }
    counts
}

/// Group label for one equipment path relative to `anchor`.
///
/// With no anchor, or with the root campus as anchor, the label is the
/// second path segment (first for root-only paths). Otherwise it is the
/// segment right after the anchor; when the anchor is missing from the
/// path or is its last segment, the last segment is used instead.
///
/// The fallback chain is asymmetric on purpose: it decides which
/// breadcrumb level a device is bucketed under as the selection drills
/// into nested spaces.
pub fn relative_group_label<'a>(
    path: &'a [String],
    anchor: Option<&str>,
    root_name: &str,
) -> &'a str {
    let anchor = match anchor {
        Some(name) if name != root_name => name,
        _ => {
            return path
                .get(1)
                .or_else(|| path.first())
                .map(String::as_str)
                .unwrap_or("");
        }
    };

    match path.iter().position(|segment| segment == anchor) {
        Some(idx) if idx + 1 < path.len() => &path[idx + 1],
        _ => path.last().map(String::as_str).unwrap_or(""),
    }
}

/// Group in-scope equipment by its location relative to the active node.
///
/// Grouping is only meaningful inside a single subsystem; the global
/// overview gets an empty mapping. Labels keep first-seen insertion
/// order, and records keep their relative order within each group.
pub fn group_by_relative_location<'a>(
    scope: &ResolvedScope<'a>,
    root_name: &str,
) -> LinkedHashMap<String, Vec<&'a Equipment>> {
    let mut groups = LinkedHashMap::new();
    if scope.system.is_none() {
        return groups;
    }
    for eq in &scope.equipment {
        let label = relative_group_label(&eq.path, scope.anchor_name(), root_name);
        // `entry().or_insert_with()` moves occupied keys to the back in
        // hashlink, which would break first-seen label order.
        if let Some(bucket) = groups.get_mut(label) {
            bucket.push(*eq);
        } else {
            groups.insert(label.to_string(), vec![*eq]);
        }
    }
    groups
}

/// Group equipment by its full sub-campus location, for the status
/// drill-down lists. The campus segment is dropped from the key.
pub fn group_by_location<'a>(
    equipment: &[&'a Equipment],
) -> LinkedHashMap<String, Vec<&'a Equipment>> {
    let mut groups = LinkedHashMap::new();
    for eq in equipment {
        let key = if eq.path.len() > 1 {
            eq.path[1..].join(" / ")
        } else {
            UNASSIGNED_GROUP.to_string()
        };
        groups.entry(key).or_insert_with(Vec::new).push(*eq);
    }
    groups
}

/// Per-subsystem roll-up for the overview cards
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemSummary {
    pub system: SystemType,
    /// Number of devices in the subsystem
    pub total: usize,
    /// Percent of devices in Normal status; 0.0 when the subsystem is empty
    pub availability: f64,
}

/// Summarize every subsystem in declaration order.
pub fn system_overview(equipment: &[&Equipment]) -> Vec<SystemSummary> {
    SystemType::ALL
        .iter()
        .map(|&system| {
            let total = equipment.iter().filter(|eq| eq.system == system).count();
            let normal = equipment
                .iter()
                .filter(|eq| eq.system == system && eq.status == EquipmentStatus::Normal)
                .count();
            let availability = if total > 0 {
                normal as f64 / total as f64 * 100.0
            } else {
                0.0
            };
            SystemSummary {
                system,
                total,
                availability,
            }
        })
        .collect()
}
