//! Space - Spatial Hierarchy Nodes

use serde::{Deserialize, Serialize};

/// Level of a node in the spatial hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpaceKind {
    /// Whole campus, the single root of the tree
    Campus,
    /// One building (or outdoor zone) on the campus
    Building,
    /// One floor of a building
    Floor,
    /// A named area within a floor
    Area,
}

/// One node of the campus/building/floor/area hierarchy
///
/// The topology is built once per snapshot and never mutated afterwards;
/// child ordering is display order and is preserved as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpaceNode {
    /// Unique ID across the whole tree
    pub id: String,
    /// Display label
    pub name: String,
    /// Hierarchy level
    pub kind: SpaceKind,
    /// Child nodes, owned by the parent; empty for leaves
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SpaceNode>,
}

impl SpaceNode {
    /// Whether this node has no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_leaf_without_children() {
        let json = r#"{"id": "bldg-a-1f-lobby", "name": "Lobby", "kind": "area"}"#;
        let node: SpaceNode = serde_json::from_str(json).expect("Deserialization failed");
        assert_eq!(node.id, "bldg-a-1f-lobby");
        assert_eq!(node.kind, SpaceKind::Area);
        assert!(node.is_leaf());
    }

    #[test]
    fn test_deserialize_nested_preserves_child_order() {
        let json = r#"{
            "id": "bldg-a-1f", "name": "1F", "kind": "floor",
            "children": [
                {"id": "lobby", "name": "Lobby", "kind": "area"},
                {"id": "server", "name": "Server Room", "kind": "area"}
            ]
        }"#;
        let node: SpaceNode = serde_json::from_str(json).expect("Deserialization failed");
        let names: Vec<_> = node.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Lobby", "Server Room"]);
    }
}
