//! Topology - Spatial Hierarchy Index
//!
//! Immutable index over the forest of space nodes. Built once per
//! snapshot; lookups and path reconstruction are pure and deterministic.

use ahash::AHashMap;

use crate::domain::SpaceNode;

/// Hierarchical index of the campus topology
///
/// Owns the forest of root nodes and a precomputed pre-order index from
/// node id to its child-index trail, so both lookup and breadcrumb
/// reconstruction are O(depth) without tree-wide scans.
#[derive(Debug, Clone)]
pub struct SpaceTree {
    roots: Vec<SpaceNode>,
    /// id → child-index trail from the forest root. On duplicate ids the
    /// first pre-order entry wins.
    index: AHashMap<String, Vec<usize>>,
}

impl SpaceTree {
    /// Build the tree and its id index from a forest of root nodes
    pub fn new(roots: Vec<SpaceNode>) -> Self {
        let mut index = AHashMap::new();
        let mut trail = Vec::new();
        for (i, node) in roots.iter().enumerate() {
            trail.push(i);
            Self::index_node(node, &mut trail, &mut index);
            trail.pop();
        }
        Self { roots, index }
    }

    fn index_node(
        node: &SpaceNode,
        trail: &mut Vec<usize>,
        index: &mut AHashMap<String, Vec<usize>>,
    ) {
        if index.contains_key(&node.id) {
            tracing::warn!(id = %node.id, "Duplicate space id, keeping first pre-order match");
        } else {
            index.insert(node.id.clone(), trail.clone());
        }
        for (i, child) in node.children.iter().enumerate() {
            trail.push(i);
            Self::index_node(child, trail, index);
            trail.pop();
        }
    }

    /// All root nodes in display order
    pub fn roots(&self) -> &[SpaceNode] {
        &self.roots
    }

    /// First root of the forest (the campus)
    pub fn root(&self) -> Option<&SpaceNode> {
        self.roots.first()
    }

    /// Id of the root campus
    pub fn root_id(&self) -> Option<&str> {
        self.root().map(|n| n.id.as_str())
    }

    /// Display name of the root campus
    pub fn root_name(&self) -> Option<&str> {
        self.root().map(|n| n.name.as_str())
    }

    /// Total number of indexed nodes
    pub fn node_count(&self) -> usize {
        self.index.len()
    }

    /// Look up a node by id. `None` means "use unfiltered/default scope"
    /// for callers, never a fatal condition.
    pub fn find_by_id(&self, id: &str) -> Option<&SpaceNode> {
        let trail = self.index.get(id)?;
        let mut nodes = &self.roots;
        let mut found = None;
        for &i in trail {
            let node = nodes.get(i)?;
            found = Some(node);
            nodes = &node.children;
        }
        found
    }

    /// Path of nodes from the root down to `id`, inclusive. Empty when
    /// the id is absent. Used to build breadcrumbs.
    pub fn path_to(&self, id: &str) -> Vec<&SpaceNode> {
        let Some(trail) = self.index.get(id) else {
            return Vec::new();
        };
        let mut path = Vec::with_capacity(trail.len());
        let mut nodes = &self.roots;
        for &i in trail {
            let Some(node) = nodes.get(i) else {
                return Vec::new();
            };
            path.push(node);
            nodes = &node.children;
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SpaceKind;

    fn node(id: &str, name: &str, kind: SpaceKind, children: Vec<SpaceNode>) -> SpaceNode {
        SpaceNode {
            id: id.to_string(),
            name: name.to_string(),
            kind,
            children,
        }
    }

    fn sample_tree() -> SpaceTree {
        SpaceTree::new(vec![node(
            "campus-1",
            "Wulai Campus",
            SpaceKind::Campus,
            vec![
                node(
                    "bldg-a",
                    "Tower A",
                    SpaceKind::Building,
                    vec![
                        node(
                            "bldg-a-1f",
                            "1F",
                            SpaceKind::Floor,
                            vec![node("bldg-a-1f-server", "Server Room", SpaceKind::Area, vec![])],
                        ),
                        node("bldg-a-2f", "2F", SpaceKind::Floor, vec![]),
                    ],
                ),
                node("bldg-b", "Tower B", SpaceKind::Building, vec![]),
            ],
        )])
    }

    #[test]
    fn test_find_by_id_root_and_nested() {
        let tree = sample_tree();
        assert_eq!(tree.find_by_id("campus-1").map(|n| n.name.as_str()), Some("Wulai Campus"));
        assert_eq!(
            tree.find_by_id("bldg-a-1f-server").map(|n| n.name.as_str()),
            Some("Server Room")
        );
    }

    #[test]
    fn test_find_by_id_missing() {
        let tree = sample_tree();
        assert!(tree.find_by_id("bldg-z").is_none());
    }

    #[test]
    fn test_path_to_is_root_to_leaf() {
        let tree = sample_tree();
        let path: Vec<_> = tree
            .path_to("bldg-a-1f-server")
            .iter()
            .map(|n| n.id.clone())
            .collect();
        assert_eq!(path, vec!["campus-1", "bldg-a", "bldg-a-1f", "bldg-a-1f-server"]);
    }

    #[test]
    fn test_path_to_missing_is_empty() {
        let tree = sample_tree();
        assert!(tree.path_to("nope").is_empty());
    }

    #[test]
    fn test_path_to_and_find_by_id_agree() {
        let tree = sample_tree();
        for id in ["campus-1", "bldg-a", "bldg-a-2f", "bldg-a-1f-server", "bldg-b"] {
            let found = tree.find_by_id(id).expect("id should resolve");
            let path = tree.path_to(id);
            let last = path.last().expect("path should be non-empty");
            assert_eq!(last.id, found.id);
        }
    }

    #[test]
    fn test_duplicate_id_first_preorder_match_wins() {
        let tree = SpaceTree::new(vec![node(
            "campus-1",
            "Campus",
            SpaceKind::Campus,
            vec![
                node("dup", "First", SpaceKind::Building, vec![]),
                node("dup", "Second", SpaceKind::Building, vec![]),
            ],
        )]);
        assert_eq!(tree.find_by_id("dup").map(|n| n.name.as_str()), Some("First"));
    }

    #[test]
    fn test_repeated_lookups_are_identical() {
        let tree = sample_tree();
        let a: Vec<_> = tree.path_to("bldg-a-2f").iter().map(|n| n.id.clone()).collect();
        let b: Vec<_> = tree.path_to("bldg-a-2f").iter().map(|n| n.id.clone()).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_node_count() {
        assert_eq!(sample_tree().node_count(), 6);
    }
}
