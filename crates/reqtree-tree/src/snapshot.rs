//! Serializable nested copies of arena trees.

use serde::Serialize;

use crate::arena::{Arena, NodeId};

/// One node of a tree, with its children inlined.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TreeSnapshot {
    /// Display label.
    pub label: String,
    /// Display-only expansion flag.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub expanded: bool,
    /// Child nodes in order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeSnapshot>,
}

impl TreeSnapshot {
    /// Snapshot every top-level node of `arena`, labelling each node with
    /// `label`.
    pub fn forest<T>(arena: &Arena<T>, label: impl Fn(&T) -> String) -> Vec<TreeSnapshot> {
        arena
            .roots()
            .iter()
            .map(|&id| Self::node(arena, id, &label))
            .collect()
    }

    fn node<T>(arena: &Arena<T>, id: NodeId, label: &impl Fn(&T) -> String) -> TreeSnapshot {
        TreeSnapshot {
            label: arena.get(id).map(label).unwrap_or_default(),
            expanded: arena.is_expanded(id),
            children: arena
                .children(id)
                .iter()
                .map(|&child| Self::node(arena, child, label))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DocumentTree, ItemTree};

    #[test]
    fn test_item_forest() {
        let mut tree = ItemTree::new();
        tree.insert("1", "Hardware").unwrap();
        tree.insert("1.1", "AXI").unwrap();
        tree.insert("2", "Software").unwrap();

        let forest = TreeSnapshot::forest(tree.arena(), |node| node.label.clone());
        assert_eq!(forest.len(), 2);
        assert_eq!(forest[0].label, "1 Hardware");
        assert_eq!(forest[0].children[0].label, "1.1 AXI");
        assert!(forest[1].children.is_empty());
    }

    #[test]
    fn test_json_shape() {
        let mut tree = DocumentTree::new();
        tree.insert("SYS", None).unwrap();
        tree.insert("HLR", Some("SYS")).unwrap();

        let forest = TreeSnapshot::forest(tree.arena(), |node| node.prefix.clone());
        let json = serde_json::to_value(&forest).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"label": "SYS", "expanded": true, "children": [{"label": "HLR"}]}
            ])
        );
    }
}
