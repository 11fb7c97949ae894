//! Core data model for treesvg
//!
//! Defines `TreeNode`, the tree shape consumed by the layout engine and
//! exchanged as JSON via `--input`.

use serde::{Deserialize, Serialize};

use crate::error::TreeSvgResult;

/// Kind of tree entry
///
/// Serialized under the JSON key `type` as `"folder"` / `"file"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Folder,
    File,
}

/// One entry in a folder tree
///
/// `children` is meaningful only for folders, but this is not validated:
/// the layout engine treats any node with a non-empty `children` list as
/// branching, regardless of its declared kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Display label
    pub name: String,

    /// Folder or file
    #[serde(rename = "type")]
    pub kind: NodeKind,

    /// Child entries, in render order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Create a file leaf
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::File,
            children: Vec::new(),
        }
    }

    /// Create a folder with the given children
    pub fn folder(name: impl Into<String>, children: Vec<TreeNode>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Folder,
            children,
        }
    }

    /// Whether the layout engine treats this node as branching
    pub fn is_branch(&self) -> bool {
        !self.children.is_empty()
    }

    /// Parse a tree from its JSON description.
    pub fn from_json(json: &str) -> TreeSvgResult<TreeNode> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_tree_json() {
        let json = r#"{
            "name": "src",
            "type": "folder",
            "children": [
                { "name": "main.rs", "type": "file" }
            ]
        }"#;
        let tree: TreeNode = serde_json::from_str(json).unwrap();
        assert_eq!(tree.name, "src");
        assert_eq!(tree.kind, NodeKind::Folder);
        assert_eq!(tree.children.len(), 1);
        assert_eq!(tree.children[0].kind, NodeKind::File);
        assert!(tree.children[0].children.is_empty());
    }

    #[test]
    fn test_serialize_skips_empty_children() {
        let tree = TreeNode::file("readme.md");
        let json = serde_json::to_string(&tree).unwrap();
        assert_eq!(json, r#"{"name":"readme.md","type":"file"}"#);
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        assert!(TreeNode::from_json("{ not json").is_err());
        assert!(TreeNode::from_json(r#"{"name":"x","type":"file"}"#).is_ok());
    }

    #[test]
    fn test_file_with_children_is_branch() {
        // Malformed by the data model, but deliberately tolerated.
        let mut node = TreeNode::file("weird");
        node.children.push(TreeNode::file("inner"));
        assert!(node.is_branch());
    }
}
