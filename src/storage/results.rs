//! Storage result types
//!
//! Defines the tree nodes returned by listing operations.

use serde::Serialize;

/// A file or directory in the storage tree.
///
/// Serializes with a `type` tag of `"file"` or `"directory"`; `path` is
/// always relative to the storage root and slash-separated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    File {
        name: String,
        path: String,
    },
    Directory {
        name: String,
        path: String,
        children: Vec<Node>,
    },
}

impl Node {
    pub fn file(name: impl Into<String>, path: impl Into<String>) -> Self {
        Node::File {
            name: name.into(),
            path: path.into(),
        }
    }

    pub fn directory(name: impl Into<String>, path: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Directory {
            name: name.into(),
            path: path.into(),
            children,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Node::File { name, .. } | Node::Directory { name, .. } => name,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Node::File { path, .. } | Node::Directory { path, .. } => path,
        }
    }

    /// Children of a directory; empty for files
    pub fn children(&self) -> &[Node] {
        match self {
            Node::File { .. } => &[],
            Node::Directory { children, .. } => children,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Node::Directory { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_type_tag() {
        let tree = Node::directory(
            "notes",
            "notes",
            vec![Node::file("today.md", "notes/today.md")],
        );

        assert_eq!(
            serde_json::to_value(&tree).unwrap(),
            json!({
                "type": "directory",
                "name": "notes",
                "path": "notes",
                "children": [
                    { "type": "file", "name": "today.md", "path": "notes/today.md" }
                ]
            })
        );
    }
}
