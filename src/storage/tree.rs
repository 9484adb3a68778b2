//! Tree listing
//!
//! Builds [`Node`] descriptions of the live filesystem. Directories are
//! walked with an explicit stack, so nesting depth never grows the call
//! stack; directories deeper than the configured limit are reported without
//! children. Symlinks are never followed and are listed as files.

use log::{debug, warn};
use std::fs;
use std::path::Path;
use std::vec;

use crate::error::StorageError;
use crate::storage::filesystem::{Storage, is_real_directory};
use crate::storage::results::Node;

/// A directory whose children are still being described
struct Frame {
    name: String,
    path: String,
    depth: usize,
    pending: vec::IntoIter<String>,
    children: Vec<Node>,
}

impl Frame {
    fn open(name: String, path: String, location: &Path, depth: usize) -> Result<Self, StorageError> {
        let entries = sorted_entry_names(location)?;
        Ok(Self {
            name,
            path,
            depth,
            children: Vec::with_capacity(entries.len()),
            pending: entries.into_iter(),
        })
    }

    fn into_node(self) -> Node {
        Node::directory(self.name, self.path, self.children)
    }
}

impl Storage {
    /// Lists every entry directly under the storage root, described recursively.
    pub fn list_root(&self) -> Result<Vec<Node>, StorageError> {
        let root = self.walk(String::new(), String::new(), self.root(), 0)?;
        debug!("Listed storage root - {} top-level entries", root.children().len());

        match root {
            Node::Directory { children, .. } => Ok(children),
            Node::File { .. } => Ok(Vec::new()),
        }
    }

    /// Describes the entry at `raw`: a file leaf, or a directory with its
    /// children sorted by name.
    ///
    /// `name` is the last segment of the given path; `path` is the cleaned
    /// path relative to the root.
    pub fn describe(&self, raw: &str) -> Result<Node, StorageError> {
        let resolved = self.resolve(raw)?;
        let name = raw
            .replace('\\', "/")
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .to_string();
        let depth = resolved.relative.split('/').filter(|s| !s.is_empty()).count();

        self.walk(name, resolved.relative, &resolved.absolute, depth)
    }

    fn walk(
        &self,
        name: String,
        path: String,
        location: &Path,
        depth: usize,
    ) -> Result<Node, StorageError> {
        if !is_real_directory(location) {
            return Ok(Node::file(name, path));
        }

        let mut current = Frame::open(name, path, location, depth)?;
        let mut parents: Vec<Frame> = Vec::new();

        loop {
            match current.pending.next() {
                Some(child) => {
                    let child_path = join_relative(&current.path, &child);
                    let child_location = self.root().join(&child_path);
                    let child_depth = current.depth + 1;

                    if !is_real_directory(&child_location) {
                        current.children.push(Node::file(child, child_path));
                    } else if child_depth > self.max_depth() {
                        warn!(
                            "Directory {} exceeds max depth {}; children omitted",
                            child_path,
                            self.max_depth()
                        );
                        current
                            .children
                            .push(Node::directory(child, child_path, Vec::new()));
                    } else {
                        let next = Frame::open(child, child_path, &child_location, child_depth)?;
                        parents.push(std::mem::replace(&mut current, next));
                    }
                }
                None => {
                    let node = current.into_node();
                    match parents.pop() {
                        Some(mut parent) => {
                            parent.children.push(node);
                            current = parent;
                        }
                        None => return Ok(node),
                    }
                }
            }
        }
    }
}

fn sorted_entry_names(location: &Path) -> Result<Vec<String>, StorageError> {
    let mut names = fs::read_dir(location)?
        .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
        .collect::<Result<Vec<_>, _>>()?;
    names.sort();
    Ok(names)
}

fn join_relative(parent: &str, child: &str) -> String {
    if parent.is_empty() {
        child.to_string()
    } else {
        format!("{}/{}", parent, child)
    }
}
