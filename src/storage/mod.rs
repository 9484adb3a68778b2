//! File system storage management
//!
//! Handles path validation, tree listing and file operations under the
//! storage root.

pub mod filesystem;
pub mod operations;
pub mod results;
pub mod tree;
pub mod validation;

pub use filesystem::Storage;
pub use results::Node;
pub use validation::{
    ResolvedPath, ensure_link_target_contained, normalize_path, resolve_under_root,
};
