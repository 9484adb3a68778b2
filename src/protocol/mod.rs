//! HTTP API implementation
//!
//! Maps JSON requests onto storage operations and formats their responses.

pub mod handlers;
pub mod requests;
pub mod responses;

pub use handlers::{create_folder, delete_item, get_file, list_files, save_file};
pub use requests::{CreateFolderRequest, SaveFileRequest};
pub use responses::{ContentBody, ErrorBody, MessageBody};
