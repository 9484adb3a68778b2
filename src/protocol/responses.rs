//! Response bodies
//!
//! JSON shapes and fixed messages returned by the API.

use serde::Serialize;

pub const FILE_SAVED: &str = "File saved successfully";
pub const ITEM_DELETED: &str = "Item deleted successfully";
pub const FOLDER_CREATED: &str = "Folder created successfully";

/// `{"content": ...}`
#[derive(Debug, Serialize)]
pub struct ContentBody {
    pub content: String,
}

/// `{"message": ...}`
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

impl MessageBody {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

/// `{"error": ...}`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}
