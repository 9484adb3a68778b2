//! Request bodies
//!
//! Required keys are optional at the type level so a missing key is reported
//! as a missing field rather than a generic parse failure.

use serde::Deserialize;

/// Body of `POST /api/files/{path}`
#[derive(Debug, Default, Deserialize)]
pub struct SaveFileRequest {
    pub content: Option<String>,
}

/// Body of `POST /api/folders`
#[derive(Debug, Default, Deserialize)]
pub struct CreateFolderRequest {
    pub path: Option<String>,
}
