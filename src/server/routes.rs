//! Route table
//!
//! Wires the API handlers, request logging and CORS onto one router.

use axum::routing::{get, post};
use axum::{Router, middleware};
use std::sync::Arc;

use crate::middleware::{cors_layer, log_request};
use crate::protocol::{create_folder, delete_item, get_file, list_files, save_file};
use crate::storage::Storage;

/// Builds the application router around a shared storage handle
pub fn build_router(storage: Arc<Storage>) -> Router {
    Router::new()
        .route("/api/files", get(list_files))
        .route(
            "/api/files/{*path}",
            get(get_file).post(save_file).delete(delete_item),
        )
        .route("/api/folders", post(create_folder))
        .layer(middleware::from_fn(log_request))
        .layer(cors_layer())
        .with_state(storage)
}
