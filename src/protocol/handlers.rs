//! Request handlers for the file tree API.
//!
//! Every handler normalizes its path through the shared [`Storage`] handle
//! and runs the filesystem work on tokio's blocking pool.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use std::sync::Arc;

use crate::error::{ApiError, StorageError};
use crate::protocol::requests::{CreateFolderRequest, SaveFileRequest};
use crate::protocol::responses::{
    ContentBody, FILE_SAVED, FOLDER_CREATED, ITEM_DELETED, MessageBody,
};
use crate::storage::{Node, Storage};

/// Runs a storage operation off the async workers.
async fn run_blocking<T, F>(storage: &Arc<Storage>, op: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce(&Storage) -> Result<T, StorageError> + Send + 'static,
{
    let storage = Arc::clone(storage);
    tokio::task::spawn_blocking(move || op(&storage))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?
        .map_err(ApiError::from)
}

fn parse_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    body.map(|Json(value)| value)
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}

/// `GET /api/files`: the whole tree, sorted by name at every level.
pub async fn list_files(State(storage): State<Arc<Storage>>) -> Result<Json<Vec<Node>>, ApiError> {
    let nodes = run_blocking(&storage, |storage| storage.list_root()).await?;
    Ok(Json(nodes))
}

/// `GET /api/files/{path}`: contents of a single file.
pub async fn get_file(
    State(storage): State<Arc<Storage>>,
    Path(file_path): Path<String>,
) -> Result<Json<ContentBody>, ApiError> {
    let content = run_blocking(&storage, move |storage| storage.read_file(&file_path)).await?;
    Ok(Json(ContentBody { content }))
}

/// `POST /api/files/{path}`: create or overwrite a file.
pub async fn save_file(
    State(storage): State<Arc<Storage>>,
    Path(file_path): Path<String>,
    body: Result<Json<SaveFileRequest>, JsonRejection>,
) -> Result<Json<MessageBody>, ApiError> {
    let content = parse_body(body)?
        .content
        .ok_or(ApiError::MissingField("content"))?;

    run_blocking(&storage, move |storage| {
        storage.write_file(&file_path, &content)
    })
    .await?;

    Ok(Json(MessageBody::new(FILE_SAVED)))
}

/// `DELETE /api/files/{path}`: remove a file or a whole directory.
pub async fn delete_item(
    State(storage): State<Arc<Storage>>,
    Path(file_path): Path<String>,
) -> Result<Json<MessageBody>, ApiError> {
    run_blocking(&storage, move |storage| storage.delete(&file_path)).await?;
    Ok(Json(MessageBody::new(ITEM_DELETED)))
}

/// `POST /api/folders`: create a directory and its missing parents.
pub async fn create_folder(
    State(storage): State<Arc<Storage>>,
    body: Result<Json<CreateFolderRequest>, JsonRejection>,
) -> Result<Json<MessageBody>, ApiError> {
    let folder_path = parse_body(body)?
        .path
        .ok_or(ApiError::MissingField("path"))?;

    run_blocking(&storage, move |storage| storage.create_folder(&folder_path)).await?;

    Ok(Json(MessageBody::new(FOLDER_CREATED)))
}
