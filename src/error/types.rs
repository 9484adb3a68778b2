//! Error types
//!
//! Storage-level failures, the request-level errors they surface as, and
//! startup failures.

use std::fmt;
use std::io;

/// Storage module errors
#[derive(Debug)]
pub enum StorageError {
    NotFound(String),
    NotAFile(String),
    AlreadyExists(String),
    DecodeError(String),
    Forbidden(String),
    IoError(io::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::NotFound(p) => write!(f, "Path not found: {}", p),
            StorageError::NotAFile(p) => write!(f, "Path is not a file: {}", p),
            StorageError::AlreadyExists(p) => write!(f, "Path already exists: {}", p),
            StorageError::DecodeError(p) => write!(f, "File is not valid UTF-8: {}", p),
            StorageError::Forbidden(p) => write!(f, "Path escapes storage root: {}", p),
            StorageError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for StorageError {
    fn from(error: io::Error) -> Self {
        StorageError::IoError(error)
    }
}

/// Errors raised while serving an HTTP request
#[derive(Debug)]
pub enum ApiError {
    /// Request body lacks a required key
    MissingField(&'static str),
    /// Request body could not be parsed
    BadRequest(String),
    Storage(StorageError),
    /// The blocking worker running a storage operation failed
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::MissingField("content") => write!(f, "No content provided"),
            ApiError::MissingField("path") => write!(f, "No path provided"),
            ApiError::MissingField(field) => write!(f, "No {} provided", field),
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Storage(e) => write!(f, "{}", e),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Storage(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StorageError> for ApiError {
    fn from(error: StorageError) -> Self {
        ApiError::Storage(error)
    }
}

/// Errors that stop the server from starting or keep it from running
#[derive(Debug)]
pub enum ServerError {
    Config(config::ConfigError),
    Storage(StorageError),
    Bind(String, io::Error),
    IoError(io::Error),
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::Config(e) => write!(f, "Configuration error: {}", e),
            ServerError::Storage(e) => write!(f, "Storage root unavailable: {}", e),
            ServerError::Bind(addr, e) => write!(f, "Failed to bind to {}: {}", addr, e),
            ServerError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for ServerError {}

impl From<config::ConfigError> for ServerError {
    fn from(error: config::ConfigError) -> Self {
        ServerError::Config(error)
    }
}

impl From<StorageError> for ServerError {
    fn from(error: StorageError) -> Self {
        ServerError::Storage(error)
    }
}

impl From<io::Error> for ServerError {
    fn from(error: io::Error) -> Self {
        ServerError::IoError(error)
    }
}
