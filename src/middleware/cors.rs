//! Cross-origin middleware
//!
//! The browser editor is served from a different origin than the API, so
//! requests are accepted from anywhere.

use tower_http::cors::{Any, CorsLayer};

/// CORS policy allowing any origin, method and header
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
