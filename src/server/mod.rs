//! Server core functionality
//!
//! Binds the HTTP listener, builds the route table and runs the serve loop.

pub mod core;
pub mod routes;

pub use self::core::Server;
pub use routes::build_router;
