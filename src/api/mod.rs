//! API Module
//!
//! HTTP layer: route configuration and request handlers.

pub mod handlers;
pub mod routes;

// Re-export public types
pub use handlers::AppState;
pub use routes::create_router;
