//! GameAPI HTTP presentation layer
//!
//! axum router, handlers and error mapping for the game catalog, account
//! and footprint endpoints.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod server;
pub mod state;

pub use error::{ApiError, set_expose_internal_errors};
pub use middleware::ApiJson;
pub use routes::create_router;
pub use server::serve_until;
pub use state::AppState;
