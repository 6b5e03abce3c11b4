//! HTTP API application wiring (Axum router + directory sharing).
//!
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: response payload shapes
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use userdir_directory::UserDirectory;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
///
/// The directory is shared by every request; callers own its lifetime.
pub fn build_app(directory: Arc<UserDirectory>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(Extension(directory))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::catch_panic_layer()),
        )
}
