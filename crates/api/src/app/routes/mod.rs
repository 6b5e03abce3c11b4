use axum::Router;

pub mod system;
pub mod users;

/// Router for all directory endpoints.
pub fn router() -> Router {
    Router::new().nest("/users", users::router())
}
