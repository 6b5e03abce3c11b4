use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Extension, OriginalUri, Path,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use userdir_directory::{NewUser, UserDirectory};

use crate::app::errors;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).delete(delete_user))
}

pub async fn list_users(
    Extension(directory): Extension<Arc<UserDirectory>>,
    OriginalUri(uri): OriginalUri,
) -> Response {
    tracing::info!("Processing request: GET /users");

    let users = match directory.list_all() {
        Ok(users) => users,
        Err(e) => return errors::domain_error_to_response(e, uri.path()),
    };

    if users.is_empty() {
        tracing::warn!("No users found in the system.");
        return StatusCode::NO_CONTENT.into_response();
    }

    tracing::info!(total = users.len(), "Users retrieved successfully");
    (StatusCode::OK, Json(users)).into_response()
}

pub async fn get_user(
    Extension(directory): Extension<Arc<UserDirectory>>,
    OriginalUri(uri): OriginalUri,
    id: Result<Path<String>, PathRejection>,
) -> Response {
    tracing::info!("Processing request: GET {}", uri.path());

    let user_id = match errors::parse_user_id(id, uri.path()) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    tracing::debug!(user_id = %user_id, "Searching for user");
    match directory.get_by_id(user_id) {
        Ok(Some(user)) => {
            tracing::info!(user_id = %user_id, "Successfully retrieved user");
            (StatusCode::OK, Json(user)).into_response()
        }
        Ok(None) => {
            tracing::warn!(user_id = %user_id, "User not found");
            errors::user_not_found(user_id, uri.path())
        }
        Err(e) => errors::domain_error_to_response(e, uri.path()),
    }
}

pub async fn create_user(
    Extension(directory): Extension<Arc<UserDirectory>>,
    OriginalUri(uri): OriginalUri,
    payload: Result<Json<Option<NewUser>>, JsonRejection>,
) -> Response {
    tracing::info!("Processing request: POST /users");

    let candidate = match payload {
        Ok(Json(candidate)) => candidate,
        Err(rejection) => {
            tracing::warn!(reason = %rejection.body_text(), "Rejected user payload");
            return errors::invalid_user("request body must be a JSON object");
        }
    };
    if candidate.is_none() {
        tracing::warn!("Received null user in request.");
    }

    match directory.create(candidate) {
        Ok(user) => {
            tracing::info!(user_id = %user.id, "User successfully added");
            (StatusCode::CREATED, Json(user)).into_response()
        }
        Err(e) => errors::domain_error_to_response(e, uri.path()),
    }
}

pub async fn delete_user(
    Extension(directory): Extension<Arc<UserDirectory>>,
    OriginalUri(uri): OriginalUri,
    id: Result<Path<String>, PathRejection>,
) -> Response {
    tracing::info!("Processing request: DELETE {}", uri.path());

    let user_id = match errors::parse_user_id(id, uri.path()) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match directory.delete_by_id(user_id) {
        Ok(true) => {
            tracing::info!(user_id = %user_id, "Successfully deleted user");
            StatusCode::NO_CONTENT.into_response()
        }
        Ok(false) => {
            tracing::warn!(user_id = %user_id, "User not found");
            errors::user_not_found(user_id, uri.path())
        }
        Err(e) => errors::domain_error_to_response(e, uri.path()),
    }
}
