use axum::extract::{rejection::PathRejection, Path};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use userdir_core::{DomainError, UserId};

use crate::app::dto::{ErrorDetails, InvalidBody, InvalidIdBody};

pub const INVALID_ID: &str = "Invalid ID";
pub const INVALID_USER: &str = "Invalid User";
pub const USER_NOT_FOUND: &str = "User Not Found";
pub const SERVER_ERROR: &str = "Server Error";
pub const GENERIC_FAULT_MESSAGE: &str = "An unexpected internal error occurred.";

pub fn invalid_id(raw: &str) -> Response {
    let id = match raw.trim().parse::<i64>() {
        Ok(n) => json!(n),
        Err(_) => json!(raw),
    };
    (
        StatusCode::BAD_REQUEST,
        Json(InvalidIdBody {
            error: INVALID_ID,
            id,
        }),
    )
        .into_response()
}

pub fn invalid_user(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(InvalidBody {
            error: INVALID_USER,
            message: message.into(),
        }),
    )
        .into_response()
}

pub fn user_not_found(id: UserId, path: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorDetails::new(
            StatusCode::NOT_FOUND.as_u16(),
            USER_NOT_FOUND,
            format!("No user found with ID {id}"),
            Some(path.to_string()),
        )),
    )
        .into_response()
}

/// Generic 500. Never carries internal detail; log before calling this.
pub fn server_error(path: Option<&str>) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorDetails::new(
            StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            SERVER_ERROR,
            GENERIC_FAULT_MESSAGE,
            path.map(str::to_string),
        )),
    )
        .into_response()
}

pub fn domain_error_to_response(err: DomainError, path: &str) -> Response {
    match err {
        DomainError::InvalidInput(msg) => invalid_user(msg),
        DomainError::InvalidId(raw) => invalid_id(&raw),
        DomainError::Internal(msg) => {
            tracing::error!(path, error = %msg, "directory operation failed");
            server_error(Some(path))
        }
    }
}

/// Validate the `{id}` path segment: must be an integer greater than zero.
///
/// A segment axum could not decode (e.g. invalid UTF-8) is echoed back
/// undecoded, taken from the request path.
pub fn parse_user_id(
    id: Result<Path<String>, PathRejection>,
    path: &str,
) -> Result<UserId, Response> {
    let raw = match id {
        Ok(Path(raw)) => raw,
        Err(rejection) => {
            let segment = path.rsplit('/').next().unwrap_or_default();
            tracing::warn!(id = segment, reason = %rejection.body_text(), "Invalid user ID");
            return Err(invalid_id(segment));
        }
    };

    raw.parse::<UserId>().map_err(|e| {
        tracing::warn!(id = %raw, reason = %e, "Invalid user ID");
        domain_error_to_response(e, path)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    async fn body_of(res: Response) -> (StatusCode, Vec<u8>) {
        let status = res.status();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn internal_error_is_generic_500() {
        let res = domain_error_to_response(DomainError::internal("secret lock state"), "/users/1");
        let (status, bytes) = body_of(res).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], 500);
        assert_eq!(body["error"], SERVER_ERROR);
        assert_eq!(body["message"], GENERIC_FAULT_MESSAGE);
        assert_eq!(body["path"], "/users/1");
        assert!(body["timestamp"].as_str().is_some_and(|t| !t.is_empty()));
        assert!(!bytes.windows(6).any(|w| w == b"secret"));
    }

    #[tokio::test]
    async fn invalid_input_is_bad_request() {
        let res = domain_error_to_response(DomainError::invalid_input("missing"), "/users");
        let (status, bytes) = body_of(res).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], INVALID_USER);
    }

    #[tokio::test]
    async fn rejected_id_echoes_the_received_text() {
        for (raw, expected) in [("0", json!(0)), ("-3", json!(-3)), ("x7", json!("x7"))] {
            let res = parse_user_id(Ok(Path(raw.to_string())), &format!("/users/{raw}"))
                .unwrap_err();
            let (status, bytes) = body_of(res).await;

            assert_eq!(status, StatusCode::BAD_REQUEST);
            let body: Value = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(body, json!({ "error": INVALID_ID, "id": expected }));
        }
    }

    #[test]
    fn accepts_positive_ids() {
        let id = parse_user_id(Ok(Path("12".to_string())), "/users/12").unwrap();
        assert_eq!(id.get(), 12);
    }
}
