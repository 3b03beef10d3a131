//! API error response types

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Message returned for any malformed request parameter
pub const ILLEGAL_PARAMETER: &str = "Illegal parameter";

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Failure of an API handler
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A path or query parameter failed to parse or was out of range
    #[error("{msg}", msg = ILLEGAL_PARAMETER)]
    IllegalParameter,

    /// The registry reported an error
    #[error(transparent)]
    Registry(#[from] crate::Error),
}

impl ApiError {
    /// Text sent to the client; SQLite errors pass through unprefixed
    pub fn client_message(&self) -> String {
        match self {
            ApiError::Registry(crate::Error::Storage(e)) => e.to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Registry(e) = &self {
            tracing::warn!("registry error: {}", e);
        }

        // Storage faults are reported as client errors too.
        let body = ErrorResponse {
            error: self.client_message(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_illegal_parameter_response() {
        let response = ApiError::IllegalParameter.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], br#"{"error":"Illegal parameter"}"#);
    }

    #[tokio::test]
    async fn test_storage_error_sent_verbatim() {
        let err = crate::Error::Storage(rusqlite::Error::QueryReturnedNoRows);
        let expected = rusqlite::Error::QueryReturnedNoRows.to_string();

        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], expected);
    }

    #[tokio::test]
    async fn test_other_registry_error_keeps_message() {
        let err = crate::Error::Unavailable("lock poisoned".to_string());
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["error"],
            "Registry unavailable: lock poisoned"
        );
    }
}
