// Copyright 2025 RustFS Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use snafu::Snafu;

use crate::console::models::auth::MessageResponse;

pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal server error";
pub const API_BASE_URL_NOT_CONFIGURED_MESSAGE: &str = "API base URL not configured";
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";

/// Console API error type
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("API base URL not configured"))]
    ApiBaseUrlNotConfigured,

    #[snafu(display("upstream rejected login with {}: {}", status, message))]
    UpstreamRejected { status: StatusCode, message: String },

    #[snafu(display("invalid login request body: {}", source))]
    InvalidRequest { source: serde_json::Error },

    #[snafu(display("upstream request to {} failed: {}", url, source))]
    UpstreamRequest { url: String, source: reqwest::Error },

    #[snafu(display("upstream response from {} is not valid JSON: {}", url, source))]
    UpstreamBody {
        url: String,
        source: serde_json::Error,
    },

    #[snafu(display("issued token cannot be stored in a cookie: {}", source))]
    SessionCookie {
        source: axum::http::header::InvalidHeaderValue,
    },
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Error::ApiBaseUrlNotConfigured => {
                tracing::error!("{}", API_BASE_URL_NOT_CONFIGURED_MESSAGE);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    API_BASE_URL_NOT_CONFIGURED_MESSAGE.to_string(),
                )
            }
            Error::UpstreamRejected { status, message } => (status, message),
            internal => {
                // Detail stays in the log, the client only sees the generic message.
                tracing::error!("Login proxy error: {}", internal);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_SERVER_ERROR_MESSAGE.to_string(),
                )
            }
        };

        (status, Json(MessageResponse { message })).into_response()
    }
}

/// Result type for Console API
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("Body should be readable");
        serde_json::from_slice(&bytes).expect("Body should be JSON")
    }

    #[tokio::test]
    async fn test_rejected_keeps_upstream_status() {
        let response = Error::UpstreamRejected {
            status: StatusCode::UNAUTHORIZED,
            message: "Invalid credentials".to_string(),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "message": "Invalid credentials" })
        );
    }

    #[tokio::test]
    async fn test_internal_errors_are_masked() {
        let source = serde_json::from_str::<serde_json::Value>("<html>")
            .expect_err("HTML is not JSON");
        let response = Error::UpstreamBody {
            url: "http://upstream/api/auth/login".to_string(),
            source,
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "message": INTERNAL_SERVER_ERROR_MESSAGE })
        );
    }

    #[tokio::test]
    async fn test_unconfigured_message() {
        let response = Error::ApiBaseUrlNotConfigured.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "message": API_BASE_URL_NOT_CONFIGURED_MESSAGE })
        );
    }
}
