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
use axum::http::StatusCode;
use reqwest::Client;
use snafu::ResultExt;

use crate::console::{
    error::{self, Result},
    models::auth::{LoginRequest, UpstreamAuthResponse},
};

/// Path of the login endpoint on the upstream auth service
pub const LOGIN_PATH: &str = "/api/auth/login";

/// Classified result of a login round-trip that reached the upstream service
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    /// 2xx response with its JSON payload
    Accepted(UpstreamAuthResponse),
    /// Non-2xx response; `message` is upstream's non-empty message, if any
    Rejected {
        status: StatusCode,
        message: Option<String>,
    },
}

/// HTTP client for the upstream auth service.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone, Default)]
pub struct UpstreamClient {
    client: Client,
}

impl UpstreamClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a preconfigured reqwest client (proxies, TLS roots, timeouts)
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// `base_url` must already have its trailing slash stripped
    pub fn login_url(base_url: &str) -> String {
        format!("{}{}", base_url, LOGIN_PATH)
    }

    /// Forwards credentials to `<base_url>/api/auth/login`.
    ///
    /// Single attempt without retry. Transport failures and non-JSON bodies
    /// come back as errors; any HTTP status is an outcome.
    pub async fn login(&self, base_url: &str, credentials: &LoginRequest) -> Result<LoginOutcome> {
        let url = Self::login_url(base_url);
        tracing::debug!("Forwarding login for '{}' to {}", credentials.username, url);

        let response = self
            .client
            .post(&url)
            .json(credentials)
            .send()
            .await
            .context(error::UpstreamRequestSnafu { url: &url })?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .context(error::UpstreamRequestSnafu { url: &url })?;
        let body: UpstreamAuthResponse =
            serde_json::from_slice(&bytes).context(error::UpstreamBodySnafu { url: &url })?;

        if status.is_success() {
            Ok(LoginOutcome::Accepted(body))
        } else {
            tracing::info!("Upstream rejected login with status {}", status);
            Ok(LoginOutcome::Rejected {
                status,
                message: body.message().map(str::to_string),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_url() {
        assert_eq!(
            UpstreamClient::login_url("https://api.example.com"),
            "https://api.example.com/api/auth/login"
        );
    }
}
