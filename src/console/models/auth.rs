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

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Credentials submitted by the browser, forwarded upstream as-is
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Body returned by the upstream auth service.
///
/// Kept as raw JSON so the client receives exactly what upstream sent. Only
/// `token` and `message` are read.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct UpstreamAuthResponse(pub Value);

impl UpstreamAuthResponse {
    /// Issued token, if present as a non-empty string
    pub fn token(&self) -> Option<&str> {
        self.non_empty_str("token")
    }

    /// Upstream message, if present as a non-empty string
    pub fn message(&self) -> Option<&str> {
        self.non_empty_str("message")
    }

    pub fn into_inner(self) -> Value {
        self.0
    }

    fn non_empty_str(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }
}

/// Generic `{ "message": ... }` body used for errors and logout
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Session presence check response
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub authenticated: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_token_accessor() {
        let body = UpstreamAuthResponse(json!({ "token": "abc123", "role": "admin" }));
        assert_eq!(body.token(), Some("abc123"));
        assert_eq!(body.message(), None);

        assert_eq!(UpstreamAuthResponse(json!({ "token": "" })).token(), None);
        assert_eq!(UpstreamAuthResponse(json!({ "token": null })).token(), None);
        assert_eq!(UpstreamAuthResponse(json!({ "token": 42 })).token(), None);
        assert_eq!(UpstreamAuthResponse(json!(["token"])).token(), None);
    }

    #[test]
    fn test_payload_is_preserved() {
        let raw = r#"{"role":"admin","token":"abc123","profile":{"id":7}}"#;
        let body: UpstreamAuthResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(serde_json::to_string(&body).unwrap(), raw);
    }

    #[test]
    fn test_login_request_missing_fields() {
        let req: LoginRequest = serde_json::from_str(r#"{"username":"alice"}"#).unwrap();
        assert_eq!(req.username, "alice");
        assert_eq!(req.password, "");
    }
}
