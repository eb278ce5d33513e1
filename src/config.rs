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

use std::str::FromStr;

use axum::http::HeaderValue;
use axum::http::header::InvalidHeaderValue;
use clap::Args;
use snafu::{ResultExt, Snafu};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Options for the `server` subcommand.
///
/// Every flag falls back to an environment variable so the service can be
/// configured the same way the front end is deployed.
#[derive(Args, Debug, Clone)]
pub struct ServerArgs {
    /// Port the console listens on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Public-facing upstream base URL; takes precedence over --api-base-url
    #[arg(long, env = "NEXT_PUBLIC_API_BASE_URL")]
    pub public_api_base_url: Option<String>,

    /// Server-only upstream base URL
    #[arg(long, env = "API_BASE_URL")]
    pub api_base_url: Option<String>,

    /// Browser origin allowed to call the API with credentials
    #[arg(long, env = "CONSOLE_ALLOWED_ORIGIN", default_value = DEFAULT_ALLOWED_ORIGIN)]
    pub allowed_origin: AllowedOrigin,
}

impl ServerArgs {
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            public_base_url: self.public_api_base_url.clone(),
            server_base_url: self.api_base_url.clone(),
        }
    }
}

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display(
        "allowed origin '*' cannot be used, the console sends credentialed CORS responses"
    ))]
    WildcardOrigin,

    #[snafu(display("invalid allowed origin '{}': {}", origin, source))]
    InvalidOrigin {
        origin: String,
        source: InvalidHeaderValue,
    },
}

/// A single browser origin for credentialed CORS requests.
///
/// Never `*`: browsers refuse a wildcard origin once credentials are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedOrigin(HeaderValue);

impl AllowedOrigin {
    pub fn header_value(&self) -> &HeaderValue {
        &self.0
    }
}

impl Default for AllowedOrigin {
    fn default() -> Self {
        Self(HeaderValue::from_static(DEFAULT_ALLOWED_ORIGIN))
    }
}

impl FromStr for AllowedOrigin {
    type Err = Error;

    fn from_str(origin: &str) -> Result<Self, Self::Err> {
        let origin = origin.trim();
        if origin == "*" {
            return WildcardOriginSnafu.fail();
        }
        HeaderValue::from_str(origin)
            .map(Self)
            .context(InvalidOriginSnafu { origin })
    }
}

/// Upstream location for the auth service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiConfig {
    pub public_base_url: Option<String>,
    pub server_base_url: Option<String>,
}

impl ApiConfig {
    /// Returns the upstream base URL without a trailing slash, or `None` when
    /// neither setting carries a value.
    ///
    /// Empty strings count as unset.
    pub fn resolve_base_url(&self) -> Option<&str> {
        let base = [&self.public_base_url, &self.server_base_url]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|url| !url.is_empty())?;

        Some(base.strip_suffix('/').unwrap_or(base))
    }
}
