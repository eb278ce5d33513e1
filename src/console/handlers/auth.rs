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
    body::Bytes,
    extract::State,
    http::{HeaderMap, HeaderValue, header},
    response::{IntoResponse, Response},
};
use snafu::{OptionExt, ResultExt};

use crate::console::{
    cookie,
    error::{self, Error, LOGIN_FAILED_MESSAGE, Result},
    models::auth::{LoginRequest, MessageResponse, SessionResponse},
    state::AppState,
    upstream::LoginOutcome,
};

/// 登录处理
///
/// 将凭据转发到上游认证服务并原样返回其响应。
/// 上游返回 2xx 且带有 token 时, 额外设置会话 Cookie
pub async fn login(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response> {
    tracing::info!("Login attempt");

    let base_url = state
        .api_config
        .resolve_base_url()
        .context(error::ApiBaseUrlNotConfiguredSnafu)?;

    // 不校验 Content-Type
    let req: LoginRequest = serde_json::from_slice(&body).context(error::InvalidRequestSnafu)?;

    match state.upstream.login(base_url, &req).await? {
        LoginOutcome::Rejected { status, message } => Err(Error::UpstreamRejected {
            status,
            message: message.unwrap_or_else(|| LOGIN_FAILED_MESSAGE.to_string()),
        }),
        LoginOutcome::Accepted(payload) => {
            let set_cookie = payload
                .token()
                .map(|token| HeaderValue::from_str(&cookie::session_cookie(token)))
                .transpose()
                .context(error::SessionCookieSnafu)?;

            let mut response = Json(payload.into_inner()).into_response();
            match set_cookie {
                Some(value) => {
                    tracing::info!("Login successful, session cookie issued");
                    response.headers_mut().insert(header::SET_COOKIE, value);
                }
                None => tracing::info!("Login successful without token"),
            }

            Ok(response)
        }
    }
}

/// 登出处理
pub async fn logout() -> impl IntoResponse {
    // 清除 Cookie
    let headers = [(header::SET_COOKIE, cookie::clear_session_cookie())];

    (
        headers,
        Json(MessageResponse {
            message: "Logged out".to_string(),
        }),
    )
}

/// 检查会话
///
/// 只检查 token Cookie 是否存在, 不做校验 (由上游负责)
pub async fn session_check(headers: HeaderMap) -> Json<SessionResponse> {
    let authenticated = headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .any(|cookies| cookie::parse_session_cookie(cookies).is_some());

    Json(SessionResponse { authenticated })
}
