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
use axum::http::{Method, header};
use axum::{Router, http::StatusCode, response::IntoResponse, routing::get};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::config::{AllowedOrigin, ServerArgs};
use crate::console::{routes, state::AppState, upstream::UpstreamClient};

/// 启动 Console HTTP Server
pub async fn run(args: ServerArgs) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Starting lending console on port {}", args.port);

    let state = AppState::new(args.api_config(), UpstreamClient::new());

    match state.api_config.resolve_base_url() {
        Some(base_url) => tracing::info!("Upstream auth service: {}", base_url),
        None => tracing::warn!(
            "Neither NEXT_PUBLIC_API_BASE_URL nor API_BASE_URL is set, logins will fail"
        ),
    }

    let app = app(state, &args.allowed_origin);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], args.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Console server listening on http://{}", addr);
    tracing::info!("CORS origin: {:?}", args.allowed_origin.header_value());
    tracing::info!("API endpoints:");
    tracing::info!("  - POST /api/auth/login");
    tracing::info!("  - POST /api/auth/logout");
    tracing::info!("  - GET  /api/auth/session");
    tracing::info!("  - GET  /healthz");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Console server stopped");
    Ok(())
}

/// 构建应用
pub fn app(state: AppState, allowed_origin: &AllowedOrigin) -> Router {
    Router::new()
        // 健康检查
        .route("/healthz", get(health_check))
        .route("/readyz", get(ready_check))
        .nest("/api", api_routes())
        .with_state(state)
        // 应用中间件层 (从内到外)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(allowed_origin.header_value().clone())
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE, header::COOKIE])
                .allow_credentials(true),
        )
}

/// API 路由组合
fn api_routes() -> Router<AppState> {
    Router::new().merge(routes::auth_routes())
}

/// 健康检查
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// 就绪检查
async fn ready_check() -> impl IntoResponse {
    (StatusCode::OK, "Ready")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
