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
use std::sync::Arc;

use crate::config::ApiConfig;
use crate::console::upstream::UpstreamClient;

/// Console 应用状态
///
/// 所有请求只读共享
#[derive(Clone)]
pub struct AppState {
    /// 上游认证服务地址配置, 每个请求解析一次
    pub api_config: Arc<ApiConfig>,
    pub upstream: UpstreamClient,
}

impl AppState {
    /// 创建新的应用状态
    pub fn new(api_config: ApiConfig, upstream: UpstreamClient) -> Self {
        Self {
            api_config: Arc::new(api_config),
            upstream,
        }
    }
}
