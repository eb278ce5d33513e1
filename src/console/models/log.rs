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
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::Display;

#[derive(Deserialize, Serialize, Clone, Copy, Debug, Display, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Operational log entry shown in the console
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub id: String,
    pub level: LogLevel,
    pub message: String,
    pub source: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,
}

/// Paged log listing
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LogsResponse {
    pub logs: Vec<LogEntry>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_logs_response_from_backend() {
        let body = json!({
            "logs": [{
                "id": "log-1",
                "level": "warn",
                "message": "Repayment overdue",
                "source": "collections",
                "timestamp": "2024-03-01T08:00:00Z",
                "context": { "loanId": "L-1001" }
            }],
            "total": 41,
            "page": 2,
            "pageSize": 20
        });

        let response: LogsResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.total, 41);
        assert_eq!(response.page_size, 20);
        assert_eq!(response.logs[0].level, LogLevel::Warn);
        assert_eq!(response.logs[0].context, Some(json!({ "loanId": "L-1001" })));
        assert!(LogLevel::Error > LogLevel::Info);
    }
}
