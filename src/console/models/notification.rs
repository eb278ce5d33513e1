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
use strum::Display;

/// Severity shown next to a notification in the console
#[derive(Deserialize, Serialize, Clone, Copy, Debug, Display, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

/// Console notification
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    #[serde(default)]
    pub read: bool,
    pub created_at: DateTime<Utc>,
    /// Console route the notification points at, e.g. a loan detail page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Notification listing with its unread count
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationsResponse {
    pub notifications: Vec<Notification>,
    pub unread_count: usize,
}

impl NotificationsResponse {
    pub fn new(notifications: Vec<Notification>) -> Self {
        let unread_count = notifications.iter().filter(|n| !n.read).count();
        Self {
            notifications,
            unread_count,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn notification(id: &str, read: bool) -> Notification {
        Notification {
            id: id.to_string(),
            title: "Payment received".to_string(),
            message: "Loan L-1001 received a repayment".to_string(),
            kind: NotificationKind::Success,
            read,
            created_at: DateTime::from_timestamp(1_700_000_000, 0).expect("valid timestamp"),
            link: None,
        }
    }

    #[test]
    fn test_unread_count() {
        let response = NotificationsResponse::new(vec![
            notification("n1", false),
            notification("n2", true),
            notification("n3", false),
        ]);
        assert_eq!(response.unread_count, 2);
    }

    #[test]
    fn test_wire_shape() {
        let value = serde_json::to_value(notification("n1", false)).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "n1",
                "title": "Payment received",
                "message": "Loan L-1001 received a repayment",
                "kind": "success",
                "read": false,
                "createdAt": "2023-11-14T22:13:20Z"
            })
        );
        assert_eq!(NotificationKind::Warning.to_string(), "warning");
    }
}
