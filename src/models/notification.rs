use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use uuid::Uuid;
use validator::Validate;

use crate::error::ValidationResult;
use crate::pagination::PageInfo;

use super::user::UserProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    TicketCreated,
    TicketAssigned,
    TicketStatusChanged,
    NewMessage,
    TicketResolved,
    SystemAlert,
    Reminder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationPriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Default for NotificationPriority {
    fn default() -> Self {
        Self::Medium
    }
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct NotificationCreate {
    pub user_id: Uuid,

    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(min = 1, max = 1000))]
    pub message: String,

    pub notification_type: NotificationType,

    #[serde(default)]
    pub priority: NotificationPriority,

    #[serde(default)]
    pub metadata: Map<String, JsonValue>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NotificationUpdate {
    #[serde(default = "default_true")]
    pub is_read: bool,

    pub read_at: Option<DateTime<Utc>>,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub message: String,
    pub notification_type: NotificationType,
    pub priority: NotificationPriority,
    pub is_read: bool,
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub metadata: Map<String, JsonValue>,
}

/// Listing view; `user` is filled in for admin views only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationSummary {
    pub id: Uuid,
    pub title: String,
    pub message: String,
    pub notification_type: NotificationType,
    pub priority: NotificationPriority,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    pub user: Option<UserProfile>,
}

impl NotificationSummary {
    pub fn from_response(notification: &NotificationResponse, user: Option<UserProfile>) -> Self {
        Self {
            id: notification.id,
            title: notification.title.clone(),
            message: notification.message.clone(),
            notification_type: notification.notification_type,
            priority: notification.priority,
            is_read: notification.is_read,
            created_at: notification.created_at,
            user,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedNotifications {
    pub notifications: Vec<NotificationSummary>,
    pub unread_count: i64,

    #[serde(flatten)]
    pub page_info: PageInfo,
}

impl PaginatedNotifications {
    pub fn new(
        notifications: Vec<NotificationSummary>,
        unread_count: i64,
        total: i64,
        page: i64,
        per_page: i64,
    ) -> ValidationResult<Self> {
        Ok(Self {
            notifications,
            unread_count,
            page_info: PageInfo::new(total, page, per_page)?,
        })
    }
}
