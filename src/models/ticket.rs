use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::error::ValidationResult;
use crate::pagination::PageInfo;

use super::user::UserProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketPriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Default for TicketPriority {
    fn default() -> Self {
        Self::Medium
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Open,
    InProgress,
    Pending,
    Resolved,
    Closed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketCategory {
    Technical,
    Billing,
    General,
    FeatureRequest,
    BugReport,
    Account,
}

impl Default for TicketCategory {
    fn default() -> Self {
        Self::General
    }
}

/// File metadata referenced by tickets and messages. The bytes themselves
/// live in external storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    pub id: Uuid,
    pub filename: String,
    pub file_size: i64,
    pub content_type: String,
    pub file_path: String,
    pub uploaded_by: Uuid,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct TicketCreate {
    #[validate(length(min = 5, max = 200))]
    pub title: String,

    #[validate(length(min = 10, max = 5000))]
    pub description: String,

    #[serde(default)]
    pub category: TicketCategory,

    #[serde(default)]
    pub priority: TicketPriority,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct TicketUpdate {
    #[validate(length(min = 5, max = 200))]
    pub title: Option<String>,

    #[validate(length(min = 10, max = 5000))]
    pub description: Option<String>,

    pub category: Option<TicketCategory>,
    pub priority: Option<TicketPriority>,
    pub status: Option<TicketStatus>,
    pub assigned_to: Option<Uuid>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TicketAssign {
    pub assigned_to: Uuid,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct TicketStatusUpdate {
    pub status: TicketStatus,

    #[validate(length(max = 1000))]
    pub resolution_note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: TicketCategory,
    pub priority: TicketPriority,
    pub status: TicketStatus,
    pub created_by: Option<UserProfile>,
    pub assigned_to: Option<UserProfile>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub resolution_note: Option<String>,
    pub message_count: i64,
    pub attachments: Vec<Attachment>,
    pub tags: Vec<String>,
}

/// Listing view without description, attachments, or resolution detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketSummary {
    pub id: Uuid,
    pub title: String,
    pub category: TicketCategory,
    pub priority: TicketPriority,
    pub status: TicketStatus,
    pub created_by: Option<UserProfile>,
    pub assigned_to: Option<UserProfile>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub message_count: i64,
}

impl TicketSummary {
    pub fn from_response(ticket: &TicketResponse) -> Self {
        Self {
            id: ticket.id,
            title: ticket.title.clone(),
            category: ticket.category,
            priority: ticket.priority,
            status: ticket.status,
            created_by: ticket.created_by.clone(),
            assigned_to: ticket.assigned_to.clone(),
            created_at: ticket.created_at,
            updated_at: ticket.updated_at,
            message_count: ticket.message_count,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize, Validate)]
pub struct TicketFilter {
    pub status: Option<Vec<TicketStatus>>,
    pub priority: Option<Vec<TicketPriority>>,
    pub category: Option<Vec<TicketCategory>>,
    pub assigned_to: Option<Vec<Uuid>>,
    pub created_by: Option<Vec<Uuid>>,
    pub created_after: Option<DateTime<Utc>>,
    pub created_before: Option<DateTime<Utc>>,

    #[validate(length(max = 100))]
    pub search: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedTickets {
    pub tickets: Vec<TicketSummary>,

    #[serde(flatten)]
    pub page_info: PageInfo,
}

impl PaginatedTickets {
    pub fn new(
        tickets: Vec<TicketSummary>,
        total: i64,
        page: i64,
        per_page: i64,
    ) -> ValidationResult<Self> {
        Ok(Self {
            tickets,
            page_info: PageInfo::new(total, page, per_page)?,
        })
    }
}
