use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::error::{ValidationError, ValidationResult};
use crate::pagination::PageInfo;

use super::ticket::Attachment;
use super::user::UserProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    Text,
    File,
    Image,
    System,
}

impl Default for MessageType {
    fn default() -> Self {
        Self::Text
    }
}

impl MessageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::File => "file",
            Self::Image => "image",
            Self::System => "system",
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "file" => Ok(Self::File),
            "image" => Ok(Self::Image),
            "system" => Ok(Self::System),
            other => Err(ValidationError::UnknownLabel {
                field: "message_type",
                value: other.to_string(),
            }),
        }
    }
}

/// Delivery lifecycle state. Progression (`sent -> delivered -> read`, with
/// `failed` terminal) is enforced by the delivery subsystem, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    Sent,
    Delivered,
    Read,
    Failed,
}

impl Default for MessageStatus {
    fn default() -> Self {
        Self::Sent
    }
}

impl MessageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sent => "sent",
            Self::Delivered => "delivered",
            Self::Read => "read",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for MessageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sent" => Ok(Self::Sent),
            "delivered" => Ok(Self::Delivered),
            "read" => Ok(Self::Read),
            "failed" => Ok(Self::Failed),
            other => Err(ValidationError::UnknownLabel {
                field: "status",
                value: other.to_string(),
            }),
        }
    }
}

/// A message within a ticket conversation. Attachments and the reply target
/// are held as identifier references; the storage layer resolves them when
/// building views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub ticket_id: Uuid,
    pub sender_id: Uuid,
    pub content: String,
    pub message_type: MessageType,
    pub status: MessageStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_edited: bool,
    pub edited_at: Option<DateTime<Utc>>,
    pub attachment_ids: Vec<Uuid>,
    pub reply_to: Option<Uuid>,
}

impl Message {
    /// Materialize a new message from a validated creation payload. The
    /// identifier and clock come from the caller.
    pub fn create(
        id: Uuid,
        sender_id: Uuid,
        payload: MessageCreate,
        now: DateTime<Utc>,
    ) -> ValidationResult<Self> {
        payload.validate()?;

        Ok(Self {
            id,
            ticket_id: payload.ticket_id,
            sender_id,
            content: payload.content,
            message_type: payload.message_type,
            status: MessageStatus::default(),
            created_at: now,
            updated_at: now,
            is_edited: false,
            edited_at: None,
            attachment_ids: Vec::new(),
            reply_to: None,
        })
    }

    /// Apply an edit. `edited_at` moves in lockstep with `is_edited`, and
    /// `updated_at` is refreshed on every applied update.
    pub fn apply_update(
        &mut self,
        update: &MessageUpdate,
        now: DateTime<Utc>,
    ) -> ValidationResult<()> {
        update.validate()?;

        if let Some(content) = &update.content {
            self.content = content.clone();
        }
        self.is_edited = update.is_edited;
        self.edited_at = update.is_edited.then_some(now);
        self.updated_at = now;

        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct MessageCreate {
    #[validate(length(min = 1, max = 2000))]
    pub content: String,

    pub ticket_id: Uuid,

    #[serde(default)]
    pub message_type: MessageType,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct MessageUpdate {
    #[validate(length(min = 1, max = 2000))]
    pub content: Option<String>,

    #[serde(default = "default_true")]
    pub is_edited: bool,
}

fn default_true() -> bool {
    true
}

/// Full outward-facing view with the sender profile and attachments
/// resolved. Absent optionals serialize as explicit nulls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub id: Uuid,
    pub ticket_id: Uuid,
    pub sender: UserProfile,
    pub content: String,
    pub message_type: MessageType,
    pub status: MessageStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_edited: bool,
    pub edited_at: Option<DateTime<Utc>>,
    pub attachments: Vec<Attachment>,
    pub reply_to: Option<Uuid>,
}

impl MessageResponse {
    pub fn from_message(
        message: &Message,
        sender: UserProfile,
        attachments: Vec<Attachment>,
    ) -> Self {
        Self {
            id: message.id,
            ticket_id: message.ticket_id,
            sender,
            content: message.content.clone(),
            message_type: message.message_type,
            status: message.status,
            created_at: message.created_at,
            updated_at: message.updated_at,
            is_edited: message.is_edited,
            edited_at: message.edited_at,
            attachments,
            reply_to: message.reply_to,
        }
    }
}

/// Lighter projection for list views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageSummary {
    pub id: Uuid,
    pub content: String,
    pub sender: UserProfile,
    pub message_type: MessageType,
    pub created_at: DateTime<Utc>,
    pub attachments_count: i64,
}

impl MessageSummary {
    pub fn from_message(
        message: &Message,
        sender: UserProfile,
        attachments: &[Attachment],
    ) -> Self {
        Self {
            id: message.id,
            content: message.content.clone(),
            sender,
            message_type: message.message_type,
            created_at: message.created_at,
            attachments_count: attachments.len() as i64,
        }
    }
}

/// The whole conversation for a ticket, oldest message first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationResponse {
    pub ticket_id: Uuid,
    pub messages: Vec<MessageResponse>,
    pub total_messages: i64,
    pub participants: Vec<UserProfile>,
    pub last_activity: DateTime<Utc>,
}

impl ConversationResponse {
    /// `now` is the activity fallback for a conversation with no messages
    /// yet.
    pub fn new(
        ticket_id: Uuid,
        messages: Vec<MessageResponse>,
        participants: Vec<UserProfile>,
        now: DateTime<Utc>,
    ) -> Self {
        let last_activity = messages.last().map(|m| m.created_at).unwrap_or(now);

        Self {
            ticket_id,
            total_messages: messages.len() as i64,
            messages,
            participants,
            last_activity,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedMessages {
    pub messages: Vec<MessageResponse>,

    #[serde(flatten)]
    pub page_info: PageInfo,
}

impl PaginatedMessages {
    pub fn new(
        messages: Vec<MessageResponse>,
        total: i64,
        page: i64,
        per_page: i64,
    ) -> ValidationResult<Self> {
        Ok(Self {
            messages,
            page_info: PageInfo::new(total, page, per_page)?,
        })
    }
}

/// Transient signal for the realtime layer; never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypingStatus {
    pub ticket_id: Uuid,
    pub user: UserProfile,
    pub is_typing: bool,
    pub timestamp: DateTime<Utc>,
}

impl TypingStatus {
    pub fn new(
        ticket_id: Uuid,
        user: UserProfile,
        is_typing: bool,
        timestamp: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            ticket_id,
            user,
            is_typing,
            timestamp: timestamp.unwrap_or_else(Utc::now),
        }
    }
}
