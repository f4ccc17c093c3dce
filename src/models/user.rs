use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Customer,
    Agent,
    Admin,
}

impl Default for UserRole {
    fn default() -> Self {
        Self::Customer
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
    Suspended,
}

impl Default for UserStatus {
    fn default() -> Self {
        Self::Active
    }
}

/// Public display shape embedded in messages, conversations, and typing
/// signals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub username: String,
    pub full_name: String,
    pub role: UserRole,
    pub department: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct UserCreate {
    #[validate(length(min = 3, max = 50))]
    #[validate(custom(function = "validate_username"))]
    pub username: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 2, max = 100))]
    pub full_name: String,

    #[validate(length(min = 8, max = 128))]
    #[validate(custom(function = "validate_password"))]
    pub password: String,

    #[serde(default)]
    pub role: UserRole,

    #[serde(default)]
    pub status: UserStatus,

    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,

    #[validate(length(max = 50))]
    pub department: Option<String>,

    pub avatar_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct UserUpdate {
    #[validate(length(min = 3, max = 50))]
    #[validate(custom(function = "validate_username"))]
    pub username: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(min = 2, max = 100))]
    pub full_name: Option<String>,

    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,

    #[validate(length(max = 50))]
    pub department: Option<String>,

    pub avatar_url: Option<String>,

    pub status: Option<UserStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

impl UserResponse {
    /// Projection used wherever a sender or participant is embedded.
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            username: self.username.clone(),
            full_name: self.full_name.clone(),
            role: self.role,
            department: self.department.clone(),
            avatar_url: self.avatar_url.clone(),
        }
    }
}

fn validate_username(username: &str) -> Result<(), validator::ValidationError> {
    let ok = username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    if ok {
        Ok(())
    } else {
        Err(validator::ValidationError::new(
            "username must contain only alphanumeric characters, underscores, and hyphens",
        ))
    }
}

fn validate_password(password: &str) -> Result<(), validator::ValidationError> {
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if has_upper && has_lower && has_digit {
        Ok(())
    } else {
        Err(validator::ValidationError::new(
            "password must contain an uppercase letter, a lowercase letter, and a digit",
        ))
    }
}

// Optional leading +, then 10-15 digits with spaces, dashes, or parentheses.
fn validate_phone(phone: &str) -> Result<(), validator::ValidationError> {
    let rest = phone.strip_prefix('+').unwrap_or(phone);
    let chars_ok = rest
        .chars()
        .all(|c| c.is_ascii_digit() || c == ' ' || c == '-' || c == '(' || c == ')');

    if chars_ok && (10..=15).contains(&rest.chars().count()) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("phone number is not valid"))
    }
}
