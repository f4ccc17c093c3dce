pub mod user;
pub mod ticket;
pub mod message;
pub mod notification;

pub use user::*;
pub use ticket::*;
pub use message::*;
pub use notification::*;

use uuid::Uuid;

use crate::error::{ValidationError, ValidationResult};

/// Parse an identifier arriving as a path or query string.
pub fn parse_id(field: &'static str, value: &str) -> ValidationResult<Uuid> {
    Uuid::parse_str(value).map_err(|source| ValidationError::InvalidId { field, source })
}
