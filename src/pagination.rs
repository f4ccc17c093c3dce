use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationResult};

/// Page bookkeeping shared by every paginated envelope. Embedded with
/// `#[serde(flatten)]` so the wire shape stays flat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub pages: i64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PageInfo {
    /// Derive page counts and cursors for a 1-indexed page over `total` items.
    pub fn new(total: i64, page: i64, per_page: i64) -> ValidationResult<Self> {
        if page < 1 || per_page < 1 {
            return Err(ValidationError::InvalidPagination { page, per_page });
        }
        if total < 0 {
            return Err(ValidationError::NegativeTotal(total));
        }

        let pages = (total + per_page - 1) / per_page;

        Ok(Self {
            total,
            page,
            per_page,
            pages,
            has_next: page < pages,
            has_prev: page > 1,
        })
    }
}
