//! API response envelopes
//!
//! Most mutating endpoints wrap their payload in a `{ success, data, message }`
//! envelope; paginated list endpoints attach a pagination block. Endpoints
//! answering 204 have no envelope at all.

use serde::{Deserialize, Serialize};

/// Standard response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the server considered the call successful.
    #[serde(default = "default_success")]
    pub success: bool,
    /// The affected or requested resource.
    pub data: T,
    /// Optional human-readable message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

fn default_success() -> bool {
    true
}

impl<T> ApiResponse<T> {
    /// Wrap a payload in a successful envelope.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            message: None,
        }
    }

    /// Unwrap the payload, discarding the envelope.
    pub fn into_data(self) -> T {
        self.data
    }
}

/// Pagination block attached to paginated list responses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(rename = "totalItems")]
    pub total_items: u64,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
    #[serde(rename = "currentPage")]
    pub current_page: u32,
    #[serde(rename = "perPage")]
    pub per_page: u32,
}

impl Pagination {
    /// Whether a further page exists after the current one.
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Whether a page exists before the current one.
    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }
}
