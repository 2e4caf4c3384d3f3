//! Result wrapper returned by the repository facades.

use crate::Pagination;
use serde::{Deserialize, Serialize};

/// A human-readable outcome message plus an optional page of results.
///
/// Every mutating repository operation returns the refreshed page with its
/// message so a UI can repaint without a second round trip. The pagination
/// is absent when the operation failed before (or instead of) producing a
/// page: conflicts, validation rejections, and storage failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRecord<T> {
    /// Human-readable outcome; absent on plain list success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_message: Option<String>,
    /// The refreshed page, when one was computed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination<T>>,
}

impl<T> RawRecord<T> {
    /// Creates a record carrying only a message.
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            server_message: Some(message.into()),
            pagination: None,
        }
    }

    /// Creates a record carrying only a page.
    #[must_use]
    pub fn with_pagination(pagination: Pagination<T>) -> Self {
        Self {
            server_message: None,
            pagination: Some(pagination),
        }
    }

    /// Creates a record carrying a message and a refreshed page.
    #[must_use]
    pub fn success(message: impl Into<String>, pagination: Pagination<T>) -> Self {
        Self {
            server_message: Some(message.into()),
            pagination: Some(pagination),
        }
    }

    /// Returns true if a page was computed.
    #[must_use]
    pub const fn has_pagination(&self) -> bool {
        self.pagination.is_some()
    }
}

impl<T> Default for RawRecord<T> {
    fn default() -> Self {
        Self {
            server_message: None,
            pagination: None,
        }
    }
}
