//! Bug storage abstraction.
//!
//! This module defines the data layer interface the terminal UI drives,
//! along with the bug data types and error handling. The UI treats every
//! mutation as an opaque, synchronous operation that either succeeds or fails.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::constants::SHORT_ID_LEN;

pub mod cache;

pub use cache::BugCache;

/// Common error types for storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Bug not found: {0}")]
    NotFound(BugId),

    #[error("Invalid title: {0}")]
    InvalidTitle(String),

    #[error("Invalid message: {0}")]
    InvalidMessage(String),

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage format error: {0}")]
    Format(#[from] serde_json::Error),
}

/// Unique bug identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BugId(Uuid);

impl BugId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Abbreviated form used in lists and headers
    pub fn short(&self) -> String {
        self.0.simple().to_string().chars().take(SHORT_ID_LEN).collect()
    }
}

impl Default for BugId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BugId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Open,
    Closed,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Open => write!(f, "open"),
            Status::Closed => write!(f, "closed"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub author: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Snapshot of a bug. The first comment holds the creation message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bug {
    pub id: BugId,
    pub title: String,
    pub status: Status,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub edited_at: DateTime<Utc>,
    pub comments: Vec<Comment>,
}

impl Bug {
    /// Number of comments after the creation message
    pub fn reply_count(&self) -> usize {
        self.comments.len().saturating_sub(1)
    }
}

/// Data layer consumed by the terminal UI.
///
/// All operations are synchronous. A failed mutation is fatal for the UI:
/// it is surfaced to the caller of [`crate::ui::run`] without retry.
pub trait BugStore {
    /// All bugs, most recently edited first
    fn bugs(&self) -> Result<Vec<Bug>, StoreError>;

    /// Current snapshot of one bug
    fn snapshot(&self, id: &BugId) -> Result<Bug, StoreError>;

    fn create_bug(&mut self, title: &str, message: &str) -> Result<BugId, StoreError>;

    fn add_comment(&mut self, id: &BugId, message: &str) -> Result<(), StoreError>;

    fn set_title(&mut self, id: &BugId, title: &str) -> Result<(), StoreError>;
}
