//! Media library items.
//!
//! The backend exposes no media surface; items live only for the duration of
//! the session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A photo or video in the local media library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub id: String,
    /// Object or data URL of the media.
    pub url: String,
    pub caption: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub uploaded_at: DateTime<Utc>,
}

impl MediaItem {
    /// Create a library item with a fresh local id.
    #[must_use]
    pub fn new(
        url: impl Into<String>,
        caption: impl Into<String>,
        tags: Vec<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: format!("media_{}", Uuid::new_v4().simple()),
            url: url.into(),
            caption: caption.into(),
            tags,
            uploaded_at: now,
        }
    }
}
