//! Posts and comments.
//!
//! The backend has shipped a few revisions of the post shape; older bodies
//! use `likes`/`text`, newer ones `likesCount`/`content`. Serde aliases
//! accept both so a mixed feed still decodes.

use crate::ids::{PostId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The author subset embedded in posts and comments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostAuthor {
    pub id: UserId,
    pub username: String,
    #[serde(alias = "name")]
    pub display_name: String,
}

/// A post as served by `GET /api/posts`.
///
/// The remote backend is the source of truth; the client holds a transient
/// cached copy that is re-fetched wholesale after every mutating action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub author: PostAuthor,
    pub content: String,
    /// Optional media reference (URL).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default, alias = "likesCount")]
    pub likes: u64,
    #[serde(default, alias = "sharesCount")]
    pub shares: u64,
    #[serde(default)]
    pub comments: Vec<Comment>,
    /// Whether the current user has liked this post.
    #[serde(default)]
    pub is_liked: bool,
    pub created_at: DateTime<Utc>,
}

/// A comment embedded inside a post. Comments carry no identifier of their
/// own and are never addressed independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Missing for legacy comments that stored a bare author string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<PostAuthor>,
    #[serde(alias = "text")]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Comment {
    /// Display name for rendering, with the legacy fallback.
    #[must_use]
    pub fn author_name(&self) -> &str {
        self.author
            .as_ref()
            .map_or("Anonymous", |a| a.display_name.as_str())
    }
}

/// Body of `POST /api/posts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub content: String,
    pub user_id: UserId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
    #[serde(default)]
    pub hashtags: Vec<String>,
}

/// Body of `POST /api/posts/{id}/comments`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub content: String,
    pub user_id: UserId,
}

/// Extract `#hashtag` tokens from post content, without the leading `#`,
/// in order of first appearance and deduplicated.
#[must_use]
pub fn extract_hashtags(content: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for token in content.split_whitespace() {
        let Some(raw) = token.strip_prefix('#') else {
            continue;
        };
        let tag: String = raw
            .chars()
            .take_while(|c| c.is_alphanumeric() || *c == '_')
            .collect();
        if !tag.is_empty() && !tags.iter().any(|t| t.eq_ignore_ascii_case(&tag)) {
            tags.push(tag);
        }
    }
    tags
}
