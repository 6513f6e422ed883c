//! Feed projection.

use crate::views::state::ViewState;
use crate::views::timefmt;
use chrono::{DateTime, Utc};
use serde::Serialize;
use wallet_types::{Post, PostId};

/// A rendered post card.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostCard {
    pub id: PostId,
    pub author_name: String,
    pub author_handle: String,
    pub time_ago: String,
    pub content: String,
    pub media: Option<String>,
    pub hashtags: Vec<String>,
    pub likes: u64,
    pub shares: u64,
    pub comment_count: usize,
    pub is_liked: bool,
    pub comments: Vec<CommentLine>,
}

/// A rendered comment beneath a card.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentLine {
    pub author: String,
    pub content: String,
}

/// The feed screen.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedView {
    pub cards: Vec<PostCard>,
    /// True when the empty-feed placeholder should show instead of cards.
    pub is_empty: bool,
}

pub(crate) fn card_for(post: &Post, now: DateTime<Utc>) -> PostCard {
    PostCard {
        id: post.id.clone(),
        author_name: post.author.display_name.clone(),
        author_handle: format!("@{}", post.author.username),
        time_ago: timefmt::relative(now, post.created_at),
        content: post.content.clone(),
        media: post.media.clone(),
        hashtags: post.hashtags.clone(),
        likes: post.likes,
        shares: post.shares,
        comment_count: post.comments.len(),
        is_liked: post.is_liked,
        comments: post
            .comments
            .iter()
            .map(|c| CommentLine {
                author: c.author_name().to_string(),
                content: c.content.clone(),
            })
            .collect(),
    }
}

/// Project the cached feed into cards, newest data as fetched (the backend
/// owns ordering).
#[must_use]
pub fn feed_view(state: &ViewState, now: DateTime<Utc>) -> FeedView {
    let cards: Vec<PostCard> = state
        .feed
        .posts()
        .iter()
        .map(|p| card_for(p, now))
        .collect();
    FeedView {
        is_empty: cards.is_empty(),
        cards,
    }
}
