//! Application view state.
//!
//! One plain data tree, owned by [`crate::AppCore`] behind a lock and
//! cloned out as a snapshot for observers. The view projections in the
//! sibling modules read from here and hold no state of their own.

use crate::core::Screen;
use crate::views::notifications::Notifications;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use wallet_types::{Gift, GiftRecord, MediaItem, Post, PostId, Profile, User, UserId};

/// The whole client-side application state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    /// Active screen; `Auth` until a session exists.
    pub screen: Screen,
    /// The signed-in (or guest) user, mirrored by the identity store.
    pub session: Option<User>,
    /// Profile counters fetched from the backend, when loaded.
    pub profile: Option<Profile>,
    pub feed: FeedState,
    pub compose: ComposeState,
    pub gifts: GiftState,
    pub media: MediaState,
    pub activity: ActivityLog,
    pub notifications: Notifications,
    /// Bumped on every mutation; lets observers detect staleness.
    pub revision: u64,
}

impl ViewState {
    /// The id used for feed actions: the session user, or the backend's
    /// well-known guest id when no session exists.
    #[must_use]
    pub fn actor_id(&self) -> UserId {
        self.session
            .as_ref()
            .map_or_else(|| UserId::new("guest"), |u| u.id.clone())
    }
}

/// The cached feed. The backend is the source of truth; this copy is
/// replaced wholesale by every refetch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedState {
    posts: Vec<Post>,
}

impl FeedState {
    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    #[must_use]
    pub fn post(&self, id: &PostId) -> Option<&Post> {
        self.posts.iter().find(|p| &p.id == id)
    }

    /// Replace the cached feed with a fresh fetch.
    pub fn set_posts(&mut self, posts: Vec<Post>) {
        self.posts = posts;
    }

    /// Tentatively flip the liked flag of a post, adjusting its like count,
    /// and return the prior flag. `None` when the post is not in the cache.
    pub fn apply_like_flip(&mut self, id: &PostId) -> Option<bool> {
        let post = self.posts.iter_mut().find(|p| &p.id == id)?;
        let prior = post.is_liked;
        if prior {
            post.likes = post.likes.saturating_sub(1);
        } else {
            post.likes += 1;
        }
        post.is_liked = !prior;
        Some(prior)
    }

    /// Roll a tentative flip back to the recorded prior flag. A refetch may
    /// already have replaced the cache, in which case this is a no-op.
    pub fn revert_like_flip(&mut self, id: &PostId, prior: bool) {
        if let Some(post) = self.posts.iter_mut().find(|p| &p.id == id) {
            if post.is_liked != prior {
                if post.is_liked {
                    post.likes = post.likes.saturating_sub(1);
                } else {
                    post.likes += 1;
                }
                post.is_liked = prior;
            }
        }
    }
}

/// The post composer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposeState {
    pub is_open: bool,
    pub draft: String,
    /// Attached media reference, if any.
    pub media: Option<String>,
}

impl ComposeState {
    /// Close the composer and discard the draft and attachment.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Gift center state: coin balance, the static catalog, and history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftState {
    pub balance: u64,
    pub catalog: Vec<Gift>,
    /// Newest first.
    pub history: Vec<GiftRecord>,
}

impl GiftState {
    /// Starting coin balance of a fresh session.
    pub const STARTING_BALANCE: u64 = 1250;
}

impl Default for GiftState {
    fn default() -> Self {
        Self {
            balance: Self::STARTING_BALANCE,
            catalog: Gift::catalog(),
            history: Vec::new(),
        }
    }
}

/// Session-local media library.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaState {
    /// Newest first.
    pub items: Vec<MediaItem>,
}

/// What a recent-activity entry is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActivityKind {
    Upload,
    Gift,
    Profile,
}

/// One line in the dashboard's recent-activity list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    pub kind: ActivityKind,
    pub title: String,
    pub detail: String,
    pub at: DateTime<Utc>,
}

/// Append-only in-session activity log, newest first, capped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityLog {
    entries: Vec<ActivityEntry>,
}

impl ActivityLog {
    /// Entries kept before the oldest falls off.
    pub const CAPACITY: usize = 20;

    pub fn record(
        &mut self,
        kind: ActivityKind,
        title: impl Into<String>,
        detail: impl Into<String>,
        at: DateTime<Utc>,
    ) {
        self.entries.insert(
            0,
            ActivityEntry {
                kind,
                title: title.into(),
                detail: detail.into(),
                at,
            },
        );
        self.entries.truncate(Self::CAPACITY);
    }

    #[must_use]
    pub fn entries(&self) -> &[ActivityEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use wallet_types::PostAuthor;

    fn post(id: &str, liked: bool, likes: u64) -> Post {
        Post {
            id: PostId::new(id),
            author: PostAuthor {
                id: UserId::new("usr_1"),
                username: "ada".into(),
                display_name: "Ada".into(),
            },
            content: "hello".into(),
            media: None,
            hashtags: vec![],
            likes,
            shares: 0,
            comments: vec![],
            is_liked: liked,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn like_flip_and_revert_are_symmetric() {
        let mut feed = FeedState::default();
        feed.set_posts(vec![post("p1", false, 4)]);

        let prior = feed.apply_like_flip(&PostId::new("p1")).unwrap();
        assert!(!prior);
        assert!(feed.post(&PostId::new("p1")).unwrap().is_liked);
        assert_eq!(feed.post(&PostId::new("p1")).unwrap().likes, 5);

        feed.revert_like_flip(&PostId::new("p1"), prior);
        assert!(!feed.post(&PostId::new("p1")).unwrap().is_liked);
        assert_eq!(feed.post(&PostId::new("p1")).unwrap().likes, 4);
    }

    #[test]
    fn revert_after_refetch_is_a_no_op() {
        let mut feed = FeedState::default();
        feed.set_posts(vec![post("p1", false, 4)]);
        let prior = feed.apply_like_flip(&PostId::new("p1")).unwrap();

        // A refetch lands before the failure is observed.
        feed.set_posts(vec![post("p1", false, 4)]);
        feed.revert_like_flip(&PostId::new("p1"), prior);
        assert_eq!(feed.post(&PostId::new("p1")).unwrap().likes, 4);
    }

    #[test]
    fn flip_on_unknown_post_reports_none() {
        let mut feed = FeedState::default();
        assert!(feed.apply_like_flip(&PostId::new("nope")).is_none());
    }

    #[test]
    fn activity_log_keeps_newest_first_and_caps() {
        let mut log = ActivityLog::default();
        let now = Utc::now();
        for i in 0..(ActivityLog::CAPACITY + 5) {
            log.record(ActivityKind::Upload, format!("entry {i}"), "", now);
        }
        assert_eq!(log.entries().len(), ActivityLog::CAPACITY);
        assert_eq!(log.entries()[0].title, "entry 24");
    }
}
