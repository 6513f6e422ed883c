//! Profile screen projection.

use crate::views::feed::{card_for, PostCard};
use crate::views::state::ViewState;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// The profile screen. `None` while unauthenticated.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub display_name: String,
    pub handle: String,
    pub bio: String,
    pub posts_count: u64,
    pub followers_count: u64,
    pub following_count: u64,
    /// The session user's own posts from the cached feed.
    pub own_posts: Vec<PostCard>,
}

/// Project the profile screen from the session user and any fetched
/// counters. Fetched profile fields win over the session copy when present.
#[must_use]
pub fn profile_view(state: &ViewState, now: DateTime<Utc>) -> Option<ProfileView> {
    let user = state.session.as_ref()?;
    let fetched = state.profile.as_ref();

    let pick = |remote: Option<&str>, local: &str| -> String {
        match remote {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => local.to_string(),
        }
    };

    let display_name = pick(fetched.map(|p| p.display_name.as_str()), &user.display_name);
    let username = pick(fetched.map(|p| p.username.as_str()), &user.username);
    let bio = pick(fetched.map(|p| p.bio.as_str()), &user.bio);

    let own_posts = state
        .feed
        .posts()
        .iter()
        .filter(|p| p.author.id == user.id)
        .map(|p| card_for(p, now))
        .collect();

    Some(ProfileView {
        display_name,
        handle: format!("@{username}"),
        bio: if bio.is_empty() {
            "No bio available".to_string()
        } else {
            bio
        },
        posts_count: fetched.map_or(0, |p| p.posts_count),
        followers_count: fetched.map_or(0, |p| p.followers_count),
        following_count: fetched.map_or(0, |p| p.following_count),
        own_posts,
    })
}
