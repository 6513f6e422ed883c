//! Explore screen projection.

use crate::views::state::ViewState;
use serde::Serialize;
use std::collections::HashMap;

/// One trending hashtag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingTopic {
    /// Tag without the leading `#`.
    pub tag: String,
    pub posts: u64,
}

/// The explore screen.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExploreView {
    pub trending: Vec<TrendingTopic>,
}

/// Trending topics from hashtag frequency across the cached feed, most
/// used first, ties alphabetical.
#[must_use]
pub fn explore_view(state: &ViewState) -> ExploreView {
    let mut counts: HashMap<String, u64> = HashMap::new();
    for post in state.feed.posts() {
        for tag in &post.hashtags {
            *counts.entry(tag.clone()).or_default() += 1;
        }
    }
    let mut trending: Vec<TrendingTopic> = counts
        .into_iter()
        .map(|(tag, posts)| TrendingTopic { tag, posts })
        .collect();
    trending.sort_by(|a, b| b.posts.cmp(&a.posts).then_with(|| a.tag.cmp(&b.tag)));
    ExploreView { trending }
}
