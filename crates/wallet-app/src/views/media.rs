//! Media library projection.

use crate::views::state::ViewState;
use crate::views::timefmt;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One tile in the media grid.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaTile {
    pub id: String,
    pub url: String,
    pub caption: String,
    pub tags: Vec<String>,
    pub uploaded: String,
}

/// The media library screen.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaView {
    pub tiles: Vec<MediaTile>,
    pub is_empty: bool,
}

#[must_use]
pub fn media_view(state: &ViewState, now: DateTime<Utc>) -> MediaView {
    let tiles: Vec<MediaTile> = state
        .media
        .items
        .iter()
        .map(|item| MediaTile {
            id: item.id.clone(),
            url: item.url.clone(),
            caption: item.caption.clone(),
            tags: item.tags.clone(),
            uploaded: timefmt::relative(now, item.uploaded_at),
        })
        .collect();
    MediaView {
        is_empty: tiles.is_empty(),
        tiles,
    }
}
