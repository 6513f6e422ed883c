//! Dashboard projection.

use crate::views::state::{ActivityKind, ViewState};
use crate::views::timefmt;
use chrono::{DateTime, Utc};
use serde::Serialize;
use wallet_types::GiftDirection;

/// Platform connections shown on the dashboard. The backend has no
/// connections endpoint; the count is a fixed display value.
pub const CONNECTED_PLATFORMS: u64 = 3;

/// One line in the recent-activity list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLine {
    pub kind: ActivityKind,
    pub title: String,
    pub detail: String,
    pub time_ago: String,
}

/// The dashboard screen: stat tiles plus recent activity.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub connected_platforms: u64,
    pub total_media: u64,
    pub gifts_received: u64,
    pub wallet_balance: u64,
    pub recent_activity: Vec<ActivityLine>,
}

#[must_use]
pub fn dashboard_view(state: &ViewState, now: DateTime<Utc>) -> DashboardView {
    let gifts_received = state
        .gifts
        .history
        .iter()
        .filter(|r| r.direction == GiftDirection::Received)
        .count() as u64;

    let recent_activity = state
        .activity
        .entries()
        .iter()
        .map(|entry| ActivityLine {
            kind: entry.kind,
            title: entry.title.clone(),
            detail: entry.detail.clone(),
            time_ago: timefmt::relative(now, entry.at),
        })
        .collect();

    DashboardView {
        connected_platforms: CONNECTED_PLATFORMS,
        total_media: state.media.items.len() as u64,
        gifts_received,
        wallet_balance: state.gifts.balance,
        recent_activity,
    }
}
