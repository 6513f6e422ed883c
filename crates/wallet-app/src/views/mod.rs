//! # View state and projections
//!
//! [`ViewState`] is the single state tree the core owns; everything else in
//! this module is a pure function from that tree (plus a clock) to a
//! serializable view-model. No projection touches the network or mutates
//! state, so every screen can be rendered and tested headlessly.

mod state;

pub mod compose;
pub mod dashboard;
pub mod explore;
pub mod feed;
pub mod gifts;
pub mod media;
pub mod notifications;
pub mod profile;
pub mod timefmt;

pub use state::{
    ActivityEntry, ActivityKind, ActivityLog, ComposeState, FeedState, GiftState, MediaState,
    ViewState,
};

pub use compose::{compose_view, ComposeView, MAX_POST_CHARS};
pub use dashboard::{dashboard_view, DashboardView};
pub use explore::{explore_view, ExploreView, TrendingTopic};
pub use feed::{feed_view, CommentLine, FeedView, PostCard};
pub use gifts::{gifts_view, GiftLine, GiftsView};
pub use media::{media_view, MediaTile, MediaView};
pub use notifications::{Notifications, Toast, ToastLevel};
pub use profile::{profile_view, ProfileView};
