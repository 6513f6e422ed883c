//! User intents and screen identifiers.

use serde::{Deserialize, Serialize};
use wallet_types::{NewUser, PostId};

/// Screen identifier for navigation.
///
/// Covers the social screens (feed, profile, explore) and the wallet
/// screens (dashboard, media library, gift center). `Auth` is the
/// unauthenticated screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Screen {
    /// Unauthenticated screen (login / signup / guest entry).
    #[default]
    Auth,
    Feed,
    Profile,
    Explore,
    Media,
    Gifts,
    Dashboard,
}

/// A user action, as dispatched by a frontend.
///
/// Each intent maps to one workflow; frontends that prefer direct calls can
/// use the functions in [`crate::workflows`] instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Intent {
    // =========================================================================
    // Session
    // =========================================================================
    /// Probe the backend and restore any persisted session.
    Initialize,
    /// Simulated login (no real authentication exists server-side).
    Login { email: String, password: String },
    /// Create an account via the backend.
    Signup { form: NewUser },
    /// Enter as a local guest.
    GuestLogin,
    /// Clear the persisted identity and return to the auth screen.
    Logout,

    // =========================================================================
    // Navigation
    // =========================================================================
    /// Switch the active screen and run its data loader.
    Navigate { screen: Screen },

    // =========================================================================
    // Feed
    // =========================================================================
    /// Refetch the feed from the backend.
    RefreshFeed,
    OpenComposer,
    CloseComposer,
    /// Replace the composer draft.
    SetDraft { content: String },
    /// Attach a media reference to the draft.
    AttachMedia { url: String },
    /// Drop the draft's media attachment.
    ClearMedia,
    /// Publish the current draft.
    SubmitPost,
    /// Comment on a post.
    SubmitComment { post_id: PostId, content: String },
    /// Optimistically toggle a like.
    ToggleLike { post_id: PostId },
    /// Produce a permalink for a post.
    SharePost { post_id: PostId },
    /// Report a post (acknowledged locally only).
    ReportPost { post_id: PostId },

    // =========================================================================
    // Profile
    // =========================================================================
    /// Fetch profile counters for the session user.
    LoadProfile,
    /// Save profile edits to the backend and the session record.
    SaveProfile {
        display_name: String,
        bio: String,
        location: String,
        website: String,
    },

    // =========================================================================
    // Wallet screens
    // =========================================================================
    /// Send a gift from the catalog.
    SendGift { gift_id: String, recipient: String },
    /// Add an item to the media library.
    AddMedia {
        url: String,
        caption: String,
        tags: Vec<String>,
    },

    // =========================================================================
    // Notifications
    // =========================================================================
    DismissToast { toast_id: String },
}
