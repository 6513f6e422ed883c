//! Response envelopes.
//!
//! Every `/api/*` response wraps its payload in a body carrying a `success`
//! boolean and, on rejection, an `error` message. Fields are defaulted so a
//! bare `{}` body (some error paths return one) still decodes, with
//! `success` reading as false.

use crate::post::Post;
use crate::user::{Profile, User};
use serde::{Deserialize, Serialize};

/// `GET /health` body. The probe is the one endpoint without an envelope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: String,
}

impl HealthStatus {
    /// The backend reports `"OK"` when reachable and serving.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == "OK"
    }
}

macro_rules! envelope {
    ($(#[$doc:meta])* $name:ident { $(#[$fdoc:meta])* $field:ident : $ty:ty }) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Default, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            #[serde(default)]
            pub success: bool,
            $(#[$fdoc])*
            #[serde(default)]
            pub $field: $ty,
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub error: Option<String>,
        }
    };
}

envelope! {
    /// `GET /api/posts` response.
    PostsEnvelope { posts: Vec<Post> }
}

envelope! {
    /// `POST /api/posts` response.
    PostEnvelope {
        /// The created post, when the backend echoes it back.
        post: Option<Post>
    }
}

envelope! {
    /// `GET /api/users` response.
    UsersEnvelope { users: Vec<User> }
}

envelope! {
    /// `POST /api/users` response.
    UserEnvelope { user: Option<User> }
}

envelope! {
    /// `GET /api/profile` response.
    ProfileEnvelope { profile: Option<Profile> }
}

envelope! {
    /// `POST .../comments`, `POST .../like`, `PUT /api/profile` responses.
    /// Like toggles additionally report the resulting liked flag.
    UpdateEnvelope { liked: Option<bool> }
}

/// Alias kept for call sites that read the like flag.
pub type LikeEnvelope = UpdateEnvelope;
