//! # Social Wallet Types
//!
//! Domain and wire types shared between the remote client and the
//! application core. All wire types serialize with camelCase field names to
//! match the backend's JSON, and response envelopes carry the backend's
//! `success` boolean alongside the payload.

pub mod envelope;
pub mod gift;
pub mod ids;
pub mod media;
pub mod post;
pub mod user;

pub use envelope::{
    HealthStatus, LikeEnvelope, PostEnvelope, PostsEnvelope, ProfileEnvelope, UpdateEnvelope,
    UserEnvelope, UsersEnvelope,
};
pub use gift::{Gift, GiftDirection, GiftRecord};
pub use ids::{PostId, UserId};
pub use media::MediaItem;
pub use post::{extract_hashtags, Comment, NewComment, NewPost, Post, PostAuthor};
pub use user::{NewUser, Profile, ProfileUpdate, User};
