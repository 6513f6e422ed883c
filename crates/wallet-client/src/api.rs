//! The backend surface as a trait.
//!
//! The application core talks to this trait rather than to [`RestClient`]
//! directly so that flows can be exercised headlessly against a scripted
//! implementation.

use crate::error::ClientError;
use async_trait::async_trait;
use wallet_types::{
    HealthStatus, NewComment, NewPost, NewUser, Post, PostId, Profile, ProfileUpdate, User,
    UserId,
};

/// One operation per backend capability. Each implementation issues a single
/// request per call; callers own any refetch-for-consistency behavior.
#[async_trait]
pub trait SocialWalletApi: Send + Sync {
    /// `GET /health`.
    async fn health(&self) -> Result<HealthStatus, ClientError>;

    /// `GET /api/users`.
    async fn list_users(&self) -> Result<Vec<User>, ClientError>;

    /// `POST /api/users`.
    async fn create_user(&self, new_user: &NewUser) -> Result<User, ClientError>;

    /// `GET /api/profile?userId=`.
    async fn get_profile(&self, user_id: &UserId) -> Result<Profile, ClientError>;

    /// `PUT /api/profile`.
    async fn update_profile(&self, update: &ProfileUpdate) -> Result<(), ClientError>;

    /// `GET /api/posts`.
    async fn list_posts(&self) -> Result<Vec<Post>, ClientError>;

    /// `POST /api/posts`. The created post is returned when the backend
    /// echoes it; callers refetch the feed either way.
    async fn create_post(&self, new_post: &NewPost) -> Result<Option<Post>, ClientError>;

    /// `POST /api/posts/{id}/comments`.
    async fn add_comment(&self, post_id: &PostId, comment: &NewComment)
        -> Result<(), ClientError>;

    /// `POST /api/posts/{id}/like`. Returns the resulting liked flag.
    async fn toggle_like(&self, post_id: &PostId, user_id: &UserId) -> Result<bool, ClientError>;
}
