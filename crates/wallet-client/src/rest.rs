//! REST implementation of the backend surface.

use crate::api::SocialWalletApi;
use crate::error::ClientError;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wallet_types::{
    HealthStatus, NewComment, NewPost, NewUser, Post, PostEnvelope, PostId, PostsEnvelope,
    Profile, ProfileEnvelope, ProfileUpdate, UpdateEnvelope, User, UserEnvelope, UserId,
    UsersEnvelope,
};

/// HTTP client for the Social Wallet backend.
///
/// Holds a shared `reqwest::Client`; cloning is cheap and clones share the
/// connection pool.
#[derive(Debug, Clone)]
pub struct RestClient {
    base_url: String,
    http: reqwest::Client,
}

/// Response envelope: `success` flag, optional server message, payload.
trait Envelope {
    type Payload;
    fn into_parts(self) -> (bool, Option<String>, Self::Payload);
}

macro_rules! impl_envelope {
    ($env:ty, $payload:ty, $field:ident) => {
        impl Envelope for $env {
            type Payload = $payload;
            fn into_parts(self) -> (bool, Option<String>, Self::Payload) {
                (self.success, self.error, self.$field)
            }
        }
    };
}

impl_envelope!(PostsEnvelope, Vec<Post>, posts);
impl_envelope!(PostEnvelope, Option<Post>, post);
impl_envelope!(UsersEnvelope, Vec<User>, users);
impl_envelope!(UserEnvelope, Option<User>, user);
impl_envelope!(ProfileEnvelope, Option<Profile>, profile);
impl_envelope!(UpdateEnvelope, Option<bool>, liked);

/// Accept or reject a decoded envelope.
///
/// Anything other than `success: true` is a rejection, carrying the server
/// message when the body has one and `HTTP {status}` otherwise.
fn accept<E: Envelope>(status: StatusCode, envelope: E) -> Result<E::Payload, ClientError> {
    let (success, error, payload) = envelope.into_parts();
    if success {
        return Ok(payload);
    }
    Err(ClientError::Rejected {
        status: status.as_u16(),
        message: error.unwrap_or_else(|| format!("HTTP {}", status.as_u16())),
    })
}

impl RestClient {
    /// The production backend.
    pub const DEFAULT_BASE_URL: &'static str = "https://squid-app-mky7a.ondigitalocean.app";

    /// Create a client against the given base URL (no trailing slash
    /// required).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// The base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<(StatusCode, T), ClientError> {
        tracing::debug!(%path, "api request: GET");
        let response = self.http.get(self.url(path)).send().await?;
        let status = response.status();
        let body = response.json::<T>().await?;
        Ok((status, body))
    }

    async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(StatusCode, T), ClientError> {
        tracing::debug!(%path, "api request: POST");
        let response = self.http.post(self.url(path)).json(body).send().await?;
        let status = response.status();
        let body = response.json::<T>().await?;
        Ok((status, body))
    }

    async fn put_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(StatusCode, T), ClientError> {
        tracing::debug!(%path, "api request: PUT");
        let response = self.http.put(self.url(path)).json(body).send().await?;
        let status = response.status();
        let body = response.json::<T>().await?;
        Ok((status, body))
    }
}

#[async_trait]
impl SocialWalletApi for RestClient {
    async fn health(&self) -> Result<HealthStatus, ClientError> {
        let (_status, body) = self.get_json::<HealthStatus>("/health").await?;
        Ok(body)
    }

    async fn list_users(&self) -> Result<Vec<User>, ClientError> {
        let (status, envelope) = self.get_json::<UsersEnvelope>("/api/users").await?;
        accept(status, envelope)
    }

    async fn create_user(&self, new_user: &NewUser) -> Result<User, ClientError> {
        let (status, envelope) = self
            .post_json::<UserEnvelope, _>("/api/users", new_user)
            .await?;
        accept(status, envelope)?.ok_or(ClientError::Malformed("user"))
    }

    async fn get_profile(&self, user_id: &UserId) -> Result<Profile, ClientError> {
        let path = format!("/api/profile?userId={user_id}");
        let (status, envelope) = self.get_json::<ProfileEnvelope>(&path).await?;
        accept(status, envelope)?.ok_or(ClientError::Malformed("profile"))
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<(), ClientError> {
        let (status, envelope) = self
            .put_json::<UpdateEnvelope, _>("/api/profile", update)
            .await?;
        accept(status, envelope).map(|_| ())
    }

    async fn list_posts(&self) -> Result<Vec<Post>, ClientError> {
        let (status, envelope) = self.get_json::<PostsEnvelope>("/api/posts").await?;
        accept(status, envelope)
    }

    async fn create_post(&self, new_post: &NewPost) -> Result<Option<Post>, ClientError> {
        let (status, envelope) = self
            .post_json::<PostEnvelope, _>("/api/posts", new_post)
            .await?;
        accept(status, envelope)
    }

    async fn add_comment(
        &self,
        post_id: &PostId,
        comment: &NewComment,
    ) -> Result<(), ClientError> {
        let path = format!("/api/posts/{post_id}/comments");
        let (status, envelope) = self.post_json::<UpdateEnvelope, _>(&path, comment).await?;
        accept(status, envelope).map(|_| ())
    }

    async fn toggle_like(&self, post_id: &PostId, user_id: &UserId) -> Result<bool, ClientError> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct LikeBody<'a> {
            user_id: &'a UserId,
        }
        let path = format!("/api/posts/{post_id}/like");
        let (status, envelope) = self
            .post_json::<UpdateEnvelope, _>(&path, &LikeBody { user_id })
            .await?;
        accept(status, envelope)?.ok_or(ClientError::Malformed("liked"))
    }
}
