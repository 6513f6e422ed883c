//! # Social Wallet Remote Client
//!
//! One async operation per backend capability, each issuing a single HTTP
//! request and resolving with a decoded payload or a [`ClientError`]. There
//! is deliberately no retry, no backoff, and no timeout layer: the
//! application core treats every failure the same way (surface a toast,
//! keep the prior state) and consistency comes from refetching.
//!
//! The [`SocialWalletApi`] trait is the seam the application core consumes;
//! [`RestClient`] is the production implementation.

mod api;
mod error;
mod rest;

pub use api::SocialWalletApi;
pub use error::ClientError;
pub use rest::RestClient;
