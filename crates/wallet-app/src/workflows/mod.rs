//! # Workflows
//!
//! Free async functions over [`crate::AppCore`], one per user-visible
//! operation. Each follows the same shape: validate locally, issue the
//! remote call with no lock held, apply the response to state, and surface
//! failures as toasts. Every mutating feed action ends in a full refetch;
//! the backend stays the source of truth.

pub mod compose;
pub mod feed;
pub mod gifts;
pub mod media;
pub mod navigation;
pub mod profile;
pub mod session;
