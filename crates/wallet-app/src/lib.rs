//! # Social Wallet Application Core
//!
//! Headless client core for the Social Wallet backend: application state,
//! the optimistic-update protocol, screen navigation, and pure view
//! projections, with no rendering layer attached.
//!
//! ## Flow
//!
//! ```text
//! Intent → workflow → remote call → state update → observers → projections
//! ```
//!
//! Frontends dispatch an [`Intent`] (or call a workflow directly), observe
//! state changes through [`StateObserver`], and render the view-models
//! produced by the functions in [`views`]. The remote backend stays the
//! source of truth: every mutating action is followed by a full feed
//! refetch, and optimistic changes are rolled back when the backend rejects
//! them.

pub mod config;
pub mod core;
pub mod identity;
pub mod observer;
pub mod views;
pub mod workflows;

pub use config::AppConfig;
pub use core::{AppCore, AppError, ErrorCategory, Intent, Screen};
pub use identity::{IdentityError, IdentityStore, SessionStorage};
pub use observer::StateObserver;
pub use views::{Toast, ToastLevel, ViewState};
