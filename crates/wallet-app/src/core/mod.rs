//! # Core application module
//!
//! - [`AppCore`]: state ownership, observers, intent dispatch
//! - [`Intent`] / [`Screen`]: the user-action vocabulary
//! - [`AppError`] / [`ErrorCategory`]: workflow failures and toast routing

mod app;
mod error;
mod intent;

pub use app::AppCore;
pub use error::{AppError, ErrorCategory};
pub use intent::{Intent, Screen};
